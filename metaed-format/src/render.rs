//! Canonical text output for a [`Game`].
//!
//! Fields are written in a fixed order, unset fields are left out, and every
//! multi-valued field uses the `key:` + indented list form, so rendering the
//! same game twice gives byte-identical output.

use metaed_core::{AssetRole, Game, Issue, IssueKind, WriteErrorCb};

use crate::schema::{self, ASSET_PREFIX};
use crate::value;

const INDENT: &str = "  ";

/// Render a game as metadata text.
///
/// Always returns text. A missing title, or field values that cannot be
/// written faithfully, are reported through `on_issue`.
pub fn render_game(game: &Game, on_issue: WriteErrorCb<'_>) -> String {
    let mut out = String::new();

    if game.is_complete() {
        write_scalar(&mut out, schema::TITLE, &game.title);
    } else {
        on_issue(Issue::new(
            IssueKind::MissingRequiredField,
            schema::TITLE,
            None,
            "game has no title; title line omitted",
        ));
    }
    if let Some(ref sort_title) = game.sort_title {
        write_scalar(&mut out, schema::SORT_TITLE, sort_title);
    }
    if let Some(ref summary) = game.summary {
        write_scalar(&mut out, schema::SUMMARY, summary);
    }
    if let Some(ref desc) = game.description {
        write_scalar(&mut out, schema::DESCRIPTION, desc);
    }
    if let Some(ref date) = game.release_date {
        write_scalar(&mut out, schema::RELEASE, &value::format_release_date(date));
    }

    write_list(&mut out, schema::DEVELOPERS, &game.developers, on_issue);
    write_list(&mut out, schema::PUBLISHERS, &game.publishers, on_issue);
    write_list(&mut out, schema::GENRES, &game.genres, on_issue);

    if let Some(players) = game.player_count {
        if players.min >= 1 && players.min <= players.max {
            write_scalar(&mut out, schema::PLAYERS, &players.to_string());
        } else {
            on_issue(Issue::new(
                IssueKind::MalformedRange,
                schema::PLAYERS,
                None,
                format!(
                    "player range {}-{} is invalid; players line omitted",
                    players.min, players.max
                ),
            ));
        }
    }

    if let Some(rating) = game.rating {
        write_rating(&mut out, rating, on_issue);
    }
    if let Some(count) = game.play_count {
        write_scalar(&mut out, schema::PLAY_COUNT, &count.to_string());
    }
    if let Some(ref ts) = game.last_played {
        write_scalar(&mut out, schema::LAST_PLAYED, &value::format_timestamp(ts));
    }

    write_list(&mut out, schema::TAGS, &game.tags, on_issue);
    write_list(&mut out, schema::FILES, &game.files, on_issue);

    if let Some(ref cmd) = game.launch_cmd {
        write_scalar(&mut out, schema::LAUNCH, cmd);
    }
    if let Some(ref dir) = game.workdir {
        write_scalar(&mut out, schema::WORKDIR, dir);
    }

    for (role, paths) in group_assets(game) {
        let key = format!("{}{}", ASSET_PREFIX, role.slug());
        write_list(&mut out, &key, paths, on_issue);
    }
    for field in &game.extra {
        write_list(&mut out, &field.key, &field.values, on_issue);
    }

    out
}

fn write_rating(out: &mut String, rating: f32, on_issue: WriteErrorCb<'_>) {
    if rating.is_nan() {
        on_issue(Issue::new(
            IssueKind::MalformedNumber,
            schema::RATING,
            None,
            "rating is not a number; rating line omitted",
        ));
        return;
    }
    let clamped = rating.clamp(0.0, 1.0);
    if clamped != rating {
        on_issue(Issue::new(
            IssueKind::ValueClamped,
            schema::RATING,
            None,
            format!("rating {} is outside 0..1; written as {}", rating, clamped),
        ));
    }
    write_scalar(out, schema::RATING, &value::format_rating(clamped));
}

/// Assets grouped by role, roles in order of first appearance.
fn group_assets(game: &Game) -> Vec<(AssetRole, Vec<&str>)> {
    let mut groups: Vec<(AssetRole, Vec<&str>)> = Vec::new();
    for asset in &game.assets {
        match groups.iter_mut().find(|(role, _)| *role == asset.role) {
            Some((_, paths)) => paths.push(&asset.path),
            None => groups.push((asset.role, vec![&asset.path])),
        }
    }
    groups
}

fn write_scalar(out: &mut String, key: &str, value: &str) {
    let value = single_line(value);
    if value.is_empty() {
        return;
    }
    out.push_str(key);
    out.push_str(": ");
    out.push_str(&value);
    out.push('\n');
}

/// Write `key:` followed by one indented line per value.
///
/// An indented line starting with `#` reads back as a comment, so a leading
/// `#` value goes on the key line instead. Any later `#` value is reported
/// and left out.
fn write_list<I, S>(out: &mut String, key: &str, values: I, on_issue: WriteErrorCb<'_>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values: Vec<String> = values
        .into_iter()
        .map(|v| single_line(v.as_ref()))
        .filter(|v| !v.is_empty())
        .collect();
    if values.is_empty() {
        return;
    }

    out.push_str(key);
    if values[0].starts_with('#') {
        out.push_str(": ");
        out.push_str(&values.remove(0));
    } else {
        out.push(':');
    }
    out.push('\n');

    for v in values {
        if v.starts_with('#') {
            on_issue(Issue::new(
                IssueKind::UnwritableValue,
                key,
                None,
                format!("value '{}' would read back as a comment; left out", v),
            ));
            continue;
        }
        out.push_str(INDENT);
        out.push_str(&v);
        out.push('\n');
    }
}

/// Collapse line breaks so a value always fits on one line.
fn single_line(value: &str) -> String {
    value
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
