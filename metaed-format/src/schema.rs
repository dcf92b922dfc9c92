//! Key dispatch table for the game schema.
//!
//! Every known key maps to one handler. Keys are compared lower-cased with
//! `_` treated as `-`, so `sort_title`, `Sort-Title` and `sort-title` are the
//! same key. Two key families are matched by prefix instead: `assets.<role>`
//! and `x-<anything>`.

use std::collections::BTreeSet;

use metaed_core::{Game, Issue, IssueKind, Pair, ParseErrorCb};

use crate::error::ValueError;
use crate::value;

pub const TITLE: &str = "title";
pub const SORT_TITLE: &str = "sort-title";
pub const SUMMARY: &str = "summary";
pub const DESCRIPTION: &str = "description";
pub const RELEASE: &str = "release";
pub const DEVELOPERS: &str = "developers";
pub const PUBLISHERS: &str = "publishers";
pub const GENRES: &str = "genres";
pub const PLAYERS: &str = "players";
pub const RATING: &str = "rating";
pub const PLAY_COUNT: &str = "play-count";
pub const LAST_PLAYED: &str = "last-played";
pub const TAGS: &str = "tags";
pub const FILES: &str = "files";
pub const LAUNCH: &str = "launch";
pub const WORKDIR: &str = "workdir";

/// Prefix of asset keys, followed by an asset role.
pub const ASSET_PREFIX: &str = "assets.";
/// Prefix of extension keys, kept verbatim on the game.
pub const EXTRA_PREFIX: &str = "x-";

type Handler = fn(&mut Game, &Pair, &mut dyn FnMut(Issue));

/// One schema field: its canonical key, accepted aliases, and handler.
pub struct Field {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Takes one value per entry; a repeated key is reported.
    pub single: bool,
    handler: Handler,
}

impl Field {
    const fn single(name: &'static str, aliases: &'static [&'static str], handler: Handler) -> Self {
        Self { name, aliases, single: true, handler }
    }

    const fn multi(name: &'static str, aliases: &'static [&'static str], handler: Handler) -> Self {
        Self { name, aliases, single: false, handler }
    }

    pub(crate) fn apply(&self, game: &mut Game, pair: &Pair, on_issue: ParseErrorCb<'_>) {
        (self.handler)(game, pair, on_issue)
    }

    fn matches(&self, key: &str) -> bool {
        self.name == key || self.aliases.contains(&key)
    }
}

static FIELDS: &[Field] = &[
    Field::single(TITLE, &["game", "name"], set_title),
    Field::single(SORT_TITLE, &["sort-by", "sorttitle"], set_sort_title),
    Field::single(SUMMARY, &[], set_summary),
    Field::single(DESCRIPTION, &["desc"], set_description),
    Field::single(RELEASE, &["release-date", "releasedate"], set_release),
    Field::multi(DEVELOPERS, &["developer"], add_developers),
    Field::multi(PUBLISHERS, &["publisher"], add_publishers),
    Field::multi(GENRES, &["genre"], add_genres),
    Field::single(PLAYERS, &["player-count"], set_players),
    Field::single(RATING, &[], set_rating),
    Field::single(PLAY_COUNT, &["playcount"], set_play_count),
    Field::single(LAST_PLAYED, &["lastplayed"], set_last_played),
    Field::multi(TAGS, &["tag"], add_tags),
    Field::multi(FILES, &["file"], add_files),
    Field::single(LAUNCH, &["command"], set_launch),
    Field::single(WORKDIR, &["cwd", "working-directory"], set_workdir),
];

/// Lower-case and turn `_` into `-`.
pub fn canonical_key(key: &str) -> String {
    key.trim().to_lowercase().replace('_', "-")
}

/// Find the schema field for an already-canonical key.
pub fn lookup(key: &str) -> Option<&'static Field> {
    FIELDS.iter().find(|f| f.matches(key))
}

/// All fields in table order.
pub fn fields() -> &'static [Field] {
    FIELDS
}

// ── Shared helpers ──────────────────────────────────────────────────────────

/// First value of a single-valued field. Extra values are reported once.
fn scalar<'p>(pair: &'p Pair, on_issue: ParseErrorCb<'_>) -> Option<&'p str> {
    if pair.values.len() > 1 {
        on_issue(Issue::new(
            IssueKind::MultipleValuesForScalar,
            &pair.key,
            Some(pair.line),
            format!(
                "`{}` takes a single value but {} were given; keeping the first",
                pair.key,
                pair.values.len()
            ),
        ));
    }
    pair.first().map(str::trim).filter(|v| !v.is_empty())
}

fn report(pair: &Pair, err: ValueError, on_issue: ParseErrorCb<'_>) {
    on_issue(Issue::new(err.kind(), &pair.key, Some(pair.line), err.to_string()));
}

fn non_empty(pair: &Pair) -> impl Iterator<Item = &str> {
    pair.values.iter().map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn merge_set(set: &mut BTreeSet<String>, pair: &Pair) {
    set.extend(non_empty(pair).map(str::to_string));
}

// ── Handlers ────────────────────────────────────────────────────────────────

fn set_title(game: &mut Game, pair: &Pair, on_issue: ParseErrorCb<'_>) {
    if let Some(v) = scalar(pair, on_issue) {
        game.title = v.to_string();
    }
}

fn set_sort_title(game: &mut Game, pair: &Pair, on_issue: ParseErrorCb<'_>) {
    if let Some(v) = scalar(pair, on_issue) {
        game.sort_title = Some(v.to_string());
    }
}

fn set_summary(game: &mut Game, pair: &Pair, on_issue: ParseErrorCb<'_>) {
    if let Some(v) = scalar(pair, on_issue) {
        game.summary = Some(v.to_string());
    }
}

fn set_description(game: &mut Game, pair: &Pair, on_issue: ParseErrorCb<'_>) {
    if let Some(v) = scalar(pair, on_issue) {
        game.description = Some(v.to_string());
    }
}

fn set_release(game: &mut Game, pair: &Pair, on_issue: ParseErrorCb<'_>) {
    let Some(text) = scalar(pair, on_issue) else {
        return;
    };
    match value::parse_release_date(text) {
        Ok(date) => game.release_date = Some(date),
        Err(e) => report(pair, e, on_issue),
    }
}

fn set_players(game: &mut Game, pair: &Pair, on_issue: ParseErrorCb<'_>) {
    let Some(text) = scalar(pair, on_issue) else {
        return;
    };
    match value::parse_player_count(text) {
        Ok(range) => game.player_count = Some(range),
        Err(e) => report(pair, e, on_issue),
    }
}

fn set_rating(game: &mut Game, pair: &Pair, on_issue: ParseErrorCb<'_>) {
    let Some(text) = scalar(pair, on_issue) else {
        return;
    };
    match value::parse_rating(text) {
        Ok(rating) if (0.0..=1.0).contains(&rating) => game.rating = Some(rating),
        Ok(rating) => {
            let clamped = rating.clamp(0.0, 1.0);
            game.rating = Some(clamped);
            on_issue(Issue::new(
                IssueKind::ValueClamped,
                &pair.key,
                Some(pair.line),
                format!("rating '{}' is outside 0..1; clamped to {}", text, clamped),
            ));
        }
        Err(e) => report(pair, e, on_issue),
    }
}

fn set_play_count(game: &mut Game, pair: &Pair, on_issue: ParseErrorCb<'_>) {
    let Some(text) = scalar(pair, on_issue) else {
        return;
    };
    match value::parse_count(text) {
        Ok(count) => game.play_count = Some(count),
        Err(e) => report(pair, e, on_issue),
    }
}

fn set_last_played(game: &mut Game, pair: &Pair, on_issue: ParseErrorCb<'_>) {
    let Some(text) = scalar(pair, on_issue) else {
        return;
    };
    match value::parse_timestamp(text) {
        Ok(ts) => game.last_played = Some(ts),
        Err(e) => report(pair, e, on_issue),
    }
}

fn add_developers(game: &mut Game, pair: &Pair, _: ParseErrorCb<'_>) {
    merge_set(&mut game.developers, pair);
}

fn add_publishers(game: &mut Game, pair: &Pair, _: ParseErrorCb<'_>) {
    merge_set(&mut game.publishers, pair);
}

fn add_genres(game: &mut Game, pair: &Pair, _: ParseErrorCb<'_>) {
    merge_set(&mut game.genres, pair);
}

fn add_tags(game: &mut Game, pair: &Pair, _: ParseErrorCb<'_>) {
    merge_set(&mut game.tags, pair);
}

fn add_files(game: &mut Game, pair: &Pair, _: ParseErrorCb<'_>) {
    for path in non_empty(pair) {
        game.add_file(path);
    }
}

fn set_launch(game: &mut Game, pair: &Pair, on_issue: ParseErrorCb<'_>) {
    if let Some(v) = scalar(pair, on_issue) {
        game.launch_cmd = Some(v.to_string());
    }
}

fn set_workdir(game: &mut Game, pair: &Pair, on_issue: ParseErrorCb<'_>) {
    if let Some(v) = scalar(pair, on_issue) {
        game.workdir = Some(v.to_string());
    }
}
