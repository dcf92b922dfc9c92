use metaed_core::{AssetRole, Entry, Game, Issue, IssueKind, Pair, ParseErrorCb};

use crate::schema::{self, ASSET_PREFIX, EXTRA_PREFIX};

/// Build a new game from one entry.
///
/// Same as calling [`parse_game_entry`] on a default [`Game`].
pub fn new_game(entry: &Entry, on_issue: ParseErrorCb<'_>) -> Game {
    let mut game = Game::default();
    parse_game_entry(entry, &mut game, on_issue);
    game
}

/// Apply an entry to an existing game.
///
/// Single-valued fields take the entry's value; multi-valued fields are
/// merged into what the game already has. Within one entry the first pair
/// for a single-valued field wins and repeats are reported. Keys that cannot
/// be interpreted are reported and skipped. A missing title is not reported
/// here, see [`validate_game`].
pub fn parse_game_entry(entry: &Entry, game: &mut Game, on_issue: ParseErrorCb<'_>) {
    let mut seen: Vec<&'static str> = Vec::new();

    for pair in &entry.pairs {
        let key = schema::canonical_key(&pair.key);

        if let Some(field) = schema::lookup(&key) {
            if field.single {
                if seen.contains(&field.name) {
                    repeated_scalar(pair, field.name, on_issue);
                    continue;
                }
                seen.push(field.name);
            }
            field.apply(game, pair, on_issue);
        } else if let Some(role) = key.strip_prefix(ASSET_PREFIX) {
            match role.parse::<AssetRole>() {
                Ok(role) => {
                    for path in pair.values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
                        game.add_asset(role, path);
                    }
                }
                Err(e) => unknown_key(pair, &e.to_string(), on_issue),
            }
        } else if key.starts_with(EXTRA_PREFIX) {
            for value in pair.values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
                game.add_extra(&pair.key, value);
            }
        } else {
            unknown_key(pair, "not a game field", on_issue);
        }
    }
}

/// Report required fields that are missing.
///
/// Call this when a complete record is needed; parsing alone never does.
pub fn validate_game(game: &Game, on_issue: ParseErrorCb<'_>) {
    if !game.is_complete() {
        on_issue(Issue::new(
            IssueKind::MissingRequiredField,
            schema::TITLE,
            None,
            "game has no title",
        ));
    }
}

fn unknown_key(pair: &Pair, reason: &str, on_issue: ParseErrorCb<'_>) {
    on_issue(Issue::new(
        IssueKind::UnknownKey,
        &pair.key,
        Some(pair.line),
        format!("unrecognized key `{}` ({})", pair.key, reason),
    ));
}

fn repeated_scalar(pair: &Pair, field: &str, on_issue: ParseErrorCb<'_>) {
    on_issue(Issue::new(
        IssueKind::MultipleValuesForScalar,
        &pair.key,
        Some(pair.line),
        format!("`{}` was already given in this entry; keeping the first", field),
    ));
}

#[cfg(test)]
#[path = "tests/parse_tests.rs"]
mod tests;
