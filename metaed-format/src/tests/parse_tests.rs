use super::*;
use chrono::NaiveDate;
use metaed_core::{PlayerCount, tokenize};

fn parse(text: &str) -> (Game, Vec<Issue>) {
    let mut issues = Vec::new();
    let game = new_game(&tokenize(text), &mut |issue| issues.push(issue));
    (game, issues)
}

fn parse_into(game: &mut Game, text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    parse_game_entry(&tokenize(text), game, &mut |issue| issues.push(issue));
    issues
}

fn set(items: &[&str]) -> std::collections::BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn genres_from_continuation_lines() {
    let (game, issues) = parse("genres:\n  Action\n  RPG\n");
    assert_eq!(game.genres, set(&["Action", "RPG"]));
    assert!(issues.is_empty());
}

#[test]
fn rating_above_one_is_clamped() {
    let (game, issues) = parse("rating: 1.5\n");
    assert_eq!(game.rating, Some(1.0));
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::ValueClamped);
    assert_eq!(issues[0].line, Some(1));
}

#[test]
fn rating_below_zero_is_clamped() {
    let (game, issues) = parse("rating: -0.2\n");
    assert_eq!(game.rating, Some(0.0));
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::ValueClamped);
}

#[test]
fn rating_percentage() {
    let (game, issues) = parse("rating: 80%\n");
    assert_eq!(game.rating, Some(0.8));
    assert!(issues.is_empty());
}

#[test]
fn non_numeric_rating_is_left_unset() {
    let (game, issues) = parse("rating: excellent\n");
    assert_eq!(game.rating, None);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::MalformedNumber);
}

#[test]
fn inverted_player_range_is_rejected() {
    let (game, issues) = parse("players: 4-2\n");
    assert_eq!(game.player_count, Game::default().player_count);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::MalformedRange);
    assert_eq!(issues[0].field, "players");
}

#[test]
fn malformed_range_keeps_previous_value() {
    let mut game = Game::default();
    assert!(parse_into(&mut game, "players: 1-4\n").is_empty());
    let issues = parse_into(&mut game, "players: lots\n");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::MalformedRange);
    assert_eq!(game.player_count, PlayerCount::new(1, 4));
}

#[test]
fn single_player_count() {
    let (game, issues) = parse("players: 2\n");
    assert_eq!(game.player_count, PlayerCount::single(2));
    assert!(issues.is_empty());
}

#[test]
fn unknown_key_is_reported_and_ignored() {
    let (game, issues) = parse("foo: bar\n");
    assert_eq!(game, Game::default());
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::UnknownKey);
    assert_eq!(issues[0].field, "foo");
    assert_eq!(issues[0].line, Some(1));
}

#[test]
fn processing_continues_after_unknown_key() {
    let (game, issues) = parse("title: A\nfoo: bar\ngenre: Puzzle\n");
    assert_eq!(game.title, "A");
    assert_eq!(game.genres, set(&["Puzzle"]));
    assert_eq!(issues.len(), 1);
}

#[test]
fn verbatim_lines_are_unknown_keys() {
    let (_, issues) = parse("title: A\nthis line has no colon\n");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::UnknownKey);
    assert_eq!(issues[0].line, Some(2));
}

#[test]
fn developers_accumulate_across_entries() {
    let mut game = Game::default();
    assert!(parse_into(&mut game, "developers: Alpha\n").is_empty());
    assert!(parse_into(&mut game, "developers: Beta\n").is_empty());
    assert_eq!(game.developers, set(&["Alpha", "Beta"]));
}

#[test]
fn multiple_values_for_scalar_keep_first() {
    let (game, issues) = parse("title:\n  First\n  Second\n  Third\n");
    assert_eq!(game.title, "First");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::MultipleValuesForScalar);
}

#[test]
fn multiple_bad_values_report_each_problem_once() {
    let (game, issues) = parse("rating:\n  2.0\n  0.5\n");
    assert_eq!(game.rating, Some(1.0));
    let kinds: Vec<_> = issues.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![IssueKind::MultipleValuesForScalar, IssueKind::ValueClamped]
    );
}

#[test]
fn later_scalar_pair_overrides_earlier() {
    let mut game = Game::default();
    parse_into(&mut game, "title: Base Title\ndescription: base\n");
    parse_into(&mut game, "description: override\n");
    assert_eq!(game.title, "Base Title");
    assert_eq!(game.description.as_deref(), Some("override"));
}

#[test]
fn repeated_scalar_key_in_one_entry_keeps_first() {
    let (game, issues) = parse("rating: 0.5\ndesc: one\nrating: 0.9\ndescription: two\n");
    assert_eq!(game.rating, Some(0.5));
    assert_eq!(game.description.as_deref(), Some("one"));
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| i.kind == IssueKind::MultipleValuesForScalar));
    assert_eq!(issues[0].line, Some(3));
    assert_eq!(issues[1].field, "description");
}

#[test]
fn repeated_multi_valued_key_is_not_an_issue() {
    let (game, issues) = parse("genre: RPG\ngenres: Action\n");
    assert!(issues.is_empty());
    assert_eq!(game.genres, set(&["Action", "RPG"]));
}

#[test]
fn missing_title_is_not_reported_by_parse() {
    let (game, issues) = parse("genre: Racing\n");
    assert!(game.title.is_empty());
    assert!(issues.is_empty());
}

#[test]
fn validate_reports_missing_title() {
    let mut issues = Vec::new();
    validate_game(&Game::default(), &mut |i| issues.push(i));
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::MissingRequiredField);

    issues.clear();
    validate_game(&Game::new("Tetris"), &mut |i| issues.push(i));
    assert!(issues.is_empty());
}

#[test]
fn aliases_and_underscores() {
    let text = "game: Metroid\nsort_by: Metroid 1\ndeveloper: Nintendo R&D1\nPublisher: Nintendo\ncommand: run.sh\n";
    let (game, issues) = parse(text);
    assert!(issues.is_empty(), "{:?}", issues);
    assert_eq!(game.title, "Metroid");
    assert_eq!(game.sort_title.as_deref(), Some("Metroid 1"));
    assert_eq!(game.developers, set(&["Nintendo R&D1"]));
    assert_eq!(game.publishers, set(&["Nintendo"]));
    assert_eq!(game.launch_cmd.as_deref(), Some("run.sh"));
}

#[test]
fn scalar_text_fields() {
    let text = "summary: Short.\ndescription: Long text.\nworkdir: /games\nplay-count: 7\n";
    let (game, issues) = parse(text);
    assert!(issues.is_empty());
    assert_eq!(game.summary.as_deref(), Some("Short."));
    assert_eq!(game.description.as_deref(), Some("Long text."));
    assert_eq!(game.workdir.as_deref(), Some("/games"));
    assert_eq!(game.play_count, Some(7));
}

#[test]
fn dates_and_timestamps() {
    let (game, issues) = parse("release: 1994-03-19\nlast-played: 2024-05-01T18:30:00\n");
    assert!(issues.is_empty());
    assert_eq!(game.release_date, NaiveDate::from_ymd_opt(1994, 3, 19));
    assert_eq!(
        game.last_played,
        NaiveDate::from_ymd_opt(2024, 5, 1).and_then(|d| d.and_hms_opt(18, 30, 0))
    );
}

#[test]
fn bad_date_is_reported() {
    let (game, issues) = parse("release: someday\nlast-played: never\n");
    assert_eq!(game.release_date, None);
    assert_eq!(game.last_played, None);
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| i.kind == IssueKind::MalformedDate));
    assert_eq!(issues[1].line, Some(2));
}

#[test]
fn bad_play_count_is_malformed_number() {
    let (game, issues) = parse("play-count: a few\n");
    assert_eq!(game.play_count, None);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::MalformedNumber);
}

#[test]
fn files_keep_order_and_dedupe() {
    let (game, _) = parse("files:\n  disc2.chd\n  disc1.chd\n  disc2.chd\nfile: disc3.chd\n");
    assert_eq!(game.files, vec!["disc2.chd", "disc1.chd", "disc3.chd"]);
}

#[test]
fn assets_by_role() {
    let text = "assets.boxFront: media/box.png\nassets.video:\n  media/a.mp4\n  media/b.mp4\nassets.box_front: media/box.png\n";
    let (game, issues) = parse(text);
    assert!(issues.is_empty());
    assert_eq!(game.assets.len(), 3);
    assert_eq!(game.assets[0].role, AssetRole::BoxFront);
    let videos: Vec<_> = game.assets_for(AssetRole::Video).collect();
    assert_eq!(videos, vec!["media/a.mp4", "media/b.mp4"]);
}

#[test]
fn unknown_asset_role_is_unknown_key() {
    let (game, issues) = parse("assets.hologram: x.png\n");
    assert!(game.assets.is_empty());
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::UnknownKey);
    assert_eq!(issues[0].field, "assets.hologram");
}

#[test]
fn extension_keys_are_preserved() {
    let (game, issues) = parse("x-scraper-id: 1234\nx-notes:\n  one\n  two\n");
    assert!(issues.is_empty());
    assert_eq!(game.extra("x-scraper-id"), Some(&["1234".to_string()][..]));
    assert_eq!(game.extra.len(), 2);
    assert_eq!(game.extra[1].values, vec!["one", "two"]);
}

#[test]
fn extension_prefix_accepts_underscore() {
    let (game, issues) = parse("X_Source: cart dump\n");
    assert!(issues.is_empty(), "{:?}", issues);
    assert_eq!(game.extra("x_source"), Some(&["cart dump".to_string()][..]));
}

#[test]
fn reapplying_an_entry_is_idempotent() {
    let entry = tokenize(
        "title: A\ngenres:\n  X\n  Y\nfiles:\n  a.bin\nassets.logo: l.png\nx-id: 9\nrating: 0.5\n",
    );
    let mut game = Game::default();
    parse_game_entry(&entry, &mut game, &mut |_| {});
    let once = game.clone();
    parse_game_entry(&entry, &mut game, &mut |_| {});
    assert_eq!(game, once);
}

#[test]
fn issues_arrive_in_source_order() {
    let (_, issues) = parse("foo: 1\nrating: x\nplayers: 9-1\nbar: 2\n");
    let lines: Vec<_> = issues.iter().map(|i| i.line).collect();
    assert_eq!(lines, vec![Some(1), Some(2), Some(3), Some(4)]);
}
