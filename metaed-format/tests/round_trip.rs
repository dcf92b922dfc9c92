use std::collections::BTreeSet;

use metaed_core::{Entry, Issue, tokenize};
use metaed_format::{new_game, parse_game_entry, render_game};

/// Key -> set of values, ignoring pair order and value order.
fn key_values(entry: &Entry) -> Vec<(String, BTreeSet<String>)> {
    let mut out: Vec<(String, BTreeSet<String>)> = entry
        .pairs
        .iter()
        .map(|p| (p.key.clone(), p.values.iter().cloned().collect()))
        .collect();
    out.sort();
    out
}

fn parse_text(text: &str) -> (metaed_core::Game, Vec<Issue>) {
    let mut issues = Vec::new();
    let game = new_game(&tokenize(text), &mut |i| issues.push(i));
    (game, issues)
}

const CANONICAL: &str = "\
title: Chrono Trigger
sort-title: Chrono Trigger
summary: A time-travel RPG.
description: Crono and friends travel through time.
release: 1995-03-11
developers:
  Square
publishers:
  Nintendo
  Square
genres:
  RPG
players: 1
rating: 0.98
play-count: 12
last-played: 2024-02-29T21:15:00
tags:
  classic
  jrpg
files:
  Chrono Trigger (USA).sfc
launch: snes9x {file.path}
workdir: /opt/emu
assets.box-front:
  media/ct/box.png
assets.screenshot:
  media/ct/shot1.png
  media/ct/shot2.png
x-scraper-id:
  1187
";

#[test]
fn canonical_text_round_trips_exactly() {
    let (game, issues) = parse_text(CANONICAL);
    assert!(issues.is_empty(), "{:?}", issues);

    let mut write_issues = Vec::new();
    let rendered = render_game(&game, &mut |i| write_issues.push(i));
    assert!(write_issues.is_empty());
    assert_eq!(rendered, CANONICAL);
}

#[test]
fn rendered_text_retokenizes_to_same_keys_and_values() {
    let input = "\
title: Streets of Rage 2
genres:
  Beat 'em up
  Action
developers:
  Ancient
players: 1-2
rating: 0.90
tags:
  coop
assets.title-screen:
  media/sor2/title.png
";
    let entry = tokenize(input);
    let (game, issues) = parse_text(input);
    assert!(issues.is_empty());

    let rendered = render_game(&game, &mut |_| {});
    assert_eq!(key_values(&tokenize(&rendered)), key_values(&entry));
}

#[test]
fn render_parse_render_is_stable() {
    let input = "game: Doom\nrating: 85%\nrelease: 1993\ngenre: FPS\nfile: doom.wad\nassets.logo: logo.png\n";
    let (game, _) = parse_text(input);
    let first = render_game(&game, &mut |_| {});
    let (reparsed, issues) = parse_text(&first);
    assert!(issues.is_empty());
    assert_eq!(reparsed, game);
    assert_eq!(render_game(&reparsed, &mut |_| {}), first);
}

#[test]
fn merging_base_and_override_entries() {
    let base = tokenize("title: Sonic\ndevelopers: Sonic Team\ngenres: Platformer\n");
    let local = tokenize("developers: Sega\nrating: 0.8\nfoo: bar\n");

    let mut issues = Vec::new();
    let mut game = new_game(&base, &mut |i| issues.push(i));
    assert!(issues.is_empty());
    parse_game_entry(&local, &mut game, &mut |i| issues.push(i));
    assert_eq!(issues.len(), 1);

    let rendered = render_game(&game, &mut |_| {});
    assert_eq!(
        rendered,
        "title: Sonic\ndevelopers:\n  Sega\n  Sonic Team\ngenres:\n  Platformer\nrating: 0.80\n"
    );
}

#[test]
fn inline_hash_value_round_trips() {
    let input = "title: A\ntags: #1\n";
    let (game, issues) = parse_text(input);
    assert!(issues.is_empty());

    let mut write_issues = Vec::new();
    let rendered = render_game(&game, &mut |i| write_issues.push(i));
    assert!(write_issues.is_empty(), "{:?}", write_issues);
    assert_eq!(rendered, input);
    assert_eq!(key_values(&tokenize(&rendered)), key_values(&tokenize(input)));
}

#[test]
fn hash_value_leads_a_longer_list() {
    let input = "title: A\nfiles: #intro.bin\n  disc1.bin\n";
    let (game, _) = parse_text(input);
    assert_eq!(game.files, vec!["#intro.bin", "disc1.bin"]);

    let rendered = render_game(&game, &mut |_| {});
    assert_eq!(rendered, input);
    let (reparsed, issues) = parse_text(&rendered);
    assert!(issues.is_empty());
    assert_eq!(reparsed, game);
}

#[test]
fn zero_play_count_round_trips() {
    let input = "title: A\nplay-count: 0\n";
    let (game, issues) = parse_text(input);
    assert!(issues.is_empty());
    assert_eq!(game.play_count, Some(0));

    let rendered = render_game(&game, &mut |_| {});
    assert_eq!(key_values(&tokenize(&rendered)), key_values(&tokenize(input)));
}
