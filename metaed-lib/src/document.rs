//! Multi-game metadata documents.
//!
//! A document is a text file holding any number of game blocks. Each block
//! starts at an unindented title line (`title:`, `game:` or `name:`):
//! ```text
//! game: Super Metroid
//! genre: Action
//!
//! game: Tetris
//! players: 1-2
//! ```
//! Text before the first title line forms its own block.

use std::path::Path;

use metaed_core::{Entry, Game, tokenize_at};
use metaed_format::schema;
use metaed_format::{new_game, render_game};

use crate::error::LibraryError;
use crate::issue_log::IssueLog;

/// Split a document into one entry per game block.
///
/// Line numbers in the returned entries are document-relative. Blocks with
/// no pairs (only blank lines or comments) are dropped.
pub fn split_entries(text: &str) -> Vec<Entry> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.lines().collect();

    let mut starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| starts_block(line))
        .map(|(i, _)| i)
        .collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }

    let mut entries = Vec::new();
    for (n, &start) in starts.iter().enumerate() {
        let end = starts.get(n + 1).copied().unwrap_or(lines.len());
        let block = lines[start..end].join("\n");
        let entry = tokenize_at(&block, start + 1);
        if !entry.is_empty() {
            entries.push(entry);
        }
    }
    entries
}

fn starts_block(line: &str) -> bool {
    if line.starts_with(char::is_whitespace) {
        return false;
    }
    line.split_once(':')
        .and_then(|(key, _)| schema::lookup(&schema::canonical_key(key)))
        .is_some_and(|field| field.name == schema::TITLE)
}

/// Parse every game in a document.
///
/// Issues go to `log`. If the log has an abort limit and it is reached,
/// parsing stops before the next game and the games so far are returned.
pub fn parse_document(text: &str, log: &mut IssueLog) -> Vec<Game> {
    let mut games = Vec::new();
    for entry in split_entries(text) {
        if log.should_abort() {
            log::debug!(
                "Stopping at line {} after {} issues",
                entry.source_position,
                log.len()
            );
            break;
        }
        games.push(new_game(&entry, &mut |issue| log.record(issue)));
    }
    games
}

/// Read and parse a document from disk.
pub fn load_document(path: &Path, log: &mut IssueLog) -> Result<Vec<Game>, LibraryError> {
    let text = std::fs::read_to_string(path).map_err(|e| LibraryError::io(path, e))?;
    let games = parse_document(&text, log);
    log::debug!(
        "Loaded {} games from {} ({} issues)",
        games.len(),
        path.display(),
        log.len()
    );
    Ok(games)
}

/// Render games as one document, blocks separated by a blank line.
///
/// An untitled game after the first block still gets an empty `title:` line,
/// otherwise its fields would be read back as part of the game before it.
pub fn render_document(games: &[Game], log: &mut IssueLog) -> String {
    let mut blocks: Vec<String> = Vec::new();
    for game in games {
        let block = render_game(game, &mut |issue| log.record(issue));
        if block.is_empty() {
            continue;
        }
        if !blocks.is_empty() && !game.is_complete() {
            blocks.push(format!("{}:\n{}", schema::TITLE, block));
        } else {
            blocks.push(block);
        }
    }
    blocks.join("\n")
}

/// Render games and write them to `path`.
///
/// The file is written to a temporary sibling first and then renamed over
/// the target.
pub fn save_document(path: &Path, games: &[Game], log: &mut IssueLog) -> Result<(), LibraryError> {
    let text = render_document(games, log);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| LibraryError::io(parent, e))?;
    }
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);
    std::fs::write(&tmp, text).map_err(|e| LibraryError::io(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| LibraryError::io(path, e))?;
    Ok(())
}
