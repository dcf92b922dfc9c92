use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use metaed_lib::{IssueLog, load_document, validate_game};

use super::{plural, print_issue};

/// Check each file and print its issues. Returns `true` if every file was
/// read and no issues were found.
pub(crate) fn run_check(files: &[PathBuf], require_title: bool, max_issues: Option<usize>) -> bool {
    let mut total_issues = 0usize;
    let mut unreadable = 0usize;

    for file in files {
        let mut log = match max_issues {
            Some(limit) => IssueLog::with_abort_after(limit),
            None => IssueLog::new(),
        };

        let games = match load_document(file, &mut log) {
            Ok(games) => games,
            Err(e) => {
                log::warn!(
                    "{} {}",
                    "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                    e
                );
                unreadable += 1;
                continue;
            }
        };

        if require_title {
            for game in &games {
                validate_game(game, &mut |issue| log.record(issue));
            }
        }

        if log.is_empty() {
            log::info!(
                "{} {} ({})",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                file.display(),
                plural(games.len(), "game"),
            );
        } else {
            log::info!(
                "{} {} ({}, {})",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                file.display(),
                plural(games.len(), "game"),
                plural(log.len(), "issue"),
            );
            for issue in log.issues() {
                print_issue(file, issue);
            }
            if log.should_abort() {
                log::info!(
                    "  {}",
                    "stopped early: issue limit reached".if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        }
        total_issues += log.len();
    }

    if files.len() > 1 {
        log::info!("");
        log::info!(
            "Checked {}: {}, {} unreadable",
            plural(files.len(), "file"),
            plural(total_issues, "issue"),
            unreadable,
        );
    }

    total_issues == 0 && unreadable == 0
}
