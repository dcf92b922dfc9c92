use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use metaed_lib::{IssueLog, Settings, find_metadata_files, load_document};

use super::{plural, resolve_storage};

/// Find metadata files under every storage root and summarize each one.
pub(crate) fn run_scan(root: Option<PathBuf>, settings: &Settings, max_depth: Option<usize>) {
    let storage = resolve_storage(root, settings);
    let roots = storage.storage_paths();

    let mut options = settings.scan.clone();
    if let Some(depth) = max_depth {
        options.max_depth = depth;
    }

    let files = find_metadata_files(&roots, &options);
    if files.is_empty() {
        log::info!(
            "No metadata files found under {}",
            plural(roots.len(), "root")
        );
        return;
    }

    let mut total_games = 0usize;
    for file in &files {
        let mut log = IssueLog::new();
        match load_document(file, &mut log) {
            Ok(games) => {
                total_games += games.len();
                let issues = if log.is_empty() {
                    String::new()
                } else {
                    format!(
                        ", {}",
                        plural(log.len(), "issue").if_supports_color(Stdout, |t| t.yellow())
                    )
                };
                log::info!(
                    "{} ({}{})",
                    file.display(),
                    plural(games.len(), "game"),
                    issues
                );
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    log::info!("");
    log::info!(
        "{} in {}",
        plural(total_games, "game").if_supports_color(Stdout, |t| t.bold()),
        plural(files.len(), "file"),
    );
}
