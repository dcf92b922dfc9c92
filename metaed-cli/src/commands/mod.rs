pub(crate) mod check;
pub(crate) mod config;
pub(crate) mod fmt;
pub(crate) mod roots;
pub(crate) mod scan;
pub(crate) mod show;

use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use metaed_lib::{DesktopStorage, FixedStorage, Issue, Settings, StorageRoots};

/// Storage roots for this run: the `--root` override if given, otherwise
/// desktop discovery adjusted by the settings file.
pub(crate) fn resolve_storage(root: Option<PathBuf>, settings: &Settings) -> Box<dyn StorageRoots> {
    match root {
        Some(root) => Box::new(FixedStorage::single(root)),
        None => Box::new(DesktopStorage::from_settings(settings)),
    }
}

/// Print one issue as `file:line: kind: message`.
pub(crate) fn print_issue(file: &Path, issue: &Issue) {
    let location = match issue.line {
        Some(line) => format!("{}:{}", file.display(), line),
        None => file.display().to_string(),
    };
    log::info!(
        "  {}: {}: {}",
        location.if_supports_color(Stdout, |t| t.cyan()),
        issue.kind.if_supports_color(Stdout, |t| t.yellow()),
        issue.message,
    );
}

/// "1 game" / "3 games".
pub(crate) fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
