use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use metaed_lib::Settings;

use super::resolve_storage;

/// List storage roots, primary first.
pub(crate) fn run_roots(root: Option<PathBuf>, settings: &Settings) {
    let storage = resolve_storage(root, settings);
    let primary = storage.primary_storage_path();

    for path in storage.storage_paths() {
        let marker = if path == primary { "*" } else { " " };
        let exists = path.is_dir();
        let line = format!("{} {}", marker, path.display());
        if exists {
            log::info!("{}", line);
        } else {
            log::info!(
                "{} {}",
                line.if_supports_color(Stdout, |t| t.dimmed()),
                "(missing)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
}
