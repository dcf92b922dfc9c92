use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use metaed_lib::{IssueLog, LibraryError, parse_document, render_document, save_document};

use crate::error::CliError;

use super::{plural, print_issue};

/// Re-render files in canonical form.
///
/// Without flags, the result is printed. `--write` replaces files that
/// differ, skipping files with issues unless `--force`. `--check` only
/// reports; it returns `false` if any file would change.
pub(crate) fn run_fmt(
    files: &[PathBuf],
    write: bool,
    check: bool,
    force: bool,
) -> Result<bool, CliError> {
    let mut all_canonical = true;

    for file in files {
        let original =
            std::fs::read_to_string(file).map_err(|e| LibraryError::io(file, e))?;
        let mut log = IssueLog::new();
        let games = parse_document(&original, &mut log);
        let rendered = render_document(&games, &mut log);
        let changed = rendered != original;

        if check {
            if changed {
                all_canonical = false;
                log::info!(
                    "{} {}",
                    "would reformat".if_supports_color(Stdout, |t| t.yellow()),
                    file.display()
                );
            }
            continue;
        }

        if !write {
            print!("{}", rendered);
            for issue in log.issues() {
                log::warn!("{}:{}", file.display(), issue);
            }
            continue;
        }

        if !log.is_empty() && !force {
            log::warn!(
                "Skipping {} ({}; use --force to write anyway)",
                file.display(),
                plural(log.len(), "issue"),
            );
            for issue in log.issues() {
                print_issue(file, issue);
            }
            all_canonical = false;
            continue;
        }

        if changed {
            save_document(file, &games, &mut IssueLog::new())?;
            log::info!(
                "{} {}",
                "reformatted".if_supports_color(Stdout, |t| t.green()),
                file.display()
            );
        } else {
            log::debug!("{} already canonical", file.display());
        }
    }

    Ok(all_canonical)
}
