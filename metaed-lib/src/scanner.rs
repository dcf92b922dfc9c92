//! Locate metadata files under storage roots.
//!
//! No directory layout is assumed: every directory under a root is searched
//! up to a depth limit, and any file with a configured name (or ending in
//! `.metadata.txt`) is returned.

use std::path::{Path, PathBuf};

/// Default metadata file names, compared case-insensitively.
pub const DEFAULT_FILE_NAMES: &[&str] = &["metadata.pegasus.txt", "metadata.txt"];

/// Suffix that also marks a metadata file (e.g. `snes.metadata.txt`).
const METADATA_SUFFIX: &str = ".metadata.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct ScanOptions {
    pub file_names: Vec<String>,
    /// How many directory levels below each root to descend. 0 means only
    /// the root itself.
    pub max_depth: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            file_names: DEFAULT_FILE_NAMES.iter().map(|s| s.to_string()).collect(),
            max_depth: 4,
        }
    }
}

impl ScanOptions {
    fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let name = name.to_lowercase();
        name.ends_with(METADATA_SUFFIX)
            || self
                .file_names
                .iter()
                .any(|wanted| wanted.eq_ignore_ascii_case(&name))
    }
}

/// Find metadata files under each root. Results are sorted and unique.
///
/// Hidden directories (names starting with `.`) are skipped. Directories
/// that cannot be read are logged and skipped.
pub fn find_metadata_files(roots: &[PathBuf], options: &ScanOptions) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for root in roots {
        if !root.is_dir() {
            log::debug!("Skipping storage root {} (not a directory)", root.display());
            continue;
        }
        walk(root, 0, options, &mut found);
    }
    found.sort();
    found.dedup();
    found
}

fn walk(dir: &Path, depth: usize, options: &ScanOptions, found: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            log::warn!("Cannot read {}: {}", dir.display(), e);
            return;
        }
    };

    let mut subdirs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() {
            if options.matches(&path) {
                found.push(path);
            }
        } else if path.is_dir() && !is_hidden(&path) {
            subdirs.push(path);
        }
    }

    if depth < options.max_depth {
        for sub in subdirs {
            walk(&sub, depth + 1, options, found);
        }
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
