//! Storage-root discovery.
//!
//! A storage root is a directory under which game collections may live,
//! such as the user's data directory or a mounted SD card. Discovery is
//! host-specific, so it sits behind the [`StorageRoots`] trait.

use std::path::{Path, PathBuf};

/// Source of candidate storage roots.
pub trait StorageRoots {
    /// The default root. Should equal `storage_paths()[0]`, but may be
    /// cheaper to compute.
    fn primary_storage_path(&self) -> PathBuf;

    /// All candidate roots, primary first, without duplicates.
    ///
    /// Never empty: falls back to the primary path alone.
    fn storage_paths(&self) -> Vec<PathBuf> {
        vec![self.primary_storage_path()]
    }
}

/// A fixed list of roots. The first is the primary.
///
/// Used for `--root` overrides and in tests.
#[derive(Debug, Clone)]
pub struct FixedStorage {
    roots: Vec<PathBuf>,
}

impl FixedStorage {
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            roots: roots.into_iter().collect(),
        }
    }

    pub fn single(root: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![root.into()],
        }
    }
}

impl StorageRoots for FixedStorage {
    fn primary_storage_path(&self) -> PathBuf {
        self.roots
            .first()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn storage_paths(&self) -> Vec<PathBuf> {
        let primary = self.primary_storage_path();
        merge_roots(primary, self.roots.iter().cloned())
    }
}

/// Roots of a desktop system: the user's data directory plus mounted
/// removable media, with configured extras appended.
#[derive(Debug, Clone)]
pub struct DesktopStorage {
    primary_override: Option<PathBuf>,
    extra_roots: Vec<PathBuf>,
    scan_mounts: bool,
}

impl DesktopStorage {
    pub fn new() -> Self {
        Self {
            primary_override: None,
            extra_roots: Vec::new(),
            scan_mounts: true,
        }
    }

    /// Build from saved settings (`[storage] primary` and `[storage] roots`).
    pub fn from_settings(settings: &crate::settings::Settings) -> Self {
        Self {
            primary_override: settings.primary_root.clone(),
            extra_roots: settings.extra_roots.clone(),
            scan_mounts: true,
        }
    }

    pub fn with_primary(mut self, path: impl Into<PathBuf>) -> Self {
        self.primary_override = Some(path.into());
        self
    }

    pub fn with_extra_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.extra_roots.push(path.into());
        self
    }

    /// Skip probing mount points.
    pub fn without_mounts(mut self) -> Self {
        self.scan_mounts = false;
        self
    }
}

impl Default for DesktopStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageRoots for DesktopStorage {
    fn primary_storage_path(&self) -> PathBuf {
        if let Some(ref p) = self.primary_override {
            return p.clone();
        }
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn storage_paths(&self) -> Vec<PathBuf> {
        let mut others = Vec::new();
        if self.scan_mounts {
            for parent in mount_parents() {
                others.extend(child_dirs(&parent));
            }
        }
        others.extend(self.extra_roots.iter().cloned());
        merge_roots(self.primary_storage_path(), others)
    }
}

/// Primary first, then the rest in order, duplicates removed.
fn merge_roots(primary: PathBuf, others: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    let mut roots = vec![primary];
    for root in others {
        if !roots.contains(&root) {
            roots.push(root);
        }
    }
    roots
}

/// Directories whose children are mounted volumes on this platform.
fn mount_parents() -> Vec<PathBuf> {
    let mut parents = Vec::new();
    if cfg!(target_os = "linux") {
        if let Some(user) = current_user() {
            parents.push(PathBuf::from("/media").join(&user));
            parents.push(PathBuf::from("/run/media").join(&user));
        }
        parents.push(PathBuf::from("/mnt"));
    } else if cfg!(target_os = "macos") {
        parents.push(PathBuf::from("/Volumes"));
    }
    parents
}

fn current_user() -> Option<String> {
    std::env::var("USER")
        .ok()
        .filter(|u| !u.is_empty())
        .or_else(|| {
            dirs::home_dir()
                .and_then(|h| h.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
}

/// Sorted subdirectories of `dir`; empty if it cannot be read.
fn child_dirs(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Vec::new(),
    };
    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    log::debug!("Found {} mounted volumes under {}", dirs.len(), dir.display());
    dirs
}
