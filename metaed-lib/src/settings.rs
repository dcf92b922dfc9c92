//! Shared application settings.
//!
//! The settings file is `~/.config/metaed/settings.toml`:
//! ```toml
//! [storage]
//! primary = "/home/me/games"
//! roots = ["/media/me/SDCARD"]
//!
//! [scan]
//! file_names = ["metadata.pegasus.txt", "metadata.txt"]
//! max_depth = 4
//! ```
//! Updates go through `toml::Value` so tables this crate does not know about
//! are preserved.

use std::path::{Path, PathBuf};

use crate::error::LibraryError;
use crate::scanner::ScanOptions;

/// Canonical path to the settings file: `~/.config/metaed/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("metaed").join("settings.toml")
}

/// Settings relevant to locating and scanning metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Replaces the discovered primary storage root.
    pub primary_root: Option<PathBuf>,
    /// Appended after discovered roots.
    pub extra_roots: Vec<PathBuf>,
    pub scan: ScanOptions,
}

impl Settings {
    /// Load from the default path. A missing or unreadable file gives
    /// defaults; a malformed one is logged and also gives defaults.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Load from an explicit path. A missing file gives defaults.
    pub fn load_from(path: &Path) -> Result<Self, LibraryError> {
        let doc = match read_doc(path)? {
            Some(doc) => doc,
            None => return Ok(Self::default()),
        };

        let mut settings = Self::default();
        if let Some(storage) = doc.get("storage") {
            settings.primary_root = storage
                .get("primary")
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from);
            settings.extra_roots = string_list(storage.get("roots"))
                .into_iter()
                .map(PathBuf::from)
                .collect();
        }
        if let Some(scan) = doc.get("scan") {
            let names = string_list(scan.get("file_names"));
            if !names.is_empty() {
                settings.scan.file_names = names;
            }
            if let Some(depth) = scan.get("max_depth").and_then(|v| v.as_integer()) {
                settings.scan.max_depth = usize::try_from(depth).map_err(|_| {
                    LibraryError::settings(path, format!("scan.max_depth must be >= 0, got {depth}"))
                })?;
            }
        }
        Ok(settings)
    }
}

/// Add a storage root to `[storage] roots`. Returns `false` if it was
/// already listed.
pub fn add_storage_root(root: &Path) -> Result<bool, LibraryError> {
    add_storage_root_at(&settings_path(), root)
}

/// Remove a storage root from `[storage] roots`. Returns `false` if it was
/// not listed.
pub fn remove_storage_root(root: &Path) -> Result<bool, LibraryError> {
    remove_storage_root_at(&settings_path(), root)
}

pub fn add_storage_root_at(settings: &Path, root: &Path) -> Result<bool, LibraryError> {
    let root = root.to_string_lossy().into_owned();
    update_roots(settings, |roots| {
        if roots.contains(&root) {
            false
        } else {
            roots.push(root.clone());
            true
        }
    })
}

pub fn remove_storage_root_at(settings: &Path, root: &Path) -> Result<bool, LibraryError> {
    let root = root.to_string_lossy().into_owned();
    update_roots(settings, |roots| {
        let before = roots.len();
        roots.retain(|r| *r != root);
        roots.len() != before
    })
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let doc = read_doc(&settings_path()).ok()??;
    toml::to_string_pretty(&doc).ok()
}

/// Apply `edit` to the `[storage] roots` list and write the file back if it
/// reports a change.
fn update_roots(
    path: &Path,
    edit: impl FnOnce(&mut Vec<String>) -> bool,
) -> Result<bool, LibraryError> {
    let mut doc = read_doc(path)?.unwrap_or_else(|| toml::Value::Table(Default::default()));

    // Ensure [storage] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| LibraryError::settings(path, "root is not a table"))?;
    let storage = table
        .entry("storage")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let storage_table = storage
        .as_table_mut()
        .ok_or_else(|| LibraryError::settings(path, "[storage] is not a table"))?;

    let mut roots = string_list(storage_table.get("roots"));
    if !edit(&mut roots) {
        return Ok(false);
    }
    storage_table.insert(
        "roots".to_string(),
        toml::Value::Array(roots.into_iter().map(toml::Value::String).collect()),
    );

    write_doc(path, &doc)?;
    Ok(true)
}

/// Parse the settings file. `Ok(None)` if it does not exist.
fn read_doc(path: &Path) -> Result<Option<toml::Value>, LibraryError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(LibraryError::io(path, e)),
    };
    contents
        .parse::<toml::Value>()
        .map(Some)
        .map_err(|e| LibraryError::settings(path, e.to_string()))
}

/// Write atomically
fn write_doc(path: &Path, doc: &toml::Value) -> Result<(), LibraryError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| LibraryError::io(parent, e))?;
    }
    let serialized =
        toml::to_string_pretty(doc).map_err(|e| LibraryError::SettingsWrite(e.to_string()))?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized).map_err(|e| LibraryError::io(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| LibraryError::io(path, e))?;
    Ok(())
}

fn string_list(value: Option<&toml::Value>) -> Vec<String> {
    value
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|i| i.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
