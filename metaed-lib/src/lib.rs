//! File-level support for game metadata: multi-game documents, issue
//! aggregation, storage-root discovery, settings, and metadata-file search.
//!
//! The parsing core lives in `metaed-core` and `metaed-format`; the commonly
//! used items are re-exported here so frontends only need this crate.

pub mod document;
pub mod error;
pub mod issue_log;
pub mod scanner;
pub mod settings;
pub mod storage;

pub use document::{load_document, parse_document, render_document, save_document, split_entries};
pub use error::LibraryError;
pub use issue_log::IssueLog;
pub use scanner::{ScanOptions, find_metadata_files};
pub use settings::Settings;
pub use storage::{DesktopStorage, FixedStorage, StorageRoots};

pub use metaed_core::{
    Asset, AssetRole, Entry, Game, Issue, IssueKind, Pair, PlayerCount, tokenize, tokenize_at,
};
pub use metaed_format::{new_game, parse_game_entry, render_game, validate_game};
