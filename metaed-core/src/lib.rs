//! Core data model for game metadata files.
//!
//! Holds the format-agnostic [`Entry`] produced by the tokenizer, the typed
//! [`Game`] record the mapper fills in, and the [`Issue`] type used to report
//! recoverable problems without aborting a parse.

pub mod asset;
pub mod entry;
pub mod game;
pub mod issue;
pub mod metafile;

pub use asset::{AssetRole, AssetRoleParseError};
pub use entry::{Entry, Pair};
pub use game::{Asset, ExtraField, Game, PlayerCount};
pub use issue::{Issue, IssueKind, ParseErrorCb, WriteErrorCb};
pub use metafile::{tokenize, tokenize_at};
