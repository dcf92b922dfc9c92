//! Mapping between generic metadata entries and typed [`Game`] records.
//!
//! [`new_game`] and [`parse_game_entry`] interpret an [`Entry`] against the
//! game schema; [`render_game`] writes a [`Game`] back out as canonical text.
//! Both directions report problems through a callback and always finish.

pub mod error;
pub mod parse;
pub mod render;
pub mod schema;
pub mod value;

pub use error::ValueError;
pub use parse::{new_game, parse_game_entry, validate_game};
pub use render::render_game;

pub use metaed_core::{Entry, Game, Issue, IssueKind, ParseErrorCb, WriteErrorCb};
