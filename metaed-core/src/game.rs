use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::asset::AssetRole;

/// Inclusive range of supported player counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerCount {
    pub min: u32,
    pub max: u32,
}

impl PlayerCount {
    /// Build a range. Returns `None` unless `1 <= min <= max`.
    pub fn new(min: u32, max: u32) -> Option<Self> {
        (min >= 1 && min <= max).then_some(Self { min, max })
    }

    pub fn single(count: u32) -> Option<Self> {
        Self::new(count, count)
    }
}

impl std::fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// A file associated with a game. The path is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Asset {
    pub role: AssetRole,
    pub path: String,
}

/// An `x-` extension key carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraField {
    pub key: String,
    pub values: Vec<String>,
}

/// Typed metadata for one game.
///
/// Only `title` is required, and even that is only checked when a caller
/// asks for completeness. Set-valued fields are `BTreeSet`s so their
/// iteration order is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Game {
    pub title: String,
    pub sort_title: Option<String>,
    /// Short one-paragraph blurb.
    pub summary: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    /// Normalized to `0.0..=1.0`.
    pub rating: Option<f32>,
    pub play_count: Option<u32>,
    pub last_played: Option<NaiveDateTime>,

    pub developers: BTreeSet<String>,
    pub publishers: BTreeSet<String>,
    pub genres: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub player_count: Option<PlayerCount>,

    /// Game files, in the order given.
    pub files: Vec<String>,
    pub launch_cmd: Option<String>,
    pub workdir: Option<String>,

    pub assets: Vec<Asset>,
    pub extra: Vec<ExtraField>,
}

impl Game {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Title used for sorting: `sort_title` if set, else `title`.
    pub fn sort_title(&self) -> &str {
        self.sort_title.as_deref().unwrap_or(&self.title)
    }

    /// Whether every required field is present.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Add a game file unless it is already listed. Returns `true` if added.
    pub fn add_file(&mut self, path: impl Into<String>) -> bool {
        push_unique(&mut self.files, path.into())
    }

    /// Add an asset unless the same role/path pair exists. Returns `true` if added.
    pub fn add_asset(&mut self, role: AssetRole, path: impl Into<String>) -> bool {
        let asset = Asset {
            role,
            path: path.into(),
        };
        if self.assets.contains(&asset) {
            return false;
        }
        self.assets.push(asset);
        true
    }

    /// Paths registered for one role, in insertion order.
    pub fn assets_for(&self, role: AssetRole) -> impl Iterator<Item = &str> {
        self.assets
            .iter()
            .filter(move |a| a.role == role)
            .map(|a| a.path.as_str())
    }

    /// Append a value to an extension field, creating it on first use.
    /// Duplicate values are ignored. Returns `true` if added.
    pub fn add_extra(&mut self, key: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        match self.extra.iter_mut().find(|f| f.key == key) {
            Some(field) => push_unique(&mut field.values, value),
            None => {
                self.extra.push(ExtraField {
                    key: key.to_string(),
                    values: vec![value],
                });
                true
            }
        }
    }

    /// Values of an extension field.
    pub fn extra(&self, key: &str) -> Option<&[String]> {
        self.extra
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.values.as_slice())
    }
}

fn push_unique(list: &mut Vec<String>, value: String) -> bool {
    if list.contains(&value) {
        return false;
    }
    list.push(value);
    true
}
