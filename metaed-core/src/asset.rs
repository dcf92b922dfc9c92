use serde::Serialize;

/// The role an asset file plays for a game (box art, video, ...).
///
/// Each role has a canonical slug used when writing `assets.<slug>` keys,
/// plus aliases accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetRole {
    // Box and media
    BoxFront,
    BoxBack,
    BoxSpine,
    BoxFull,
    Cartridge,

    // Branding
    Logo,
    Marquee,
    Bezel,
    Panel,
    CabinetLeft,
    CabinetRight,

    // Launcher art
    Tile,
    Banner,
    Steam,
    Poster,
    Background,

    // Captures
    Screenshot,
    TitleScreen,
    Video,
    Music,
}

/// All roles in canonical order.
const ALL_ROLES: &[AssetRole] = &[
    AssetRole::BoxFront,
    AssetRole::BoxBack,
    AssetRole::BoxSpine,
    AssetRole::BoxFull,
    AssetRole::Cartridge,
    AssetRole::Logo,
    AssetRole::Marquee,
    AssetRole::Bezel,
    AssetRole::Panel,
    AssetRole::CabinetLeft,
    AssetRole::CabinetRight,
    AssetRole::Tile,
    AssetRole::Banner,
    AssetRole::Steam,
    AssetRole::Poster,
    AssetRole::Background,
    AssetRole::Screenshot,
    AssetRole::TitleScreen,
    AssetRole::Video,
    AssetRole::Music,
];

impl AssetRole {
    /// Canonical slug, as written after `assets.`.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::BoxFront => "box-front",
            Self::BoxBack => "box-back",
            Self::BoxSpine => "box-spine",
            Self::BoxFull => "box-full",
            Self::Cartridge => "cartridge",
            Self::Logo => "logo",
            Self::Marquee => "marquee",
            Self::Bezel => "bezel",
            Self::Panel => "panel",
            Self::CabinetLeft => "cabinet-left",
            Self::CabinetRight => "cabinet-right",
            Self::Tile => "tile",
            Self::Banner => "banner",
            Self::Steam => "steam",
            Self::Poster => "poster",
            Self::Background => "background",
            Self::Screenshot => "screenshot",
            Self::TitleScreen => "title-screen",
            Self::Video => "video",
            Self::Music => "music",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BoxFront => "Box front",
            Self::BoxBack => "Box back",
            Self::BoxSpine => "Box spine",
            Self::BoxFull => "Full box",
            Self::Cartridge => "Cartridge / disc",
            Self::Logo => "Logo",
            Self::Marquee => "Marquee",
            Self::Bezel => "Bezel",
            Self::Panel => "Control panel",
            Self::CabinetLeft => "Cabinet left side",
            Self::CabinetRight => "Cabinet right side",
            Self::Tile => "Tile",
            Self::Banner => "Banner",
            Self::Steam => "Steam grid",
            Self::Poster => "Poster",
            Self::Background => "Background",
            Self::Screenshot => "Screenshot",
            Self::TitleScreen => "Title screen",
            Self::Video => "Video",
            Self::Music => "Music",
        }
    }

    /// All accepted names for this role, slug first.
    ///
    /// Names are compared after lower-casing and turning `_` into `-`.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::BoxFront => &["box-front", "boxfront", "boxart", "box-art", "cover"],
            Self::BoxBack => &["box-back", "boxback"],
            Self::BoxSpine => &["box-spine", "boxspine", "box-side", "boxside"],
            Self::BoxFull => &["box-full", "boxfull"],
            Self::Cartridge => &["cartridge", "disc", "cart", "physical-media"],
            Self::Logo => &["logo", "wheel"],
            Self::Marquee => &["marquee"],
            Self::Bezel => &["bezel", "screen-marquee"],
            Self::Panel => &["panel"],
            Self::CabinetLeft => &["cabinet-left", "cabinetleft"],
            Self::CabinetRight => &["cabinet-right", "cabinetright"],
            Self::Tile => &["tile"],
            Self::Banner => &["banner"],
            Self::Steam => &["steam", "steam-grid", "grid"],
            Self::Poster => &["poster", "flyer"],
            Self::Background => &["background", "fanart"],
            Self::Screenshot => &["screenshot", "screenshots"],
            Self::TitleScreen => &["title-screen", "titlescreen"],
            Self::Video => &["video", "videos"],
            Self::Music => &["music"],
        }
    }

    /// All 20 roles.
    pub fn all() -> &'static [AssetRole] {
        ALL_ROLES
    }
}

impl std::fmt::Display for AssetRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string is not a known asset role.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown asset role: '{0}'")]
pub struct AssetRoleParseError(pub String);

impl std::str::FromStr for AssetRole {
    type Err = AssetRoleParseError;

    /// Parse a role from its slug or any alias (case-insensitive, `_` == `-`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        ALL_ROLES
            .iter()
            .copied()
            .find(|role| role.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| AssetRoleParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/asset_tests.rs"]
mod tests;
