//! Anchor identifiers and size classes.
//!
//! Both enums are closed. Parsing from caller-supplied strings comes in two
//! flavours: the strict [`FromStr`] impl, and `parse_lossy`, which never
//! fails and is what serde uses. An unknown anchor becomes [`PositionId::Top`],
//! an unknown size class becomes [`SizeClass::Auto`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::block::BlockError;

/// Smallest base font size a size class can produce (pixels).
pub const MIN_BASE_SIZE: u32 = 16;
/// Largest base font size a size class can produce (pixels).
pub const MAX_BASE_SIZE: u32 = 120;

// ── Anchors ─────────────────────────────────────────────────────────

/// One of the 10 named anchor points a text block can be attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum PositionId {
    Top,
    Bottom,
    Left1,
    Left2,
    Left3,
    Left4,
    Right1,
    Right2,
    Right3,
    Right4,
}

impl Default for PositionId {
    fn default() -> Self {
        Self::Top
    }
}

impl PositionId {
    /// Every anchor, top to bottom, left column before right column.
    pub const ALL: [PositionId; 10] = [
        PositionId::Top,
        PositionId::Left1,
        PositionId::Left2,
        PositionId::Left3,
        PositionId::Left4,
        PositionId::Right1,
        PositionId::Right2,
        PositionId::Right3,
        PositionId::Right4,
        PositionId::Bottom,
    ];

    /// Wire name (`top`, `left_1`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left1 => "left_1",
            Self::Left2 => "left_2",
            Self::Left3 => "left_3",
            Self::Left4 => "left_4",
            Self::Right1 => "right_1",
            Self::Right2 => "right_2",
            Self::Right3 => "right_3",
            Self::Right4 => "right_4",
        }
    }

    /// Parse a caller-supplied name, falling back to [`PositionId::Top`].
    pub fn parse_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unknown position {name:?}, falling back to top");
            Self::Top
        })
    }
}

impl FromStr for PositionId {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| BlockError::UnknownPosition(s.to_string()))
    }
}

impl From<String> for PositionId {
    fn from(name: String) -> Self {
        Self::parse_lossy(&name)
    }
}

impl From<PositionId> for &'static str {
    fn from(id: PositionId) -> Self {
        id.as_str()
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Alignment ───────────────────────────────────────────────────────

/// Which edge of a line sits on the anchor's x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Which edge of a block sits on the anchor's y coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

// ── Size classes ────────────────────────────────────────────────────

/// Coarse starting font size, refined later by auto-fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    Auto,
}

impl Default for SizeClass {
    fn default() -> Self {
        Self::Auto
    }
}

impl SizeClass {
    pub const ALL: [SizeClass; 4] = [
        SizeClass::Small,
        SizeClass::Medium,
        SizeClass::Large,
        SizeClass::Auto,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Auto => "auto",
        }
    }

    /// Base font size as a fraction of image height.
    pub fn height_ratio(self) -> f64 {
        match self {
            Self::Small => 0.05,
            Self::Medium => 0.08,
            Self::Large => 0.11,
            Self::Auto => 0.08,
        }
    }

    /// Starting font size for an image of the given height, clamped to
    /// [`MIN_BASE_SIZE`]..=[`MAX_BASE_SIZE`].
    pub fn base_size(self, image_height: u32) -> u32 {
        let raw = (f64::from(image_height) * self.height_ratio()) as u32;
        raw.clamp(MIN_BASE_SIZE, MAX_BASE_SIZE)
    }

    /// Parse a caller-supplied name; anything unrecognised is `Auto`.
    pub fn parse_lossy(name: &str) -> Self {
        match name {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            _ => Self::Auto,
        }
    }
}

impl From<String> for SizeClass {
    fn from(name: String) -> Self {
        Self::parse_lossy(&name)
    }
}

impl From<SizeClass> for &'static str {
    fn from(class: SizeClass) -> Self {
        class.as_str()
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===================================================================
// Tests
// ===================================================================
