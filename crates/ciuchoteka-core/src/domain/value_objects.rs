//! Domain value objects: Category, RecordId, PhotoProfile.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity of their
//! own. This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Category ─────────────────────────────────────────────────────────────────

/// The closed set of clothing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Outerwear,
    Bottom,
    Shoes,
    Accessories,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Outerwear,
        Self::Bottom,
        Self::Shoes,
        Self::Accessories,
        Self::Other,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Outerwear => "outerwear",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
            Self::Accessories => "accessories",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outerwear" => Ok(Self::Outerwear),
            "bottom" | "bottoms" => Ok(Self::Bottom),
            "shoes" => Ok(Self::Shoes),
            "accessories" | "accessory" => Ok(Self::Accessories),
            "other" => Ok(Self::Other),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

// ── RecordId ─────────────────────────────────────────────────────────────────

/// Opaque identifier of a clothing item or outfit.
///
/// Serialised as a bare string. Construction is unchecked: ids read back from
/// storage or a backup are taken as they are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ── PhotoProfile ─────────────────────────────────────────────────────────────

/// Which kind of record a photo is compressed for.
///
/// Outfit photos are full-body shots and keep a larger bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoProfile {
    ClothingItem,
    Outfit,
}

impl PhotoProfile {
    /// Maximum allowed size of the encoded photo.
    pub const MAX_ENCODED_BYTES: usize = 80 * 1024;

    /// Starting JPEG quality (0-100).
    pub const INITIAL_QUALITY: u8 = 70;

    /// Longest side in pixels after down-scaling.
    pub const fn max_dimension(&self) -> u32 {
        match self {
            Self::ClothingItem => 600,
            Self::Outfit => 800,
        }
    }
}

impl fmt::Display for PhotoProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClothingItem => f.write_str("clothing-item"),
            Self::Outfit => f.write_str("outfit"),
        }
    }
}
