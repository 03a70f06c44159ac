//! Quality tier value object
//!
//! A fixed ordinal scale shared by concrete items (exact tier) and request
//! patterns (minimum acceptable tier). On the wire the tier travels as its
//! integer ordinal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Quality tier, ordered from worst to best
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum QualityCategory {
    /// Lowest tier; also stands in for items without a quality system
    #[default]
    Awful = 0,
    Poor = 1,
    Normal = 2,
    Good = 3,
    Excellent = 4,
    Masterwork = 5,
    Legendary = 6,
}

impl QualityCategory {
    /// Bottom of the scale
    pub const MIN: QualityCategory = QualityCategory::Awful;

    /// Top of the scale
    pub const MAX: QualityCategory = QualityCategory::Legendary;

    /// All tiers in ascending order
    pub fn all() -> &'static [QualityCategory] {
        &[
            QualityCategory::Awful,
            QualityCategory::Poor,
            QualityCategory::Normal,
            QualityCategory::Good,
            QualityCategory::Excellent,
            QualityCategory::Masterwork,
            QualityCategory::Legendary,
        ]
    }

    /// Integer ordinal used by the wire format
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Lower-case label used in item descriptions
    pub fn label(self) -> &'static str {
        match self {
            Self::Awful => "awful",
            Self::Poor => "poor",
            Self::Normal => "normal",
            Self::Good => "good",
            Self::Excellent => "excellent",
            Self::Masterwork => "masterwork",
            Self::Legendary => "legendary",
        }
    }
}

impl fmt::Display for QualityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<u8> for QualityCategory {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::all().get(usize::from(value)) {
            Some(quality) => Ok(*quality),
            None => Err(DomainError::parse(format!(
                "Unknown quality ordinal: {}",
                value
            ))),
        }
    }
}

impl From<QualityCategory> for u8 {
    fn from(quality: QualityCategory) -> u8 {
        quality.ordinal()
    }
}

impl std::str::FromStr for QualityCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "awful" => Ok(Self::Awful),
            "poor" => Ok(Self::Poor),
            "normal" => Ok(Self::Normal),
            "good" => Ok(Self::Good),
            "excellent" => Ok(Self::Excellent),
            "masterwork" => Ok(Self::Masterwork),
            "legendary" => Ok(Self::Legendary),
            _ => Err(DomainError::parse(format!("Unknown quality: {}", s))),
        }
    }
}
