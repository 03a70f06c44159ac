//! Durability threshold for request patterns

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Minimum acceptable durability of a pattern, as a whole percentage (0..=100)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct DurabilityPercent(u8);

impl DurabilityPercent {
    /// Scale a pattern's stored maximum is fixed at
    pub const SCALE: u32 = 100;

    pub const ZERO: DurabilityPercent = DurabilityPercent(0);
    pub const FULL: DurabilityPercent = DurabilityPercent(100);

    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `percent` exceeds 100.
    pub fn new(percent: u32) -> Result<Self, DomainError> {
        u8::try_from(percent)
            .ok()
            .filter(|p| u32::from(*p) <= Self::SCALE)
            .map(Self)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "Durability percent must be within 0..=100, got {}",
                    percent
                ))
            })
    }

    /// Convert a fraction in `[0, 1]` by scaling ×100 and truncating.
    ///
    /// `0.75` becomes `75`. Truncation (not rounding) is what requests have
    /// always been stored with.
    pub fn from_fraction(fraction: f32) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(DomainError::validation(format!(
                "Durability fraction must be within [0, 1], got {}",
                fraction
            )));
        }
        // In range, so the cast cannot saturate.
        Self::new((fraction * 100.0) as u32)
    }

    pub fn value(self) -> u32 {
        u32::from(self.0)
    }
}

impl fmt::Display for DurabilityPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u32> for DurabilityPercent {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DurabilityPercent> for u32 {
    fn from(percent: DurabilityPercent) -> u32 {
        percent.value()
    }
}
