//! Pattern request - What a player asks for in a trade
//!
//! The request builder on the client side fills one of these from the trade
//! dialog. [`ItemDescriptor::from_request`](crate::ItemDescriptor::from_request)
//! turns it into a pattern descriptor once the type is resolved.

use serde::{Deserialize, Serialize};

use crate::value_objects::{DefName, QualityCategory};

/// Desired item type plus acceptance thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRequest {
    pub def_name: DefName,
    /// Minimum durability as a fraction of maximum, in `[0, 1]`
    pub min_hit_points_fraction: f32,
    #[serde(default)]
    pub min_quality: QualityCategory,
    pub count: u32,
}

impl PatternRequest {
    pub fn new(def_name: impl Into<DefName>, count: u32) -> Self {
        Self {
            def_name: def_name.into(),
            min_hit_points_fraction: 0.0,
            min_quality: QualityCategory::MIN,
            count,
        }
    }

    pub fn with_min_hit_points(mut self, fraction: f32) -> Self {
        self.min_hit_points_fraction = fraction;
        self
    }

    pub fn with_min_quality(mut self, quality: QualityCategory) -> Self {
        self.min_quality = quality;
        self
    }
}
