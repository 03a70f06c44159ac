//! Item descriptor - A tradeable item, either concrete or requested
//!
//! A descriptor is one of two shapes sharing the same common fields:
//!
//! - **Concrete**: a snapshot of one specific item instance with exact
//!   durability points, quality and corpse flag.
//! - **Pattern**: the minimum acceptance criteria of a trade request, with
//!   durability as a percentage and quality as a lower bound.
//!
//! Both shapes travel over the wire as the same flat record (see
//! [`ThingTradeRecord`]), told apart by its `concrete` flag.
//!
//! Descriptors are immutable once built. The only interior state is the
//! memoized definition lookups, which never change what a descriptor reports.

mod label;
mod resolution;
mod wire;

use std::num::NonZeroU32;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::entities::ThingDef;
use crate::error::DomainError;
use crate::ports::{ThingDefDatabase, ThingSource};
use crate::request::PatternRequest;
use crate::value_objects::{DefName, DurabilityPercent, QualityCategory};

pub use resolution::{Resolved, StuffResolution};
pub use wire::ThingTradeRecord;

/// A concrete item or a request pattern
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ThingTradeRecord", into = "ThingTradeRecord")]
pub struct ItemDescriptor {
    def_name: DefName,
    stuff_name: Option<DefName>,
    name: String,
    count: NonZeroU32,
    kind: DescriptorKind,
    /// Set by the exchange rules when the item cannot be offered; never sent
    excluded_from_trade: bool,
    def_cache: OnceLock<Resolved<ThingDef>>,
    stuff_cache: OnceLock<StuffResolution>,
}

/// Variant payload of an [`ItemDescriptor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    Concrete(ConcreteState),
    Pattern(PatternCriteria),
}

/// Exact facts about one item instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcreteState {
    /// Current durability in points (0 is reported by the game for "at maximum")
    pub hit_points: u32,
    /// Always greater than zero
    pub max_hit_points: u32,
    pub quality: QualityCategory,
    pub worn_by_corpse: bool,
}

/// Acceptance thresholds of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternCriteria {
    pub min_durability: DurabilityPercent,
    pub min_quality: QualityCategory,
    /// Whether items taken off a corpse are acceptable
    pub allow_worn_by_corpse: bool,
}

impl ItemDescriptor {
    /// Snapshot a live game object into a concrete descriptor.
    ///
    /// Things without a quality system get the bottom of the quality scale;
    /// things that are not apparel are never worn by a corpse.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `count` is zero or the thing
    /// reports no maximum durability.
    pub fn from_thing(thing: &dyn ThingSource, count: u32) -> Result<Self, DomainError> {
        let count = non_zero_count(count)?;
        let def_name = thing.def_name();
        let max_hit_points = thing.max_hit_points();
        if max_hit_points == 0 {
            return Err(DomainError::validation(format!(
                "Thing {} reports no maximum durability",
                def_name
            )));
        }

        let state = ConcreteState {
            hit_points: thing.hit_points(),
            max_hit_points,
            quality: thing.quality().unwrap_or(QualityCategory::MIN),
            worn_by_corpse: thing.worn_by_corpse().unwrap_or(false),
        };

        Ok(Self::assemble(
            def_name,
            thing.stuff_name(),
            thing.label(),
            count,
            DescriptorKind::Concrete(state),
        ))
    }

    /// Like [`from_thing`](Self::from_thing), for callers whose lookup of the
    /// live object may have come back empty.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingThing` if `thing` is `None`.
    pub fn try_from_thing(
        thing: Option<&dyn ThingSource>,
        count: u32,
    ) -> Result<Self, DomainError> {
        let thing = thing.ok_or(DomainError::MissingThing)?;
        Self::from_thing(thing, count)
    }

    /// Build a request pattern for `def`.
    ///
    /// `min_hit_points_fraction` is stored as a whole percentage, truncated
    /// (0.75 is stored as 75). The pattern names no material and does not
    /// accept corpse-worn items; refine with [`with_stuff`](Self::with_stuff)
    /// and [`allowing_worn_by_corpse`](Self::allowing_worn_by_corpse).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `count` is zero or the fraction is
    /// outside `[0, 1]`.
    pub fn from_pattern(
        def: &ThingDef,
        min_hit_points_fraction: f32,
        min_quality: QualityCategory,
        count: u32,
    ) -> Result<Self, DomainError> {
        let count = non_zero_count(count)?;
        let criteria = PatternCriteria {
            min_durability: DurabilityPercent::from_fraction(min_hit_points_fraction)?,
            min_quality,
            allow_worn_by_corpse: false,
        };

        let descriptor = Self::assemble(
            def.def_name.clone(),
            None,
            def.label_cap(),
            count,
            DescriptorKind::Pattern(criteria),
        );
        // The definition is already at hand; seed the cache with it.
        let _ = descriptor.def_cache.set(Resolved::Found(def.clone()));
        Ok(descriptor)
    }

    /// Build a request pattern from a request builder's output.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the requested type is unknown to
    /// `db`, or any error of [`from_pattern`](Self::from_pattern).
    pub fn from_request(
        request: &PatternRequest,
        db: &dyn ThingDefDatabase,
    ) -> Result<Self, DomainError> {
        let def_name = request.def_name.as_str();
        let def = db
            .resolve(def_name)
            .ok_or_else(|| DomainError::not_found("ThingDef", def_name))?;
        Self::from_pattern(
            &def,
            request.min_hit_points_fraction,
            request.min_quality,
            request.count,
        )
    }

    /// Require a specific material. No effect on concrete descriptors, whose
    /// material is a fact of the item.
    pub fn with_stuff(mut self, stuff: Option<DefName>) -> Self {
        if !self.is_concrete() {
            self.stuff_name = stuff;
            self.stuff_cache = OnceLock::new();
        }
        self
    }

    /// Accept or refuse corpse-worn items. No effect on concrete descriptors.
    pub fn allowing_worn_by_corpse(mut self, allow: bool) -> Self {
        if let DescriptorKind::Pattern(criteria) = &mut self.kind {
            criteria.allow_worn_by_corpse = allow;
        }
        self
    }

    fn assemble(
        def_name: DefName,
        stuff_name: Option<DefName>,
        name: String,
        count: NonZeroU32,
        kind: DescriptorKind,
    ) -> Self {
        Self {
            def_name,
            stuff_name,
            name,
            count,
            kind,
            excluded_from_trade: false,
            def_cache: OnceLock::new(),
            stuff_cache: OnceLock::new(),
        }
    }

    /// Whether this describes one specific item rather than a request
    pub fn is_concrete(&self) -> bool {
        matches!(self.kind, DescriptorKind::Concrete(_))
    }

    /// Variant payload
    pub fn kind(&self) -> &DescriptorKind {
        &self.kind
    }

    /// Name of the thing definition
    pub fn def_name(&self) -> &DefName {
        &self.def_name
    }

    /// Material name, `None` when unset
    pub fn stuff_name(&self) -> Option<&DefName> {
        self.stuff_name.as_ref()
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of items described (at least 1)
    pub fn count(&self) -> u32 {
        self.count.get()
    }

    /// Durability as stored: points when concrete, percent when a pattern
    pub fn hit_points(&self) -> u32 {
        match &self.kind {
            DescriptorKind::Concrete(state) => state.hit_points,
            DescriptorKind::Pattern(criteria) => criteria.min_durability.value(),
        }
    }

    /// Real maximum when concrete, the fixed percentage scale when a pattern
    pub fn max_hit_points(&self) -> u32 {
        match &self.kind {
            DescriptorKind::Concrete(state) => state.max_hit_points,
            DescriptorKind::Pattern(_) => DurabilityPercent::SCALE,
        }
    }

    /// Exact tier when concrete, minimum tier when a pattern
    pub fn quality(&self) -> QualityCategory {
        match &self.kind {
            DescriptorKind::Concrete(state) => state.quality,
            DescriptorKind::Pattern(criteria) => criteria.min_quality,
        }
    }

    /// Whether the item was worn by a corpse (concrete) or such items are
    /// acceptable (pattern)
    pub fn worn_by_corpse(&self) -> bool {
        match &self.kind {
            DescriptorKind::Concrete(state) => state.worn_by_corpse,
            DescriptorKind::Pattern(criteria) => criteria.allow_worn_by_corpse,
        }
    }

    /// Whether the exchange rules have withheld this item
    pub fn is_excluded_from_trade(&self) -> bool {
        self.excluded_from_trade
    }

    /// Withhold the item from trade, or release it
    pub fn set_excluded_from_trade(&mut self, excluded: bool) {
        self.excluded_from_trade = excluded;
    }
}

impl PartialEq for ItemDescriptor {
    /// Compares the wire-visible fields only.
    fn eq(&self, other: &Self) -> bool {
        self.def_name == other.def_name
            && self.stuff_name == other.stuff_name
            && self.name == other.name
            && self.count == other.count
            && self.kind == other.kind
    }
}

impl Eq for ItemDescriptor {}

fn non_zero_count(count: u32) -> Result<NonZeroU32, DomainError> {
    NonZeroU32::new(count).ok_or_else(|| DomainError::validation("Item count must be at least 1"))
}
