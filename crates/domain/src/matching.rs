//! Match engine - Does a live item satisfy a trade request?
//!
//! Checks run cheapest first and stop at the first failure:
//!
//! 1. a live object must be present
//! 2. its type must equal the pattern's type (exact, case-sensitive)
//! 3. it is re-described from scratch with a count of 1, so nothing stale
//!    from an earlier snapshot takes part
//! 4. materials must be equal (absent equals absent only)
//! 5. quality must be at least the pattern's
//! 6. corpse-worn items need a pattern that accepts them
//! 7. durability must reach the pattern's threshold
//!
//! Nothing here fails loudly: every problem is a `false`.

use std::fmt;

use crate::item_descriptor::{DescriptorKind, ItemDescriptor};
use crate::ports::ThingSource;

/// The check that rejected a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchFailure {
    MissingThing,
    TypeMismatch,
    /// The live object could not be described (no maximum durability)
    Undescribable,
    StuffMismatch,
    QualityTooLow,
    WornByCorpse,
    DurabilityTooLow,
}

impl fmt::Display for MatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingThing => write!(f, "missing thing"),
            Self::TypeMismatch => write!(f, "type mismatch"),
            Self::Undescribable => write!(f, "undescribable thing"),
            Self::StuffMismatch => write!(f, "stuff mismatch"),
            Self::QualityTooLow => write!(f, "quality too low"),
            Self::WornByCorpse => write!(f, "worn by corpse"),
            Self::DurabilityTooLow => write!(f, "durability too low"),
        }
    }
}

/// Whether `thing` satisfies `pattern`.
pub fn matches(thing: Option<&dyn ThingSource>, pattern: &ItemDescriptor) -> bool {
    match explain_mismatch(thing, pattern) {
        None => true,
        Some(failure) => {
            tracing::trace!(
                def_name = %pattern.def_name(),
                %failure,
                "Thing does not match pattern"
            );
            false
        }
    }
}

/// [`matches`] for callers holding the concrete descriptor of the thing too.
///
/// A descriptor of another type is rejected before the live object is
/// consulted.
pub fn matches_descriptor(
    concrete: &ItemDescriptor,
    thing: Option<&dyn ThingSource>,
    pattern: &ItemDescriptor,
) -> bool {
    if concrete.def_name() != pattern.def_name() {
        return false;
    }
    matches(thing, pattern)
}

/// The first check `thing` fails against `pattern`, or `None` if it matches.
pub fn explain_mismatch(
    thing: Option<&dyn ThingSource>,
    pattern: &ItemDescriptor,
) -> Option<MatchFailure> {
    let Some(thing) = thing else {
        return Some(MatchFailure::MissingThing);
    };
    if thing.def_name() != *pattern.def_name() {
        return Some(MatchFailure::TypeMismatch);
    }

    let Ok(test) = ItemDescriptor::from_thing(thing, 1) else {
        return Some(MatchFailure::Undescribable);
    };
    let DescriptorKind::Concrete(state) = test.kind() else {
        return Some(MatchFailure::Undescribable);
    };

    if test.stuff_name() != pattern.stuff_name() {
        return Some(MatchFailure::StuffMismatch);
    }
    if state.quality < pattern.quality() {
        return Some(MatchFailure::QualityTooLow);
    }
    if state.worn_by_corpse && !pattern.worn_by_corpse() {
        return Some(MatchFailure::WornByCorpse);
    }

    let Some(percent) = hit_percent(state.hit_points, state.max_hit_points) else {
        return Some(MatchFailure::Undescribable);
    };
    let threshold = match pattern.kind() {
        DescriptorKind::Pattern(criteria) => Some(u64::from(criteria.min_durability.value())),
        // A concrete item used as the pattern asks for at least its own
        // condition, compared in percent.
        DescriptorKind::Concrete(wanted) => {
            (u64::from(wanted.hit_points) * 100).checked_div(u64::from(wanted.max_hit_points))
        }
    };
    match threshold {
        Some(threshold) if u64::from(percent) >= threshold => None,
        _ => Some(MatchFailure::DurabilityTooLow),
    }
}

/// Durability in whole percent, biased up by one point before dividing.
///
/// `(hit_points + 1) * 100 / max_hit_points`, so 74 of 100 reads as 75%.
/// `None` when `max_hit_points` is zero.
pub fn hit_percent(hit_points: u32, max_hit_points: u32) -> Option<u32> {
    let scaled = (u64::from(hit_points) + 1) * 100;
    let percent = scaled.checked_div(u64::from(max_hit_points))?;
    Some(u32::try_from(percent).unwrap_or(u32::MAX))
}

/// Every thing among `things` that satisfies `pattern`, in order.
pub fn find_matching<'a, I>(things: I, pattern: &ItemDescriptor) -> Vec<&'a dyn ThingSource>
where
    I: IntoIterator<Item = &'a dyn ThingSource>,
{
    things
        .into_iter()
        .filter(|thing| matches(Some(*thing), pattern))
        .collect()
}

/// Total stack count of the things among `things` that satisfy `pattern`.
///
/// Compare against the pattern's `count` to see whether a request can be
/// filled.
pub fn count_matching<'a, I>(things: I, pattern: &ItemDescriptor) -> u32
where
    I: IntoIterator<Item = &'a dyn ThingSource>,
{
    find_matching(things, pattern)
        .iter()
        .map(|thing| thing.stack_count())
        .fold(0, u32::saturating_add)
}
