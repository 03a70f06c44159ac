//! Ports to the host game.
//!
//! The domain never touches the game's object model directly. Hosts adapt
//! their live objects and definition database to these traits.

use crate::entities::ThingDef;
use crate::value_objects::{DefName, QualityCategory};

/// Read-only view of a live game object (the inventory adapter).
#[cfg_attr(test, mockall::automock)]
pub trait ThingSource {
    fn def_name(&self) -> DefName;

    /// Material the thing is made from, if it is made from stuff at all
    fn stuff_name(&self) -> Option<DefName>;

    /// Capitalized label without the stack count
    fn label(&self) -> String;

    fn hit_points(&self) -> u32;

    fn max_hit_points(&self) -> u32;

    /// Quality capability; `None` when the thing has no quality system
    fn quality(&self) -> Option<QualityCategory>;

    /// Apparel capability; `None` when the thing is not apparel
    fn worn_by_corpse(&self) -> Option<bool>;

    /// Number of items in this stack
    fn stack_count(&self) -> u32 {
        1
    }
}

/// Lookup of thing and stuff definitions by name.
#[cfg_attr(test, mockall::automock)]
pub trait ThingDefDatabase: Send + Sync {
    fn resolve(&self, def_name: &str) -> Option<ThingDef>;
}
