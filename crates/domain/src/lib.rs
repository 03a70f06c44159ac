//! OnlineCity domain: describing tradeable items and matching them against
//! trade requests.
//!
//! The game itself is reached only through the traits in [`ports`].

pub mod def_database;
pub mod entities;
pub mod error;
pub mod item_descriptor;
pub mod matching;
pub mod ports;
pub mod request;
pub mod value_objects;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use def_database::InMemoryDefDatabase;
pub use entities::ThingDef;
pub use error::DomainError;
pub use item_descriptor::{
    ConcreteState, DescriptorKind, ItemDescriptor, PatternCriteria, Resolved, StuffResolution,
    ThingTradeRecord,
};
pub use matching::{
    count_matching, explain_mismatch, find_matching, hit_percent, matches, matches_descriptor,
    MatchFailure,
};
pub use ports::{ThingDefDatabase, ThingSource};
pub use request::PatternRequest;
pub use value_objects::{DefName, DurabilityPercent, QualityCategory};
