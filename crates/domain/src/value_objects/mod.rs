//! Value objects - Immutable objects defined by their attributes

mod def_name;
mod durability;
mod quality;

pub use def_name::DefName;
pub use durability::DurabilityPercent;
pub use quality::QualityCategory;
