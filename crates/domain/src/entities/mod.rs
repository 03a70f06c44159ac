//! Domain entities - Definitions looked up by name

mod thing_def;

pub use thing_def::ThingDef;
