//! ThingDef entity - A thing type or material as the game defines it
//!
//! Only the slice of the game's definition that trading needs is carried
//! here. Hosts build these from their own definition database and expose
//! them through [`ThingDefDatabase`](crate::ports::ThingDefDatabase).

use serde::{Deserialize, Serialize};

use crate::value_objects::DefName;

/// A thing or stuff definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingDef {
    pub def_name: DefName,
    /// Lower-case label as the game shows it in running text
    pub label: String,
    /// Material substituted when a request names none (None = not made from stuff)
    pub default_stuff: Option<DefName>,
}

impl ThingDef {
    pub fn new(def_name: impl Into<DefName>, label: impl Into<String>) -> Self {
        Self {
            def_name: def_name.into(),
            label: label.into(),
            default_stuff: None,
        }
    }

    pub fn with_default_stuff(mut self, stuff: impl Into<DefName>) -> Self {
        self.default_stuff = Some(stuff.into());
        self
    }

    /// Label with its first character upper-cased, for titles
    pub fn label_cap(&self) -> String {
        let mut chars = self.label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
