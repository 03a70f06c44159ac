//! In-memory definition database

use std::collections::HashMap;

use crate::entities::ThingDef;
use crate::ports::ThingDefDatabase;
use crate::value_objects::DefName;

/// Definition database backed by a map, filled once by the host at startup
#[derive(Debug, Clone, Default)]
pub struct InMemoryDefDatabase {
    defs: HashMap<DefName, ThingDef>,
}

impl InMemoryDefDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any previous one with the same name
    pub fn insert(&mut self, def: ThingDef) {
        self.defs.insert(def.def_name.clone(), def);
    }

    pub fn with(mut self, def: ThingDef) -> Self {
        self.insert(def);
        self
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl FromIterator<ThingDef> for InMemoryDefDatabase {
    fn from_iter<I: IntoIterator<Item = ThingDef>>(iter: I) -> Self {
        let mut db = Self::new();
        for def in iter {
            db.insert(def);
        }
        db
    }
}

impl ThingDefDatabase for InMemoryDefDatabase {
    fn resolve(&self, def_name: &str) -> Option<ThingDef> {
        self.defs.get(def_name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_and_unknown() {
        let db: InMemoryDefDatabase = [
            ThingDef::new("Steel", "steel"),
            ThingDef::new("Apparel_Parka", "parka").with_default_stuff("Cloth"),
        ]
        .into_iter()
        .collect();

        assert_eq!(db.len(), 2);
        assert_eq!(
            db.resolve("Apparel_Parka").and_then(|d| d.default_stuff),
            Some(DefName::new("Cloth"))
        );
        assert!(db.resolve("apparel_parka").is_none());
        assert!(db.resolve("").is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let db = InMemoryDefDatabase::new()
            .with(ThingDef::new("Steel", "steel"))
            .with(ThingDef::new("Steel", "refined steel"));
        assert_eq!(db.len(), 1);
        assert_eq!(
            db.resolve("Steel").map(|d| d.label),
            Some("refined steel".into())
        );
    }
}
