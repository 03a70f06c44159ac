//! Memoized definition lookups for descriptors

use crate::entities::ThingDef;
use crate::ports::ThingDefDatabase;

use super::ItemDescriptor;

/// Outcome of looking up a definition by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<T> {
    Found(T),
    /// The name is set but the database has no such definition
    NotFound,
}

impl<T> Resolved<T> {
    pub fn found(&self) -> Option<&T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl<T> From<Option<T>> for Resolved<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// Outcome of resolving a descriptor's material
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StuffResolution {
    Found(ThingDef),
    /// No material applies: none was named and none is substituted
    Unconstrained,
    /// A material was named (or is the type's default) but is unknown
    NotFound,
}

impl StuffResolution {
    pub fn found(&self) -> Option<&ThingDef> {
        match self {
            Self::Found(def) => Some(def),
            Self::Unconstrained | Self::NotFound => None,
        }
    }

    fn lookup(db: &dyn ThingDefDatabase, name: &str) -> Self {
        db.resolve(name).map_or(Self::NotFound, Self::Found)
    }
}

impl ItemDescriptor {
    /// The thing definition behind `def_name`.
    ///
    /// Computed on first call and reused afterwards, so every later call
    /// returns that first answer whatever `db` is passed.
    pub fn resolved_def(&self, db: &dyn ThingDefDatabase) -> &Resolved<ThingDef> {
        self.def_cache
            .get_or_init(|| db.resolve(self.def_name.as_str()).into())
    }

    /// The material definition behind `stuff_name`.
    ///
    /// A pattern that names no material resolves to its type's default
    /// stuff; a concrete item that names none stays unconstrained. An empty
    /// name counts as no name here. Memoized like
    /// [`resolved_def`](Self::resolved_def).
    pub fn resolved_stuff(&self, db: &dyn ThingDefDatabase) -> &StuffResolution {
        self.stuff_cache.get_or_init(|| {
            match self.stuff_name.as_ref().filter(|name| !name.is_empty()) {
                Some(name) => StuffResolution::lookup(db, name.as_str()),
                None if self.is_concrete() => StuffResolution::Unconstrained,
                None => {
                    let default = self
                        .resolved_def(db)
                        .found()
                        .and_then(|def| def.default_stuff.as_ref());
                    match default {
                        Some(default) => StuffResolution::lookup(db, default.as_str()),
                        None => StuffResolution::Unconstrained,
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::def_database::InMemoryDefDatabase;
    use crate::ports::MockThingDefDatabase;
    use crate::test_fixtures::FakeThing;
    use crate::value_objects::{DefName, QualityCategory};

    fn database() -> InMemoryDefDatabase {
        [
            ThingDef::new("Apparel_Parka", "parka").with_default_stuff("Cloth"),
            ThingDef::new("Gun_Revolver", "revolver"),
            ThingDef::new("Cloth", "cloth"),
            ThingDef::new("Steel", "steel"),
        ]
        .into_iter()
        .collect()
    }

    fn parka_pattern() -> ItemDescriptor {
        ItemDescriptor::from_pattern(
            &ThingDef::new("Apparel_Parka", "parka").with_default_stuff("Cloth"),
            0.5,
            QualityCategory::Normal,
            1,
        )
        .expect("valid pattern")
    }

    #[test]
    fn test_resolved_def_found_and_not_found() {
        let db = database();
        let known = ItemDescriptor::from_thing(&FakeThing::new("Gun_Revolver"), 1)
            .expect("valid thing");
        assert_eq!(
            known.resolved_def(&db).found().map(|d| d.label.as_str()),
            Some("revolver")
        );

        let unknown =
            ItemDescriptor::from_thing(&FakeThing::new("Gun_Mystery"), 1).expect("valid thing");
        assert_eq!(unknown.resolved_def(&db), &Resolved::NotFound);
    }

    #[test]
    fn test_resolved_def_is_memoized() {
        let mut db = MockThingDefDatabase::new();
        db.expect_resolve()
            .times(1)
            .returning(|name| Some(ThingDef::new(name, "steel")));

        let item = ItemDescriptor::from_thing(&FakeThing::new("Steel"), 1).expect("valid thing");
        assert!(item.resolved_def(&db).is_found());
        assert!(item.resolved_def(&db).is_found());
    }

    #[test]
    fn test_pattern_without_stuff_gets_default() {
        let db = database();
        let pattern = parka_pattern();
        assert_eq!(
            pattern.resolved_stuff(&db).found().map(|d| &d.def_name),
            Some(&DefName::new("Cloth"))
        );
        // The name itself stays unset.
        assert_eq!(pattern.stuff_name(), None);
    }

    #[test]
    fn test_pattern_with_explicit_stuff() {
        let db = database();
        let steel = parka_pattern().with_stuff(Some(DefName::new("Steel")));
        assert_eq!(
            steel.resolved_stuff(&db).found().map(|d| d.label.as_str()),
            Some("steel")
        );

        let unknown = parka_pattern().with_stuff(Some(DefName::new("Hyperweave")));
        assert_eq!(unknown.resolved_stuff(&db), &StuffResolution::NotFound);
    }

    #[test]
    fn test_concrete_without_stuff_is_unconstrained() {
        let db = database();
        let item =
            ItemDescriptor::from_thing(&FakeThing::new("Apparel_Parka"), 1).expect("valid thing");
        assert_eq!(item.resolved_stuff(&db), &StuffResolution::Unconstrained);
    }

    #[test]
    fn test_empty_stuff_name_counts_as_unset() {
        let db = database();
        let pattern = parka_pattern().with_stuff(Some(DefName::new("")));
        assert!(pattern.resolved_stuff(&db).found().is_some());
    }

    #[test]
    fn test_pattern_for_type_without_default_stuff() {
        let db = database();
        let pattern = ItemDescriptor::from_pattern(
            &ThingDef::new("Gun_Revolver", "revolver"),
            0.0,
            QualityCategory::MIN,
            1,
        )
        .expect("valid pattern");
        assert_eq!(pattern.resolved_stuff(&db), &StuffResolution::Unconstrained);
    }

    #[test]
    fn test_resolution_is_safe_across_threads() {
        let db = database();
        let pattern = parka_pattern();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert!(pattern.resolved_stuff(&db).found().is_some());
                });
            }
        });
    }
}
