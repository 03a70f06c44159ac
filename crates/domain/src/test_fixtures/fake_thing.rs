//! Hand-built stand-in for a live game object.
//!
//! Mock expectations get noisy when a test only cares about one field, so
//! most tests build a `FakeThing` with the defaults of an intact, normal
//! quality, non-apparel item and override what they need.

use crate::ports::ThingSource;
use crate::value_objects::{DefName, QualityCategory};

#[derive(Debug, Clone)]
pub struct FakeThing {
    pub def_name: DefName,
    pub stuff_name: Option<DefName>,
    pub label: String,
    pub hit_points: u32,
    pub max_hit_points: u32,
    pub quality: Option<QualityCategory>,
    pub worn_by_corpse: Option<bool>,
    pub stack_count: u32,
}

impl FakeThing {
    pub fn new(def_name: &str) -> Self {
        Self {
            def_name: DefName::new(def_name),
            stuff_name: None,
            label: def_name.to_string(),
            hit_points: 100,
            max_hit_points: 100,
            quality: Some(QualityCategory::Normal),
            worn_by_corpse: None,
            stack_count: 1,
        }
    }

    pub fn stuff(mut self, stuff: &str) -> Self {
        self.stuff_name = Some(DefName::new(stuff));
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn hit_points(mut self, hit_points: u32, max_hit_points: u32) -> Self {
        self.hit_points = hit_points;
        self.max_hit_points = max_hit_points;
        self
    }

    pub fn quality(mut self, quality: Option<QualityCategory>) -> Self {
        self.quality = quality;
        self
    }

    /// Make the thing apparel with the given corpse flag
    pub fn apparel(mut self, worn_by_corpse: bool) -> Self {
        self.worn_by_corpse = Some(worn_by_corpse);
        self
    }

    pub fn stack(mut self, count: u32) -> Self {
        self.stack_count = count;
        self
    }
}

impl ThingSource for FakeThing {
    fn def_name(&self) -> DefName {
        self.def_name.clone()
    }

    fn stuff_name(&self) -> Option<DefName> {
        self.stuff_name.clone()
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn hit_points(&self) -> u32 {
        self.hit_points
    }

    fn max_hit_points(&self) -> u32 {
        self.max_hit_points
    }

    fn quality(&self) -> Option<QualityCategory> {
        self.quality
    }

    fn worn_by_corpse(&self) -> Option<bool> {
        self.worn_by_corpse
    }

    fn stack_count(&self) -> u32 {
        self.stack_count
    }
}
