//! Two-line description shown in trade windows

use std::fmt;

use super::{DescriptorKind, ItemDescriptor};

impl ItemDescriptor {
    /// Name (with stack count) on the first line, condition on the second.
    ///
    /// Concrete items state their exact quality and durability; patterns
    /// state the thresholds as "and better" / "and more".
    pub fn display_label(&self) -> String {
        let mut label = self.name.clone();
        if self.count() > 1 {
            label.push_str(&format!(" x{}", self.count()));
        }
        label.push('\n');

        match &self.kind {
            DescriptorKind::Concrete(state) => {
                label.push_str(&format!(
                    "Quality {}. Durability {} of {}",
                    state.quality, state.hit_points, state.max_hit_points
                ));
                if state.worn_by_corpse {
                    label.push_str(" Salvaged from corpse");
                }
            }
            DescriptorKind::Pattern(criteria) => {
                label.push_str(&format!(
                    "Quality {} and better. Durability {}% and more",
                    criteria.min_quality,
                    criteria.min_durability.value()
                ));
                if criteria.allow_worn_by_corpse {
                    label.push_str(" May be salvaged from corpse");
                }
            }
        }
        label
    }
}

impl fmt::Display for ItemDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}
