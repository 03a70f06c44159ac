//! Flat wire record for item descriptors

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{DefName, DurabilityPercent, QualityCategory};

use super::{ConcreteState, DescriptorKind, ItemDescriptor, PatternCriteria};

/// What an [`ItemDescriptor`] looks like on the wire.
///
/// One shape for both variants; `concrete` says how to read the durability
/// fields. `stuffName` is always written, as `null` when absent, and an
/// empty string stays an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingTradeRecord {
    pub concrete: bool,
    pub def_name: DefName,
    #[serde(default)]
    pub stuff_name: Option<DefName>,
    /// Points when concrete, minimum percent when a pattern
    pub hit_points: u32,
    /// Real maximum when concrete, always 100 for a pattern
    pub max_hit_points: u32,
    pub quality: QualityCategory,
    pub worn_by_corpse: bool,
    pub name: String,
    pub count: u32,
}

impl From<&ItemDescriptor> for ThingTradeRecord {
    fn from(item: &ItemDescriptor) -> Self {
        Self {
            concrete: item.is_concrete(),
            def_name: item.def_name.clone(),
            stuff_name: item.stuff_name.clone(),
            hit_points: item.hit_points(),
            max_hit_points: item.max_hit_points(),
            quality: item.quality(),
            worn_by_corpse: item.worn_by_corpse(),
            name: item.name.clone(),
            count: item.count(),
        }
    }
}

impl From<ItemDescriptor> for ThingTradeRecord {
    fn from(item: ItemDescriptor) -> Self {
        Self::from(&item)
    }
}

impl TryFrom<ThingTradeRecord> for ItemDescriptor {
    type Error = DomainError;

    fn try_from(record: ThingTradeRecord) -> Result<Self, Self::Error> {
        let count = NonZeroU32::new(record.count)
            .ok_or_else(|| DomainError::parse("Item count must be at least 1"))?;

        let kind = if record.concrete {
            if record.max_hit_points == 0 {
                return Err(DomainError::parse(format!(
                    "Concrete {} has no maximum durability",
                    record.def_name
                )));
            }
            DescriptorKind::Concrete(ConcreteState {
                hit_points: record.hit_points,
                max_hit_points: record.max_hit_points,
                quality: record.quality,
                worn_by_corpse: record.worn_by_corpse,
            })
        } else {
            if record.max_hit_points != DurabilityPercent::SCALE {
                return Err(DomainError::parse(format!(
                    "Pattern {} must have maxHitPoints 100, got {}",
                    record.def_name, record.max_hit_points
                )));
            }
            DescriptorKind::Pattern(PatternCriteria {
                min_durability: DurabilityPercent::new(record.hit_points)
                    .map_err(|e| DomainError::parse(e.to_string()))?,
                min_quality: record.quality,
                allow_worn_by_corpse: record.worn_by_corpse,
            })
        };

        let descriptor =
            Self::assemble(record.def_name, record.stuff_name, record.name, count, kind);
        Ok(descriptor)
    }
}

impl ItemDescriptor {
    pub fn to_record(&self) -> ThingTradeRecord {
        ThingTradeRecord::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ThingDef;
    use crate::test_fixtures::FakeThing;
    use serde_json::json;

    fn concrete() -> ItemDescriptor {
        let thing = FakeThing::new("Apparel_Parka")
            .label("Parka")
            .stuff("Synthread")
            .hit_points(74, 120)
            .quality(Some(QualityCategory::Excellent))
            .apparel(true);
        ItemDescriptor::from_thing(&thing, 2).expect("valid thing")
    }

    fn pattern() -> ItemDescriptor {
        ItemDescriptor::from_pattern(
            &ThingDef::new("Apparel_Parka", "parka"),
            0.75,
            QualityCategory::Good,
            3,
        )
        .expect("valid pattern")
        .allowing_worn_by_corpse(true)
    }

    #[test]
    fn test_concrete_wire_shape() {
        let value = serde_json::to_value(concrete()).expect("serialize");
        assert_eq!(
            value,
            json!({
                "concrete": true,
                "defName": "Apparel_Parka",
                "stuffName": "Synthread",
                "hitPoints": 74,
                "maxHitPoints": 120,
                "quality": 4,
                "wornByCorpse": true,
                "name": "Parka",
                "count": 2
            })
        );
    }

    #[test]
    fn test_pattern_wire_shape_writes_null_stuff() {
        let value = serde_json::to_value(pattern()).expect("serialize");
        assert_eq!(value["concrete"], json!(false));
        assert_eq!(value["stuffName"], json!(null));
        assert_eq!(value["hitPoints"], json!(75));
        assert_eq!(value["maxHitPoints"], json!(100));
        assert_eq!(value["quality"], json!(3));
        assert_eq!(value["wornByCorpse"], json!(true));
        assert_eq!(value["name"], json!("Parka"));
    }

    #[test]
    fn test_round_trip_both_variants() {
        for original in [concrete(), pattern()] {
            let json = serde_json::to_string(&original).expect("serialize");
            let back: ItemDescriptor = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, original);
            assert_eq!(back.to_record(), original.to_record());
        }
    }

    #[test]
    fn test_excluded_flag_is_not_sent() {
        let mut item = concrete();
        item.set_excluded_from_trade(true);
        let json = serde_json::to_string(&item).expect("serialize");
        assert!(!json.contains("xcluded"));

        let back: ItemDescriptor = serde_json::from_str(&json).expect("deserialize");
        assert!(!back.is_excluded_from_trade());
    }

    #[test]
    fn test_empty_stuff_name_differs_from_null() {
        let empty = pattern().with_stuff(Some(DefName::new("")));
        let json = serde_json::to_string(&empty).expect("serialize");
        assert!(json.contains(r#""stuffName":"""#));

        let back: ItemDescriptor = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.stuff_name(), Some(&DefName::new("")));
        assert_ne!(back, pattern());
    }

    #[test]
    fn test_missing_stuff_name_reads_as_null() {
        let back: ItemDescriptor = serde_json::from_value(json!({
            "concrete": false,
            "defName": "Steel",
            "hitPoints": 0,
            "maxHitPoints": 100,
            "quality": 0,
            "wornByCorpse": false,
            "name": "Steel",
            "count": 75
        }))
        .expect("deserialize");
        assert_eq!(back.stuff_name(), None);
        assert_eq!(back.count(), 75);
    }

    #[test]
    fn test_rejects_malformed_records() {
        let mut record = pattern().to_record();
        record.hit_points = 101;
        assert!(ItemDescriptor::try_from(record.clone()).is_err());

        record.hit_points = 50;
        record.max_hit_points = 120;
        assert!(ItemDescriptor::try_from(record).is_err());

        let mut record = concrete().to_record();
        record.max_hit_points = 0;
        assert!(ItemDescriptor::try_from(record.clone()).is_err());

        record.max_hit_points = 120;
        record.count = 0;
        assert!(matches!(
            ItemDescriptor::try_from(record),
            Err(DomainError::Parse(_))
        ));
    }
}
