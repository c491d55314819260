//! Equipment catalog entries and per-user ownership records.

use super::{Category, Rarity, Slot, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Per-stat integer bonuses, keyed by stat name.
///
/// BTreeMap keeps serialization order stable across runs.
pub type StatBonuses = BTreeMap<String, i64>;

/// Immutable catalog entry describing one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentDefinition {
    /// Unique display name, also the catalog key.
    pub item_name: String,
    pub category: Category,
    /// Present only for equippable items.
    pub slot: Option<Slot>,
    pub stat_bonus: StatBonuses,
    pub rarity: Rarity,
}

impl EquipmentDefinition {
    /// Sum of all stat bonuses this item grants.
    pub fn total_bonus(&self) -> i64 {
        self.stat_bonus.values().sum()
    }

    /// Whether this item can occupy an equipment slot.
    pub fn is_equippable(&self) -> bool {
        self.slot.is_some()
    }
}

/// A single owned copy of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub item_name: String,
    pub is_equipped: bool,
}

impl OwnershipRecord {
    /// A fresh, unequipped ownership record.
    pub fn new(user_id: UserId, item_name: String) -> Self {
        OwnershipRecord {
            id: Uuid::new_v4(),
            user_id,
            item_name,
            is_equipped: false,
        }
    }
}

/// An ownership record joined with its catalog definition.
///
/// This is the unit the resolver, power aggregator, and equip orchestrator
/// operate on; the join happens in the action layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedItem {
    pub record: OwnershipRecord,
    pub definition: EquipmentDefinition,
}

impl OwnedItem {
    pub fn new(record: OwnershipRecord, definition: EquipmentDefinition) -> Self {
        OwnedItem { record, definition }
    }

    pub fn name(&self) -> &str {
        &self.definition.item_name
    }

    pub fn slot(&self) -> Option<Slot> {
        self.definition.slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helm() -> EquipmentDefinition {
        EquipmentDefinition {
            item_name: "Iron Helm".to_string(),
            category: Category::Armor,
            slot: Some(Slot::Head),
            stat_bonus: StatBonuses::from([("defense".to_string(), 5), ("vitality".to_string(), 2)]),
            rarity: Rarity::Common,
        }
    }

    #[test]
    fn test_total_bonus_sums_all_stats() {
        assert_eq!(helm().total_bonus(), 7);
    }

    #[test]
    fn test_slotless_item_is_not_equippable() {
        let draught = EquipmentDefinition {
            item_name: "Minor Healing Draught".to_string(),
            category: Category::Consumable,
            slot: None,
            stat_bonus: StatBonuses::new(),
            rarity: Rarity::Common,
        };
        assert!(!draught.is_equippable());
        assert!(helm().is_equippable());
    }

    #[test]
    fn test_new_record_starts_unequipped() {
        let rec = OwnershipRecord::new(UserId::new("u1".to_string()), "Iron Helm".to_string());
        assert!(!rec.is_equipped);
    }
}
