//! Domain primitives: UserId, Slot, Category, Rarity.

use serde::{Deserialize, Serialize};

/// Opaque chat-platform user identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Create a UserId from a string.
    pub fn new(id: String) -> Self {
        UserId(id)
    }

    /// Get the identifier as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Equipment slot. At most one item may be equipped per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Head,
    Chest,
    Legs,
    Feet,
    Ring,
    Necklace,
}

impl Slot {
    /// All slots, in display order.
    pub const ALL: [Slot; 6] = [
        Slot::Head,
        Slot::Chest,
        Slot::Legs,
        Slot::Feet,
        Slot::Ring,
        Slot::Necklace,
    ];

    /// Get the slot as its lowercase storage/display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Head => "head",
            Slot::Chest => "chest",
            Slot::Legs => "legs",
            Slot::Feet => "feet",
            Slot::Ring => "ring",
            Slot::Necklace => "necklace",
        }
    }

    /// Parse a slot from its lowercase storage name.
    pub fn from_str(s: &str) -> Option<Slot> {
        match s {
            "head" => Some(Slot::Head),
            "chest" => Some(Slot::Chest),
            "legs" => Some(Slot::Legs),
            "feet" => Some(Slot::Feet),
            "ring" => Some(Slot::Ring),
            "necklace" => Some(Slot::Necklace),
            _ => None,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Item category. Only some categories carry a slot and are equippable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weapon,
    Armor,
    Consumable,
    Artifact,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Weapon => "weapon",
            Category::Armor => "armor",
            Category::Consumable => "consumable",
            Category::Artifact => "artifact",
        }
    }

    pub fn from_str(s: &str) -> Option<Category> {
        match s {
            "weapon" => Some(Category::Weapon),
            "armor" => Some(Category::Armor),
            "consumable" => Some(Category::Consumable),
            "artifact" => Some(Category::Artifact),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Item rarity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    pub fn from_str(s: &str) -> Option<Rarity> {
        match s {
            "common" => Some(Rarity::Common),
            "uncommon" => Some(Rarity::Uncommon),
            "rare" => Some(Rarity::Rare),
            "epic" => Some(Rarity::Epic),
            "legendary" => Some(Rarity::Legendary),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_str(slot.as_str()), Some(slot));
        }
        assert_eq!(Slot::from_str("mainhand"), None);
    }

    #[test]
    fn test_category_round_trip() {
        for s in ["weapon", "armor", "consumable", "artifact"] {
            let cat = Category::from_str(s).unwrap();
            assert_eq!(cat.as_str(), s);
        }
        assert_eq!(Category::from_str("trinket"), None);
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Legendary);
    }
}
