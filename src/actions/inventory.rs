//! Inventory viewing and slot-exclusive equip/unequip.

use super::Actions;
use crate::domain::{Rarity, Slot, UserId};
use crate::engine::resolver;
use crate::error::AppError;
use uuid::Uuid;

pub const EQUIP_ACTION: &str = "equip";
pub const UNEQUIP_ACTION: &str = "unequip";

#[derive(Debug, Clone)]
pub struct InventoryEntry {
    pub item_name: String,
    pub is_equipped: bool,
    pub slot: Option<Slot>,
    pub rarity: Rarity,
}

#[derive(Debug, Clone)]
pub struct InventoryView {
    pub items: Vec<InventoryEntry>,
    pub equipped_count: usize,
}

#[derive(Debug, Clone)]
pub struct EquipOutcome {
    pub item_name: String,
    pub slot: Slot,
    /// Names that were equipped in the slot and got displaced.
    pub replaced: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UnequipOutcome {
    pub item_name: String,
    /// False when the resolved item was not equipped to begin with.
    pub was_equipped: bool,
}

impl Actions {
    /// List a user's owned items in grant order.
    pub async fn view_inventory(&self, user: &UserId) -> Result<InventoryView, AppError> {
        let items = self.owned_items(user).await?;
        let equipped_count = items.iter().filter(|item| item.record.is_equipped).count();

        Ok(InventoryView {
            items: items
                .into_iter()
                .map(|item| InventoryEntry {
                    is_equipped: item.record.is_equipped,
                    slot: item.definition.slot,
                    rarity: item.definition.rarity,
                    item_name: item.definition.item_name,
                })
                .collect(),
            equipped_count,
        })
    }

    /// Resolve `query` against the user's items and equip the hit,
    /// displacing whatever currently occupies the slot.
    pub async fn equip(&self, user: &UserId, query: &str) -> Result<EquipOutcome, AppError> {
        self.ensure_off_cooldown(user, EQUIP_ACTION, self.config.equip_cooldown_secs)?;

        let items = self.owned_items(user).await?;
        let target = resolver::resolve(query, &items)
            .ok_or_else(|| AppError::ItemNotFound(query.to_string()))?;
        let slot = target
            .slot()
            .ok_or_else(|| AppError::NotEquippable(target.name().to_string()))?;

        // everything equipped in the slot goes first; at most one record
        // should qualify, but clear them all
        let displaced: Vec<&_> = items
            .iter()
            .filter(|item| item.record.is_equipped && item.slot() == Some(slot))
            .collect();
        let displaced_ids: Vec<Uuid> = displaced.iter().map(|item| item.record.id).collect();

        if !displaced_ids.is_empty() {
            self.ownership
                .bulk_set_equipped(&displaced_ids, false)
                .await?;
        }
        self.ownership.set_equipped(target.record.id, true).await?;

        Ok(EquipOutcome {
            item_name: target.name().to_string(),
            slot,
            replaced: displaced
                .iter()
                .filter(|item| item.record.id != target.record.id)
                .map(|item| item.name().to_string())
                .collect(),
        })
    }

    /// Resolve `query` against the user's items and unequip the hit.
    pub async fn unequip(&self, user: &UserId, query: &str) -> Result<UnequipOutcome, AppError> {
        self.ensure_off_cooldown(user, UNEQUIP_ACTION, self.config.equip_cooldown_secs)?;

        let items = self.owned_items(user).await?;
        let target = resolver::resolve(query, &items)
            .ok_or_else(|| AppError::ItemNotFound(query.to_string()))?;

        let was_equipped = target.record.is_equipped;
        self.ownership.set_equipped(target.record.id, false).await?;

        Ok(UnequipOutcome {
            item_name: target.name().to_string(),
            was_equipped,
        })
    }
}
