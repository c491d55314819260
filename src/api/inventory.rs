use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::domain::UserId;
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemDto {
    pub item_name: String,
    pub is_equipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    pub rarity: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    pub items: Vec<InventoryItemDto>,
    pub equipped_count: usize,
}

pub async fn view_inventory(
    Path(user): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<InventoryResponse>, AppError> {
    let user = UserId::new(user);
    let view = state.actions.view_inventory(&user).await?;

    Ok(Json(InventoryResponse {
        items: view
            .items
            .into_iter()
            .map(|entry| InventoryItemDto {
                item_name: entry.item_name,
                is_equipped: entry.is_equipped,
                slot: entry.slot.map(|slot| slot.as_str().to_string()),
                rarity: entry.rarity.as_str().to_string(),
            })
            .collect(),
        equipped_count: view.equipped_count,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemQueryRequest {
    /// Free-text item name, resolved fuzzily against owned items.
    pub item: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipResponse {
    pub item_name: String,
    pub slot: String,
    pub replaced: Vec<String>,
}

pub async fn equip(
    Path(user): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<ItemQueryRequest>,
) -> Result<Json<EquipResponse>, AppError> {
    let user = UserId::new(user);
    let outcome = state.actions.equip(&user, &body.item).await?;

    Ok(Json(EquipResponse {
        item_name: outcome.item_name,
        slot: outcome.slot.as_str().to_string(),
        replaced: outcome.replaced,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnequipResponse {
    pub item_name: String,
    pub was_equipped: bool,
}

pub async fn unequip(
    Path(user): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<ItemQueryRequest>,
) -> Result<Json<UnequipResponse>, AppError> {
    let user = UserId::new(user);
    let outcome = state.actions.unequip(&user, &body.item).await?;

    Ok(Json(UnequipResponse {
        item_name: outcome.item_name,
        was_equipped: outcome.was_equipped,
    }))
}
