use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::AppState;
use crate::actions::DeleteOutcome;
use crate::confirm::ConfirmSignal;
use crate::domain::UserId;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileResponse {
    pub user_id: String,
    pub level: i64,
    pub gems: i64,
    pub trait_rerolls: i64,
    pub granted_items: Vec<String>,
}

pub async fn create_profile(
    State(state): State<AppState>,
    Json(body): Json<CreateProfileRequest>,
) -> Result<Json<CreateProfileResponse>, AppError> {
    let user = UserId::new(body.user_id);
    let created = state.actions.create_profile(&user).await?;

    Ok(Json(CreateProfileResponse {
        user_id: created.profile.user_id.to_string(),
        level: created.profile.level,
        gems: created.profile.gems,
        trait_rerolls: created.profile.trait_rerolls,
        granted_items: created.granted_items,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileViewResponse {
    pub user_id: String,
    pub level: i64,
    pub exp: i64,
    pub max_exp: i64,
    pub power: i64,
    pub gems: i64,
    pub trait_rerolls: i64,
    pub daily_streak: i64,
    /// Slot name to equipped item name, `null` for empty slots.
    pub equipped: BTreeMap<String, Option<String>>,
}

pub async fn view_profile(
    Path(user): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProfileViewResponse>, AppError> {
    let user = UserId::new(user);
    let view = state.actions.view_profile(&user).await?;

    Ok(Json(ProfileViewResponse {
        user_id: view.user_id.to_string(),
        level: view.level,
        exp: view.exp,
        max_exp: view.max_exp,
        power: view.power,
        gems: view.gems,
        trait_rerolls: view.trait_rerolls,
        daily_streak: view.daily_streak,
        equipped: view
            .equipped
            .into_iter()
            .map(|(slot, name)| (slot.as_str().to_string(), name))
            .collect(),
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePromptResponse {
    pub deadline: String,
    pub prompt: String,
}

pub async fn request_delete(
    Path(user): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeletePromptResponse>, AppError> {
    let user = UserId::new(user);
    let prompt = state.actions.request_delete(&user).await?;

    Ok(Json(DeletePromptResponse {
        deadline: prompt.deadline.to_rfc3339(),
        prompt: "Are you sure you want to delete your profile? This cannot be undone.".to_string(),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveDeleteRequest {
    pub signal: ConfirmSignal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveDeleteResponse {
    pub outcome: &'static str,
    pub deleted: bool,
}

pub async fn resolve_delete(
    Path(user): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<ResolveDeleteRequest>,
) -> Result<Json<ResolveDeleteResponse>, AppError> {
    let user = UserId::new(user);
    let outcome = state.actions.resolve_delete(&user, body.signal).await?;

    let (outcome, deleted) = match outcome {
        DeleteOutcome::Deleted => ("deleted", true),
        DeleteOutcome::Canceled => ("canceled", false),
        DeleteOutcome::TimedOut => ("timed_out", false),
        DeleteOutcome::NonePending => ("none_pending", false),
    };

    Ok(Json(ResolveDeleteResponse { outcome, deleted }))
}
