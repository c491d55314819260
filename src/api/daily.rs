use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use super::AppState;
use crate::domain::UserId;
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyClaimResponse {
    pub gems: i64,
    pub trait_rerolls: i64,
    pub exp: i64,
    pub streak: i64,
    pub level: i64,
    pub leveled_up: bool,
}

pub async fn claim_daily(
    Path(user): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DailyClaimResponse>, AppError> {
    let user = UserId::new(user);
    let claim = state.actions.claim_daily(&user).await?;

    Ok(Json(DailyClaimResponse {
        gems: claim.reward.gems,
        trait_rerolls: claim.reward.rerolls,
        exp: claim.reward.exp,
        streak: claim.streak,
        level: claim.level,
        leveled_up: claim.leveled_up,
    }))
}
