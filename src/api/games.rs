use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use super::AppState;
use crate::actions::CoinSide;
use crate::domain::UserId;
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinflipResponse {
    pub side: CoinSide,
}

pub async fn coinflip(
    Path(user): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CoinflipResponse>, AppError> {
    let user = UserId::new(user);
    let result = state.actions.coinflip(&user)?;

    Ok(Json(CoinflipResponse { side: result.side }))
}
