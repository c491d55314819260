use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every failure an action can report to the presentation caller.
///
/// The validation kinds are terminal for the invocation and carry their
/// user-facing reason in the `Display` string; `Persistence` is logged in
/// full and surfaced as a generic failure.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no profile exists for {0}, create one first")]
    ProfileNotFound(String),
    #[error("a profile already exists for {0}")]
    ProfileAlreadyExists(String),
    #[error("no owned item matches {0:?}")]
    ItemNotFound(String),
    #[error("{0:?} cannot be equipped")]
    NotEquippable(String),
    #[error("daily reward already claimed today")]
    AlreadyClaimedToday,
    #[error("action available again in {0}s")]
    CooldownActive(i64),
    #[error("persistence failure")]
    Persistence(#[from] StoreError),
}

impl AppError {
    /// Stable machine-readable kind for the caller.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ProfileNotFound(_) => "profile_not_found",
            AppError::ProfileAlreadyExists(_) => "profile_already_exists",
            AppError::ItemNotFound(_) => "item_not_found",
            AppError::NotEquippable(_) => "not_equippable",
            AppError::AlreadyClaimedToday => "already_claimed_today",
            AppError::CooldownActive(_) => "cooldown_active",
            AppError::Persistence(_) => "persistence_failure",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let (status, message) = match &self {
            AppError::ProfileNotFound(_) | AppError::ItemNotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::ProfileAlreadyExists(_) | AppError::AlreadyClaimedToday => {
                (StatusCode::CONFLICT, self.to_string())
            }
            AppError::NotEquippable(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::CooldownActive(_) => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            AppError::Persistence(inner) => {
                tracing::error!("persistence failure: {inner}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        let mut body = json!({
            "error": message,
            "kind": kind,
        });
        if let AppError::CooldownActive(secs) = &self {
            body["retryAfterSecs"] = json!(secs);
        }

        (status, Json(body)).into_response()
    }
}
