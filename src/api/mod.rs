pub mod daily;
pub mod games;
pub mod health;
pub mod inventory;
pub mod profile;

use crate::actions::Actions;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub actions: Arc<Actions>,
}

impl AppState {
    pub fn new(actions: Arc<Actions>) -> Self {
        Self { actions }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/profiles", post(profile::create_profile))
        .route("/v1/profiles/:user", get(profile::view_profile))
        .route("/v1/profiles/:user/delete", post(profile::request_delete))
        .route(
            "/v1/profiles/:user/delete/resolve",
            post(profile::resolve_delete),
        )
        .route("/v1/daily/:user", post(daily::claim_daily))
        .route("/v1/inventory/:user", get(inventory::view_inventory))
        .route("/v1/inventory/:user/equip", post(inventory::equip))
        .route("/v1/inventory/:user/unequip", post(inventory::unequip))
        .route("/v1/coinflip/:user", post(games::coinflip))
        .layer(cors)
        .with_state(state)
}
