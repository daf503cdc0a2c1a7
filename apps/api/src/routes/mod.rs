pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::reply::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/myths", get(handlers::handle_list_myths))
        .route("/api/v1/myths/check", post(handlers::handle_check))
        .with_state(state)
}
