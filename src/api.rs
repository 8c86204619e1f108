//! HTTP surface: the calculator API plus static assets for the client.

pub mod routes;

use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::core::history::Storage;

/// Shared handler state; the storage handle is injected at startup.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/api/calculator/basic", post(routes::basic_calc))
        .route("/api/calculator/age", post(routes::age_calc))
        .route("/api/calculator/weight", post(routes::weight_calc))
        .route("/api/calculator/percentage", post(routes::percentage_calc))
        .route("/api/calculator/time", post(routes::time_calc))
        .route("/api/calculator/length", post(routes::length_calc))
        .route(
            "/api/calculator/history",
            get(routes::history_list)
                .post(routes::history_add)
                .delete(routes::history_clear),
        )
        .route("/api/calculator/history/:id", delete(routes::history_remove))
        .route("/health", get(routes::health))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}
