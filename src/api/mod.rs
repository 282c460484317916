// src/api/mod.rs

pub mod handler;
pub mod seo;
pub mod speed;

pub use handler::health_handler;
pub use seo::run_seo_handler;
pub use speed::run_speed_handler;

use crate::models::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/seo", get(run_seo_handler))
        .route("/api/speed", get(run_speed_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
