//! Primary JSON API: `GET /health` and `GET /`.

pub mod routes;

use crate::config::Settings;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn router(settings: Arc<Settings>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/", get(routes::read_root))
        .with_state(settings)
}
