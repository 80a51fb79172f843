//! GateKeeper: campus-security marketing site and demo dashboard.

mod pages;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the GateKeeper router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::index))
        .route("/solutions", get(pages::solutions))
        .route("/dashboard", get(pages::dashboard))
        .fallback(pages::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
