//! BloodLink: blood-bank management dashboard.

mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the BloodLink router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::index_redirect))
        .route("/login", get(pages::login))
        .route("/login", post(pages::submit_login))
        .route("/dashboard", get(pages::dashboard))
        .route("/dashboard/donations", get(pages::donations))
        .route("/dashboard/appointments", get(pages::appointments))
        .route("/dashboard/inventory", get(pages::inventory))
        .route("/dashboard/analytics", get(pages::analytics))
        .route("/dashboard/users", get(pages::users))
        .route("/dashboard/settings", get(pages::settings))
        .route("/dashboard/profile", get(pages::profile))
        .fallback(pages::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
