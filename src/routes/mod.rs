//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves every section page, a JSON index of sections, and
//! a health check. Tab switches are plain links, so each tab is a full
//! request/response render.

pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/healthz", get(healthz))
        .route("/api/sections", get(pages::list_sections))
        .route("/{slug}", get(pages::section))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
