//! Section page handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;

use crate::content::Section;
use crate::state::AppState;
use crate::style::Theme;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub theme: Option<String>,
}

/// Pick the requested theme, falling back to the configured default.
/// A blank `theme` counts as absent, matching `SENSORSYNC_THEME`.
pub(crate) fn resolve_theme(state: &AppState, query: &PageQuery) -> Result<Theme, StatusCode> {
    let Some(raw) = query.theme.as_deref().filter(|v| !v.trim().is_empty()) else {
        return Ok(state.default_theme);
    };
    raw.parse().map_err(|e| {
        tracing::warn!(error = %e, "rejected page theme");
        StatusCode::BAD_REQUEST
    })
}

/// `GET /` — the first section.
pub async fn index(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Result<Html<String>, StatusCode> {
    let theme = resolve_theme(&state, &query)?;
    state.composer.render_index(theme).map(Html).ok_or(StatusCode::NOT_FOUND)
}

/// `GET /{slug}` — one section page.
pub async fn section(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, StatusCode> {
    let theme = resolve_theme(&state, &query)?;
    match state.composer.render_page(&slug, theme) {
        Some(html) => Ok(Html(html)),
        None => {
            tracing::debug!(%slug, "unknown section");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// `GET /api/sections` — sections in ordinal order.
pub async fn list_sections(State(state): State<AppState>) -> Json<Vec<Section>> {
    Json(state.composer.sections().to_vec())
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
