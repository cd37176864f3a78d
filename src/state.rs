//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the page composer, which in turn owns the content table and the
//! stylesheet. Everything is loaded before the listener binds and is
//! read-only afterwards, so handlers never lock.

use std::sync::Arc;

use crate::content::PageContent;
use crate::page::PageComposer;
use crate::style::{StyleSheet, Theme};

/// Shared application state. Clone is required by Axum; inner data is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub composer: Arc<PageComposer>,
    /// Theme for requests that do not name one.
    pub default_theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(content: PageContent, style: StyleSheet, default_theme: Theme) -> Self {
        let composer = PageComposer::new(Arc::new(content), Arc::new(style));
        Self { composer: Arc::new(composer), default_theme }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
