//! Page composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Turns the resolved content table into HTML. Each section has one render
//! operation; `render_page` wraps a section in the full document with the
//! shared stylesheet and the tab bar.
//!
//! DESIGN
//! ======
//! Views are Leptos components rendered server-side with `to_html`. Nothing
//! is reactive: every render reads the same immutable `PageContent` and
//! `StyleSheet`, so output for a given section and theme is byte-identical
//! across calls.

pub mod components;
pub mod markdown;

use std::sync::Arc;

use leptos::prelude::*;

use crate::content::{PageContent, Section, SectionKind};
use crate::style::{StyleSheet, Theme};
use components::{InfoCardView, Prose, RouteMap, StatusBox, TabBar, TabLink};

/// Link to a section page with an explicit theme.
#[must_use]
pub fn section_href(slug: &str, theme: Theme) -> String {
    format!("/{slug}?theme={theme}")
}

/// Renders sections of one content table.
#[derive(Debug, Clone)]
pub struct PageComposer {
    content: Arc<PageContent>,
    style: Arc<StyleSheet>,
}

impl PageComposer {
    #[must_use]
    pub fn new(content: Arc<PageContent>, style: Arc<StyleSheet>) -> Self {
        Self { content, style }
    }

    #[must_use]
    pub fn content(&self) -> &PageContent {
        &self.content
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.content.sections
    }

    // =========================================================================
    // SECTION FRAGMENTS
    // =========================================================================

    /// Title header followed by the row of info cards.
    #[must_use]
    pub fn render_overview(&self) -> String {
        render_html(|| self.overview_view())
    }

    /// Prose blocks followed by the route map and status box.
    #[must_use]
    pub fn render_exploratory_analysis(&self) -> String {
        render_html(|| self.analysis_view())
    }

    /// Header with an empty body.
    #[must_use]
    pub fn render_dashboard(&self) -> String {
        render_html(|| self.dashboard_view())
    }

    #[must_use]
    pub fn render_section(&self, kind: SectionKind) -> String {
        render_html(|| self.section_view(kind))
    }

    // =========================================================================
    // DOCUMENTS
    // =========================================================================

    /// Full document for the section at `slug`, or `None` if no section has it.
    #[must_use]
    pub fn render_page(&self, slug: &str, theme: Theme) -> Option<String> {
        let section = self.content.section_by_slug(slug)?;
        let html = render_html(|| self.document_view(section, theme));
        tracing::debug!(section = %section.slug, %theme, bytes = html.len(), "page rendered");
        Some(html)
    }

    /// Document for the first section.
    #[must_use]
    pub fn render_index(&self, theme: Theme) -> Option<String> {
        let first = self.content.first_section()?;
        self.render_page(&first.slug, theme)
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    fn section_view(&self, kind: SectionKind) -> AnyView {
        match kind {
            SectionKind::Overview => self.overview_view().into_any(),
            SectionKind::ExploratoryAnalysis => self.analysis_view().into_any(),
            SectionKind::Dashboard => self.dashboard_view().into_any(),
        }
    }

    fn overview_view(&self) -> impl IntoView + use<> {
        let overview = self.content.overview.clone();

        view! {
            <section class="section section--overview">
                <div class="header">
                    <div>
                        <h1 class="header__title">{overview.heading}</h1>
                        {overview.tagline.map(|tagline| view! { <div class="header__tagline">{tagline}</div> })}
                    </div>
                </div>
                <div class="card-row">
                    {overview.cards.into_iter().map(|card| view! { <InfoCardView card=card/> }).collect::<Vec<_>>()}
                </div>
            </section>
        }
    }

    fn analysis_view(&self) -> impl IntoView + use<> {
        let analysis = self.content.analysis.clone();
        let route = analysis.route_preview;
        let status = analysis.status;

        let monitor = (route.is_some() || status.is_some()).then(move || {
            view! {
                <div class="monitor">
                    {route.map(|route| view! { <RouteMap route=route/> })}
                    {status.map(|status| view! { <StatusBox status=status/> })}
                </div>
            }
        });

        view! {
            <section class="section section--analysis">
                <h2 class="section__header">{analysis.heading}</h2>
                {analysis.blocks.into_iter().map(|block| view! { <Prose block=block/> }).collect::<Vec<_>>()}
                {monitor}
            </section>
        }
    }

    fn dashboard_view(&self) -> impl IntoView + use<> {
        let name = self.content.section_name(SectionKind::Dashboard).to_owned();

        view! {
            <section class="section section--dashboard">
                <h2 class="section__header">{name}</h2>
                <div class="section__body"></div>
            </section>
        }
    }

    fn document_view(&self, active: &Section, theme: Theme) -> impl IntoView + use<> {
        let tabs = self
            .content
            .sections
            .iter()
            .map(|s| TabLink { name: s.name.clone(), href: section_href(&s.slug, theme), active: s.slug == active.slug })
            .collect::<Vec<_>>();
        let theme_href = section_href(&active.slug, theme.toggled());
        let theme_label = format!("{} mode", theme.toggled());
        let title = format!("{} · {}", self.content.title, active.name);
        let css = self.style.css().to_owned();
        let footer = self.content.footer.clone();
        let body = self.section_view(active.kind);

        view! {
            <!DOCTYPE html>
            <html lang="en" data-theme=theme.as_str()>
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <title>{title}</title>
                    <style inner_html=css></style>
                </head>
                <body>
                    <TabBar tabs=tabs theme_href=theme_href theme_label=theme_label/>
                    <main>{body}</main>
                    {footer.map(|text| view! { <footer>{text}</footer> })}
                </body>
            </html>
        }
    }
}

/// Render a view to an HTML string under a throwaway reactive owner.
fn render_html<V: IntoView>(build: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
