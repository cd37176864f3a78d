//! Page content table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is described by a YAML table mapping each section name to its
//! content. A default table is compiled in; an operator can replace it with a
//! file. The table is parsed, validated, and resolved once at startup into a
//! `PageContent` that the composer shares by `Arc` and never mutates.
//!
//! Route endpoints may be given as addresses. Those go through the
//! `GeocodingClient` supplied at load time; without one, loading fails.

pub mod types;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub use types::*;

use crate::geo::{Coordinate, GeocodeError, GeocodingClient, RoutePreview};

/// Content table compiled into the binary.
pub const DEFAULT_CONTENT: &str = include_str!("../../assets/page.yaml");

/// First path segments owned by fixed routes; a section slug may not use them.
pub const RESERVED_SLUGS: &[&str] = &["api", "healthz"];

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content parse failed: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("content defines no sections")]
    NoSections,

    #[error("section {ordinal} has no usable name")]
    EmptySectionName { ordinal: usize },

    #[error("no section of kind {0}")]
    MissingSection(SectionKind),

    #[error("more than one section of kind {0}")]
    DuplicateSection(SectionKind),

    #[error("duplicate section slug '{0}'")]
    DuplicateSlug(String),

    #[error("section slug '{0}' collides with a fixed route")]
    ReservedSlug(String),

    #[error("card {index} has an empty title")]
    EmptyCardTitle { index: usize },

    #[error("card '{title}' has heading level {level} (expected 1-6)")]
    HeadingLevel { title: String, level: u8 },

    #[error("card '{title}' has non-positive weight {weight}")]
    CardWeight { title: String, weight: f64 },

    #[error("coordinate {0} is out of range")]
    CoordinateOutOfRange(Coordinate),

    #[error("address '{address}' needs a geocoding client but none is configured")]
    GeocoderUnavailable { address: String },

    #[error("geocoding '{address}' failed: {source}")]
    Geocode {
        address: String,
        #[source]
        source: GeocodeError,
    },
}

// =============================================================================
// PAGE CONTENT
// =============================================================================

/// Resolved, validated content for every section.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub title: String,
    pub footer: Option<String>,
    /// Sections in ordinal order.
    pub sections: Vec<Section>,
    pub overview: OverviewContent,
    pub analysis: AnalysisContent,
}

impl PageContent {
    /// Parse, validate, and resolve the table at `path`, or the embedded default.
    pub async fn load(path: Option<&Path>, geocoder: Option<&dyn GeocodingClient>) -> Result<Self, ContentError> {
        let config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|source| ContentError::Io { path: path.to_path_buf(), source })?;
                tracing::info!(path = %path.display(), "page content override loaded");
                parse(&raw)?
            }
            None => parse(DEFAULT_CONTENT)?,
        };
        resolve(config, geocoder).await
    }

    #[must_use]
    pub fn section_by_slug(&self, slug: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.slug == slug)
    }

    /// Display name of the section of `kind`.
    #[must_use]
    pub fn section_name(&self, kind: SectionKind) -> &str {
        self.sections
            .iter()
            .find(|s| s.kind == kind)
            .map_or(kind.default_name(), |s| s.name.as_str())
    }

    /// The section shown at the site root.
    #[must_use]
    pub fn first_section(&self) -> Option<&Section> {
        self.sections.first()
    }
}

/// Parse a YAML content table.
pub fn parse(yaml: &str) -> Result<PageConfig, ContentError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Validate the table and resolve route endpoints into coordinates.
pub async fn resolve(config: PageConfig, geocoder: Option<&dyn GeocodingClient>) -> Result<PageContent, ContentError> {
    validate(&config)?;

    let PageConfig { title, footer, sections: section_configs } = config;

    let mut sections = Vec::with_capacity(section_configs.len());
    let mut overview = None;
    let mut analysis = None;

    for (ordinal, entry) in section_configs.into_iter().enumerate() {
        sections.push(Section::new(entry.name.trim(), ordinal, entry.content.kind()));
        match entry.content {
            SectionBodyConfig::Overview(content) => overview = Some(content),
            SectionBodyConfig::ExploratoryAnalysis(content) => analysis = Some(resolve_analysis(content, geocoder).await?),
            SectionBodyConfig::Dashboard => {}
        }
    }

    let overview = overview.ok_or(ContentError::MissingSection(SectionKind::Overview))?;
    let analysis = analysis.ok_or(ContentError::MissingSection(SectionKind::ExploratoryAnalysis))?;

    tracing::info!(sections = sections.len(), cards = overview.cards.len(), "page content resolved");
    Ok(PageContent { title, footer, sections, overview, analysis })
}

fn validate(config: &PageConfig) -> Result<(), ContentError> {
    if config.sections.is_empty() {
        return Err(ContentError::NoSections);
    }

    let mut kinds = HashSet::new();
    let mut slugs = HashSet::new();
    for (ordinal, entry) in config.sections.iter().enumerate() {
        if entry.name.trim().is_empty() {
            return Err(ContentError::EmptySectionName { ordinal });
        }
        let kind = entry.content.kind();
        if !kinds.insert(kind) {
            return Err(ContentError::DuplicateSection(kind));
        }
        let slug = slugify(&entry.name);
        if slug.is_empty() {
            return Err(ContentError::EmptySectionName { ordinal });
        }
        if RESERVED_SLUGS.contains(&slug.as_str()) {
            return Err(ContentError::ReservedSlug(slug));
        }
        if !slugs.insert(slug.clone()) {
            return Err(ContentError::DuplicateSlug(slug));
        }
        if let SectionBodyConfig::Overview(overview) = &entry.content {
            validate_cards(&overview.cards)?;
        }
    }

    match SectionKind::ALL.into_iter().find(|k| !kinds.contains(k)) {
        Some(missing) => Err(ContentError::MissingSection(missing)),
        None => Ok(()),
    }
}

fn validate_cards(cards: &[InfoCard]) -> Result<(), ContentError> {
    for (index, card) in cards.iter().enumerate() {
        if card.title.trim().is_empty() {
            return Err(ContentError::EmptyCardTitle { index });
        }
        if !(1..=6).contains(&card.level) {
            return Err(ContentError::HeadingLevel { title: card.title.clone(), level: card.level });
        }
        if !card.weight.is_finite() || card.weight <= 0.0 {
            return Err(ContentError::CardWeight { title: card.title.clone(), weight: card.weight });
        }
    }
    Ok(())
}

async fn resolve_analysis(
    config: AnalysisConfig,
    geocoder: Option<&dyn GeocodingClient>,
) -> Result<AnalysisContent, ContentError> {
    let route_preview = match config.route_preview {
        Some(route) => Some(RoutePreview {
            start: resolve_endpoint(route.start, geocoder).await?,
            end: resolve_endpoint(route.end, geocoder).await?,
        }),
        None => None,
    };

    Ok(AnalysisContent { heading: config.heading, blocks: config.blocks, route_preview, status: config.status })
}

async fn resolve_endpoint(
    endpoint: RouteEndpoint,
    geocoder: Option<&dyn GeocodingClient>,
) -> Result<Coordinate, ContentError> {
    let coordinate = match endpoint {
        RouteEndpoint::Coordinate(c) => c,
        RouteEndpoint::Address { address } => {
            let Some(geocoder) = geocoder else {
                return Err(ContentError::GeocoderUnavailable { address });
            };
            let c = geocoder
                .geocode(&address)
                .await
                .map_err(|source| ContentError::Geocode { address: address.clone(), source })?;
            tracing::debug!(%address, coordinate = %c, "route endpoint geocoded");
            c
        }
    };

    if coordinate.is_valid() { Ok(coordinate) } else { Err(ContentError::CoordinateOutOfRange(coordinate)) }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
