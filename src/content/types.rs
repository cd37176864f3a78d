//! Presentational entities that make up the page.
//!
//! Nothing here changes after load. The `*Config` types mirror the YAML
//! table; everything else is the resolved form the composer renders.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::{Coordinate, RoutePreview};

pub const DEFAULT_CARD_LEVEL: u8 = 4;
pub const DEFAULT_CARD_WEIGHT: f64 = 1.0;

// =============================================================================
// SECTIONS
// =============================================================================

/// Which composer operation renders a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Overview,
    ExploratoryAnalysis,
    Dashboard,
}

impl SectionKind {
    pub const ALL: [Self; 3] = [Self::Overview, Self::ExploratoryAnalysis, Self::Dashboard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::ExploratoryAnalysis => "exploratory_analysis",
            Self::Dashboard => "dashboard",
        }
    }

    /// Display name used when a section has to be labelled without config.
    #[must_use]
    pub fn default_name(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::ExploratoryAnalysis => "Exploratory Analysis",
            Self::Dashboard => "Dashboard",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, independently selectable tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub ordinal: usize,
    pub slug: String,
    #[serde(skip)]
    pub kind: SectionKind,
}

impl Section {
    #[must_use]
    pub fn new(name: &str, ordinal: usize, kind: SectionKind) -> Self {
        Self { name: name.to_owned(), ordinal, slug: slugify(name), kind }
    }
}

/// Lower-case the name and collapse every run of non-alphanumerics into `-`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

// =============================================================================
// BLOCKS
// =============================================================================

/// A styled block with a title and static text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InfoCard {
    pub title: String,
    #[serde(default = "default_card_level")]
    pub level: u8,
    /// Relative column width within the card row.
    #[serde(default = "default_card_weight")]
    pub weight: f64,
    #[serde(default)]
    pub body: Vec<String>,
}

fn default_card_level() -> u8 {
    DEFAULT_CARD_LEVEL
}

fn default_card_weight() -> f64 {
    DEFAULT_CARD_WEIGHT
}

/// A titled run of Markdown prose.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProseBlock {
    pub heading: String,
    pub markdown: String,
}

/// Placeholder for the operator alertness readout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusIndicator {
    Awake,
    Asleep,
    #[default]
    Placeholder,
}

impl StatusIndicator {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Awake => "Awake",
            Self::Asleep => "Asleep",
            Self::Placeholder => "Awake/Asleep",
        }
    }
}

// =============================================================================
// SECTION CONTENT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverviewContent {
    pub heading: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub cards: Vec<InfoCard>,
}

/// Exploratory analysis content after route endpoints are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisContent {
    pub heading: String,
    pub blocks: Vec<ProseBlock>,
    pub route_preview: Option<RoutePreview>,
    pub status: Option<StatusIndicator>,
}

// =============================================================================
// YAML TABLE
// =============================================================================

/// Either a literal position or an address needing a geocoder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RouteEndpoint {
    Coordinate(Coordinate),
    Address { address: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteConfig {
    pub start: RouteEndpoint,
    pub end: RouteEndpoint,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisConfig {
    pub heading: String,
    #[serde(default)]
    pub blocks: Vec<ProseBlock>,
    #[serde(default)]
    pub route_preview: Option<RouteConfig>,
    #[serde(default)]
    pub status: Option<StatusIndicator>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBodyConfig {
    Overview(OverviewContent),
    ExploratoryAnalysis(AnalysisConfig),
    Dashboard,
}

impl SectionBodyConfig {
    #[must_use]
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Overview(_) => SectionKind::Overview,
            Self::ExploratoryAnalysis(_) => SectionKind::ExploratoryAnalysis,
            Self::Dashboard => SectionKind::Dashboard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionConfig {
    pub name: String,
    pub content: SectionBodyConfig,
}

/// Root of the page content YAML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageConfig {
    pub title: String,
    #[serde(default)]
    pub footer: Option<String>,
    pub sections: Vec<SectionConfig>,
}
