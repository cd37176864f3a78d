//! Coordinates, route geometry, and the geocoding collaborator.
//!
//! DESIGN
//! ======
//! The route preview is drawn as inline SVG, so the two endpoints are
//! projected here with a plain equirectangular projection. Longitude is
//! scaled by the cosine of the mean latitude, which is accurate enough for
//! the few tens of kilometres a preview spans.
//!
//! Geocoding is not implemented by this crate. `GeocodingClient` is the seam
//! a provider plugs into when content names addresses instead of literal
//! coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// =============================================================================
// COORDINATE
// =============================================================================

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and inside the valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lat, self.lng)
    }
}

/// A two-point route shown on the map placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePreview {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl RoutePreview {
    /// Great-circle length of the route in kilometres.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        haversine_km(self.start, self.end)
    }
}

/// Great-circle distance between two coordinates.
#[must_use]
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

// =============================================================================
// PROJECTION
// =============================================================================

/// A point in SVG user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Both route endpoints placed inside a `width` x `height` viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteProjection {
    pub width: f64,
    pub height: f64,
    pub start: Point,
    pub end: Point,
}

impl RouteProjection {
    /// Fit the route into the viewport, keeping `padding` clear on every side.
    ///
    /// Scale is uniform so the route keeps its real shape. The projected
    /// bounding box is centred; a zero-length route lands on the centre.
    #[must_use]
    pub fn fit(route: &RoutePreview, width: f64, height: f64, padding: f64) -> Self {
        let mean_lat = ((route.start.lat + route.end.lat) / 2.0).to_radians();
        let k = mean_lat.cos();

        // Planar coordinates: x grows east, y grows south.
        let ax = route.start.lng * k;
        let ay = -route.start.lat;
        let bx = route.end.lng * k;
        let by = -route.end.lat;

        let span_x = (ax - bx).abs();
        let span_y = (ay - by).abs();
        let inner_w = (width - 2.0 * padding).max(0.0);
        let inner_h = (height - 2.0 * padding).max(0.0);

        let scale = match (span_x > f64::EPSILON, span_y > f64::EPSILON) {
            (false, false) => 0.0,
            (true, false) => inner_w / span_x,
            (false, true) => inner_h / span_y,
            (true, true) => (inner_w / span_x).min(inner_h / span_y),
        };

        let mid_x = (ax + bx) / 2.0;
        let mid_y = (ay + by) / 2.0;
        let place = |x: f64, y: f64| Point { x: width / 2.0 + (x - mid_x) * scale, y: height / 2.0 + (y - mid_y) * scale };

        Self { width, height, start: place(ax, ay), end: place(bx, by) }
    }

    /// SVG `viewBox` attribute value.
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

// =============================================================================
// GEOCODING
// =============================================================================

/// Errors produced by a geocoding provider.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The provider had no match for the address.
    #[error("no match for address: {0}")]
    NotFound(String),

    /// The provider could not be reached or answered with an error.
    #[error("geocoding provider failed: {0}")]
    Provider(String),
}

/// Resolves free-form addresses to coordinates.
#[async_trait::async_trait]
pub trait GeocodingClient: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError>;
}

#[cfg(test)]
#[path = "geo_test.rs"]
mod tests;
