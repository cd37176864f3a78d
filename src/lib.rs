//! # sensorsync
//!
//! Server-rendered front page for the WareHouse Readings sensor-monitoring
//! product. A fixed set of tabbed sections is composed from a YAML content
//! table with Leptos components and served by Axum.

pub mod config;
pub mod content;
pub mod geo;
pub mod page;
pub mod routes;
pub mod state;
pub mod style;
