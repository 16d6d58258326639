//! Kartograf - a map selection API backed by OpenStreetMap
//!
//! This library provides the selection pipeline shared by the server binary:
//! geometry validation, the reference boundary match, placeholder features,
//! and the Overpass fetcher.

pub mod models;
pub mod overpass;
pub mod selection;
pub mod server;

pub use models::{OsmType, SelectionResponse, Source};
