//! Core data models for the selection API.

pub mod element;
pub mod response;

pub use element::OsmType;
pub use response::{SelectionResponse, Source};
