//! Response payload for the selection endpoint.

use geojson::Feature;
use serde::{Deserialize, Serialize};

/// Where the returned features came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Placeholder dataset for selections that hit the reference boundary.
    Dummy,
    /// Live features fetched from the Overpass API.
    Osm,
}

/// Response body for `POST /select`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub source: Source,
    pub features: Vec<Feature>,
    /// Human-readable note about which path produced the features.
    /// Serialized as `null` when absent.
    pub message: Option<String>,
}
