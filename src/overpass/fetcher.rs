//! Overpass API fetcher for `place` features.

use std::time::Duration;

use geo::Rect;
use geojson::Feature;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::selection::SelectionGeometry;

use super::feature::{element_to_feature, OverpassResponse};

/// Default cap on the number of features returned for one selection.
pub const DEFAULT_LIMIT: usize = 20;

/// Client-side timeout for one Overpass request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Server-side timeout hint embedded in the query, in seconds.
const QUERY_TIMEOUT_SECS: u32 = 25;

/// Raised when the Overpass API request fails: transport failure, a non-2xx
/// status, or an undecodable body.
#[derive(Debug, Error)]
pub enum OverpassError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Fetches `place` features from the Overpass API.
pub struct OverpassFetcher {
    client: Client,
    url: String,
}

impl OverpassFetcher {
    /// Create a fetcher with its own HTTP client.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("kartograf/", env!("CARGO_PKG_VERSION")))
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            url: url.into(),
        }
    }

    /// Create a fetcher around an externally built client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Fetch up to `limit` place features within the selection's bounding
    /// box. One request, no retries.
    pub async fn fetch_places(
        &self,
        selection: &SelectionGeometry,
        limit: usize,
    ) -> Result<Vec<Feature>, OverpassError> {
        let Some(bounds) = selection.bounding_rect() else {
            return Ok(Vec::new());
        };

        let query = build_query(&bounds, limit);
        debug!("Overpass query: {}", query);

        let response = self
            .client
            .post(&self.url)
            .form(&[("data", query.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body: OverpassResponse = response.json().await?;
        debug!("Overpass returned {} elements", body.elements.len());

        Ok(collect_features(&body, limit))
    }
}

/// Build the Overpass QL query for all `place` elements in the bounding box.
fn build_query(bounds: &Rect<f64>, limit: usize) -> String {
    // Overpass bounding boxes are (south, west, north, east).
    let (south, west) = (bounds.min().y, bounds.min().x);
    let (north, east) = (bounds.max().y, bounds.max().x);

    format!(
        r#"[out:json][timeout:{QUERY_TIMEOUT_SECS}];
(
  node["place"]({south},{west},{north},{east});
  way["place"]({south},{west},{north},{east});
  relation["place"]({south},{west},{north},{east});
);
out body geom {limit};"#
    )
}

/// Map elements to features, halting accumulation once `limit` features
/// have been collected. Scanning is per element; skipped elements do not
/// count against the cap.
fn collect_features(response: &OverpassResponse, limit: usize) -> Vec<Feature> {
    let mut features = Vec::new();

    for element in &response.elements {
        if let Some(feature) = element_to_feature(element) {
            features.push(feature);
        }
        if features.len() >= limit {
            break;
        }
    }

    features
}
