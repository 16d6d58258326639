//! HTTP API for the selection service.
//!
//! Routes a posted selection either to the placeholder dataset (inside the
//! reference boundary) or to live Overpass place features.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::models::{SelectionResponse, Source};
use crate::overpass::{OverpassFetcher, DEFAULT_LIMIT};
use crate::selection::{geometry_from_geojson, placeholder_features, ReferenceBoundary};

const DUMMY_MESSAGE: &str = "Selection intersects Sweden – returning placeholder dataset.";
const OSM_MESSAGE: &str = "Fetched features from OpenStreetMap.";
const NO_FEATURES_MESSAGE: &str = "No OSM features found for the selection.";

/// Application state shared across handlers
pub struct AppState {
    pub boundary: ReferenceBoundary,
    pub fetcher: OverpassFetcher,
}

/// Build the service router with CORS restricted to `frontend_origin`.
pub fn build_router(state: Arc<AppState>, frontend_origin: &str) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(frontend_origin.parse::<HeaderValue>()?)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Ok(Router::new()
        .route("/health", get(health_handler))
        .route("/select", post(select_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Selection endpoint.
async fn select_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<SelectionResponse>, (StatusCode, String)> {
    let raw = geojson::Geometry::from_json_value(payload)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid GeoJSON geometry".to_string()))?;

    let selection =
        geometry_from_geojson(&raw).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    if state.boundary.intersects(&selection) {
        debug!("Selection matched the reference boundary");
        return Ok(Json(SelectionResponse {
            source: Source::Dummy,
            features: placeholder_features(&selection),
            message: Some(DUMMY_MESSAGE.to_string()),
        }));
    }

    let features = state
        .fetcher
        .fetch_places(&selection, DEFAULT_LIMIT)
        .await
        .map_err(|e| {
            warn!("Overpass fetch failed: {}", e);
            (StatusCode::BAD_GATEWAY, format!("Overpass API error: {}", e))
        })?;

    let message = if features.is_empty() {
        NO_FEATURES_MESSAGE
    } else {
        OSM_MESSAGE
    };

    Ok(Json(SelectionResponse {
        source: Source::Osm,
        features,
        message: Some(message.to_string()),
    }))
}
