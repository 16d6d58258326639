//! Placeholder dataset for selections that hit the reference boundary.

use geojson::{Feature, Geometry, JsonObject};
use serde_json::json;

use super::SelectionGeometry;

const SELECTION_NOTE: &str = "Original selection geometry provided by the client.";
const CENTROID_NOTE: &str = "Centroid of the selection. Replace with real data when backend ready.";

/// Build the two-feature placeholder dataset: the selection itself and its
/// area-weighted centroid.
pub fn placeholder_features(selection: &SelectionGeometry) -> Vec<Feature> {
    let mut features = vec![tagged_feature(
        selection.to_geojson(),
        "selection",
        SELECTION_NOTE,
    )];

    if let Some(centroid) = selection.centroid() {
        features.push(tagged_feature(
            geojson::Value::from(&centroid),
            "centroid",
            CENTROID_NOTE,
        ));
    }

    features
}

fn tagged_feature(value: geojson::Value, id: &str, note: &str) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), json!(id));
    properties.insert("note".to_string(), json!(note));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
