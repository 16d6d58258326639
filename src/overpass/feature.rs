//! Mapping of raw Overpass elements to GeoJSON features.

use geojson::{Feature, Geometry, JsonObject, Value};
use serde::Deserialize;
use serde_json::json;

use crate::models::OsmType;

/// Decoded Overpass response body. An absent `elements` array is treated
/// as empty.
#[derive(Debug, Default, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

/// One raw element from the Overpass API.
#[derive(Debug, Deserialize)]
pub struct RawElement {
    #[serde(rename = "type")]
    pub osm_type: OsmType,
    pub id: i64,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    /// Way vertices, present when the query asks for `geom`.
    #[serde(default)]
    pub geometry: Vec<WayVertex>,
    pub center: Option<CenterPoint>,
    #[serde(default)]
    pub tags: JsonObject,
}

/// A single vertex of a way; either coordinate may be missing.
#[derive(Debug, Deserialize)]
pub struct WayVertex {
    pub lon: Option<f64>,
    pub lat: Option<f64>,
}

/// Precomputed center of a relation.
#[derive(Debug, Deserialize)]
pub struct CenterPoint {
    pub lon: Option<f64>,
    pub lat: Option<f64>,
}

/// Map one element to a GeoJSON feature, or `None` when the element has no
/// usable geometry.
pub fn element_to_feature(element: &RawElement) -> Option<Feature> {
    let value = match element.osm_type {
        OsmType::Node => match (element.lon, element.lat) {
            (Some(lon), Some(lat)) => Value::Point(vec![lon, lat]),
            _ => return None,
        },
        OsmType::Way => {
            let line: Vec<Vec<f64>> = element
                .geometry
                .iter()
                .filter_map(|vertex| match (vertex.lon, vertex.lat) {
                    (Some(lon), Some(lat)) => Some(vec![lon, lat]),
                    _ => None,
                })
                .collect();

            if line.is_empty() {
                return None;
            }

            // Closed rings of at least four positions are polygons.
            if line.len() >= 4 && line.first() == line.last() {
                Value::Polygon(vec![line])
            } else {
                Value::LineString(line)
            }
        }
        OsmType::Relation => match &element.center {
            Some(CenterPoint {
                lon: Some(lon),
                lat: Some(lat),
            }) => Value::Point(vec![*lon, *lat]),
            _ => return None,
        },
        OsmType::Unknown => return None,
    };

    // Tags are inserted after the computed keys, so a tag literally named
    // "id" or "osm_type" overwrites the computed value.
    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), json!(element.id));
    properties.insert("osm_type".to_string(), json!(element.osm_type.to_string()));
    for (key, tag) in &element.tags {
        properties.insert(key.clone(), tag.clone());
    }

    Some(Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}
