//! OSM element classification.

use serde::{Deserialize, Serialize};

/// Type of OSM object as reported by the Overpass API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsmType {
    Node,
    Way,
    Relation,
    /// Element kinds this service does not map (e.g. `area`).
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for OsmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OsmType::Node => write!(f, "node"),
            OsmType::Way => write!(f, "way"),
            OsmType::Relation => write!(f, "relation"),
            OsmType::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_deserialize() {
        let osm_type: OsmType = serde_json::from_str("\"node\"").unwrap();
        assert_eq!(osm_type, OsmType::Node);
        let osm_type: OsmType = serde_json::from_str("\"relation\"").unwrap();
        assert_eq!(osm_type, OsmType::Relation);
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let osm_type: OsmType = serde_json::from_str("\"area\"").unwrap();
        assert_eq!(osm_type, OsmType::Unknown);
    }

    #[test]
    fn test_display_matches_wire_names() {
        assert_eq!(OsmType::Way.to_string(), "way");
        assert_eq!(OsmType::Node.to_string(), "node");
    }
}
