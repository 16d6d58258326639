//! GeoJSON selection geometry validation.

use geo::{BoundingRect, Centroid, HasDimensions};
use geo::{Geometry, MultiPolygon, Point, Polygon, Rect};
use thiserror::Error;

/// Reasons a selection geometry is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("Invalid GeoJSON geometry")]
    Invalid,
    #[error("Geometry cannot be empty")]
    Empty,
    #[error("Only Polygon and MultiPolygon geometries are supported")]
    Unsupported,
}

/// A validated selection: non-empty and polygonal.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionGeometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl SelectionGeometry {
    /// Area-weighted centroid of the selection.
    pub fn centroid(&self) -> Option<Point<f64>> {
        match self {
            SelectionGeometry::Polygon(polygon) => polygon.centroid(),
            SelectionGeometry::MultiPolygon(multi) => multi.centroid(),
        }
    }

    /// Axis-aligned bounding rectangle of the selection.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        match self {
            SelectionGeometry::Polygon(polygon) => polygon.bounding_rect(),
            SelectionGeometry::MultiPolygon(multi) => multi.bounding_rect(),
        }
    }

    /// The selection as a GeoJSON geometry value.
    pub fn to_geojson(&self) -> geojson::Value {
        match self {
            SelectionGeometry::Polygon(polygon) => geojson::Value::from(polygon),
            SelectionGeometry::MultiPolygon(multi) => geojson::Value::from(multi),
        }
    }
}

/// Parse a GeoJSON geometry into a validated selection.
///
/// Rejects payloads that do not convert, empty geometries, and any type
/// other than Polygon or MultiPolygon, in that order.
pub fn geometry_from_geojson(raw: &geojson::Geometry) -> Result<SelectionGeometry, GeometryError> {
    let geometry = Geometry::<f64>::try_from(&raw.value).map_err(|_| GeometryError::Invalid)?;

    if geometry.is_empty() {
        return Err(GeometryError::Empty);
    }

    match geometry {
        Geometry::Polygon(polygon) => Ok(SelectionGeometry::Polygon(polygon)),
        Geometry::MultiPolygon(multi) => Ok(SelectionGeometry::MultiPolygon(multi)),
        _ => Err(GeometryError::Unsupported),
    }
}
