//! Selection processing: geometry validation, the reference boundary
//! match, and the placeholder dataset.

mod boundary;
mod geometry;
mod placeholder;

pub use boundary::ReferenceBoundary;
pub use geometry::{geometry_from_geojson, GeometryError, SelectionGeometry};
pub use placeholder::placeholder_features;
