//! Overpass API integration: query building, fetching, and the mapping of
//! raw elements to GeoJSON features.

mod feature;
mod fetcher;

pub use feature::{element_to_feature, CenterPoint, OverpassResponse, RawElement, WayVertex};
pub use fetcher::{OverpassError, OverpassFetcher, DEFAULT_LIMIT};
