//! Fixed reference boundary used to route selections.

use geo::{Coord, Distance, Euclidean, Intersects, LineString, Polygon};

use super::SelectionGeometry;

/// Coarse outline of Sweden as (lon, lat) pairs, closed.
const SWEDEN_OUTLINE: [(f64, f64); 25] = [
    (10.5, 55.2),
    (11.5, 55.3),
    (12.8, 56.2),
    (14.3, 57.1),
    (16.0, 57.6),
    (17.7, 58.8),
    (18.5, 59.5),
    (19.6, 60.6),
    (20.3, 62.0),
    (21.5, 63.5),
    (22.5, 65.0),
    (23.0, 66.5),
    (23.5, 67.9),
    (23.0, 68.6),
    (21.5, 69.0),
    (19.0, 68.9),
    (17.0, 67.5),
    (15.5, 66.0),
    (14.0, 64.2),
    (13.0, 62.5),
    (12.0, 60.8),
    (11.2, 59.3),
    (10.8, 58.0),
    (10.4, 56.0),
    (10.5, 55.2),
];

/// Margin around the outline, in degrees.
const BOUNDARY_MARGIN: f64 = 0.15;

/// The fixed polygon selections are matched against.
///
/// Built once at startup and shared read-only across requests. A selection
/// matches when it overlaps or touches the outline, or lies within the
/// margin of it, which is the same set of geometries that intersect the
/// outline expanded by the margin.
#[derive(Debug, Clone)]
pub struct ReferenceBoundary {
    outline: Polygon<f64>,
    margin: f64,
}

impl ReferenceBoundary {
    /// The Sweden boundary with the standard margin.
    pub fn sweden() -> Self {
        let exterior: LineString<f64> = SWEDEN_OUTLINE
            .iter()
            .map(|&(lon, lat)| Coord { x: lon, y: lat })
            .collect();

        Self {
            outline: Polygon::new(exterior, vec![]),
            margin: BOUNDARY_MARGIN,
        }
    }

    /// Whether the selection intersects the buffered outline.
    pub fn intersects(&self, selection: &SelectionGeometry) -> bool {
        match selection {
            SelectionGeometry::Polygon(polygon) => self.matches(polygon),
            SelectionGeometry::MultiPolygon(multi) => {
                multi.iter().any(|polygon| self.matches(polygon))
            }
        }
    }

    fn matches(&self, polygon: &Polygon<f64>) -> bool {
        polygon.intersects(&self.outline)
            || Euclidean.distance(polygon, &self.outline) <= self.margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::MultiPolygon;

    fn square(west: f64, south: f64, east: f64, north: f64) -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                Coord { x: west, y: south },
                Coord { x: east, y: south },
                Coord { x: east, y: north },
                Coord { x: west, y: north },
                Coord { x: west, y: south },
            ]),
            vec![],
        )
    }

    #[test]
    fn test_selection_inside_outline_matches() {
        let boundary = ReferenceBoundary::sweden();
        let selection = SelectionGeometry::Polygon(square(14.0, 61.0, 15.0, 62.0));
        assert!(boundary.intersects(&selection));
    }

    #[test]
    fn test_selection_crossing_outline_matches() {
        let boundary = ReferenceBoundary::sweden();
        // Straddles the western edge near Oslo fjord latitudes.
        let selection = SelectionGeometry::Polygon(square(10.0, 58.5, 12.5, 59.5));
        assert!(boundary.intersects(&selection));
    }

    #[test]
    fn test_selection_touching_vertex_matches() {
        let boundary = ReferenceBoundary::sweden();
        // North-east corner sits exactly on the (10.5, 55.2) vertex.
        let selection = SelectionGeometry::Polygon(square(9.5, 54.2, 10.5, 55.2));
        assert!(boundary.intersects(&selection));
    }

    #[test]
    fn test_selection_within_margin_matches() {
        let boundary = ReferenceBoundary::sweden();
        // Top edge is about 0.1 degrees south of the outline.
        let selection = SelectionGeometry::Polygon(square(10.4, 54.9, 10.6, 55.1));
        assert!(boundary.intersects(&selection));
    }

    #[test]
    fn test_selection_beyond_margin_does_not_match() {
        let boundary = ReferenceBoundary::sweden();
        // Top edge is about 0.3 degrees south of the outline.
        let selection = SelectionGeometry::Polygon(square(10.4, 54.5, 10.6, 54.9));
        assert!(!boundary.intersects(&selection));
    }

    #[test]
    fn test_distant_selection_does_not_match() {
        let boundary = ReferenceBoundary::sweden();
        let selection = SelectionGeometry::Polygon(square(-30.0, 45.0, -29.0, 46.0));
        assert!(!boundary.intersects(&selection));
    }

    #[test]
    fn test_multipolygon_matches_when_any_part_does() {
        let boundary = ReferenceBoundary::sweden();
        let selection = SelectionGeometry::MultiPolygon(MultiPolygon::new(vec![
            square(-30.0, 45.0, -29.0, 46.0),
            square(14.0, 61.0, 15.0, 62.0),
        ]));
        assert!(boundary.intersects(&selection));
    }
}
