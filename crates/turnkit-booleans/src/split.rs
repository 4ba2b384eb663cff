//! Edge splitting at region-boundary intersections.

use crate::intersect::curve_intersections;
use turnkit_geom::{EdgeCurve, Region};

/// Length below which a split piece is discarded as noise.
const PIECE_EPS: f64 = 1e-9;

/// Split a single edge at every intersection with `other`'s boundary.
///
/// Returns the pieces in traversal order. Pieces shorter than the
/// length epsilon are dropped.
pub fn split_edge_against(edge: &EdgeCurve, other: &Region) -> Vec<EdgeCurve> {
    let mut params = Vec::new();
    for boundary_edge in other.edges() {
        for (t, _) in curve_intersections(edge, boundary_edge) {
            params.push(t);
        }
    }
    edge.split_at(&params)
        .into_iter()
        .filter(|piece| !piece.is_degenerate(PIECE_EPS))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnkit_geom::Plane;
    use turnkit_math::Point2;

    #[test]
    fn test_split_line_through_rectangle() {
        let rect = Region::rectangle(Plane::xy(), 10.0, 10.0);
        // Horizontal line crossing both vertical sides.
        let line = EdgeCurve::line(Point2::new(-5.0, 5.0), Point2::new(15.0, 5.0));
        let pieces = split_edge_against(&line, &rect);
        assert_eq!(pieces.len(), 3);
        assert!((pieces[0].end() - Point2::new(0.0, 5.0)).norm() < 1e-9);
        assert!((pieces[1].end() - Point2::new(10.0, 5.0)).norm() < 1e-9);
    }

    #[test]
    fn test_split_edge_no_intersections() {
        let rect = Region::rectangle(Plane::xy(), 10.0, 10.0);
        let line = EdgeCurve::line(Point2::new(2.0, 2.0), Point2::new(8.0, 8.0));
        let pieces = split_edge_against(&line, &rect);
        assert_eq!(pieces.len(), 1);
    }

    #[test]
    fn test_split_circle_by_rectangle_edge() {
        // Circle centered on the rectangle's top edge.
        let rect = Region::rectangle(Plane::xy(), 20.0, 10.0);
        let circle = EdgeCurve::full_circle(Point2::new(10.0, 10.0), 3.0);
        let pieces = split_edge_against(&circle, &rect);
        // Split at the two crossings of the y=10 edge.
        assert_eq!(pieces.len(), 2);
        let total: f64 = pieces.iter().map(|p| p.length()).sum();
        assert!((total - circle.length()).abs() < 1e-9);
    }
}
