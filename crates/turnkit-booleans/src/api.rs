//! Public entry point for planar boolean subtraction.

use crate::classify::{keep_minuend_piece, keep_subtrahend_piece};
use crate::split::split_edge_against;
use crate::BooleanError;
use turnkit_geom::{EdgeCurve, Plane, Region};

/// Tolerance for the shared-frame check between the two regions.
const FRAME_TOL: f64 = 1e-9;

/// Compute the boundary edges of `minuend − subtrahend`.
///
/// Both regions must be expressed in the SAME plane frame (origin and
/// in-plane axes), since edge coordinates are compared directly.
///
/// The returned edges are unordered but deterministic: minuend pieces
/// first in loop/traversal order, then subtrahend pieces (reversed so
/// they bound the remaining material). An empty result means the
/// subtrahend covers the minuend entirely.
pub fn subtract(minuend: &Region, subtrahend: &Region) -> Result<Vec<EdgeCurve>, BooleanError> {
    if !same_frame(&minuend.plane, &subtrahend.plane) {
        return Err(BooleanError::PlaneMismatch);
    }

    let mut result = Vec::new();

    for edge in minuend.edges() {
        for piece in split_edge_against(edge, subtrahend) {
            if keep_minuend_piece(&piece, subtrahend) {
                result.push(piece);
            }
        }
    }

    for edge in subtrahend.edges() {
        for piece in split_edge_against(edge, minuend) {
            if keep_subtrahend_piece(&piece, minuend) {
                result.push(piece.reversed());
            }
        }
    }

    Ok(result)
}

fn same_frame(a: &Plane, b: &Plane) -> bool {
    (a.origin - b.origin).norm() < FRAME_TOL
        && (a.x_dir.as_ref() - b.x_dir.as_ref()).norm() < FRAME_TOL
        && (a.y_dir.as_ref() - b.y_dir.as_ref()).norm() < FRAME_TOL
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnkit_math::{Point2, Point3, Vec3};

    #[test]
    fn test_subtract_disk_from_rectangle() {
        let plane = Plane::xy();
        let rect = Region::rectangle(plane.clone(), 20.0, 10.0);
        let disk = Region::circle(plane, Point2::new(10.0, 5.0), 2.0);

        let edges = subtract(&rect, &disk).unwrap();
        // 4 rectangle edges untouched + the full circle reversed.
        assert_eq!(edges.len(), 5);
        let arc = edges
            .iter()
            .find(|e| e.arc_sweep().is_some())
            .expect("hole boundary present");
        // Reversed: clockwise full circle.
        assert!(arc.arc_sweep().unwrap() < 0.0);
    }

    #[test]
    fn test_subtract_identical_regions_is_empty() {
        let plane = Plane::xy();
        let a = Region::rectangle(plane.clone(), 10.0, 10.0);
        let b = Region::rectangle(plane, 10.0, 10.0);
        let edges = subtract(&a, &b).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn test_subtract_overlapping_rectangles() {
        let plane = Plane::xy();
        // Minuend [0,10]×[0,10]; subtrahend covers the right half and
        // sticks out to the right: [5,15]×[0,10] expressed in the same frame.
        let a = Region::rectangle(plane.clone(), 10.0, 10.0);
        let shifted = vec![vec![
            EdgeCurve::line(Point2::new(5.0, 0.0), Point2::new(15.0, 0.0)),
            EdgeCurve::line(Point2::new(15.0, 0.0), Point2::new(15.0, 10.0)),
            EdgeCurve::line(Point2::new(15.0, 10.0), Point2::new(5.0, 10.0)),
            EdgeCurve::line(Point2::new(5.0, 10.0), Point2::new(5.0, 0.0)),
        ]];
        let b = Region::from_loops(plane, shifted).unwrap();

        let edges = subtract(&a, &b).unwrap();
        // Remaining material is [0,5]×[0,10]. Check every edge midpoint
        // stays on its boundary.
        assert!(!edges.is_empty());
        for e in &edges {
            let m = e.midpoint();
            let on_left = m.x.abs() < 1e-9;
            let on_split = (m.x - 5.0).abs() < 1e-9;
            let on_bottom = m.y.abs() < 1e-9 && m.x < 5.0 + 1e-9;
            let on_top = (m.y - 10.0).abs() < 1e-9 && m.x < 5.0 + 1e-9;
            assert!(
                on_left || on_split || on_bottom || on_top,
                "unexpected edge midpoint {m:?}"
            );
        }
        // The split boundary comes from the subtrahend's left edge.
        assert!(edges.iter().any(|e| (e.midpoint().x - 5.0).abs() < 1e-9));
    }

    #[test]
    fn test_subtract_plane_mismatch() {
        let a = Region::rectangle(Plane::xy(), 10.0, 10.0);
        let other = Plane::new(Point3::new(0.0, 0.0, 5.0), Vec3::x(), Vec3::y());
        let b = Region::rectangle(other, 10.0, 10.0);
        assert!(matches!(subtract(&a, &b), Err(BooleanError::PlaneMismatch)));
    }

    #[test]
    fn test_subtract_disjoint_leaves_minuend_intact() {
        let plane = Plane::xy();
        let a = Region::rectangle(plane.clone(), 10.0, 10.0);
        let b = Region::circle(plane, Point2::new(50.0, 50.0), 3.0);
        let edges = subtract(&a, &b).unwrap();
        // The far-away disk contributes nothing; rectangle survives whole.
        assert_eq!(edges.len(), 4);
        assert!(edges.iter().all(|e| e.arc_sweep().is_none()));
    }
}
