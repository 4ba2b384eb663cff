//! Part outline extraction: section, subtract, filter, classify.

use tracing::{debug, trace};
use turnkit_booleans::subtract;
use turnkit_geom::{EdgeCurve, Sectionable};
use turnkit_math::Point3;

use crate::{Result, SilhouettePlane, TurnError};

/// Offset applied to the part section to form the containment test
/// face, in mm.
pub const BOUND_FACE_OFFSET: f64 = 0.1;

/// Absolute tolerance of the vertex containment test, in mm. Fixed, not
/// relative: segment endpoints must sit within this distance of the
/// part boundary face.
pub const CONTAINMENT_TOLERANCE: f64 = 0.1;

/// A typed 2D profile element on the cutting plane.
///
/// `bulge == 0.0` is a straight segment. Otherwise the segment is a
/// circular arc: |bulge| is the swept angle in radians and the sign is
/// the winding, positive counter-clockwise as seen along the cutting
/// plane normal.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    /// Start point on the cutting plane.
    pub start: Point3,
    /// End point on the cutting plane.
    pub end: Point3,
    /// Signed arc bulge; zero for straight segments.
    pub bulge: f64,
}

impl PathSegment {
    /// A straight segment.
    pub fn line(start: Point3, end: Point3) -> Self {
        Self {
            start,
            end,
            bulge: 0.0,
        }
    }

    /// Whether this segment is an arc.
    pub fn is_arc(&self) -> bool {
        self.bulge != 0.0
    }

    /// Straight-line distance between the endpoints.
    pub fn chord_length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// The segment traversed in the opposite direction. Reversing an
    /// arc flips its winding, so the bulge changes sign.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            bulge: -self.bulge,
        }
    }
}

/// The extracted part outline.
///
/// `segments` is deliberately an UNORDERED set: elements appear in
/// boundary-edge enumeration order, not chained end to end. Use
/// [`chain_segments`](crate::chain_segments) when a connected polyline
/// is required.
#[derive(Debug, Clone)]
pub struct PartOutline {
    /// Typed profile segments in edge-enumeration order.
    pub segments: Vec<PathSegment>,
    /// Retained boundary edges plus, for each arc, the two
    /// center-to-endpoint construction lines. Diagnostics and
    /// visualization only; never consumed by the gcode stage.
    pub edges: Vec<EdgeCurve>,
}

/// Extract the part outline from the stock silhouette.
///
/// Stages, all fatal on failure:
///
/// 1. Cross-section the part onto the silhouette plane at height 0.
/// 2. Boolean-subtract the section from the stock rectangle.
/// 3. Keep only edges whose every endpoint lies within
///    [`CONTAINMENT_TOLERANCE`] of the part bound face (the section
///    padded by [`BOUND_FACE_OFFSET`]); this discards the outer stock
///    edges.
/// 4. Classify each retained edge as a straight or bulged
///    [`PathSegment`].
pub fn extract_outline(
    model: &dyn Sectionable,
    silhouette: &SilhouettePlane,
) -> Result<PartOutline> {
    let plane = &silhouette.plane;

    let section = model.section(plane, 0.0)?;
    if section.is_empty() {
        return Err(TurnError::EmptySection);
    }
    let bound_face = section.padded(BOUND_FACE_OFFSET);

    let path_area = subtract(&silhouette.face(), &section)?;
    if path_area.is_empty() {
        return Err(TurnError::EmptyPathArea);
    }
    debug!(edges = path_area.len(), "path area boundary");

    let mut segments = Vec::new();
    let mut edges = Vec::new();

    for curve in path_area {
        let endpoints = [plane.to_3d(curve.start()), plane.to_3d(curve.end())];
        let edge_in = endpoints
            .iter()
            .all(|v| bound_face.contains(v, CONTAINMENT_TOLERANCE));
        if !edge_in {
            trace!(?curve, "edge off the part surface, dropped");
            continue;
        }

        let [start, end] = endpoints;
        let mut segment = PathSegment::line(start, end);

        if let (Some(center), Some(sweep)) = (curve.arc_center(), curve.arc_sweep()) {
            segment.bulge = sweep.abs() * arc_winding(&curve);
            edges.push(EdgeCurve::line(center, curve.start()));
            edges.push(EdgeCurve::line(center, curve.end()));
        }

        edges.push(curve);
        segments.push(segment);
    }

    if segments.is_empty() {
        return Err(TurnError::NoPartEdges);
    }
    debug!(segments = segments.len(), "part outline");

    Ok(PartOutline { segments, edges })
}

/// Winding sign of an arc edge in plane coordinates.
///
/// Derived from the cross product of the start tangent and the chord:
/// positive for counter-clockwise travel. A full circle has a
/// degenerate chord, so its stored sweep sign is used instead.
fn arc_winding(curve: &EdgeCurve) -> f64 {
    let chord = curve.end() - curve.start();
    if chord.norm() < 1e-9 {
        return curve.arc_sweep().map(f64::signum).unwrap_or(0.0);
    }
    let tangent = curve.tangent_at_start();
    if tangent.x * chord.y - tangent.y * chord.x >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_silhouette, StockEnvelope, TurnParameters};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;
    use turnkit_geom::{GeomError, Plane, Region};
    use turnkit_math::{Aabb3, Point2};
    use turnkit_sketch::RevolvedSolid;

    fn stock_25x100() -> StockEnvelope {
        StockEnvelope::from_radius(25.0, 0.0, 100.0)
    }

    fn offsets_5() -> TurnParameters {
        TurnParameters {
            start_offset: 5.0,
            end_offset: 5.0,
            ..TurnParameters::default()
        }
    }

    #[test]
    fn test_cylinder_outline_segments() {
        let silhouette = build_silhouette(&stock_25x100(), &offsets_5()).unwrap();
        let part = RevolvedSolid::cylinder(20.0, 0.0, 80.0).unwrap();
        let outline = extract_outline(&part, &silhouette).unwrap();

        // Front face, turned surface, back face.
        assert_eq!(outline.segments.len(), 3);
        assert!(outline.segments.iter().all(|s| !s.is_arc()));

        // The turned surface runs the part length at x = −20.
        let surface = outline
            .segments
            .iter()
            .find(|s| s.chord_length() > 50.0)
            .expect("longitudinal cut present");
        assert_relative_eq!(surface.start.x, -20.0, epsilon = 1e-9);
        assert_relative_eq!(surface.end.x, -20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_containment_invariant() {
        let silhouette = build_silhouette(&stock_25x100(), &offsets_5()).unwrap();
        let part = RevolvedSolid::cylinder(20.0, 0.0, 80.0).unwrap();

        let section = part.section(&silhouette.plane, 0.0).unwrap();
        let bound = section.padded(BOUND_FACE_OFFSET);

        let outline = extract_outline(&part, &silhouette).unwrap();
        for segment in &outline.segments {
            assert!(bound.contains(&segment.start, CONTAINMENT_TOLERANCE));
            assert!(bound.contains(&segment.end, CONTAINMENT_TOLERANCE));
        }
    }

    #[test]
    fn test_idempotent_extraction() {
        let silhouette = build_silhouette(&stock_25x100(), &offsets_5()).unwrap();
        let part = RevolvedSolid::frustum(25.0, 10.0, 0.0, 100.0).unwrap();

        let a = extract_outline(&part, &silhouette).unwrap();
        let b = extract_outline(&part, &silhouette).unwrap();

        assert_eq!(a.segments.len(), b.segments.len());
        for (sa, sb) in a.segments.iter().zip(&b.segments) {
            assert!((sa.start - sb.start).norm() < 1e-12);
            assert!((sa.end - sb.end).norm() < 1e-12);
            assert!((sa.bulge - sb.bulge).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ball_yields_single_bulged_segment() {
        // Zero offsets: only the ball's cross-section survives the
        // containment filter, as one arc edge inside the stock band.
        let silhouette =
            build_silhouette(&stock_25x100(), &TurnParameters::default()).unwrap();
        let part = RevolvedSolid::ball(10.0, 50.0).unwrap();
        let outline = extract_outline(&part, &silhouette).unwrap();

        assert_eq!(outline.segments.len(), 1);
        let arc = &outline.segments[0];
        assert!(arc.is_arc());
        assert_relative_eq!(arc.bulge.abs(), PI, epsilon = 1e-9);
        // Construction lines recorded for the arc: center to each
        // endpoint, plus the retained edge itself.
        assert_eq!(outline.edges.len(), 3);
    }

    #[test]
    fn test_cone_outline_single_slant() {
        let silhouette =
            build_silhouette(&stock_25x100(), &TurnParameters::default()).unwrap();
        let part = RevolvedSolid::frustum(25.0, 0.0, 0.0, 100.0).unwrap();
        let outline = extract_outline(&part, &silhouette).unwrap();

        assert_eq!(outline.segments.len(), 1);
        let slant = &outline.segments[0];
        assert!(!slant.is_arc());
        // From the stock corner to the apex on the axis.
        let xs = [slant.start.x, slant.end.x];
        assert!(xs.contains(&0.0) || xs.iter().any(|x| x.abs() < 1e-9));
    }

    #[test]
    fn test_part_filling_stock_is_fatal() {
        // The part covers the stock band exactly: subtraction leaves
        // nothing, which must be an error, never an empty success.
        let silhouette =
            build_silhouette(&stock_25x100(), &TurnParameters::default()).unwrap();
        let part = RevolvedSolid::cylinder(25.0, 0.0, 100.0).unwrap();
        let result = extract_outline(&part, &silhouette);
        assert!(matches!(result, Err(TurnError::EmptyPathArea)));
    }

    struct EmptyKernel;

    impl Sectionable for EmptyKernel {
        fn aabb(&self) -> Aabb3 {
            Aabb3::empty()
        }

        fn section(
            &self,
            plane: &Plane,
            _height: f64,
        ) -> std::result::Result<Region, GeomError> {
            Region::from_loops(plane.clone(), Vec::new())
        }
    }

    #[test]
    fn test_empty_section_is_fatal() {
        let silhouette =
            build_silhouette(&stock_25x100(), &TurnParameters::default()).unwrap();
        let result = extract_outline(&EmptyKernel, &silhouette);
        assert!(matches!(result, Err(TurnError::EmptySection)));
    }

    struct SplineKernel;

    impl Sectionable for SplineKernel {
        fn aabb(&self) -> Aabb3 {
            Aabb3::empty()
        }

        fn section(
            &self,
            _plane: &Plane,
            _height: f64,
        ) -> std::result::Result<Region, GeomError> {
            Err(GeomError::UnsupportedCurve("bspline".into()))
        }
    }

    #[test]
    fn test_unsupported_curve_propagates() {
        let silhouette =
            build_silhouette(&stock_25x100(), &TurnParameters::default()).unwrap();
        let result = extract_outline(&SplineKernel, &silhouette);
        assert!(matches!(
            result,
            Err(TurnError::Geometry(GeomError::UnsupportedCurve(_)))
        ));
    }

    #[test]
    fn test_disk_part_circular_edge() {
        // A mock part whose cross-section is a disk fully inside the
        // stock band: the whole circle survives as one closed bulged
        // segment with a 2π sweep.
        struct DiskKernel;

        impl Sectionable for DiskKernel {
            fn aabb(&self) -> Aabb3 {
                Aabb3::empty()
            }

            fn section(
                &self,
                plane: &Plane,
                _height: f64,
            ) -> std::result::Result<Region, GeomError> {
                Ok(Region::circle(plane.clone(), Point2::new(50.0, 12.0), 6.0))
            }
        }

        let silhouette =
            build_silhouette(&stock_25x100(), &TurnParameters::default()).unwrap();
        let outline = extract_outline(&DiskKernel, &silhouette).unwrap();

        assert_eq!(outline.segments.len(), 1);
        let segment = &outline.segments[0];
        assert!(segment.is_arc());
        assert_relative_eq!(segment.bulge.abs(), 2.0 * PI, epsilon = 1e-9);
        assert!(segment.chord_length() < 1e-9);
    }

    #[test]
    fn test_reversed_segment_negates_bulge() {
        let segment = PathSegment {
            start: Point3::new(0.0, 0.0, 0.0),
            end: Point3::new(10.0, 0.0, 0.0),
            bulge: PI / 2.0,
        };
        let reversed = segment.reversed();
        assert_relative_eq!(reversed.bulge, -PI / 2.0, epsilon = 1e-12);
        assert!((reversed.start - segment.end).norm() < 1e-12);
    }

    #[test]
    fn test_arc_winding_sign() {
        // CCW quarter arc.
        let ccw = EdgeCurve::arc_from_endpoints(
            Point2::origin(),
            Point2::new(5.0, 0.0),
            Point2::new(0.0, 5.0),
            true,
        );
        assert_relative_eq!(arc_winding(&ccw), 1.0, epsilon = 1e-12);
        assert_relative_eq!(arc_winding(&ccw.reversed()), -1.0, epsilon = 1e-12);
    }
}
