//! Closed planar regions with tolerance-based containment.

use crate::{EdgeCurve, GeomError, Plane};
use turnkit_math::{Point2, Point3, Tolerance};

/// Result of classifying a point against a region boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// Strictly inside a loop, away from the boundary.
    Inside,
    /// Within tolerance of the boundary.
    OnBoundary,
    /// Strictly outside every loop.
    Outside,
}

/// A bounded region on a plane: one or more disjoint closed loops of
/// line/arc edges, expressed in the plane's (u, v) coordinates.
///
/// Loops are stored in traversal order; the region's interior is
/// defined by the even-odd rule, so loop orientation does not affect
/// containment.
#[derive(Debug, Clone)]
pub struct Region {
    /// The plane this region lies on.
    pub plane: Plane,
    /// Closed edge loops in plane coordinates.
    pub loops: Vec<Vec<EdgeCurve>>,
}

impl Region {
    /// Build a region from closed loops, validating closure and edge
    /// degeneracy.
    pub fn from_loops(plane: Plane, loops: Vec<Vec<EdgeCurve>>) -> Result<Self, GeomError> {
        let tol = Tolerance::DEFAULT;
        let mut index = 0usize;
        for lp in &loops {
            if lp.is_empty() {
                return Err(GeomError::EmptySection);
            }
            for edge in lp {
                if edge.is_degenerate(tol.linear) {
                    return Err(GeomError::DegenerateEdge(index));
                }
                index += 1;
            }
            for i in 0..lp.len() {
                let next = (i + 1) % lp.len();
                let gap = (lp[next].start() - lp[i].end()).norm();
                if gap > 1e-6 {
                    return Err(GeomError::NotClosed(gap));
                }
            }
        }
        Ok(Self { plane, loops })
    }

    /// An axis-aligned rectangle spanning `[0, length] × [0, width]` in
    /// plane coordinates, counter-clockwise.
    pub fn rectangle(plane: Plane, length: f64, width: f64) -> Self {
        let p0 = Point2::new(0.0, 0.0);
        let p1 = Point2::new(length, 0.0);
        let p2 = Point2::new(length, width);
        let p3 = Point2::new(0.0, width);
        Self {
            plane,
            loops: vec![vec![
                EdgeCurve::line(p0, p1),
                EdgeCurve::line(p1, p2),
                EdgeCurve::line(p2, p3),
                EdgeCurve::line(p3, p0),
            ]],
        }
    }

    /// A circular disk as a single full-circle loop.
    pub fn circle(plane: Plane, center: Point2, radius: f64) -> Self {
        Self {
            plane,
            loops: vec![vec![EdgeCurve::full_circle(center, radius)]],
        }
    }

    /// True when the region has no loops at all.
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    /// Iterate over every boundary edge of every loop.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeCurve> {
        self.loops.iter().flatten()
    }

    /// Minimum distance from a plane-coordinate point to the boundary.
    pub fn distance_to_boundary(&self, p: Point2) -> f64 {
        self.edges()
            .map(|e| e.distance_to(p))
            .fold(f64::INFINITY, f64::min)
    }

    /// Classify a plane-coordinate point against the region.
    pub fn classify_point(&self, p: Point2, tol: f64) -> Containment {
        if self.distance_to_boundary(p) <= tol {
            return Containment::OnBoundary;
        }
        let crossings: usize = self.edges().map(|e| e.ray_crossings(p)).sum();
        if crossings % 2 == 1 {
            Containment::Inside
        } else {
            Containment::Outside
        }
    }

    /// Tolerance-based containment of a 3D point.
    ///
    /// True when the point lies within `tol` of the region's plane and
    /// its projection is inside a loop or within `tol` of the boundary
    /// (boundary counts as inside, matching the host-kernel
    /// `isInside(pt, tol, true)` semantics the turning core relies on).
    pub fn contains(&self, p: &Point3, tol: f64) -> bool {
        if self.plane.signed_distance(p).abs() > tol {
            return false;
        }
        self.classify_point(self.plane.project(p), tol) != Containment::Outside
    }

    /// View of this region enlarged by `pad` for containment queries.
    ///
    /// Stands in for a true 2D offset face: the only use the turning
    /// core has for the enlarged face is tolerance-padded containment,
    /// so the pad widens the boundary band instead of rebuilding offset
    /// curves.
    pub fn padded(&self, pad: f64) -> PaddedRegion<'_> {
        PaddedRegion { region: self, pad }
    }
}

/// A [`Region`] enlarged by a fixed pad, exposing containment only.
#[derive(Debug, Clone, Copy)]
pub struct PaddedRegion<'a> {
    region: &'a Region,
    pad: f64,
}

impl PaddedRegion<'_> {
    /// Containment of a 3D point against the padded region.
    pub fn contains(&self, p: &Point3, tol: f64) -> bool {
        self.region.contains(p, self.pad + tol)
    }

    /// The pad applied on top of the underlying region.
    pub fn pad(&self) -> f64 {
        self.pad
    }
}
