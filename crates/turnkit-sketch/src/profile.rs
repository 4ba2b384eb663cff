//! Closed 2D lathe profiles in the axial half-plane.

use std::f64::consts::{PI, TAU};
use turnkit_math::{Point2, Tolerance};

use crate::ProfileError;

/// A segment of a lathe profile.
///
/// Profile coordinates are `(z, r)`: `x` is the axial position along
/// the spindle, `y` the radius (distance from the axis, r ≥ 0).
#[derive(Debug, Clone)]
pub enum ProfileSegment {
    /// A straight segment from `start` to `end`.
    Line {
        /// Start point in (z, r) coordinates.
        start: Point2,
        /// End point in (z, r) coordinates.
        end: Point2,
    },
    /// A circular arc from `start` to `end` around `center`.
    Arc {
        /// Start point in (z, r) coordinates.
        start: Point2,
        /// End point in (z, r) coordinates.
        end: Point2,
        /// Arc center in (z, r) coordinates.
        center: Point2,
        /// If true, the arc runs counter-clockwise from start to end.
        ccw: bool,
    },
}

impl ProfileSegment {
    /// Start point of this segment.
    pub fn start(&self) -> Point2 {
        match self {
            ProfileSegment::Line { start, .. } => *start,
            ProfileSegment::Arc { start, .. } => *start,
        }
    }

    /// End point of this segment.
    pub fn end(&self) -> Point2 {
        match self {
            ProfileSegment::Line { end, .. } => *end,
            ProfileSegment::Arc { end, .. } => *end,
        }
    }

    /// Check if this segment is degenerate (zero length).
    pub fn is_degenerate(&self) -> bool {
        let tol = Tolerance::DEFAULT;
        match self {
            ProfileSegment::Line { start, end } => (end - start).norm() < tol.linear,
            ProfileSegment::Arc {
                start, end, center, ..
            } => {
                let r1 = (start - center).norm();
                let r2 = (end - center).norm();
                r1 < tol.linear || r2 < tol.linear || (end - start).norm() < tol.linear
            }
        }
    }

    /// True when the segment lies along the spindle axis (r = 0).
    pub fn is_on_axis(&self, tol: f64) -> bool {
        match self {
            ProfileSegment::Line { start, end } => start.y.abs() <= tol && end.y.abs() <= tol,
            ProfileSegment::Arc { .. } => false,
        }
    }

    /// Signed sweep of an arc segment from start to end, radians.
    pub fn arc_sweep(&self) -> Option<f64> {
        match self {
            ProfileSegment::Line { .. } => None,
            ProfileSegment::Arc {
                start,
                end,
                center,
                ccw,
            } => {
                let a0 = (start.y - center.y).atan2(start.x - center.x);
                let a1 = (end.y - center.y).atan2(end.x - center.x);
                let sweep = if *ccw {
                    (a1 - a0).rem_euclid(TAU)
                } else {
                    -((a0 - a1).rem_euclid(TAU))
                };
                Some(sweep)
            }
        }
    }

    /// Axial and radial extremes `(min_z, max_z, min_r, max_r)` reached
    /// along this segment, including arc quadrant points.
    pub fn extremes(&self) -> (f64, f64, f64, f64) {
        let s = self.start();
        let e = self.end();
        let mut min_z = s.x.min(e.x);
        let mut max_z = s.x.max(e.x);
        let mut min_r = s.y.min(e.y);
        let mut max_r = s.y.max(e.y);

        if let ProfileSegment::Arc {
            start,
            center,
            ccw,
            ..
        } = self
        {
            let radius = (start - center).norm();
            let a0 = (start.y - center.y).atan2(start.x - center.x);
            let sweep = self.arc_sweep().unwrap_or(0.0);
            for (quadrant, z_ext, r_ext) in [
                (0.0, center.x + radius, center.y),
                (PI / 2.0, center.x, center.y + radius),
                (PI, center.x - radius, center.y),
                (3.0 * PI / 2.0, center.x, center.y - radius),
            ] {
                let delta = if *ccw {
                    (quadrant - a0).rem_euclid(TAU)
                } else {
                    (a0 - quadrant).rem_euclid(TAU)
                };
                if delta <= sweep.abs() {
                    min_z = min_z.min(z_ext);
                    max_z = max_z.max(z_ext);
                    min_r = min_r.min(r_ext);
                    max_r = max_r.max(r_ext);
                }
            }
        }

        (min_z, max_z, min_r, max_r)
    }
}

/// A closed profile in the (z, r) half-plane describing a solid of
/// revolution around the spindle axis.
#[derive(Debug, Clone)]
pub struct LatheProfile {
    /// The segments forming the closed loop.
    segments: Vec<ProfileSegment>,
}

impl LatheProfile {
    /// Create a profile from segments.
    ///
    /// # Errors
    ///
    /// - `EmptyProfile` if there are no segments
    /// - `DegenerateSegment` for zero-length segments
    /// - `NotClosed` if consecutive segments (or last-to-first) leave a gap
    /// - `NegativeRadius` if any point of the profile drops below r = 0
    pub fn from_segments(segments: Vec<ProfileSegment>) -> Result<Self, ProfileError> {
        if segments.is_empty() {
            return Err(ProfileError::EmptyProfile);
        }

        for (i, seg) in segments.iter().enumerate() {
            if seg.is_degenerate() {
                return Err(ProfileError::DegenerateSegment(i));
            }
        }

        let tol = Tolerance::DEFAULT;
        for i in 0..segments.len() {
            let next = (i + 1) % segments.len();
            let gap = (segments[next].start() - segments[i].end()).norm();
            if gap > tol.linear {
                return Err(ProfileError::NotClosed(gap));
            }
        }

        let mut min_r = f64::INFINITY;
        for seg in &segments {
            let (_, _, seg_min_r, _) = seg.extremes();
            min_r = min_r.min(seg_min_r);
        }
        if min_r < -tol.linear {
            return Err(ProfileError::NegativeRadius(min_r));
        }

        Ok(Self { segments })
    }

    /// A solid cylinder of the given radius spanning `z0..z1`.
    pub fn cylinder(radius: f64, z0: f64, z1: f64) -> Result<Self, ProfileError> {
        let a = Point2::new(z0, 0.0);
        let b = Point2::new(z1, 0.0);
        let c = Point2::new(z1, radius);
        let d = Point2::new(z0, radius);
        Self::from_segments(vec![
            ProfileSegment::Line { start: a, end: b },
            ProfileSegment::Line { start: b, end: c },
            ProfileSegment::Line { start: c, end: d },
            ProfileSegment::Line { start: d, end: a },
        ])
    }

    /// A cone frustum from radius `r0` at `z0` to `r1` at `z1`.
    ///
    /// Either radius may be zero for a full cone tip.
    pub fn frustum(r0: f64, r1: f64, z0: f64, z1: f64) -> Result<Self, ProfileError> {
        let a = Point2::new(z0, 0.0);
        let b = Point2::new(z1, 0.0);
        let c = Point2::new(z1, r1);
        let d = Point2::new(z0, r0);

        let mut segments = vec![ProfileSegment::Line { start: a, end: b }];
        if r1 > 0.0 {
            segments.push(ProfileSegment::Line { start: b, end: c });
        }
        segments.push(ProfileSegment::Line {
            start: if r1 > 0.0 { c } else { b },
            end: if r0 > 0.0 { d } else { a },
        });
        if r0 > 0.0 {
            segments.push(ProfileSegment::Line { start: d, end: a });
        }
        Self::from_segments(segments)
    }

    /// A full ball of the given radius centered at `center_z` on the axis.
    pub fn ball(radius: f64, center_z: f64) -> Result<Self, ProfileError> {
        let a = Point2::new(center_z - radius, 0.0);
        let b = Point2::new(center_z + radius, 0.0);
        Self::from_segments(vec![
            ProfileSegment::Line { start: a, end: b },
            ProfileSegment::Arc {
                start: b,
                end: a,
                center: Point2::new(center_z, 0.0),
                ccw: true,
            },
        ])
    }

    /// The segments of this profile.
    pub fn segments(&self) -> &[ProfileSegment] {
        &self.segments
    }

    /// Axial extent `(z_min, z_max)` of the profile.
    pub fn z_range(&self) -> (f64, f64) {
        let mut min_z = f64::INFINITY;
        let mut max_z = f64::NEG_INFINITY;
        for seg in &self.segments {
            let (lo, hi, _, _) = seg.extremes();
            min_z = min_z.min(lo);
            max_z = max_z.max(hi);
        }
        (min_z, max_z)
    }

    /// Largest radius reached by the profile.
    pub fn max_radius(&self) -> f64 {
        self.segments
            .iter()
            .map(|s| s.extremes().3)
            .fold(0.0, f64::max)
    }

    /// Smallest radius reached by the profile.
    pub fn min_radius(&self) -> f64 {
        self.segments
            .iter()
            .map(|s| s.extremes().2)
            .fold(f64::INFINITY, f64::min)
    }
}
