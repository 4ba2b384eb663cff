//! Line and circular-arc edge curves in plane coordinates.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use turnkit_math::{Point2, Vec2};

/// Angular slack used when testing whether an angle lies on an arc.
const ANGLE_EPS: f64 = 1e-9;

/// The kind of an edge curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// Straight line segment.
    Line,
    /// Circular arc (a full circle is an arc with a 2π sweep).
    Arc,
}

/// A bounded curve in 2D plane coordinates: either a line segment or a
/// circular arc.
///
/// Arcs are parameterized by `center`, `radius`, `start_angle` and a
/// signed `sweep`: positive sweep runs counter-clockwise in plane
/// coordinates. `P(t) = center + radius * (cos θ, sin θ)` with
/// `θ = start_angle + t * sweep`, `t ∈ [0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeCurve {
    /// A line segment from `start` to `end`.
    Line {
        /// Start point.
        start: Point2,
        /// End point.
        end: Point2,
    },
    /// A circular arc.
    Arc {
        /// Center of the supporting circle.
        center: Point2,
        /// Radius of the supporting circle.
        radius: f64,
        /// Angle of the start point, radians.
        start_angle: f64,
        /// Signed swept angle, radians. Positive is counter-clockwise.
        sweep: f64,
    },
}

impl EdgeCurve {
    /// Build a line segment.
    pub fn line(start: Point2, end: Point2) -> Self {
        EdgeCurve::Line { start, end }
    }

    /// Build an arc from its center and two endpoints.
    ///
    /// The radius is taken from the start point; coincident endpoints
    /// produce a full circle. `ccw` selects the winding from start to
    /// end.
    pub fn arc_from_endpoints(center: Point2, start: Point2, end: Point2, ccw: bool) -> Self {
        let radius = (start - center).norm();
        let start_angle = (start.y - center.y).atan2(start.x - center.x);
        let end_angle = (end.y - center.y).atan2(end.x - center.x);
        let mut sweep = if ccw {
            (end_angle - start_angle).rem_euclid(TAU)
        } else {
            -((start_angle - end_angle).rem_euclid(TAU))
        };
        if sweep.abs() < ANGLE_EPS {
            // Degenerate span means the endpoints coincide: full circle.
            sweep = if ccw { TAU } else { -TAU };
        }
        EdgeCurve::Arc {
            center,
            radius,
            start_angle,
            sweep,
        }
    }

    /// A full circle traversed counter-clockwise from angle 0.
    pub fn full_circle(center: Point2, radius: f64) -> Self {
        EdgeCurve::Arc {
            center,
            radius,
            start_angle: 0.0,
            sweep: TAU,
        }
    }

    /// The kind of this curve.
    pub fn kind(&self) -> CurveKind {
        match self {
            EdgeCurve::Line { .. } => CurveKind::Line,
            EdgeCurve::Arc { .. } => CurveKind::Arc,
        }
    }

    /// Start point of the curve.
    pub fn start(&self) -> Point2 {
        match self {
            EdgeCurve::Line { start, .. } => *start,
            EdgeCurve::Arc {
                center,
                radius,
                start_angle,
                ..
            } => point_on_circle(*center, *radius, *start_angle),
        }
    }

    /// End point of the curve.
    pub fn end(&self) -> Point2 {
        match self {
            EdgeCurve::Line { end, .. } => *end,
            EdgeCurve::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => point_on_circle(*center, *radius, start_angle + sweep),
        }
    }

    /// Evaluate the curve at parameter `t ∈ [0, 1]`.
    pub fn point_at(&self, t: f64) -> Point2 {
        match self {
            EdgeCurve::Line { start, end } => start + t * (end - start),
            EdgeCurve::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => point_on_circle(*center, *radius, start_angle + t * sweep),
        }
    }

    /// Midpoint of the curve (parameter 0.5).
    pub fn midpoint(&self) -> Point2 {
        self.point_at(0.5)
    }

    /// Direction of travel at the start point (not normalized).
    pub fn tangent_at_start(&self) -> Vec2 {
        match self {
            EdgeCurve::Line { start, end } => end - start,
            EdgeCurve::Arc {
                start_angle, sweep, ..
            } => {
                let (sin_a, cos_a) = start_angle.sin_cos();
                sweep.signum() * Vec2::new(-sin_a, cos_a)
            }
        }
    }

    /// Arc length of the curve.
    pub fn length(&self) -> f64 {
        match self {
            EdgeCurve::Line { start, end } => (end - start).norm(),
            EdgeCurve::Arc { radius, sweep, .. } => radius * sweep.abs(),
        }
    }

    /// The curve traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        match self {
            EdgeCurve::Line { start, end } => EdgeCurve::Line {
                start: *end,
                end: *start,
            },
            EdgeCurve::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => EdgeCurve::Arc {
                center: *center,
                radius: *radius,
                start_angle: start_angle + sweep,
                sweep: -sweep,
            },
        }
    }

    /// Check if this curve is degenerate (shorter than `tol`).
    pub fn is_degenerate(&self, tol: f64) -> bool {
        self.length() < tol
    }

    /// Signed sweep of an arc, `None` for lines.
    pub fn arc_sweep(&self) -> Option<f64> {
        match self {
            EdgeCurve::Line { .. } => None,
            EdgeCurve::Arc { sweep, .. } => Some(*sweep),
        }
    }

    /// Center of an arc's supporting circle, `None` for lines.
    pub fn arc_center(&self) -> Option<Point2> {
        match self {
            EdgeCurve::Line { .. } => None,
            EdgeCurve::Arc { center, .. } => Some(*center),
        }
    }

    /// Minimum distance from a point to this curve.
    pub fn distance_to(&self, p: Point2) -> f64 {
        match self {
            EdgeCurve::Line { start, end } => {
                let d = end - start;
                let len2 = d.norm_squared();
                if len2 < 1e-24 {
                    return (p - start).norm();
                }
                let t = ((p - start).dot(&d) / len2).clamp(0.0, 1.0);
                (p - (start + t * d)).norm()
            }
            EdgeCurve::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => {
                let to_p = p - center;
                let theta = to_p.y.atan2(to_p.x);
                if angle_param(*start_angle, *sweep, theta).is_some() {
                    (to_p.norm() - radius).abs()
                } else {
                    let ds = (p - self.start()).norm();
                    let de = (p - self.end()).norm();
                    ds.min(de)
                }
            }
        }
    }

    /// Find the curve parameter of a point known to lie on (or near) the
    /// curve, or `None` if it is farther than `tol` from the curve.
    pub fn param_of_point(&self, p: Point2, tol: f64) -> Option<f64> {
        match self {
            EdgeCurve::Line { start, end } => {
                let d = end - start;
                let len2 = d.norm_squared();
                if len2 < 1e-24 {
                    return None;
                }
                let t = ((p - start).dot(&d) / len2).clamp(0.0, 1.0);
                ((p - (start + t * d)).norm() <= tol).then_some(t)
            }
            EdgeCurve::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => {
                let to_p = p - center;
                if (to_p.norm() - radius).abs() > tol {
                    return None;
                }
                let theta = to_p.y.atan2(to_p.x);
                let angular_tol = if *radius > tol { tol / radius } else { ANGLE_EPS };
                angle_param_with_tol(*start_angle, *sweep, theta, angular_tol)
            }
        }
    }

    /// Split the curve at the given parameters, returning the pieces in
    /// order. Parameters are sorted and deduplicated; values at (or
    /// beyond) the ends are ignored.
    pub fn split_at(&self, params: &[f64]) -> Vec<EdgeCurve> {
        let mut ts: Vec<f64> = params
            .iter()
            .copied()
            .filter(|t| *t > 1e-9 && *t < 1.0 - 1e-9)
            .collect();
        ts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        ts.dedup_by(|a, b| (*a - *b).abs() < 1e-9);

        if ts.is_empty() {
            return vec![self.clone()];
        }

        let mut pieces = Vec::with_capacity(ts.len() + 1);
        let mut prev = 0.0;
        for t in ts.iter().chain(std::iter::once(&1.0)) {
            pieces.push(self.sub_curve(prev, *t));
            prev = *t;
        }
        pieces
    }

    /// The portion of the curve between parameters `t0 < t1`.
    fn sub_curve(&self, t0: f64, t1: f64) -> EdgeCurve {
        match self {
            EdgeCurve::Line { .. } => EdgeCurve::Line {
                start: self.point_at(t0),
                end: self.point_at(t1),
            },
            EdgeCurve::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => EdgeCurve::Arc {
                center: *center,
                radius: *radius,
                start_angle: start_angle + t0 * sweep,
                sweep: (t1 - t0) * sweep,
            },
        }
    }

    /// Number of times a ray cast in +x from `p` crosses this curve.
    ///
    /// Uses the half-open vertex rule (`y > p.y` strictly on one side)
    /// so shared loop vertices are never counted twice. Arcs are handled
    /// exactly by splitting them into y-monotone pieces at the circle's
    /// top/bottom extremes.
    pub fn ray_crossings(&self, p: Point2) -> usize {
        match self {
            EdgeCurve::Line { start, end } => {
                if (start.y > p.y) != (end.y > p.y) {
                    let t = (p.y - start.y) / (end.y - start.y);
                    let x = start.x + t * (end.x - start.x);
                    usize::from(x > p.x)
                } else {
                    0
                }
            }
            EdgeCurve::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => {
                let (lo, hi) = if *sweep >= 0.0 {
                    (*start_angle, start_angle + sweep)
                } else {
                    (start_angle + sweep, *start_angle)
                };

                // Breakpoints at θ = π/2 + kπ (sin extrema) inside the span.
                let mut breaks = vec![lo];
                let mut k = ((lo - FRAC_PI_2) / PI).floor() as i64 + 1;
                loop {
                    let theta = FRAC_PI_2 + (k as f64) * PI;
                    if theta >= hi {
                        break;
                    }
                    if theta > lo {
                        breaks.push(theta);
                    }
                    k += 1;
                }
                breaks.push(hi);

                let mut count = 0;
                for w in breaks.windows(2) {
                    let (t0, t1) = (w[0], w[1]);
                    if t1 - t0 < 1e-12 {
                        continue;
                    }
                    let y0 = center.y + radius * t0.sin();
                    let y1 = center.y + radius * t1.sin();
                    if (y0 > p.y) != (y1 > p.y) {
                        let dy = p.y - center.y;
                        let dx = (radius * radius - dy * dy).max(0.0).sqrt();
                        let mid = 0.5 * (t0 + t1);
                        let x = if mid.cos() >= 0.0 {
                            center.x + dx
                        } else {
                            center.x - dx
                        };
                        if x > p.x {
                            count += 1;
                        }
                    }
                }
                count
            }
        }
    }
}

/// Point on a circle at the given angle.
fn point_on_circle(center: Point2, radius: f64, angle: f64) -> Point2 {
    let (sin_a, cos_a) = angle.sin_cos();
    Point2::new(center.x + radius * cos_a, center.y + radius * sin_a)
}

/// Parameter of `theta` on an arc span, or `None` if outside the sweep.
fn angle_param(start_angle: f64, sweep: f64, theta: f64) -> Option<f64> {
    angle_param_with_tol(start_angle, sweep, theta, ANGLE_EPS)
}

fn angle_param_with_tol(start_angle: f64, sweep: f64, theta: f64, tol: f64) -> Option<f64> {
    let span = sweep.abs();
    let delta = if sweep >= 0.0 {
        (theta - start_angle).rem_euclid(TAU)
    } else {
        (start_angle - theta).rem_euclid(TAU)
    };
    if delta <= span + tol {
        Some((delta / span).min(1.0))
    } else if (TAU - delta) <= tol {
        // Just before the start point, wrapped around.
        Some(0.0)
    } else {
        None
    }
}
