//! Pairwise curve-curve intersection in plane coordinates.

use turnkit_geom::EdgeCurve;

/// Positional tolerance for matching intersection points onto curves.
const POINT_TOL: f64 = 1e-6;

/// Parameter slack beyond the [0, 1] range.
const PARAM_EPS: f64 = 1e-9;

/// Intersection parameters `(t_on_a, t_on_b)` of two bounded curves.
///
/// Coincident/overlapping supporting curves (collinear lines, identical
/// circles) report no intersections; overlap is resolved by midpoint
/// classification downstream.
pub fn curve_intersections(a: &EdgeCurve, b: &EdgeCurve) -> Vec<(f64, f64)> {
    match (a, b) {
        (EdgeCurve::Line { .. }, EdgeCurve::Line { .. }) => line_line(a, b),
        (EdgeCurve::Line { .. }, EdgeCurve::Arc { .. }) => line_arc(a, b),
        (EdgeCurve::Arc { .. }, EdgeCurve::Line { .. }) => line_arc(b, a)
            .into_iter()
            .map(|(tb, ta)| (ta, tb))
            .collect(),
        (EdgeCurve::Arc { .. }, EdgeCurve::Arc { .. }) => arc_arc(a, b),
    }
}

fn line_line(a: &EdgeCurve, b: &EdgeCurve) -> Vec<(f64, f64)> {
    let (s0, e0) = (a.start(), a.end());
    let (s1, e1) = (b.start(), b.end());
    let d0 = e0 - s0;
    let d1 = e1 - s1;

    let denom = d0.x * d1.y - d0.y * d1.x;
    if denom.abs() < 1e-12 {
        return Vec::new(); // parallel or collinear
    }

    let w = s1 - s0;
    let t = (w.x * d1.y - w.y * d1.x) / denom;
    let s = (w.x * d0.y - w.y * d0.x) / denom;

    if in_unit_range(t) && in_unit_range(s) {
        vec![(t.clamp(0.0, 1.0), s.clamp(0.0, 1.0))]
    } else {
        Vec::new()
    }
}

fn line_arc(line: &EdgeCurve, arc: &EdgeCurve) -> Vec<(f64, f64)> {
    let (center, radius) = match arc {
        EdgeCurve::Arc { center, radius, .. } => (*center, *radius),
        EdgeCurve::Line { .. } => unreachable!("caller dispatches arcs here"),
    };
    let s = line.start();
    let d = line.end() - s;

    // |s + t·d − c|² = r²
    let f = s - center;
    let qa = d.norm_squared();
    let qb = 2.0 * f.dot(&d);
    let qc = f.norm_squared() - radius * radius;

    if qa < 1e-24 {
        return Vec::new();
    }

    let disc = qb * qb - 4.0 * qa * qc;
    if disc < -1e-12 {
        return Vec::new();
    }
    let sqrt_disc = disc.max(0.0).sqrt();

    let mut hits = Vec::new();
    for t in [(-qb - sqrt_disc) / (2.0 * qa), (-qb + sqrt_disc) / (2.0 * qa)] {
        if !in_unit_range(t) {
            continue;
        }
        let p = line.point_at(t.clamp(0.0, 1.0));
        if let Some(u) = arc.param_of_point(p, POINT_TOL) {
            push_unique(&mut hits, (t.clamp(0.0, 1.0), u));
        }
    }
    hits
}

fn arc_arc(a: &EdgeCurve, b: &EdgeCurve) -> Vec<(f64, f64)> {
    let (c0, r0) = match a {
        EdgeCurve::Arc { center, radius, .. } => (*center, *radius),
        EdgeCurve::Line { .. } => unreachable!(),
    };
    let (c1, r1) = match b {
        EdgeCurve::Arc { center, radius, .. } => (*center, *radius),
        EdgeCurve::Line { .. } => unreachable!(),
    };

    let delta = c1 - c0;
    let d = delta.norm();
    if d < 1e-12 {
        return Vec::new(); // concentric (identical circles handled as overlap)
    }
    if d > r0 + r1 + POINT_TOL || d < (r0 - r1).abs() - POINT_TOL {
        return Vec::new();
    }

    // Distance from c0 to the chord between the two circle intersections.
    let along = (d * d + r0 * r0 - r1 * r1) / (2.0 * d);
    let h2 = r0 * r0 - along * along;
    let h = h2.max(0.0).sqrt();

    let dir = delta / d;
    let perp = turnkit_math::Vec2::new(-dir.y, dir.x);
    let base = c0 + along * dir;

    let mut hits = Vec::new();
    for candidate in [base + h * perp, base - h * perp] {
        let (Some(t), Some(u)) = (
            a.param_of_point(candidate, POINT_TOL),
            b.param_of_point(candidate, POINT_TOL),
        ) else {
            continue;
        };
        push_unique(&mut hits, (t, u));
    }
    hits
}

fn in_unit_range(t: f64) -> bool {
    (-PARAM_EPS..=1.0 + PARAM_EPS).contains(&t)
}

fn push_unique(hits: &mut Vec<(f64, f64)>, hit: (f64, f64)) {
    // Tangent contacts produce a double root; keep one.
    if !hits
        .iter()
        .any(|(t, u)| (t - hit.0).abs() < 1e-9 && (u - hit.1).abs() < 1e-9)
    {
        hits.push(hit);
    }
}
