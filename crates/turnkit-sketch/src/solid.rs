//! Solids of revolution and their axis cross-sections.

use turnkit_geom::{EdgeCurve, GeomError, Plane, Region, Sectionable};
use turnkit_math::{Aabb3, Point2, Point3, Vec3};

use crate::{LatheProfile, ProfileError, ProfileSegment};

/// Distance within which a profile point counts as on the spindle axis.
const AXIS_TOL: f64 = 1e-6;

/// A solid of revolution: a [`LatheProfile`] swept around the +Z
/// spindle axis through the world origin.
///
/// This is the in-memory part model of the kernel. It implements
/// [`Sectionable`] by cross-sectioning through the axis: the profile
/// appears once on each side of the axis, joined where it touches the
/// axis, which is the exact planar view a turning operation machines.
#[derive(Debug, Clone)]
pub struct RevolvedSolid {
    profile: LatheProfile,
}

impl RevolvedSolid {
    /// Wrap a profile as a solid of revolution.
    pub fn new(profile: LatheProfile) -> Self {
        Self { profile }
    }

    /// A solid cylinder (bar) of the given radius spanning `z0..z1`.
    pub fn cylinder(radius: f64, z0: f64, z1: f64) -> Result<Self, ProfileError> {
        LatheProfile::cylinder(radius, z0, z1).map(Self::new)
    }

    /// A cone frustum from radius `r0` at `z0` to `r1` at `z1`.
    pub fn frustum(r0: f64, r1: f64, z0: f64, z1: f64) -> Result<Self, ProfileError> {
        LatheProfile::frustum(r0, r1, z0, z1).map(Self::new)
    }

    /// A ball of the given radius centered at `center_z` on the axis.
    pub fn ball(radius: f64, center_z: f64) -> Result<Self, ProfileError> {
        LatheProfile::ball(radius, center_z).map(Self::new)
    }

    /// The generating profile.
    pub fn profile(&self) -> &LatheProfile {
        &self.profile
    }
}

impl Sectionable for RevolvedSolid {
    fn aabb(&self) -> Aabb3 {
        let (z0, z1) = self.profile.z_range();
        let r = self.profile.max_radius();
        Aabb3::new(Point3::new(-r, -r, z0), Point3::new(r, r, z1))
    }

    fn section(&self, plane: &Plane, height: f64) -> Result<Region, GeomError> {
        let plane = plane.offset(height);

        // The cross-section of a revolved solid is only well-defined on
        // a plane containing the spindle axis.
        let d0 = plane.signed_distance(&Point3::origin());
        let d1 = plane.signed_distance(&Point3::new(0.0, 0.0, 1.0));
        let off = d0.abs().max(d1.abs());
        if off > AXIS_TOL {
            return Err(GeomError::PlaneOffAxis(off));
        }

        // In-plane radial direction, perpendicular to the axis.
        let radial = plane.normal_dir.as_ref().cross(&Vec3::z());

        let map_point = |q: Point2, mirror: bool| -> Point2 {
            let mut r = if q.y.abs() <= AXIS_TOL { 0.0 } else { q.y };
            if mirror {
                r = -r;
            }
            let p3 = Point3::new(r * radial.x, r * radial.y, q.x);
            plane.project(&p3)
        };

        // Whether the (z, r) -> (u, v) map reverses orientation.
        let flip = {
            let zx = plane.x_dir.as_ref().z;
            let zy = plane.y_dir.as_ref().z;
            let wx = radial.dot(plane.x_dir.as_ref());
            let wy = radial.dot(plane.y_dir.as_ref());
            (zx * wy - zy * wx) < 0.0
        };

        let map_segment = |seg: &ProfileSegment, mirror: bool| -> EdgeCurve {
            match seg {
                ProfileSegment::Line { start, end } => {
                    EdgeCurve::line(map_point(*start, mirror), map_point(*end, mirror))
                }
                ProfileSegment::Arc {
                    start,
                    end,
                    center,
                    ccw,
                } => EdgeCurve::arc_from_endpoints(
                    map_point(*center, mirror),
                    map_point(*start, mirror),
                    map_point(*end, mirror),
                    *ccw ^ flip ^ mirror,
                ),
            }
        };

        let mirrored_chain = |run: &[&ProfileSegment]| -> Vec<EdgeCurve> {
            run.iter()
                .rev()
                .map(|&seg| map_segment(seg, true).reversed())
                .collect()
        };

        let segments = self.profile.segments();
        let axis_flags: Vec<bool> = segments.iter().map(|s| s.is_on_axis(AXIS_TOL)).collect();

        let mut loops = Vec::new();
        if axis_flags.iter().any(|f| *f) {
            // The profile rests on the axis: material runs between axis
            // edges become lobes, each closed across the axis by its
            // mirror image.
            let n = segments.len();
            let first_axis = axis_flags
                .iter()
                .position(|f| *f)
                .unwrap_or_default();

            let mut runs: Vec<Vec<&ProfileSegment>> = Vec::new();
            let mut current: Vec<&ProfileSegment> = Vec::new();
            for k in 1..=n {
                let i = (first_axis + k) % n;
                if axis_flags[i] {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                } else {
                    current.push(&segments[i]);
                }
            }
            if !current.is_empty() {
                runs.push(current);
            }
            if runs.is_empty() {
                return Err(GeomError::EmptySection);
            }

            for run in runs {
                let mut lp: Vec<EdgeCurve> =
                    run.iter().map(|&seg| map_segment(seg, false)).collect();
                lp.extend(mirrored_chain(&run));
                loops.push(lp);
            }
        } else {
            // The profile floats off the axis (hollow part): one loop on
            // each side of the axis.
            let refs: Vec<&ProfileSegment> = segments.iter().collect();
            loops.push(
                refs.iter()
                    .map(|&seg| map_segment(seg, false))
                    .collect::<Vec<_>>(),
            );
            loops.push(mirrored_chain(&refs));
        }

        Region::from_loops(plane, loops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use turnkit_geom::Containment;

    /// The stock silhouette plane used by a turning operation: origin at
    /// the radial/axial corner, u along −Z, v along +X, normal −Y.
    fn turning_plane(origin_x: f64, origin_z: f64) -> Plane {
        Plane::new(
            Point3::new(origin_x, 0.0, origin_z),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::x(),
        )
    }

    #[test]
    fn test_cylinder_aabb() {
        let part = RevolvedSolid::cylinder(20.0, 0.0, 80.0).unwrap();
        let bb = part.aabb();
        assert_relative_eq!(bb.x_length(), 40.0, epsilon = 1e-12);
        assert_relative_eq!(bb.z_length(), 80.0, epsilon = 1e-12);
        assert_relative_eq!(bb.z_max(), 80.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cylinder_section_known_coordinates() {
        // Stock r=25, z in [0, 100], start offset 5: plane origin at
        // x=-25, z=105. u = 105 - z, v = x + 25.
        let plane = turning_plane(-25.0, 105.0);
        let part = RevolvedSolid::cylinder(20.0, 0.0, 80.0).unwrap();
        let section = part.section(&plane, 0.0).unwrap();

        // Single merged loop across the axis.
        assert_eq!(section.loops.len(), 1);

        // Surface point x=-20 (v=5) in the middle of the bar.
        assert_eq!(
            section.classify_point(Point2::new(65.0, 5.0), 1e-6),
            Containment::OnBoundary
        );
        // On the axis, inside the bar.
        assert_eq!(
            section.classify_point(Point2::new(65.0, 25.0), 1e-6),
            Containment::Inside
        );
        // Mirror side surface x=+20 (v=45).
        assert_eq!(
            section.classify_point(Point2::new(65.0, 45.0), 1e-6),
            Containment::OnBoundary
        );
        // Outside the radius.
        assert_eq!(
            section.classify_point(Point2::new(65.0, 2.0), 1e-6),
            Containment::Outside
        );
        // Beyond the face at z=80 (u=25).
        assert_eq!(
            section.classify_point(Point2::new(20.0, 25.0), 1e-6),
            Containment::Outside
        );
    }

    #[test]
    fn test_ball_section_is_circular() {
        let plane = turning_plane(-25.0, 105.0);
        let part = RevolvedSolid::ball(10.0, 50.0).unwrap();
        let section = part.section(&plane, 0.0).unwrap();

        assert_eq!(section.loops.len(), 1);
        // Every boundary edge is an arc of radius 10 centered on the axis.
        for edge in section.edges() {
            assert!(edge.arc_sweep().is_some());
            let center = edge.arc_center().unwrap();
            assert_relative_eq!(center.y, 25.0, epsilon = 1e-9); // axis v
            assert_relative_eq!(center.x, 55.0, epsilon = 1e-9); // u of z=50
        }
        // Center of the ball is inside.
        assert_eq!(
            section.classify_point(Point2::new(55.0, 25.0), 1e-6),
            Containment::Inside
        );
        // 10 mm off-center along u is on the boundary.
        assert_eq!(
            section.classify_point(Point2::new(45.0, 25.0), 1e-6),
            Containment::OnBoundary
        );
    }

    #[test]
    fn test_hollow_profile_two_loops() {
        // A tube: rectangle profile from r=10 to r=20, never touching
        // the axis.
        let profile = LatheProfile::from_segments(vec![
            ProfileSegment::Line {
                start: Point2::new(0.0, 10.0),
                end: Point2::new(50.0, 10.0),
            },
            ProfileSegment::Line {
                start: Point2::new(50.0, 10.0),
                end: Point2::new(50.0, 20.0),
            },
            ProfileSegment::Line {
                start: Point2::new(50.0, 20.0),
                end: Point2::new(0.0, 20.0),
            },
            ProfileSegment::Line {
                start: Point2::new(0.0, 20.0),
                end: Point2::new(0.0, 10.0),
            },
        ])
        .unwrap();
        let part = RevolvedSolid::new(profile);

        let plane = turning_plane(-25.0, 105.0);
        let section = part.section(&plane, 0.0).unwrap();
        assert_eq!(section.loops.len(), 2);

        // The bore is not part of the section.
        assert_eq!(
            section.classify_point(Point2::new(80.0, 25.0), 1e-6),
            Containment::Outside
        );
        // Wall material on both sides: x=-15 (v=10) and x=+15 (v=40).
        assert_eq!(
            section.classify_point(Point2::new(80.0, 10.0), 1e-6),
            Containment::Inside
        );
        assert_eq!(
            section.classify_point(Point2::new(80.0, 40.0), 1e-6),
            Containment::Inside
        );
    }

    #[test]
    fn test_section_rejects_off_axis_plane() {
        let part = RevolvedSolid::cylinder(20.0, 0.0, 80.0).unwrap();
        let plane = turning_plane(-25.0, 105.0);
        // Shifting along the normal moves the plane off the axis.
        let result = part.section(&plane, 3.0);
        assert!(matches!(result, Err(GeomError::PlaneOffAxis(_))));
    }

    #[test]
    fn test_section_is_deterministic() {
        let plane = turning_plane(-25.0, 105.0);
        let part = RevolvedSolid::frustum(25.0, 10.0, 0.0, 100.0).unwrap();
        let a = part.section(&plane, 0.0).unwrap();
        let b = part.section(&plane, 0.0).unwrap();
        assert_eq!(a.loops.len(), b.loops.len());
        for (la, lb) in a.loops.iter().zip(&b.loops) {
            assert_eq!(la.len(), lb.len());
            for (ea, eb) in la.iter().zip(lb) {
                assert!((ea.start() - eb.start()).norm() < 1e-12);
                assert!((ea.end() - eb.end()).norm() < 1e-12);
            }
        }
    }
}
