//! Cutting-plane type with an explicit in-plane coordinate frame.

use turnkit_math::{Dir3, Point2, Point3, Vec3};

/// A plane in 3D space with an orthonormal in-plane frame.
///
/// Points on the plane are addressed by `(u, v)` coordinates:
/// `P(u, v) = origin + u * x_dir + v * y_dir`, with
/// `normal_dir = x_dir × y_dir`.
#[derive(Debug, Clone)]
pub struct Plane {
    /// Origin point on the plane.
    pub origin: Point3,
    /// Unit vector along the u direction.
    pub x_dir: Dir3,
    /// Unit vector along the v direction.
    pub y_dir: Dir3,
    /// Unit normal (x_dir × y_dir).
    pub normal_dir: Dir3,
}

impl Plane {
    /// Create a plane from origin and two orthogonal direction vectors.
    /// The vectors do not need to be normalized.
    pub fn new(origin: Point3, x_dir: Vec3, y_dir: Vec3) -> Self {
        let x = Dir3::new_normalize(x_dir);
        let y = Dir3::new_normalize(y_dir);
        let n = Dir3::new_normalize(x_dir.cross(&y_dir));
        Self {
            origin,
            x_dir: x,
            y_dir: y,
            normal_dir: n,
        }
    }

    /// Create a plane from origin and normal. In-plane directions are
    /// chosen arbitrarily.
    pub fn from_normal(origin: Point3, normal: Vec3) -> Self {
        let n = Dir3::new_normalize(normal);
        let arbitrary = if n.as_ref().x.abs() < 0.9 {
            Vec3::x()
        } else {
            Vec3::y()
        };
        let x = Dir3::new_normalize(arbitrary.cross(n.as_ref()));
        let y = Dir3::new_normalize(n.as_ref().cross(x.as_ref()));
        Self {
            origin,
            x_dir: x,
            y_dir: y,
            normal_dir: n,
        }
    }

    /// XY plane at the origin.
    pub fn xy() -> Self {
        Self::new(Point3::origin(), Vec3::x(), Vec3::y())
    }

    /// XZ plane at the origin (normal −Y, the turning profile plane).
    pub fn xz() -> Self {
        Self::new(Point3::origin(), Vec3::x(), Vec3::z())
    }

    /// Project a 3D point onto this plane's (u, v) parameter space.
    pub fn project(&self, p: &Point3) -> Point2 {
        let d = p - self.origin;
        Point2::new(d.dot(self.x_dir.as_ref()), d.dot(self.y_dir.as_ref()))
    }

    /// Map a (u, v) plane coordinate back to 3D.
    pub fn to_3d(&self, p: Point2) -> Point3 {
        self.origin + p.x * self.x_dir.as_ref() + p.y * self.y_dir.as_ref()
    }

    /// Signed distance from a point to this plane.
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        (p - self.origin).dot(self.normal_dir.as_ref())
    }

    /// Shift the plane by `height` along its normal, keeping the frame.
    pub fn offset(&self, height: f64) -> Self {
        Self {
            origin: self.origin + height * self.normal_dir.as_ref(),
            x_dir: self.x_dir,
            y_dir: self.y_dir,
            normal_dir: self.normal_dir,
        }
    }

    /// Check that another plane is the same plane (coincident origin
    /// projection and parallel normal) within `tol`.
    pub fn is_coincident(&self, other: &Plane, tol: f64) -> bool {
        let normals_parallel = self
            .normal_dir
            .as_ref()
            .cross(other.normal_dir.as_ref())
            .norm()
            < tol;
        normals_parallel && self.signed_distance(&other.origin).abs() < tol
    }
}
