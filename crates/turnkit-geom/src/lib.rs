#![warn(missing_docs)]

//! Planar machining geometry for the turnkit lathe CAM kernel.
//!
//! Provides the 2D geometry a turning operation works with: cutting
//! planes, line/arc edge curves in plane coordinates, closed planar
//! regions with tolerance-based containment, and the [`Sectionable`]
//! contract a part-model geometry provider must implement.
//!
//! All linear quantities are millimetres, all angles radians.

mod curve;
mod plane;
mod region;

pub use curve::{CurveKind, EdgeCurve};
pub use plane::Plane;
pub use region::{Containment, PaddedRegion, Region};

use thiserror::Error;
use turnkit_math::Aabb3;

/// Errors from planar geometry construction and sectioning.
#[derive(Debug, Clone, Error)]
pub enum GeomError {
    /// A region loop is not closed (gap between consecutive edges).
    #[error("region loop is not closed: gap of {0:.6} mm")]
    NotClosed(f64),

    /// An edge is degenerate (zero length or zero radius).
    #[error("degenerate edge at index {0}")]
    DegenerateEdge(usize),

    /// The section plane does not contain the spindle axis.
    #[error("section plane misses the spindle axis by {0:.6} mm")]
    PlaneOffAxis(f64),

    /// The solid has no cross-section on the requested plane.
    #[error("section produced no cross-section")]
    EmptySection,

    /// A geometry provider handed over a curve type the planar kernel
    /// cannot represent (e.g. a spline). Providers must convert or fail;
    /// the turning core never approximates silently.
    #[error("unsupported curve type: {0}")]
    UnsupportedCurve(String),
}

/// The narrow geometry-kernel contract a part model must satisfy.
///
/// Keeping this surface small makes the turning core testable against a
/// lightweight in-memory provider (see `turnkit-sketch`) or a mock,
/// instead of a full CAD kernel.
pub trait Sectionable {
    /// Axis-aligned bounding box of the solid.
    fn aabb(&self) -> Aabb3;

    /// Cross-section of the solid on `plane`, shifted by `height` along
    /// the plane normal, expressed as a closed planar [`Region`] in the
    /// plane's own coordinates.
    fn section(&self, plane: &Plane, height: f64) -> Result<Region, GeomError>;
}
