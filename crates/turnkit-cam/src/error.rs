//! Error taxonomy for turning executions.
//!
//! Every failure is execution-fatal: no partial outline is ever
//! returned, and the variant names the stage that failed so the
//! calling orchestrator can diagnose without replaying geometry.

use thiserror::Error;
use turnkit_booleans::BooleanError;
use turnkit_geom::GeomError;

/// Errors from a turning operation execution.
#[derive(Debug, Error)]
pub enum TurnError {
    /// Silhouette construction: the parameters produce a zero or
    /// negative area stock plane. Detected before any geometry-kernel
    /// call.
    #[error(
        "degenerate stock silhouette: length {length:.3} mm, width {width:.3} mm"
    )]
    DegenerateSilhouette {
        /// Computed silhouette length (axial).
        length: f64,
        /// Computed silhouette width (radial).
        width: f64,
    },

    /// Sectioning: the part has no cross-section on the cutting plane.
    #[error("part has no cross-section on the cutting plane")]
    EmptySection,

    /// Subtraction: the part covers the whole stock plane, leaving no
    /// material boundary to machine.
    #[error("boolean subtraction left no material boundary")]
    EmptyPathArea,

    /// Classification: filtering retained no edges on the part surface.
    #[error("no boundary edges lie on the part surface")]
    NoPartEdges,

    /// Sectioning: failure inside the geometry kernel.
    #[error("geometry kernel: {0}")]
    Geometry(#[from] GeomError),

    /// Subtraction: failure in the planar boolean stage.
    #[error("boolean subtraction: {0}")]
    Boolean(#[from] BooleanError),
}

/// Result type for turning operations.
pub type Result<T> = std::result::Result<T, TurnError>;
