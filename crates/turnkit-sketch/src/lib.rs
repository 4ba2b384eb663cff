#![warn(missing_docs)]

//! Lathe profiles and revolved part models for the turnkit CAM kernel.
//!
//! A part on a lathe is a solid of revolution: a closed 2D profile in
//! the axial half-plane (z along the spindle, r ≥ 0 radial) swept
//! around the spindle axis. [`RevolvedSolid`] implements the
//! [`Sectionable`](turnkit_geom::Sectionable) kernel contract by
//! cross-sectioning through the axis, which is exactly the view a
//! turning operation works in.
//!
//! # Example
//!
//! ```
//! use turnkit_sketch::RevolvedSolid;
//!
//! // A 80 mm long bar of radius 20 mm starting at z = 0.
//! let part = RevolvedSolid::cylinder(20.0, 0.0, 80.0).unwrap();
//! ```

mod profile;
mod solid;

pub use profile::{LatheProfile, ProfileSegment};
pub use solid::RevolvedSolid;

use thiserror::Error;

/// Errors from lathe profile construction.
#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    /// Profile has no segments.
    #[error("profile has no segments")]
    EmptyProfile,

    /// A segment is degenerate (zero length).
    #[error("degenerate segment at index {0}")]
    DegenerateSegment(usize),

    /// The profile is not closed (gap between consecutive segments).
    #[error("profile is not closed: gap of {0:.6} mm")]
    NotClosed(f64),

    /// The profile dips below the spindle axis.
    #[error("profile reaches negative radius {0:.6} mm")]
    NegativeRadius(f64),
}
