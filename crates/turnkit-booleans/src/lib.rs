#![warn(missing_docs)]

//! Planar boolean subtraction for the turnkit lathe CAM kernel.
//!
//! Computes the boundary edge set of `minuend − subtrahend` for two
//! coplanar [`Region`](turnkit_geom::Region)s:
//!
//! 1. Intersect every edge of one region with every edge of the other
//!    ([`intersect`]).
//! 2. Split edges at the intersection parameters ([`split`]).
//! 3. Classify each sub-edge by its midpoint and keep the pieces that
//!    bound the difference ([`classify`], [`subtract`]).
//!
//! The result is deliberately an UNORDERED edge set in deterministic
//! enumeration order; chain assembly is a downstream concern.

mod api;
pub mod classify;
pub mod intersect;
pub mod split;

pub use api::subtract;

use thiserror::Error;

/// Errors from planar boolean operations.
#[derive(Debug, Clone, Error)]
pub enum BooleanError {
    /// The two regions do not share a plane frame.
    #[error("regions lie on different planes")]
    PlaneMismatch,
}
