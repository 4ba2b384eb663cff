#![warn(missing_docs)]

//! Turning operation core for turnkit.
//!
//! This crate implements the stock-minus-part silhouette extraction a
//! lathe operation is built on: a rectangular stock silhouette plane is
//! derived from the stock envelope, the part model is cross-sectioned
//! onto it, the section is boolean-subtracted from the stock rectangle,
//! and the surviving boundary edges that lie on the part surface are
//! classified into typed path segments (straight, or arc with signed
//! bulge).
//!
//! # Example
//!
//! ```
//! use turnkit_cam::{StockEnvelope, TurnJob, TurnParameters, TurnProfile};
//! use turnkit_sketch::RevolvedSolid;
//!
//! // 50 mm diameter stock, 100 mm long, holding a 40 mm diameter bar.
//! let stock = StockEnvelope::from_radius(25.0, 0.0, 100.0);
//! let part = RevolvedSolid::cylinder(20.0, 0.0, 80.0).unwrap();
//!
//! let params = TurnParameters {
//!     start_offset: 5.0,
//!     end_offset: 5.0,
//!     ..TurnParameters::default()
//! };
//!
//! let job = TurnJob::new(stock, &part);
//! let outline = TurnProfile::new(params).execute(&job).unwrap();
//! assert!(!outline.segments.is_empty());
//! ```

mod chain;
mod error;
mod operation;
mod outline;
mod post;
mod silhouette;

pub use chain::{chain_segments, SegmentChain};
pub use error::{Result, TurnError};
pub use operation::{TurnJob, TurnProfile};
pub use outline::{extract_outline, PartOutline, PathSegment};
pub use post::{GcodeGenerator, MotionCommand, NullGenerator};
pub use silhouette::{build_silhouette, SilhouettePlane};

use serde::{Deserialize, Serialize};
use turnkit_math::{Aabb3, Point3};

/// Spindle rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpindleDirection {
    /// Clockwise.
    Cw,
    /// Counter-clockwise.
    Ccw,
}

/// Configuration snapshot for one turning execution.
///
/// Captured once per execution from the persisted operation settings
/// and immutable while the execution runs. Lengths are millimetres,
/// feeds millimetres per minute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnParameters {
    /// Smallest diameter the operation may cut to.
    pub min_diameter: f64,
    /// Extra diameter above the stock surface to consider.
    pub max_diameter: f64,
    /// Axial clearance added before the stock face (spindle side).
    pub start_offset: f64,
    /// Axial clearance added past the stock end.
    pub end_offset: f64,
    /// Radial stepover between roughing passes.
    pub step_over: f64,
    /// Allow the tool to cut grooves (plunge radially).
    pub allow_grooving: bool,
    /// Allow facing cuts across the part ends.
    pub allow_facing: bool,
    /// Number of finishing passes.
    pub finish_passes: u32,
    /// Axial feed rate.
    pub axial_feed: f64,
    /// Axial rapid rate.
    pub axial_rapid: f64,
    /// Spindle direction.
    pub direction: SpindleDirection,
}

impl Default for TurnParameters {
    fn default() -> Self {
        Self {
            min_diameter: 0.0,
            max_diameter: 0.0,
            start_offset: 0.0,
            end_offset: 0.0,
            step_over: 1.0,
            allow_grooving: false,
            allow_facing: true,
            finish_passes: 2,
            axial_feed: 0.0,
            axial_rapid: 0.0,
            direction: SpindleDirection::Cw,
        }
    }
}

/// Axis-aligned bounding box of the raw stock material.
///
/// Owned by the job and read-only for the operation; only the extents
/// the silhouette construction needs are exposed.
#[derive(Debug, Clone, Copy)]
pub struct StockEnvelope {
    bounds: Aabb3,
}

impl StockEnvelope {
    /// Wrap a stock bounding box.
    pub fn new(bounds: Aabb3) -> Self {
        Self { bounds }
    }

    /// Stock for a cylindrical blank of `radius` spanning `z0..z1` on
    /// the spindle axis.
    pub fn from_radius(radius: f64, z0: f64, z1: f64) -> Self {
        Self::new(Aabb3::new(
            Point3::new(-radius, -radius, z0),
            Point3::new(radius, radius, z1),
        ))
    }

    /// The underlying bounding box.
    pub fn bounds(&self) -> &Aabb3 {
        &self.bounds
    }

    /// Top of the stock along the spindle axis.
    pub fn z_max(&self) -> f64 {
        self.bounds.z_max()
    }

    /// Stock extent along the spindle axis.
    pub fn z_length(&self) -> f64 {
        self.bounds.z_length()
    }

    /// Stock extent across the spindle axis.
    pub fn x_length(&self) -> f64 {
        self.bounds.x_length()
    }
}
