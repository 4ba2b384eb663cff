#![warn(missing_docs)]

//! High-level facade for the turnkit lathe CAM kernel.
//!
//! Re-exports the types a consumer needs to go from a part model and a
//! stock envelope to a classified turning outline, plus a one-call
//! convenience entry point.
//!
//! # Example
//!
//! ```
//! use turnkit::{profile_outline, RevolvedSolid, StockEnvelope, TurnParameters};
//!
//! let stock = StockEnvelope::from_radius(25.0, 0.0, 100.0);
//! let part = RevolvedSolid::cylinder(20.0, 0.0, 80.0).unwrap();
//! let params = TurnParameters {
//!     start_offset: 5.0,
//!     end_offset: 5.0,
//!     ..TurnParameters::default()
//! };
//!
//! let outline = profile_outline(&part, stock, params).unwrap();
//! assert_eq!(outline.segments.len(), 3);
//! ```

pub use turnkit_booleans::subtract;
pub use turnkit_cam::{
    build_silhouette, chain_segments, extract_outline, GcodeGenerator, MotionCommand,
    NullGenerator, PartOutline, PathSegment, Result, SegmentChain, SilhouettePlane,
    SpindleDirection, StockEnvelope, TurnError, TurnJob, TurnParameters, TurnProfile,
};
pub use turnkit_geom::{
    Containment, CurveKind, EdgeCurve, GeomError, PaddedRegion, Plane, Region, Sectionable,
};
pub use turnkit_math::{Aabb3, Dir3, Point2, Point3, Tolerance, Vec2, Vec3};
pub use turnkit_sketch::{LatheProfile, ProfileError, ProfileSegment, RevolvedSolid};

/// Extract the turning outline of `model` from `stock` with `params`.
///
/// Convenience wrapper over [`TurnProfile::execute`].
pub fn profile_outline(
    model: &dyn Sectionable,
    stock: StockEnvelope,
    params: TurnParameters,
) -> Result<PartOutline> {
    let job = TurnJob::new(stock, model);
    TurnProfile::new(params).execute(&job)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_outline_roundtrip() {
        let stock = StockEnvelope::from_radius(25.0, 0.0, 100.0);
        let part = RevolvedSolid::frustum(20.0, 10.0, 0.0, 90.0).unwrap();
        let params = TurnParameters {
            start_offset: 2.0,
            end_offset: 2.0,
            ..TurnParameters::default()
        };
        let outline = profile_outline(&part, stock, params).unwrap();
        assert!(!outline.segments.is_empty());

        // Chaining the unordered output produces connected runs.
        let chains = chain_segments(&outline.segments, 1e-6);
        assert!(!chains.is_empty());
        for chain in &chains {
            for pair in chain.segments.windows(2) {
                assert!((pair[1].start - pair[0].end).norm() < 1e-6);
            }
        }
    }
}
