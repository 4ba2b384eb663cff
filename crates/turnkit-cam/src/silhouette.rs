//! Stock silhouette plane construction.

use tracing::debug;
use turnkit_geom::{Plane, Region};
use turnkit_math::{Point3, Vec3};

use crate::{Result, StockEnvelope, TurnError, TurnParameters};

/// The rectangular stock cross-section a turning operation machines in.
///
/// The plane's normal is fixed to −Y: turning profiles live in the X-Z
/// plane around the Z spindle axis. In plane coordinates, `u` runs
/// along −Z from the offset stock top (axial, `0..length`) and `v`
/// along +X from the inner diameter limit (radial, `0..width`).
#[derive(Debug, Clone)]
pub struct SilhouettePlane {
    /// The cutting plane with its in-plane frame.
    pub plane: Plane,
    /// Axial extent: stock Z length plus both offsets.
    pub length: f64,
    /// Radial extent: half the stock X extent adjusted by the diameter
    /// limits.
    pub width: f64,
}

impl SilhouettePlane {
    /// Materialize the silhouette as a planar region for subtraction.
    pub fn face(&self) -> Region {
        Region::rectangle(self.plane.clone(), self.length, self.width)
    }
}

/// Build the stock silhouette plane for one execution.
///
/// The plane is positioned at the stock's top Z face offset by
/// `start_offset`, with
///
/// - `length = stock Z extent + end_offset + start_offset`
/// - `width  = stock X extent / 2 − min_diameter + max_diameter`
///
/// A zero or negative dimension is a configuration error and is
/// rejected before any geometry-kernel call.
pub fn build_silhouette(
    stock: &StockEnvelope,
    params: &TurnParameters,
) -> Result<SilhouettePlane> {
    let length = stock.z_length() + params.end_offset + params.start_offset;
    let width = stock.x_length() / 2.0 - params.min_diameter + params.max_diameter;

    if length <= 0.0 || width <= 0.0 {
        return Err(TurnError::DegenerateSilhouette { length, width });
    }

    let origin = Point3::new(
        -params.min_diameter - width,
        0.0,
        stock.z_max() + params.start_offset,
    );
    let plane = Plane::new(origin, Vec3::new(0.0, 0.0, -1.0), Vec3::x());

    debug!(length, width, ?origin, "stock silhouette");
    Ok(SilhouettePlane {
        plane,
        length,
        width,
    })
}
