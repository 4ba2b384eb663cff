//! Midpoint classification of split edge pieces.
//!
//! After splitting, every piece lies entirely inside, outside, or along
//! the other region's boundary, so a single midpoint sample decides its
//! fate. Pieces on a coincident boundary are dropped from both sides,
//! which makes the difference of two identical regions empty.

use turnkit_geom::{Containment, EdgeCurve, Region};

/// Tolerance of the on-boundary band used for midpoint classification.
pub const CLASSIFY_TOL: f64 = 1e-6;

/// A minuend piece survives when it is strictly outside the subtrahend.
pub fn keep_minuend_piece(piece: &EdgeCurve, subtrahend: &Region) -> bool {
    subtrahend.classify_point(piece.midpoint(), CLASSIFY_TOL) == Containment::Outside
}

/// A subtrahend piece survives (reversed) when it is strictly inside
/// the minuend.
pub fn keep_subtrahend_piece(piece: &EdgeCurve, minuend: &Region) -> bool {
    minuend.classify_point(piece.midpoint(), CLASSIFY_TOL) == Containment::Inside
}
