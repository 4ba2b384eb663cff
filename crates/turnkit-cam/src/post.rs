//! Gcode generation hook.
//!
//! The turning core guarantees a non-empty, correctly classified
//! segment sequence and hands it to a generator behind this trait.
//! Actual machine-motion emission is a downstream concern; the in-tree
//! [`NullGenerator`] is a deliberate no-op stub.

use serde::{Deserialize, Serialize};

use crate::{PartOutline, SpindleDirection, TurnParameters};

/// A machine motion command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MotionCommand {
    /// Rapid move to a position.
    Rapid {
        /// Target position [x, y, z] in mm.
        to: [f64; 3],
    },
    /// Linear cutting move.
    Linear {
        /// Target position [x, y, z] in mm.
        to: [f64; 3],
        /// Feed rate in mm/min.
        feed: f64,
    },
    /// Circular cutting move.
    Arc {
        /// Target position [x, y, z] in mm.
        to: [f64; 3],
        /// Arc center [x, y, z] in mm.
        center: [f64; 3],
        /// Counter-clockwise direction.
        ccw: bool,
        /// Feed rate in mm/min.
        feed: f64,
    },
    /// Spindle control.
    Spindle {
        /// Spindle speed in RPM.
        rpm: f64,
        /// Rotation direction.
        dir: SpindleDirection,
    },
}

/// Converts an extracted outline into machine motion commands.
pub trait GcodeGenerator {
    /// Generate motion commands for the outline.
    fn generate(&self, params: &TurnParameters, outline: &PartOutline) -> Vec<MotionCommand>;
}

/// No-op generator: consumes the outline and emits nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGenerator;

impl GcodeGenerator for NullGenerator {
    fn generate(&self, _params: &TurnParameters, _outline: &PartOutline) -> Vec<MotionCommand> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_generator_emits_nothing() {
        let outline = PartOutline {
            segments: Vec::new(),
            edges: Vec::new(),
        };
        let commands = NullGenerator.generate(&TurnParameters::default(), &outline);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_motion_command_serde() {
        let command = MotionCommand::Arc {
            to: [1.0, 0.0, 2.0],
            center: [0.0, 0.0, 2.0],
            ccw: true,
            feed: 120.0,
        };
        let json = serde_json::to_string(&command).unwrap();
        assert!(json.contains("\"Arc\""));
        let parsed: MotionCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(parsed, MotionCommand::Arc { ccw: true, .. }));
    }
}
