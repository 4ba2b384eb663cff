//! The turning operation and its per-job context.

use tracing::{debug_span, info};
use turnkit_geom::Sectionable;

use crate::{
    build_silhouette, extract_outline, GcodeGenerator, MotionCommand, PartOutline, Result,
    StockEnvelope, TurnParameters,
};

/// Per-job context for turning executions.
///
/// Everything an execution reads from its surroundings travels through
/// this struct; operations keep no document-level or static state.
pub struct TurnJob<'a> {
    /// Bounding box of the raw stock.
    pub stock: StockEnvelope,
    /// The part model, behind the narrow section-kernel contract.
    pub model: &'a dyn Sectionable,
}

impl<'a> TurnJob<'a> {
    /// Create a job context.
    pub fn new(stock: StockEnvelope, model: &'a dyn Sectionable) -> Self {
        Self { stock, model }
    }
}

/// A turning profile operation.
///
/// Holds the parameter snapshot for one execution; `execute` runs the
/// silhouette builder and the outline extractor to completion on the
/// calling thread. Each execution owns its silhouette plane and outline
/// exclusively, so concurrent executions over the same job need no
/// locking.
#[derive(Debug, Clone, Default)]
pub struct TurnProfile {
    params: TurnParameters,
}

impl TurnProfile {
    /// Create an operation from a parameter snapshot.
    pub fn new(params: TurnParameters) -> Self {
        Self { params }
    }

    /// Set the axial start/end offsets.
    pub fn with_offsets(mut self, start: f64, end: f64) -> Self {
        self.params.start_offset = start;
        self.params.end_offset = end;
        self
    }

    /// Set the diameter limits.
    pub fn with_diameters(mut self, min: f64, max: f64) -> Self {
        self.params.min_diameter = min;
        self.params.max_diameter = max;
        self
    }

    /// Set the radial stepover.
    pub fn with_step_over(mut self, step_over: f64) -> Self {
        self.params.step_over = step_over;
        self
    }

    /// The parameter snapshot of this operation.
    pub fn params(&self) -> &TurnParameters {
        &self.params
    }

    /// Execute the operation: build the stock silhouette, then extract
    /// the part outline. All failures are execution-fatal; no partial
    /// outline is returned.
    pub fn execute(&self, job: &TurnJob<'_>) -> Result<PartOutline> {
        let span = debug_span!("turn_profile");
        let _guard = span.enter();

        let silhouette = build_silhouette(&job.stock, &self.params)?;
        let outline = extract_outline(job.model, &silhouette)?;

        info!(
            segments = outline.segments.len(),
            arcs = outline.segments.iter().filter(|s| s.is_arc()).count(),
            "outline extracted"
        );
        Ok(outline)
    }

    /// Run the out-of-scope gcode hook on an extracted outline.
    pub fn generate_gcode(
        &self,
        outline: &PartOutline,
        generator: &dyn GcodeGenerator,
    ) -> Vec<MotionCommand> {
        generator.generate(&self.params, outline)
    }
}
