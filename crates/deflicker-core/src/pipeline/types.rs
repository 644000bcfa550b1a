use std::time::Duration;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug)]
pub enum PipelineStage {
    Discovery,
    Luminance,
    Smoothing,
    Apply,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discovery => write!(f, "Discovering frames"),
            Self::Luminance => write!(f, "Measuring luminance"),
            Self::Smoothing => write!(f, "Smoothing luminance"),
            Self::Apply => write!(f, "Applying brightness"),
        }
    }
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations. Reporting is
/// advisory: it never affects result reassembly or ordering.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (frame count or pass count), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Final accounting for a successful run.
#[derive(Clone, Debug)]
pub struct PipelineSummary {
    pub frame_count: usize,
    pub elapsed: Duration,
}
