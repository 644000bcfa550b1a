use std::fs;
use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::apply::apply_frame;
use crate::error::{DeflickerError, Result};
use crate::executor::ParallelExecutor;
use crate::io::codec::{FileCodec, ImageCodec};
use crate::io::discover::InputSource;
use crate::luminance::compute_frame;
use crate::metadata::{MetadataStore, SidecarStore};
use crate::registry::FrameRegistry;
use crate::smooth::smooth;

use super::config::PipelineConfig;
use super::types::{NoOpReporter, PipelineStage, PipelineSummary, ProgressReporter};

/// Run the full deflicker pipeline with injected capabilities and a
/// thread-safe progress reporter.
///
/// Phase order is strict: discovery, then luminance for every frame, then
/// all smoothing passes, then apply. Each parallel phase ends at a barrier
/// inside the executor; the next phase never starts before it closes.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    codec: Arc<dyn ImageCodec>,
    store: Arc<dyn MetadataStore>,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<PipelineSummary> {
    config.validate()?;
    let started = Instant::now();

    reporter.begin_stage(PipelineStage::Discovery, None);
    let source = InputSource::resolve(&config.input)?;
    let paths = source.discover()?;
    let mut registry = FrameRegistry::from_paths(paths)?;
    reporter.finish_stage();
    info!(
        frames = registry.len(),
        input = %config.input.display(),
        "frames discovered"
    );

    // Frames from different directories collapse into one flat output
    // namespace; refuse to run rather than overwrite silently.
    if let Some(name) = registry.first_name_collision() {
        return Err(DeflickerError::OutputNameCollision { name });
    }
    fs::create_dir_all(&config.output_dir).map_err(|e| {
        DeflickerError::Config(format!(
            "cannot create output directory {}: {e}",
            config.output_dir.display()
        ))
    })?;

    let executor = ParallelExecutor::new(config.workers)?;
    let total = registry.len();

    reporter.begin_stage(PipelineStage::Luminance, Some(total));
    let frames = executor.run(
        registry.take_frames(),
        |frame| compute_frame(frame, codec.as_ref(), store.as_ref()),
        |done| reporter.advance(done),
    )?;
    registry.restore_frames(frames);
    reporter.finish_stage();
    info!(frames = total, workers = executor.workers(), "luminance phase complete");

    reporter.begin_stage(PipelineStage::Smoothing, Some(config.smoothing.passes));
    smooth(registry.frames_mut(), &config.smoothing, |pass| {
        reporter.advance(pass)
    });
    reporter.finish_stage();
    info!(
        window = config.smoothing.window,
        passes = config.smoothing.passes,
        "smoothing complete"
    );

    reporter.begin_stage(PipelineStage::Apply, Some(total));
    let frames = executor.run(
        registry.take_frames(),
        |frame| apply_frame(frame, codec.as_ref(), &config.output_dir),
        |done| reporter.advance(done),
    )?;
    registry.restore_frames(frames);
    reporter.finish_stage();
    info!(
        frames = total,
        output = %config.output_dir.display(),
        "apply phase complete"
    );

    Ok(PipelineSummary {
        frame_count: total,
        elapsed: started.elapsed(),
    })
}

/// Run the pipeline with the default file codec and JSON sidecar store.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineSummary> {
    run_pipeline_reported(
        config,
        Arc::new(FileCodec),
        Arc::new(SidecarStore),
        Arc::new(NoOpReporter),
    )
}
