use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use deflicker_core::io::codec::FileCodec;
use deflicker_core::metadata::SidecarStore;
use deflicker_core::pipeline::config::{default_workers, PipelineConfig};
use deflicker_core::pipeline::run_pipeline_reported;
use deflicker_core::smooth::SmoothingParams;

use crate::progress::CliReporter;
use crate::summary::print_run_summary;

#[derive(Args)]
pub struct RunArgs {
    /// Input directory of images, or a newline-delimited list file
    pub input: PathBuf,

    /// Pipeline config file (TOML); overrides the other flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Sliding window width in frames
    #[arg(short, long, default_value = "10")]
    pub window: usize,

    /// Number of smoothing passes
    #[arg(short, long, default_value = "1")]
    pub passes: usize,

    /// Number of parallel workers (default: one per core)
    #[arg(short = 'j', long)]
    pub workers: Option<usize>,

    /// Output directory for adjusted images
    #[arg(short, long, default_value = "deflickered")]
    pub output: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        build_config_from_args(args)
    };

    print_run_summary(&config);

    let reporter = Arc::new(CliReporter::new());
    let summary =
        run_pipeline_reported(&config, Arc::new(FileCodec), Arc::new(SidecarStore), reporter)?;

    println!(
        "\nProcessed {} frames in {:.2?}",
        summary.frame_count, summary.elapsed
    );
    println!("Output saved to {}", config.output_dir.display());

    Ok(())
}

fn build_config_from_args(args: &RunArgs) -> PipelineConfig {
    PipelineConfig {
        input: args.input.clone(),
        output_dir: args.output.clone(),
        smoothing: SmoothingParams {
            window: args.window,
            passes: args.passes,
        },
        workers: args.workers.unwrap_or_else(default_workers),
    }
}
