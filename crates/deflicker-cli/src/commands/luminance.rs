use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use deflicker_core::executor::ParallelExecutor;
use deflicker_core::io::codec::FileCodec;
use deflicker_core::io::discover::InputSource;
use deflicker_core::luminance::compute_frame;
use deflicker_core::metadata::SidecarStore;
use deflicker_core::pipeline::config::default_workers;
use deflicker_core::registry::FrameRegistry;
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Args)]
pub struct LuminanceArgs {
    /// Input directory of images, or a newline-delimited list file
    pub input: PathBuf,

    /// Number of parallel workers (default: one per core)
    #[arg(short = 'j', long)]
    pub workers: Option<usize>,
}

pub fn run(args: &LuminanceArgs) -> Result<()> {
    let source = InputSource::resolve(&args.input)?;
    let paths = source.discover()?;
    let mut registry = FrameRegistry::from_paths(paths)?;
    let total = registry.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Measuring luminance");

    let executor = ParallelExecutor::new(args.workers.unwrap_or_else(default_workers))?;
    let codec = FileCodec;
    let store = SidecarStore;
    let frames = executor.run(
        registry.take_frames(),
        |frame| compute_frame(frame, &codec, &store),
        |done| pb.set_position(done as u64),
    )?;
    registry.restore_frames(frames);
    pb.finish_with_message("Luminance measured");

    println!("\n{:>5}  {:>12}  Filename", "Frame", "Luminance");
    println!("{}", "-".repeat(50));
    for frame in registry.frames() {
        println!(
            "{:>5}  {:>12.4}  {}",
            frame.id,
            frame.original_luminance,
            frame.base_name()
        );
    }

    let luminances: Vec<f64> = registry
        .frames()
        .iter()
        .map(|f| f.original_luminance)
        .collect();
    let min = luminances.iter().copied().fold(f64::INFINITY, f64::min);
    let max = luminances.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = luminances.iter().sum::<f64>() / total as f64;
    println!("\nMin luminance:  {min:.4}");
    println!("Max luminance:  {max:.4}");
    println!("Mean luminance: {mean:.4}");

    Ok(())
}
