//! Tile Segregation CLI Tool
//!
//! Command-line interface for sorting a directory of raster tiles into
//! `content` and `no_content` buckets using the directory processor.

use super::config::CliConfigBuilder;
use crate::{
    processor::{Bucket, DirectoryProcessor, SegregationSummary},
    tracing_config::{TracingConfig, TracingFormat},
};
use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info};

/// Tile segregation CLI tool
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "tilesift")]
pub struct Cli {
    /// The path to the directory containing the images
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<String>,

    /// Background color is black
    #[arg(short, long)]
    pub black: bool,

    /// Background color is white
    #[arg(short, long)]
    pub white: bool,

    /// Enable verbose logging (-v: DEBUG, -vv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(cli.verbose).context("Failed to initialize tracing")?;

    run_cli(cli)
}

/// Execute the parsed command line; separated from [`main`] so the
/// usage-error exit mapping can be exercised without real process arguments
fn run_cli(cli: Cli) -> Result<ExitCode> {
    // Misuse (missing path, both or neither color flag) is explained on
    // stdout and exits clean so wrapper scripts are not interrupted.
    let config = match CliConfigBuilder::from_cli(&cli) {
        Ok(config) => config,
        Err(e) if e.is_usage() => {
            println!("{e}");
            return Ok(ExitCode::SUCCESS);
        },
        Err(e) => return Err(e.into()),
    };

    info!(
        "Segregating {} against a {} background",
        config.input_dir.display(),
        config.background
    );

    let start_time = Instant::now();
    let summary = run(DirectoryProcessor::new(config))?;
    let total_time = start_time.elapsed();

    println!("📊 Segregation summary:");
    println!("  ├─ content: {} file(s)", summary.content);
    println!("  ├─ no_content: {} file(s)", summary.no_content);
    println!("  ├─ left in place: {} file(s)", summary.skipped);
    println!("  └─ Total time: {:.2}s", total_time.as_secs_f64());

    Ok(ExitCode::SUCCESS)
}

/// Drive the processor file by file so a progress bar can track the batch
fn run(processor: DirectoryProcessor) -> Result<SegregationSummary> {
    processor
        .prepare_buckets()
        .context("Failed to create bucket directories")?;

    let snapshot = processor
        .snapshot()
        .context("Failed to list input directory")?;

    if snapshot.images.is_empty() {
        println!("No recognized image files found in the input directory");
        return Ok(SegregationSummary {
            skipped: snapshot.skipped,
            ..Default::default()
        });
    }

    info!("Found {} image file(s) to classify", snapshot.images.len());

    let progress = if snapshot.images.len() > 1 {
        let pb = ProgressBar::new(snapshot.images.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut summary = SegregationSummary {
        skipped: snapshot.skipped,
        ..Default::default()
    };

    for image_path in &snapshot.images {
        if let Some(ref pb) = progress {
            pb.set_message(format!("Classifying {}", image_path.display()));
        }

        // Any decode or move failure aborts the whole run, matching the
        // no-per-file-isolation contract of the processor.
        let report = processor
            .classify_and_move(image_path)
            .with_context(|| format!("Failed to process {}", image_path.display()))?;
        match report.bucket {
            Bucket::Content => summary.content += 1,
            Bucket::NoContent => summary.no_content += 1,
        }
        if report.sidecar_moved {
            // The sidecar was counted as skipped at snapshot time.
            summary.skipped = summary.skipped.saturating_sub(1);
        }
        debug!("{} -> {}", image_path.display(), report.bucket);

        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message(format!(
            "Completed! content: {}, no_content: {}",
            summary.content, summary.no_content
        ));
    }

    Ok(summary)
}

/// Initialize tracing based on verbosity level
fn init_tracing(verbose_count: u8) -> Result<()> {
    TracingConfig::new()
        .with_verbosity(verbose_count)
        .with_format(TracingFormat::Console)
        .init()
        .context("Failed to initialize tracing subscriber")
}
