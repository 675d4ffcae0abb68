//! Directory segregation driver
//!
//! The [`DirectoryProcessor`] ties the pipeline together: it validates the
//! run's preconditions, creates the two bucket directories, takes a single
//! non-recursive snapshot of the input directory, and classifies and moves
//! each recognized image in turn. Processing is fully sequential; each file
//! is decoded, classified, and moved before the next one is considered, and
//! any decode or move failure aborts the remainder of the run.

use crate::classifier;
use crate::config::SegregateConfig;
use crate::error::{Result, TilesiftError};
use crate::mover;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized raster image extensions
///
/// Matching is an exact, case-sensitive suffix test, so `photo.JPG` is not
/// recognized while `photo.jpg` is.
pub const IMAGE_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".tif", ".bmp", ".png", ".gif"];

/// Whether a file name carries one of the recognized image extensions
pub fn is_recognized_image(file_name: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}

/// Destination bucket for a classified tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// At least one pixel deviates from the background
    Content,
    /// Every pixel matches the background
    NoContent,
}

impl Bucket {
    /// Name of the bucket subdirectory under the input directory
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::NoContent => "no_content",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// One-time listing of the input directory taken before processing starts
///
/// Only the immediate entries are inspected; subdirectories (including the
/// freshly created buckets) are never descended into, and files appearing
/// after the snapshot are not observed.
#[derive(Debug, Clone)]
pub struct DirectorySnapshot {
    /// Recognized image files, sorted for a deterministic processing order
    pub images: Vec<PathBuf>,
    /// Files whose extension is not recognized. These stay in place, except
    /// `.tfw` sidecars, which later move alongside their image.
    pub skipped: usize,
}

/// Outcome of classifying and moving a single image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Bucket the image was filed into
    pub bucket: Bucket,
    /// Whether a `.tfw` sidecar moved alongside the image
    pub sidecar_moved: bool,
}

/// Accounting for a completed segregation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegregationSummary {
    /// Images moved into the `content` bucket
    pub content: usize,
    /// Images moved into the `no_content` bucket
    pub no_content: usize,
    /// Files actually left in place because their extension is not
    /// recognized. Sidecars that moved alongside their image are not
    /// counted here.
    pub skipped: usize,
}

impl SegregationSummary {
    /// Total number of images moved into either bucket
    pub const fn moved(&self) -> usize {
        self.content + self.no_content
    }
}

/// Sequential classify-and-move driver for one input directory
pub struct DirectoryProcessor {
    config: SegregateConfig,
}

impl DirectoryProcessor {
    /// Create a processor for the given configuration
    pub const fn new(config: SegregateConfig) -> Self {
        Self { config }
    }

    /// Access the processor's configuration
    pub const fn config(&self) -> &SegregateConfig {
        &self.config
    }

    /// Absolute path of a bucket directory under the input directory
    pub fn bucket_dir(&self, bucket: Bucket) -> PathBuf {
        self.config.input_dir.join(bucket.dir_name())
    }

    /// Create both bucket directories (idempotent)
    pub fn prepare_buckets(&self) -> Result<()> {
        mover::ensure_bucket_dir(&self.bucket_dir(Bucket::Content))?;
        mover::ensure_bucket_dir(&self.bucket_dir(Bucket::NoContent))?;
        Ok(())
    }

    /// Take a one-time, non-recursive listing of the input directory
    pub fn snapshot(&self) -> Result<DirectorySnapshot> {
        let mut images = Vec::new();
        let mut skipped = 0;

        let entries = fs::read_dir(&self.config.input_dir)
            .map_err(|e| TilesiftError::file_io_error("read directory", &self.config.input_dir, e))?;

        for entry in entries {
            let entry = entry
                .map_err(|e| TilesiftError::file_io_error("read directory entry", &self.config.input_dir, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| TilesiftError::file_io_error("stat", entry.path(), e))?;
            if !file_type.is_file() {
                // Bucket directories and any other subdirectories stay put.
                continue;
            }

            if entry.file_name().to_str().is_some_and(is_recognized_image) {
                images.push(entry.path());
            } else {
                skipped += 1;
            }
        }

        // read_dir order is platform-dependent; sort for a stable run order.
        images.sort();

        Ok(DirectorySnapshot { images, skipped })
    }

    /// Decode one image, classify it, and move it (with any sidecar) into
    /// the matching bucket
    ///
    /// # Errors
    ///
    /// Decode and move failures are fatal to the run by design; there is no
    /// per-file isolation or retry.
    pub fn classify_and_move(&self, image_path: &Path) -> Result<MoveReport> {
        let image = image::open(image_path)
            .map_err(|e| TilesiftError::image_load_error(image_path, e))?;

        let bucket = if classifier::has_content(&image, self.config.background) {
            Bucket::Content
        } else {
            Bucket::NoContent
        };
        debug!("{} -> {}", image_path.display(), bucket);

        let sidecar_moved = mover::relocate(image_path, &self.bucket_dir(bucket))?;
        Ok(MoveReport {
            bucket,
            sidecar_moved,
        })
    }

    /// Run the whole pipeline: validate, create buckets, snapshot, then
    /// classify and move every recognized image
    pub fn run(&self) -> Result<SegregationSummary> {
        self.config.validate()?;
        self.prepare_buckets()?;

        let snapshot = self.snapshot()?;
        info!(
            "Found {} image file(s) in {} ({} other file(s) left in place)",
            snapshot.images.len(),
            self.config.input_dir.display(),
            snapshot.skipped
        );

        let mut summary = SegregationSummary {
            skipped: snapshot.skipped,
            ..Default::default()
        };

        for image_path in &snapshot.images {
            let report = self.classify_and_move(image_path)?;
            match report.bucket {
                Bucket::Content => summary.content += 1,
                Bucket::NoContent => summary.no_content += 1,
            }
            if report.sidecar_moved {
                // The sidecar was counted as skipped at snapshot time.
                summary.skipped = summary.skipped.saturating_sub(1);
            }
        }

        info!(
            "Segregation complete - content: {}, no_content: {}, skipped: {}",
            summary.content, summary.no_content, summary.skipped
        );

        Ok(summary)
    }
}
