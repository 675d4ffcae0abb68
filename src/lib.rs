#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

//! # tilesift
//!
//! A small library and CLI tool for sorting a directory of raster tiles into
//! two buckets, `content` and `no_content`, based on whether any pixel
//! deviates from a declared uniform background color (pure black or pure
//! white). Images move into the matching bucket together with their optional
//! `.tfw` world-file sidecar, so georeferenced tile sets stay intact.
//!
//! The typical input is a directory of orthophoto or map tiles exported by a
//! GIS pipeline, where fully-background tiles carry no information and should
//! be set aside before further processing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tilesift::{segregate_directory, Background, SegregateConfig};
//!
//! # fn example() -> tilesift::Result<()> {
//! let config = SegregateConfig::builder()
//!     .input_dir("/data/tiles")
//!     .background(Background::Black)
//!     .build()?;
//!
//! let summary = segregate_directory(config)?;
//! println!("{} tiles with content, {} empty", summary.content, summary.no_content);
//! # Ok(())
//! # }
//! ```
//!
//! ## Library vs CLI Usage
//!
//! All classification and file-moving functionality is available by default;
//! the `cli` feature (enabled by default) additionally provides the `tilesift`
//! binary with argument parsing, progress reporting, and tracing setup.
//!
//! To use only as a library without CLI dependencies:
//!
//! ```toml
//! [dependencies]
//! tilesift = { version = "0.1", default-features = false }
//! ```

pub mod classifier;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod mover;
pub mod processor;
#[cfg(feature = "cli")]
pub mod tracing_config;

pub use config::{Background, SegregateConfig, SegregateConfigBuilder};
pub use error::{Result, TilesiftError};
pub use processor::{
    Bucket, DirectoryProcessor, DirectorySnapshot, MoveReport, SegregationSummary,
};

/// Classify every recognized image in the configured directory and move each
/// one (with its sidecar, if present) into the matching bucket.
///
/// This is the convenience entry point for library users; it is equivalent to
/// constructing a [`DirectoryProcessor`] and calling
/// [`run`](DirectoryProcessor::run).
pub fn segregate_directory(config: SegregateConfig) -> Result<SegregationSummary> {
    DirectoryProcessor::new(config).run()
}
