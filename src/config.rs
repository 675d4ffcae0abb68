//! Configuration types for tile segregation

use crate::error::{Result, TilesiftError};
use std::path::{Path, PathBuf};

/// Background color a tile is compared against
///
/// Exactly one background applies per run. The variants stand in for the
/// literal `{0,0,0}` / `{255,255,255}` triples: only the scalar reference
/// luma is meaningful to the classifier, so the color is modeled as an enum
/// rather than a 3-tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    /// Pure black background (`{0,0,0}`)
    Black,
    /// Pure white background (`{255,255,255}`)
    White,
}

impl Background {
    /// Grayscale intensity of a pure background pixel
    pub const fn reference_luma(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::White => 255,
        }
    }
}

impl std::fmt::Display for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Black => write!(f, "black"),
            Self::White => write!(f, "white"),
        }
    }
}

/// Configuration for a segregation run
#[derive(Debug, Clone)]
pub struct SegregateConfig {
    /// Directory whose immediate entries are scanned for image tiles
    pub input_dir: PathBuf,
    /// Background color tiles are compared against
    pub background: Background,
}

impl SegregateConfig {
    /// Create a configuration directly from its parts
    pub fn new<P: Into<PathBuf>>(input_dir: P, background: Background) -> Self {
        Self {
            input_dir: input_dir.into(),
            background,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> SegregateConfigBuilder {
        SegregateConfigBuilder::default()
    }

    /// Validate run preconditions against the filesystem
    ///
    /// # Errors
    ///
    /// Returns [`TilesiftError::InvalidConfig`] when the input directory does
    /// not exist or is not a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.input_dir.exists() {
            return Err(TilesiftError::invalid_config(format!(
                "The path you specified does not exist: {}",
                self.input_dir.display()
            )));
        }
        if !self.input_dir.is_dir() {
            return Err(TilesiftError::invalid_config(format!(
                "The path you specified is not a directory: {}",
                self.input_dir.display()
            )));
        }
        Ok(())
    }
}

/// Builder for [`SegregateConfig`]
#[derive(Debug, Default)]
pub struct SegregateConfigBuilder {
    input_dir: Option<PathBuf>,
    background: Option<Background>,
}

impl SegregateConfigBuilder {
    /// Set the input directory to scan
    #[must_use]
    pub fn input_dir<P: AsRef<Path>>(mut self, input_dir: P) -> Self {
        self.input_dir = Some(input_dir.as_ref().to_path_buf());
        self
    }

    /// Set the background color tiles are compared against
    #[must_use]
    pub const fn background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns [`TilesiftError::InvalidConfig`] when either the input
    /// directory or the background color is missing. Filesystem preconditions
    /// are checked later by [`SegregateConfig::validate`], so a config for a
    /// not-yet-existing directory can still be constructed.
    pub fn build(self) -> Result<SegregateConfig> {
        let input_dir = self
            .input_dir
            .ok_or_else(|| TilesiftError::invalid_config("an input directory is required"))?;
        let background = self
            .background
            .ok_or_else(|| TilesiftError::invalid_config("a background color is required"))?;

        Ok(SegregateConfig {
            input_dir,
            background,
        })
    }
}
