//! Configuration conversion utilities for CLI arguments

use super::main_impl::Cli;
use crate::config::{Background, SegregateConfig};
use crate::error::{Result, TilesiftError};
use std::path::PathBuf;

/// Convert CLI arguments to a validated [`SegregateConfig`]
pub(crate) struct CliConfigBuilder;

impl CliConfigBuilder {
    /// Build a `SegregateConfig` from CLI arguments
    ///
    /// # Errors
    ///
    /// Every failure here is a usage error ([`TilesiftError::InvalidConfig`]):
    /// missing `--path`, a path that does not exist, or a background flag
    /// combination that is not exactly one of `--black` / `--white`.
    pub(crate) fn from_cli(cli: &Cli) -> Result<SegregateConfig> {
        let background = Self::background_from_flags(cli.black, cli.white)?;

        let Some(path) = &cli.path else {
            return Err(TilesiftError::invalid_config(
                "You must specify the input directory with --path",
            ));
        };

        let config = SegregateConfig::new(PathBuf::from(path), background);
        config.validate()?;
        Ok(config)
    }

    /// Resolve the two mutually exclusive background flags
    fn background_from_flags(black: bool, white: bool) -> Result<Background> {
        match (black, white) {
            (true, true) => Err(TilesiftError::invalid_config(
                "You can only specify one of the two arguments --black or --white",
            )),
            (true, false) => Ok(Background::Black),
            (false, true) => Ok(Background::White),
            (false, false) => Err(TilesiftError::invalid_config(
                "You must specify one of the two arguments --black or --white",
            )),
        }
    }
}
