//! Relocation of classified tiles and their world-file sidecars
//!
//! Moves are same-volume `fs::rename` calls that preserve the file's
//! basename. When a `.tfw` world file shares the image's basename it is
//! moved first, into the same destination, so a georeferenced pair never
//! ends up split across buckets by a later failure of the sidecar move.
//! There is no rollback: a failed image rename after a successful sidecar
//! rename leaves the pair split until the run is repeated.

use crate::error::{Result, TilesiftError};
use std::fs;
use std::path::Path;

/// Extension of the georeferencing world file that may accompany a tile
pub const SIDECAR_EXTENSION: &str = "tfw";

/// Move an image (and its `.tfw` sidecar, if one exists) into `destination_dir`
///
/// Returns `true` when a sidecar was moved alongside the image, so callers
/// can account for it separately from files left in place.
pub fn relocate(image_path: &Path, destination_dir: &Path) -> Result<bool> {
    let sidecar_path = image_path.with_extension(SIDECAR_EXTENSION);
    let has_sidecar = sidecar_path.exists();
    if has_sidecar {
        rename_into(&sidecar_path, destination_dir)?;
    }

    rename_into(image_path, destination_dir)?;
    Ok(has_sidecar)
}

/// Ensure a bucket directory exists (idempotent)
pub fn ensure_bucket_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .map_err(|e| TilesiftError::file_io_error("create bucket directory", dir, e))
}

fn rename_into(source: &Path, destination_dir: &Path) -> Result<()> {
    let file_name = source.file_name().ok_or_else(|| {
        TilesiftError::invalid_config(format!("path has no file name: {}", source.display()))
    })?;
    let target = destination_dir.join(file_name);

    fs::rename(source, &target).map_err(|e| TilesiftError::file_io_error("move", source, e))
}
