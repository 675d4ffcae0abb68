//! Tilesift CLI Tool
//!
//! Command-line interface for sorting raster tiles into `content` and
//! `no_content` buckets using the tilesift library.

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<std::process::ExitCode> {
    tilesift::cli::main()
}

#[cfg(not(feature = "cli"))]
fn main() {
    panic!("CLI feature not enabled. Please rebuild with --features cli");
}
