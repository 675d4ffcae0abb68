//! End-to-end segregation workflow tests
//!
//! These tests exercise the whole pipeline against real temporary
//! directories: snapshot enumeration, classification, bucket creation, and
//! image+sidecar relocation.

use image::{Rgb, RgbImage};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tilesift::{segregate_directory, Background, SegregateConfig, TilesiftError};

/// Surface library log output when tests run with RUST_LOG set
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Write a uniform tile of the given luma
fn write_empty_tile(path: &Path, luma: u8) {
    RgbImage::from_pixel(16, 16, Rgb([luma, luma, luma]))
        .save(path)
        .unwrap();
}

/// Write a tile of the given background luma with one contrasting square
fn write_content_tile(path: &Path, background_luma: u8, spot_luma: u8) {
    let mut tile = RgbImage::from_pixel(16, 16, Rgb([background_luma; 3]));
    for x in 4..8 {
        for y in 4..8 {
            tile.put_pixel(x, y, Rgb([spot_luma; 3]));
        }
    }
    tile.save(path).unwrap();
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_partition_completeness_black_background() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write_content_tile(&root.join("tile_01.png"), 0, 255);
    write_content_tile(&root.join("tile_02.bmp"), 0, 128);
    write_empty_tile(&root.join("tile_03.png"), 0);
    write_empty_tile(&root.join("tile_04.png"), 0);
    fs::write(root.join("notes.txt"), b"keep me").unwrap();
    // Uppercase extension is not recognized, so the bytes are never decoded.
    fs::write(root.join("photo.JPG"), b"not even an image").unwrap();

    let summary =
        segregate_directory(SegregateConfig::new(root, Background::Black)).unwrap();

    assert_eq!(summary.content, 2);
    assert_eq!(summary.no_content, 2);
    assert_eq!(summary.skipped, 2);

    assert_eq!(
        file_names(root),
        vec!["content", "no_content", "notes.txt", "photo.JPG"]
    );
    assert_eq!(
        file_names(&root.join("content")),
        vec!["tile_01.png", "tile_02.bmp"]
    );
    assert_eq!(
        file_names(&root.join("no_content")),
        vec!["tile_03.png", "tile_04.png"]
    );
}

#[test]
fn test_white_background_classification() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write_empty_tile(&root.join("blank.png"), 255);
    write_content_tile(&root.join("marked.png"), 255, 0);

    let summary =
        segregate_directory(SegregateConfig::new(root, Background::White)).unwrap();

    assert_eq!(summary.content, 1);
    assert_eq!(summary.no_content, 1);
    assert!(root.join("content").join("marked.png").exists());
    assert!(root.join("no_content").join("blank.png").exists());
}

#[test]
fn test_sidecar_moves_into_same_bucket() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write_content_tile(&root.join("tile_01.png"), 0, 255);
    fs::write(root.join("tile_01.tfw"), b"1.0\n0.0\n0.0\n-1.0\n0.5\n0.5\n").unwrap();
    write_empty_tile(&root.join("tile_02.png"), 0);
    fs::write(root.join("tile_02.tfw"), b"1.0\n0.0\n0.0\n-1.0\n0.5\n0.5\n").unwrap();

    let summary =
        segregate_directory(SegregateConfig::new(root, Background::Black)).unwrap();

    // Both sidecars moved with their images, so nothing was left in place.
    assert_eq!(summary.skipped, 0);
    assert_eq!(
        file_names(&root.join("content")),
        vec!["tile_01.png", "tile_01.tfw"]
    );
    assert_eq!(
        file_names(&root.join("no_content")),
        vec!["tile_02.png", "tile_02.tfw"]
    );
}

#[test]
fn test_orphan_sidecar_stays_in_place() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::write(root.join("lonely.tfw"), b"1.0\n").unwrap();
    write_empty_tile(&root.join("tile.png"), 0);

    let summary =
        segregate_directory(SegregateConfig::new(root, Background::Black)).unwrap();

    assert_eq!(summary.skipped, 1);
    assert!(root.join("lonely.tfw").exists());
}

#[test]
fn test_rerun_with_existing_buckets() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    // Buckets already exist and already hold a previously sorted tile.
    fs::create_dir_all(root.join("content")).unwrap();
    fs::create_dir_all(root.join("no_content")).unwrap();
    write_content_tile(&root.join("content").join("old.png"), 0, 255);

    write_empty_tile(&root.join("fresh.png"), 0);

    let summary =
        segregate_directory(SegregateConfig::new(root, Background::Black)).unwrap();
    assert_eq!(summary.no_content, 1);

    // The listing is non-recursive, so bucket contents are never reclassified.
    assert!(root.join("content").join("old.png").exists());
    assert!(root.join("no_content").join("fresh.png").exists());

    // A second run over the now-image-free root is a no-op.
    let summary =
        segregate_directory(SegregateConfig::new(root, Background::Black)).unwrap();
    assert_eq!(summary.moved(), 0);
}

#[test]
fn test_missing_input_directory_is_usage_error() {
    init_logging();
    let result = segregate_directory(SegregateConfig::new(
        "/definitely/not/a/real/path",
        Background::Black,
    ));

    match result {
        Err(e) => {
            assert!(e.is_usage());
            assert!(e.to_string().contains("does not exist"));
        },
        Ok(_) => panic!("expected a usage error for a missing input directory"),
    }
}

#[test]
fn test_undecodable_image_aborts_run() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::write(root.join("broken.png"), b"this is not a png").unwrap();
    write_empty_tile(&root.join("zz_tile.png"), 0);

    let error =
        segregate_directory(SegregateConfig::new(root, Background::Black)).unwrap_err();
    assert!(matches!(error, TilesiftError::Image(_)));
    assert!(error.to_string().contains("broken.png"));

    // Files sorted after the bad one are never reached.
    assert!(root.join("zz_tile.png").exists());
    assert!(root.join("broken.png").exists());
}

#[test]
fn test_gif_and_jpeg_extensions_are_processed() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write_content_tile(&root.join("tile.jpeg"), 0, 255);
    write_content_tile(&root.join("anim.gif"), 0, 255);

    let summary =
        segregate_directory(SegregateConfig::new(root, Background::Black)).unwrap();

    // JPEG is lossy and GIF palettized, but a solid bright square on pure
    // black survives both codecs well past the detection threshold.
    assert_eq!(summary.content, 2);
    assert_eq!(summary.no_content, 0);
}
