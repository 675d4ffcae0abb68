//! Pixel-content classification against a uniform background
//!
//! A tile "has content" when at least one connected region of pixels deviates
//! from the declared background color. Detection is a three-stage pipeline:
//! grayscale conversion, binary thresholding of the per-pixel deviation from
//! the background, and external contour extraction over the resulting mask.
//! Thresholding plus a contour count is a cheap, format-agnostic emptiness
//! test that needs no reference image to diff against.

use crate::config::Background;
use image::{DynamicImage, GrayImage, Luma};
use imageproc::contours::{find_contours, Contour};
use log::trace;

/// Deviation from the background above which a pixel counts as foreground.
///
/// Zero means any pixel that is not exactly the background color is treated
/// as content, for both black and white backgrounds. Compressed formats like
/// JPEG can leave near-background noise that trips this; whether the
/// sensitivity should be relaxed is an open product question.
const CONTENT_THRESHOLD: u8 = 0;

/// Determine whether the image contains any non-background content
pub fn has_content(image: &DynamicImage, background: Background) -> bool {
    let gray = image.to_luma8();
    let mask = deviation_mask(&gray, background);

    // External contours only; any boundary at all means content.
    let contours: Vec<Contour<u32>> = find_contours(&mask);
    trace!(
        "classifier: {} contour(s) against {} background",
        contours.len(),
        background
    );

    !contours.is_empty()
}

/// Binarize the grayscale image by its distance from the background luma
///
/// Foreground pixels become 255, background pixels 0, which is the polarity
/// `find_contours` expects (non-zero regions are traced). The mask carries a
/// one-pixel zero border on every side: `find_contours` does not trace
/// foreground that touches the image edge, so without the padding a tile
/// whose content runs into the border would yield no contours at all.
fn deviation_mask(gray: &GrayImage, background: Background) -> GrayImage {
    let reference = background.reference_luma();
    let mut mask = GrayImage::new(gray.width() + 2, gray.height() + 2);

    for (x, y, pixel) in gray.enumerate_pixels() {
        if pixel[0].abs_diff(reference) > CONTENT_THRESHOLD {
            mask.put_pixel(x + 1, y + 1, Luma([255u8]));
        }
    }

    mask
}
