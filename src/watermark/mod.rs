//! Least-significant-bit watermark extraction
//!
//! Reconstructs the bit stream hidden in the low-order bit of each color
//! channel of an RGB image. The output is the raw bit sequence; no framing
//! or payload decoding is attempted.

use anyhow::{Context, Result};
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// Extract the LSB stream of an image file.
///
/// The image must decode to 8-bit RGB; images with an alpha channel, a
/// single luma channel, or wider samples are rejected rather than silently
/// converted, since conversion would synthesize low-order bits that are not
/// present in the file.
pub fn extract_from_path(path: &Path) -> Result<String> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode image {}", path.display()))?;

    let rgb = match img {
        DynamicImage::ImageRgb8(buf) => buf,
        other => anyhow::bail!(
            "Image {} is not an 8-bit RGB image (found {:?})",
            path.display(),
            other.color()
        ),
    };

    Ok(extract_bits(&rgb))
}

/// Extract the LSB stream of an in-memory RGB image.
///
/// Pixels are visited in column-major order (all rows of column 0, then
/// column 1, ...); each pixel contributes the low bit of red, green, and
/// blue, in that order. The result always has length `3 * width * height`.
pub fn extract_bits(image: &RgbImage) -> String {
    let mut bits = String::with_capacity((3 * image.width() * image.height()) as usize);

    for x in 0..image.width() {
        for y in 0..image.height() {
            let image::Rgb([r, g, b]) = *image.get_pixel(x, y);
            bits.push(bit_char(r));
            bits.push(bit_char(g));
            bits.push(bit_char(b));
        }
    }

    bits
}

fn bit_char(channel: u8) -> char {
    if channel & 1 == 1 { '1' } else { '0' }
}
