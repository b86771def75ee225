//! Watermark command implementation
//!
//! Extracts the least-significant-bit stream of an image and prints it.

use crate::cli::Output;
use crate::watermark;
use anyhow::Result;
use std::path::Path;

/// Execute the watermark command
pub async fn execute(image: &Path, output: &Output) -> Result<()> {
    output.verbose(&format!("Reading image {}", image.display()));

    let bits = watermark::extract_from_path(image)?;

    output.verbose(&format!("Extracted {} bits", bits.len()));

    // The bit stream is the payload; print it raw for piping
    println!("{bits}");

    Ok(())
}
