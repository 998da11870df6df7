//! PNG loading and saving.
//!
//! Every PNG is decoded to 8-bit RGBA: palettes and low bit depths are
//! expanded, 16-bit samples are stripped to 8 and gray is replicated into
//! R, G and B.

use anyhow::{Context, Result, bail};
use retouch_core::PixelBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Reads a PNG file into an RGBA buffer.
pub fn load_png(path: &Path) -> Result<PixelBuffer> {
    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .with_context(|| format!("Failed to decode: {}", path.display()))?;
    let buf_size = reader
        .output_buffer_size()
        .context("cannot determine output buffer size")?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .with_context(|| format!("Failed to decode: {}", path.display()))?;
    let bytes = &buf[..info.buffer_size()];

    debug!(
        path = %path.display(),
        width = info.width,
        height = info.height,
        color = ?info.color_type,
        "decoded png"
    );

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => bytes.to_vec(),
        png::ColorType::Rgb => bytes
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::Grayscale => bytes.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::GrayscaleAlpha => bytes
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        other => bail!("unsupported PNG color type {other:?} in {}", path.display()),
    };

    Ok(PixelBuffer::from_data(info.width, info.height, rgba)?)
}

/// Writes an RGBA buffer as an 8-bit PNG.
pub fn save_png(path: &Path, buffer: &PixelBuffer) -> Result<()> {
    if buffer.is_empty() {
        bail!("cannot write an empty image to {}", path.display());
    }
    let file =
        File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?;

    let mut encoder = png::Encoder::new(BufWriter::new(file), buffer.width(), buffer.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut writer = encoder
        .write_header()
        .with_context(|| format!("Failed to save: {}", path.display()))?;
    writer
        .write_image_data(buffer.data())
        .with_context(|| format!("Failed to save: {}", path.display()))?;
    writer
        .finish()
        .with_context(|| format!("Failed to save: {}", path.display()))?;

    debug!(path = %path.display(), width = buffer.width(), height = buffer.height(), "wrote png");
    Ok(())
}
