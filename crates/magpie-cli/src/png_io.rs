//! PNG reading and writing.
//!
//! PNG stores straight alpha. Every 8-bit colour type is read as RGBA;
//! palette and sub-byte images are expanded first. Output is always 8-bit
//! RGBA.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result, bail};
use magpie_core::{AlphaMode, PixelBuffer, Rect};

/// Reads a PNG into a straight-alpha buffer at the origin.
pub fn read(path: &Path) -> Result<PixelBuffer> {
    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND);
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
    let buf = &buf[..info.buffer_size()];

    let rgba: Vec<u8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgba, png::BitDepth::Eight) => buf.to_vec(),
        (png::ColorType::Rgb, png::BitDepth::Eight) => buf
            .chunks_exact(3)
            .flat_map(|c| [c[0], c[1], c[2], 255])
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            buf.iter().flat_map(|&g| [g, g, g, 255]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => buf
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        (color_type, bit_depth) => {
            bail!(
                "{}: unsupported PNG format {:?} {:?} (8-bit only)",
                path.display(),
                color_type,
                bit_depth
            );
        }
    };

    let rect = Rect::from_size(info.width, info.height);
    let stride = info.width as usize * 4;
    tracing::debug!(path = %path.display(), %rect, "read png");
    Ok(PixelBuffer::from_vec(rect, stride, AlphaMode::Straight, rgba)?)
}

/// Writes a buffer as 8-bit RGBA, converting to straight alpha if needed.
pub fn write(path: &Path, image: &PixelBuffer) -> Result<()> {
    let image = if image.alpha() == AlphaMode::Straight {
        std::borrow::Cow::Borrowed(image)
    } else {
        std::borrow::Cow::Owned(image.to_alpha(AlphaMode::Straight))
    };
    let rect = image.rect();

    let file =
        File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), rect.width() as u32, rect.height() as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut writer = encoder
        .write_header()
        .with_context(|| format!("Failed to write: {}", path.display()))?;

    let mut data = Vec::with_capacity(rect.width() * rect.height() * 4);
    for y in rect.min.y..rect.max.y {
        if let Some(row) = image.row(y) {
            data.extend_from_slice(row);
        }
    }
    writer
        .write_image_data(&data)
        .with_context(|| format!("Failed to write: {}", path.display()))?;
    tracing::debug!(path = %path.display(), %rect, "wrote png");
    Ok(())
}
