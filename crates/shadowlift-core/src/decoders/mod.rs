//! Image decoders for various formats
//!
//! PNG and TIFF files are decoded to 8-bit sRGB RGBA, the engine's input
//! format. Grayscale sources are widened and missing alpha is set opaque.

mod png;
mod tiff;


use std::path::Path;

use crate::models::RgbaImage;

/// Decode an image from a file path
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| format!("No file extension found: {}", path.display()))?;

    match extension.as_str() {
        "tif" | "tiff" => tiff::decode_tiff(path),
        "png" => png::decode_png(path),
        _ => Err(format!("Unsupported file format: {}", extension)),
    }
}

/// Widen interleaved 8-bit samples with 1-4 channels to RGBA
pub(crate) fn expand_to_rgba(
    samples: &[u8],
    channels: usize,
    width: u32,
    height: u32,
) -> Result<RgbaImage, String> {
    let pixels = width as usize * height as usize;
    if samples.len() != pixels * channels {
        return Err(format!(
            "Decoded buffer size mismatch: expected {}, got {}",
            pixels * channels,
            samples.len()
        ));
    }

    let data = match channels {
        4 => samples.to_vec(),
        3 => {
            let mut rgba = Vec::with_capacity(pixels * 4);
            for px in samples.chunks_exact(3) {
                rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
            }
            rgba
        }
        2 => {
            let mut rgba = Vec::with_capacity(pixels * 4);
            for px in samples.chunks_exact(2) {
                rgba.extend_from_slice(&[px[0], px[0], px[0], px[1]]);
            }
            rgba
        }
        1 => {
            let mut rgba = Vec::with_capacity(pixels * 4);
            for &gray in samples {
                rgba.extend_from_slice(&[gray, gray, gray, 255]);
            }
            rgba
        }
        _ => return Err(format!("Unsupported channel count: {}", channels)),
    };

    RgbaImage::new(width, height, data)
}
