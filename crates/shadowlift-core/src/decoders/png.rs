//! PNG image decoder

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::expand_to_rgba;
use crate::models::RgbaImage;

/// Decode a PNG file.
///
/// Palette and sub-byte images are expanded and 16-bit samples stripped to
/// 8 bits by the decoder itself, leaving four possible layouts.
pub(crate) fn decode_png<P: AsRef<Path>>(path: P) -> Result<RgbaImage, String> {
    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open PNG file: {}", e))?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| format!("Failed to read PNG info: {}", e))?;

    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| "Failed to determine PNG buffer size".to_string())?;
    let mut buf = vec![0u8; buffer_size];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| format!("Failed to read PNG frame: {}", e))?;

    let bytes = &buf[..frame_info.buffer_size()];

    if frame_info.bit_depth != png::BitDepth::Eight {
        return Err(format!(
            "Unsupported PNG bit depth after expansion: {:?}",
            frame_info.bit_depth
        ));
    }

    let channels = match frame_info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => return Err(format!("Unsupported PNG color type: {:?}", other)),
    };

    expand_to_rgba(bytes, channels, frame_info.width, frame_info.height)
}
