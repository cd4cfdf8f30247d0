//! TIFF image decoder

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tiff::decoder::{Decoder, DecodingResult, Limits};

use super::expand_to_rgba;
use crate::models::RgbaImage;

/// Decode an 8- or 16-bit gray, gray+alpha, RGB or RGBA TIFF file
pub(crate) fn decode_tiff<P: AsRef<Path>>(path: P) -> Result<RgbaImage, String> {
    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open TIFF file: {}", e))?;

    // Large scans exceed the default limits
    let mut limits = Limits::default();
    limits.decoding_buffer_size = 1024 * 1024 * 1024;
    limits.ifd_value_size = 1024 * 1024 * 1024;
    limits.intermediate_buffer_size = 1024 * 1024 * 1024;

    let mut decoder = Decoder::new(BufReader::new(file))
        .map_err(|e| format!("Failed to create TIFF decoder: {}", e))?
        .with_limits(limits);

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| format!("Failed to get TIFF dimensions: {}", e))?;

    let color_type = decoder
        .colortype()
        .map_err(|e| format!("Failed to get TIFF color type: {}", e))?;

    let channels = match color_type {
        tiff::ColorType::Gray(_) => 1,
        tiff::ColorType::GrayA(_) => 2,
        tiff::ColorType::RGB(_) => 3,
        tiff::ColorType::RGBA(_) => 4,
        other => return Err(format!("Unsupported TIFF color type: {:?}", other)),
    };

    let image_data = decoder
        .read_image()
        .map_err(|e| format!("Failed to read TIFF image data: {}", e))?;

    let samples: Vec<u8> = match image_data {
        DecodingResult::U8(buf) => buf,
        DecodingResult::U16(buf) => buf.iter().map(|&v| v.to_u8()).collect(),
        _ => return Err("Only 8-bit and 16-bit unsigned TIFF samples are supported".to_string()),
    };

    expand_to_rgba(&samples, channels, width, height)
}

/// Integer sample reducible to 8 bits
trait TiffSample: Copy {
    fn to_u8(self) -> u8;
}

impl TiffSample for u16 {
    /// Rounded rescale, 65535 → 255
    #[inline]
    fn to_u8(self) -> u8 {
        ((self as u32 * 255 + 32_767) / 65_535) as u8
    }
}
