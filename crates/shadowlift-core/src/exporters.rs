//! Image exporters for the output formats
//!
//! Write processed RGBA8 images to PNG or 8-bit TIFF. Pixel data is written
//! as-is; it is already sRGB-encoded by the engine.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::models::RgbaImage;

/// Output container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Tiff8,
}

impl OutputFormat {
    /// Format for a file extension (`png`, `tif`, `tiff`), case-insensitive
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "tif" | "tiff" => Some(Self::Tiff8),
            _ => None,
        }
    }

    /// Extension written for this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Tiff8 => "tif",
        }
    }
}

/// Export an image as 8-bit RGBA PNG
pub fn export_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<(), String> {
    let file =
        File::create(path.as_ref()).map_err(|e| format!("Failed to create PNG file: {}", e))?;

    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| format!("Failed to write PNG header: {}", e))?;
    writer
        .write_image_data(image.as_bytes())
        .map_err(|e| format!("Failed to write PNG image: {}", e))?;
    writer
        .finish()
        .map_err(|e| format!("Failed to finish PNG file: {}", e))
}

/// Export an image as 8-bit RGBA TIFF
pub fn export_tiff8<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<(), String> {
    let file =
        File::create(path.as_ref()).map_err(|e| format!("Failed to create TIFF file: {}", e))?;

    let mut encoder = tiff::encoder::TiffEncoder::new(BufWriter::new(file))
        .map_err(|e| format!("Failed to create TIFF encoder: {}", e))?;

    encoder
        .write_image::<tiff::encoder::colortype::RGBA8>(
            image.width(),
            image.height(),
            image.as_bytes(),
        )
        .map_err(|e| format!("Failed to write TIFF image: {}", e))
}

/// Export in the format named by the path's extension
pub fn export_image<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<(), String> {
    let path = path.as_ref();
    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(OutputFormat::from_extension)
        .ok_or_else(|| format!("Unsupported output format: {}", path.display()))?;

    match format {
        OutputFormat::Png => export_png(image, path),
        OutputFormat::Tiff8 => export_tiff8(image, path),
    }
}
