//! 8-bit RGBA image buffer

/// Interleaved 8-bit RGBA image, sRGB-encoded.
///
/// The buffer always holds exactly `width * height * 4` bytes; constructors
/// reject anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Number of interleaved channels per pixel
    pub const CHANNELS: usize = 4;

    /// Wrap an existing RGBA buffer, checking it matches the dimensions
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, String> {
        let expected = expected_len(width, height)?;
        if data.len() != expected {
            return Err(format!(
                "RGBA buffer size mismatch: {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            ));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image filled with a single RGBA value
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, String> {
        let expected = expected_len(width, height)?;
        let data = rgba.iter().copied().cycle().take(expected).collect();
        Self::new(width, height, data)
    }

    /// Build from RGB bytes, adding an opaque alpha channel
    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Result<Self, String> {
        let pixels = expected_len(width, height)? / Self::CHANNELS;
        if rgb.len() != pixels * 3 {
            return Err(format!(
                "RGB buffer size mismatch: {}x{} needs {} bytes, got {}",
                width,
                height,
                pixels * 3,
                rgb.len()
            ));
        }

        let mut data = Vec::with_capacity(pixels * Self::CHANNELS);
        for px in rgb.chunks_exact(3) {
            data.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels
    pub fn pixel_count(&self) -> usize {
        self.data.len() / Self::CHANNELS
    }

    /// Raw interleaved RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image and return its RGBA bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// RGBA value at (x, y), or `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }
}

fn expected_len(width: u32, height: u32) -> Result<usize, String> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(RgbaImage::CHANNELS))
        .ok_or_else(|| format!("Image dimensions {}x{} overflow", width, height))
}
