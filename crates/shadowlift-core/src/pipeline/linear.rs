//! Linear-light working copy of an RGBA image

use crate::color::{luminance, srgb_u8_to_linear};
use crate::filters::guided_filter;
use crate::models::RgbaImage;
use crate::parallel::parallel_for_each_chunk_mut;

/// Linear RGB planes decoded from an 8-bit sRGB image.
///
/// Alpha is not carried; the engine copies it straight from the source.
#[derive(Debug, Clone)]
pub struct LinearImage {
    pub width: usize,
    pub height: usize,

    /// Interleaved linear RGB, 3 values per pixel
    pub rgb: Vec<f32>,

    /// BT.709 luminance per pixel
    pub luminance: Vec<f32>,
}

impl LinearImage {
    /// Decode through the 256-entry lookup table
    pub fn from_rgba(image: &RgbaImage) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let pixels = image.pixel_count();
        let src = image.as_bytes();

        let mut rgb = vec![0.0f32; pixels * 3];
        parallel_for_each_chunk_mut(&mut rgb, 3, |index, px| {
            let offset = index * RgbaImage::CHANNELS;
            px[0] = srgb_u8_to_linear(src[offset]);
            px[1] = srgb_u8_to_linear(src[offset + 1]);
            px[2] = srgb_u8_to_linear(src[offset + 2]);
        });

        let mut lum = vec![0.0f32; pixels];
        parallel_for_each_chunk_mut(&mut lum, 1, |index, value| {
            let offset = index * 3;
            value[0] = luminance(rgb[offset], rgb[offset + 1], rgb[offset + 2]);
        });

        Self {
            width,
            height,
            rgb,
            luminance: lum,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.luminance.len()
    }

    /// Linear RGB of one pixel
    #[inline]
    pub fn pixel(&self, index: usize) -> [f32; 3] {
        let offset = index * 3;
        [self.rgb[offset], self.rgb[offset + 1], self.rgb[offset + 2]]
    }
}

/// Smoothed base luminance: guided filter of a luminance plane on itself
pub fn extract_base_layer(
    luminance: &[f32],
    width: usize,
    height: usize,
    radius: usize,
    eps: f32,
) -> Vec<f32> {
    guided_filter(luminance, width, height, radius, eps)
}
