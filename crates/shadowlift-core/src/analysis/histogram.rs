//! Display-domain luminance histogram

use crate::color::linear_to_srgb;
use crate::parallel::parallel_fold_reduce;

/// Number of histogram bins (one per 8-bit display code value)
pub const HISTOGRAM_BINS: usize = 256;

/// Build a 256-bin histogram of a linear luminance plane.
///
/// Each value is clamped to [0, 1], encoded to sRGB and binned at
/// `round(display × 255)`. Counts are integers, so the parallel and
/// sequential paths agree exactly.
pub fn build_histogram(luminance: &[f32]) -> [u32; HISTOGRAM_BINS] {
    parallel_fold_reduce(
        luminance,
        1,
        || [0u32; HISTOGRAM_BINS],
        |mut hist, value| {
            hist[display_bin(value[0])] += 1;
            hist
        },
        |mut a, b| {
            for (dst, src) in a.iter_mut().zip(b.iter()) {
                *dst += src;
            }
            a
        },
    )
}

#[inline]
fn display_bin(linear: f32) -> usize {
    // NaN clamps to 0 through max/min ordering below
    let display = linear_to_srgb(linear.max(0.0).min(1.0));
    ((display * (HISTOGRAM_BINS - 1) as f32).round() as usize).min(HISTOGRAM_BINS - 1)
}

/// Display-domain value at percentile `p` (0.0-1.0) of a histogram.
///
/// Walks bins accumulating counts until the cumulative count reaches
/// `max(1, ⌊p · total⌋)` and returns that bin's display value. An empty
/// histogram returns 0.
pub fn percentile_from_histogram(hist: &[u32], p: f32) -> f32 {
    let total: u64 = hist.iter().map(|&c| c as u64).sum();
    if total == 0 || hist.len() < 2 {
        return 0.0;
    }

    let target = ((total as f64 * p.clamp(0.0, 1.0) as f64) as u64).max(1);
    let last = (hist.len() - 1) as f32;
    let mut cumulative = 0u64;

    for (bin, &count) in hist.iter().enumerate() {
        cumulative += count as u64;
        if cumulative >= target {
            return bin as f32 / last;
        }
    }

    1.0
}
