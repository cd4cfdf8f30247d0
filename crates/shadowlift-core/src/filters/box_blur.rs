//! Separable box filter

use crate::parallel::{parallel_for_each_chunk_mut, parallel_zip_chunks_mut};

/// Mean over a `(2·radius+1)²` window with edge-replicated borders.
///
/// Runs a horizontal prefix-sum pass, then the same row kernel over the
/// transposed plane for the vertical pass. Out-of-range coordinates clamp to
/// the nearest valid row/column, so borders are never darkened by zero
/// padding. A radius larger than the image is allowed and tends toward a
/// weighted global mean.
pub fn box_filter(src: &[f32], width: usize, height: usize, radius: usize) -> Vec<f32> {
    debug_assert_eq!(src.len(), width * height);

    if src.is_empty() || radius == 0 {
        return src.to_vec();
    }

    let mut horizontal = vec![0.0f32; src.len()];
    parallel_zip_chunks_mut(src, &mut horizontal, width, |row, out| {
        box_row(row, out, radius)
    });

    let columns = transpose(&horizontal, width, height);
    let mut vertical = vec![0.0f32; src.len()];
    parallel_zip_chunks_mut(&columns, &mut vertical, height, |column, out| {
        box_row(column, out, radius)
    });

    transpose(&vertical, height, width)
}

/// 1-D windowed mean of one row with clamped indices.
///
/// Each window is split into the replicated left edge, the in-range span read
/// from a prefix sum, and the replicated right edge, so the cost per row does
/// not depend on `radius` and no index arithmetic can overflow.
fn box_row(row: &[f32], out: &mut [f32], radius: usize) {
    let Some((&first, &last)) = row.first().zip(row.last()) else {
        return;
    };
    let end = row.len() - 1;

    // f64 prefix sums keep long rows from drifting
    let mut prefix = Vec::with_capacity(row.len() + 1);
    let mut acc = 0.0f64;
    prefix.push(acc);
    for &value in row {
        acc += value as f64;
        prefix.push(acc);
    }

    let window = radius as f64 * 2.0 + 1.0;
    for (x, value) in out.iter_mut().enumerate() {
        let lo = x.saturating_sub(radius);
        let hi = x.saturating_add(radius).min(end);
        let left = radius.saturating_sub(x) as f64;
        let right = x.saturating_add(radius).saturating_sub(end) as f64;

        let sum = left * first as f64 + (prefix[hi + 1] - prefix[lo]) + right * last as f64;
        *value = (sum / window) as f32;
    }
}

/// Transpose a row-major `width × height` plane into `height × width`
fn transpose(src: &[f32], width: usize, height: usize) -> Vec<f32> {
    let mut out = vec![0.0f32; src.len()];
    parallel_for_each_chunk_mut(&mut out, height, |x, column| {
        for (y, value) in column.iter_mut().enumerate() {
            *value = src[y * width + x];
        }
    });
    out
}

#[cfg(test)]
pub(super) fn transpose_for_tests(src: &[f32], width: usize, height: usize) -> Vec<f32> {
    transpose(src, width, height)
}
