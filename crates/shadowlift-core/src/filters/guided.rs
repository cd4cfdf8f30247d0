//! Self-guided edge-preserving filter

use super::box_blur::box_filter;
use super::{DEFAULT_MIN_RADIUS, DEFAULT_RADIUS_SCALE};

/// Self-guided filter (He et al.) on a single plane.
///
/// Per window the output is the linear model `a·I + b` with
/// `a = var / (var + eps)` and `b = mean − a·mean`; the coefficients are box
/// smoothed before being applied. Flat regions (`var ≪ eps`) collapse to the
/// local mean while strong edges (`var ≫ eps`) pass through with `a → 1`.
pub fn guided_filter(
    input: &[f32],
    width: usize,
    height: usize,
    radius: usize,
    eps: f32,
) -> Vec<f32> {
    debug_assert_eq!(input.len(), width * height);

    if input.is_empty() {
        return Vec::new();
    }

    let eps = eps.max(f32::MIN_POSITIVE);

    let mean = box_filter(input, width, height, radius);
    let squares: Vec<f32> = input.iter().map(|&v| v * v).collect();
    let mean_sq = box_filter(&squares, width, height, radius);

    let mut a = Vec::with_capacity(input.len());
    let mut b = Vec::with_capacity(input.len());
    for (&m, &m2) in mean.iter().zip(mean_sq.iter()) {
        let variance = (m2 - m * m).max(0.0);
        let coeff = variance / (variance + eps);
        a.push(coeff);
        b.push(m - coeff * m);
    }

    let mean_a = box_filter(&a, width, height, radius);
    let mean_b = box_filter(&b, width, height, radius);

    input
        .iter()
        .zip(mean_a.iter().zip(mean_b.iter()))
        .map(|(&i, (&ma, &mb))| ma * i + mb)
        .collect()
}

/// Radius rule for the base layer: `max(4, round(min(w, h) × 0.015))`
pub fn recommended_radius(width: usize, height: usize) -> usize {
    scaled_radius(width, height, DEFAULT_RADIUS_SCALE, DEFAULT_MIN_RADIUS)
}

/// Size-proportional radius with a configurable scale and floor
pub fn scaled_radius(width: usize, height: usize, scale: f32, min_radius: usize) -> usize {
    let short_side = width.min(height) as f32;
    let scaled = (short_side * scale.max(0.0)).round() as usize;
    scaled.max(min_radius)
}
