use super::*;
use crate::analysis::ShadowTuning;
use crate::color::{linear_to_srgb, luminance, srgb_to_linear};
use crate::models::ToneParams;

fn neutral_controls() -> ToneControls {
    ToneParams::neutral().normalized()
}

fn controls_with(adjust: impl FnOnce(&mut ToneParams)) -> ToneControls {
    let mut params = ToneParams::neutral();
    adjust(&mut params);
    params.normalized()
}

// ============================================================================
// Controls
// ============================================================================

#[test]
fn test_normalized_controls() {
    let params = ToneParams {
        exposure: 1.0,
        contrast: -50.0,
        highlights: 25.0,
        shadows: 70.0,
        whites: -100.0,
        blacks: 10.0,
    };
    let c = params.normalized();
    assert!((c.exposure_gain - 2.0).abs() < 1e-6);
    assert!((c.contrast + 0.5).abs() < 1e-6);
    assert!((c.highlights - 0.25).abs() < 1e-6);
    assert!((c.shadows - 0.7).abs() < 1e-6);
    assert!((c.whites + 1.0).abs() < 1e-6);
    assert!((c.blacks - 0.1).abs() < 1e-6);
    assert!((c.shadow_lift() - 0.7).abs() < 1e-6);
}

#[test]
fn test_negative_controls_have_no_lift() {
    let c = controls_with(|p| {
        p.shadows = -40.0;
        p.blacks = -60.0;
    });
    assert_eq!(c.shadow_lift(), 0.0);
    assert_eq!(c.black_lift(), 0.0);
}

#[test]
fn test_without_shadows_keeps_other_controls() {
    let c = controls_with(|p| {
        p.shadows = 80.0;
        p.blacks = 20.0;
        p.exposure = 0.5;
    });
    let reference = c.without_shadows();
    assert_eq!(reference.shadows, 0.0);
    assert_eq!(reference.blacks, c.blacks);
    assert_eq!(reference.exposure_gain, c.exposure_gain);
}

// ============================================================================
// Individual stages
// ============================================================================

#[test]
fn test_stages_identity_at_zero() {
    let tuning = ShadowTuning::default();
    for &l in &[0.0, 0.002, 0.02, 0.18, 0.5, 0.95, 1.0, 1.4] {
        assert_eq!(apply_exposure(l, 1.0), l);
        assert_eq!(apply_highlights(l, 0.0), l);
        assert_eq!(apply_whites(l, 0.0), l);
        assert_eq!(apply_blacks(l, 0.0), l);
        assert_eq!(apply_contrast(l, 0.0), l);
        for algorithm in ToneAlgorithm::ALL {
            assert_eq!(algorithm.strategy().shadows(l, 0.0, &tuning), l);
        }
    }
}

#[test]
fn test_exposure_scales_linear() {
    assert!((apply_exposure(0.1, 2.0) - 0.2).abs() < 1e-7);
    assert!((apply_exposure(0.1, 0.5) - 0.05).abs() < 1e-7);
}

#[test]
fn test_shadows_lift_dark_values() {
    let tuning = ShadowTuning::default();
    for algorithm in ToneAlgorithm::ALL {
        let strategy = algorithm.strategy();
        for &l in &[0.003, 0.01, 0.03, 0.06] {
            let lifted = strategy.shadows(l, 0.7, &tuning);
            assert!(lifted > l, "{} did not lift {}: {}", algorithm, l, lifted);
        }
    }
}

#[test]
fn test_shadows_monotonic_in_amount() {
    let tuning = ShadowTuning::default();
    for algorithm in ToneAlgorithm::ALL {
        let strategy = algorithm.strategy();
        for &l in &[0.002, 0.01, 0.02, 0.05, 0.1] {
            let mut previous = l;
            for step in 1..=10 {
                let s = step as f32 / 10.0;
                let value = strategy.shadows(l, s, &tuning);
                assert!(
                    value >= previous - 1e-7,
                    "{}: l={} s={} went from {} to {}",
                    algorithm,
                    l,
                    s,
                    previous,
                    value
                );
                previous = value;
            }
        }
    }
}

#[test]
fn test_shadows_leave_bright_values() {
    let tuning = ShadowTuning::default();
    for algorithm in ToneAlgorithm::ALL {
        // Display ~0.9, above shadow_end and the midtone bump
        let l = 0.8;
        let value = algorithm.strategy().shadows(l, 1.0, &tuning);
        assert!((value - l).abs() < 1e-6, "{}: {}", algorithm, value);
    }
}

#[test]
fn test_negative_shadows_darken() {
    let tuning = ShadowTuning::default();
    let l = 0.03;
    for algorithm in ToneAlgorithm::ALL {
        let value = algorithm.strategy().shadows(l, -0.8, &tuning);
        assert!(value < l);
        assert!(value >= 0.0);
    }
}

#[test]
fn test_highlights_target_top_end() {
    let bright = apply_highlights(0.9, 0.5);
    let dark = apply_highlights(0.02, 0.5);
    assert!(bright > 0.9);
    assert!((dark - 0.02).abs() < 1e-5);
    assert!(apply_highlights(0.9, -0.5) < 0.9);
}

#[test]
fn test_whites_positive_may_exceed_one() {
    let value = apply_whites(0.8, 1.0);
    assert!(value > 0.8);
    assert!(apply_whites(1.0, 1.0) > 1.0);
}

#[test]
fn test_whites_negative_compress() {
    let value = apply_whites(0.8, -1.0);
    assert!(value < 0.8);
    assert!(value > 0.0);
    // Shadows barely move
    assert!((apply_whites(0.005, -1.0) - 0.005).abs() < 1e-4);
}

#[test]
fn test_blacks_crush_near_black() {
    let l = 0.02;
    let crushed = apply_blacks(l, -1.0);
    assert!(crushed < l, "blacks -100 should darken {}: {}", l, crushed);
    assert!(crushed >= 0.0);
}

#[test]
fn test_blacks_lift_floor() {
    let lifted = apply_blacks(0.0, 1.0);
    // Display floor raised to half the knee
    assert!((linear_to_srgb(lifted) - 0.11).abs() < 1e-4);
}

#[test]
fn test_blacks_ignore_values_above_knee() {
    for &l in &[0.2, 0.5, 1.0] {
        assert_eq!(apply_blacks(l, 1.0), l);
        assert_eq!(apply_blacks(l, -1.0), l);
    }
}

#[test]
fn test_contrast_pivots_on_mid_gray() {
    assert!((apply_contrast(CONTRAST_PIVOT, 0.8) - CONTRAST_PIVOT).abs() < 1e-7);
    assert!(apply_contrast(0.05, 0.5) < 0.05);
    assert!(apply_contrast(0.5, 0.5) > 0.5);
    assert!(apply_contrast(0.05, -0.5) > 0.05);
    assert!(apply_contrast(0.5, -0.5) < 0.5);
}

// ============================================================================
// Full chain
// ============================================================================

#[test]
fn test_tone_map_neutral_is_identity() {
    let tuning = ShadowTuning::default();
    let controls = neutral_controls();
    for algorithm in ToneAlgorithm::ALL {
        for &l in &[0.0, 0.001, 0.05, 0.18, 0.7, 1.0] {
            let mapped = algorithm.strategy().tone_map(l, &controls, &tuning);
            assert!((mapped - l).abs() < 1e-7);
        }
    }
}

#[test]
fn test_tone_map_never_negative() {
    let tuning = ShadowTuning::default();
    let controls = controls_with(|p| {
        p.exposure = -5.0;
        p.contrast = 100.0;
        p.shadows = -100.0;
        p.blacks = -100.0;
        p.whites = -100.0;
        p.highlights = -100.0;
    });
    for algorithm in ToneAlgorithm::ALL {
        for &l in &[0.0, 0.01, 0.3, 1.0] {
            let mapped = algorithm.strategy().tone_map(l, &controls, &tuning);
            assert!(mapped >= 0.0 && mapped.is_finite());
        }
    }
}

#[test]
fn test_exposure_runs_before_shadows() {
    // Pushing exposure first moves the value out of the shadow band
    let tuning = ShadowTuning::default();
    let strategy = ToneAlgorithm::Classic.strategy();
    let lift_only = controls_with(|p| p.shadows = 100.0);
    let with_exposure = controls_with(|p| {
        p.shadows = 100.0;
        p.exposure = 3.0;
    });
    let l = 0.08;
    let gain_without = strategy.tone_map(l, &lift_only, &tuning) / l;
    let pushed = l * 8.0;
    let gain_with = strategy.tone_map(l, &with_exposure, &tuning) / pushed;
    assert!(gain_without > gain_with);
}

// ============================================================================
// Toe masks, detail floors, post hooks
// ============================================================================

#[test]
fn test_toe_masks() {
    let classic = ToneAlgorithm::Classic.strategy();
    let review = ToneAlgorithm::Review.strategy();

    assert_eq!(classic.toe_mask(0.0), 1.0);
    assert_eq!(classic.toe_mask(0.12), 0.0);
    assert!(classic.toe_mask(0.06) > 0.0 && classic.toe_mask(0.06) < 1.0);

    assert_eq!(review.toe_mask(0.0), 1.0);
    assert_eq!(review.toe_mask(srgb_to_linear(0.4)), 0.0);
    assert!(review.toe_mask(0.05) > 0.0 && review.toe_mask(0.05) < 1.0);
}

#[test]
fn test_detail_floors() {
    assert_eq!(ToneAlgorithm::Classic.strategy().detail_floor(), 0.45);
    assert_eq!(ToneAlgorithm::Review.strategy().detail_floor(), 0.35);
}

#[test]
fn test_classic_post_hook_is_noop() {
    let controls = controls_with(|p| p.shadows = 100.0);
    let mut rgb = [0.01, 0.02, 0.005];
    ToneAlgorithm::Classic
        .strategy()
        .post_reconstruct(&mut rgb, 0.2, 1.0, &controls);
    assert_eq!(rgb, [0.01, 0.02, 0.005]);
}

#[test]
fn test_review_post_hook_needs_positive_shadows() {
    let strategy = ToneAlgorithm::Review.strategy();
    let mut rgb = [0.01, 0.02, 0.005];
    strategy.post_reconstruct(&mut rgb, 0.2, 1.0, &neutral_controls());
    assert_eq!(rgb, [0.01, 0.02, 0.005]);

    let negative = controls_with(|p| p.shadows = -50.0);
    strategy.post_reconstruct(&mut rgb, 0.2, 1.0, &negative);
    assert_eq!(rgb, [0.01, 0.02, 0.005]);
}

#[test]
fn test_review_post_hook_fills_and_desaturates() {
    let strategy = ToneAlgorithm::Review.strategy();
    let controls = controls_with(|p| p.shadows = 100.0);
    let original = [0.01f32, 0.02, 0.005];
    let mut rgb = original;
    let target = 0.1;

    strategy.post_reconstruct(&mut rgb, target, 1.0, &controls);

    let out = luminance(rgb[0], rgb[1], rgb[2]);
    assert!((out - target).abs() < 1e-5, "luminance {} vs {}", out, target);

    let spread_before = original[1] - original[2];
    let spread_after = rgb[1] - rgb[2];
    assert!(spread_after < spread_before);
    assert!(spread_after > 0.0);
}

#[test]
fn test_review_post_hook_keeps_bright_results() {
    // Already above target: nothing to fill, only the toe desaturation
    let strategy = ToneAlgorithm::Review.strategy();
    let controls = controls_with(|p| p.shadows = 100.0);
    let mut rgb = [0.3, 0.3, 0.3];
    strategy.post_reconstruct(&mut rgb, 0.1, 1.0, &controls);
    for channel in rgb {
        assert!((channel - 0.3).abs() < 1e-6);
    }
}

// ============================================================================
// Algorithm selection
// ============================================================================

#[test]
fn test_algorithm_names() {
    assert_eq!(ToneAlgorithm::Classic.as_str(), "classic");
    assert_eq!(ToneAlgorithm::Review.as_str(), "review");
    assert_eq!(ToneAlgorithm::Review.to_string(), "review");
    assert_eq!(ToneAlgorithm::default(), ToneAlgorithm::Classic);
}

#[test]
fn test_algorithm_parse() {
    assert_eq!(ToneAlgorithm::parse("review"), Some(ToneAlgorithm::Review));
    assert_eq!(ToneAlgorithm::parse(" Classic "), Some(ToneAlgorithm::Classic));
    assert_eq!(ToneAlgorithm::parse("REVIEW"), Some(ToneAlgorithm::Review));
    assert_eq!(ToneAlgorithm::parse("filmic"), None);
    assert_eq!(ToneAlgorithm::parse(""), None);
}

#[test]
fn test_unknown_algorithm_falls_back_to_classic() {
    assert_eq!(ToneAlgorithm::from_name("filmic"), ToneAlgorithm::Classic);
    assert_eq!(ToneAlgorithm::from("nonsense"), ToneAlgorithm::Classic);
    assert_eq!(
        ToneAlgorithm::from(String::from("Review")),
        ToneAlgorithm::Review
    );
}

#[test]
fn test_algorithm_serde() {
    let yaml = serde_yaml::to_string(&ToneAlgorithm::Review).unwrap();
    assert_eq!(yaml.trim(), "review");

    let parsed: ToneAlgorithm = serde_yaml::from_str("Review").unwrap();
    assert_eq!(parsed, ToneAlgorithm::Review);

    let fallback: ToneAlgorithm = serde_yaml::from_str("mystery").unwrap();
    assert_eq!(fallback, ToneAlgorithm::Classic);
}
