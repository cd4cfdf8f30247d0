//! Benchmarks for shadowlift-core engine stages
//!
//! Run with: cargo bench -p shadowlift-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shadowlift_core::analysis::ShadowTuning;
use shadowlift_core::filters::{box_filter, guided_filter};
use shadowlift_core::models::{RgbaImage, ToneParams};
use shadowlift_core::pipeline::{process_image, EngineOptions};
use shadowlift_core::tone::ToneAlgorithm;

/// Synthetic dark scene: a low-key gradient with a bright window
fn generate_test_image(width: u32, height: u32) -> RgbaImage {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let fx = x as f32 / width as f32;
            let fy = y as f32 / height as f32;
            let window = fx > 0.6 && fx < 0.8 && fy > 0.2 && fy < 0.5;
            let base = if window { 230.0 } else { 8.0 + 40.0 * fx * fy };
            let v = base as u8;
            data.extend_from_slice(&[v, v.saturating_add(3), v.saturating_sub(2), 255]);
        }
    }
    RgbaImage::new(width, height, data).unwrap()
}

/// Synthetic luminance plane
fn generate_test_plane(width: usize, height: usize) -> Vec<f32> {
    (0..width * height)
        .map(|i| {
            let x = (i % width) as f32 / width as f32;
            let y = (i / width) as f32 / height as f32;
            0.02 + 0.3 * x * y
        })
        .collect()
}

/// Benchmark the filters that build the base layer
fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");

    for size in [256usize, 512, 1024].iter() {
        let plane = generate_test_plane(*size, *size);
        group.throughput(Throughput::Elements((*size * *size) as u64));

        group.bench_with_input(
            BenchmarkId::new("box_filter_r8", format!("{}x{}", size, size)),
            size,
            |b, &s| b.iter(|| box_filter(black_box(&plane), s, s, 8)),
        );

        group.bench_with_input(
            BenchmarkId::new("guided_filter_r8", format!("{}x{}", size, size)),
            size,
            |b, &s| b.iter(|| guided_filter(black_box(&plane), s, s, 8, 1e-3)),
        );
    }

    group.finish();
}

/// Benchmark histogram tuning
fn bench_tuning(c: &mut Criterion) {
    let plane = generate_test_plane(1024, 1024);
    c.bench_function("shadow_tuning_1024x1024", |b| {
        b.iter(|| ShadowTuning::from_base_layer(black_box(&plane)))
    });
}

/// Benchmark the full engine for both algorithms
fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_image");
    let params = ToneParams::default_preset();
    let options = EngineOptions::default();

    for size in [256u32, 1024].iter() {
        let image = generate_test_image(*size, *size);
        group.throughput(Throughput::Elements((*size * *size) as u64));

        for algorithm in ToneAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.as_str(), format!("{}x{}", size, size)),
                &image,
                |b, img| {
                    b.iter(|| {
                        process_image(black_box(img), &params, algorithm, &options).unwrap()
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_filters, bench_tuning, bench_process);
criterion_main!(benches);
