//! Benchmarks for pixel operations.
//!
//! Run with: `cargo bench` (add `--features parallel` for the rayon path)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use retouch_color::{ColorSample, contrast, rgb_to_lab};
use retouch_core::PixelBuffer;
use retouch_ops::filter::{Kernel, convolve};
use retouch_ops::resize::resize;
use retouch_ops::{Histogram, ToneCurve};

fn test_image(size: u32) -> PixelBuffer {
    PixelBuffer::from_fn(size, size, |x, y| [x as u8, y as u8, (x ^ y) as u8, 255])
        .expect("bench image")
}

/// Nearest-neighbor resize, half and double size.
fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");

    for size in [256u32, 1024].iter() {
        let img = test_image(*size);
        group.throughput(Throughput::Elements((*size as u64).pow(2)));

        group.bench_with_input(BenchmarkId::new("half", size), &img, |b, img| {
            b.iter(|| resize(black_box(img), size / 2, size / 2))
        });
        group.bench_with_input(BenchmarkId::new("double", size), &img, |b, img| {
            b.iter(|| resize(black_box(img), size * 2, size * 2))
        });
    }

    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    for size in [256u32, 1024].iter() {
        let img = test_image(*size);
        group.throughput(Throughput::Elements((*size as u64).pow(2)));
        group.bench_with_input(BenchmarkId::new("compute", size), &img, |b, img| {
            b.iter(|| Histogram::compute(black_box(img)))
        });
    }

    group.finish();
}

fn bench_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve");
    let curve = ToneCurve::new((30, 10).into(), (220, 240).into()).expect("valid curve");

    group.bench_function("lut", |b| b.iter(|| black_box(&curve).lut()));

    for size in [256u32, 1024].iter() {
        let img = test_image(*size);
        group.throughput(Throughput::Elements((*size as u64).pow(2)));
        group.bench_with_input(BenchmarkId::new("apply", size), &img, |b, img| {
            b.iter(|| curve.apply(black_box(img)))
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let img = test_image(512);
    group.throughput(Throughput::Elements(512 * 512));

    for name in ["box", "gaussian", "sharpen"] {
        let kernel = Kernel::by_name(name).expect("preset");
        group.bench_function(name, |b| b.iter(|| convolve(black_box(&img), &kernel)));
    }

    group.finish();
}

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");
    let colors: Vec<[u8; 3]> = (0..=255u8).map(|v| [v, 255 - v, v / 2]).collect();
    group.throughput(Throughput::Elements(colors.len() as u64));

    group.bench_function("rgb_to_lab", |b| {
        b.iter(|| colors.iter().map(|&c| rgb_to_lab(black_box(c))).collect::<Vec<_>>())
    });
    group.bench_function("contrast", |b| {
        let white = ColorSample::new(255, 255, 255);
        b.iter(|| {
            colors
                .iter()
                .map(|&c| contrast::evaluate(&ColorSample::from_rgb(black_box(c)), &white))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_resize,
    bench_histogram,
    bench_curve,
    bench_filter,
    bench_color,
);
criterion_main!(benches);
