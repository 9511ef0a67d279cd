#![deny(warnings)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use turrell::*;

fn paint_benchmark(c: &mut Criterion) {
    let config = Config::default();
    let circle = TurrellCircle::from_config(&config);
    let mut group = c.benchmark_group("paint");
    group
        .throughput(Throughput::Elements(1))
        .bench_function("inner", |b| {
            b.iter(|| circle.at(black_box(Point::new(400.0, 400.0))))
        })
        .bench_function("gradient", |b| {
            b.iter(|| circle.at(black_box(Point::new(600.0, 500.0))))
        })
        .bench_function("background", |b| {
            b.iter(|| circle.at(black_box(Point::new(0.0, 0.0))))
        });
    group.finish();
}

fn render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for size in [64u32, 256, 800] {
        let config = Config {
            width: size,
            height: size,
            ..Config::default()
        };
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("render", size), &config, |b, config| {
            b.iter_with_large_drop(|| render(config))
        });
        let image = render(&config);
        group.bench_with_input(BenchmarkId::new("png", size), &image, |b, image| {
            b.iter(|| {
                let mut out = Vec::new();
                write_png(image, &mut out).expect("failed to encode png");
                out
            })
        });
    }
    group.finish();
}

criterion_group!(benches, paint_benchmark, render_benchmark);
criterion_main!(benches);
