//! Benchmark for colorization and histogram analysis.
//!
//! TARGET: a 256×256 field colorized and analyzed well under 1ms
//!
//! Run with: cargo bench --package noisefield_rendering --bench color_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use noisefield_rendering::{ColorMap, GradientLut, Histogram, HistogramPanel, PixelBuffer};

const SIZE: usize = 256;

fn field() -> Vec<f32> {
    (0..SIZE * SIZE)
        .map(|i| ((i * 7919) % 1024) as f32 / 1024.0)
        .collect()
}

fn benchmark_palette(c: &mut Criterion) {
    let map = ColorMap::blue();

    c.bench_function("palette_map_direct", |b| {
        let mut v = 0.0f32;
        b.iter(|| {
            v = (v + 0.013) % 1.0;
            black_box(map.map(black_box(v)))
        });
    });

    c.bench_function("lut_build", |b| {
        b.iter(|| black_box(GradientLut::build(black_box(&map))));
    });
}

fn benchmark_field(c: &mut Criterion) {
    let values = field();
    let lut = GradientLut::build(&ColorMap::blue());

    let mut group = c.benchmark_group("field_256x256");
    group.throughput(Throughput::Elements((SIZE * SIZE) as u64));

    group.bench_function("colorize", |b| {
        let mut pixels = PixelBuffer::new(SIZE, SIZE);
        b.iter(|| {
            lut.colorize(black_box(&values), &mut pixels)
                .expect("matching sizes");
            black_box(pixels.as_bytes().len())
        });
    });

    group.bench_function("histogram", |b| {
        let mut histogram = Histogram::new(SIZE).expect("valid bins");
        b.iter(|| {
            histogram.recount(black_box(&values));
            black_box(histogram.max())
        });
    });

    group.bench_function("histogram_panel", |b| {
        let histogram = Histogram::analyze(&values, SIZE).expect("valid bins");
        let panel = HistogramPanel::new(&ColorMap::blue(), SIZE, SIZE);
        let mut out = panel.buffer();
        b.iter(|| {
            panel.render(black_box(&histogram), &mut out)
                .expect("matching sizes");
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_palette, benchmark_field);
criterion_main!(benches);
