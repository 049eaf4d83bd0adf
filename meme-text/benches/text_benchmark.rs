use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use meme_text::{FontHandle, FontResolver, Measure};

fn bench_resolve(c: &mut Criterion) {
    let resolver = FontResolver::default();
    c.bench_function("resolve_font", |b| {
        b.iter(|| black_box(resolver.resolve()));
    });
}

fn bench_measure_words(c: &mut Criterion) {
    let mut font = FontResolver::default().resolve();
    let words = ["ONE", "DOES", "NOT", "SIMPLY", "WALK", "INTO", "MORDOR"];

    c.bench_function("measure_words_memoized", |b| {
        b.iter(|| {
            for word in words {
                black_box(font.measure(black_box(64), word));
            }
        });
    });
}

fn bench_rasterize_line(c: &mut Criterion) {
    let mut font = FontResolver::default().resolve();
    c.bench_function("rasterize_line_64px", |b| {
        b.iter(|| black_box(font.rasterize(64, black_box("ONE DOES NOT SIMPLY"))));
    });
}

fn bench_rasterize_bitmap(c: &mut Criterion) {
    let mut font = FontHandle::fallback();
    c.bench_function("rasterize_line_bitmap", |b| {
        b.iter(|| black_box(font.rasterize(16, black_box("ONE DOES NOT SIMPLY"))));
    });
}

criterion_group!(
    benches,
    bench_resolve,
    bench_measure_words,
    bench_rasterize_line,
    bench_rasterize_bitmap,
);
criterion_main!(benches);
