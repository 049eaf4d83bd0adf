use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use meme_core::{PositionId, SizeClass};
use meme_layout::{fit, layout_block, wrap};
use meme_text::{FontHandle, FontResolver};

const CAPTION: &str = "WHEN YOU FINALLY FIX THE BUG BUT HAVE NO IDEA WHY IT WORKS NOW";

fn bench_wrap(c: &mut Criterion) {
    let mut font = FontResolver::default().resolve();
    c.bench_function("wrap_caption_48px", |b| {
        b.iter(|| wrap(&mut font, black_box(CAPTION), 48, 450));
    });
}

fn bench_fit_large(c: &mut Criterion) {
    let mut font = FontResolver::default().resolve();
    c.bench_function("fit_large_1000x1000", |b| {
        b.iter(|| fit(&mut font, black_box(CAPTION), SizeClass::Large, 1000, 1000));
    });
}

fn bench_fit_overflow(c: &mut Criterion) {
    // Worst case: every size step is tried.
    let mut font = FontResolver::default().resolve();
    let text = CAPTION.repeat(6);
    c.bench_function("fit_overflow_to_floor", |b| {
        b.iter(|| fit(&mut font, black_box(&text), SizeClass::Large, 1200, 1200));
    });
}

fn bench_layout_all_positions(c: &mut Criterion) {
    let mut font = FontHandle::fallback();
    c.bench_function("layout_all_positions_bitmap", |b| {
        b.iter(|| {
            for position in PositionId::ALL {
                black_box(layout_block(
                    &mut font,
                    CAPTION,
                    position,
                    SizeClass::Auto,
                    800,
                    600,
                ));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_wrap,
    bench_fit_large,
    bench_fit_overflow,
    bench_layout_all_positions,
);
criterion_main!(benches);
