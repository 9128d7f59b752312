//! Benchmarks for markup rendering.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mcformat::markup::{RenderOptions, ResetMode, render, render_with};
use mcformat::ui::preview::styled_lines;

fn sample(lines: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        text.push_str(&format!("&{:x}Line {i} &lbold &othen&r plain §k§mmagic\n", i % 16));
    }
    text
}

fn bench_render(c: &mut Criterion) {
    let text = sample(500);
    c.bench_function("render_tracked", |b| b.iter(|| render(black_box(&text))));

    let legacy = RenderOptions {
        reset: ResetMode::Legacy,
        ..RenderOptions::default()
    };
    c.bench_function("render_legacy", |b| {
        b.iter(|| render_with(black_box(&text), legacy))
    });
}

fn bench_preview(c: &mut Criterion) {
    let text = sample(500);
    c.bench_function("styled_lines", |b| b.iter(|| styled_lines(black_box(&text))));
}

criterion_group!(benches, bench_render, bench_preview);
criterion_main!(benches);
