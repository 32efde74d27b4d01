//! Per-frame sampling cost of the hero choreography.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orbita_choreo::{sample, SampleInput, TimelinePreset};
use orbita_core::ViewportMetrics;

fn bench_sample(c: &mut Criterion) {
    let timeline = TimelinePreset::hero_logo();
    let viewport = ViewportMetrics::new(1280.0, 720.0);

    c.bench_function("sample_hero_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0_f32;
            for step in 0..=100 {
                let input = SampleInput {
                    progress: step as f32 / 100.0,
                    elapsed: 2.0,
                    viewport,
                    base_scale: 1.0,
                    spin_handoff: None,
                };
                acc += sample(black_box(&timeline), black_box(&input)).scale;
            }
            acc
        })
    });
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
