//! Scan throughput per level on mixed emoji text

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use emoseq_core::{EmojiPattern, Level};
use std::hint::black_box;

/// Generate text of roughly `size_kb` kilobytes with every sequence kind
fn generate_text(size_kb: usize) -> String {
    let base_text = "Good morning 😴 to 🇵🇹 and 🏴\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}! \
                     Keycap 2\u{FE0F}\u{20E3}, 🤾🏽\u{200D}♀\u{FE0F} plays, 🤠\u{200D}🤢 is sick. ▶ next. ";
    let target_size = size_kb * 1024;
    let mut text = base_text.repeat(target_size / base_text.len() + 1);
    let mut cut = target_size.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

fn bench_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_by_level");
    let text = generate_text(64);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for level in Level::ALL {
        let pattern = EmojiPattern::embedded(level).unwrap();
        group.bench_with_input(BenchmarkId::new("level", level), &text, |b, text| {
            b.iter(|| pattern.find_iter(black_box(text)).count());
        });
    }

    group.finish();
}

fn bench_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_by_size");
    let pattern = EmojiPattern::recommended().unwrap();

    for size_kb in [1, 16, 256] {
        let text = generate_text(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("recommended", format!("{size_kb}KB")),
            &text,
            |b, text| b.iter(|| pattern.scan(black_box(text))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_levels, bench_sizes);
criterion_main!(benches);
