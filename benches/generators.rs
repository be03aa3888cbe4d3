// Criterion benchmarks for the variant generators.
//
// Run:
//   cargo bench --bench generators

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use mailvariant_worker::domain::PlusParams;
use mailvariant_worker::service::{generate_dot_variants, generate_plus_variants};

/// Full space of a 10-character local-part (512 variants).
fn bench_dot_full_space(c: &mut Criterion) {
    c.bench_function("dot_full_space_10", |b| {
        b.iter(|| {
            generate_dot_variants(black_box("johnsmith1"), black_box("gmail.com"), 1000)
        });
    });
}

/// A 40-character local-part capped at 500; must not depend on the 2^39 space.
fn bench_dot_capped_long(c: &mut Criterion) {
    let local = "abcdefghij".repeat(4);
    c.bench_function("dot_capped_40", |b| {
        b.iter(|| generate_dot_variants(black_box(&local), black_box("gmail.com"), 500));
    });
}

/// Counter range with overlapping custom tags.
fn bench_plus_range_with_tags(c: &mut Criterion) {
    let tags: Vec<String> = (0..100)
        .map(|i| format!("tag{i}"))
        .chain((1..=50).map(|i| i.to_string()))
        .collect();
    let params = PlusParams::range(1, 500, tags);
    c.bench_function("plus_range_500_tags_150", |b| {
        b.iter(|| {
            generate_plus_variants(black_box("john"), black_box("biz.com"), black_box(&params))
        });
    });
}

criterion_group!(
    benches,
    bench_dot_full_space,
    bench_dot_capped_long,
    bench_plus_range_with_tags
);
criterion_main!(benches);
