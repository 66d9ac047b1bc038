// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use collage_items::{ItemRegistry, ItemSpec, SortKey};
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;

fn registry_of(count: usize) -> ItemRegistry {
    let mut registry = ItemRegistry::new();
    for i in 0..count {
        let id = registry.insert(ItemSpec::new(100.0, 100.0).with_path(&format!("/m/{:05}.jpg", (i * 7919) % count)));
        if let Some(item) = registry.get_mut(id) {
            item.set_position(Point::new(i as f64 * 1.05, 0.5));
        }
    }
    registry
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/hit_test");
    for count in [128usize, 2_048, 16_384] {
        let registry = registry_of(count);
        let width = count as f64 * 1.05;
        group.throughput(Throughput::Elements(count as u64));
        // Worst case: the bottom-most item, found last by the top-down scan.
        group.bench_with_input(BenchmarkId::new("bottom", count), &registry, |b, registry| {
            b.iter(|| black_box(registry.hit_test(Point::new(0.0, 0.5), width, true)));
        });
    }
    group.finish();
}

fn bench_select_and_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/mutate");
    for count in [128usize, 2_048, 16_384] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("select_all", count), &count, |b, &count| {
            b.iter_batched(
                || registry_of(count),
                |mut registry| {
                    registry.select_all();
                    black_box(registry);
                },
                BatchSize::LargeInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("sort_by_name", count), &count, |b, &count| {
            b.iter_batched(
                || registry_of(count),
                |mut registry| {
                    registry.sort_by(SortKey::FileName);
                    black_box(registry);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hit_test, bench_select_and_sort);
criterion_main!(benches);
