// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use collage_items::{ItemRegistry, ItemSpec};
use collage_layout::{LayoutEnv, LayoutFactory, LayoutKind, ViewExtent};
use collage_scene::SceneManager;
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

fn registry_of(count: usize) -> ItemRegistry {
    let mut registry = ItemRegistry::new();
    for i in 0..count {
        // Mix of landscape, portrait and square media.
        let (w, h) = match i % 3 {
            0 => (1600.0, 900.0),
            1 => (900.0, 1600.0),
            _ => (1000.0, 1000.0),
        };
        registry.insert(ItemSpec::new(w, h));
    }
    registry
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/full");
    let Ok(scene) = SceneManager::scr_wall() else {
        return;
    };
    let env = LayoutEnv::new(&scene, ViewExtent::new(16.0));

    for count in [12usize, 48, 512] {
        group.throughput(Throughput::Elements(count as u64));
        for kind in LayoutKind::ALL {
            // 12 projectors hold at most four items each.
            if kind == LayoutKind::SmartSingle && count > 48 {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(kind.name(), count), &count, |b, &count| {
                let mut factory = LayoutFactory::with_seed(17);
                factory.set_layout_manager(kind);
                let mut check = registry_of(count);
                assert!(
                    factory.layout(check.items_mut(), &env, 0).is_ok(),
                    "{kind} failed on {count} items"
                );
                b.iter_batched(
                    || registry_of(count),
                    |mut registry| {
                        let result = factory.layout(registry.items_mut(), &env, 0);
                        black_box((result, registry));
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_incremental_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/append");
    let Ok(scene) = SceneManager::single_display(1920, 1080) else {
        return;
    };
    let env = LayoutEnv::new(&scene, ViewExtent::from_window(1920, 1080));

    // Appending a small batch to a long row only places the batch.
    for existing in [64usize, 1_024, 8_192] {
        group.bench_with_input(
            BenchmarkId::new("simple_double", existing),
            &existing,
            |b, &existing| {
                let mut factory = LayoutFactory::new();
                factory.set_layout_manager(LayoutKind::SimpleDouble);
                let mut check = registry_of(existing + 8);
                assert!(
                    factory.layout(check.items_mut(), &env, existing).is_ok(),
                    "append after {existing} items failed"
                );
                b.iter_batched(
                    || registry_of(existing + 8),
                    |mut registry| {
                        let result = factory.layout(registry.items_mut(), &env, existing);
                        black_box((result, registry));
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_incremental_load);
criterion_main!(benches);
