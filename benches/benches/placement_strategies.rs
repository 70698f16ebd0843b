// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use boothplan_floor::{ColorTag, FloorPlan, PlacementStrategy, RandomProbe, ShelfPacker};
use boothplan_geom::{Size, Surface};

const COLOR: ColorTag = ColorTag::new(0x777777);

// Fill a plan with `count` booths using the given strategy; the surface is
// sized so every placement succeeds for both strategies.
fn fill<S: PlacementStrategy>(strategy: &mut S, surface: Surface, count: usize) -> FloorPlan {
    let mut plan = FloorPlan::new();
    for _ in 0..count {
        plan.place(strategy, surface, Size::new(40, 30), COLOR)
            .expect("surface sized to fit every booth");
    }
    plan
}

fn bench_fill(c: &mut Criterion) {
    // Generous surface (roughly 4x the blocked area at 256 booths) so the
    // random probe stays far from its attempt budget.
    let surface = Surface::new(2560, 1920);
    for &count in &[16_usize, 64, 256] {
        let mut group = c.benchmark_group(format!("fill/{count}"));
        group.throughput(Throughput::Elements(count as u64));

        group.bench_function("random_probe", |b| {
            b.iter_batched(
                || RandomProbe::with_seed(0xb007),
                |mut probe| black_box(fill(&mut probe, surface, count)),
                BatchSize::SmallInput,
            );
        });

        group.bench_function("shelf_packer", |b| {
            b.iter_batched(
                ShelfPacker::new,
                |mut shelf| black_box(fill(&mut shelf, surface, count)),
                BatchSize::SmallInput,
            );
        });

        group.finish();
    }
}

fn bench_overlap_query(c: &mut Criterion) {
    let surface = Surface::new(2000, 2000);
    let mut shelf = ShelfPacker::new();
    let plan = fill(&mut shelf, surface, 512);

    c.bench_function("overlaps_existing/512", |b| {
        let probe = boothplan_geom::Aabb::new(900, 900, 940, 930);
        b.iter(|| black_box(plan.overlaps_existing(black_box(probe))));
    });
}

criterion_group!(benches, bench_fill, bench_overlap_query);
criterion_main!(benches);
