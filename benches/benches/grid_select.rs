// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::Vec3;
use stockcube_grid::{CellStore, GridAddress, GridDimensions, InventoryRecord, stats};
use stockcube_select::adapters::ray_cast::{CellLayout, PickRay, RayCaster};
use stockcube_select::emphasis::emphasis_weight;
use stockcube_select::pick::ResolvePick;
use stockcube_select::types::Axis;
use stockcube_select::view::WarehouseView;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

const COLORS: [&str; 6] = ["orange", "yellow", "teal", "purple", "brown", "lime"];

/// `count` records spread over levels `1..=levels + 2`, so some fall outside the grid.
fn gen_records(count: usize, levels: u32, skus: u64) -> Vec<InventoryRecord> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let level = rng.below(u64::from(levels) + 2) as i32 + 1;
            let sku = format!("SKU-{:04}", rng.below(skus));
            let color = COLORS[rng.below(COLORS.len() as u64) as usize];
            InventoryRecord::new(level, sku, color)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for dims in [
        GridDimensions::new(10, 10, 16),
        GridDimensions::new(20, 20, 30),
    ] {
        let records = gen_records(2_000, dims.z, 500);
        group.throughput(Throughput::Elements(dims.cell_count() as u64));
        group.bench_function(format!("store_{}x{}x{}", dims.x, dims.y, dims.z), |b| {
            b.iter(|| black_box(CellStore::build(&records, dims).unwrap()));
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let dims = GridDimensions::new(20, 20, 30);
    let store = CellStore::build(&gen_records(2_000, dims.z, 500), dims).unwrap();
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let addrs: Vec<_> = (0..1_000)
        .map(|_| {
            GridAddress::new(
                rng.below(u64::from(dims.x)) as u32,
                rng.below(u64::from(dims.y)) as u32,
                rng.below(u64::from(dims.z)) as u32,
            )
        })
        .collect();
    group.throughput(Throughput::Elements(addrs.len() as u64));
    group.bench_function("cell_at", |b| {
        b.iter(|| {
            let occupied = addrs
                .iter()
                .filter(|&&a| !store.cell_at(a).unwrap().is_empty())
                .count();
            black_box(occupied);
        });
    });
    group.bench_function("cell_by_linear_index", |b| {
        b.iter(|| {
            let occupied = (0..addrs.len())
                .filter(|&i| !store.cell_by_linear_index(i * 7).unwrap().is_empty())
                .count();
            black_box(occupied);
        });
    });
    group.bench_function("row_query", |b| {
        b.iter(|| black_box(store.cells_matching(|a| a.y == 3 && a.z == 7).count()));
    });
    group.finish();
}

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");
    let records = gen_records(5_000, 30, 800);
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("per_level_distribution", |b| {
        b.iter(|| black_box(stats::per_level_distribution(&records)));
    });
    group.bench_function("eighty_twenty_split", |b| {
        b.iter(|| black_box(stats::eighty_twenty_split(&records, 30)));
    });
    group.bench_function("sku_distribution", |b| {
        b.iter(|| black_box(stats::sku_distribution(&records)));
    });
    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let dims = GridDimensions::new(20, 20, 30);
    let records = gen_records(2_000, dims.z, 500);
    group.throughput(Throughput::Elements(dims.cell_count() as u64));
    group.bench_function("visuals_highlighted", |b| {
        b.iter_batched(
            || {
                let mut view = WarehouseView::new(&records, dims).unwrap();
                view.select_cell(GridAddress::new(10, 10, 15)).unwrap();
                view.highlight_axis(Axis::X).unwrap();
                view
            },
            |view| {
                let total: f32 = view.frame().map(|v| v.weight).sum();
                black_box(total);
            },
            BatchSize::SmallInput,
        );
    });
    let store = CellStore::build(&records, dims).unwrap();
    let view = WarehouseView::new(&records, dims).unwrap();
    group.bench_function("emphasis_weight_idle", |b| {
        b.iter(|| {
            let total: f32 = store
                .cells()
                .map(|c| emphasis_weight(&c, view.selection().state()))
                .sum();
            black_box(total);
        });
    });
    group.finish();
}

fn bench_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick");
    for dims in [
        GridDimensions::new(10, 10, 16),
        GridDimensions::new(20, 20, 30),
    ] {
        let caster = RayCaster::new(CellLayout::default(), dims);
        let ray = PickRay::new(Vec3::new(-40.0, 60.0, 40.0), Vec3::new(1.0, -1.2, -1.0));
        group.throughput(Throughput::Elements(dims.cell_count() as u64));
        group.bench_function(format!("ray_cast_{}x{}x{}", dims.x, dims.y, dims.z), |b| {
            b.iter(|| black_box(caster.resolve_pick(&ray)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_lookup,
    bench_stats,
    bench_frame,
    bench_pick,
);
criterion_main!(benches);
