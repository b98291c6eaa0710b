// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a cell grid from sample records and print its statistics.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p stockcube_demos --example grid_basics`

use stockcube_grid::{CellStore, GridAddress, GridDimensions, InventoryRecord};

fn sample_records() -> Vec<InventoryRecord> {
    [
        (1, "SKU-3821", "orange"),
        (1, "SKU-7462", "orange"),
        (2, "SKU-1938", "yellow"),
        (3, "SKU-5287", "yellow"),
        (4, "SKU-6173", "yellow"),
        (5, "SKU-2946", "teal"),
        (6, "SKU-9841", "teal"),
        (7, "SKU-7634", "purple"),
        (8, "SKU-3152", "brown"),
        (9, "SKU-8409", "brown"),
        (10, "SKU-2093", "brown"),
        (11, "SKU-6754", "lime"),
        (12, "SKU-1587", "lime"),
        (13, "SKU-9025", "lime"),
        (14, "SKU-4310", "lime"),
        (15, "SKU-7246", "lime"),
        (16, "SKU-7246", "lime"),
        (16, "SKU-1111", "lime"),
    ]
    .into_iter()
    .map(|(level, sku, color)| InventoryRecord::new(level, sku, color))
    .collect()
}

fn main() {
    env_logger::init();

    let records = sample_records();
    let store = CellStore::build(&records, GridDimensions::new(10, 10, 16)).unwrap();

    let summary = store.summary();
    println!("== Grid ==");
    println!(
        "  {} | {} cells | {} per level | {} records | {} occupied",
        summary.dimensions,
        summary.total_cells,
        summary.cells_per_level,
        summary.record_count,
        store.occupied_count()
    );

    println!("== Unique SKUs per level ==");
    for stat in store.all_level_stats() {
        println!(
            "  L{:<3} {:>2} SKUs  {:>5}%",
            stat.level, stat.unique_skus, stat.percentage
        );
    }

    let split = store.eighty_twenty_split();
    println!("== 80/20 ==");
    println!(
        "  {}: {} SKUs | {}: {} SKUs",
        split.top_levels, split.top_unique_skus, split.bottom_levels, split.bottom_unique_skus
    );

    println!("== SKU distribution (top 5) ==");
    for share in store.sku_distribution().iter().take(5) {
        println!("  {:<9} {} ({}%)", share.sku, share.count, share.percentage);
    }

    // Level 16 has two records; the first one wins everywhere on that level.
    let cell = store.cell_at(GridAddress::new(4, 7, 15)).unwrap();
    assert_eq!(cell.sku(), Some("SKU-7246"));
    println!("== Cell {} ==\n  {:?} {}", cell.address, cell.sku(), cell.color());
}
