// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stockcube Grid: a dense 3D warehouse cell grid built from sparse inventory records.
//!
//! Stockcube Grid is the data half of a warehouse cube viewer.
//!
//! - Map a flat list of [`InventoryRecord`]s (`level`, `sku`, `color`) onto a dense
//!   `x × y × z` table of [`Cell`]s.
//! - Look cells up in O(1) by [`GridAddress`] or by dense linear index (the identity a
//!   picking engine hands back for an instanced mesh).
//! - Derive descriptive statistics from the same records: unique SKUs per level,
//!   an 80/20 split by depth, and per-SKU shares.
//!
//! It does not render anything and does not know about cameras.
//! Higher layers (like a selection controller or a renderer) read cells from here.
//!
//! # Placement rule
//!
//! Level `L` maps to Z-index `L - 1`. For each Z-index, the first record in input order
//! whose level matches wins, and that record occupies every `(x, y)` position of the
//! level. Records whose level falls outside `1..=z` are kept for statistics but never
//! placed.
//!
//! # Example
//!
//! ```rust
//! use stockcube_grid::{CellStore, GridAddress, GridDimensions, InventoryRecord};
//!
//! let records = vec![
//!     InventoryRecord::new(1, "SKU-3821", "orange"),
//!     InventoryRecord::new(1, "SKU-7462", "orange"),
//!     InventoryRecord::new(3, "SKU-5287", "yellow"),
//! ];
//! let store = CellStore::build(&records, GridDimensions::new(2, 2, 4)).unwrap();
//! assert_eq!(store.cell_count(), 16);
//!
//! // First record on level 1 wins, at every (x, y).
//! let cell = store.cell_at(GridAddress::new(1, 0, 0)).unwrap();
//! assert_eq!(cell.sku(), Some("SKU-3821"));
//!
//! // Level 2 has no record.
//! assert!(store.cell_at(GridAddress::new(0, 1, 1)).unwrap().is_empty());
//!
//! // Statistics come from the input records, not from placement.
//! let stats = store.all_level_stats();
//! assert_eq!(stats[0].unique_skus, 2);
//! ```
//!
//! ## Linear index
//!
//! Addresses are encoded x-major, y-mid, z-minor:
//! `index = x * dim_y * dim_z + y * dim_z + z`.
//! [`GridAddress::to_index`] and [`GridAddress::from_index`] are exact inverses.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod address;
pub mod error;
pub mod record;
pub mod stats;
pub mod store;

pub use address::{GridAddress, GridDimensions};
pub use error::{GridError, Position};
pub use record::InventoryRecord;
pub use stats::{EightyTwentySplit, GridSummary, LevelRange, LevelStat, SkuShare};
pub use store::{Cell, CellStore, EMPTY_CELL_COLOR};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn build_lookup_and_stats_agree() {
        let records = vec![
            InventoryRecord::new(1, "A", "red"),
            InventoryRecord::new(1, "A", "red"),
            InventoryRecord::new(2, "B", "blue"),
        ];
        let store = CellStore::build(&records, GridDimensions::new(3, 3, 2)).unwrap();
        assert_eq!(store.cell_count(), 18);
        assert_eq!(store.occupied_count(), 18);

        let idx = GridAddress::new(2, 1, 1)
            .to_index(store.dimensions())
            .unwrap();
        let cell = store.cell_by_linear_index(idx).unwrap();
        assert_eq!(cell.sku(), Some("B"));

        let stats = store.all_level_stats();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].percentage, "50.0");
    }
}
