// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dense cell table and its lookups.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::address::{GridAddress, GridDimensions};
use crate::error::{GridError, Position};
use crate::record::InventoryRecord;
use crate::stats::{self, EightyTwentySplit, GridSummary, LevelStat, SkuShare};

/// Color reported by empty cells.
pub const EMPTY_CELL_COLOR: &str = "#333333";

/// A read-only view of one grid cell.
///
/// Borrowed from a [`CellStore`]; it cannot outlive the store, so it can never be
/// read against a rebuilt grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell<'a> {
    /// Where the cell sits.
    pub address: GridAddress,
    /// Dense linear index of the cell (per-instance slot for instanced drawing).
    pub index: usize,
    /// The record placed on this cell's level, if any.
    pub occupant: Option<&'a InventoryRecord>,
}

impl<'a> Cell<'a> {
    /// Whether no record occupies this cell.
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Draw color: the occupant's color, or [`EMPTY_CELL_COLOR`].
    pub fn color(&self) -> &'a str {
        self.occupant.map_or(EMPTY_CELL_COLOR, |r| r.color.as_str())
    }

    /// The occupant's SKU, if any.
    pub fn sku(&self) -> Option<&'a str> {
        self.occupant.map(|r| r.sku.as_str())
    }

    /// The 1-based level this cell sits on.
    pub const fn level(&self) -> u32 {
        self.address.level()
    }
}

/// Dense `x * y * z` cell table built from sparse records.
///
/// The store keeps its own copy of the input records (statistics are derived from
/// them) and one occupant slot per cell. It is immutable once built; a change of
/// records or dimensions means building a new store.
#[derive(Clone)]
pub struct CellStore {
    dims: GridDimensions,
    records: Vec<InventoryRecord>,
    // Occupant record index per cell, in linear-index order.
    slots: Vec<Option<usize>>,
    // First record index per Z-index.
    levels: Vec<Option<usize>>,
}

impl CellStore {
    /// Build the dense table for `dims` from `records`.
    ///
    /// The first record (in input order) whose level maps to a Z-index occupies every
    /// `(x, y)` position of that level. Records with levels outside `1..=dims.z` are
    /// ignored for placement.
    ///
    /// Fails with [`GridError::InvalidDimensions`] if any dimension is zero or the
    /// grid would exceed [`GridDimensions::MAX_CELLS`]; nothing is allocated then.
    pub fn build(records: &[InventoryRecord], dims: GridDimensions) -> Result<Self, GridError> {
        let total = dims
            .checked_cell_count()
            .ok_or(GridError::InvalidDimensions(dims))?;

        let mut levels = vec![None; dims.z as usize];
        for (i, record) in records.iter().enumerate() {
            match record.z_index(dims) {
                Some(z) => {
                    let slot = &mut levels[z as usize];
                    if slot.is_none() {
                        *slot = Some(i);
                    }
                }
                None => log::warn!(
                    "record {i} ({}) has level {} outside 1..={}; not placed",
                    record.sku,
                    record.level,
                    dims.z
                ),
            }
        }

        // Z is the minor axis of the linear index.
        let dim_z = dims.z as usize;
        let slots = (0..total).map(|idx| levels[idx % dim_z]).collect();

        let store = Self {
            dims,
            records: records.to_vec(),
            slots,
            levels,
        };
        log::debug!(
            "built {} cell store from {} records ({} of {} levels placed)",
            dims,
            records.len(),
            store.placed_level_count(),
            dims.z
        );
        Ok(store)
    }

    /// Dimensions this store was built for.
    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    /// The input records, in the order they were supplied.
    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    /// Number of cells (`x * y * z`).
    pub fn cell_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.placed_level_count() * self.dims.cells_per_level()
    }

    /// Number of levels that have an occupant.
    pub fn placed_level_count(&self) -> usize {
        self.levels.iter().filter(|l| l.is_some()).count()
    }

    /// The record placed on the given 1-based level, if any.
    pub fn occupant_of_level(&self, level: u32) -> Option<&InventoryRecord> {
        let z = level.checked_sub(1)? as usize;
        self.levels.get(z).copied().flatten().map(|i| &self.records[i])
    }

    /// Look a cell up by coordinate.
    pub fn cell_at(&self, addr: GridAddress) -> Result<Cell<'_>, GridError> {
        let idx = addr.to_index(self.dims)?;
        Ok(self.cell(idx, addr))
    }

    /// Look a cell up by dense linear index, e.g. an instance id from a picking engine.
    pub fn cell_by_linear_index(&self, idx: usize) -> Result<Cell<'_>, GridError> {
        if idx >= self.slots.len() {
            return Err(GridError::OutOfBounds {
                position: Position::Index(idx),
                dims: self.dims,
            });
        }
        Ok(self.cell(idx, self.dims.decode(idx)))
    }

    /// Iterate every cell in linear-index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> + Clone + '_ {
        self.dims
            .addresses()
            .enumerate()
            .map(move |(idx, addr)| self.cell(idx, addr))
    }

    /// Lazily iterate the cells whose address satisfies `predicate`.
    ///
    /// Results follow linear-index order. The iterator is finite and `Clone`, so a
    /// caller can restart it.
    ///
    /// ```rust
    /// use stockcube_grid::{CellStore, GridDimensions, InventoryRecord};
    ///
    /// let store = CellStore::build(&[InventoryRecord::new(1, "A", "red")], GridDimensions::new(3, 3, 2)).unwrap();
    /// // The row through y = 1 on the first level.
    /// let row: Vec<_> = store.cells_matching(|a| a.y == 1 && a.z == 0).collect();
    /// assert_eq!(row.len(), 3);
    /// ```
    pub fn cells_matching<'a, F>(
        &'a self,
        predicate: F,
    ) -> impl Iterator<Item = Cell<'a>> + Clone + 'a
    where
        F: Fn(GridAddress) -> bool + Clone + 'a,
    {
        self.cells().filter(move |c| predicate(c.address))
    }

    /// Unique-SKU counts per level, from the input records.
    pub fn all_level_stats(&self) -> Vec<LevelStat> {
        stats::per_level_distribution(&self.records)
    }

    /// The 80/20 depth split over this store's levels.
    pub fn eighty_twenty_split(&self) -> EightyTwentySplit {
        stats::eighty_twenty_split(&self.records, self.dims.z)
    }

    /// Occurrences of each SKU across the input records.
    pub fn sku_distribution(&self) -> Vec<SkuShare> {
        stats::sku_distribution(&self.records)
    }

    /// Headline figures for this grid.
    pub fn summary(&self) -> GridSummary {
        GridSummary::new(self.dims, &self.records)
    }

    fn cell(&self, idx: usize, address: GridAddress) -> Cell<'_> {
        Cell {
            address,
            index: idx,
            occupant: self.slots[idx].map(|i| &self.records[i]),
        }
    }
}

impl Debug for CellStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CellStore")
            .field("dims", &self.dims)
            .field("records", &self.records.len())
            .field("cells", &self.slots.len())
            .field("placed_levels", &self.placed_level_count())
            .finish_non_exhaustive()
    }
}
