// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse inventory input.

use alloc::string::String;

use crate::address::GridDimensions;

/// One occupancy record: a SKU stored on a warehouse level.
///
/// Records are validated upstream (all three fields present, numeric level), so the
/// grid accepts any value here. Levels below 1 or above the grid's Z extent are kept
/// for statistics but never placed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InventoryRecord {
    /// 1-based warehouse level.
    pub level: i32,
    /// Stock-keeping unit identifier.
    pub sku: String,
    /// CSS color or named color used to draw the occupied cells.
    pub color: String,
}

impl InventoryRecord {
    /// Create a record.
    pub fn new(level: i32, sku: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            level,
            sku: sku.into(),
            color: color.into(),
        }
    }

    /// The Z-index this record would be placed on in a grid of `dims`, if any.
    pub fn z_index(&self, dims: GridDimensions) -> Option<u32> {
        let level = u32::try_from(self.level).ok()?;
        (1..=dims.z).contains(&level).then(|| level - 1)
    }
}
