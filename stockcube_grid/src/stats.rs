// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Descriptive statistics over inventory records.
//!
//! All functions here are pure: they read a slice of records and return fresh values.
//! Statistics describe the *input* records, not the dense placement, so a SKU that is
//! never placed (for example because its level is outside the grid) still counts.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::address::GridDimensions;
use crate::record::InventoryRecord;

/// Unique-SKU count for one level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelStat {
    /// 1-based level, as given in the input.
    pub level: i32,
    /// Number of distinct SKUs on the level.
    pub unique_skus: usize,
    /// Share of the total unique-SKU count, formatted to one decimal (`"50.0"`).
    pub percentage: String,
}

/// An inclusive range of 1-based levels.
///
/// Empty when `first > last`. Displays as `L1-L8`, or `-` when empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LevelRange {
    /// First level in the range.
    pub first: u32,
    /// Last level in the range.
    pub last: u32,
}

impl LevelRange {
    /// Create a range covering `first..=last`.
    pub const fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// Whether the range covers no level.
    pub const fn is_empty(&self) -> bool {
        self.first > self.last
    }

    /// Whether `level` falls inside the range.
    pub fn contains(&self, level: i32) -> bool {
        u32::try_from(level).is_ok_and(|l| self.first <= l && l <= self.last)
    }
}

impl fmt::Display for LevelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("-")
        } else {
            write!(f, "L{}-L{}", self.first, self.last)
        }
    }
}

/// Unique SKUs in the upper (first 80%) and lower (last 20%) level bands.
///
/// The bands are disjoint level ranges, but their SKU sets are computed
/// independently: a SKU stored in both bands counts in both.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EightyTwentySplit {
    /// Levels `1..=ceil(z * 0.8)`.
    pub top_levels: LevelRange,
    /// Distinct SKUs on the top levels.
    pub top_unique_skus: usize,
    /// The remaining levels, possibly empty.
    pub bottom_levels: LevelRange,
    /// Distinct SKUs on the bottom levels.
    pub bottom_unique_skus: usize,
}

/// How often one SKU appears across all records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkuShare {
    /// Stock-keeping unit identifier.
    pub sku: String,
    /// Number of records carrying this SKU.
    pub count: usize,
    /// Share of all records, formatted to one decimal.
    pub percentage: String,
}

/// Headline figures shown next to the cube.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSummary {
    /// Dimensions label, e.g. `10×10×16`.
    pub dimensions: String,
    /// `x * y * z`.
    pub total_cells: usize,
    /// `x * y`.
    pub cells_per_level: usize,
    /// Number of input records.
    pub record_count: usize,
}

impl GridSummary {
    /// Summarize a grid of `dims` holding `records`.
    pub fn new(dims: GridDimensions, records: &[InventoryRecord]) -> Self {
        Self {
            dimensions: format!("{dims}"),
            total_cells: dims.cell_count(),
            cells_per_level: dims.cells_per_level(),
            record_count: records.len(),
        }
    }
}

/// Count distinct SKUs per level, ascending by level.
///
/// Duplicate SKUs on one level count once. Each level's percentage is its share of
/// the summed per-level unique counts, so the percentages add up to 100.
///
/// ```rust
/// use stockcube_grid::InventoryRecord;
/// use stockcube_grid::stats::per_level_distribution;
///
/// let stats = per_level_distribution(&[
///     InventoryRecord::new(1, "A", "red"),
///     InventoryRecord::new(1, "A", "red"),
///     InventoryRecord::new(2, "B", "blue"),
/// ]);
/// assert_eq!(stats[0].unique_skus, 1);
/// assert_eq!(stats[0].percentage, "50.0");
/// ```
pub fn per_level_distribution(records: &[InventoryRecord]) -> Vec<LevelStat> {
    let mut by_level: BTreeMap<i32, BTreeSet<&str>> = BTreeMap::new();
    for r in records {
        by_level.entry(r.level).or_default().insert(r.sku.as_str());
    }
    let total: usize = by_level.values().map(BTreeSet::len).sum();
    by_level
        .into_iter()
        .map(|(level, skus)| LevelStat {
            level,
            unique_skus: skus.len(),
            percentage: percent(skus.len(), total),
        })
        .collect()
}

/// Split levels `1..=dim_z` at `ceil(dim_z * 0.8)` and count distinct SKUs per band.
///
/// Records outside `1..=dim_z` fall in neither band.
pub fn eighty_twenty_split(records: &[InventoryRecord], dim_z: u32) -> EightyTwentySplit {
    let split = split_point(dim_z);
    let top_levels = LevelRange::new(1, split);
    let bottom_levels = LevelRange::new(split + 1, dim_z);
    EightyTwentySplit {
        top_levels,
        top_unique_skus: unique_skus_in(records, top_levels),
        bottom_levels,
        bottom_unique_skus: unique_skus_in(records, bottom_levels),
    }
}

/// Count records per SKU, most frequent first.
///
/// Ties keep first-appearance order. Percentages are shares of all records.
pub fn sku_distribution(records: &[InventoryRecord]) -> Vec<SkuShare> {
    // sku -> (first appearance, count)
    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for (i, r) in records.iter().enumerate() {
        counts.entry(r.sku.as_str()).or_insert((i, 0)).1 += 1;
    }
    let mut shares: Vec<_> = counts.into_iter().collect();
    shares.sort_by(|(_, (first_a, count_a)), (_, (first_b, count_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });
    shares
        .into_iter()
        .map(|(sku, (_, count))| SkuShare {
            sku: sku.into(),
            count,
            percentage: percent(count, records.len()),
        })
        .collect()
}

/// `ceil(dim_z * 0.8)` in integer arithmetic.
#[allow(
    clippy::cast_possible_truncation,
    reason = "4/5 of a u32 always fits back into a u32."
)]
fn split_point(dim_z: u32) -> u32 {
    (u64::from(dim_z) * 4).div_ceil(5) as u32
}

fn unique_skus_in(records: &[InventoryRecord], band: LevelRange) -> usize {
    records
        .iter()
        .filter(|r| band.contains(r.level))
        .map(|r| r.sku.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}

#[allow(
    clippy::cast_precision_loss,
    reason = "Counts are far below 2^52; the result is rounded to one decimal."
)]
fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0".into();
    }
    format!("{:.1}", part as f64 / total as f64 * 100.0)
}
