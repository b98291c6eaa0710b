// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid coordinates and their dense linear encoding.

use core::fmt;

use crate::error::{GridError, Position};

/// Extent of a cell grid along each axis.
///
/// Defines the address space `[0, x) × [0, y) × [0, z)`. The Z axis carries
/// warehouse levels: level `L` lives at Z-index `L - 1`.
///
/// A dimension of zero is representable but rejected by
/// [`CellStore::build`](crate::CellStore::build).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    /// Number of cells along X.
    pub x: u32,
    /// Number of cells along Y.
    pub y: u32,
    /// Number of levels (cells along Z).
    pub z: u32,
}

impl GridDimensions {
    /// Largest supported number of cells (`2^24`).
    ///
    /// Dimensions above this are rejected with
    /// [`GridError::InvalidDimensions`] instead of attempting the allocation.
    pub const MAX_CELLS: usize = 1 << 24;

    /// Create dimensions from per-axis extents.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Total number of cells, or `None` when a dimension is zero or the product
    /// exceeds [`GridDimensions::MAX_CELLS`].
    pub fn checked_cell_count(self) -> Option<usize> {
        if self.x == 0 || self.y == 0 || self.z == 0 {
            return None;
        }
        (self.x as usize)
            .checked_mul(self.y as usize)?
            .checked_mul(self.z as usize)
            .filter(|&count| count <= Self::MAX_CELLS)
    }

    /// Whether these dimensions describe a buildable grid.
    pub fn is_valid(self) -> bool {
        self.checked_cell_count().is_some()
    }

    /// Total number of cells (`x * y * z`), saturating on overflow.
    pub fn cell_count(self) -> usize {
        (self.x as usize)
            .saturating_mul(self.y as usize)
            .saturating_mul(self.z as usize)
    }

    /// Number of cells on one level (`x * y`), saturating on overflow.
    pub fn cells_per_level(self) -> usize {
        (self.x as usize).saturating_mul(self.y as usize)
    }

    /// Whether `addr` lies inside this grid.
    pub const fn contains(self, addr: GridAddress) -> bool {
        addr.x < self.x && addr.y < self.y && addr.z < self.z
    }

    /// Build a checked address, failing with [`GridError::OutOfBounds`] when any
    /// component is outside the grid.
    pub fn address(self, x: u32, y: u32, z: u32) -> Result<GridAddress, GridError> {
        let addr = GridAddress::new(x, y, z);
        if self.contains(addr) {
            Ok(addr)
        } else {
            Err(GridError::OutOfBounds {
                position: Position::Address(addr),
                dims: self,
            })
        }
    }

    /// Iterate every address in linear-index order.
    ///
    /// The iterator is `Clone`, so it can be restarted from any point. Invalid
    /// dimensions yield nothing.
    pub fn addresses(self) -> impl Iterator<Item = GridAddress> + Clone {
        (0..self.checked_cell_count().unwrap_or(0)).map(move |idx| self.decode(idx))
    }

    /// Decode a linear index without bounds checking. Callers guarantee
    /// `idx < checked_cell_count`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Each quotient is bounded by a u32 dimension."
    )]
    pub(crate) fn decode(self, idx: usize) -> GridAddress {
        let dim_y = self.y as usize;
        let dim_z = self.z as usize;
        let z = idx % dim_z;
        let y = (idx / dim_z) % dim_y;
        let x = idx / (dim_y * dim_z);
        GridAddress::new(x as u32, y as u32, z as u32)
    }

    /// Encode an address without bounds checking. Callers guarantee `contains(addr)`
    /// and valid dimensions.
    pub(crate) fn encode(self, addr: GridAddress) -> usize {
        let dim_y = self.y as usize;
        let dim_z = self.z as usize;
        addr.x as usize * dim_y * dim_z + addr.y as usize * dim_z + addr.z as usize
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}×{}", self.x, self.y, self.z)
    }
}

/// A cell coordinate in a grid.
///
/// Plain value type; equality is component-wise. An address carries no
/// dimensions, so whether it is valid depends on the grid it is used with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridAddress {
    /// X coordinate.
    pub x: u32,
    /// Y coordinate.
    pub y: u32,
    /// Z coordinate (level - 1).
    pub z: u32,
}

impl GridAddress {
    /// Create an address. No bounds are checked; see [`GridDimensions::address`].
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// The 1-based warehouse level this address sits on.
    pub const fn level(self) -> u32 {
        self.z + 1
    }

    /// Encode as a dense linear index (x-major, y-mid, z-minor).
    ///
    /// Fails with [`GridError::InvalidDimensions`] if `dims` is not a valid grid, and
    /// with [`GridError::OutOfBounds`] if the address lies outside it.
    pub fn to_index(self, dims: GridDimensions) -> Result<usize, GridError> {
        if !dims.is_valid() {
            return Err(GridError::InvalidDimensions(dims));
        }
        if dims.contains(self) {
            Ok(dims.encode(self))
        } else {
            Err(GridError::OutOfBounds {
                position: Position::Address(self),
                dims,
            })
        }
    }

    /// Decode a dense linear index. Exact inverse of [`GridAddress::to_index`].
    pub fn from_index(idx: usize, dims: GridDimensions) -> Result<Self, GridError> {
        match dims.checked_cell_count() {
            Some(count) if idx < count => Ok(dims.decode(idx)),
            _ => Err(GridError::OutOfBounds {
                position: Position::Index(idx),
                dims,
            }),
        }
    }
}

impl fmt::Display for GridAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    // Every in-bounds address survives an encode/decode pair, for several shapes.
    #[test]
    fn index_is_bijective() {
        for dims in [
            GridDimensions::new(1, 1, 1),
            GridDimensions::new(3, 3, 1),
            GridDimensions::new(2, 5, 7),
            GridDimensions::new(10, 10, 16),
        ] {
            let mut seen = Vec::new();
            for x in 0..dims.x {
                for y in 0..dims.y {
                    for z in 0..dims.z {
                        let a = GridAddress::new(x, y, z);
                        let idx = a.to_index(dims).unwrap();
                        assert_eq!(GridAddress::from_index(idx, dims).unwrap(), a);
                        seen.push(idx);
                    }
                }
            }
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), dims.cell_count());
            assert_eq!(seen.last().copied(), Some(dims.cell_count() - 1));
        }
    }

    // Z is the fastest-varying component, X the slowest.
    #[test]
    fn ordering_is_x_major_z_minor() {
        let dims = GridDimensions::new(2, 3, 4);
        assert_eq!(GridAddress::new(0, 0, 1).to_index(dims).unwrap(), 1);
        assert_eq!(GridAddress::new(0, 1, 0).to_index(dims).unwrap(), 4);
        assert_eq!(GridAddress::new(1, 0, 0).to_index(dims).unwrap(), 12);
        assert_eq!(
            GridAddress::from_index(23, dims).unwrap(),
            GridAddress::new(1, 2, 3)
        );
    }

    #[test]
    fn out_of_range_fails() {
        let dims = GridDimensions::new(3, 3, 1);
        let err = GridAddress::new(0, 0, 1).to_index(dims).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
        let err = GridAddress::from_index(9, dims).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                position: Position::Index(9),
                dims
            }
        );
        assert!(dims.address(3, 0, 0).is_err());
        assert_eq!(dims.address(2, 2, 0).unwrap(), GridAddress::new(2, 2, 0));
    }

    #[test]
    fn addresses_follow_index_order_and_restart() {
        let dims = GridDimensions::new(2, 2, 2);
        let iter = dims.addresses();
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
        for (i, a) in first.iter().enumerate() {
            assert_eq!(a.to_index(dims).unwrap(), i);
        }
    }

    // Oversized dimensions are refused up front; nothing is encoded or iterated.
    #[test]
    fn oversized_dimensions_are_invalid() {
        let huge = GridDimensions::new(u32::MAX, u32::MAX, u32::MAX);
        let corner = GridAddress::new(u32::MAX - 1, u32::MAX - 1, u32::MAX - 1);
        assert_eq!(
            corner.to_index(huge).unwrap_err(),
            GridError::InvalidDimensions(huge)
        );
        assert!(GridAddress::from_index(0, huge).is_err());
        assert_eq!(huge.addresses().count(), 0);

        // The cell cap is inclusive.
        let at_cap = GridDimensions::new(256, 256, 256);
        assert_eq!(at_cap.checked_cell_count(), Some(GridDimensions::MAX_CELLS));
        let last = GridAddress::new(255, 255, 255);
        assert_eq!(
            last.to_index(at_cap).unwrap(),
            GridDimensions::MAX_CELLS - 1
        );
        let over = GridDimensions::new(256, 256, 257);
        assert!(!over.is_valid());
        assert_eq!(
            GridAddress::new(0, 0, 0).to_index(over).unwrap_err(),
            GridError::InvalidDimensions(over)
        );
        assert!(!GridDimensions::new(3, 0, 3).is_valid());
    }

    #[test]
    fn display_forms() {
        assert_eq!(format!("{}", GridAddress::new(1, 2, 3)), "(1,2,3)");
        assert_eq!(format!("{}", GridDimensions::new(10, 10, 16)), "10×10×16");
        assert_eq!(GridAddress::new(0, 0, 4).level(), 5);
    }
}
