// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for grid construction and lookup.

use core::fmt;

use thiserror::Error;

use crate::address::{GridAddress, GridDimensions};

/// What a failed lookup was asked for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Position {
    /// A coordinate lookup.
    Address(GridAddress),
    /// A dense linear index lookup.
    Index(usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(addr) => write!(f, "address {addr}"),
            Self::Index(idx) => write!(f, "index {idx}"),
        }
    }
}

/// Failures raised by the grid.
///
/// Both kinds are caller contract violations: they are reported immediately and
/// never retried.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// An address or linear index lies outside the grid's dimensions.
    #[error("{position} is outside a {dims} grid")]
    OutOfBounds {
        /// The rejected address or index.
        position: Position,
        /// Dimensions of the grid that rejected it.
        dims: GridDimensions,
    },
    /// A dimension was zero, or the cell count exceeds
    /// [`GridDimensions::MAX_CELLS`].
    #[error("grid dimensions must be positive with at most {max} cells, got {0}", max = GridDimensions::MAX_CELLS)]
    InvalidDimensions(GridDimensions),
}
