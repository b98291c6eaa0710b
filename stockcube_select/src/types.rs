// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for selection: axes, cell roles, opacity modes, and transition reports.
//!
//! ## Overview
//!
//! These types describe the selection protocol and its outputs.
//! They are produced by the [`selection`](crate::selection) state machine and consumed
//! by [`emphasis`](crate::emphasis) and downstream renderers.

use stockcube_grid::GridAddress;

/// Horizontal axis along which a highlight extends from the selected cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Cells sharing `(y, z)` with the selection: an X-row.
    X,
    /// Cells sharing `(x, z)` with the selection: a Y-column.
    Y,
}

impl Axis {
    /// Whether `candidate` lies on the line through `origin` along this axis.
    ///
    /// `origin` itself is on its own line.
    pub const fn shares_line(self, origin: GridAddress, candidate: GridAddress) -> bool {
        match self {
            Self::X => candidate.y == origin.y && candidate.z == origin.z,
            Self::Y => candidate.x == origin.x && candidate.z == origin.z,
        }
    }

    /// The coordinate that varies along this axis.
    pub const fn coordinate(self, addr: GridAddress) -> u32 {
        match self {
            Self::X => addr.x,
            Self::Y => addr.y,
        }
    }

    /// Short label for display (`X-Row` / `Y-Column`).
    pub const fn label(self) -> &'static str {
        match self {
            Self::X => "X-Row",
            Self::Y => "Y-Column",
        }
    }
}

bitflags::bitflags! {
    /// How a cell relates to the current selection.
    ///
    /// Computed per cell by
    /// [`SelectionController::role_of`](crate::selection::SelectionController::role_of)
    /// and turned into a weight by [`OpacityMode::weight`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CellRole: u8 {
        /// A record occupies the cell.
        const OCCUPIED      = 0b0000_0001;
        /// The cell is the current selection.
        const SELECTED      = 0b0000_0010;
        /// The cell is on the highlighted axis line (never the selection itself).
        const AXIS_MEMBER   = 0b0000_0100;
        /// The cell is in the vertical stack through the selection while a highlight is active.
        const COLUMN_MEMBER = 0b0000_1000;
    }
}

/// Base transparency preset for the cube.
///
/// Sets the weight of occupied and empty cells before any highlight multipliers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum OpacityMode {
    /// Near-transparent cells, for looking into the cube.
    SuperTransparent,
    /// Partially transparent cells.
    Normal,
    /// Opaque rendering.
    #[default]
    Solid,
}

/// What a selection call changed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SelectionChange {
    /// A cell became the selection, replacing `previous` if there was one.
    Selected {
        /// The selection before the call.
        previous: Option<GridAddress>,
        /// The new selection.
        current: GridAddress,
    },
    /// The selection was cleared.
    Deselected(GridAddress),
    /// An axis highlight was computed around the selection.
    Highlighted {
        /// Axis of the highlight.
        axis: Axis,
        /// Number of member cells (excluding the selection).
        members: usize,
    },
    /// The axis highlight was dropped; the selection stays.
    HighlightCleared(Axis),
    /// Nothing changed.
    Unchanged,
}
