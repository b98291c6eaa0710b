// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state machine: single-cell selection plus an optional axis highlight.
//!
//! ## States
//!
//! - `Idle`: nothing selected.
//! - `CellSelected(a)`: one cell is selected.
//! - `AxisHighlighted`: a cell is selected and the cells on one horizontal line through
//!   it are highlighted.
//!
//! ## Transitions
//!
//! | from                   | call                         | to                          |
//! |------------------------|------------------------------|-----------------------------|
//! | any                    | `select_cell(b)`, b ≠ current | `CellSelected(b)`          |
//! | `CellSelected(a)` / `AxisHighlighted(a)` | `select_cell(a)` | `Idle` (toggle off)   |
//! | `CellSelected(a)` / `AxisHighlighted(a)` | `highlight_axis(axis)` | `AxisHighlighted(a, axis)` |
//! | `AxisHighlighted(a)`   | `clear_highlight()`          | `CellSelected(a)`           |
//! | `CellSelected` / `AxisHighlighted` | `deselect()`     | `Idle`                      |
//! | any                    | `reset(dims)`                | `Idle`                      |
//!
//! `highlight_axis`, `clear_highlight` and `deselect` fail with
//! [`SelectionError::NoSelection`] while idle instead of silently doing nothing.
//!
//! ## Minimal example
//!
//! ```
//! use stockcube_grid::{GridAddress, GridDimensions};
//! use stockcube_select::selection::SelectionController;
//! use stockcube_select::types::Axis;
//!
//! let mut ctl = SelectionController::new(GridDimensions::new(3, 3, 1));
//! ctl.select_cell(GridAddress::new(1, 1, 0)).unwrap();
//! ctl.highlight_axis(Axis::X).unwrap();
//! assert_eq!(ctl.members(), &[GridAddress::new(0, 1, 0), GridAddress::new(2, 1, 0)]);
//!
//! // Clicking the selected cell again toggles it off.
//! ctl.select_cell(GridAddress::new(1, 1, 0)).unwrap();
//! assert!(ctl.selected().is_none());
//! ```

use alloc::vec::Vec;

use stockcube_grid::{GridAddress, GridDimensions};

use crate::error::SelectionError;
use crate::types::{Axis, CellRole, SelectionChange};

/// An active axis highlight around a selected cell.
///
/// `members` is derived from `selected` and `axis` when the highlight is created and is
/// never edited independently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisHighlight {
    selected: GridAddress,
    axis: Axis,
    members: Vec<GridAddress>,
}

impl AxisHighlight {
    fn compute(selected: GridAddress, axis: Axis, dims: GridDimensions) -> Self {
        let extent = match axis {
            Axis::X => dims.x,
            Axis::Y => dims.y,
        };
        // Ascending along the varying coordinate by construction.
        let members = (0..extent)
            .filter(|&v| v != axis.coordinate(selected))
            .map(|v| match axis {
                Axis::X => GridAddress::new(v, selected.y, selected.z),
                Axis::Y => GridAddress::new(selected.x, v, selected.z),
            })
            .collect();
        Self {
            selected,
            axis,
            members,
        }
    }

    /// The selected cell the highlight extends from.
    pub fn selected(&self) -> GridAddress {
        self.selected
    }

    /// The highlighted axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Cells on the axis line, excluding the selection, ascending along the axis.
    pub fn members(&self) -> &[GridAddress] {
        &self.members
    }
}

/// Current selection state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing selected.
    #[default]
    Idle,
    /// One cell selected.
    CellSelected(GridAddress),
    /// One cell selected with an axis highlight.
    AxisHighlighted(AxisHighlight),
}

impl SelectionState {
    /// The selected cell, if any.
    pub fn selected(&self) -> Option<GridAddress> {
        match self {
            Self::Idle => None,
            Self::CellSelected(addr) => Some(*addr),
            Self::AxisHighlighted(h) => Some(h.selected),
        }
    }

    /// The highlighted axis, if any.
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Self::AxisHighlighted(h) => Some(h.axis),
            _ => None,
        }
    }

    /// Whether an axis highlight is active.
    pub fn is_highlighting(&self) -> bool {
        matches!(self, Self::AxisHighlighted(_))
    }

    /// Classify `addr` against this state.
    ///
    /// Axis and column membership are only reported while a highlight is active.
    pub fn role_of(&self, addr: GridAddress, occupied: bool) -> CellRole {
        let mut role = CellRole::empty();
        role.set(CellRole::OCCUPIED, occupied);
        let Some(selected) = self.selected() else {
            return role;
        };
        if addr == selected {
            return role | CellRole::SELECTED;
        }
        if let Self::AxisHighlighted(h) = self {
            role.set(CellRole::AXIS_MEMBER, h.axis.shares_line(selected, addr));
            role.set(
                CellRole::COLUMN_MEMBER,
                addr.x == selected.x && addr.y == selected.y,
            );
        }
        role
    }
}

/// Owns the selection state for one grid.
///
/// The controller knows only the grid's dimensions, not its contents; membership and
/// bounds checks are pure address arithmetic. Reset it whenever the grid is rebuilt
/// so no stale address survives into the new grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionController {
    dims: GridDimensions,
    state: SelectionState,
}

impl SelectionController {
    /// Create an idle controller for a grid of `dims`.
    pub fn new(dims: GridDimensions) -> Self {
        Self {
            dims,
            state: SelectionState::Idle,
        }
    }

    /// Dimensions the controller validates addresses against.
    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    /// The current state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The selected cell, if any.
    pub fn selected(&self) -> Option<GridAddress> {
        self.state.selected()
    }

    /// The highlighted axis, if any.
    pub fn axis(&self) -> Option<Axis> {
        self.state.axis()
    }

    /// Highlighted cells (empty unless a highlight is active).
    pub fn members(&self) -> &[GridAddress] {
        match &self.state {
            SelectionState::AxisHighlighted(h) => h.members(),
            _ => &[],
        }
    }

    /// The vertical stack through the selection, excluding it, ascending by `z`.
    ///
    /// Empty unless a highlight is active. Shown alongside the axis line; it does not
    /// affect [`members`](Self::members).
    pub fn column(&self) -> Vec<GridAddress> {
        let SelectionState::AxisHighlighted(h) = &self.state else {
            return Vec::new();
        };
        let s = h.selected;
        (0..self.dims.z)
            .filter(|&z| z != s.z)
            .map(|z| GridAddress::new(s.x, s.y, z))
            .collect()
    }

    /// Classify `addr` against the current state.
    pub fn role_of(&self, addr: GridAddress, occupied: bool) -> CellRole {
        self.state.role_of(addr, occupied)
    }

    /// Select `addr`, or toggle it off if it is already selected.
    ///
    /// Selecting a different cell replaces the selection and drops any axis highlight.
    /// Fails with [`GridError::OutOfBounds`](stockcube_grid::GridError::OutOfBounds)
    /// if `addr` is outside the controller's grid.
    pub fn select_cell(&mut self, addr: GridAddress) -> Result<SelectionChange, SelectionError> {
        addr.to_index(self.dims)?;
        let previous = self.state.selected();
        if previous == Some(addr) {
            self.state = SelectionState::Idle;
            log::trace!("toggled off {addr}");
            return Ok(SelectionChange::Deselected(addr));
        }
        self.state = SelectionState::CellSelected(addr);
        log::trace!("selected {addr} (previous {previous:?})");
        Ok(SelectionChange::Selected {
            previous,
            current: addr,
        })
    }

    /// Clear the selection and any highlight.
    pub fn deselect(&mut self) -> Result<SelectionChange, SelectionError> {
        let selected = self.state.selected().ok_or(SelectionError::NoSelection)?;
        self.state = SelectionState::Idle;
        log::trace!("deselected {selected}");
        Ok(SelectionChange::Deselected(selected))
    }

    /// Highlight the line through the selection along `axis`.
    ///
    /// Replaces any existing highlight, so switching between axes is one call.
    pub fn highlight_axis(&mut self, axis: Axis) -> Result<SelectionChange, SelectionError> {
        let selected = self.state.selected().ok_or(SelectionError::NoSelection)?;
        let highlight = AxisHighlight::compute(selected, axis, self.dims);
        let members = highlight.members.len();
        self.state = SelectionState::AxisHighlighted(highlight);
        log::trace!("highlighted {} through {selected}: {members} cells", axis.label());
        Ok(SelectionChange::Highlighted { axis, members })
    }

    /// Drop the axis highlight, keeping the selection.
    ///
    /// Returns [`SelectionChange::Unchanged`] if a cell is selected without a highlight.
    pub fn clear_highlight(&mut self) -> Result<SelectionChange, SelectionError> {
        match &self.state {
            SelectionState::Idle => Err(SelectionError::NoSelection),
            SelectionState::CellSelected(_) => Ok(SelectionChange::Unchanged),
            SelectionState::AxisHighlighted(h) => {
                let axis = h.axis;
                self.state = SelectionState::CellSelected(h.selected);
                log::trace!("cleared {} highlight", axis.label());
                Ok(SelectionChange::HighlightCleared(axis))
            }
        }
    }

    /// Return to `Idle` and adopt new grid dimensions.
    ///
    /// Call this whenever the cell grid is rebuilt.
    pub fn reset(&mut self, dims: GridDimensions) {
        if let Some(selected) = self.state.selected() {
            log::debug!("selection {selected} reset for {dims} grid");
        }
        self.dims = dims;
        self.state = SelectionState::Idle;
    }
}
