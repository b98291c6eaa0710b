// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-cell emphasis weights for renderers.
//!
//! A weight in `[0, 1]` drives a cell's rendered opacity or brightness. It is a pure
//! function of the cell's [`CellRole`], whether an axis highlight is active, and the
//! [`OpacityMode`]; nothing is stored, so renderers recompute it every frame.
//!
//! | state                  | occupied            | empty               |
//! |------------------------|---------------------|---------------------|
//! | idle / cell selected   | base                | base                |
//! | highlight: selection   | `1.3 ×` base        | `1.3 ×` base        |
//! | highlight: axis member | `1.2 ×` base        | `0.7 ×` base        |
//! | highlight: other cell  | `0.2 ×` base        | `0.3 ×` base        |
//!
//! Results are clamped to `[0, 1]`. With [`OpacityMode::Solid`] the base is `1.0` for
//! occupied cells and `0.8` for empty ones.

use stockcube_grid::Cell;

use crate::selection::SelectionState;
use crate::types::{CellRole, OpacityMode};

const SELECTED_GAIN: f32 = 1.3;
const MEMBER_OCCUPIED_GAIN: f32 = 1.2;
const MEMBER_EMPTY_GAIN: f32 = 0.7;
const OTHER_OCCUPIED_GAIN: f32 = 0.2;
const OTHER_EMPTY_GAIN: f32 = 0.3;

impl OpacityMode {
    /// Weight of a cell with no highlight active.
    pub const fn base(self, occupied: bool) -> f32 {
        match (self, occupied) {
            (Self::Solid, true) => 1.0,
            (Self::Solid, false) => 0.8,
            (Self::Normal, true) => 0.7,
            (Self::Normal, false) => 0.4,
            (Self::SuperTransparent, true) => 0.3,
            (Self::SuperTransparent, false) => 0.1,
        }
    }

    /// Weight of a cell with the given role.
    ///
    /// Selection alone does not dim anything; multipliers only apply while an axis
    /// highlight is active.
    pub fn weight(self, role: CellRole, highlight_active: bool) -> f32 {
        let occupied = role.contains(CellRole::OCCUPIED);
        let base = self.base(occupied);
        if !highlight_active {
            return base;
        }
        let gain = if role.contains(CellRole::SELECTED) {
            SELECTED_GAIN
        } else if role.contains(CellRole::AXIS_MEMBER) {
            if occupied {
                MEMBER_OCCUPIED_GAIN
            } else {
                MEMBER_EMPTY_GAIN
            }
        } else if occupied {
            OTHER_OCCUPIED_GAIN
        } else {
            OTHER_EMPTY_GAIN
        };
        (base * gain).clamp(0.0, 1.0)
    }

    /// Weight of `cell` under `state` in this mode.
    pub fn emphasis(self, cell: &Cell<'_>, state: &SelectionState) -> f32 {
        let role = state.role_of(cell.address, !cell.is_empty());
        self.weight(role, state.is_highlighting())
    }
}

/// Weight of `cell` under `state`, using [`OpacityMode::Solid`].
pub fn emphasis_weight(cell: &Cell<'_>, state: &SelectionState) -> f32 {
    OpacityMode::Solid.emphasis(cell, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionController;
    use crate::types::Axis;
    use stockcube_grid::{CellStore, GridAddress, GridDimensions, InventoryRecord};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    // Levels 1 and 3 occupied, level 2 empty, on a 3×3×3 grid.
    fn store() -> CellStore {
        CellStore::build(
            &[
                InventoryRecord::new(1, "A", "red"),
                InventoryRecord::new(3, "C", "blue"),
            ],
            GridDimensions::new(3, 3, 3),
        )
        .unwrap()
    }

    #[test]
    fn idle_is_flat() {
        let store = store();
        let ctl = SelectionController::new(store.dimensions());
        let occupied = store.cell_at(GridAddress::new(0, 0, 0)).unwrap();
        let empty = store.cell_at(GridAddress::new(0, 0, 1)).unwrap();
        assert!(approx(emphasis_weight(&occupied, ctl.state()), 1.0));
        assert!(approx(emphasis_weight(&empty, ctl.state()), 0.8));
    }

    // Selecting a cell does not dim the rest.
    #[test]
    fn selection_alone_matches_idle() {
        let store = store();
        let mut ctl = SelectionController::new(store.dimensions());
        ctl.select_cell(GridAddress::new(1, 1, 1)).unwrap();
        for cell in store.cells() {
            let expected = if cell.is_empty() { 0.8 } else { 1.0 };
            assert!(approx(emphasis_weight(&cell, ctl.state()), expected));
        }
    }

    #[test]
    fn axis_highlight_weights() {
        let store = store();
        let mut ctl = SelectionController::new(store.dimensions());
        // Selection on the empty level 2, highlight along X.
        ctl.select_cell(GridAddress::new(1, 1, 1)).unwrap();
        ctl.highlight_axis(Axis::X).unwrap();
        let w = |x, y, z| {
            let cell = store.cell_at(GridAddress::new(x, y, z)).unwrap();
            emphasis_weight(&cell, ctl.state())
        };
        // Selected (empty): 0.8 × 1.3, clamped.
        assert!(approx(w(1, 1, 1), 1.0));
        // Member (empty): 0.8 × 0.7.
        assert!(approx(w(0, 1, 1), 0.56));
        // Non-member occupied: 1.0 × 0.2; non-member empty: 0.8 × 0.3.
        assert!(approx(w(0, 0, 0), 0.2));
        assert!(approx(w(0, 0, 1), 0.24));
    }

    // Member occupied cells are capped at 1.0.
    #[test]
    fn occupied_member_is_clamped() {
        let store = store();
        let mut ctl = SelectionController::new(store.dimensions());
        ctl.select_cell(GridAddress::new(0, 2, 0)).unwrap();
        ctl.highlight_axis(Axis::Y).unwrap();
        let member = store.cell_at(GridAddress::new(0, 0, 0)).unwrap();
        let selected = store.cell_at(GridAddress::new(0, 2, 0)).unwrap();
        assert!(approx(emphasis_weight(&member, ctl.state()), 1.0));
        assert!(approx(emphasis_weight(&selected, ctl.state()), 1.0));
    }

    // Same inputs, same output.
    #[test]
    fn weight_is_pure() {
        let store = store();
        let mut ctl = SelectionController::new(store.dimensions());
        ctl.select_cell(GridAddress::new(2, 2, 2)).unwrap();
        ctl.highlight_axis(Axis::X).unwrap();
        for cell in store.cells() {
            let first = emphasis_weight(&cell, ctl.state());
            for _ in 0..3 {
                assert_eq!(emphasis_weight(&cell, ctl.state()).to_bits(), first.to_bits());
            }
            assert!((0.0..=1.0).contains(&first));
        }
    }

    #[test]
    fn opacity_modes_scale_base() {
        assert!(approx(OpacityMode::Normal.weight(CellRole::OCCUPIED, false), 0.7));
        assert!(approx(OpacityMode::SuperTransparent.weight(CellRole::empty(), false), 0.1));
        // Dimmed occupied cell in normal mode: 0.7 × 0.2.
        assert!(approx(OpacityMode::Normal.weight(CellRole::OCCUPIED, true), 0.14));
        // Column members are dimmed like any other non-member.
        assert!(approx(
            OpacityMode::Solid.weight(CellRole::OCCUPIED | CellRole::COLUMN_MEMBER, true),
            0.2
        ));
    }
}
