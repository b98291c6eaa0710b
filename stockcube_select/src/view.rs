// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view owner: one cell store, one selection, and the per-frame read path.
//!
//! [`WarehouseView`] is the single owner of the dense cell table and the selection
//! state. Event handlers mutate it through `&mut self`; a renderer reads it through
//! [`WarehouseView::frame`], which borrows it immutably. Frame data therefore cannot
//! be held across a [`rebuild`](WarehouseView::rebuild).
//!
//! ```
//! use stockcube_grid::{GridAddress, GridDimensions, InventoryRecord};
//! use stockcube_select::types::Axis;
//! use stockcube_select::view::WarehouseView;
//!
//! let records = [InventoryRecord::new(1, "SKU-1", "orange")];
//! let mut view = WarehouseView::new(&records, GridDimensions::new(3, 3, 2)).unwrap();
//! view.select_cell(GridAddress::new(1, 1, 0)).unwrap();
//! view.highlight_axis(Axis::X).unwrap();
//!
//! let dimmed = view.frame().filter(|v| v.weight < 0.5).count();
//! assert_eq!(dimmed, 18 - 3);
//! ```

use stockcube_grid::{Cell, CellStore, GridAddress, GridDimensions, GridError, InventoryRecord};

use crate::error::SelectionError;
use crate::pick::ResolvePick;
use crate::selection::SelectionController;
use crate::types::{Axis, CellRole, OpacityMode, SelectionChange};

/// Everything a renderer needs to draw one cell instance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InstanceVisual<'a> {
    /// Per-instance slot (dense linear index).
    pub index: usize,
    /// Cell coordinate.
    pub address: GridAddress,
    /// Fill color (occupant color or the empty sentinel).
    pub color: &'a str,
    /// Emphasis weight in `[0, 1]`.
    pub weight: f32,
    /// Relation to the current selection, for overlays such as an outline on the selection.
    pub role: CellRole,
}

/// Owns a [`CellStore`] and its [`SelectionController`].
#[derive(Clone, Debug)]
pub struct WarehouseView {
    store: CellStore,
    selection: SelectionController,
    opacity: OpacityMode,
}

impl WarehouseView {
    /// Build the grid for `records` and start idle.
    pub fn new(records: &[InventoryRecord], dims: GridDimensions) -> Result<Self, GridError> {
        let store = CellStore::build(records, dims)?;
        Ok(Self {
            selection: SelectionController::new(dims),
            store,
            opacity: OpacityMode::default(),
        })
    }

    /// Replace the grid and reset the selection.
    ///
    /// The new store is built before anything is replaced, so on failure the previous
    /// grid and selection are left untouched.
    pub fn rebuild(
        &mut self,
        records: &[InventoryRecord],
        dims: GridDimensions,
    ) -> Result<(), GridError> {
        let store = CellStore::build(records, dims)?;
        self.store = store;
        self.selection.reset(dims);
        log::debug!("view rebuilt for {dims} grid");
        Ok(())
    }

    /// The cell table.
    pub fn store(&self) -> &CellStore {
        &self.store
    }

    /// The selection controller.
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Current opacity preset.
    pub fn opacity_mode(&self) -> OpacityMode {
        self.opacity
    }

    /// Change the opacity preset.
    pub fn set_opacity_mode(&mut self, mode: OpacityMode) {
        self.opacity = mode;
    }

    /// Select (or toggle off) the cell at `addr`.
    pub fn select_cell(&mut self, addr: GridAddress) -> Result<SelectionChange, SelectionError> {
        self.selection.select_cell(addr)
    }

    /// Resolve `ray` with `picker` and select the hit cell.
    ///
    /// A miss leaves the selection as it is and returns `Ok(None)`.
    pub fn pick<R: ?Sized, P: ResolvePick<R>>(
        &mut self,
        picker: &P,
        ray: &R,
    ) -> Result<Option<SelectionChange>, SelectionError> {
        match picker.resolve_pick(ray) {
            Some(addr) => self.selection.select_cell(addr).map(Some),
            None => Ok(None),
        }
    }

    /// Highlight the line through the selection along `axis`.
    pub fn highlight_axis(&mut self, axis: Axis) -> Result<SelectionChange, SelectionError> {
        self.selection.highlight_axis(axis)
    }

    /// Drop the axis highlight.
    pub fn clear_highlight(&mut self) -> Result<SelectionChange, SelectionError> {
        self.selection.clear_highlight()
    }

    /// Clear the selection.
    pub fn deselect(&mut self) -> Result<SelectionChange, SelectionError> {
        self.selection.deselect()
    }

    /// The selected cell, for a details panel.
    pub fn selected_cell(&self) -> Option<Cell<'_>> {
        // The selection is reset on every rebuild, so it always fits the store.
        self.selection
            .selected()
            .and_then(|addr| self.store.cell_at(addr).ok())
    }

    /// Cells on the highlighted axis line, ascending along the axis.
    pub fn highlighted_cells(&self) -> impl Iterator<Item = Cell<'_>> + '_ {
        self.selection
            .members()
            .iter()
            .filter_map(move |&addr| self.store.cell_at(addr).ok())
    }

    /// Cells in the vertical stack through the selection while highlighted, ascending by level.
    pub fn column_cells(&self) -> impl Iterator<Item = Cell<'_>> + '_ {
        self.selection
            .column()
            .into_iter()
            .filter_map(move |addr| self.store.cell_at(addr).ok())
    }

    /// Visuals for every cell in per-instance slot order.
    ///
    /// Recomputed from the current state on every call.
    pub fn frame(&self) -> impl Iterator<Item = InstanceVisual<'_>> + '_ {
        let state = self.selection.state();
        let highlighting = state.is_highlighting();
        let opacity = self.opacity;
        self.store.cells().map(move |cell| {
            let role = state.role_of(cell.address, !cell.is_empty());
            InstanceVisual {
                index: cell.index,
                address: cell.address,
                color: cell.color(),
                weight: opacity.weight(role, highlighting),
                role,
            }
        })
    }
}
