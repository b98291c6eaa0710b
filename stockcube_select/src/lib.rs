// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stockcube Select: a deterministic, `no_std` selection layer for a warehouse cell grid.
//!
//! ## Overview
//!
//! This crate owns the interaction state around a [`stockcube_grid::CellStore`]:
//! which cell is selected, which horizontal line through it is highlighted, and how
//! strongly each cell should be drawn as a result.
//! It does not draw anything. Renderers read per-cell weights every frame and never
//! mutate the state; event handlers are the only writers.
//!
//! ## Pieces
//!
//! - [`SelectionController`](crate::selection::SelectionController): the state machine
//!   (`Idle` → `CellSelected` → `AxisHighlighted`).
//! - [`emphasis`](crate::emphasis): maps a cell's [`CellRole`](crate::types::CellRole)
//!   and the [`OpacityMode`](crate::types::OpacityMode) to a weight in `[0, 1]`.
//! - [`ResolvePick`](crate::pick::ResolvePick): the narrow picking contract,
//!   `ray → Option<GridAddress>`. Closures implement it, so an instance-id lookup is a one-liner.
//! - [`WarehouseView`](crate::view::WarehouseView): single owner of a store and its
//!   selection; rebuilding the grid resets the selection in the same call.
//! - `adapters::ray_cast` (feature `ray_cast_adapter`): world placement of cells and a
//!   slab-test ray caster built on `glam`, with `kurbo` viewport → NDC conversion.
//!
//! ## Workflow
//!
//! 1) Build a [`WarehouseView`](crate::view::WarehouseView) from records and grid dimensions.
//! 2) On pointer click, turn the pointer into a ray and call
//!    [`WarehouseView::pick`](crate::view::WarehouseView::pick). Clicking the selected
//!    cell again toggles it off.
//! 3) On a highlight button, call
//!    [`WarehouseView::highlight_axis`](crate::view::WarehouseView::highlight_axis).
//! 4) Each frame, iterate [`WarehouseView::frame`](crate::view::WarehouseView::frame) and
//!    apply `color` and `weight` to the instance at `index`.
//! 5) When records or dimensions change, call
//!    [`WarehouseView::rebuild`](crate::view::WarehouseView::rebuild).
//!
//! ```
//! use stockcube_grid::{GridAddress, GridDimensions, InventoryRecord};
//! use stockcube_select::types::{Axis, SelectionChange};
//! use stockcube_select::view::WarehouseView;
//!
//! let records = [
//!     InventoryRecord::new(1, "SKU-3821", "orange"),
//!     InventoryRecord::new(2, "SKU-1938", "yellow"),
//! ];
//! let mut view = WarehouseView::new(&records, GridDimensions::new(4, 4, 4)).unwrap();
//!
//! // Any `Fn(&R) -> Option<GridAddress>` can resolve picks.
//! let dims = view.store().dimensions();
//! let by_instance = move |id: &usize| GridAddress::from_index(*id, dims).ok();
//! let change = view.pick(&by_instance, &1_usize).unwrap();
//! assert!(matches!(change, Some(SelectionChange::Selected { .. })));
//! assert_eq!(view.selected_cell().unwrap().sku(), Some("SKU-1938"));
//!
//! view.highlight_axis(Axis::Y).unwrap();
//! assert_eq!(view.selection().members().len(), 3);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod emphasis;
pub mod error;
pub mod pick;
pub mod selection;
pub mod types;
pub mod view;

pub use error::SelectionError;
