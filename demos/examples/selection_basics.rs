// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk the selection state machine: select, highlight, switch axes, toggle off.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p stockcube_demos --example selection_basics`

use stockcube_grid::{GridAddress, GridDimensions, InventoryRecord};
use stockcube_select::SelectionError;
use stockcube_select::types::{Axis, SelectionChange};
use stockcube_select::view::WarehouseView;

fn main() {
    env_logger::init();

    let records = [
        InventoryRecord::new(1, "SKU-0001", "red"),
        InventoryRecord::new(2, "SKU-0002", "blue"),
    ];
    let mut view = WarehouseView::new(&records, GridDimensions::new(3, 3, 3)).unwrap();

    // Highlighting with nothing selected is refused.
    assert_eq!(
        view.highlight_axis(Axis::X).unwrap_err(),
        SelectionError::NoSelection
    );

    let centre = GridAddress::new(1, 1, 0);
    let ev = view.select_cell(centre).unwrap();
    println!("== Select ==\n  {:?}", ev);

    let ev = view.highlight_axis(Axis::X).unwrap();
    println!("== Highlight X ==\n  {:?}", ev);
    for cell in view.highlighted_cells() {
        println!("  {} {}", cell.address, cell.sku().unwrap_or("Empty"));
    }
    println!("  column:");
    for cell in view.column_cells() {
        println!("  {} {}", cell.address, cell.sku().unwrap_or("Empty"));
    }

    let ev = view.highlight_axis(Axis::Y).unwrap();
    println!("== Highlight Y ==\n  {:?}", ev);

    // Picking a member moves the selection and drops the highlight.
    let member = view.selection().members()[0];
    let ev = view.select_cell(member).unwrap();
    println!("== Select member ==\n  {:?}", ev);
    assert!(view.selection().axis().is_none());

    // Clicking it again toggles it off.
    let ev = view.select_cell(member).unwrap();
    println!("== Re-click ==\n  {:?}", ev);
    assert_eq!(ev, SelectionChange::Deselected(member));
    assert!(view.selected_cell().is_none());
}
