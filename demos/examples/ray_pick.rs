// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pick a cell through a camera, then read one frame of per-instance visuals.
//!
//! This stands in for a renderer: it owns the camera, converts a pointer position to a
//! ray, and applies the frame's colors and weights to its instances.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p stockcube_demos --example ray_pick`

use glam::{Mat4, Vec3};
use kurbo::{Point, Rect};
use stockcube_grid::{GridDimensions, InventoryRecord};
use stockcube_select::adapters::ray_cast::{CellLayout, PickRay, RayCaster};
use stockcube_select::types::{Axis, CellRole, OpacityMode};
use stockcube_select::view::WarehouseView;

fn main() {
    env_logger::init();

    let records = [
        InventoryRecord::new(1, "SKU-3821", "orange"),
        InventoryRecord::new(2, "SKU-1938", "yellow"),
        InventoryRecord::new(4, "SKU-6173", "teal"),
    ];
    let dims = GridDimensions::new(5, 5, 4);
    let mut view = WarehouseView::new(&records, dims).unwrap();

    // Camera straight above the cube, looking down.
    let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
    let camera = Mat4::look_at_rh(Vec3::new(0.0, 40.0, 0.0), Vec3::ZERO, Vec3::NEG_Z);
    let projection = Mat4::perspective_rh(60_f32.to_radians(), 800.0 / 600.0, 0.1, 1000.0);
    let inverse = (projection * camera).inverse();
    let caster = RayCaster::new(CellLayout::default(), dims);

    // Click the centre of the viewport: the top level of the middle column.
    let ray = PickRay::from_viewport(Point::new(400.0, 300.0), viewport, inverse).unwrap();
    let change = view.pick(&caster, &ray).unwrap();
    println!("== Pick ==\n  {:?}", change);
    let cell = view.selected_cell().unwrap();
    println!("  {} level {} {:?}", cell.address, cell.level(), cell.sku());
    assert_eq!(cell.sku(), Some("SKU-3821"));

    // Clicking outside the viewport resolves nothing.
    assert!(PickRay::from_viewport(Point::new(900.0, 10.0), viewport, inverse).is_none());

    view.highlight_axis(Axis::X).unwrap();
    view.set_opacity_mode(OpacityMode::Normal);

    let mut bright = 0;
    let mut dimmed = 0;
    for visual in view.frame() {
        if visual.role.contains(CellRole::SELECTED) {
            println!(
                "== Selected instance ==\n  #{} {} {} w={:.2}",
                visual.index, visual.address, visual.color, visual.weight
            );
        }
        if visual.weight >= 0.5 {
            bright += 1;
        } else {
            dimmed += 1;
        }
    }
    println!("== Frame ==\n  {bright} emphasized, {dimmed} dimmed");

    // A new grid size resets the selection before the next frame.
    view.rebuild(&records, GridDimensions::new(3, 3, 4)).unwrap();
    assert!(view.selected_cell().is_none());
    log::info!("rebuilt; {} instances", view.frame().count());
}
