// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ray-cast picking against axis-aligned cell volumes.
//!
//! ## Feature
//!
//! Enable with `ray_cast_adapter`.
//!
//! ## World placement
//!
//! [`CellLayout`] places each cell as a cube centred on
//!
//! - `x' = (x - (dim_x - 1) / 2) * spacing`
//! - `y' = (dim_z - 1 - z) * spacing` (level 1 on top)
//! - `z' = ((dim_y - 1) / 2 - y) * spacing`
//!
//! The mapping is injective and, because the cube edge never exceeds the spacing,
//! distinct cells occupy non-overlapping volumes.
//!
//! ## Notes
//!
//! Unprojection assumes a `[0, 1]` depth range, as produced by glam's
//! `Mat4::perspective_rh`.

use glam::{Mat4, Vec3};
use kurbo::{Point, Rect, Vec2};
use stockcube_grid::{GridAddress, GridDimensions};

use crate::pick::ResolvePick;

/// Spacing and size of the rendered cubes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellLayout {
    spacing: f32,
    cube_size: f32,
}

impl Default for CellLayout {
    fn default() -> Self {
        Self {
            spacing: 2.0,
            cube_size: 1.8,
        }
    }
}

impl CellLayout {
    /// Create a layout. Returns `None` unless `0 < cube_size <= spacing` and both are finite.
    pub fn new(spacing: f32, cube_size: f32) -> Option<Self> {
        let valid = spacing.is_finite()
            && cube_size.is_finite()
            && cube_size > 0.0
            && cube_size <= spacing;
        valid.then_some(Self { spacing, cube_size })
    }

    /// Distance between neighbouring cell centres.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Edge length of a cell cube.
    pub fn cube_size(&self) -> f32 {
        self.cube_size
    }

    /// World-space centre of `addr` in a grid of `dims`.
    pub fn world_center(&self, addr: GridAddress, dims: GridDimensions) -> Vec3 {
        let half_x = (dims.x as f32 - 1.0) / 2.0;
        let half_y = (dims.y as f32 - 1.0) / 2.0;
        Vec3::new(
            (addr.x as f32 - half_x) * self.spacing,
            (dims.z as f32 - 1.0 - addr.z as f32) * self.spacing,
            (half_y - addr.y as f32) * self.spacing,
        )
    }

    /// World-space `(min, max)` corners of the cube for `addr`.
    pub fn world_bounds(&self, addr: GridAddress, dims: GridDimensions) -> (Vec3, Vec3) {
        let center = self.world_center(addr, dims);
        let half = Vec3::splat(self.cube_size / 2.0);
        (center - half, center + half)
    }
}

/// A world-space pick ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PickRay {
    /// Ray origin.
    pub origin: Vec3,
    /// Ray direction; need not be normalized, but must be non-zero.
    pub direction: Vec3,
}

impl PickRay {
    /// Create a ray.
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Unproject a point in normalized device coordinates through an inverse
    /// view-projection matrix.
    ///
    /// Returns `None` if the near and far points coincide.
    pub fn from_ndc(ndc: Vec2, inverse_view_projection: Mat4) -> Option<Self> {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NDC components are in [-1, 1]."
        )]
        let (x, y) = (ndc.x as f32, ndc.y as f32);
        let near = inverse_view_projection.project_point3(Vec3::new(x, y, 0.0));
        let far = inverse_view_projection.project_point3(Vec3::new(x, y, 1.0));
        let direction = (far - near).normalize_or_zero();
        (direction != Vec3::ZERO).then_some(Self::new(near, direction))
    }

    /// Build a ray for a pointer position inside a viewport.
    ///
    /// Returns `None` if the pointer is outside the viewport or the viewport is empty.
    pub fn from_viewport(
        pointer: Point,
        viewport: Rect,
        inverse_view_projection: Mat4,
    ) -> Option<Self> {
        Self::from_ndc(pointer_to_ndc(pointer, viewport)?, inverse_view_projection)
    }

    /// Entry distance along the ray into the box `[min, max]`, if it is hit in front of the origin.
    ///
    /// Slab test. A ray starting inside the box reports `0.0`. Faces are part of the
    /// box, including for a ray that runs along a face plane.
    pub fn intersect_aabb(&self, min: Vec3, max: Vec3) -> Option<f32> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        for axis in 0..3 {
            let origin = self.origin[axis];
            let direction = self.direction[axis];
            if direction == 0.0 {
                // Parallel to this slab: inside it everywhere or nowhere.
                if origin < min[axis] || origin > max[axis] {
                    return None;
                }
                continue;
            }
            let inv = direction.recip();
            let t0 = (min[axis] - origin) * inv;
            let t1 = (max[axis] - origin) * inv;
            t_near = t_near.max(t0.min(t1));
            t_far = t_far.min(t0.max(t1));
        }
        (t_near <= t_far && t_far >= 0.0).then(|| t_near.max(0.0))
    }
}

/// Map a pointer position to normalized device coordinates (`x` right, `y` up, both in `[-1, 1]`).
///
/// Returns `None` if the pointer is outside `viewport` or the viewport has no area.
pub fn pointer_to_ndc(pointer: Point, viewport: Rect) -> Option<Vec2> {
    let viewport = viewport.abs();
    if viewport.width() <= 0.0 || viewport.height() <= 0.0 || !viewport.contains(pointer) {
        return None;
    }
    let u = (pointer.x - viewport.x0) / viewport.width();
    let v = (pointer.y - viewport.y0) / viewport.height();
    Some(Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0))
}

/// Resolves pick rays against every cell cube of a grid.
///
/// Empty cells are pickable too. Holds only the layout and dimensions, so it can be
/// used while the view owning the grid is borrowed mutably.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayCaster {
    layout: CellLayout,
    dims: GridDimensions,
}

impl RayCaster {
    /// Create a ray caster for a grid of `dims`.
    pub const fn new(layout: CellLayout, dims: GridDimensions) -> Self {
        Self { layout, dims }
    }

    /// The layout used for cell volumes.
    pub fn layout(&self) -> CellLayout {
        self.layout
    }

    /// Nearest cell hit by `ray` and its entry distance.
    ///
    /// Equal distances resolve to the lower linear index.
    pub fn hit(&self, ray: &PickRay) -> Option<(GridAddress, f32)> {
        if ray.direction == Vec3::ZERO {
            return None;
        }
        let mut best: Option<(GridAddress, f32)> = None;
        for addr in self.dims.addresses() {
            let (min, max) = self.layout.world_bounds(addr, self.dims);
            if let Some(t) = ray.intersect_aabb(min, max)
                && best.is_none_or(|(_, bt)| t < bt)
            {
                best = Some((addr, t));
            }
        }
        best
    }
}

impl ResolvePick<PickRay> for RayCaster {
    fn resolve_pick(&self, ray: &PickRay) -> Option<GridAddress> {
        self.hit(ray).map(|(addr, _)| addr)
    }
}
