// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The picking contract between a renderer and the selection state.
//!
//! The selection crate does not perform hit testing. A rendering layer resolves a
//! pointer ray against its own geometry and hands back a [`GridAddress`]; see
//! [`adapters`](crate::adapters) for a ray-cast implementation over axis-aligned cell
//! volumes.

use stockcube_grid::GridAddress;

/// Resolve a pointer ray to the cell under it.
///
/// `R` is whatever the renderer uses to describe a pick: a camera ray, a screen point,
/// or an instance id from a GPU pick buffer.
pub trait ResolvePick<R: ?Sized> {
    /// The nearest cell hit by `ray`, or `None` on a miss.
    fn resolve_pick(&self, ray: &R) -> Option<GridAddress>;
}

impl<R: ?Sized, F> ResolvePick<R> for F
where
    F: Fn(&R) -> Option<GridAddress>,
{
    fn resolve_pick(&self, ray: &R) -> Option<GridAddress> {
        self(ray)
    }
}
