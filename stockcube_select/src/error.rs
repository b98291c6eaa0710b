// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for selection transitions.

use stockcube_grid::GridError;
use thiserror::Error;

/// Failures raised by [`SelectionController`](crate::selection::SelectionController).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The transition needs a selected cell and none is selected.
    ///
    /// Recoverable: callers should not offer highlight or clear actions while idle.
    #[error("no cell is selected")]
    NoSelection,
    /// The address does not fit the current grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}
