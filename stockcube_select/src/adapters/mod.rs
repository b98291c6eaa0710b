// Copyright 2025 the Stockcube Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking adapters that turn renderer input into cell addresses.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "ray_cast_adapter")]
pub mod ray_cast;
