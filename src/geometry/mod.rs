// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! Geometry module - layer stacking and polyhedron face handling

pub mod faces;
mod layers;

pub use faces::{is_watertight, split_quad, triangulate};
pub use layers::{connect, Orientation};
