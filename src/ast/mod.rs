// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! Abstract Syntax Tree module
//!
//! Immutable, validated building blocks of a solid model: primitive shapes,
//! transformations, boolean operations and extrusions.

pub(crate) mod checks;
mod node;
mod ops;
mod shapes;

pub use node::Node;
pub use ops::{
    Difference, Intersection, LinearExtrusion, Mirror, Rotate, RotateExtrusion, Scale, Translate,
    Union,
};
pub use shapes::{
    Circle, CircleSector, Cube, Cylinder, Point2, Point3, Polygon, Polyhedron, Rectangle, Sphere,
};
