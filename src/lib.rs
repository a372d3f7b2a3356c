// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! Tangible
//!
//! Turns numeric data into parametric solid models. Callers assemble a
//! validated geometry AST, optionally stack 2D layers into solids with
//! [`geometry::connect`], and render the tree to OpenSCAD source.

pub mod ast;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;

pub use ast::Node;
pub use backend::{Backend, OpenScadBackend};
pub use config::TangibleConfig;
pub use error::{ConnectError, RenderError, ValidationError};
pub use geometry::{connect, Orientation};

use error::RenderResult;

/// Render a single tree to OpenSCAD source
pub fn render(node: &Node) -> RenderResult<String> {
    render_all(std::slice::from_ref(node))
}

/// Render several top level trees, in order, into one OpenSCAD document
pub fn render_all(nodes: &[Node]) -> RenderResult<String> {
    backend::render_with(&OpenScadBackend, nodes)
}
