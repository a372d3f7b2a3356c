// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! Code generation backends
//!
//! A [`Backend`] supplies the surface syntax for each node kind; the walker in
//! this module owns the traversal and decides which nodes open a nested block.

mod openscad;
pub mod text;

pub use openscad::OpenScadBackend;
pub use text::{Block, Document, Preamble};

use crate::ast::*;
use crate::error::{RenderError, RenderResult};
use tracing::debug;

/// Surface syntax of a target modeling language.
///
/// Leaf hooks return a statement without its terminator, wrapper hooks return
/// the header of the block that will hold their children. Every hook defaults
/// to [`RenderError::UnsupportedNode`], so a backend that lacks a rule for a
/// node fails instead of skipping it.
pub trait Backend {
    /// Short name used in error messages
    fn name(&self) -> &'static str;

    fn unsupported(&self, node: &'static str) -> RenderError {
        RenderError::UnsupportedNode {
            backend: self.name(),
            node,
        }
    }

    fn circle(&self, _circle: &Circle) -> RenderResult<String> {
        Err(self.unsupported("circle"))
    }

    /// Sectors may register helper definitions in the document preamble.
    fn circle_sector(&self, _sector: &CircleSector, _preamble: &mut Preamble) -> RenderResult<String> {
        Err(self.unsupported("circle_sector"))
    }

    fn rectangle(&self, _rectangle: &Rectangle) -> RenderResult<String> {
        Err(self.unsupported("rectangle"))
    }

    fn polygon(&self, _polygon: &Polygon) -> RenderResult<String> {
        Err(self.unsupported("polygon"))
    }

    fn cube(&self, _cube: &Cube) -> RenderResult<String> {
        Err(self.unsupported("cube"))
    }

    fn sphere(&self, _sphere: &Sphere) -> RenderResult<String> {
        Err(self.unsupported("sphere"))
    }

    fn cylinder(&self, _cylinder: &Cylinder) -> RenderResult<String> {
        Err(self.unsupported("cylinder"))
    }

    fn polyhedron(&self, _polyhedron: &Polyhedron) -> RenderResult<String> {
        Err(self.unsupported("polyhedron"))
    }

    fn translate(&self, _translate: &Translate) -> RenderResult<String> {
        Err(self.unsupported("translate"))
    }

    fn rotate(&self, _rotate: &Rotate) -> RenderResult<String> {
        Err(self.unsupported("rotate"))
    }

    fn scale(&self, _scale: &Scale) -> RenderResult<String> {
        Err(self.unsupported("scale"))
    }

    fn mirror(&self, _mirror: &Mirror) -> RenderResult<String> {
        Err(self.unsupported("mirror"))
    }

    fn union(&self, _union: &Union) -> RenderResult<String> {
        Err(self.unsupported("union"))
    }

    fn difference(&self, _difference: &Difference) -> RenderResult<String> {
        Err(self.unsupported("difference"))
    }

    fn intersection(&self, _intersection: &Intersection) -> RenderResult<String> {
        Err(self.unsupported("intersection"))
    }

    fn linear_extrusion(&self, _extrusion: &LinearExtrusion) -> RenderResult<String> {
        Err(self.unsupported("linear_extrusion"))
    }

    fn rotate_extrusion(&self, _extrusion: &RotateExtrusion) -> RenderResult<String> {
        Err(self.unsupported("rotate_extrusion"))
    }
}

/// Render a sequence of top level nodes into one document.
///
/// Either the whole document is returned or the first error; no partial
/// output escapes.
pub fn render_with<B: Backend + ?Sized>(backend: &B, nodes: &[Node]) -> RenderResult<String> {
    let mut doc = Document::new();
    for node in nodes {
        emit(backend, node, &mut doc.preamble, &mut doc.body)?;
    }

    debug!(
        backend = backend.name(),
        roots = nodes.len(),
        nodes = nodes.iter().map(Node::node_count).sum::<usize>(),
        preamble = doc.preamble.len(),
        "rendered document"
    );
    Ok(doc.render())
}

fn emit<B: Backend + ?Sized>(
    backend: &B,
    node: &Node,
    preamble: &mut Preamble,
    block: &mut Block,
) -> RenderResult<()> {
    match node {
        Node::Circle(c) => block.statement(backend.circle(c)?),
        Node::CircleSector(s) => block.statement(backend.circle_sector(s, preamble)?),
        Node::Rectangle(r) => block.statement(backend.rectangle(r)?),
        Node::Polygon(p) => block.statement(backend.polygon(p)?),
        Node::Cube(c) => block.statement(backend.cube(c)?),
        Node::Sphere(s) => block.statement(backend.sphere(s)?),
        Node::Cylinder(c) => block.statement(backend.cylinder(c)?),
        Node::Polyhedron(p) => block.statement(backend.polyhedron(p)?),

        Node::Translate(t) => nest(backend, backend.translate(t)?, [t.item()], preamble, block)?,
        Node::Rotate(r) => nest(backend, backend.rotate(r)?, [r.item()], preamble, block)?,
        Node::Scale(s) => nest(backend, backend.scale(s)?, [s.item()], preamble, block)?,
        Node::Mirror(m) => nest(backend, backend.mirror(m)?, [m.item()], preamble, block)?,

        Node::Union(u) => nest(backend, backend.union(u)?, u.items(), preamble, block)?,
        Node::Difference(d) => nest(backend, backend.difference(d)?, d.items(), preamble, block)?,
        Node::Intersection(i) => {
            nest(backend, backend.intersection(i)?, i.items(), preamble, block)?
        }

        Node::LinearExtrusion(e) => {
            nest(backend, backend.linear_extrusion(e)?, [e.item()], preamble, block)?
        }
        Node::RotateExtrusion(e) => {
            nest(backend, backend.rotate_extrusion(e)?, [e.item()], preamble, block)?
        }
    }
    Ok(())
}

fn nest<'a, B: Backend + ?Sized>(
    backend: &B,
    header: String,
    items: impl IntoIterator<Item = &'a Node>,
    preamble: &mut Preamble,
    block: &mut Block,
) -> RenderResult<()> {
    block.nested(header, |child| {
        for item in items {
            emit(backend, item, preamble, child)?;
        }
        Ok(())
    })
}
