// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! Face list utilities for polyhedra

use crate::ast::Polyhedron;
use ahash::AHashMap;

/// Split a quad along the diagonal from its first to its third point.
///
/// Both triangles keep the winding of the quad.
pub fn split_quad([a, b, c, d]: [usize; 4]) -> [[usize; 3]; 2] {
    [[a, b, c], [a, c, d]]
}

/// All faces of a polyhedron as triangles: triangles first, then split quads.
pub fn triangulate(polyhedron: &Polyhedron) -> Vec<[usize; 3]> {
    let mut faces = Vec::with_capacity(polyhedron.triangles().len() + 2 * polyhedron.quads().len());
    faces.extend_from_slice(polyhedron.triangles());
    for quad in polyhedron.quads() {
        faces.extend(split_quad(*quad));
    }
    faces
}

/// Check that every edge is shared by exactly two faces walking it in opposite
/// directions, i.e. the surface is closed and consistently wound.
pub fn is_watertight(polyhedron: &Polyhedron) -> bool {
    let mut directed: AHashMap<(usize, usize), u32> = AHashMap::new();

    for face in triangulate(polyhedron) {
        for i in 0..3 {
            let edge = (face[i], face[(i + 1) % 3]);
            *directed.entry(edge).or_insert(0) += 1;
        }
    }

    directed
        .iter()
        .all(|(&(from, to), &count)| count == 1 && directed.get(&(to, from)) == Some(&1))
}
