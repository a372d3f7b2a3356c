// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! OpenSCAD backend

use super::{Backend, Preamble};
use crate::ast::*;
use crate::error::RenderResult;
use crate::geometry::triangulate;
use tracing::trace;

/// Helper module drawing a sector of `a` degrees with radius `r`.
///
/// The disc is clipped by a fan polygon reaching out to `2 * r`, which stays
/// outside the circle for steps of at most 6 degrees.
const CIRCLE_SECTOR_MODULE: &str = "\
module circle_sector(r, a) {
    steps = max(ceil(a / 6), 1);
    fan = [for (i = [0 : steps]) [2 * r * cos(i * a / steps), 2 * r * sin(i * a / steps)]];
    intersection() {
        circle(r);
        polygon(concat([[0, 0]], fan));
    }
}";

/// Renders trees as OpenSCAD source
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenScadBackend;

impl OpenScadBackend {
    pub fn new() -> Self {
        Self
    }
}

/// `[a, b, c]` using the default float formatting (`1`, `0.5`)
fn list<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    let parts: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

fn nested_list<T: ToString + Copy, const N: usize>(rows: &[[T; N]]) -> String {
    list(rows.iter().map(|row| list(row.iter().copied())))
}

impl Backend for OpenScadBackend {
    fn name(&self) -> &'static str {
        "openscad"
    }

    fn circle(&self, circle: &Circle) -> RenderResult<String> {
        Ok(format!("circle({})", circle.radius()))
    }

    fn circle_sector(&self, sector: &CircleSector, preamble: &mut Preamble) -> RenderResult<String> {
        if preamble.register("circle_sector", CIRCLE_SECTOR_MODULE) {
            trace!("registered circle_sector module");
        }
        Ok(format!("circle_sector({}, {})", sector.radius(), sector.angle()))
    }

    fn rectangle(&self, rectangle: &Rectangle) -> RenderResult<String> {
        Ok(format!("square({})", list([rectangle.width(), rectangle.height()])))
    }

    fn polygon(&self, polygon: &Polygon) -> RenderResult<String> {
        Ok(format!("polygon({})", nested_list(polygon.vertices())))
    }

    fn cube(&self, cube: &Cube) -> RenderResult<String> {
        // OpenSCAD sizes are x, y, z; our depth runs along y
        Ok(format!("cube({})", list([cube.width(), cube.depth(), cube.height()])))
    }

    fn sphere(&self, sphere: &Sphere) -> RenderResult<String> {
        Ok(format!("sphere({})", sphere.radius()))
    }

    fn cylinder(&self, cylinder: &Cylinder) -> RenderResult<String> {
        Ok(format!(
            "cylinder({}, {}, {})",
            cylinder.height(),
            cylinder.radius1(),
            cylinder.radius2()
        ))
    }

    fn polyhedron(&self, polyhedron: &Polyhedron) -> RenderResult<String> {
        Ok(format!(
            "polyhedron({}, {})",
            nested_list(polyhedron.points()),
            nested_list(triangulate(polyhedron).as_slice())
        ))
    }

    fn translate(&self, translate: &Translate) -> RenderResult<String> {
        Ok(format!("translate({})", list(translate.vector())))
    }

    fn rotate(&self, rotate: &Rotate) -> RenderResult<String> {
        Ok(format!("rotate({}, {})", rotate.degrees(), list(rotate.vector())))
    }

    fn scale(&self, scale: &Scale) -> RenderResult<String> {
        Ok(format!("scale({})", list(scale.factors())))
    }

    fn mirror(&self, mirror: &Mirror) -> RenderResult<String> {
        Ok(format!("mirror({})", list(mirror.vector())))
    }

    fn union(&self, _union: &Union) -> RenderResult<String> {
        Ok("union()".to_string())
    }

    fn difference(&self, _difference: &Difference) -> RenderResult<String> {
        Ok("difference()".to_string())
    }

    fn intersection(&self, _intersection: &Intersection) -> RenderResult<String> {
        Ok("intersection()".to_string())
    }

    fn linear_extrusion(&self, extrusion: &LinearExtrusion) -> RenderResult<String> {
        Ok(format!(
            "linear_extrude({}, twist={})",
            extrusion.height(),
            extrusion.twist()
        ))
    }

    fn rotate_extrusion(&self, _extrusion: &RotateExtrusion) -> RenderResult<String> {
        Ok("rotate_extrude()".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::render_with;

    fn verify(node: impl Into<Node>, code: &str) {
        assert_eq!(render_with(&OpenScadBackend, &[node.into()]).unwrap(), code);
    }

    fn circle(radius: f64) -> Circle {
        Circle::new(radius).unwrap()
    }

    #[test]
    fn test_primitives() {
        verify(circle(10.0), "circle(10);");
        verify(circle(5.5), "circle(5.5);");
        verify(Rectangle::new(1.0, 2.0).unwrap(), "square([1, 2]);");
        verify(Cube::new(1.0, 2.0, 3.0).unwrap(), "cube([1, 3, 2]);");
        verify(Sphere::new(10.0).unwrap(), "sphere(10);");
        verify(Cylinder::new(3.0, 1.0, 2.0).unwrap(), "cylinder(3, 1, 2);");
    }

    #[test]
    fn test_polygon_drops_closing_point() {
        let polygon = Polygon::new(vec![[0.0, 0.0], [0.0, 2.0], [1.0, 2.0], [0.0, 0.0]]).unwrap();
        verify(polygon, "polygon([[0, 0], [0, 2], [1, 2]]);");
    }

    #[test]
    fn test_transformations() {
        verify(
            Translate::new(1.0, 2.0, 3.0, circle(1.0)).unwrap(),
            "translate([1, 2, 3])\n{\n    circle(1);\n};",
        );
        verify(
            Rotate::new(30.0, [0.0, 1.0, 0.0], circle(1.0)).unwrap(),
            "rotate(30, [0, 1, 0])\n{\n    circle(1);\n};",
        );
        verify(
            Scale::new(2.0, 0.5, -1.0, circle(1.0)).unwrap(),
            "scale([2, 0.5, -1])\n{\n    circle(1);\n};",
        );
        verify(
            Mirror::new([0.0, 1.0, 1.0], circle(1.0)).unwrap(),
            "mirror([0, 1, 1])\n{\n    circle(1);\n};",
        );
    }

    #[test]
    fn test_extrusions() {
        verify(
            LinearExtrusion::new(7.0, circle(1.0)).unwrap(),
            "linear_extrude(7, twist=0)\n{\n    circle(1);\n};",
        );
        verify(
            LinearExtrusion::twisted(7.0, 90.0, circle(1.0)).unwrap(),
            "linear_extrude(7, twist=90)\n{\n    circle(1);\n};",
        );
        verify(
            RotateExtrusion::new(circle(1.0)).unwrap(),
            "rotate_extrude()\n{\n    circle(1);\n};",
        );
    }

    #[test]
    fn test_sector_statement() {
        let out = render_with(&OpenScadBackend, &[CircleSector::new(10.0, 270.0).unwrap().into()]).unwrap();
        assert!(out.starts_with("module circle_sector(r, a) {"));
        assert!(out.ends_with("}\n\ncircle_sector(10, 270);"));
    }

    #[test]
    fn test_polyhedron_expands_quads() {
        let points = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.5]];
        let polyhedron = Polyhedron::new(points, vec![[0, 1, 3]], vec![[0, 1, 2, 3]]).unwrap();
        verify(
            polyhedron,
            "polyhedron([[0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0.5]], [[0, 1, 3], [0, 1, 2], [0, 2, 3]]);",
        );
    }
}
