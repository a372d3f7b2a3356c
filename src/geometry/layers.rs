// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! Layer connector
//!
//! Stacks a sequence of 2D cross-sections along z and joins every consecutive
//! pair with a solid:
//!
//! ```text
//! circle    -> cylinder (frustum)
//! rectangle -> 8 point polyhedron
//! polygon   -> 2N point polyhedron with fan triangulated caps
//! ```

use super::faces::is_watertight;
use crate::ast::{Cylinder, Node, Point3, Polygon, Polyhedron, Rectangle, Rotate, Translate, Union};
use crate::error::ConnectError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Direction of the stacking axis in the final model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Layers stacked along z
    #[default]
    Vertical,
    /// Layers stacked along x (the vertical stack rotated 90 degrees around y)
    Horizontal,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ConnectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Orientation::Vertical),
            "horizontal" => Ok(Orientation::Horizontal),
            other => Err(ConnectError::InvalidOrientation(other.to_string())),
        }
    }
}

/// Connect consecutive 2D layers into one solid.
///
/// Connector `i` joins `shapes[i]` and `shapes[i + 1]` and is translated to
/// `z = i * layer_distance`. All connectors are combined in a single union,
/// which is rotated onto the x axis for [`Orientation::Horizontal`].
pub fn connect(
    shapes: &[Node],
    layer_distance: f64,
    orientation: Orientation,
) -> Result<Node, ConnectError> {
    if shapes.len() < 2 {
        return Err(ConnectError::TooFewShapes(shapes.len()));
    }
    if !(layer_distance > 0.0 && layer_distance.is_finite()) {
        return Err(ConnectError::InvalidLayerDistance(layer_distance));
    }

    let mut connectors = Vec::with_capacity(shapes.len() - 1);
    for (i, pair) in shapes.windows(2).enumerate() {
        let solid = connect_pair(&pair[0], &pair[1], layer_distance)?;
        let z = i as f64 * layer_distance;
        trace!(layer = i, kind = solid.kind(), z, "connected layer pair");
        connectors.push(Translate::new(0.0, 0.0, z, solid)?.into());
    }

    debug!(
        layers = shapes.len(),
        kind = shapes[0].kind(),
        %orientation,
        "connected 2D layers"
    );

    let union = Node::from(Union::of_layers(connectors)?);
    match orientation {
        Orientation::Vertical => Ok(union),
        Orientation::Horizontal => Ok(Rotate::new(90.0, [0.0, 1.0, 0.0], union)?.into()),
    }
}

fn connect_pair(lower: &Node, upper: &Node, height: f64) -> Result<Node, ConnectError> {
    match (lower, upper) {
        (Node::Circle(a), Node::Circle(b)) => Ok(Cylinder::new(height, a.radius(), b.radius())?.into()),
        (Node::Rectangle(a), Node::Rectangle(b)) => Ok(rectangle_frustum(a, b, height)?.into()),
        (Node::Polygon(a), Node::Polygon(b)) => Ok(polygon_prism(a, b, height)?.into()),
        _ if lower.kind() != upper.kind() => Err(ConnectError::MixedShapes {
            lower: lower.kind(),
            upper: upper.kind(),
        }),
        _ => Err(ConnectError::UnsupportedShape(lower.kind())),
    }
}

/// Corners of a rectangle centered at the origin, clockwise seen from above
fn rectangle_ring(rectangle: &Rectangle, z: f64) -> [Point3; 4] {
    let x = rectangle.width() / 2.0;
    let y = rectangle.height() / 2.0;
    [[-x, -y, z], [-x, y, z], [x, y, z], [x, -y, z]]
}

fn rectangle_frustum(
    lower: &Rectangle,
    upper: &Rectangle,
    height: f64,
) -> Result<Polyhedron, ConnectError> {
    let mut points = Vec::with_capacity(8);
    points.extend(rectangle_ring(lower, 0.0));
    points.extend(rectangle_ring(upper, height));

    let quads = vec![
        [0, 3, 2, 1], // bottom
        [0, 1, 5, 4],
        [1, 2, 6, 5],
        [2, 3, 7, 6],
        [3, 0, 4, 7],
        [4, 5, 6, 7], // top
    ];
    let polyhedron = Polyhedron::from_quads(points, quads)?;
    debug_assert!(is_watertight(&polyhedron));
    Ok(polyhedron)
}

fn polygon_prism(lower: &Polygon, upper: &Polygon, height: f64) -> Result<Polyhedron, ConnectError> {
    let n = lower.vertex_count();
    if n != upper.vertex_count() {
        return Err(ConnectError::VertexCountMismatch {
            lower: n,
            upper: upper.vertex_count(),
        });
    }

    let points = lower
        .vertices()
        .iter()
        .map(|&[x, y]| [x, y, 0.0])
        .chain(upper.vertices().iter().map(|&[x, y]| [x, y, height]))
        .collect();

    let quads = (0..n)
        .map(|j| {
            let next = (j + 1) % n;
            [j, next, n + next, n + j]
        })
        .collect();

    // Fan from the first vertex of each ring; the bottom cap is reversed so
    // that it faces down.
    let bottom = (1..n - 1).map(|j| [0, j + 1, j]);
    let top = (1..n - 1).map(|j| [n, n + j, n + j + 1]);
    let triangles = bottom.chain(top).collect();

    let polyhedron = Polyhedron::new(points, triangles, quads)?;
    debug_assert!(is_watertight(&polyhedron));
    Ok(polyhedron)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Circle, Sphere};
    use approx::assert_relative_eq;

    fn circles(radii: &[f64]) -> Vec<Node> {
        radii.iter().map(|&r| Circle::new(r).unwrap().into()).collect()
    }

    fn square(points: &[[f64; 2]]) -> Node {
        let mut closed = points.to_vec();
        closed.push(points[0]);
        Polygon::new(closed).unwrap().into()
    }

    fn translated(node: &Node) -> (&Translate, &Node) {
        match node {
            Node::Translate(t) => (t, t.item()),
            other => panic!("expected translate, got {}", other.kind()),
        }
    }

    #[test]
    fn test_two_circles_vertical() {
        let result = connect(&circles(&[3.0, 8.0]), 10.0, Orientation::Vertical).unwrap();
        let expected = Node::from(Union::of_layers(vec![Translate::new(
            0.0,
            0.0,
            0.0,
            Cylinder::new(10.0, 3.0, 8.0).unwrap(),
        )
        .unwrap()
        .into()])
        .unwrap());
        assert_eq!(result, expected);
    }

    #[test]
    fn test_connector_count_and_offsets() {
        let result = connect(&circles(&[1.0, 2.0, 3.0, 4.0, 5.0]), 0.1, Orientation::Vertical).unwrap();
        let Node::Union(union) = result else {
            panic!("expected union");
        };
        assert_eq!(union.items().len(), 4);
        let offsets = [0.0, 0.1, 0.2, 0.3];
        for (item, expected) in union.items().iter().zip(offsets) {
            let (translate, solid) = translated(item);
            let [x, y, z] = translate.vector();
            assert_eq!((x, y), (0.0, 0.0));
            assert_relative_eq!(z, expected);
            assert_eq!(solid.kind(), "cylinder");
        }
    }

    #[test]
    fn test_horizontal_wraps_same_union() {
        let shapes = circles(&[3.0, 8.0, 2.0]);
        let vertical = connect(&shapes, 10.0, Orientation::Vertical).unwrap();
        let horizontal = connect(&shapes, 10.0, Orientation::Horizontal).unwrap();
        let expected = Node::from(Rotate::new(90.0, [0.0, 1.0, 0.0], vertical).unwrap());
        assert_eq!(horizontal, expected);
    }

    #[test]
    fn test_rectangle_pair() {
        let shapes: Vec<Node> = vec![
            Rectangle::new(4.0, 2.0).unwrap().into(),
            Rectangle::new(3.0, 1.0).unwrap().into(),
        ];
        let Node::Union(union) = connect(&shapes, 5.0, Orientation::Vertical).unwrap() else {
            panic!("expected union");
        };
        let (_, solid) = translated(&union.items()[0]);
        let Node::Polyhedron(polyhedron) = solid else {
            panic!("expected polyhedron");
        };
        assert_eq!(
            polyhedron.points(),
            &[
                [-2.0, -1.0, 0.0],
                [-2.0, 1.0, 0.0],
                [2.0, 1.0, 0.0],
                [2.0, -1.0, 0.0],
                [-1.5, -0.5, 5.0],
                [-1.5, 0.5, 5.0],
                [1.5, 0.5, 5.0],
                [1.5, -0.5, 5.0],
            ]
        );
        assert_eq!(polyhedron.quads().len(), 6);
        assert!(polyhedron.triangles().is_empty());
        assert!(is_watertight(polyhedron));
    }

    #[test]
    fn test_polygon_pair() {
        let shapes = vec![
            square(&[[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]]),
            square(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]),
        ];
        let Node::Union(union) = connect(&shapes, 3.0, Orientation::Vertical).unwrap() else {
            panic!("expected union");
        };
        let (_, solid) = translated(&union.items()[0]);
        let Node::Polyhedron(polyhedron) = solid else {
            panic!("expected polyhedron");
        };
        assert_eq!(polyhedron.points().len(), 8);
        assert_eq!(polyhedron.points()[4], [0.0, 0.0, 3.0]);
        assert_eq!(
            polyhedron.quads(),
            &[[0, 1, 5, 4], [1, 2, 6, 5], [2, 3, 7, 6], [3, 0, 4, 7]]
        );
        assert_eq!(polyhedron.triangles(), &[[0, 2, 1], [0, 3, 2], [4, 5, 6], [4, 6, 7]]);
        assert!(is_watertight(polyhedron));
    }

    #[test]
    fn test_polygon_vertex_count_mismatch() {
        let shapes = vec![
            square(&[[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]]),
            square(&[[0.0, 0.0], [0.0, 1.0], [1.0, 0.0]]),
        ];
        let err = connect(&shapes, 3.0, Orientation::Vertical).unwrap_err();
        assert_eq!(err, ConnectError::VertexCountMismatch { lower: 4, upper: 3 });
    }

    #[test]
    fn test_mixed_shapes() {
        let shapes: Vec<Node> = vec![
            Circle::new(1.0).unwrap().into(),
            Rectangle::new(1.0, 1.0).unwrap().into(),
        ];
        let err = connect(&shapes, 1.0, Orientation::Vertical).unwrap_err();
        assert!(matches!(
            err,
            ConnectError::MixedShapes {
                lower: "circle",
                upper: "rectangle"
            }
        ));
        assert!(err.to_string().contains("joining different shape types is not supported"));
    }

    #[test]
    fn test_unsupported_shape() {
        let shapes: Vec<Node> = vec![Sphere::new(1.0).unwrap().into(), Sphere::new(2.0).unwrap().into()];
        let err = connect(&shapes, 1.0, Orientation::Vertical).unwrap_err();
        assert_eq!(err, ConnectError::UnsupportedShape("sphere"));
    }

    #[test]
    fn test_too_few_shapes_and_bad_distance() {
        assert_eq!(
            connect(&circles(&[1.0]), 1.0, Orientation::Vertical).unwrap_err(),
            ConnectError::TooFewShapes(1)
        );
        let err = connect(&circles(&[1.0, 2.0]), 0.0, Orientation::Vertical).unwrap_err();
        assert_eq!(err, ConnectError::InvalidLayerDistance(0.0));
        assert_eq!(err.to_string(), "layer distance must be a positive number, got 0");
        assert!(matches!(
            connect(&circles(&[1.0, 2.0]), f64::NAN, Orientation::Vertical),
            Err(ConnectError::InvalidLayerDistance(_))
        ));
    }

    #[test]
    fn test_orientation_from_str() {
        assert_eq!("vertical".parse::<Orientation>(), Ok(Orientation::Vertical));
        assert_eq!("horizontal".parse::<Orientation>(), Ok(Orientation::Horizontal));
        assert_eq!(
            "diagonal".parse::<Orientation>(),
            Err(ConnectError::InvalidOrientation("diagonal".to_string()))
        );
        assert_eq!(Orientation::Horizontal.to_string(), "horizontal");
    }

    #[test]
    fn test_input_is_not_consumed() {
        let shapes = circles(&[3.0, 8.0]);
        let before = shapes.clone();
        let first = connect(&shapes, 10.0, Orientation::Vertical).unwrap();
        let second = connect(&shapes, 10.0, Orientation::Vertical).unwrap();
        assert_eq!(shapes, before);
        assert_eq!(first, second);
    }
}
