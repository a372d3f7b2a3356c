// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! AST Node definitions

use super::ops::*;
use super::shapes::*;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A node of the geometry tree.
///
/// Every variant wraps a validated value, so a `Node` is always well formed.
/// Nodes serialize as JSON objects tagged with their [`kind`](Node::kind) under
/// `"type"`; deserialization runs the same validation as the constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", try_from = "RawNode")]
pub enum Node {
    // 2D shapes
    Circle(Circle),
    CircleSector(CircleSector),
    Rectangle(Rectangle),
    Polygon(Polygon),

    // 3D shapes
    Cube(Cube),
    Sphere(Sphere),
    Cylinder(Cylinder),
    Polyhedron(Polyhedron),

    // Transformations
    Translate(Translate),
    Rotate(Rotate),
    Scale(Scale),
    Mirror(Mirror),

    // Boolean operations
    Union(Union),
    Difference(Difference),
    Intersection(Intersection),

    // Extrusions
    LinearExtrusion(LinearExtrusion),
    RotateExtrusion(RotateExtrusion),
}

impl Node {
    /// Snake case name of the node type
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Circle(_) => "circle",
            Node::CircleSector(_) => "circle_sector",
            Node::Rectangle(_) => "rectangle",
            Node::Polygon(_) => "polygon",
            Node::Cube(_) => "cube",
            Node::Sphere(_) => "sphere",
            Node::Cylinder(_) => "cylinder",
            Node::Polyhedron(_) => "polyhedron",
            Node::Translate(_) => "translate",
            Node::Rotate(_) => "rotate",
            Node::Scale(_) => "scale",
            Node::Mirror(_) => "mirror",
            Node::Union(_) => "union",
            Node::Difference(_) => "difference",
            Node::Intersection(_) => "intersection",
            Node::LinearExtrusion(_) => "linear_extrusion",
            Node::RotateExtrusion(_) => "rotate_extrusion",
        }
    }

    /// Get child nodes in render order
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Translate(t) => vec![t.item()],
            Node::Rotate(r) => vec![r.item()],
            Node::Scale(s) => vec![s.item()],
            Node::Mirror(m) => vec![m.item()],
            Node::LinearExtrusion(e) => vec![e.item()],
            Node::RotateExtrusion(e) => vec![e.item()],
            Node::Union(u) => u.items().iter().collect(),
            Node::Difference(d) => d.items().iter().collect(),
            Node::Intersection(i) => i.items().iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Number of nodes in the tree rooted here
    pub fn node_count(&self) -> usize {
        1 + self.children().into_iter().map(Node::node_count).sum::<usize>()
    }
}

macro_rules! impl_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(value: $variant) -> Self {
                    Node::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    Circle,
    CircleSector,
    Rectangle,
    Polygon,
    Cube,
    Sphere,
    Cylinder,
    Polyhedron,
    Translate,
    Rotate,
    Scale,
    Mirror,
    Union,
    Difference,
    Intersection,
    LinearExtrusion,
    RotateExtrusion,
);

/// Unvalidated wire form of [`Node`]
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawNode {
    Circle {
        radius: f64,
    },
    CircleSector {
        radius: f64,
        angle: f64,
    },
    Rectangle {
        width: f64,
        height: f64,
    },
    Polygon {
        points: Vec<Point2>,
    },
    Cube {
        width: f64,
        height: f64,
        depth: f64,
    },
    Sphere {
        radius: f64,
    },
    Cylinder {
        height: f64,
        radius1: f64,
        radius2: f64,
    },
    Polyhedron {
        points: Vec<Point3>,
        #[serde(default)]
        triangles: Vec<[usize; 3]>,
        #[serde(default)]
        quads: Vec<[usize; 4]>,
    },
    Translate {
        x: f64,
        y: f64,
        z: f64,
        item: Box<Node>,
    },
    Rotate {
        degrees: f64,
        vector: Vec<f64>,
        item: Box<Node>,
    },
    Scale {
        x: f64,
        y: f64,
        z: f64,
        item: Box<Node>,
    },
    Mirror {
        vector: Vec<f64>,
        item: Box<Node>,
    },
    Union {
        items: Vec<Node>,
        #[serde(default)]
        layers: bool,
    },
    Difference {
        items: Vec<Node>,
    },
    Intersection {
        items: Vec<Node>,
    },
    LinearExtrusion {
        height: f64,
        #[serde(default)]
        twist: f64,
        item: Box<Node>,
    },
    RotateExtrusion {
        item: Box<Node>,
    },
}

impl TryFrom<RawNode> for Node {
    type Error = ValidationError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let node = match raw {
            RawNode::Circle { radius } => Circle::new(radius)?.into(),
            RawNode::CircleSector { radius, angle } => CircleSector::new(radius, angle)?.into(),
            RawNode::Rectangle { width, height } => Rectangle::new(width, height)?.into(),
            RawNode::Polygon { points } => Polygon::new(points)?.into(),
            RawNode::Cube {
                width,
                height,
                depth,
            } => Cube::new(width, height, depth)?.into(),
            RawNode::Sphere { radius } => Sphere::new(radius)?.into(),
            RawNode::Cylinder {
                height,
                radius1,
                radius2,
            } => Cylinder::new(height, radius1, radius2)?.into(),
            RawNode::Polyhedron {
                points,
                triangles,
                quads,
            } => Polyhedron::new(points, triangles, quads)?.into(),
            RawNode::Translate { x, y, z, item } => Translate::new(x, y, z, *item)?.into(),
            RawNode::Rotate {
                degrees,
                vector,
                item,
            } => Rotate::new(degrees, vector, *item)?.into(),
            RawNode::Scale { x, y, z, item } => Scale::new(x, y, z, *item)?.into(),
            RawNode::Mirror { vector, item } => Mirror::new(vector, *item)?.into(),
            RawNode::Union { items, layers: false } => Union::new(items)?.into(),
            RawNode::Union { items, layers: true } => Union::of_layers(items)?.into(),
            RawNode::Difference { items } => Difference::new(items)?.into(),
            RawNode::Intersection { items } => Intersection::new(items)?.into(),
            RawNode::LinearExtrusion {
                height,
                twist,
                item,
            } => LinearExtrusion::twisted(height, twist, *item)?.into(),
            RawNode::RotateExtrusion { item } => RotateExtrusion::new(*item)?.into(),
        };
        Ok(node)
    }
}
