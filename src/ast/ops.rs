// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! Transformations, boolean operations and extrusions

use super::checks::{axes, finite, non_zero};
use super::Node;
use crate::error::{ValidationError, ValidationResult};
use serde::Serialize;

// Transformations

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Translate {
    x: f64,
    y: f64,
    z: f64,
    item: Box<Node>,
}

impl Translate {
    pub fn new(x: f64, y: f64, z: f64, item: impl Into<Node>) -> ValidationResult<Self> {
        Ok(Self {
            x: finite("translate", "x", x)?,
            y: finite("translate", "y", y)?,
            z: finite("translate", "z", z)?,
            item: Box::new(item.into()),
        })
    }

    pub fn vector(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn item(&self) -> &Node {
        &self.item
    }
}

/// Rotation by `degrees` around the axes selected in `vector`.
///
/// Each component of `vector` is 0 or 1; rotations compose in x, y, z order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rotate {
    degrees: f64,
    vector: [f64; 3],
    item: Box<Node>,
}

impl Rotate {
    pub fn new(degrees: f64, vector: impl AsRef<[f64]>, item: impl Into<Node>) -> ValidationResult<Self> {
        let degrees = finite("rotate", "degrees", degrees)?;
        Ok(Self {
            degrees,
            vector: axes("rotate", vector.as_ref())?,
            item: Box::new(item.into()),
        })
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn vector(&self) -> [f64; 3] {
        self.vector
    }

    pub fn item(&self) -> &Node {
        &self.item
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    x: f64,
    y: f64,
    z: f64,
    item: Box<Node>,
}

impl Scale {
    pub fn new(x: f64, y: f64, z: f64, item: impl Into<Node>) -> ValidationResult<Self> {
        Ok(Self {
            x: non_zero("scale", "x", x)?,
            y: non_zero("scale", "y", y)?,
            z: non_zero("scale", "z", z)?,
            item: Box::new(item.into()),
        })
    }

    pub fn factors(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn item(&self) -> &Node {
        &self.item
    }
}

/// Mirror through the plane with normal `vector` passing the origin.
///
/// Each component of `vector` is 0 or 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mirror {
    vector: [f64; 3],
    item: Box<Node>,
}

impl Mirror {
    pub fn new(vector: impl AsRef<[f64]>, item: impl Into<Node>) -> ValidationResult<Self> {
        Ok(Self {
            vector: axes("mirror", vector.as_ref())?,
            item: Box::new(item.into()),
        })
    }

    pub fn vector(&self) -> [f64; 3] {
        self.vector
    }

    pub fn item(&self) -> &Node {
        &self.item
    }
}

// Boolean operations

fn operands(node: &'static str, items: Vec<Node>) -> ValidationResult<Vec<Node>> {
    if items.len() < 2 {
        return Err(ValidationError::new(
            node,
            format!("at least 2 items are required, got {}", items.len()),
        ));
    }
    Ok(items)
}

/// Union of `items`.
///
/// Unions produced by the layer connector are flagged with `layers` and may
/// hold a single connector solid. The flag is serialized so such a union
/// loads back from JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Union {
    items: Vec<Node>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    layers: bool,
}

impl Union {
    pub fn new(items: Vec<Node>) -> ValidationResult<Self> {
        Ok(Self {
            items: operands("union", items)?,
            layers: false,
        })
    }

    pub(crate) fn of_layers(items: Vec<Node>) -> ValidationResult<Self> {
        if items.is_empty() {
            return Err(ValidationError::new("union", "a layer union needs at least 1 item"));
        }
        Ok(Self {
            items,
            layers: true,
        })
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }

    /// Whether this union stacks connector solids
    pub fn is_layers(&self) -> bool {
        self.layers
    }
}

/// The first item is the base, every following item is subtracted from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Difference {
    items: Vec<Node>,
}

impl Difference {
    pub fn new(items: Vec<Node>) -> ValidationResult<Self> {
        Ok(Self {
            items: operands("difference", items)?,
        })
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Intersection {
    items: Vec<Node>,
}

impl Intersection {
    pub fn new(items: Vec<Node>) -> ValidationResult<Self> {
        Ok(Self {
            items: operands("intersection", items)?,
        })
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }
}

// Extrusions

/// Extrude a 2D item along z, optionally twisting it by `twist` degrees
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearExtrusion {
    height: f64,
    twist: f64,
    item: Box<Node>,
}

impl LinearExtrusion {
    pub fn new(height: f64, item: impl Into<Node>) -> ValidationResult<Self> {
        Self::twisted(height, 0.0, item)
    }

    pub fn twisted(height: f64, twist: f64, item: impl Into<Node>) -> ValidationResult<Self> {
        Ok(Self {
            height: finite("linear_extrusion", "height", height)?,
            twist: finite("linear_extrusion", "twist", twist)?,
            item: Box::new(item.into()),
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn twist(&self) -> f64 {
        self.twist
    }

    pub fn item(&self) -> &Node {
        &self.item
    }
}

/// Revolve a 2D item around the z axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RotateExtrusion {
    item: Box<Node>,
}

impl RotateExtrusion {
    pub fn new(item: impl Into<Node>) -> ValidationResult<Self> {
        Ok(Self {
            item: Box::new(item.into()),
        })
    }

    pub fn item(&self) -> &Node {
        &self.item
    }
}
