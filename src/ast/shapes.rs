// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! Primitive 2D and 3D shapes

use super::checks::{finite, positive};
use crate::error::{ValidationError, ValidationResult};
use ahash::AHashSet;
use serde::Serialize;

/// 2D coordinate
pub type Point2 = [f64; 2];

/// 3D coordinate
pub type Point3 = [f64; 3];

// 2D shapes

/// Disc centered at the origin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> ValidationResult<Self> {
        Ok(Self {
            radius: positive("circle", "radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Slice of a disc spanning `angle` degrees counterclockwise from the x axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleSector {
    radius: f64,
    angle: f64,
}

impl CircleSector {
    pub fn new(radius: f64, angle: f64) -> ValidationResult<Self> {
        let radius = positive("circle_sector", "radius", radius)?;
        if !(angle > 0.0 && angle <= 360.0) {
            return Err(ValidationError::new(
                "circle_sector",
                format!("angle must be in (0, 360], got {angle}"),
            ));
        }
        Ok(Self { radius, angle })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }
}

/// Axis aligned rectangle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> ValidationResult<Self> {
        Ok(Self {
            width: positive("rectangle", "width", width)?,
            height: positive("rectangle", "height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Closed polygon. The last point repeats the first one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    pub fn new(points: Vec<Point2>) -> ValidationResult<Self> {
        if points.len() < 4 {
            return Err(ValidationError::new(
                "polygon",
                format!(
                    "at least 4 points (3 vertices plus the closing point) are required, got {}",
                    points.len()
                ),
            ));
        }
        for point in &points {
            finite("polygon", "x", point[0])?;
            finite("polygon", "y", point[1])?;
        }
        if points.first() != points.last() {
            return Err(ValidationError::new(
                "polygon",
                "polygon is not closed, the last point must equal the first",
            ));
        }

        // +0.0 folds negative zero into positive zero before hashing
        let distinct: AHashSet<[u64; 2]> = points[..points.len() - 1]
            .iter()
            .map(|[x, y]| [(x + 0.0).to_bits(), (y + 0.0).to_bits()])
            .collect();
        if distinct.len() < 3 {
            return Err(ValidationError::new(
                "polygon",
                format!("at least 3 distinct vertices are required, got {}", distinct.len()),
            ));
        }

        Ok(Self { points })
    }

    /// All points including the closing repeat
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Points without the closing repeat
    pub fn vertices(&self) -> &[Point2] {
        &self.points[..self.points.len() - 1]
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len() - 1
    }
}

// 3D shapes

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cube {
    width: f64,
    height: f64,
    depth: f64,
}

impl Cube {
    pub fn new(width: f64, height: f64, depth: f64) -> ValidationResult<Self> {
        Ok(Self {
            width: positive("cube", "width", width)?,
            height: positive("cube", "height", height)?,
            depth: positive("cube", "depth", depth)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    pub fn new(radius: f64) -> ValidationResult<Self> {
        Ok(Self {
            radius: positive("sphere", "radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Cylinder or frustum standing on the xy plane.
///
/// `radius1` is the bottom radius, `radius2` the top radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cylinder {
    height: f64,
    radius1: f64,
    radius2: f64,
}

impl Cylinder {
    pub fn new(height: f64, radius1: f64, radius2: f64) -> ValidationResult<Self> {
        Ok(Self {
            height: positive("cylinder", "height", height)?,
            radius1: positive("cylinder", "radius1", radius1)?,
            radius2: positive("cylinder", "radius2", radius2)?,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn radius1(&self) -> f64 {
        self.radius1
    }

    pub fn radius2(&self) -> f64 {
        self.radius2
    }
}

/// Solid described by its points and faces.
///
/// Faces list point indices clockwise when looking at the face from outside.
/// Triangles and quads may be mixed; at least one list must be non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyhedron {
    points: Vec<Point3>,
    triangles: Vec<[usize; 3]>,
    quads: Vec<[usize; 4]>,
}

impl Polyhedron {
    pub fn new(
        points: Vec<Point3>,
        triangles: Vec<[usize; 3]>,
        quads: Vec<[usize; 4]>,
    ) -> ValidationResult<Self> {
        if points.len() < 4 {
            return Err(ValidationError::new(
                "polyhedron",
                format!("at least 4 points are required, got {}", points.len()),
            ));
        }
        for point in &points {
            for value in point {
                finite("polyhedron", "point coordinate", *value)?;
            }
        }
        if triangles.is_empty() && quads.is_empty() {
            return Err(ValidationError::new(
                "polyhedron",
                "at least one of triangles or quads must be provided",
            ));
        }

        let count = points.len();
        let faces = triangles
            .iter()
            .map(|t| t.as_slice())
            .chain(quads.iter().map(|q| q.as_slice()));
        for face in faces {
            if let Some(index) = face.iter().find(|&&i| i >= count) {
                return Err(ValidationError::new(
                    "polyhedron",
                    format!("face {face:?} references point {index}, but only {count} points exist"),
                ));
            }
        }

        Ok(Self {
            points,
            triangles,
            quads,
        })
    }

    pub fn from_triangles(points: Vec<Point3>, triangles: Vec<[usize; 3]>) -> ValidationResult<Self> {
        Self::new(points, triangles, Vec::new())
    }

    pub fn from_quads(points: Vec<Point3>, quads: Vec<[usize; 4]>) -> ValidationResult<Self> {
        Self::new(points, Vec::new(), quads)
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    pub fn quads(&self) -> &[[usize; 4]] {
        &self.quads
    }
}
