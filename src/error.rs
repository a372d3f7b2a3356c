// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! Error types
//!
//! Three families, one per stage of the pipeline:
//! - [`ValidationError`]: a node was constructed with invalid parameters
//! - [`ConnectError`]: a list of layers cannot be stacked into a solid
//! - [`RenderError`]: a backend was handed a node it has no rule for

use thiserror::Error;

/// Result alias for node construction.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result alias for rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// A node constructor rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {node}: {reason}")]
pub struct ValidationError {
    /// Kind of the node being built, e.g. `circle`
    pub node: &'static str,
    /// Human readable description of the violated constraint
    pub reason: String,
}

impl ValidationError {
    pub fn new(node: &'static str, reason: impl Into<String>) -> Self {
        Self {
            node,
            reason: reason.into(),
        }
    }
}

/// Failure to connect a sequence of 2D layers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConnectError {
    #[error("at least two shapes are required to connect layers, got {0}")]
    TooFewShapes(usize),

    #[error("joining different shape types is not supported ({lower} followed by {upper})")]
    MixedShapes {
        lower: &'static str,
        upper: &'static str,
    },

    #[error("polygons must have the same number of vertices ({lower} vs {upper})")]
    VertexCountMismatch { lower: usize, upper: usize },

    #[error("connecting {0} layers is not supported")]
    UnsupportedShape(&'static str),

    #[error("layer distance must be a positive number, got {0}")]
    InvalidLayerDistance(f64),

    #[error("invalid orientation {0:?}, expected \"vertical\" or \"horizontal\"")]
    InvalidOrientation(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failure while walking a tree with a backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("the {backend} backend cannot render {node} nodes")]
    UnsupportedNode {
        backend: &'static str,
        node: &'static str,
    },
}
