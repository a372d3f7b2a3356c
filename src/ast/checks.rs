// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! Shared parameter checks used by the node constructors

use crate::error::{ValidationError, ValidationResult};

pub(crate) fn finite(node: &'static str, name: &str, value: f64) -> ValidationResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::new(
            node,
            format!("{name} must be a finite number, got {value}"),
        ))
    }
}

/// NaN fails the comparison, so it is rejected here as well.
pub(crate) fn positive(node: &'static str, name: &str, value: f64) -> ValidationResult<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::new(
            node,
            format!("{name} must be a positive number, got {value}"),
        ))
    }
}

pub(crate) fn non_zero(node: &'static str, name: &str, value: f64) -> ValidationResult<f64> {
    let value = finite(node, name, value)?;
    if value == 0.0 {
        Err(ValidationError::new(node, format!("{name} must not be 0")))
    } else {
        Ok(value)
    }
}

/// A 3 component axis selector: every component 0 or 1, at least one 1.
pub(crate) fn axes(node: &'static str, vector: &[f64]) -> ValidationResult<[f64; 3]> {
    let [x, y, z] = <[f64; 3]>::try_from(vector).map_err(|_| {
        ValidationError::new(
            node,
            format!("vector must have exactly 3 components, got {}", vector.len()),
        )
    })?;
    if let Some(value) = [x, y, z].into_iter().find(|&v| v != 0.0 && v != 1.0) {
        return Err(ValidationError::new(
            node,
            format!("vector components must be 0 or 1, got {value}"),
        ));
    }
    if x == 0.0 && y == 0.0 && z == 0.0 {
        return Err(ValidationError::new(node, "vector must not be all zeros"));
    }
    Ok([x, y, z])
}
