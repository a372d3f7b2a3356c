// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! CLI subsystem for Tangible

pub mod reporter;
pub mod runner;

pub use reporter::Reporter;
pub use runner::{RenderOutcome, Runner};
