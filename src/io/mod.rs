// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! I/O module - loading AST files and writing generated source

mod importer;

pub use importer::{load_nodes, parse_nodes, write_source};
