// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! AST file importer

use crate::ast::Node;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Parse JSON holding one node or an array of nodes
pub fn parse_nodes(source: &str) -> Result<Vec<Node>> {
    let value: serde_json::Value = serde_json::from_str(source).context("Failed to parse AST JSON")?;
    if value.is_array() {
        Vec::<Node>::deserialize(value).context("Invalid AST node list")
    } else {
        let node = Node::deserialize(value).context("Invalid AST node")?;
        Ok(vec![node])
    }
}

/// Import a JSON AST file
pub fn load_nodes(path: impl AsRef<Path>) -> Result<Vec<Node>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read AST file: {}", path.display()))?;

    let nodes = parse_nodes(&source)
        .with_context(|| format!("Failed to load AST file: {}", path.display()))?;
    info!(path = %path.display(), roots = nodes.len(), "loaded AST");
    Ok(nodes)
}

/// Write generated source, creating parent directories as needed
pub fn write_source(path: impl AsRef<Path>, source: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, source).with_context(|| format!("Failed to write file: {}", path.display()))?;
    info!(path = %path.display(), bytes = source.len(), "wrote source");
    Ok(())
}
