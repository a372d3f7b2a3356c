// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! Command runner for the tangible CLI

use crate::ast::Node;
use crate::config::TangibleConfig;
use crate::geometry::{self, Orientation};
use crate::io;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Result of a render or connect operation
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    /// Generated OpenSCAD source
    pub source: String,
    /// Root trees that were rendered
    pub roots: Vec<Node>,
    pub duration: Duration,
}

impl RenderOutcome {
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(Node::node_count).sum()
    }
}

/// Runs CLI commands against a configuration
pub struct Runner {
    config: TangibleConfig,
}

impl Runner {
    pub fn new(config: TangibleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TangibleConfig {
        &self.config
    }

    /// Render every tree of an AST file
    pub fn render(&self, input: &Path) -> Result<RenderOutcome> {
        let start = Instant::now();
        let roots = io::load_nodes(input)?;
        let source = crate::render_all(&roots)
            .with_context(|| format!("Failed to render {}", input.display()))?;

        Ok(RenderOutcome {
            source,
            roots,
            duration: start.elapsed(),
        })
    }

    /// Connect the 2D layers listed in an AST file and render the solid.
    ///
    /// Missing arguments fall back to the configured defaults.
    pub fn connect(
        &self,
        input: &Path,
        layer_distance: Option<f64>,
        orientation: Option<Orientation>,
    ) -> Result<RenderOutcome> {
        let start = Instant::now();
        let layers = io::load_nodes(input)?;
        let solid = geometry::connect(
            &layers,
            layer_distance.unwrap_or(self.config.layer_distance),
            orientation.unwrap_or(self.config.orientation),
        )
        .with_context(|| format!("Failed to connect layers from {}", input.display()))?;

        let source = crate::render(&solid)
            .with_context(|| format!("Failed to render layers from {}", input.display()))?;

        Ok(RenderOutcome {
            source,
            roots: vec![solid],
            duration: start.elapsed(),
        })
    }

    /// Write source to `output` (resolved against the configured output
    /// directory) and return the final path
    pub fn write(&self, output: &Path, source: &str) -> Result<PathBuf> {
        let path = self.config.output_path(output);
        io::write_source(&path, source)?;
        Ok(path)
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(TangibleConfig::default())
    }
}
