// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! Configuration for the command line front end

use crate::geometry::Orientation;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "tangible.toml";

/// Tangible configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TangibleConfig {
    /// Distance between consecutive layers when connecting shapes
    pub layer_distance: f64,
    /// Stacking direction when connecting shapes
    pub orientation: Orientation,
    /// Directory that relative output paths are resolved against
    pub output_dir: Option<PathBuf>,
    /// Verbose output
    pub verbose: bool,
}

impl Default for TangibleConfig {
    fn default() -> Self {
        Self {
            layer_distance: 10.0,
            orientation: Orientation::Vertical,
            output_dir: None,
            verbose: false,
        }
    }
}

impl TangibleConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: TangibleConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `tangible.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `TANGIBLE_*` overrides read through `var`
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(distance) = var("TANGIBLE_LAYER_DISTANCE") {
            self.layer_distance = distance
                .parse()
                .with_context(|| format!("Invalid TANGIBLE_LAYER_DISTANCE: {distance}"))?;
        }

        if let Some(orientation) = var("TANGIBLE_ORIENTATION") {
            self.orientation = orientation
                .parse()
                .map_err(|e| anyhow!("Invalid TANGIBLE_ORIENTATION: {e}"))?;
        }

        if let Some(output_dir) = var("TANGIBLE_OUTPUT_DIR") {
            self.output_dir = Some(PathBuf::from(output_dir));
        }

        if let Some(verbose) = var("TANGIBLE_VERBOSE") {
            self.verbose = verbose
                .parse()
                .with_context(|| format!("Invalid TANGIBLE_VERBOSE: {verbose}"))?;
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Resolve an output path against `output_dir`
    pub fn output_path(&self, path: impl AsRef<Path>) -> PathBuf {
        match &self.output_dir {
            Some(dir) if path.as_ref().is_relative() => dir.join(path),
            _ => path.as_ref().to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = TangibleConfig::default();
        assert_eq!(config.layer_distance, 10.0);
        assert_eq!(config.orientation, Orientation::Vertical);
        assert!(!config.verbose);
    }

    #[test]
    fn test_partial_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "orientation = \"horizontal\"\n")?;

        let config = TangibleConfig::from_file(&path)?;
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.layer_distance, 10.0);
        Ok(())
    }

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        let config = TangibleConfig {
            layer_distance: 2.5,
            orientation: Orientation::Horizontal,
            output_dir: Some(PathBuf::from("out")),
            verbose: true,
        };
        config.save(&path)?;
        assert_eq!(TangibleConfig::from_file(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let env: HashMap<&str, &str> = [
            ("TANGIBLE_LAYER_DISTANCE", "4"),
            ("TANGIBLE_ORIENTATION", "horizontal"),
            ("TANGIBLE_VERBOSE", "true"),
        ]
        .into_iter()
        .collect();

        let mut config = TangibleConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()))?;
        assert_eq!(config.layer_distance, 4.0);
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert!(config.verbose);
        Ok(())
    }

    #[test]
    fn test_bad_env_orientation() {
        let mut config = TangibleConfig::default();
        let result = config.apply_env(|key| (key == "TANGIBLE_ORIENTATION").then(|| "sideways".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_env_verbose() {
        let mut config = TangibleConfig::default();
        let err = config
            .apply_env(|key| (key == "TANGIBLE_VERBOSE").then(|| "yes".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid TANGIBLE_VERBOSE: yes"));
        assert!(!config.verbose);
    }

    #[test]
    fn test_output_path() {
        let config = TangibleConfig {
            output_dir: Some(PathBuf::from("/tmp/models")),
            ..Default::default()
        };
        assert_eq!(config.output_path("tower.scad"), PathBuf::from("/tmp/models/tower.scad"));
        assert_eq!(config.output_path("/abs/tower.scad"), PathBuf::from("/abs/tower.scad"));
    }
}
