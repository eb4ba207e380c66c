//! Configuration management for swapimpact
//!
//! Config stored at: ~/.config/swapimpact/config.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use swapimpact_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Trained estimator artifact path override
    #[serde(default)]
    pub model_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Seed for train/test splitting and bootstrap resampling
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of bagged trees per target
    #[serde(default = "default_tree_count")]
    pub tree_count: usize,

    /// Holdout fraction for training metrics
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,

    /// Training worker threads. 0 = auto (CPU count)
    #[serde(default)]
    pub jobs: usize,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_seed() -> u64 {
    42
}

fn default_tree_count() -> usize {
    100
}

fn default_test_fraction() -> f64 {
    0.2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: None,
            output_format: default_output_format(),
            seed: default_seed(),
            tree_count: default_tree_count(),
            test_fraction: default_test_fraction(),
            jobs: 0,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("swapimpact");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Resolve the trained estimator artifact path
    pub fn model_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.model_path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("swapimpact");
        Ok(data_dir.join("estimator.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Swapimpact Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Model path:     {}",
            self.model_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Seed:           {}", self.seed)?;
        writeln!(f, "Tree count:     {}", self.tree_count)?;
        writeln!(f, "Test fraction:  {}", self.test_fraction)?;
        writeln!(
            f,
            "Jobs:           {}",
            if self.jobs == 0 {
                "auto".to_string()
            } else {
                self.jobs.to_string()
            }
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
