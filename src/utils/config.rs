// Configuration utilities
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AppError, AppResult};
use crate::storage::DEFAULT_INDENT;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Batch run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Output directory; defaults to `<parent>/<output_prefix><folder name>`
    pub output_dir: Option<String>,
    pub output_prefix: String,
    pub indent: usize,
    /// Log and skip failing files instead of aborting the batch
    pub continue_on_error: bool,
    pub show_progress: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            output_dir: None,
            output_prefix: "transformed_".to_string(),
            indent: DEFAULT_INDENT,
            continue_on_error: true,
            show_progress: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a `.json`, `.yaml` or `.yml` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("json") => serde_json::from_str(&contents).map_err(|e| AppError::Config(e.to_string())),
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&contents).map_err(|e| AppError::Config(e.to_string()))
            }
            _ => Err(AppError::Config(format!(
                "Unsupported config file format: {}",
                path.display()
            ))),
        }
    }

    /// Get the log level filter
    pub fn log_level_filter(&self) -> log::LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Info,
        }
    }
}
