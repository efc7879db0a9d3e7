//! Application configuration.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! standard 280–320 mOsm/L band, one decimal place and the built-in
//! reference table.

use std::path::{Path, PathBuf};

use osm_engine::TonicityBand;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub tonicity_band: TonicityBand,
    /// Decimal places for osmolarity/osmolality output.
    pub display_precision: usize,
    /// Replaces the built-in reference table when set. Relative paths are
    /// resolved against the config file's directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_table: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tonicity_band: TonicityBand::default(),
            display_precision: 1,
            reference_table: None,
        }
    }
}

/// Largest accepted `display_precision`.
const MAX_DISPLAY_PRECISION: usize = 6;

impl AppConfig {
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AppConfig = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(AppError::Config(format!(
                "display_precision {} exceeds {}",
                self.display_precision, MAX_DISPLAY_PRECISION
            )));
        }
        Ok(())
    }
}

/// Load config from a YAML file.
pub fn load_config(path: &Path) -> AppResult<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut config = AppConfig::from_yaml_str(&content)
        .inspect_err(|err| warn!(path = %path.display(), %err, "config rejected"))?;

    if let Some(table_path) = config.reference_table.take() {
        let resolved = if table_path.is_relative() {
            path.parent()
                .map(|dir| dir.join(&table_path))
                .unwrap_or(table_path)
        } else {
            table_path
        };
        config.reference_table = Some(resolved);
    }

    Ok(config)
}
