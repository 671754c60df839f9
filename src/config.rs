//! Run configuration: output resolution, destination and time sampling.
//!
//! Loaded from JSON or YAML (chosen by file extension); every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FigureError, Result};

/// Finest accepted sampling step: one microsecond.
pub const MIN_TIME_RESOLUTION: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureConfig {
    /// Raster resolution of exported images.
    #[serde(default = "FigureConfig::default_dpi")]
    pub dpi: u32,
    /// Directory the three images are written to.
    #[serde(default = "FigureConfig::default_output_dir")]
    pub output_dir: PathBuf,
    /// Sampling step in seconds for the stepped time ranges.
    #[serde(default = "FigureConfig::default_time_resolution")]
    pub time_resolution: f64,
}

impl FigureConfig {
    fn default_dpi() -> u32 {
        300
    }
    fn default_output_dir() -> PathBuf {
        PathBuf::from(".")
    }
    fn default_time_resolution() -> f64 {
        0.01
    }

    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(FigureError::Config("dpi must be positive".to_string()));
        }
        if !(self.time_resolution >= MIN_TIME_RESOLUTION && self.time_resolution < 1.0) {
            return Err(FigureError::Config(format!(
                "time_resolution must lie in [{MIN_TIME_RESOLUTION}, 1) seconds, got {}",
                self.time_resolution
            )));
        }
        Ok(())
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            dpi: Self::default_dpi(),
            output_dir: Self::default_output_dir(),
            time_resolution: Self::default_time_resolution(),
        }
    }
}

/// Parse JSON config text.
pub fn config_from_json(text: &str) -> Result<FigureConfig> {
    serde_json::from_str(text).map_err(|e| FigureError::Config(e.to_string()))
}

/// Parse YAML config text.
pub fn config_from_yaml(text: &str) -> Result<FigureConfig> {
    serde_yaml::from_str(text).map_err(|e| FigureError::Config(e.to_string()))
}

/// Load and validate a config file; `.yaml`/`.yml` are YAML, anything else JSON.
pub fn load_config_from_path(path: &Path) -> Result<FigureConfig> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| FigureError::Config(format!("{}: {e}", path.display())))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let cfg = if is_yaml {
        config_from_yaml(&text)?
    } else {
        config_from_json(&text)?
    };
    cfg.validate()?;
    Ok(cfg)
}
