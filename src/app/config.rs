//! Configuration Management

use crate::capture::types::CanvasSize;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Canvas fallback used when a session omits its size
    #[serde(default)]
    pub canvas: CanvasConfig,
    /// Input validation settings
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Canvas configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Default canvas width (px)
    pub default_width: f64,
    /// Default canvas height (px)
    pub default_height: f64,
}

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Reject malformed sessions instead of analyzing them with a warning
    pub strict: bool,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Pretty-print JSON reports
    pub pretty: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        let canvas = CanvasSize::default();
        Self {
            default_width: canvas.width,
            default_height: canvas.height,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: true,
        }
    }
}

impl CanvasConfig {
    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.default_width, self.default_height)
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let width = self.canvas.default_width;
        if !width.is_finite() || width <= 0.0 {
            return Err(crate::Error::Config(format!(
                "default_width must be a positive number, got {}", width
            )));
        }
        let height = self.canvas.default_height;
        if !height.is_finite() || height <= 0.0 {
            return Err(crate::Error::Config(format!(
                "default_height must be a positive number, got {}", height
            )));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".handwriting_screener").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Look up a value by dotted key, e.g. `validation.strict`
    pub fn get(&self, key: &str) -> Result<Option<String>, crate::Error> {
        let value = toml::Value::try_from(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        let found = key
            .split('.')
            .try_fold(&value, |node, part| node.get(part));
        Ok(found.map(|v| match v {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }
}
