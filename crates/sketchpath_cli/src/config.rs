//! sketchpath configuration file handling
//!
//! An optional `sketchpath.toml` supplies defaults for conversions:
//!
//! ```toml
//! [output]
//! precision = 3
//! implicit_commands = false
//! close = true
//!
//! [frame]
//! x = 0.0
//! y = 0.0
//! width = 24.0
//! height = 24.0
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use sketchpath_core::CoordinateFrame;

pub const CONFIG_FILE: &str = "sketchpath.toml";

#[derive(Debug, Default, Deserialize)]
pub struct SketchpathConfig {
    #[serde(default)]
    pub output: OutputConfig,
    /// Fallback frame when neither the command line nor the document gives one
    #[serde(default)]
    pub frame: Option<FrameConfig>,
}

/// Path data formatting defaults
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub precision: Option<usize>,
    #[serde(default)]
    pub implicit_commands: bool,
    /// Close paths whose document does not say
    #[serde(default)]
    pub close: bool,
}

#[derive(Debug, Deserialize)]
pub struct FrameConfig {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_scale")]
    pub width: f64,
    #[serde(default = "default_scale")]
    pub height: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl From<&FrameConfig> for CoordinateFrame {
    fn from(frame: &FrameConfig) -> Self {
        CoordinateFrame::new(frame.x, frame.y, frame.width, frame.height)
    }
}

impl SketchpathConfig {
    /// Load an explicit config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load `sketchpath.toml` from a directory, falling back to defaults
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }


    pub fn frame(&self) -> Option<CoordinateFrame> {
        self.frame.as_ref().map(CoordinateFrame::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = SketchpathConfig::from_toml("").unwrap();
        assert_eq!(config.output.precision, None);
        assert!(!config.output.implicit_commands);
        assert!(!config.output.close);
        assert!(config.frame().is_none());
    }

    #[test]
    fn test_full_config() {
        let config = SketchpathConfig::from_toml(
            r#"
            [output]
            precision = 2
            implicit_commands = true
            close = true

            [frame]
            x = 4.0
            width = 24.0
            "#,
        )
        .unwrap();

        assert_eq!(config.output.precision, Some(2));
        assert!(config.output.implicit_commands);
        assert!(config.output.close);
        assert_eq!(
            config.frame(),
            Some(CoordinateFrame::new(4.0, 0.0, 24.0, 1.0))
        );
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = std::env::temp_dir().join("sketchpath-config-missing");
        let config = SketchpathConfig::load_from_dir(&dir).unwrap();
        assert!(config.frame.is_none());
    }

    #[test]
    fn test_invalid_config() {
        assert!(SketchpathConfig::from_toml("[output]\nprecision = \"three\"\n").is_err());
    }
}
