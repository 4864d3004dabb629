//! Editor settings
//!
//! Interaction and glyph tunables, stored as RON in the user's config
//! directory (`<config_dir>/meshdrag/editor.ron`). A missing or broken file
//! falls back to the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EditorError, EditorResult};

/// Interaction and handle glyph settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pointer travel (px) below which a point release counts as a click
    pub click_threshold: f32,
    /// Radius of point markers
    pub point_radius: f32,
    /// Radius of the handle's rotation arc
    pub handle_radius: f32,
    /// Radius of the handle's center disc
    pub handle_center_radius: f32,
    /// Stroke width of the rotation arc
    pub handle_stroke: f32,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            click_threshold: 2.0,
            point_radius: 5.0,
            handle_radius: 15.0,
            handle_center_radius: 10.0,
            handle_stroke: 4.0,
            log_level: "info".to_string(),
        }
    }
}

impl EditorConfig {
    /// Default config file location
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("meshdrag")
            .join("editor.ron")
    }

    #[cfg(target_arch = "wasm32")]
    pub fn default_path() -> PathBuf {
        PathBuf::from("editor.ron")
    }

    /// Load from the default location, or fall back to defaults
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            info!(path = %path.display(), "no editor config, using defaults");
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring editor config");
                Self::default()
            }
        }
    }

    pub fn load_from_file(path: &Path) -> EditorResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| EditorError::config(format!("{}: {}", path.display(), e)))?;
        Self::from_ron_str(&text)
    }

    pub fn from_ron_str(text: &str) -> EditorResult<Self> {
        let config: Self = ron::from_str(text).map_err(|e| EditorError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write this config as pretty RON, creating parent directories
    pub fn save(&self, path: &Path) -> EditorResult<()> {
        let pretty = ron::ser::PrettyConfig::new().indentor("  ".to_string());
        let text = ron::ser::to_string_pretty(self, pretty)
            .map_err(|e| EditorError::config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| EditorError::config(e.to_string()))?;
        }
        std::fs::write(path, text).map_err(|e| EditorError::config(e.to_string()))
    }

    /// Sizes must be finite and non-negative
    fn validate(&self) -> EditorResult<()> {
        let sizes = [
            ("click_threshold", self.click_threshold),
            ("point_radius", self.point_radius),
            ("handle_radius", self.handle_radius),
            ("handle_center_radius", self.handle_center_radius),
            ("handle_stroke", self.handle_stroke),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(EditorError::config(format!("{name} must be a non-negative number, got {value}")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = EditorConfig::from_ron_str("(click_threshold: 4.0)").unwrap();
        assert_eq!(config.click_threshold, 4.0);
        assert_eq!(config.handle_radius, 15.0);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_rejects_negative_size() {
        let err = EditorConfig::from_ron_str("(point_radius: -1.0)").unwrap_err();
        assert!(format!("{err}").contains("point_radius"));
    }

    #[test]
    fn test_rejects_malformed_ron() {
        assert!(matches!(
            EditorConfig::from_ron_str("(click_threshold: "),
            Err(EditorError::Config(_))
        ));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("editor.ron");

        let config = EditorConfig {
            click_threshold: 3.5,
            log_level: "debug".to_string(),
            ..Default::default()
        };
        config.save(&path).unwrap();

        assert_eq!(EditorConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EditorConfig::load_from_file(&dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, EditorError::Config(_)));
    }
}
