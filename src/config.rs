//! Sheet configuration.
//!
//! `SheetConfig` gathers the tunables of the controller. It deserializes from
//! JSON with every field optional, so a config file only has to name what it
//! changes.

use crate::geometry::{ResizeBound, SizeBounds, Viewport};
use crate::opacity::OpacityModel;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "corner-sheet";
const CONFIG_FILE_NAME: &str = "config.json";

/// Tunables for one corner sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Minimum sheet width in pixels
    pub min_width: f32,
    /// Minimum sheet height in pixels
    pub min_height: f32,
    /// Maximum width as a fraction of the viewport width
    pub max_width_ratio: f32,
    /// Maximum height as a fraction of the viewport height
    pub max_height_ratio: f32,
    /// Distance from the sheet's top/left edge that starts a resize
    pub edge_grab_px: f32,
    /// Remaining right gap at which a resize snaps to the bottom sheet
    pub snap_threshold_px: f32,
    pub opacity_model: OpacityModel,
    pub resize_bound: ResizeBound,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            min_width: 200.0,
            min_height: 100.0,
            max_width_ratio: 0.9,
            max_height_ratio: 0.8,
            edge_grab_px: 10.0,
            snap_threshold_px: 10.0,
            opacity_model: OpacityModel::AveragedClamped,
            resize_bound: ResizeBound::Viewport,
        }
    }
}

impl SheetConfig {
    /// Computes the size bounds for a viewport.
    pub fn bounds_for(&self, viewport: Viewport) -> SizeBounds {
        SizeBounds::from_viewport(
            viewport,
            self.min_width,
            self.min_height,
            self.max_width_ratio,
            self.max_height_ratio,
        )
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("min_width", self.min_width),
            ("min_height", self.min_height),
            ("edge_grab_px", self.edge_grab_px),
            ("snap_threshold_px", self.snap_threshold_px),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                bail!("{} must be a finite, non-negative number (got {})", name, value);
            }
        }

        let ratios = [
            ("max_width_ratio", self.max_width_ratio),
            ("max_height_ratio", self.max_height_ratio),
        ];
        for (name, value) in ratios {
            if !(value > 0.0 && value <= 1.0) {
                bail!("{} must be in (0, 1] (got {})", name, value);
            }
        }

        Ok(())
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SheetConfig = serde_json::from_str(json).context("Invalid sheet config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Failed to load config file {}", path.display()))
    }

    /// Per-user config location, e.g. `~/.config/corner-sheet/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_defaults_match_reference_bounds() {
        let config = SheetConfig::default();
        config.validate().unwrap();

        let bounds = config.bounds_for(Viewport::new(1000.0, 800.0));
        assert_eq!(bounds.min_width, 200.0);
        assert_eq!(bounds.min_height, 100.0);
        assert_eq!(bounds.max_width, 900.0);
        assert_eq!(bounds.max_height, 640.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SheetConfig::from_json_str(r#"{ "min_width": 240, "opacity_model": "max_ratio" }"#).unwrap();
        assert_eq!(config.min_width, 240.0);
        assert_eq!(config.min_height, 100.0);
        assert_eq!(config.opacity_model, OpacityModel::MaxRatio);
        assert_eq!(config.resize_bound, ResizeBound::Viewport);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(SheetConfig::from_json_str(r#"{ "min_width": -1 }"#).is_err());
        assert!(SheetConfig::from_json_str(r#"{ "max_height_ratio": 1.5 }"#).is_err());
        assert!(SheetConfig::from_json_str(r#"{ "max_width_ratio": 0 }"#).is_err());
        assert!(SheetConfig::from_json_str(r#"{ "resize_bound": "sideways" }"#).is_err());
        assert!(SheetConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let path = env::temp_dir().join("corner_sheet_config_test.json");
        fs::write(&path, r#"{ "snap_threshold_px": 24, "resize_bound": "size_bounds" }"#)?;

        let config = SheetConfig::load(&path)?;
        assert_eq!(config.snap_threshold_px, 24.0);
        assert_eq!(config.resize_bound, ResizeBound::SizeBounds);

        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let path = env::temp_dir().join("corner_sheet_does_not_exist.json");
        let err = SheetConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("corner_sheet_does_not_exist.json"));
    }
}
