//! Core data models for the star forge
//!
//! This module contains the star record produced per word and the runtime
//! configuration passed explicitly into every forge.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::catalog::CatalogEntry;
use super::classifier::ColorClass;
use super::coordinates::Coordinate;
use super::encoder::{BitSequence, Charset};
use super::error::{Result, ResultExt, StarmapError};

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".starmap.json";

/// Largest accepted chart width or height, in cells
pub const MAX_GRID_DIMENSION: usize = 1000;

// =============================================================================
// Star Record
// =============================================================================

/// Everything derived from one word. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRecord {
    /// 1-based position in the batch
    pub id: usize,
    /// Source text
    pub word: String,
    /// Encoded bits the coordinate was hashed from
    pub bits: BitSequence,
    pub coordinate: Coordinate,
    /// Closest reference star
    pub nearest: CatalogEntry,
    /// Planar distance to `nearest`
    pub nearest_distance: f64,
    /// Lower is brighter, in `[-1, 6]`
    pub brightness: f64,
    pub color: ColorClass,
    /// Constellation name or the unassigned sentinel
    pub constellation: String,
}

impl StarRecord {
    /// Bit length of the encoded word.
    pub fn bit_length(&self) -> usize {
        self.bits.len()
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Glyph set used when drawing charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Unicode stars (default)
    #[default]
    Full,
    /// ASCII only
    Plain,
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration loaded from `.starmap.json`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StarmapConfig {
    /// Character encoding for words
    #[serde(default)]
    pub charset: Charset,
    /// Chart width in cells
    #[serde(default = "default_grid_width")]
    pub grid_width: usize,
    /// Chart height in cells
    #[serde(default = "default_grid_height")]
    pub grid_height: usize,
    /// Glyph set for charts
    #[serde(default)]
    pub theme: Theme,
    /// Bits kept in the `binary` field of saved records
    #[serde(default = "default_binary_preview_bits")]
    pub binary_preview_bits: usize,
    /// Directory saved reports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_grid_width() -> usize {
    60
}

fn default_grid_height() -> usize {
    20
}

fn default_binary_preview_bits() -> usize {
    64
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for StarmapConfig {
    fn default() -> Self {
        Self {
            charset: Charset::default(),
            grid_width: default_grid_width(),
            grid_height: default_grid_height(),
            theme: Theme::default(),
            binary_preview_bits: default_binary_preview_bits(),
            output_dir: default_output_dir(),
        }
    }
}

impl StarmapConfig {
    /// Load and validate a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(StarmapError::from)
            .context(format!("reading {}", path.display()))?;
        let config: StarmapConfig = serde_json::from_str(&contents)
            .map_err(StarmapError::from)
            .context(format!("parsing {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given, else `.starmap.json` under `dir` if present,
    /// else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = dir.join(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reject chart sizes outside `2..=MAX_GRID_DIMENSION` on either axis.
    pub fn validate(&self) -> Result<()> {
        if self.grid_width < 2 || self.grid_height < 2 {
            return Err(StarmapError::invalid_config(format!(
                "grid must be at least 2x2, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.grid_width > MAX_GRID_DIMENSION || self.grid_height > MAX_GRID_DIMENSION {
            return Err(StarmapError::invalid_config(format!(
                "grid must be at most {max}x{max}, got {}x{}",
                self.grid_width,
                self.grid_height,
                max = MAX_GRID_DIMENSION
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StarmapConfig::default();
        assert_eq!(config.charset, Charset::Utf8);
        assert_eq!(config.grid_width, 60);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.binary_preview_bits, 64);
        assert_eq!(config.theme, Theme::Full);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: StarmapConfig =
            serde_json::from_str(r#"{"charset": "latin1", "grid_width": 40}"#).unwrap();
        assert_eq!(config.charset, Charset::Latin1);
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{"theme": "plain", "grid_height": 12}"#).unwrap();

        let config = StarmapConfig::from_file(&path).unwrap();
        assert_eq!(config.theme, Theme::Plain);
        assert_eq!(config.grid_height, 12);
    }

    #[test]
    fn test_from_file_rejects_tiny_grid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tiny.json");
        fs::write(&path, r#"{"grid_width": 1}"#).unwrap();

        let err = StarmapConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, StarmapError::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_file_reports_bad_json_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = StarmapConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_discover_prefers_default_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            StarmapConfig::discover(None, dir.path()).unwrap(),
            StarmapConfig::default()
        );

        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), r#"{"grid_width": 30}"#).unwrap();
        let config = StarmapConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.grid_width, 30);
    }

    #[test]
    fn test_validate_caps_grid_size() {
        let mut config = StarmapConfig {
            grid_width: MAX_GRID_DIMENSION,
            grid_height: MAX_GRID_DIMENSION,
            ..StarmapConfig::default()
        };
        assert!(config.validate().is_ok());

        config.grid_width = MAX_GRID_DIMENSION + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("at most"));

        config.grid_width = 60;
        config.grid_height = usize::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_theme_names() {
        let theme: Theme = serde_json::from_str("\"plain\"").unwrap();
        assert_eq!(theme, Theme::Plain);
        assert!(serde_json::from_str::<Theme>("\"neon\"").is_err());
    }
}
