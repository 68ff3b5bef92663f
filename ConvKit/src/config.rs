//! Configuration for the `convkit` front end
//!
//! Stored as TOML at `<config dir>/convkit/config.toml`. Every field has a
//! default, so partial files are fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::formats::coordinate::DistanceUnit;

// Default value functions for serde
fn default_true() -> bool {
    true
}
fn default_color_target() -> String {
    "hex".to_string()
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateConfig {
    /// Axis assumed for single coordinates unless told otherwise
    #[serde(default = "default_true")]
    pub latitude: bool,
    #[serde(default)]
    pub distance_unit: DistanceUnit,
}

impl Default for CoordinateConfig {
    fn default() -> Self {
        Self {
            latitude: true,
            distance_unit: DistanceUnit::Km,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "default_color_target")]
    pub default_target: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            default_target: default_color_target(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Worker threads; rayon picks when unset
    #[serde(default)]
    pub threads: Option<usize>,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub coordinate: CoordinateConfig,
    #[serde(default)]
    pub color: ColorConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

impl Config {
    /// Default location, if the platform has a config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("convkit").join("config.toml"))
    }

    /// Load from an explicit path. A missing file yields defaults; a file
    /// that fails to parse is an error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load from the default location, falling back to defaults (with a
    /// warning) when the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config at {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Write as pretty TOML, creating the parent directory.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Write to the default location. Returns the path written, or `None`
    /// when the platform has no config directory.
    pub fn save(&self) -> Result<Option<PathBuf>> {
        let Some(path) = Self::default_path() else {
            return Ok(None);
        };
        self.save_to(&path)?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.pretty_json);
        assert!(config.coordinate.latitude);
        assert_eq!(config.coordinate.distance_unit, DistanceUnit::Km);
        assert_eq!(config.color.default_target, "hex");
        assert_eq!(config.batch.threads, None);
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str(
            r#"
            [output]
            format = "json"

            [coordinate]
            distance_unit = "mi"
            "#,
        )
        .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty_json);
        assert_eq!(config.coordinate.distance_unit, DistanceUnit::Mi);
        assert_eq!(config.color.default_target, "hex");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.color.default_target = "hsl".to_string();
        config.batch.threads = Some(4);
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert_eq!(Config::load_from(&missing).unwrap(), Config::default());

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[output\nformat = 3").unwrap();
        assert!(matches!(
            Config::load_from(&bad),
            Err(crate::error::Error::TomlDe(_))
        ));
    }
}
