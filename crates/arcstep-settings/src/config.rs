//! Configuration for the arcstep motion kernel
//!
//! Provides configuration file handling with JSON and TOML support,
//! chosen by file extension, stored in the platform config directory by
//! default. Settings are organized into logical sections:
//! - Machine settings (per-axis step scale)
//! - Pacing settings (step interval and pacing mode)

use crate::error::SettingsError;
use arcstep_core::AxisScale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Machine settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Distance per X step, in machine units
    pub axis_scale_x: f64,
    /// Distance per Y step, in machine units
    pub axis_scale_y: f64,
}

impl Default for MachineSettings {
    fn default() -> Self {
        // 200 steps/rev at 1/8 microstepping on a 2 mm pitch screw.
        Self {
            axis_scale_x: 0.00125,
            axis_scale_y: 0.00125,
        }
    }
}

impl MachineSettings {
    /// The configured scale as a kernel [`AxisScale`]
    pub fn axis_scale(&self) -> AxisScale {
        AxisScale::new(self.axis_scale_x, self.axis_scale_y)
    }
}

/// How the engine paces the interval between step pulses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PacingMode {
    /// No pause between pulses
    None,
    /// Yield to the OS scheduler between pulses
    Sleep,
    /// Busy-wait between pulses
    Spin,
}

impl std::fmt::Display for PacingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Sleep => write!(f, "sleep"),
            Self::Spin => write!(f, "spin"),
        }
    }
}

/// Pacing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingSettings {
    /// Pacing mode
    pub mode: PacingMode,
    /// Interval between step pulses in microseconds
    pub step_interval_us: u64,
}

impl Default for PacingSettings {
    fn default() -> Self {
        // 33 us is a 30 kHz step rate.
        Self {
            mode: PacingMode::Spin,
            step_interval_us: 33,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Machine settings
    #[serde(default)]
    pub machine: MachineSettings,
    /// Pacing settings
    #[serde(default)]
    pub pacing: PacingSettings,
}

impl Config {
    /// Default configuration file location in the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("arcstep").join("config.json"))
    }

    /// Load configuration from a JSON or TOML file, chosen by extension
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        match extension_of(path) {
            "json" => Ok(serde_json::from_str(&contents)?),
            "toml" => Ok(toml::from_str(&contents)?),
            other => Err(SettingsError::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }

    /// Save configuration to a JSON or TOML file, chosen by extension
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let contents = match extension_of(path) {
            "json" => serde_json::to_string_pretty(self)?,
            "toml" => toml::to_string_pretty(self)?,
            other => {
                return Err(SettingsError::UnsupportedFormat {
                    extension: other.to_string(),
                })
            }
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}

fn extension_of(path: &Path) -> &str {
    path.extension().and_then(|ext| ext.to_str()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.machine.axis_scale_x, 0.00125);
        assert_eq!(config.pacing.mode, PacingMode::Spin);
        assert_eq!(config.pacing.step_interval_us, 33);
        assert!(config.machine.axis_scale().validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::default();
        config.machine.axis_scale_y = 0.0025;
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_toml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.pacing.mode = PacingMode::Sleep;
        config.pacing.step_interval_us = 1000;
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let result = Config::default().save(&path);
        assert!(matches!(
            result,
            Err(SettingsError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[pacing]\nmode = \"none\"\nstep_interval_us = 0\n").unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.pacing.mode, PacingMode::None);
        assert_eq!(loaded.machine, MachineSettings::default());
    }
}
