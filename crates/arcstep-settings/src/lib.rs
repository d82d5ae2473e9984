//! # Arcstep Settings
//!
//! Handles machine configuration for the arcstep motion kernel:
//! per-axis step scales and step pacing, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, MachineSettings, PacingMode, PacingSettings};
pub use error::SettingsError;
