//! Camera and acquisition settings loaded with Figment.
//!
//! Configuration is read from:
//! 1. a TOML file (`config/picam.toml` by default, optional)
//! 2. environment variables prefixed with `PICAM_`, nested keys separated by `__`
//!
//! # Example
//! ```no_run
//! use picam::PicamConfig;
//!
//! let config = PicamConfig::load()?;
//! config.validate()?;
//! println!("readouts per acquisition: {}", config.acquisition.readout_count);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ```toml
//! [camera]
//! kind = "demo"
//! model = "Pixis100F"
//! serial = "12345"
//!
//! [acquisition]
//! readout_count = 10
//! timeout_ms = 5000
//! ```

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{PicamError, Result};
use crate::library::resolve_model;

/// Default configuration file location.
pub const DEFAULT_CONFIG_PATH: &str = "config/picam.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PicamConfig {
    /// Which camera to open
    #[serde(default)]
    pub camera: CameraSelection,
    /// Acquisition defaults
    #[serde(default)]
    pub acquisition: AcquisitionConfig,
}

/// How [`Session::open_configured`](crate::Session::open_configured) picks a camera.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CameraSelection {
    /// First available camera
    #[default]
    First,
    /// Demo camera, connected if not already present
    Demo {
        /// Model name, e.g. `Pixis100F` or `PicamModel_Pixis100F`
        model: String,
        serial: String,
    },
    /// Available camera with this serial number
    Serial { serial: String },
}

/// Acquisition defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionConfig {
    /// Readouts per `acquire` call
    #[serde(default = "default_readout_count")]
    pub readout_count: i64,
    /// Timeout in milliseconds, -1 for none
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: i32,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            readout_count: default_readout_count(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_readout_count() -> i64 {
    1
}

fn default_timeout_ms() -> i32 {
    crate::data::INFINITE_TIMEOUT
}

impl PicamConfig {
    /// Load from [`DEFAULT_CONFIG_PATH`] and the environment.
    ///
    /// Example override: `PICAM_ACQUISITION__READOUT_COUNT=10`
    pub fn load() -> std::result::Result<Self, figment::Error> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load from a specific file and the environment.
    pub fn load_from<P: AsRef<Path>>(path: P) -> std::result::Result<Self, figment::Error> {
        Self::figment(path).extract()
    }

    /// The provider stack used by [`PicamConfig::load_from`].
    pub fn figment<P: AsRef<Path>>(path: P) -> Figment {
        Figment::from(Serialized::defaults(PicamConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("PICAM_").split("__"))
    }

    /// Validate values after loading.
    pub fn validate(&self) -> Result<()> {
        if self.acquisition.readout_count < 1 {
            return Err(PicamError::Config(format!(
                "readout_count must be at least 1, got {}",
                self.acquisition.readout_count
            )));
        }
        if self.acquisition.timeout_ms < crate::data::INFINITE_TIMEOUT {
            return Err(PicamError::Config(format!(
                "timeout_ms must be -1 or non-negative, got {}",
                self.acquisition.timeout_ms
            )));
        }
        match &self.camera {
            CameraSelection::First => {}
            CameraSelection::Demo { model, serial } => {
                resolve_model(model).map_err(|_| {
                    PicamError::Config(format!("unknown demo camera model '{}'", model))
                })?;
                if serial.is_empty() {
                    return Err(PicamError::Config("demo serial must not be empty".to_string()));
                }
            }
            CameraSelection::Serial { serial } => {
                if serial.is_empty() {
                    return Err(PicamError::Config("serial must not be empty".to_string()));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PicamConfig::default();
        assert_eq!(config.camera, CameraSelection::First);
        assert_eq!(config.acquisition.readout_count, 1);
        assert_eq!(config.acquisition.timeout_ms, -1);
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = PicamConfig::default();
        config.acquisition.readout_count = 0;
        assert!(matches!(config.validate(), Err(PicamError::Config(_))));

        let mut config = PicamConfig::default();
        config.acquisition.timeout_ms = -2;
        assert!(matches!(config.validate(), Err(PicamError::Config(_))));

        let config = PicamConfig {
            camera: CameraSelection::Demo {
                model: "NotACamera".to_string(),
                serial: "1".to_string(),
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PicamError::Config(_))));
    }

    #[test]
    fn test_parse_from_toml_string() {
        let config: PicamConfig = Figment::new()
            .merge(Toml::string(
                r#"
                [camera]
                kind = "serial"
                serial = "0815"

                [acquisition]
                readout_count = 4
                "#,
            ))
            .extract()
            .unwrap();
        assert_eq!(
            config.camera,
            CameraSelection::Serial {
                serial: "0815".to_string()
            }
        );
        assert_eq!(config.acquisition.readout_count, 4);
        assert_eq!(config.acquisition.timeout_ms, -1);
    }
}
