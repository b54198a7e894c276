use anyhow::{Context, Result};
use serde::Deserialize;

use crate::audio::AudioStreamConfig;
use crate::session::SessionConfig;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,

    #[serde(default)]
    pub audio: AudioStreamConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    /// Instance name shown on the guardian's device list
    #[serde(default = "default_device_name")]
    pub device_name: String,

    /// TCP port advertised to guardians
    pub port: u16,
}

/// Unique fallback name, so two unconfigured wards on the same network stay
/// distinguishable on the guardian's device list.
fn default_device_name() -> String {
    format!("ward-{}", uuid::Uuid::new_v4())
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .with_context(|| format!("failed to load configuration from {path}"))?;

        let config: Self = settings
            .try_deserialize()
            .context("invalid configuration")?;

        config.session_config().validate()?;

        Ok(config)
    }

    /// Session parameters derived from this configuration.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            port: self.service.port,
            audio: self.audio.clone(),
        }
    }
}
