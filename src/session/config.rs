use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::audio::AudioStreamConfig;

/// Port wards listen on when none is configured.
pub const DEFAULT_PORT: u16 = 8888;

/// Configuration for one ward session.
///
/// Supplied to `WardSession::start` and owned by the coordinator for the
/// session's duration; nothing survives a stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// TCP port advertised to guardians
    pub port: u16,

    /// Microphone stream parameters
    pub audio: AudioStreamConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            audio: AudioStreamConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn new(port: u16) -> Self {
        Self {
            port,
            audio: AudioStreamConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.port != 0, "port must be in 1..=65535");
        self.audio.validate()
    }
}
