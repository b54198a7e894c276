use anyhow::{ensure, Result};

use crate::capability::Capability;

/// Parameters for the microphone stream.
///
/// Defaults are tuned for low bandwidth and old handsets: 16 kHz mono at
/// 64 kbps.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AudioStreamConfig {
    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Number of channels (1 = mono)
    pub channels: u16,

    /// Encoder bit rate in bits per second
    pub bit_rate: u32,
}

impl Default for AudioStreamConfig {
    fn default() -> Self {
        Self {
            sample_rate: 16000,
            channels: 1,
            bit_rate: 64000,
        }
    }
}

impl AudioStreamConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.sample_rate > 0, "sample_rate must be positive");
        ensure!(self.channels > 0, "channels must be positive");
        ensure!(self.bit_rate > 0, "bit_rate must be positive");
        Ok(())
    }
}

/// Microphone capture seam.
///
/// Implementations acquire the device microphone and stream encoded audio to
/// the connected guardian.
#[async_trait::async_trait]
pub trait AudioCapture: Send + Sync {
    /// Start capturing under `config`. `Ok(false)` means the device refused
    /// (input busy, no input device, ...).
    async fn start_capture(&mut self, config: &AudioStreamConfig) -> Result<bool>;

    /// Release the microphone. Idempotent.
    async fn stop_capture(&mut self) -> Result<()>;

    /// Whether audio is currently being captured.
    fn is_streaming(&self) -> bool;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// Capture backend factory.
///
/// Probes for a capture backend exactly once; callers branch on the returned
/// [`Capability`] instead of re-checking availability inside every call.
pub struct CaptureFactory;

impl CaptureFactory {
    pub fn detect() -> Capability<Box<dyn AudioCapture>> {
        // TODO: wire in a cpal-based microphone backend
        Capability::Available(Box::new(super::memory::MemoryCapture::new()))
    }
}
