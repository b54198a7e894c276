// In-memory microphone capture. Tracks the stream state the coordinator
// observes; the actual encoder and uplink belong to the platform transport
// behind this seam.

use anyhow::Result;
use tracing::info;

use super::capture::{AudioCapture, AudioStreamConfig};

/// Capture backend that tracks the microphone stream in memory.
///
/// Real microphone acquisition (AAudio, AVAudioEngine) is platform-specific
/// and lives outside this crate; this backend keeps the same observable
/// lifecycle so the coordinator and UI behave identically with or without a
/// device underneath.
pub struct MemoryCapture {
    stream: Option<AudioStreamConfig>,
}

impl MemoryCapture {
    pub fn new() -> Self {
        Self { stream: None }
    }

    /// Parameters of the running stream, if capturing.
    pub fn stream_config(&self) -> Option<&AudioStreamConfig> {
        self.stream.as_ref()
    }
}

impl Default for MemoryCapture {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AudioCapture for MemoryCapture {
    async fn start_capture(&mut self, config: &AudioStreamConfig) -> Result<bool> {
        if self.stream.is_some() {
            info!("already streaming");
            return Ok(true);
        }

        info!(
            sample_rate = config.sample_rate,
            channels = config.channels,
            bit_rate = config.bit_rate,
            "microphone stream opened"
        );

        self.stream = Some(config.clone());
        Ok(true)
    }

    async fn stop_capture(&mut self) -> Result<()> {
        if self.stream.take().is_some() {
            info!("microphone stream closed");
        }
        Ok(())
    }

    fn is_streaming(&self) -> bool {
        self.stream.is_some()
    }

    fn name(&self) -> &str {
        "in-memory capture"
    }
}
