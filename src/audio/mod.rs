pub mod capture;
pub mod memory;

pub use capture::{AudioCapture, AudioStreamConfig, CaptureFactory};
pub use memory::MemoryCapture;
