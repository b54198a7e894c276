pub mod audio;
pub mod capability;
pub mod config;
pub mod discovery;
pub mod permissions;
pub mod session;

pub use audio::{AudioCapture, AudioStreamConfig, CaptureFactory, MemoryCapture};
pub use capability::Capability;
pub use config::Config;
pub use discovery::{Discovery, NsdRegistrar, ServiceInfo, SERVICE_TYPE};
pub use permissions::{AutoGrantPermissions, PermissionGate};
pub use session::{SessionConfig, SessionState, SessionStats, SessionStatus, WardSession, DEFAULT_PORT};
