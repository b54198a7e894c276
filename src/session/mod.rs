//! Ward session lifecycle
//!
//! This module provides the `WardSession` coordinator that manages:
//! - The session state machine (`Idle`/`Starting`/`Active`/`Stopping`)
//! - Permission gating before any subsystem is touched
//! - Presence broadcast and microphone capture start/stop sequencing
//! - Containment of collaborator faults at the session boundary

mod config;
mod session;
mod status;

pub use config::{SessionConfig, DEFAULT_PORT};
pub use session::WardSession;
pub use status::{SessionState, SessionStats, SessionStatus};
