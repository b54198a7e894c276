pub mod nsd;

pub use nsd::NsdRegistrar;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// mDNS/DNS-SD service type guardians browse for.
pub const SERVICE_TYPE: &str = "_guardian-angel._tcp";

/// What the ward advertises on the local network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Human-readable instance name shown on the guardian's device list
    pub name: String,

    /// Service type (always [`SERVICE_TYPE`] for wards)
    pub service_type: String,

    /// TCP port the ward accepts guardian connections on
    pub port: u16,
}

/// Presence-broadcast seam.
///
/// Implementations advertise the ward on the local network so a guardian can
/// find it. Broadcast failure is never fatal to a session: a guardian that
/// already knows the ward's address can still connect.
#[async_trait::async_trait]
pub trait Discovery: Send + Sync {
    /// Begin advertising on `port`. `Ok(false)` means the platform refused
    /// the registration (unsupported transport, name conflict, ...).
    async fn start_broadcasting(&mut self, port: u16) -> Result<bool>;

    /// Withdraw the advertisement. Idempotent.
    async fn stop_broadcasting(&mut self) -> Result<()>;

    /// Whether an advertisement is currently registered.
    fn is_broadcasting(&self) -> bool;

    /// Backend name for logging
    fn name(&self) -> &str;
}
