use anyhow::Result;
use tracing::info;

/// Permission broker seam.
///
/// On a phone this is backed by the OS permission dialog; in tests it is a
/// scripted mock. The coordinator treats a denied grant as the one fatal
/// outcome of session start.
#[async_trait::async_trait]
pub trait PermissionGate: Send + Sync {
    /// Request access to the microphone. `Ok(false)` means the user (or
    /// platform) denied it.
    async fn request_microphone_permission(&self) -> Result<bool>;
}

/// Permission gate for headless and development builds, where there is no OS
/// permission broker to ask. Grants unconditionally.
pub struct AutoGrantPermissions;

#[async_trait::async_trait]
impl PermissionGate for AutoGrantPermissions {
    async fn request_microphone_permission(&self) -> Result<bool> {
        info!("no platform permission broker; granting microphone access");
        Ok(true)
    }
}
