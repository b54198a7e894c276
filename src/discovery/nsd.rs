// In-memory NSD registrar. Records what the ward would advertise; actual
// wire advertising belongs to the platform transport behind this seam.

use anyhow::Result;
use tracing::info;

use super::{Discovery, ServiceInfo, SERVICE_TYPE};

/// Registrar that tracks the ward's advertised service in memory.
///
/// Real network-service-discovery registration (Android `NsdManager`, Bonjour)
/// is platform-specific and lives outside this crate; this registrar keeps
/// the same observable lifecycle so the coordinator and UI behave identically
/// with or without a wire transport underneath.
pub struct NsdRegistrar {
    device_name: String,
    service_info: Option<ServiceInfo>,
}

impl NsdRegistrar {
    pub fn new(device_name: impl Into<String>) -> Self {
        Self {
            device_name: device_name.into(),
            service_info: None,
        }
    }

    /// The service currently registered, if broadcasting.
    pub fn service_info(&self) -> Option<&ServiceInfo> {
        self.service_info.as_ref()
    }
}

#[async_trait::async_trait]
impl Discovery for NsdRegistrar {
    async fn start_broadcasting(&mut self, port: u16) -> Result<bool> {
        if let Some(info) = &self.service_info {
            info!(port = info.port, "already broadcasting");
            return Ok(true);
        }

        let info = ServiceInfo {
            name: self.device_name.clone(),
            service_type: SERVICE_TYPE.to_string(),
            port,
        };

        info!(
            name = %info.name,
            service_type = %info.service_type,
            port = info.port,
            "registered ward service"
        );

        self.service_info = Some(info);
        Ok(true)
    }

    async fn stop_broadcasting(&mut self) -> Result<()> {
        if self.service_info.take().is_some() {
            info!("withdrew ward service registration");
        }
        Ok(())
    }

    fn is_broadcasting(&self) -> bool {
        self.service_info.is_some()
    }

    fn name(&self) -> &str {
        "in-memory NSD registrar"
    }
}
