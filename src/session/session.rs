use super::config::SessionConfig;
use super::status::{SessionState, SessionStats, SessionStatus};
use crate::audio::AudioCapture;
use crate::capability::Capability;
use crate::discovery::Discovery;
use crate::permissions::PermissionGate;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU8, Ordering};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

const IDLE: u8 = SessionState::Idle as u8;
const STARTING: u8 = SessionState::Starting as u8;
const ACTIVE: u8 = SessionState::Active as u8;
const STOPPING: u8 = SessionState::Stopping as u8;

/// Coordinator for the ward's broadcast-and-stream session.
///
/// Owns the session state machine and sequences the three collaborators:
/// permission gate, then presence broadcast, then microphone capture. One
/// instance per process, created at the application root and shared by
/// handle with the UI layer.
///
/// Failure policy: permission denial is fatal to `start`; broadcast and
/// capture failures degrade the session (the corresponding status flag stays
/// `false`) but never abort it, so the ward remains reachable in whatever
/// form still works. Collaborator faults never escape `start` or `stop`.
///
/// Collaborator calls are not bounded by timeouts; a hung collaborator
/// stalls the in-flight transition until it settles.
pub struct WardSession {
    /// Presence-broadcast collaborator
    discovery: Mutex<Box<dyn Discovery>>,

    /// Microphone collaborator, probed once at construction
    capture: Mutex<Capability<Box<dyn AudioCapture>>>,

    /// Permission broker
    permissions: Box<dyn PermissionGate>,

    /// Current `SessionState` discriminant; also the re-entrancy guard
    state: AtomicU8,

    /// Outcome flags from the last start attempt
    broadcasting: AtomicBool,
    streaming: AtomicBool,

    /// Epoch millis when the session went active, 0 when idle
    started_at_ms: AtomicI64,
}

impl WardSession {
    pub fn new(
        discovery: Box<dyn Discovery>,
        capture: Capability<Box<dyn AudioCapture>>,
        permissions: Box<dyn PermissionGate>,
    ) -> Self {
        Self {
            discovery: Mutex::new(discovery),
            capture: Mutex::new(capture),
            permissions,
            state: AtomicU8::new(IDLE),
            broadcasting: AtomicBool::new(false),
            streaming: AtomicBool::new(false),
            started_at_ms: AtomicI64::new(0),
        }
    }

    /// Start the ward session.
    ///
    /// Returns `true` once the session is active (possibly degraded) and
    /// `false` when it could not begin: invalid config, permission denied,
    /// or a stop still in flight. Already-running sessions return `true`
    /// without touching any collaborator.
    pub async fn start(&self, config: SessionConfig) -> bool {
        // Re-entry guard first: a running session answers true no matter
        // what config the caller re-supplies.
        if let Err(current) =
            self.state
                .compare_exchange(IDLE, STARTING, Ordering::SeqCst, Ordering::SeqCst)
        {
            return match SessionState::from_u8(current) {
                SessionState::Starting | SessionState::Active => {
                    info!("ward session already active");
                    true
                }
                // Teardown in flight; the caller retries once stop settles.
                _ => {
                    warn!("ward session is stopping; cannot start");
                    false
                }
            };
        }

        if let Err(e) = config.validate() {
            warn!("rejecting session config: {e:#}");
            self.state.store(IDLE, Ordering::SeqCst);
            return false;
        }

        info!(port = config.port, "starting ward session");

        // Permission first. The only fatal step: without the microphone
        // grant the product has nothing to offer.
        let granted = match self.permissions.request_microphone_permission().await {
            Ok(granted) => granted,
            Err(e) => {
                error!("permission request fault: {e:#}");
                false
            }
        };
        if !granted {
            warn!("microphone permission denied; session not started");
            self.state.store(IDLE, Ordering::SeqCst);
            return false;
        }

        // Presence broadcast. Degrades on failure: a guardian that already
        // knows the ward's address can still connect.
        let broadcasting = {
            let mut discovery = self.discovery.lock().await;
            match discovery.start_broadcasting(config.port).await {
                Ok(registered) => registered,
                Err(e) => {
                    error!("discovery fault contained: {e:#}");
                    false
                }
            }
        };
        if !broadcasting {
            warn!("presence broadcast unavailable; continuing without discovery");
        }
        self.broadcasting.store(broadcasting, Ordering::SeqCst);

        // Microphone capture. Also degrades on failure: the ward stays
        // locatable even when it cannot stream audio yet.
        let streaming = {
            let mut capture = self.capture.lock().await;
            match &mut *capture {
                Capability::Available(capture) => {
                    match capture.start_capture(&config.audio).await {
                        Ok(started) => started,
                        Err(e) => {
                            error!("audio capture fault contained: {e:#}");
                            false
                        }
                    }
                }
                Capability::Unavailable(reason) => {
                    warn!("audio capture unavailable: {reason}");
                    false
                }
            }
        };
        if !streaming {
            warn!("continuing without audio stream");
        }
        self.streaming.store(streaming, Ordering::SeqCst);

        self.started_at_ms
            .store(Utc::now().timestamp_millis(), Ordering::SeqCst);
        self.state.store(ACTIVE, Ordering::SeqCst);

        info!(broadcasting, streaming, "ward session active");
        true
    }

    /// Stop the ward session.
    ///
    /// Always leaves the session `Idle` on return, whatever the collaborators
    /// do during teardown. A no-op unless the session is `Active`.
    pub async fn stop(&self) {
        if self
            .state
            .compare_exchange(ACTIVE, STOPPING, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            info!("ward session not active");
            return;
        }

        info!("stopping ward session");

        // Both teardowns are best-effort and order-independent.
        let (discovery_result, capture_result) = tokio::join!(
            async {
                let mut discovery = self.discovery.lock().await;
                discovery.stop_broadcasting().await
            },
            async {
                let mut capture = self.capture.lock().await;
                match &mut *capture {
                    Capability::Available(capture) => capture.stop_capture().await,
                    Capability::Unavailable(_) => Ok(()),
                }
            }
        );

        if let Err(e) = discovery_result {
            error!("discovery stop fault contained: {e:#}");
        }
        if let Err(e) = capture_result {
            error!("audio capture stop fault contained: {e:#}");
        }

        self.broadcasting.store(false, Ordering::SeqCst);
        self.streaming.store(false, Ordering::SeqCst);
        self.started_at_ms.store(0, Ordering::SeqCst);
        self.state.store(IDLE, Ordering::SeqCst);

        info!("ward session stopped");
    }

    /// Current lifecycle state. Never blocks.
    pub fn state(&self) -> SessionState {
        SessionState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// `true` iff the session is `Active`. Never blocks.
    pub fn is_active(&self) -> bool {
        self.state() == SessionState::Active
    }

    /// Snapshot of the session. Never blocks, triggers no collaborator calls.
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            state: self.state(),
            broadcasting: self.broadcasting.load(Ordering::SeqCst),
            streaming: self.streaming.load(Ordering::SeqCst),
        }
    }

    /// Status plus session timing.
    pub fn stats(&self) -> SessionStats {
        let status = self.status();
        let started_at =
            DateTime::<Utc>::from_timestamp_millis(self.started_at_ms.load(Ordering::SeqCst))
                .filter(|ts| ts.timestamp_millis() != 0);
        let duration_secs = started_at
            .map(|ts| {
                Utc::now().signed_duration_since(ts).num_milliseconds() as f64 / 1000.0
            })
            .unwrap_or(0.0);

        SessionStats {
            state: status.state,
            broadcasting: status.broadcasting,
            streaming: status.streaming,
            started_at,
            duration_secs,
        }
    }
}
