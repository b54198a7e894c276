use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of the ward session.
///
/// Exactly one state is current at any time. `Starting` and `Stopping` are
/// transient guard states: they exist only while a `start`/`stop` call is in
/// flight and make re-entrant calls no-ops instead of double-executions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum SessionState {
    Idle = 0,
    Starting = 1,
    Active = 2,
    Stopping = 3,
}

impl SessionState {
    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Idle,
            1 => Self::Starting,
            2 => Self::Active,
            _ => Self::Stopping,
        }
    }
}

/// Point-in-time snapshot of the session.
///
/// A pure projection of the state plus the collaborator outcome flags
/// recorded during the last start attempt; computed fresh on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub state: SessionState,

    /// Whether the presence broadcast came up during the last start
    pub broadcasting: bool,

    /// Whether the microphone stream came up during the last start
    pub streaming: bool,
}

/// Status plus timing, for UI and diagnostic display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    pub state: SessionState,
    pub broadcasting: bool,
    pub streaming: bool,

    /// When the session became active, if it is
    pub started_at: Option<DateTime<Utc>>,

    /// Seconds since the session became active (0 when idle)
    pub duration_secs: f64,
}
