//! Session domain model
//!
//! Represents an interactive execution context hosted by the service.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An interactive session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Server-assigned identifier
    pub id: i64,

    /// Optional human-readable name given at creation
    #[serde(default)]
    pub name: Option<String>,

    /// Application id of the backing cluster job, once known
    #[serde(default, rename = "appId")]
    pub app_id: Option<String>,

    /// User that created the session
    #[serde(default)]
    pub owner: Option<String>,

    /// User the session is impersonating
    #[serde(default, rename = "proxyUser")]
    pub proxy_user: Option<String>,

    /// Session kind (e.g., "spark", "pyspark")
    #[serde(default)]
    pub kind: Option<String>,

    /// Current lifecycle state
    pub state: SessionState,

    /// Most recent log lines
    #[serde(default)]
    pub log: Vec<String>,

    /// Links and details about the backing application
    #[serde(default, rename = "appInfo")]
    pub app_info: HashMap<String, Option<String>>,

    /// Fields this client does not model
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Lifecycle state of a session or batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Accepted but not yet scheduled
    NotStarted,

    /// Backing application is starting
    Starting,

    /// Being recovered after a server restart
    Recovering,

    /// Ready to accept statements
    Idle,

    /// Running (batches only)
    Running,

    /// Executing a statement
    Busy,

    /// Shutting down
    ShuttingDown,

    /// Failed
    Error,

    /// Exited
    Dead,

    /// Killed on request
    Killed,

    /// Finished successfully
    Success,

    /// A state this client does not recognise
    #[serde(other)]
    Unknown,
}

impl SessionState {
    /// Wire representation of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::NotStarted => "not_started",
            SessionState::Starting => "starting",
            SessionState::Recovering => "recovering",
            SessionState::Idle => "idle",
            SessionState::Running => "running",
            SessionState::Busy => "busy",
            SessionState::ShuttingDown => "shutting_down",
            SessionState::Error => "error",
            SessionState::Dead => "dead",
            SessionState::Killed => "killed",
            SessionState::Success => "success",
            SessionState::Unknown => "unknown",
        }
    }

    /// True when the session can accept statements
    pub fn is_ready(&self) -> bool {
        matches!(self, SessionState::Idle)
    }

    /// True when the session will never change state again
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionState::Error | SessionState::Dead | SessionState::Killed | SessionState::Success
        )
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
