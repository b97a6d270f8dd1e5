//! Statement domain types

use serde::{Deserialize, Serialize};

/// A unit of code submitted to a session
///
/// Statement ids are scoped to their parent session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub id: i64,
    #[serde(default)]
    pub code: Option<String>,
    pub state: StatementState,
    /// Execution progress between 0.0 and 1.0, when the service reports it
    #[serde(default)]
    pub progress: Option<f64>,
    /// Present once the statement is available
    #[serde(default)]
    pub output: Option<StatementOutput>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Result of an executed statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementOutput {
    /// "ok" or "error"
    pub status: String,
    #[serde(default)]
    pub execution_count: Option<i64>,
    /// Mime type to rendered value, present on success
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
    /// Exception name, present on error
    #[serde(default)]
    pub ename: Option<String>,
    /// Exception value, present on error
    #[serde(default)]
    pub evalue: Option<String>,
    #[serde(default)]
    pub traceback: Vec<String>,
}

impl StatementOutput {
    /// True when the code raised instead of producing a value
    pub fn is_error(&self) -> bool {
        self.status == "error"
    }

    /// The `text/plain` rendering of the result, if any
    pub fn text(&self) -> Option<&str> {
        self.data.get("text/plain").and_then(|v| v.as_str())
    }
}

/// Lifecycle state of a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementState {
    Waiting,
    Running,
    Available,
    Error,
    Cancelling,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl StatementState {
    /// Wire representation of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementState::Waiting => "waiting",
            StatementState::Running => "running",
            StatementState::Available => "available",
            StatementState::Error => "error",
            StatementState::Cancelling => "cancelling",
            StatementState::Cancelled => "cancelled",
            StatementState::Unknown => "unknown",
        }
    }

    /// True when the output can be read
    pub fn is_ready(&self) -> bool {
        matches!(self, StatementState::Available)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StatementState::Available | StatementState::Error | StatementState::Cancelled
        )
    }
}

impl std::fmt::Display for StatementState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
