//! Log domain types

use serde::{Deserialize, Serialize};

/// A page of log lines for a session or batch
///
/// The service may return fewer lines than were requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogChunk {
    /// Owning session or batch id
    pub id: i64,
    /// Offset of the first returned line
    #[serde(default)]
    pub from: i64,
    /// Total number of lines available on the server
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub log: Vec<String>,
}
