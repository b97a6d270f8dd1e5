//! Query response envelopes

use serde::{Deserialize, Serialize};

/// Response of the `/state` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateResponse<S> {
    #[serde(default)]
    pub id: Option<i64>,
    pub state: S,
}

/// A paginated listing
///
/// The service names the item array `sessions` for both sessions and batches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub from: i64,
    #[serde(default)]
    pub total: i64,
    #[serde(default = "Vec::new")]
    pub sessions: Vec<T>,
}
