//! Batch domain model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::session::SessionState;

/// A non-interactive submitted job
///
/// Shares its lifecycle states with [`crate::domain::session::Session`] but has no
/// statements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "appId")]
    pub app_id: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default, rename = "proxyUser")]
    pub proxy_user: Option<String>,
    pub state: SessionState,
    #[serde(default)]
    pub log: Vec<String>,
    #[serde(default, rename = "appInfo")]
    pub app_info: HashMap<String, Option<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
