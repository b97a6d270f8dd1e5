//! Statement DTOs

use serde::{Deserialize, Serialize};

/// Request to run code in a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStatement {
    pub code: String,
}

impl CreateStatement {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
