//! Session-related API endpoints

use crate::LivyClient;
use crate::error::Result;
use livy_core::domain::log::LogChunk;
use livy_core::domain::session::{Session, SessionState};
use livy_core::dto::job::JobConfig;
use livy_core::dto::query::{Page, StateResponse};
use reqwest::Method;
use serde_json::Value;

impl LivyClient {
    // =============================================================================
    // Session Management
    // =============================================================================

    /// List sessions
    ///
    /// # Arguments
    /// * `from` - Offset of the first session to return
    /// * `size` - Maximum number of sessions to return
    ///
    /// # Returns
    /// The sessions in the requested window
    pub async fn list_sessions(&self, from: u64, size: u64) -> Result<Vec<Session>> {
        let request = self
            .request(Method::GET, "/sessions")
            .query(&[("from", from), ("size", size)]);
        let page: Page<Session> = self.send(request).await?;

        Ok(page.sessions)
    }

    /// Create a new interactive session
    ///
    /// # Arguments
    /// * `config` - Creation fields, sent unchanged as the JSON body
    ///
    /// # Returns
    /// The created session, usually still starting
    ///
    /// # Example
    /// ```no_run
    /// # use livy_client::LivyClient;
    /// # use livy_core::dto::job::JobConfig;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = LivyClient::new("http://localhost:8998", None, None, false)?;
    /// let session = client
    ///     .create_session(&JobConfig::new().with("kind", "spark").with("name", "etl"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_session(&self, config: &JobConfig) -> Result<Session> {
        let request = self.request(Method::POST, "/sessions").json(config);
        self.send(request).await
    }

    /// Get a session by ID
    pub async fn get_session(&self, session_id: i64) -> Result<Session> {
        let path = format!("/sessions/{}", session_id);
        self.send(self.request(Method::GET, &path)).await
    }

    /// Get the current state of a session
    pub async fn get_session_state(&self, session_id: i64) -> Result<StateResponse<SessionState>> {
        let path = format!("/sessions/{}/state", session_id);
        self.send(self.request(Method::GET, &path)).await
    }

    /// Get a page of session log lines
    ///
    /// # Arguments
    /// * `session_id` - The session ID
    /// * `from` - Offset of the first line
    /// * `size` - Maximum number of lines; the server may return fewer
    pub async fn get_session_log(&self, session_id: i64, from: u64, size: u64) -> Result<LogChunk> {
        let path = format!("/sessions/{}/log", session_id);
        let request = self
            .request(Method::GET, &path)
            .query(&[("from", from), ("size", size)]);

        self.send(request).await
    }

    /// Delete a session, stopping it if it is running
    ///
    /// # Returns
    /// The server's response body
    pub async fn delete_session(&self, session_id: i64) -> Result<Value> {
        let path = format!("/sessions/{}", session_id);
        self.send(self.request(Method::DELETE, &path)).await
    }
}
