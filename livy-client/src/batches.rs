//! Batch-related API endpoints

use crate::LivyClient;
use crate::error::Result;
use livy_core::domain::batch::Batch;
use livy_core::domain::log::LogChunk;
use livy_core::domain::session::SessionState;
use livy_core::dto::job::JobConfig;
use livy_core::dto::query::{Page, StateResponse};
use reqwest::Method;
use serde_json::Value;

impl LivyClient {
    // =============================================================================
    // Batch Management
    // =============================================================================

    /// List batches
    ///
    /// # Arguments
    /// * `from` - Offset of the first batch to return
    /// * `size` - Maximum number of batches to return
    pub async fn list_batches(&self, from: u64, size: u64) -> Result<Vec<Batch>> {
        let request = self
            .request(Method::GET, "/batches")
            .query(&[("from", from), ("size", size)]);
        let page: Page<Batch> = self.send(request).await?;

        Ok(page.sessions)
    }

    /// Submit a batch job
    ///
    /// # Arguments
    /// * `config` - Creation fields (`file`, `className`, `args`, ...), sent unchanged
    ///
    /// # Example
    /// ```no_run
    /// # use livy_client::LivyClient;
    /// # use livy_core::dto::job::JobConfig;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = LivyClient::new("http://localhost:8998", None, None, false)?;
    /// let batch = client
    ///     .create_batch(&JobConfig::new().with("file", "hdfs:///jobs/pi.py"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_batch(&self, config: &JobConfig) -> Result<Batch> {
        let request = self.request(Method::POST, "/batches").json(config);
        self.send(request).await
    }

    /// Get a batch by ID
    pub async fn get_batch(&self, batch_id: i64) -> Result<Batch> {
        let path = format!("/batches/{}", batch_id);
        self.send(self.request(Method::GET, &path)).await
    }

    /// Get the current state of a batch
    pub async fn get_batch_state(&self, batch_id: i64) -> Result<StateResponse<SessionState>> {
        let path = format!("/batches/{}/state", batch_id);
        self.send(self.request(Method::GET, &path)).await
    }

    /// Get a page of batch log lines
    pub async fn get_batch_log(&self, batch_id: i64, from: u64, size: u64) -> Result<LogChunk> {
        let path = format!("/batches/{}/log", batch_id);
        let request = self
            .request(Method::GET, &path)
            .query(&[("from", from), ("size", size)]);

        self.send(request).await
    }

    /// Delete a batch, killing it if it is still running
    pub async fn delete_batch(&self, batch_id: i64) -> Result<Value> {
        let path = format!("/batches/{}", batch_id);
        self.send(self.request(Method::DELETE, &path)).await
    }
}
