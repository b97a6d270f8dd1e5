//! Statement endpoints, nested under a session

use crate::LivyClient;
use crate::error::Result;
use livy_core::domain::statement::Statement;
use livy_core::dto::statement::CreateStatement;
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct StatementList {
    #[serde(default)]
    statements: Vec<Statement>,
}

impl LivyClient {
    /// List the statements of a session
    pub async fn list_statements(&self, session_id: i64) -> Result<Vec<Statement>> {
        let path = format!("/sessions/{}/statements", session_id);
        let list: StatementList = self.send(self.request(Method::GET, &path)).await?;

        Ok(list.statements)
    }

    /// Submit code to a session
    ///
    /// # Arguments
    /// * `session_id` - The session to run the code in
    /// * `code` - Source code in the session's language
    ///
    /// # Returns
    /// The created statement, typically still waiting
    pub async fn create_statement(
        &self,
        session_id: i64,
        code: impl Into<String>,
    ) -> Result<Statement> {
        let path = format!("/sessions/{}/statements", session_id);
        let request = self
            .request(Method::POST, &path)
            .json(&CreateStatement::new(code));

        self.send(request).await
    }

    /// Get a statement, including its output once available
    pub async fn get_statement(&self, session_id: i64, statement_id: i64) -> Result<Statement> {
        let path = format!("/sessions/{}/statements/{}", session_id, statement_id);
        self.send(self.request(Method::GET, &path)).await
    }

    /// Cancel a running statement
    ///
    /// # Returns
    /// The server's response body
    pub async fn cancel_statement(&self, session_id: i64, statement_id: i64) -> Result<Value> {
        let path = format!(
            "/sessions/{}/statements/{}/cancel",
            session_id, statement_id
        );
        self.send(self.request(Method::POST, &path)).await
    }
}
