//! Polling helpers
//!
//! Fixed-interval waits for a session to start or a statement to finish. Each
//! poll sleeps one [`ClientConfig::poll_interval`](crate::ClientConfig), charges
//! it to the timeout budget, then issues a single state query. The budget is
//! checked before every sleep, so no query is made once it is spent.
//!
//! Running out of budget is not an error: the helpers return `Ok(false)`. A
//! failing state query ends the wait with that error.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::LivyClient;
use crate::error::Result;
use livy_core::domain::session::SessionState;
use livy_core::domain::statement::StatementState;

/// Budget of [`LivyClient::wait_session_start`]
pub const DEFAULT_SESSION_START_TIMEOUT: Duration = Duration::from_secs(60);

/// Budget of [`LivyClient::wait_session_statement_ready`]
pub const DEFAULT_STATEMENT_READY_TIMEOUT: Duration = Duration::from_secs(30);

impl LivyClient {
    /// Wait up to 60 seconds for a session to become idle
    ///
    /// # Returns
    /// `true` if the last observed state is idle
    pub async fn wait_session_start(&self, session_id: i64) -> Result<bool> {
        self.wait_session_start_within(session_id, DEFAULT_SESSION_START_TIMEOUT)
            .await
    }

    /// Wait up to `timeout` for a session to become idle
    pub async fn wait_session_start_within(
        &self,
        session_id: i64,
        timeout: Duration,
    ) -> Result<bool> {
        let client = self;
        self.poll_until(SessionState::Idle, timeout, move || async move {
            client
                .get_session_state(session_id)
                .await
                .map(|resp| resp.state)
        })
        .await
    }

    /// Wait up to 30 seconds for a statement to become available
    ///
    /// # Returns
    /// `true` if the last observed state is available
    pub async fn wait_session_statement_ready(
        &self,
        session_id: i64,
        statement_id: i64,
    ) -> Result<bool> {
        self.wait_session_statement_ready_within(
            session_id,
            statement_id,
            DEFAULT_STATEMENT_READY_TIMEOUT,
        )
        .await
    }

    /// Wait up to `timeout` for a statement to become available
    pub async fn wait_session_statement_ready_within(
        &self,
        session_id: i64,
        statement_id: i64,
        timeout: Duration,
    ) -> Result<bool> {
        let client = self;
        self.poll_until(StatementState::Available, timeout, move || async move {
            client
                .get_statement(session_id, statement_id)
                .await
                .map(|statement| statement.state)
        })
        .await
    }

    async fn poll_until<S, F, Fut>(&self, target: S, timeout: Duration, mut query: F) -> Result<bool>
    where
        S: Copy + PartialEq + Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<S>>,
    {
        let interval = self.config.poll_interval;
        let mut remaining = timeout;
        let mut state: Option<S> = None;

        while state != Some(target) && !remaining.is_zero() {
            tokio::time::sleep(interval).await;
            remaining = remaining.saturating_sub(interval);

            let current = query().await?;
            debug!("Observed state {} (waiting for {}, {:?} left)", current, target, remaining);
            state = Some(current);
        }

        let reached = state == Some(target);
        if !reached {
            warn!("Gave up waiting for state {} after {:?}", target, timeout);
        }

        Ok(reached)
    }
}
