//! Livy HTTP Client
//!
//! A type-safe client for the Livy REST job-execution service: interactive
//! sessions, the statements run inside them, and batch jobs.
//!
//! Every operation issues exactly one HTTP request and awaits its response. The
//! client keeps no local copy of any remote entity and performs no retries.
//!
//! All operations are `async`. Awaiting one suspends the calling task, not the
//! thread, and the polling helpers in [`wait`] sleep with `tokio::time::sleep`
//! between state queries, so they need a tokio runtime. Nothing is spawned in
//! the background: a call makes progress only while it is awaited.
//!
//! # Example
//!
//! ```no_run
//! use livy_client::LivyClient;
//! use livy_core::dto::job::JobConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = LivyClient::new("http://localhost:8998", None, None, false)?;
//!
//!     let session = client
//!         .create_session(&JobConfig::new().with("kind", "pyspark"))
//!         .await?;
//!
//!     if client.wait_session_start(session.id).await? {
//!         let statement = client.create_statement(session.id, "1 + 1").await?;
//!         client.wait_session_statement_ready(session.id, statement.id).await?;
//!     }
//!
//!     client.delete_session(session.id).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
mod batches;
mod sessions;
mod statements;
pub mod wait;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use livy_core::domain::batch::Batch;
pub use livy_core::domain::log::LogChunk;
pub use livy_core::domain::session::{Session, SessionState};
pub use livy_core::domain::statement::{Statement, StatementOutput, StatementState};
pub use livy_core::dto::job::JobConfig;

use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// HTTP client for the Livy REST API
///
/// Methods are organized into groups:
/// - Session management (list, create, get, state, log, delete)
/// - Statements within a session (list, create, get, cancel)
/// - Batch management (list, create, get, state, log, delete)
/// - Polling helpers that wait for a session or statement to become ready
///
/// The underlying [`reqwest::Client`] belongs to this instance alone; its TLS
/// and credential settings do not leak into other clients.
#[derive(Debug, Clone)]
pub struct LivyClient {
    config: ClientConfig,
    client: Client,
}

impl LivyClient {
    /// Create a new Livy client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the REST API (e.g., "http://localhost:8998")
    /// * `username` - Basic auth user
    /// * `password` - Basic auth password; auth is only sent when both are non-empty
    /// * `insecure` - Disable TLS certificate verification for this client
    ///
    /// # Example
    /// ```
    /// use livy_client::LivyClient;
    ///
    /// let client = LivyClient::new("http://localhost:8998", None, None, false).unwrap();
    /// assert_eq!(client.base_url(), "http://localhost:8998");
    /// ```
    pub fn new(
        base_url: impl Into<String>,
        username: Option<String>,
        password: Option<String>,
        insecure: bool,
    ) -> Result<Self> {
        let mut config = ClientConfig::new(base_url).with_insecure(insecure);
        config.username = username;
        config.password = password;
        Self::from_config(config)
    }

    /// Create a client from a full configuration
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::with_builder(config, Client::builder())
    }

    /// Create a client from a caller-prepared HTTP client builder
    ///
    /// This allows you to configure timeouts, proxies, TLS roots, etc. When
    /// `config.insecure` is set, certificate verification is disabled on
    /// `builder` before the client is built.
    ///
    /// # Example
    /// ```
    /// use livy_client::{ClientConfig, LivyClient};
    /// use std::time::Duration;
    ///
    /// let builder = reqwest::Client::builder().timeout(Duration::from_secs(30));
    /// let client = LivyClient::with_builder(
    ///     ClientConfig::new("https://livy:8998").with_insecure(true),
    ///     builder,
    /// )
    /// .unwrap();
    /// assert!(client.is_insecure());
    /// ```
    pub fn with_builder(config: ClientConfig, builder: ClientBuilder) -> Result<Self> {
        config.validate()?;

        let mut builder = builder;
        if config.insecure {
            warn!(
                "TLS certificate verification disabled for Livy client at {}",
                config.base_url
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Create a client around an already built HTTP client
    ///
    /// A built [`reqwest::Client`] cannot have certificate verification turned
    /// off afterwards, so a configuration with `insecure` set is rejected; use
    /// [`LivyClient::with_builder`] instead.
    pub fn with_client(config: ClientConfig, client: Client) -> Result<Self> {
        config.validate()?;

        if config.insecure {
            return Err(ClientError::InvalidConfig(
                "insecure mode cannot be applied to a prebuilt HTTP client, use with_builder"
                    .to_string(),
            ));
        }

        Ok(Self { config, client })
    }

    /// Get the base URL, exactly as supplied
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// True when certificate verification is disabled for this client
    pub fn is_insecure(&self) -> bool {
        self.config.insecure
    }

    // =============================================================================
    // Request Plumbing
    // =============================================================================

    /// Start a request against `path` relative to the base URL
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("{} {}", method, url);

        let builder = self.client.request(method, url);
        match self.config.credentials() {
            Some((username, password)) => builder.basic_auth(username, Some(password)),
            None => builder,
        }
    }

    /// Send a request and deserialize the JSON body
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let body = process_response(response).await?;
        Ok(serde_json::from_value(body)?)
    }
}

// =============================================================================
// Response Handling
// =============================================================================

/// Check the status of a response and parse its body
///
/// Statuses below 400 yield the JSON body (`Null` when the body is empty).
/// Error statuses become [`ClientError::Status`] when the response declares
/// `Content-Length: 0`, and [`ClientError::Server`] otherwise, carrying the body
/// pretty-printed if it is JSON or verbatim if not.
pub async fn process_response(response: reqwest::Response) -> Result<Value> {
    let status = response.status().as_u16();

    if status < 400 {
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        return Ok(serde_json::from_slice(&bytes)?);
    }

    let empty = response
        .headers()
        .get(CONTENT_LENGTH)
        .is_some_and(|v| v.as_bytes() == b"0");
    if empty {
        return Err(ClientError::Status { status });
    }

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"));

    let bytes = response.bytes().await?;
    let message = if is_json {
        serde_json::from_slice::<Value>(&bytes)
            .and_then(|body| serde_json::to_string_pretty(&body))
            .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned())
    } else {
        String::from_utf8_lossy(&bytes).into_owned()
    };

    Err(ClientError::server(status, message))
}
