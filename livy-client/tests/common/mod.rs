//! Shared test utilities:
//! - A mock Livy server with canned responses
//! - An HTTPS stand-in with a self-signed certificate
//! - Client constructors pointed at it

// Not every test binary uses every helper
#![allow(dead_code)]

pub mod mock_livy;
pub mod tls_livy;

pub use mock_livy::MockLivyServer;
pub use tls_livy::TlsLivyServer;

use livy_client::{ClientConfig, LivyClient};
use std::time::Duration;

/// Poll interval used by the wait tests
pub const FAST_POLL: Duration = Duration::from_millis(10);

/// Client without credentials and a fast poll interval
pub fn client_for(server: &MockLivyServer) -> LivyClient {
    LivyClient::from_config(ClientConfig::new(&server.base_url).with_poll_interval(FAST_POLL))
        .unwrap()
}
