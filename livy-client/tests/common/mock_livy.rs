//! Mock Livy server for testing
//!
//! Serves the session, statement and batch endpoints from canned JSON without
//! a real service.

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub struct MockLivyServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockLivyServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Respond to `verb path` with a JSON body
    pub async fn mock_json(&self, verb: &str, endpoint: &str, body: Value) {
        Mock::given(method(verb))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Serve `states` in order from a state endpoint, one per request; the last
    /// state repeats forever
    pub async fn mock_state_sequence(&self, endpoint: &str, field: &str, states: &[&str]) {
        let (last, leading) = states.split_last().expect("at least one state");

        for state in leading {
            Mock::given(method("GET"))
                .and(path(endpoint))
                .respond_with(ResponseTemplate::new(200).set_body_json(state_body(field, state)))
                .up_to_n_times(1)
                .mount(&self.server)
                .await;
        }

        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(state_body(field, last)))
            .mount(&self.server)
            .await;
    }

    /// Respond to `verb path` with an arbitrary template
    pub async fn mock_response(&self, verb: &str, endpoint: &str, response: ResponseTemplate) {
        Mock::given(method(verb))
            .and(path(endpoint))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Number of requests the server has seen
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

fn state_body(field: &str, state: &str) -> Value {
    let mut body = json!({ "id": 1 });
    body[field] = json!(state);
    body
}

pub fn session_json(id: i64, state: &str) -> Value {
    json!({
        "id": id,
        "name": null,
        "appId": null,
        "owner": null,
        "proxyUser": null,
        "kind": "pyspark",
        "state": state,
        "log": [],
        "appInfo": { "driverLogUrl": null, "sparkUiUrl": null }
    })
}

pub fn batch_json(id: i64, state: &str) -> Value {
    json!({
        "id": id,
        "name": null,
        "appId": null,
        "state": state,
        "log": [],
        "appInfo": {}
    })
}

pub fn statement_json(id: i64, state: &str) -> Value {
    json!({
        "id": id,
        "code": "1 + 1",
        "state": state,
        "progress": 0.0,
        "output": null
    })
}
