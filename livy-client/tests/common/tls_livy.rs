//! HTTPS Livy stand-in with a self-signed certificate
//!
//! Serves a session and a batch state endpoint over TLS. Requests carrying an
//! `Authorization` header are answered with 401.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_server::{Handle, tls_rustls::RustlsConfig};
use rcgen::CertifiedKey;
use serde_json::json;

pub struct TlsLivyServer {
    pub base_url: String,
    requests: Arc<AtomicUsize>,
    handle: Handle,
}

impl TlsLivyServer {
    pub async fn start() -> Self {
        let CertifiedKey { cert, key_pair } = rcgen::generate_simple_self_signed(vec![
            "127.0.0.1".to_string(),
            "localhost".to_string(),
        ])
        .expect("self-signed certificate");

        let tls = RustlsConfig::from_pem(
            cert.pem().into_bytes(),
            key_pair.serialize_pem().into_bytes(),
        )
        .await
        .expect("rustls config");

        let requests = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/sessions/{id}", get(get_session))
            .route("/batches/{id}/state", get(get_batch_state))
            .with_state(Arc::clone(&requests));

        let handle = Handle::new();
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        tokio::spawn(
            axum_server::bind_rustls(addr, tls)
                .handle(handle.clone())
                .serve(app.into_make_service()),
        );

        let addr = handle.listening().await.expect("TLS server listening");

        Self {
            base_url: format!("https://{}", addr),
            requests,
            handle,
        }
    }

    /// Number of HTTP requests that completed the TLS handshake
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Drop for TlsLivyServer {
    fn drop(&mut self) {
        self.handle.shutdown();
    }
}

async fn get_session(
    State(requests): State<Arc<AtomicUsize>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    requests.fetch_add(1, Ordering::SeqCst);
    if headers.contains_key(AUTHORIZATION) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    Json(json!({ "id": id, "kind": "spark", "state": "idle", "log": [] })).into_response()
}

async fn get_batch_state(
    State(requests): State<Arc<AtomicUsize>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    requests.fetch_add(1, Ordering::SeqCst);
    if headers.contains_key(AUTHORIZATION) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    Json(json!({ "id": id, "state": "running" })).into_response()
}
