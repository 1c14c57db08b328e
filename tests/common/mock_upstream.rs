//! Local stand-in for the GitHub users endpoint.
//!
//! Serves `GET /users/{login}` from a queue of scripted responses and
//! records every request it sees, raw path included.

#![allow(dead_code)]

use axum::extract::{OriginalUri, Path, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    /// Path exactly as sent, percent-encoding intact.
    pub path: String,
    /// Login after axum decoded the segment.
    pub login: String,
    pub headers: HeaderMap,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: StatusCode,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
    pub delay: Duration,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            headers: Vec::new(),
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    /// Error shaped like GitHub's: `{"message": ..., "documentation_url": ...}`.
    pub fn error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({
            "message": message,
            "documentation_url": "https://docs.github.com/rest",
        });
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            headers: Vec::new(),
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }

    fn into_http(self) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("content-type"),
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        for (name, value) in self.headers {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_str(&value).unwrap(),
            );
        }
        (self.status, headers, self.body).into_response()
    }
}

#[derive(Default)]
struct Script {
    requests: Mutex<Vec<CapturedRequest>>,
    responses: Mutex<VecDeque<MockResponse>>,
}

pub struct MockUpstream {
    pub addr: SocketAddr,
    script: Arc<Script>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockUpstream {
    /// Every request is answered with the torvalds profile unless a
    /// response has been queued.
    pub async fn start() -> Self {
        Self::with_responses(Vec::new()).await
    }

    pub async fn with_responses(responses: Vec<MockResponse>) -> Self {
        let script = Arc::new(Script::default());
        script.responses.lock().extend(responses);

        let app = Router::new()
            .route("/users/{login}", get(serve_user))
            .with_state(Arc::clone(&script));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Self {
            addr,
            script,
            shutdown: Some(shutdown_tx),
        }
    }

    pub fn enqueue(&self, response: MockResponse) {
        self.script.responses.lock().push_back(response);
    }

    pub fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.script.requests.lock().clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_user(
    State(script): State<Arc<Script>>,
    Path(login): Path<String>,
    OriginalUri(uri): OriginalUri,
    method: Method,
    headers: HeaderMap,
) -> Response {
    script.requests.lock().push(CapturedRequest {
        method,
        path: uri.path().to_string(),
        login,
        headers,
    });

    let response = script
        .responses
        .lock()
        .pop_front()
        .unwrap_or_else(|| MockResponse::json(crate::common::TORVALDS_JSON));
    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }
    response.into_http()
}
