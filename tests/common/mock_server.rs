use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

/// What the mock service received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Value,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

struct MockState {
    status: StatusCode,
    body: String,
    recorded: Mutex<Vec<RecordedRequest>>,
}

impl MockState {
    fn reply(&self, request: RecordedRequest) -> Response {
        self.recorded.lock().unwrap().push(request);
        (
            self.status,
            [(CONTENT_TYPE, "application/json")],
            self.body.clone(),
        )
            .into_response()
    }
}

/// The generation service's `/generate` and `/health` routes on an ephemeral
/// localhost port. Every request gets the same canned status and body.
pub struct MockServer {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockServer {
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let state = Arc::new(MockState {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.into(),
            recorded: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/generate", post(generate_handler))
            .route("/health", get(health_handler))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.recorded.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("mock server saw no request")
    }
}

async fn generate_handler(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.reply(RecordedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    })
}

async fn health_handler(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    state.reply(RecordedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body: Value::Null,
    })
}

/// A client that ignores any proxy settings in the test environment.
pub fn direct_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build reqwest client")
}
