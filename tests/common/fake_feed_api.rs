//! Fake report feed server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `GET /laporan` with a configurable status and body and
//! records the headers of every request it receives, so tests can check the
//! `User-Agent` and `Accept` contract.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeFeedApi::start().await.unwrap();
//! api.respond(200, FEED_WRAPPED_DATA).await;
//!
//! // Point an HttpFeed at api.feed_url()
//! let url = api.feed_url();
//! ```

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Headers of one received request.
#[derive(Debug, Clone, Default)]
pub struct SeenRequest {
    pub user_agent: Option<String>,
    pub accept: Option<String>,
}

/// State shared between the router and test code.
struct ApiState {
    status: u16,
    body: String,
    delay: Option<Duration>,
    requests: Vec<SeenRequest>,
}

impl Default for ApiState {
    fn default() -> Self {
        Self {
            status: 200,
            body: "[]".to_string(),
            delay: None,
            requests: Vec::new(),
        }
    }
}

/// Handle to the running fake feed server.
pub struct FakeFeedApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeFeedApi {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/laporan", get(serve_feed))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Full URL of the feed endpoint (e.g. `http://127.0.0.1:PORT/laporan`).
    pub fn feed_url(&self) -> String {
        format!("http://{}/laporan", self.addr)
    }

    /// Set the status and body for subsequent requests.
    pub async fn respond(&self, status: u16, body: &str) {
        let mut state = self.state.lock().await;
        state.status = status;
        state.body = body.to_string();
    }

    /// Hold every response for `delay` before answering.
    pub async fn delay(&self, delay: Duration) {
        self.state.lock().await.delay = Some(delay);
    }

    /// Requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<SeenRequest> {
        self.state.lock().await.requests.clone()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn serve_feed(
    State(state): State<Arc<Mutex<ApiState>>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let (status, body, delay) = {
        let mut state = state.lock().await;
        state.requests.push(SeenRequest {
            user_agent: header("user-agent"),
            accept: header("accept"),
        });
        (state.status, state.body.clone(), state.delay)
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, body)
}
