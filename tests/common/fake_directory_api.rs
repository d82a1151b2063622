//! Fake lookup directory server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `GET /contractors`, `GET /drivers`, `GET /vehicles`: configured lists
//!
//! Lists that were never configured answer 404, and a list can be poisoned
//! to return malformed JSON.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeDirectoryApi::start().await.unwrap();
//! api.add("drivers", "d1", "Ali Hassan").await;
//! let directory = HttpDirectory::new(&api.base_url(), Duration::from_secs(1)).unwrap();
//! ```

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// State shared between the router and test code.
#[derive(Default)]
struct ApiState {
    lists: HashMap<String, Vec<serde_json::Value>>,
    /// Lists that answer with a body that is not JSON.
    broken: Vec<String>,
    /// Number of requests served, per list.
    hits: HashMap<String, usize>,
}

/// Handle to the running fake directory server.
pub struct FakeDirectoryApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeDirectoryApi {
    /// Start the fake directory on a random port. Returns once the server is
    /// listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/{list}", get(list_entries))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Append an entry to `list` (`contractors`, `drivers` or `vehicles`).
    pub async fn add(&self, list: &str, id: &str, name: &str) {
        let mut state = self.state.lock().await;
        state
            .lists
            .entry(list.to_string())
            .or_default()
            .push(serde_json::json!({ "id": id, "name": name }));
    }

    /// Make `list` answer 200 with a body that is not JSON.
    pub async fn break_list(&self, list: &str) {
        self.state.lock().await.broken.push(list.to_string());
    }

    /// How many times `list` has been requested.
    pub async fn hits(&self, list: &str) -> usize {
        self.state.lock().await.hits.get(list).copied().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn list_entries(
    Path(list): Path<String>,
    State(state): State<Arc<Mutex<ApiState>>>,
) -> impl IntoResponse {
    let mut state = state.lock().await;
    *state.hits.entry(list.clone()).or_default() += 1;

    if state.broken.contains(&list) {
        return (StatusCode::OK, "<html>maintenance</html>".to_string());
    }

    match state.lists.get(&list) {
        Some(entries) => (
            StatusCode::OK,
            serde_json::Value::Array(entries.clone()).to_string(),
        ),
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}
