//! HTTP surface for the console's job form.
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/healthz` | GET | Liveness probe |
//! | `/api/jobs/parse` | POST | Parse `{"text": ...}` into `{"data"}` (200) or `{"errors"}` (422) |
//! | `/api/jobs/resolve` | POST | Parse, then resolve contractor/driver/vehicle hints |
//!
//! A body that is not `{"text": ...}` JSON is answered with axum's rejection
//! status and an `{"errors"}` body.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use dispatch_core::{JobTextParser, ParseResult, PartialJobRecord};
use dispatch_lookup::{resolve_hints, Directory, ResolvedHints};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;

/// State shared by every handler. Without a directory, `/api/jobs/resolve`
/// answers 503.
pub struct AppState<D> {
    pub parser: JobTextParser,
    pub directory: Option<D>,
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

/// A parsed record together with its resolved hints.
#[derive(Debug, Serialize)]
pub struct ResolvedJob {
    pub data: PartialJobRecord,
    pub hints: ResolvedHints,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    errors: Vec<String>,
}

/// Turn a malformed request body into the same `{"errors"}` shape as a
/// parse failure.
fn reject(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection, "rejected request body");
    error_response(rejection.status(), rejection.body_text())
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            errors: vec![message.into()],
        }),
    )
        .into_response()
}

pub fn router<D>(state: Arc<AppState<D>>) -> Router
where
    D: Directory + 'static,
{
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/api/jobs/parse", post(parse_job::<D>))
        .route("/api/jobs/resolve", post(resolve_job::<D>))
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve<D>(addr: &str, state: Arc<AppState<D>>) -> anyhow::Result<()>
where
    D: Directory + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "dispatch server listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn parse_job<D>(
    State(state): State<Arc<AppState<D>>>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Response
where
    D: Directory + 'static,
{
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return reject(rejection),
    };
    let result = state.parser.parse(&req.text);
    let status = if result.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(result)).into_response()
}

async fn resolve_job<D>(
    State(state): State<Arc<AppState<D>>>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Response
where
    D: Directory + 'static,
{
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return reject(rejection),
    };

    let record = match state.parser.parse(&req.text) {
        ParseResult::Data(record) => record,
        errors @ ParseResult::Errors(_) => {
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response();
        }
    };

    let Some(directory) = state.directory.as_ref() else {
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "hint resolution is not configured",
        );
    };

    match resolve_hints(directory, &record).await {
        Ok(hints) => Json(ResolvedJob {
            data: record,
            hints,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "hint resolution failed");
            error_response(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}
