//! HTTP front for the synopsis resolver.
//!
//! ## Endpoints
//!
//! - `GET /manga-news/{title}`: resolve a title and return its synopsis
//! - `GET /health`: liveness probe

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use synopsis_resolver::{ResolveError, Resolver, SynopsisOutcome};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Message returned when no catalog page matches the title.
pub const TITLE_NOT_FOUND: &str = "Manga not found on Manga-News";

/// Message returned when the page was found but yielded no synopsis.
pub const SYNOPSIS_NOT_FOUND: &str =
    "Synopsis not found on Manga-News page (or page inaccessible)";

/// Message returned alongside `details` on unexpected failures.
pub const SERVER_ERROR: &str = "Server error processing Manga-News request";

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Successful synopsis lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Whitespace-normalised synopsis text.
    pub summary: String,
}

/// Error payload for 404 and 500 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-facing message.
    pub error: String,
    /// Diagnostic detail, only present on server errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Response from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Crate version.
    pub version: String,
}

#[derive(Clone)]
struct AppState {
    resolver: Arc<Resolver>,
}

// ---------------------------------------------------------------------------
// SynopsisServer
// ---------------------------------------------------------------------------

/// Background HTTP server answering synopsis lookups.
pub struct SynopsisServer {
    /// The address the server is listening on.
    addr: SocketAddr,
    /// Handle to the background server task.
    handle: JoinHandle<()>,
}

impl SynopsisServer {
    /// Start the server with a DuckDuckGo-backed resolver.
    ///
    /// Binds to `{server.host}:{server.port}` (use port `0` for auto-assign)
    /// and begins serving in a background tokio task.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver config is invalid or the TCP
    /// listener cannot bind.
    pub async fn start(config: &ServiceConfig) -> crate::error::Result<Self> {
        let resolver = Resolver::duckduckgo(config.resolver.clone())?;
        Self::start_with_resolver(resolver, config).await
    }

    /// Start the server around an already constructed resolver.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind.
    pub async fn start_with_resolver(
        resolver: Resolver,
        config: &ServiceConfig,
    ) -> crate::error::Result<Self> {
        let app = router(Arc::new(resolver));

        let bind_addr = config.bind_addr();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| ServiceError::Server(format!("bind to {bind_addr} failed: {e}")))?;

        let addr = listener
            .local_addr()
            .map_err(|e| ServiceError::Server(format!("failed to get local addr: {e}")))?;

        info!("synopsis server listening on http://{addr}");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("synopsis server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for SynopsisServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Build the service router.
pub fn router(resolver: Arc<Resolver>) -> Router {
    Router::new()
        .route("/manga-news/{title}", get(handle_synopsis))
        .route("/health", get(handle_health))
        .with_state(AppState { resolver })
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// `GET /manga-news/{title}`. The path segment arrives percent-decoded.
async fn handle_synopsis(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    let result = state.resolver.resolve_synopsis(&title).await;
    outcome_response(result)
}

/// `GET /health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}

/// Map a resolution outcome onto a status code and JSON body.
fn outcome_response(
    result: Result<SynopsisOutcome, ResolveError>,
) -> (StatusCode, Json<serde_json::Value>) {
    let (status, body) = match result {
        Ok(SynopsisOutcome::Found { summary, .. }) => {
            return (
                StatusCode::OK,
                Json(serde_json::to_value(SummaryResponse { summary }).unwrap_or_default()),
            );
        }
        Ok(SynopsisOutcome::TitleNotFound) => (
            StatusCode::NOT_FOUND,
            ErrorResponse {
                error: TITLE_NOT_FOUND.to_owned(),
                details: None,
            },
        ),
        Ok(SynopsisOutcome::SynopsisNotFound { .. }) => (
            StatusCode::NOT_FOUND,
            ErrorResponse {
                error: SYNOPSIS_NOT_FOUND.to_owned(),
                details: None,
            },
        ),
        Err(e) => {
            tracing::error!("synopsis lookup failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: SERVER_ERROR.to_owned(),
                    details: Some(e.to_string()),
                },
            )
        }
    };
    (status, Json(serde_json::to_value(body).unwrap_or_default()))
}
