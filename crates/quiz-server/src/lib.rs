//! HTTP surface of the personality quiz.
//!
//! ## Endpoints
//! - `POST /mcp` - submit a query, receive a response and updated context
//! - `GET /health` - health check

use axum::{
    Router,
    extract::{Json, State},
    routing::{get, post},
};
use quiz_application::{InMemorySessionStore, RequestRouter};
use quiz_core::protocol::{McpRequest, McpResponse};
use quiz_core::session::SessionStore;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    router: Arc<RequestRouter>,
}

impl AppState {
    /// State backed by the given session store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            router: Arc::new(RequestRouter::new(store)),
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemorySessionStore::new()))
    }
}

/// Health check body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Builds the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/mcp", post(handle_mcp))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_mcp(
    State(state): State<AppState>,
    Json(request): Json<McpRequest>,
) -> Json<McpResponse> {
    tracing::debug!(query = %request.query, session_id = request.session_id(), "Query received");
    Json(state.router.handle(request).await)
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
