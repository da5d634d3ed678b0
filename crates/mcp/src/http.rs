// MCP-over-HTTP transport, for hosts that talk to a long-lived endpoint
// instead of spawning a child process.

use crate::protocol::JsonRpcRequest;
use crate::server::McpServer;
use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Serve the MCP endpoint on `addr` until the process is stopped.
pub async fn serve(server: McpServer, addr: &str) -> Result<()> {
    let app = router(Arc::new(server));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr, "HTTP transport listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(server: Arc<McpServer>) -> Router {
    Router::new()
        .route("/mcp", post(mcp_handler))
        .route("/health", get(health_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(server)
}

async fn mcp_handler(
    State(server): State<Arc<McpServer>>,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    match server.handle_request(request).await {
        Some(response) => Json(response).into_response(),
        // Notifications carry no response body.
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
