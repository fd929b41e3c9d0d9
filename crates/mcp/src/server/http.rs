//! HTTP transport: the same dispatcher behind axum with bearer auth.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::error::ServerError;
use crate::protocol::{JsonRpcError, JsonRpcResponse};
use crate::server::dispatch::dispatch;
use crate::{PROTOCOL_VERSION, SERVER_NAME};

/// Shared state for the HTTP handlers.
#[derive(Debug, Clone)]
struct HttpState {
    auth_token: String,
}

/// Host configuration for the MCP HTTP server.
#[derive(Debug, Clone)]
pub struct McpHttpServer {
    bind_address: SocketAddr,
    auth_token: String,
}

impl McpHttpServer {
    /// Create a server bound to the provided address with the given bearer token.
    pub fn new(bind_address: SocketAddr, auth_token: impl Into<String>) -> Self {
        Self {
            bind_address,
            auth_token: auth_token.into(),
        }
    }

    /// Build the router. Exposed separately so tests can drive it without a
    /// listening socket.
    pub fn router(auth_token: impl Into<String>) -> Router {
        let state = Arc::new(HttpState {
            auth_token: auth_token.into(),
        });
        let protected = Router::new()
            .route("/", post(handle_rpc))
            .route("/mcp", post(handle_rpc))
            .layer(middleware::from_fn_with_state(Arc::clone(&state), require_auth));

        Router::new()
            .route("/health", get(health))
            .merge(protected)
            .layer(tower_http::cors::CorsLayer::permissive())
            .with_state(state)
    }

    /// Start the server and return a handle for shutdown.
    pub async fn start(self) -> Result<RunningMcpHttpServer, ServerError> {
        let cancellation_token = CancellationToken::new();
        let router = Self::router(self.auth_token);

        let listener = tokio::net::TcpListener::bind(self.bind_address).await?;
        let bound_address = listener.local_addr()?;
        info!(%bound_address, "serving MCP over HTTP");

        let server_handle = tokio::spawn({
            let shutdown = cancellation_token.child_token();
            async move {
                let _ = axum::serve(listener, router)
                    .with_graceful_shutdown(async move {
                        shutdown.cancelled().await;
                    })
                    .await;
            }
        });

        Ok(RunningMcpHttpServer {
            bind_address: bound_address,
            cancellation_token,
            server_handle,
        })
    }
}

/// Runtime handle for a running MCP HTTP server.
#[derive(Debug)]
pub struct RunningMcpHttpServer {
    bind_address: SocketAddr,
    cancellation_token: CancellationToken,
    server_handle: JoinHandle<()>,
}

impl RunningMcpHttpServer {
    /// Return the bound socket address for the running server.
    pub fn bound_address(&self) -> SocketAddr {
        self.bind_address
    }

    /// Stop the server and wait for it to finish.
    pub async fn stop(self) -> Result<(), ServerError> {
        self.cancellation_token.cancel();
        self.server_handle
            .await
            .map_err(|error| ServerError::transport(format!("MCP HTTP server task failed: {error}")))?;
        Ok(())
    }
}

/// Parse a bind address, warning when it is not loopback.
pub fn resolve_bind_address(address: &str) -> Result<SocketAddr, ServerError> {
    let parsed: SocketAddr = address
        .parse()
        .map_err(|error| ServerError::invalid_bind_address(address, format!("{error}")))?;
    if !is_loopback(parsed.ip()) {
        warn!(%parsed, "binding the MCP HTTP server to a non-loopback address");
    }
    Ok(parsed)
}

fn is_loopback(address: IpAddr) -> bool {
    match address {
        IpAddr::V4(ip) => ip.is_loopback(),
        IpAddr::V6(ip) => ip.is_loopback(),
    }
}

/// Bearer auth gate for everything except `/health`.
async fn require_auth(State(state): State<Arc<HttpState>>, request: Request, next: Next) -> Response {
    let header = request
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok());

    match header.and_then(|header| header.strip_prefix("Bearer ")) {
        Some(token) if token == state.auth_token => next.run(request).await,
        Some(_) => {
            warn!("auth failed: invalid bearer token");
            unauthorized_response("invalid bearer token")
        }
        None => {
            warn!("auth failed: missing or malformed Authorization header");
            unauthorized_response("missing or malformed Authorization header")
        }
    }
}

fn unauthorized_response(message: &str) -> Response {
    let body = JsonRpcResponse::error(Value::Null, JsonRpcError::unauthorized(message));
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "protocolVersion": PROTOCOL_VERSION,
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn handle_rpc(body: String) -> Response {
    let raw: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(error) => {
            warn!(%error, "rejecting malformed request body");
            let response = JsonRpcResponse::error(
                Value::Null,
                JsonRpcError::invalid_request(format!("request body is not valid JSON: {error}")),
            );
            return (StatusCode::OK, Json(response)).into_response();
        }
    };

    match dispatch(&raw) {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        // Notifications get no response body.
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
