//! Model Context Protocol (MCP) server for the Nodeflow tooling catalog.
//!
//! This crate serves a fixed set of workflow-automation tools over JSON-RPC
//! 2.0, either line-by-line on stdio or as HTTP POST bodies. Every tool
//! answers from immutable in-memory tables; there is no live workflow engine
//! behind it.

pub mod catalog;
pub mod config;
pub mod error;
pub mod protocol;
pub mod server;

pub use config::{AUTH_TOKEN_ENV, HTTP_BIND_ENV, ServerConfig};
pub use error::ServerError;
pub use protocol::{JsonRpcError, JsonRpcResponse};
pub use server::dispatch::dispatch;
pub use server::http::{McpHttpServer, RunningMcpHttpServer, resolve_bind_address};
pub use server::stdio::run_stdio;

/// Server name reported in `initialize` responses.
pub const SERVER_NAME: &str = "nodeflow";

/// MCP protocol revision this server speaks.
pub const PROTOCOL_VERSION: &str = "2024-11-05";
