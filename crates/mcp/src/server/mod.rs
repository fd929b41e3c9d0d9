pub mod dispatch;
pub mod http;
pub mod schemas;
pub mod stdio;
pub mod tools;

pub use dispatch::dispatch;
pub use http::{McpHttpServer, RunningMcpHttpServer, resolve_bind_address};
pub use stdio::run_stdio;
