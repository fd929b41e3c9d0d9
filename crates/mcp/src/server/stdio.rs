//! Line-oriented stdio transport.
//!
//! One JSON-RPC message per stdin line, one response per stdout line. All
//! logging goes to stderr so the protocol stream stays clean.

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tracing::{info, warn};

use crate::error::ServerError;
use crate::server::dispatch::dispatch;

/// Read requests from stdin until EOF, answering each one before reading
/// the next line.
pub async fn run_stdio() -> Result<(), ServerError> {
    info!("serving MCP over stdio");
    let result = serve_lines(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await;
    info!("stdin closed, shutting down");
    result
}

/// The transport loop, generic over its endpoints so tests can drive it
/// with in-memory buffers.
async fn serve_lines<R, W>(reader: R, writer: W) -> Result<(), ServerError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut writer = BufWriter::new(writer);

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let raw: Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(error) => {
                // Malformed lines are logged and skipped; the loop keeps going.
                warn!(%error, "skipping malformed request line");
                continue;
            }
        };

        if let Some(response) = dispatch(&raw) {
            let payload = serde_json::to_string(&response)?;
            writer.write_all(payload.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }

    Ok(())
}
