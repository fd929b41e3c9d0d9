use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use nodeflow_mcp::{McpHttpServer, ServerConfig, resolve_bind_address, run_stdio};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("http", sub)) => run_http(sub).await,
        // No subcommand behaves like `stdio` so MCP clients can launch the
        // binary directly.
        Some(("stdio", _)) | None => run_stdio_transport().await,
        Some((other, _)) => anyhow::bail!("unknown subcommand: {other}"),
    }
}

fn cli() -> Command {
    Command::new("nodeflow")
        .about("Nodeflow MCP server: canned workflow-automation tooling over JSON-RPC")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("stdio").about("Serve MCP over stdin/stdout (default)"))
        .subcommand(
            Command::new("http")
                .about("Serve MCP over HTTP with bearer authentication")
                .arg(
                    Arg::new("bind")
                        .long("bind")
                        .action(ArgAction::Set)
                        .help("Bind address, e.g. 127.0.0.1:3000 (overrides NODEFLOW_HTTP_BIND)"),
                ),
        )
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run_stdio_transport() -> Result<()> {
    tokio::select! {
        result = run_stdio() => result.context("stdio transport failed"),
        _ = shutdown_signal() => {
            info!("signal received, exiting");
            Ok(())
        }
    }
}

async fn run_http(matches: &ArgMatches) -> Result<()> {
    let config = ServerConfig::from_env();
    let token = config.require_auth_token()?.to_string();
    let bind = matches
        .get_one::<String>("bind")
        .cloned()
        .unwrap_or_else(|| config.bind_address.clone());
    let address = resolve_bind_address(&bind)?;

    let running = McpHttpServer::new(address, token)
        .start()
        .await
        .context("failed to start HTTP transport")?;
    info!("listening on {}", running.bound_address());

    shutdown_signal().await;
    info!("signal received, shutting down");
    running.stop().await.context("HTTP transport shutdown failed")
}

/// Resolve on SIGINT or, on unix, SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler, relying on ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
