//! ResultKit Server - demo HTTP server dispatching envelopes.
//!
//! # Usage
//!
//! ```text
//! LISTEN_ADDR=0.0.0.0:8080 resultkit-server
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LISTEN_ADDR` | `127.0.0.1:8080` | Bind address |
//! | `RESULTKIT_DEFAULT_CONTENT_TYPE` | `application/json; charset=utf-8` | Fallback content type |
//! | `RESULTKIT_JSON_NAMING` | `camel` | Envelope field naming (`camel`, `pascal`, `none`) |
//! | `RESULTKIT_JSON_PRETTY` | `false` | Indent JSON output |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use resultkit_core::ResultKitConfig;
use resultkit_http::{ResultExecutor, ResultHttpService};
use resultkit_server::{DemoHandler, VERSION, serve};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Perform a health check by requesting `/health` from a running server.
async fn run_health_check(addr: &str) -> Result<()> {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    let stream = TcpStream::connect(addr)
        .await
        .with_context(|| format!("cannot connect to {addr}"))?;

    let (mut reader, mut writer) = stream.into_split();

    let request = format!("GET /health HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    writer.write_all(request.as_bytes()).await?;
    writer.shutdown().await?;

    let mut response = String::new();
    reader.read_to_string(&mut response).await?;

    if response.contains("200 OK") && response.contains("running") {
        Ok(())
    } else {
        anyhow::bail!("unhealthy response from {addr}")
    }
}

fn listen_addr() -> String {
    std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_owned())
}

fn log_level() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("received shutdown signal, draining connections");
}

#[tokio::main]
async fn main() -> Result<()> {
    let listen_addr = listen_addr();

    // Handle --health-check flag for container health probes.
    if std::env::args().any(|a| a == "--health-check") {
        let addr = listen_addr.replace("0.0.0.0", "127.0.0.1");
        let healthy = run_health_check(&addr).await.is_ok();
        std::process::exit(i32::from(!healthy));
    }

    init_tracing(&log_level())?;

    let config = ResultKitConfig::from_env().context("invalid ResultKit configuration")?;
    info!(
        default_content_type = %config.default_content_type,
        json_naming = %config.json_naming,
        json_pretty = config.json_pretty,
        "loaded configuration",
    );

    let service = ResultHttpService::new(Arc::new(DemoHandler::new()), ResultExecutor::new(config));

    let addr: SocketAddr = listen_addr
        .parse()
        .with_context(|| format!("invalid bind address: {listen_addr}"))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(%addr, version = VERSION, "starting ResultKit Server");

    serve(listener, service, shutdown_signal()).await
}
