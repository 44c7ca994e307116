//! Integration tests for the ResultKit server.
//!
//! Each test starts the demo server in-process on an ephemeral port and
//! talks to it over real HTTP with `reqwest`:
//!
//! ```text
//! cargo test -p resultkit-integration
//! ```

use std::net::SocketAddr;
use std::sync::{Arc, Once};

use anyhow::{Context, Result};
use resultkit_core::ResultKitConfig;
use resultkit_http::{ResultExecutor, ResultHttpService};
use resultkit_server::{DemoHandler, serve};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A demo server running on the current runtime.
///
/// Dropping the handle triggers graceful shutdown.
#[derive(Debug)]
pub struct TestServer {
    addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    /// Start a server with the default configuration.
    pub async fn start() -> Result<Self> {
        Self::start_with(ResultKitConfig::default()).await
    }

    /// Start a server with a custom configuration.
    pub async fn start_with(config: ResultKitConfig) -> Result<Self> {
        init_tracing();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("failed to bind ephemeral port")?;
        let addr = listener.local_addr()?;

        let service = ResultHttpService::new(Arc::new(DemoHandler::new()), ResultExecutor::new(config));
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let shutdown = async {
                rx.await.ok();
            };
            if let Err(e) = serve(listener, service, shutdown).await {
                tracing::error!(error = %e, "test server failed");
            }
        });

        Ok(Self {
            addr,
            _shutdown: tx,
        })
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// HTTP client for the tests.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::new()
}

mod test_dispatch;
mod test_validation;
