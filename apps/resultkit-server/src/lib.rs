//! ResultKit demo server library.
//!
//! Exposes the demo endpoint handler and the accept loop so the binary and
//! the integration tests run the exact same server.

pub mod routes;

use std::future::Future;

use anyhow::Result;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use resultkit_http::{EndpointHandler, ResultHttpService};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

pub use routes::DemoHandler;

/// Server version reported by the health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the accept loop, serving connections until `shutdown` completes.
///
/// In-flight connections are drained before returning.
pub async fn serve<H, F>(
    listener: TcpListener,
    service: ResultHttpService<H>,
    shutdown: F,
) -> Result<()>
where
    H: EndpointHandler,
    F: Future<Output = ()>,
{
    let graceful = hyper_util::server::graceful::GracefulShutdown::new();
    let http = HttpConnBuilder::new(TokioExecutor::new());

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                let (stream, peer_addr) = match result {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection");
                        continue;
                    }
                };

                let svc = service.clone();
                let conn = http.serve_connection(TokioIo::new(stream), svc);
                let conn = graceful.watch(conn.into_owned());

                tokio::spawn(async move {
                    if let Err(e) = conn.await {
                        error!(peer_addr = %peer_addr, error = %e, "connection error");
                    }
                });
            }

            () = &mut shutdown => {
                info!("shutting down gracefully");
                break;
            }
        }
    }

    graceful.shutdown().await;
    info!("all connections drained, exiting");

    Ok(())
}
