use std::{io, net::SocketAddr, time::Duration};

use axum::{routing::get, Router};
use log::{error, info, warn};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

use super::{
    errors::ServerError,
    handler::{method_not_allowed, number_lookup_handler},
};
use crate::config::Config;

pub const NUMBER_LOOKUP_ENDPOINT: &str = "/v1/phone-numbers";

/// Routes served by [`HttpServer`].
pub fn router() -> Router {
    Router::new().route(
        NUMBER_LOOKUP_ENDPOINT,
        get(number_lookup_handler).fallback(method_not_allowed),
    )
}

/// Running HTTP server. Dropping it without calling [`HttpServer::stop`]
/// leaves the server task running until the runtime shuts down.
pub struct HttpServer {
    local_addr: SocketAddr,
    shutdown_timeout: Duration,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<io::Result<()>>,
}

impl HttpServer {
    /// Binds the configured port and starts serving [`router`] in the
    /// background. Fails if the port can't be bound.
    pub async fn start(config: &Config) -> Result<Self, ServerError> {
        let addr = config.bind_address();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let local_addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server = axum::serve(listener, router()).with_graceful_shutdown(async move {
            // A dropped sender also means shutdown.
            let _ = shutdown_rx.await;
        });
        let task = tokio::spawn(server.into_future());
        info!("Starting HTTP server on {local_addr}");

        Ok(Self { local_addr, shutdown_timeout: config.shutdown_timeout, shutdown_tx, task })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting connections and waits for in-flight requests, at most
    /// for the configured shutdown timeout.
    pub async fn stop(self) {
        let Self { shutdown_timeout, shutdown_tx, mut task, .. } = self;
        info!("Shutting down http server");
        // Err only if the server task already ended.
        let _ = shutdown_tx.send(());

        match tokio::time::timeout(shutdown_timeout, &mut task).await {
            Ok(Ok(Ok(()))) => info!("HTTP server stopped"),
            Ok(Ok(Err(err))) => error!("error shutting down http server: {err}"),
            Ok(Err(err)) => error!("http server task failed: {err}"),
            Err(_) => {
                warn!("http server didn't stop within {shutdown_timeout:?}, aborting");
                task.abort();
            }
        }
    }
}

/// Resolves once SIGINT or SIGTERM is received.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("failed to listen for SIGINT: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("SIGINT received"),
        _ = terminate => info!("SIGTERM received"),
    }
}
