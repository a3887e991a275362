//! icesheet - ice-sheet mass-loss projection API
//!
//! This is the main entry point for the server.

use std::net::SocketAddr;
use std::time::Instant;
use tokio::signal;
use tracing::{error, info};

use icesheet::{build_router, init_tracing, log_operation_end, log_operation_start};
use icesheet::{AppState, Config, IceSheetError, Result};

fn main() -> Result<()> {
    let config = Config::load()?;

    init_tracing(&config.log_level);

    info!("Starting icesheet v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    if let Some(workers) = config.server.workers {
        builder.worker_threads(workers);
    }
    let runtime = builder.enable_all().build().map_err(|e| {
        error!("Failed to build runtime: {}", e);
        IceSheetError::Io(e)
    })?;

    runtime.block_on(serve(config))
}

async fn serve(config: Config) -> Result<()> {
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| IceSheetError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    let state = AppState::new_shared(config);
    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| IceSheetError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server listening on http://{}", addr);

    let started = Instant::now();
    log_operation_start("serve", Some(&addr.to_string()));

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| IceSheetError::Server {
            message: format!("Server error: {}", e),
        });

    log_operation_end("serve", started, result.is_ok());

    let snapshot = state.metrics.snapshot();
    info!(
        total_requests = snapshot.total_requests,
        "Server has been gracefully shut down"
    );
    result
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
