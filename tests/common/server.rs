//! In-process test server.

use std::net::SocketAddr;
use std::sync::Arc;

use icesheet::{build_router, AppState, Config};

/// Start a server on an ephemeral port and return its address with its state
pub async fn start_test_server() -> (SocketAddr, Arc<AppState>) {
    let state = AppState::new_shared(Config::default());
    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
        .await
        .expect("Failed to bind to test port");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    (addr, state)
}
