//! Gateway bootstrap: bind the listener and serve the router.

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::error::{GatewayError, Result};
use crate::http::create_router;
use crate::state::AppState;

/// Bind the listening socket
pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| GatewayError::Startup {
            addr: addr.to_string(),
            source,
        })
}

/// Serve `app` until the listener fails
pub async fn serve(listener: TcpListener, app: axum::Router) -> Result<()> {
    let addr = listener.local_addr()?.to_string();
    axum::serve(listener, app)
        .await
        .map_err(|source| GatewayError::Startup { addr, source })
}

/// Build the router from `state` and serve it on the configured address.
/// Only returns on failure.
pub async fn start(state: Arc<AppState>) -> Result<()> {
    let config = state.config.clone();
    tracing::info!(
        debug = config.debug,
        demo = config.demo,
        auth = config.credentials().is_some(),
        "Server HTTP start"
    );

    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = bind(&addr).await?;
    tracing::info!("Starting HTTP server on {}", addr);

    serve(listener, app).await
}
