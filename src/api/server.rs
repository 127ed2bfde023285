//! API server: serve the router on a bound listener until a shutdown
//! signal resolves, then drain in-flight requests.

use std::future::Future;

use tokio::net::TcpListener;

use crate::analysis::AnalysisError;
use crate::api::router::api_router;
use crate::api::types::ApiContext;
use crate::config::ConfigError;
use crate::db::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Analysis setup error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serve on `listener` until `signal` resolves.
///
/// Binding is left to the caller so a port-0 listener can report its
/// address before serving starts.
pub async fn serve(
    ctx: ApiContext,
    listener: TcpListener,
    signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "API server listening");

    axum::serve(listener, api_router(ctx))
        .with_graceful_shutdown(signal)
        .await?;

    tracing::info!(%addr, "API server stopped");
    Ok(())
}
