pub mod analysis;
pub mod api;
pub mod config;
pub mod db;
pub mod models;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::analysis::SymptomAnalysisService;
use crate::api::{ApiContext, ServerError};
use crate::config::AppConfig;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Load configuration, open the database and serve until Ctrl-C.
pub fn run() -> Result<(), ServerError> {
    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = AppConfig::from_env()?;

    // The remote client is blocking; it must be built and dropped
    // outside the async runtime.
    let service = Arc::new(SymptomAnalysisService::from_config(&config.remote)?);

    let conn = db::open_database(&config.db_path)?;
    tracing::info!(path = %config.db_path.display(), "Database ready");

    let ctx = ApiContext::new(Arc::clone(&service), conn);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
        api::serve(ctx, listener, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {e}");
            }
            tracing::info!("Shutdown requested");
        })
        .await
    });

    drop(runtime);
    drop(service);
    result
}
