//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.
//!
//! Middleware stack on patient routes (outermost → innermost):
//! 1. Access logger → 2. Patient context

use axum::routing::get;
use axum::Router;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the API router.
///
/// Endpoint handlers use `State<ApiContext>` (provided via `with_state`).
pub fn api_router(ctx: ApiContext) -> Router {
    // Layers are applied from bottom (innermost) to top (outermost).
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let patient_routes = Router::new()
        .route(
            "/symptom-analysis",
            get(endpoints::symptom_analysis::list).post(endpoints::symptom_analysis::create),
        )
        .route(
            "/symptom-analysis/:id",
            get(endpoints::symptom_analysis::detail),
        )
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn(middleware::patient::require_patient))
        .layer(axum::middleware::from_fn(middleware::audit::log_access));

    let public_routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::audit::log_access));

    Router::new().nest("/api", patient_routes.merge(public_routes))
}
