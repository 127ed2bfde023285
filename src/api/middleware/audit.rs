//! Access logging middleware.
//!
//! Emits one event per request with method, path, patient, status and
//! latency. Runs outermost so rejected requests are logged too; the
//! patient is read back from the response extensions.

use std::time::Instant;

use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::api::types::PatientContext;

pub async fn log_access(req: Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let patient = response
        .extensions()
        .get::<PatientContext>()
        .map(|p| p.patient_id.as_str());

    tracing::info!(
        %method,
        path = %path,
        patient = patient.unwrap_or("-"),
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "API access"
    );

    response
}
