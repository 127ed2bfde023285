//! Patient identity middleware.
//!
//! Authentication happens upstream; this layer only lifts the patient id
//! header into a `PatientContext` request extension for handlers.

use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::api::error::ApiError;
use crate::api::types::{PatientContext, PATIENT_ID_HEADER};

/// Require a non-blank patient id header.
///
/// The context is attached to both the request (for handlers) and the
/// response (for the access logger, which runs outside this layer).
pub async fn require_patient(mut req: Request<axum::body::Body>, next: Next) -> Response {
    let patient_id = req
        .headers()
        .get(PATIENT_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string);

    match patient_id {
        Some(patient_id) => {
            let patient = PatientContext { patient_id };
            req.extensions_mut().insert(patient.clone());
            let mut response = next.run(req).await;
            response.extensions_mut().insert(patient);
            response
        }
        None => ApiError::Unauthorized.into_response(),
    }
}
