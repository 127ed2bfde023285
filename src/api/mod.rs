//! HTTP API for the symptom checker.
//!
//! Routes are nested under `/api/`. Patient routes sit behind a
//! middleware stack: Patient context → Access log → Handler.
//!
//! The router is composable: `api_router()` returns a `Router` that can
//! be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::{serve, ServerError};
pub use types::{ApiContext, PatientContext, PATIENT_ID_HEADER};
