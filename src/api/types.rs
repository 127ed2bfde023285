//! Shared types for the HTTP layer.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::analysis::SymptomAnalysisService;
use crate::api::error::ApiError;
use crate::db::DatabaseError;

/// Header carrying the patient id set by the upstream auth layer.
pub const PATIENT_ID_HEADER: &str = "X-Patient-Id";

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub service: Arc<SymptomAnalysisService>,
    db: Arc<Mutex<Connection>>,
}

impl ApiContext {
    pub fn new(service: Arc<SymptomAnalysisService>, conn: Connection) -> Self {
        Self {
            service,
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run `f` with exclusive access to the database connection.
    ///
    /// Blocks on the connection lock; call from the blocking pool.
    pub fn with_db<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, DatabaseError>,
    ) -> Result<T, ApiError> {
        let conn = self
            .db
            .lock()
            .map_err(|_| ApiError::Internal("database lock poisoned".into()))?;
        f(&conn).map_err(ApiError::from)
    }
}

/// Authenticated patient, injected into request extensions by the
/// patient middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientContext {
    pub patient_id: String,
}
