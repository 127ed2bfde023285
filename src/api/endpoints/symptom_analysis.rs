//! Symptom checker endpoints.
//!
//! Three endpoints:
//! - `POST /api/symptom-analysis`: analyze and store a new description
//! - `GET /api/symptom-analysis`: the patient's past analyses
//! - `GET /api/symptom-analysis/:id`: one stored analysis

use std::str::FromStr;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, PatientContext};
use crate::db::{self, NewSymptomAnalysis, StoredSymptomAnalysis};
use crate::models::{AgeBracket, Gender, SymptomInput};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub symptoms: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
}

impl AnalyzeRequest {
    /// Validate and apply boundary defaults. Blank age/gender count as absent.
    pub fn into_input(self) -> Result<SymptomInput, ApiError> {
        let symptoms = self
            .symptoms
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ApiError::BadRequest("Symptoms are required".into()))?;

        let age = match non_blank(self.age) {
            Some(label) => AgeBracket::from_str(&label)
                .map_err(|_| ApiError::BadRequest(format!("Unknown age bracket: {label}")))?,
            None => AgeBracket::default(),
        };
        let gender = match non_blank(self.gender) {
            Some(label) => Gender::from_str(&label)
                .map_err(|_| ApiError::BadRequest(format!("Unknown gender: {label}")))?,
            None => Gender::default(),
        };

        Ok(SymptomInput {
            symptoms,
            age,
            gender,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `POST /api/symptom-analysis`: run the checker and store the result.
pub async fn create(
    State(ctx): State<ApiContext>,
    Extension(patient): Extension<PatientContext>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StoredSymptomAnalysis>), ApiError> {
    let Json(req) = body?;
    let input = req.into_input()?;

    // The remote strategy makes a blocking HTTP call
    let stored = tokio::task::spawn_blocking(move || {
        let analysis = ctx.service.analyze_symptoms(&input);
        tracing::info!(
            patient = %patient.patient_id,
            source = %analysis.source,
            conditions = analysis.conditions.len(),
            "Symptom analysis completed"
        );
        let new = NewSymptomAnalysis {
            patient_id: patient.patient_id,
            input,
            analysis,
        };
        ctx.with_db(|conn| db::insert_symptom_analysis(conn, &new))
    })
    .await??;

    Ok((StatusCode::CREATED, Json(stored)))
}

/// `GET /api/symptom-analysis`: the patient's analyses, newest first.
pub async fn list(
    State(ctx): State<ApiContext>,
    Extension(patient): Extension<PatientContext>,
) -> Result<Json<Vec<StoredSymptomAnalysis>>, ApiError> {
    let analyses = tokio::task::spawn_blocking(move || {
        ctx.with_db(|conn| db::get_symptom_analyses_by_patient(conn, &patient.patient_id))
    })
    .await??;

    Ok(Json(analyses))
}

/// `GET /api/symptom-analysis/:id`: one analysis owned by the patient.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Extension(patient): Extension<PatientContext>,
    Path(id): Path<String>,
) -> Result<Json<StoredSymptomAnalysis>, ApiError> {
    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid analysis id".into()))?;

    let found = tokio::task::spawn_blocking(move || {
        ctx.with_db(|conn| db::get_symptom_analysis_by_id(conn, id))
    })
    .await??;

    // Another patient's record is indistinguishable from a missing one
    found
        .filter(|a| a.patient_id == patient.patient_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Symptom analysis not found".into()))
}
