use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::db::DatabaseError;
use crate::models::*;

const TABLE: &str = "symptom_analyses";

/// Separator used for the flattened recommendations column.
pub const RECOMMENDATION_SEPARATOR: &str = "; ";

/// A finished analysis ready to be stored for a patient.
#[derive(Debug, Clone)]
pub struct NewSymptomAnalysis {
    pub patient_id: String,
    pub input: SymptomInput,
    pub analysis: AnalysisResult,
}

/// Persisted symptom-checker run, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSymptomAnalysis {
    pub id: i64,
    pub patient_id: String,
    pub symptoms: String,
    pub age: AgeBracket,
    pub gender: Gender,
    pub analysis: AnalysisResult,
    pub recommendations: String,
    pub created_at: DateTime<Utc>,
}

pub fn insert_symptom_analysis(
    conn: &Connection,
    new: &NewSymptomAnalysis,
) -> Result<StoredSymptomAnalysis, DatabaseError> {
    // Stored at microsecond precision; truncate so the returned value matches a re-read
    let created_at = Utc::now().trunc_subsecs(6);
    let analysis_json = serde_json::to_string(&new.analysis).map_err(|e| {
        DatabaseError::Corrupt {
            table: TABLE,
            id: 0,
            reason: format!("analysis not serializable: {e}"),
        }
    })?;
    let recommendations = new.analysis.recommendations.join(RECOMMENDATION_SEPARATOR);

    conn.execute(
        "INSERT INTO symptom_analyses (patient_id, symptoms, age, gender, analysis,
         recommendations, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            new.patient_id,
            new.input.symptoms,
            new.input.age.as_str(),
            new.input.gender.as_str(),
            analysis_json,
            recommendations,
            format_timestamp(&created_at),
        ],
    )?;

    Ok(StoredSymptomAnalysis {
        id: conn.last_insert_rowid(),
        patient_id: new.patient_id.clone(),
        symptoms: new.input.symptoms.clone(),
        age: new.input.age,
        gender: new.input.gender,
        analysis: new.analysis.clone(),
        recommendations,
        created_at,
    })
}

/// All analyses for one patient, newest first.
pub fn get_symptom_analyses_by_patient(
    conn: &Connection,
    patient_id: &str,
) -> Result<Vec<StoredSymptomAnalysis>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, symptoms, age, gender, analysis, recommendations, created_at
         FROM symptom_analyses WHERE patient_id = ?1
         ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map(params![patient_id], read_row)?;

    let mut analyses = Vec::new();
    for row in rows {
        analyses.push(row_to_analysis(row?)?);
    }
    Ok(analyses)
}

pub fn get_symptom_analysis_by_id(
    conn: &Connection,
    id: i64,
) -> Result<Option<StoredSymptomAnalysis>, DatabaseError> {
    let row = conn
        .query_row(
            "SELECT id, patient_id, symptoms, age, gender, analysis, recommendations, created_at
             FROM symptom_analyses WHERE id = ?1",
            params![id],
            read_row,
        )
        .optional()?;

    row.map(row_to_analysis).transpose()
}

type AnalysisRow = (
    i64,
    String,
    String,
    Option<String>,
    Option<String>,
    String,
    Option<String>,
    String,
);

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AnalysisRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
    ))
}

fn row_to_analysis(row: AnalysisRow) -> Result<StoredSymptomAnalysis, DatabaseError> {
    let (id, patient_id, symptoms, age, gender, analysis, recommendations, created_at) = row;
    let corrupt = |reason: String| DatabaseError::Corrupt {
        table: TABLE,
        id,
        reason,
    };

    // NULL columns come from rows written before defaults were applied
    let age = match age {
        Some(label) => AgeBracket::from_str(&label)?,
        None => AgeBracket::default(),
    };
    let gender = match gender {
        Some(label) => Gender::from_str(&label)?,
        None => Gender::default(),
    };
    let analysis: AnalysisResult =
        serde_json::from_str(&analysis).map_err(|e| corrupt(format!("analysis: {e}")))?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| corrupt(format!("created_at: {e}")))?
        .with_timezone(&Utc);

    Ok(StoredSymptomAnalysis {
        id,
        patient_id,
        symptoms,
        age,
        gender,
        analysis,
        recommendations: recommendations.unwrap_or_default(),
        created_at,
    })
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
