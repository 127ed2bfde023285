use serde::Deserialize;

use super::AnalysisError;
use crate::models::ScoredCondition;

/// Conditions and advice parsed out of a remote reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAnalysis {
    pub conditions: Vec<ScoredCondition>,
    pub recommendations: Vec<String>,
}

#[derive(Deserialize)]
struct RawAnalysis {
    conditions: Vec<RawCondition>,
    recommendations: Vec<String>,
}

#[derive(Deserialize)]
struct RawCondition {
    name: String,
    probability: f64,
    description: String,
}

/// Parse the model's reply into conditions and recommendations.
///
/// The reply must be the JSON object itself, optionally inside one
/// Markdown ```json fence. Order and values are kept as returned; only the
/// shape is checked.
pub fn parse_analysis_response(content: &str) -> Result<RemoteAnalysis, AnalysisError> {
    let json_str = strip_json_fence(content)?;
    let raw: RawAnalysis =
        serde_json::from_str(json_str).map_err(|e| AnalysisError::JsonParsing(e.to_string()))?;

    let conditions = raw
        .conditions
        .into_iter()
        .map(into_scored)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RemoteAnalysis {
        conditions,
        recommendations: raw.recommendations,
    })
}

fn into_scored(raw: RawCondition) -> Result<ScoredCondition, AnalysisError> {
    if !raw.probability.is_finite() || !(0.0..=100.0).contains(&raw.probability) {
        return Err(AnalysisError::MalformedResponse(format!(
            "probability {} for '{}' is not a percentage",
            raw.probability, raw.name
        )));
    }
    Ok(ScoredCondition {
        name: raw.name,
        // In range by the check above
        probability: raw.probability.round() as u8,
        description: raw.description,
    })
}

fn strip_json_fence(content: &str) -> Result<&str, AnalysisError> {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return Ok(trimmed);
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let body = rest
        .strip_suffix("```")
        .ok_or_else(|| AnalysisError::MalformedResponse("Unclosed JSON block".into()))?;
    Ok(body.trim())
}
