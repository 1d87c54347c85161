// src/types/response.rs
use serde::{Deserialize, Serialize};

use super::candidate::CandidateSummary;
use super::{flexible_string, null_as_default};

// ===== Request Bodies =====

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SubmitAnswersRequest<'a> {
    pub answers: &'a [String],
}

// ===== Service Response Types =====

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidates: Vec<CandidateSummary>,
}

#[derive(Debug, Deserialize)]
pub struct ScreeningStarted {
    #[serde(deserialize_with = "flexible_string")]
    pub screening_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ScreeningPayload {
    #[serde(deserialize_with = "flexible_string")]
    pub candidate_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub questions: Vec<String>,
}

/// Result of `POST /screening/{id}/submit`. Only logged by the frontend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScreeningEvaluation {
    #[serde(default)]
    pub overall_score: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub individual_scores: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
}
