// src/core/api.rs
//! The backend operations the views depend on.

use crate::error::ApiResult;
use crate::types::{Candidate, CandidateSummary, Screening, ScreeningEvaluation};

/// Recruiting backend as seen by the views. `ServiceClient` is the HTTP
/// implementation; tests substitute an in-memory one.
#[rocket::async_trait]
pub trait RecruitingApi: Send + Sync {
    /// `POST /search`
    async fn search(&self, query: &str) -> ApiResult<Vec<CandidateSummary>>;

    /// `GET /candidate/{id}`
    async fn candidate(&self, id: &str) -> ApiResult<Candidate>;

    /// `POST /candidate/{id}/screen`, returning the new screening id.
    async fn start_screening(&self, candidate_id: &str) -> ApiResult<String>;

    /// `GET /screening/{id}`
    async fn screening(&self, id: &str) -> ApiResult<Screening>;

    /// `POST /screening/{id}/submit`
    async fn submit_answers(
        &self,
        screening_id: &str,
        answers: &[String],
    ) -> ApiResult<ScreeningEvaluation>;
}
