// src/core/service_client.rs
//! HTTP client for the recruiting backend - JSON in, JSON out

use anyhow::{Context, Result};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::api::RecruitingApi;
use crate::error::{ApiError, ApiResult};
use crate::types::response::{
    ScreeningPayload, ScreeningStarted, SearchRequest, SearchResponse, SubmitAnswersRequest,
};
use crate::types::{Candidate, CandidateSummary, Screening, ScreeningEvaluation};

const SEARCH_ENDPOINT: &str = "search";
const CANDIDATE_ENDPOINT: &str = "candidate";
const SCREEN_ACTION: &str = "screen";
const SCREENING_ENDPOINT: &str = "screening";
const SUBMIT_ACTION: &str = "submit";

const MAX_ERROR_DETAIL_CHARS: usize = 200;

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ServiceClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins path segments onto the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get<R>(&self, segments: &[&str], what: &str) -> ApiResult<R>
    where
        R: DeserializeOwned,
    {
        let url = self.endpoint(segments);
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(network_failure)?;

        read_entity(response, what).await
    }

    async fn post<T, R>(&self, segments: &[&str], payload: Option<&T>, what: &str) -> ApiResult<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(segments);
        debug!("POST {}", url);

        let mut request = self.client.post(url);
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(network_failure)?;
        read_entity(response, what).await
    }
}

#[rocket::async_trait]
impl RecruitingApi for ServiceClient {
    async fn search(&self, query: &str) -> ApiResult<Vec<CandidateSummary>> {
        info!("Searching candidates for query: {}", query);

        let response: SearchResponse = self
            .post(
                &[SEARCH_ENDPOINT],
                Some(&SearchRequest { query }),
                "Search endpoint",
            )
            .await?;

        info!("Search returned {} candidates", response.candidates.len());
        Ok(response.candidates)
    }

    async fn candidate(&self, id: &str) -> ApiResult<Candidate> {
        self.get(&[CANDIDATE_ENDPOINT, id], "Candidate").await
    }

    async fn start_screening(&self, candidate_id: &str) -> ApiResult<String> {
        info!("Starting screening for candidate {}", candidate_id);

        let started: ScreeningStarted = self
            .post(
                &[CANDIDATE_ENDPOINT, candidate_id, SCREEN_ACTION],
                None::<&()>,
                "Candidate",
            )
            .await?;

        if started.screening_id.is_empty() {
            return Err(ApiError::ServerFailure {
                status: StatusCode::OK.as_u16(),
                message: "Screening created without an identifier".to_string(),
            });
        }
        Ok(started.screening_id)
    }

    async fn screening(&self, id: &str) -> ApiResult<Screening> {
        let payload: ScreeningPayload = self.get(&[SCREENING_ENDPOINT, id], "Screening").await?;

        Ok(Screening {
            id: id.to_string(),
            candidate_id: payload.candidate_id,
            questions: payload.questions,
        })
    }

    async fn submit_answers(
        &self,
        screening_id: &str,
        answers: &[String],
    ) -> ApiResult<ScreeningEvaluation> {
        let url = self.endpoint(&[SCREENING_ENDPOINT, screening_id, SUBMIT_ACTION]);
        info!("Submitting {} answers for screening {}", answers.len(), screening_id);

        let response = self
            .client
            .post(url)
            .json(&SubmitAnswersRequest { answers })
            .send()
            .await
            .map_err(network_failure)?;

        let status = response.status();
        let body = response.text().await.map_err(network_failure)?;

        if !status.is_success() {
            let err = classify_status(status, &body, "Screening");
            warn!("Answer submission rejected: {}", err);
            return Err(err);
        }

        // The evaluation is informational; an unexpected shape must not fail the submission.
        match serde_json::from_str::<ScreeningEvaluation>(&body) {
            Ok(evaluation) => Ok(evaluation),
            Err(e) => {
                warn!("Ignoring unreadable evaluation for screening {}: {}", screening_id, e);
                Ok(ScreeningEvaluation::default())
            }
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid backend URL: {}", raw))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        anyhow::bail!("Backend URL must be an http(s) origin: {}", raw);
    }

    Ok(url)
}

async fn read_entity<R>(response: reqwest::Response, what: &str) -> ApiResult<R>
where
    R: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await.map_err(network_failure)?;

    if !status.is_success() {
        let err = classify_status(status, &body, what);
        warn!("Backend error for {}: {}", what, err);
        return Err(err);
    }

    decode_entity(status, &body, what)
}

/// Maps a non-2xx response onto the error taxonomy.
pub(crate) fn classify_status(status: StatusCode, body: &str, what: &str) -> ApiError {
    if status == StatusCode::NOT_FOUND {
        return ApiError::not_found(what);
    }

    ApiError::ServerFailure {
        status: status.as_u16(),
        message: error_detail(body),
    }
}

/// A `null` body means the entity does not exist.
pub(crate) fn decode_entity<R>(status: StatusCode, body: &str, what: &str) -> ApiResult<R>
where
    R: DeserializeOwned,
{
    match serde_json::from_str::<Option<R>>(body) {
        Ok(Some(entity)) => Ok(entity),
        Ok(None) => Err(ApiError::not_found(what)),
        Err(e) => Err(ApiError::ServerFailure {
            status: status.as_u16(),
            message: format!("Unreadable {} response: {}", what.to_lowercase(), e),
        }),
    }
}

/// Prefers the `detail` field of JSON error bodies, otherwise the truncated raw text.
fn error_detail(body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(body) {
        if let Some(detail) = map.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no response body".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_DETAIL_CHARS).collect()
    }
}

fn network_failure(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::NetworkFailure("request timed out".to_string())
    } else {
        ApiError::NetworkFailure(err.to_string())
    }
}
