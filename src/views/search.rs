// src/views/search.rs
//! Free-text candidate search

use tracing::{info, warn};

use crate::core::RecruitingApi;
use crate::error::{ApiError, ApiResult};
use crate::routes::Route;
use crate::types::CandidateSummary;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    /// Nothing searched yet.
    Idle,
    Searching,
    Loaded,
    Failed(ApiError),
}

#[derive(Debug, Clone)]
pub struct SearchView {
    query: String,
    candidates: Vec<CandidateSummary>,
    phase: SearchPhase,
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchView {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            candidates: Vec::new(),
            phase: SearchPhase::Idle,
        }
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::new()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[CandidateSummary] {
        &self.candidates
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.phase {
            SearchPhase::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn has_searched(&self) -> bool {
        matches!(self.phase, SearchPhase::Loaded | SearchPhase::Failed(_))
    }

    /// Returns the query to send, or `None` when it is blank or a search is
    /// already in flight.
    pub fn begin_search(&mut self) -> Option<String> {
        if self.is_busy() || self.query.trim().is_empty() {
            return None;
        }
        self.phase = SearchPhase::Searching;
        Some(self.query.clone())
    }

    pub fn finish_search(&mut self, result: ApiResult<Vec<CandidateSummary>>) {
        match result {
            Ok(candidates) => {
                self.candidates = candidates;
                self.phase = SearchPhase::Loaded;
            }
            Err(e) => {
                warn!("Search for '{}' failed: {}", self.query, e);
                self.phase = SearchPhase::Failed(e);
            }
        }
    }

    /// Runs one search round trip. Blank queries never reach the backend.
    pub async fn submit(&mut self, api: &dyn RecruitingApi) {
        let Some(query) = self.begin_search() else {
            info!("Ignoring blank search query");
            return;
        };
        let result = api.search(&query).await;
        self.finish_search(result);
    }

    /// Where clicking the card for `candidate_id` leads.
    pub fn candidate_route(&self, candidate_id: &str) -> Route {
        Route::Candidate(candidate_id.to_string())
    }
}
