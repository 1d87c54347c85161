// src/views/candidate.rs
//! Candidate profile and the "start screening" action

use tracing::{error, info, warn};

use crate::core::RecruitingApi;
use crate::error::{ApiError, ApiResult};
use crate::routes::Route;
use crate::types::Candidate;

#[derive(Debug, Clone, PartialEq)]
pub enum CandidatePhase {
    Loading,
    NotFound,
    Loaded(Box<Candidate>),
    Failed(ApiError),
}

#[derive(Debug, Clone)]
pub struct CandidateView {
    id: String,
    phase: CandidatePhase,
    starting_screening: bool,
    action_error: Option<String>,
}

impl CandidateView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            phase: CandidatePhase::Loading,
            starting_screening: false,
            action_error: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phase(&self) -> &CandidatePhase {
        &self.phase
    }

    pub fn candidate(&self) -> Option<&Candidate> {
        match &self.phase {
            CandidatePhase::Loaded(candidate) => Some(candidate.as_ref()),
            _ => None,
        }
    }

    /// Message from a failed "start screening" attempt.
    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn apply_fetch(&mut self, result: ApiResult<Candidate>) {
        self.phase = match result {
            Ok(candidate) => CandidatePhase::Loaded(Box::new(candidate)),
            Err(e) if e.is_not_found() => {
                info!("Candidate {} not found", self.id);
                CandidatePhase::NotFound
            }
            Err(e) => {
                error!("Failed to fetch candidate {}: {}", self.id, e);
                CandidatePhase::Failed(e)
            }
        };
    }

    pub async fn load(&mut self, api: &dyn RecruitingApi) {
        self.phase = CandidatePhase::Loading;
        let result = api.candidate(&self.id).await;
        self.apply_fetch(result);
    }

    /// Returns the candidate id to screen, or `None` while a start is already pending.
    pub fn begin_start_screening(&mut self) -> Option<String> {
        if self.starting_screening {
            return None;
        }
        self.starting_screening = true;
        self.action_error = None;
        Some(self.id.clone())
    }

    /// Navigates to the new screening on success; otherwise keeps the
    /// failure for display.
    pub fn finish_start_screening(&mut self, result: ApiResult<String>) -> Option<Route> {
        self.starting_screening = false;
        match result {
            Ok(screening_id) => {
                info!("Screening {} created for candidate {}", screening_id, self.id);
                Some(Route::Screening(screening_id))
            }
            Err(e) => {
                warn!("Failed to start screening for {}: {}", self.id, e);
                self.action_error = Some(e.user_message());
                None
            }
        }
    }

    pub async fn start_screening(&mut self, api: &dyn RecruitingApi) -> Option<Route> {
        let candidate_id = self.begin_start_screening()?;
        let result = api.start_screening(&candidate_id).await;
        self.finish_start_screening(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str) -> Candidate {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": "Jane Smith",
            "location": "San Francisco, CA",
            "skills": ["Java"],
            "score": 64.0
        }))
        .unwrap()
    }

    #[test]
    fn test_missing_record_is_not_found_state() {
        let mut view = CandidateView::new("42");
        view.apply_fetch(Err(ApiError::not_found("Candidate")));
        assert_eq!(view.phase(), &CandidatePhase::NotFound);
        assert!(view.candidate().is_none());
    }

    #[test]
    fn test_server_failure_is_kept() {
        let mut view = CandidateView::new("42");
        let err = ApiError::ServerFailure {
            status: 500,
            message: "db down".into(),
        };
        view.apply_fetch(Err(err.clone()));
        assert_eq!(view.phase(), &CandidatePhase::Failed(err));
    }

    #[test]
    fn test_loaded() {
        let mut view = CandidateView::new("2");
        assert_eq!(view.phase(), &CandidatePhase::Loading);
        view.apply_fetch(Ok(candidate("2")));
        assert_eq!(view.candidate().map(|c| c.name.as_str()), Some("Jane Smith"));
    }

    #[test]
    fn test_start_screening_navigates() {
        let mut view = CandidateView::new("2");
        assert_eq!(view.begin_start_screening().as_deref(), Some("2"));
        assert!(view.begin_start_screening().is_none());

        let route = view.finish_start_screening(Ok("9".into()));
        assert_eq!(route, Some(Route::Screening("9".into())));
        assert!(view.begin_start_screening().is_some());
    }

    #[test]
    fn test_start_screening_failure_is_visible() {
        let mut view = CandidateView::new("2");
        view.begin_start_screening();
        let route =
            view.finish_start_screening(Err(ApiError::NetworkFailure("timed out".into())));
        assert_eq!(route, None);
        assert!(view.action_error().is_some());
        assert!(view.begin_start_screening().is_some());
        assert!(view.action_error().is_none());
    }

    #[tokio::test]
    async fn test_load_missing_candidate() {
        use crate::views::test_support::RecordingApi;

        let api = RecordingApi::default();
        let mut view = CandidateView::new("42");
        view.load(&api).await;

        assert_eq!(view.phase(), &CandidatePhase::NotFound);
        assert_eq!(api.calls(), vec!["candidate"]);
    }

    #[tokio::test]
    async fn test_start_screening_routes_to_new_screening() {
        use crate::views::test_support::RecordingApi;

        let api = RecordingApi::default();
        let mut view = CandidateView::new("1");
        let route = view.start_screening(&api).await;

        assert_eq!(route, Some(Route::Screening("s-1".to_string())));
    }
}
