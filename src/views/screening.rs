// src/views/screening.rs
//! Step-by-step screening questionnaire.
//!
//! ```text
//! Loading ──ok──> Ready ──submit──> Submitting ──ok──> Submitted (navigate)
//!    │              ▲                    │
//!    └──err──> Error ┘<────────err───────┘
//! ```
//!
//! `Error` after a failed submit keeps every answer, so the user can retry.

use std::str::FromStr;
use tracing::{error, info, warn};

use crate::core::RecruitingApi;
use crate::error::{ApiError, ApiResult};
use crate::routes::Route;
use crate::types::{AnswerSet, Screening, ScreeningEvaluation};

#[derive(Debug, Clone, PartialEq)]
pub enum ScreeningPhase {
    Loading,
    Ready,
    Submitting,
    Submitted,
    Error(ApiError),
}

/// A button press on the questionnaire page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Next,
    Back,
    Submit,
}

impl FromStr for StepAction {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" => Ok(StepAction::Next),
            "back" => Ok(StepAction::Back),
            "submit" => Ok(StepAction::Submit),
            other => Err(ApiError::validation(format!("Unknown action: {}", other))),
        }
    }
}

/// One entry of the progress indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepMarker {
    pub number: usize,
    pub active: bool,
    pub complete: bool,
}

#[derive(Debug, Clone)]
pub struct ScreeningSession {
    id: String,
    candidate_id: String,
    questions: Vec<String>,
    answers: AnswerSet,
    step: usize,
    phase: ScreeningPhase,
    notice: Option<String>,
}

impl ScreeningSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            candidate_id: String::new(),
            questions: Vec::new(),
            answers: AnswerSet::default(),
            step: 0,
            phase: ScreeningPhase::Loading,
            notice: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phase(&self) -> &ScreeningPhase {
        &self.phase
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.phase {
            ScreeningPhase::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Validation message for the last rejected step or submit.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        !self.questions.is_empty()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.is_loaded() && self.step + 1 == self.questions.len()
    }

    pub fn current_question(&self) -> &str {
        self.questions
            .get(self.step)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn current_answer(&self) -> &str {
        self.answers.get(self.step)
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn apply_fetch(&mut self, result: ApiResult<Screening>) {
        match result {
            Ok(screening) if screening.questions.is_empty() => {
                warn!("Screening {} has no questions", self.id);
                self.phase = ScreeningPhase::Error(ApiError::not_found("Screening"));
            }
            Ok(screening) => {
                info!(
                    "Loaded screening {} with {} questions",
                    self.id,
                    screening.questions.len()
                );
                self.answers = AnswerSet::empty(screening.questions.len());
                self.candidate_id = screening.candidate_id;
                self.questions = screening.questions;
                self.step = 0;
                self.phase = ScreeningPhase::Ready;
            }
            Err(e) => {
                error!("Failed to load screening {}: {}", self.id, e);
                self.phase = ScreeningPhase::Error(e);
            }
        }
    }

    pub async fn load(&mut self, api: &dyn RecruitingApi) {
        self.phase = ScreeningPhase::Loading;
        let result = api.screening(&self.id).await;
        self.apply_fetch(result);
    }

    /// Puts back the step and answers the page carried from its previous render.
    pub fn restore(&mut self, step: usize, answers: Vec<String>) {
        if !self.is_loaded() {
            return;
        }
        self.answers = AnswerSet::restore(answers, self.questions.len());
        self.step = step.min(self.questions.len() - 1);
    }

    fn is_interactive(&self) -> bool {
        self.is_loaded() && matches!(self.phase, ScreeningPhase::Ready | ScreeningPhase::Error(_))
    }

    /// Updates the answer for the current step only.
    pub fn edit(&mut self, text: impl Into<String>) {
        if self.is_interactive() {
            self.answers.set(self.step, text);
        }
    }

    pub fn can_next(&self) -> bool {
        self.is_interactive()
            && self.step + 1 < self.questions.len()
            && self.answers.is_complete(self.step)
    }

    pub fn can_back(&self) -> bool {
        self.is_interactive() && self.step > 0
    }

    pub fn can_submit(&self) -> bool {
        self.is_interactive() && self.is_last_step() && self.answers.all_complete()
    }

    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            if self.is_interactive() && !self.answers.is_complete(self.step) {
                self.notice = Some("Answer this question before moving on.".to_string());
            }
            return false;
        }
        self.notice = None;
        self.step += 1;
        true
    }

    pub fn back(&mut self) -> bool {
        if !self.can_back() {
            return false;
        }
        self.notice = None;
        self.step -= 1;
        true
    }

    /// Validates the answers and enters `Submitting`, returning the payload.
    pub fn begin_submit(&mut self) -> ApiResult<Vec<String>> {
        let rejection = if self.phase == ScreeningPhase::Submitting {
            Some("Answers are already being submitted.")
        } else if !self.is_interactive() {
            Some("The screening is not ready for submission.")
        } else if !self.is_last_step() {
            Some("Answers can only be submitted from the last question.")
        } else if !self.answers.all_complete() {
            Some("Every question needs an answer before submitting.")
        } else {
            None
        };

        if let Some(message) = rejection {
            self.notice = Some(message.to_string());
            return Err(ApiError::validation(message));
        }

        self.notice = None;
        self.phase = ScreeningPhase::Submitting;
        Ok(self.answers.as_slice().to_vec())
    }

    pub fn finish_submit(&mut self, result: ApiResult<ScreeningEvaluation>) -> Option<Route> {
        match result {
            Ok(evaluation) => {
                info!(
                    "Screening {} submitted (overall score: {:?})",
                    self.id, evaluation.overall_score
                );
                self.phase = ScreeningPhase::Submitted;
                Some(Route::Candidate(self.candidate_id.clone()))
            }
            Err(e) => {
                error!("Failed to submit screening {}: {}", self.id, e);
                self.phase = ScreeningPhase::Error(e);
                None
            }
        }
    }

    /// Posts the answers once; returns where to go on success.
    pub async fn submit(&mut self, api: &dyn RecruitingApi) -> Option<Route> {
        let answers = match self.begin_submit() {
            Ok(answers) => answers,
            Err(e) => {
                info!("Screening {} submission rejected: {}", self.id, e);
                return None;
            }
        };
        let result = api.submit_answers(&self.id, &answers).await;
        self.finish_submit(result)
    }

    pub async fn perform(&mut self, action: StepAction, api: &dyn RecruitingApi) -> Option<Route> {
        match action {
            StepAction::Next => {
                self.next();
                None
            }
            StepAction::Back => {
                self.back();
                None
            }
            StepAction::Submit => self.submit(api).await,
        }
    }

    pub fn steps(&self) -> Vec<StepMarker> {
        (0..self.questions.len())
            .map(|i| StepMarker {
                number: i + 1,
                active: i == self.step,
                complete: self.answers.is_complete(i),
            })
            .collect()
    }
}
