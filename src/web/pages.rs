// src/web/pages.rs
//! Template view models. Everything the templates show is computed here so
//! the HTML stays free of logic.

use askama::Template;

use crate::error::ApiError;
use crate::routes::Route;
use crate::types::{CandidateSummary, ProfileLink};
use crate::views::{CandidateView, ScreeningSession, SearchView, StepMarker};

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchPage {
    pub query: String,
    pub cards: Vec<CandidateCard>,
    pub searched: bool,
    pub error: Option<String>,
}

pub struct CandidateCard {
    pub href: String,
    pub name: String,
    pub location: String,
    pub skills: Vec<String>,
    pub score_label: String,
    pub experience: Option<String>,
}

impl CandidateCard {
    fn from_summary(view: &SearchView, summary: &CandidateSummary) -> Self {
        Self {
            href: view.candidate_route(&summary.id).path(),
            name: summary.name.clone(),
            location: summary.location.clone(),
            skills: summary.skills.clone(),
            score_label: summary.score_label(),
            experience: summary.experience.clone(),
        }
    }
}

impl SearchPage {
    pub fn from_view(view: &SearchView) -> Self {
        Self {
            query: view.query().to_string(),
            cards: view
                .candidates()
                .iter()
                .map(|summary| CandidateCard::from_summary(view, summary))
                .collect(),
            searched: view.has_searched(),
            error: view.error().map(ApiError::user_message),
        }
    }
}

#[derive(Template)]
#[template(path = "candidate.html")]
pub struct CandidatePage {
    pub name: String,
    pub location: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: Vec<EducationLine>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub links: Vec<ProfileLink>,
    pub score_label: String,
    pub status: Option<String>,
    pub last_updated: Option<String>,
    pub screen_action: String,
    pub error: Option<String>,
}

pub struct EducationLine {
    pub degree: String,
    pub detail: String,
}

impl CandidatePage {
    /// `None` unless the profile is loaded.
    pub fn from_view(view: &CandidateView) -> Option<Self> {
        let candidate = view.candidate()?;

        Some(Self {
            name: candidate.name.clone(),
            location: candidate.location.clone(),
            skills: candidate.skills.clone(),
            experience: candidate.experience.clone(),
            education: candidate
                .education
                .iter()
                .map(|edu| EducationLine {
                    degree: edu.degree.clone(),
                    detail: edu.detail_line(),
                })
                .collect(),
            email: candidate.email.clone(),
            phone: candidate.phone.clone(),
            links: candidate.links(),
            score_label: candidate.score_label(),
            status: candidate.status.clone(),
            last_updated: candidate.last_updated(),
            screen_action: format!("{}/screen", Route::Candidate(view.id().to_string()).path()),
            error: view.action_error().map(str::to_string),
        })
    }
}

#[derive(Template)]
#[template(path = "screening.html")]
pub struct ScreeningPage {
    pub action: String,
    pub steps: Vec<StepMarker>,
    pub step: usize,
    pub step_number: usize,
    pub total: usize,
    pub question: String,
    pub answer: String,
    pub answers: Vec<String>,
    pub is_last: bool,
    pub can_back: bool,
    pub can_submit: bool,
    pub others_complete: bool,
    pub notice: Option<String>,
    pub error: Option<String>,
}

impl ScreeningPage {
    /// `None` unless the question set is loaded.
    pub fn from_session(session: &ScreeningSession) -> Option<Self> {
        if !session.is_loaded() {
            return None;
        }

        let step = session.step();
        Some(Self {
            action: Route::Screening(session.id().to_string()).path(),
            steps: session.steps(),
            step,
            step_number: step + 1,
            total: session.question_count(),
            question: session.current_question().to_string(),
            answer: session.current_answer().to_string(),
            answers: session.answers().as_slice().to_vec(),
            is_last: session.is_last_step(),
            can_back: session.can_back(),
            can_submit: session.can_submit(),
            others_complete: session.answers().others_complete(step),
            notice: session.notice().map(str::to_string),
            error: session.error().map(ApiError::user_message),
        })
    }
}

/// Not-found, failure and still-loading states.
#[derive(Template)]
#[template(path = "message.html")]
pub struct MessagePage {
    pub title: String,
    pub message: String,
    pub is_error: bool,
    pub retry_href: Option<String>,
}

impl MessagePage {
    pub fn not_found(what: &str) -> Self {
        Self {
            title: format!("{} not found", what),
            message: format!("The {} you are looking for does not exist.", what.to_lowercase()),
            is_error: true,
            retry_href: None,
        }
    }

    pub fn failure(error: &ApiError, retry: Option<Route>) -> Self {
        Self {
            title: "Something went wrong".to_string(),
            message: error.user_message(),
            is_error: true,
            retry_href: retry.map(|route| route.path()),
        }
    }

    pub fn loading(route: Route) -> Self {
        Self {
            title: "Loading".to_string(),
            message: "This page is still loading.".to_string(),
            is_error: false,
            retry_href: Some(route.path()),
        }
    }

    pub fn page_not_found(path: &str) -> Self {
        Self {
            title: "Page not found".to_string(),
            message: format!("Nothing lives at {}.", path),
            is_error: true,
            retry_href: None,
        }
    }
}
