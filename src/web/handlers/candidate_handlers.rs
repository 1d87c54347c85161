// src/web/handlers/candidate_handlers.rs

use rocket::http::Status;
use rocket::State;

use crate::routes::Route;
use crate::views::{CandidatePhase, CandidateView};
use crate::web::pages::{CandidatePage, MessagePage};
use crate::web::types::{AppState, Page, ViewResponse};

pub async fn candidate_page_handler(id: &str, state: &State<AppState>) -> Page {
    let mut view = CandidateView::new(id);
    view.load(state.api()).await;
    render_candidate(&view)
}

/// Creates a screening and navigates to it. On failure the profile is
/// re-rendered with the error shown above it.
pub async fn start_screening_handler(id: &str, state: &State<AppState>) -> ViewResponse {
    let mut view = CandidateView::new(id);

    if let Some(route) = view.start_screening(state.api()).await {
        return ViewResponse::navigate(route);
    }

    view.load(state.api()).await;
    ViewResponse::Render(render_candidate(&view))
}

fn render_candidate(view: &CandidateView) -> Page {
    let route = Route::Candidate(view.id().to_string());

    match view.phase() {
        CandidatePhase::Loaded(_) => match CandidatePage::from_view(view) {
            Some(page) => Page::render(&page, Status::Ok),
            None => Page::render(&MessagePage::loading(route), Status::ServiceUnavailable),
        },
        CandidatePhase::NotFound => {
            Page::render(&MessagePage::not_found("Candidate"), Status::NotFound)
        }
        CandidatePhase::Failed(e) => {
            Page::render(&MessagePage::failure(e, Some(route)), e.page_status())
        }
        CandidatePhase::Loading => {
            Page::render(&MessagePage::loading(route), Status::ServiceUnavailable)
        }
    }
}
