// src/web/handlers/screening_handlers.rs

use rocket::form::Form;
use rocket::http::Status;
use rocket::State;
use tracing::warn;

use crate::routes::Route;
use crate::views::{ScreeningSession, StepAction};
use crate::web::pages::{MessagePage, ScreeningPage};
use crate::web::types::{AppState, Page, ScreeningForm, ViewResponse};

pub async fn screening_page_handler(id: &str, state: &State<AppState>) -> Page {
    let mut session = ScreeningSession::new(id);
    session.load(state.api()).await;
    render_screening(&session)
}

/// Applies one button press. The question set is fetched fresh, then the
/// step and answers carried by the form are put back before the action runs.
pub async fn screening_step_handler(
    id: &str,
    form: Form<ScreeningForm>,
    state: &State<AppState>,
) -> ViewResponse {
    let form = form.into_inner();
    let mut session = ScreeningSession::new(id);
    session.load(state.api()).await;

    if session.is_loaded() {
        session.restore(form.step, form.answers);
        session.edit(form.answer);

        match form.action.as_deref().map(str::parse::<StepAction>) {
            Some(Ok(action)) => {
                if let Some(route) = session.perform(action, state.api()).await {
                    return ViewResponse::navigate(route);
                }
            }
            Some(Err(e)) => warn!("Screening {}: {}", id, e),
            None => {}
        }
    }

    ViewResponse::Render(render_screening(&session))
}

fn render_screening(session: &ScreeningSession) -> Page {
    let route = Route::Screening(session.id().to_string());

    if let Some(page) = ScreeningPage::from_session(session) {
        let status = session
            .error()
            .map(|e| e.page_status())
            .unwrap_or(Status::Ok);
        return Page::render(&page, status);
    }

    match session.error() {
        Some(e) if e.is_not_found() => {
            Page::render(&MessagePage::not_found("Screening"), Status::NotFound)
        }
        Some(e) => Page::render(&MessagePage::failure(e, Some(route)), e.page_status()),
        None => Page::render(&MessagePage::loading(route), Status::ServiceUnavailable),
    }
}
