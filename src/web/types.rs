// src/web/types.rs

use askama::Template;
use rocket::form::FromForm;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::{self, Redirect, Responder};
use rocket::{Request, Response};
use std::sync::Arc;
use tracing::error;

use crate::core::RecruitingApi;
use crate::routes::Route;

const RENDER_FAILURE_HTML: &str =
    "<!DOCTYPE html><html><body><h1>Something went wrong</h1><p>The page could not be rendered.</p></body></html>";

/// Managed state shared by every handler.
pub struct AppState {
    pub api: Arc<dyn RecruitingApi>,
}

impl AppState {
    pub fn new(api: Arc<dyn RecruitingApi>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &dyn RecruitingApi {
        self.api.as_ref()
    }
}

/// A rendered HTML page with its HTTP status.
pub struct Page {
    pub status: Status,
    pub html: String,
}

impl Page {
    pub fn render<T: Template>(template: &T, status: Status) -> Self {
        match template.render() {
            Ok(html) => Self { status, html },
            Err(e) => {
                error!("Template rendering failed: {}", e);
                Self {
                    status: Status::InternalServerError,
                    html: RENDER_FAILURE_HTML.to_string(),
                }
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for Page {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        Response::build_from(RawHtml(self.html).respond_to(request)?)
            .status(self.status)
            .ok()
    }
}

/// Either the view re-renders or the user action navigates elsewhere.
pub enum ViewResponse {
    Render(Page),
    Navigate(Redirect),
}

impl ViewResponse {
    pub fn navigate(route: Route) -> Self {
        ViewResponse::Navigate(Redirect::to(route.path()))
    }
}

impl<'r> Responder<'r, 'static> for ViewResponse {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        match self {
            ViewResponse::Render(page) => page.respond_to(request),
            ViewResponse::Navigate(redirect) => redirect.respond_to(request),
        }
    }
}

#[derive(Debug, FromForm)]
pub struct SearchForm {
    #[field(default = String::new())]
    pub query: String,
}

/// Questionnaire state carried by the page between steps.
#[derive(Debug, FromForm)]
pub struct ScreeningForm {
    #[field(default = 0)]
    pub step: usize,
    pub action: Option<String>,
    /// Text of the current step's answer box.
    #[field(default = String::new())]
    pub answer: String,
    /// Every answer as of the previous render, in question order.
    #[field(default = Vec::new())]
    pub answers: Vec<String>,
}
