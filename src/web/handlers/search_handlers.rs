// src/web/handlers/search_handlers.rs

use rocket::form::Form;
use rocket::http::Status;
use rocket::State;
use tracing::info;

use crate::views::SearchView;
use crate::web::pages::SearchPage;
use crate::web::types::{AppState, Page, SearchForm};

pub async fn search_page_handler() -> Page {
    Page::render(&SearchPage::from_view(&SearchView::new()), Status::Ok)
}

pub async fn run_search_handler(form: Form<SearchForm>, state: &State<AppState>) -> Page {
    let mut view = SearchView::with_query(form.into_inner().query);
    view.submit(state.api()).await;

    let status = match view.error() {
        Some(e) => e.page_status(),
        None => {
            if view.has_searched() {
                info!(
                    "Rendering {} candidates for '{}'",
                    view.candidates().len(),
                    view.query()
                );
            }
            Status::Ok
        }
    };

    Page::render(&SearchPage::from_view(&view), status)
}
