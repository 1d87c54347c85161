// src/web/handlers/system_handlers.rs

use rocket::http::Status;
use rocket::Request;
use tracing::{debug, error, warn};

use crate::routes::Route;
use crate::web::pages::MessagePage;
use crate::web::types::Page;

pub async fn health_handler() -> &'static str {
    debug!("Health check");
    "OK"
}

pub fn not_found_handler(request: &Request<'_>) -> Page {
    let path = request.uri().path().to_string();
    warn!("No view for {}", path);
    Page::render(&MessagePage::page_not_found(&path), Status::NotFound)
}

pub fn payload_too_large_handler(request: &Request<'_>) -> Page {
    warn!("Form body over the size limit at {}", request.uri().path());
    let page = MessagePage {
        title: "Submission too large".to_string(),
        message: "The submitted answers are larger than this server accepts. Please shorten them and try again.".to_string(),
        is_error: true,
        retry_href: Route::parse(request.uri().path().as_str()).map(|route| route.path()),
    };
    Page::render(&page, Status::PayloadTooLarge)
}

pub fn unprocessable_handler(request: &Request<'_>) -> Page {
    warn!("Malformed form submitted to {}", request.uri().path());
    let page = MessagePage {
        title: "Invalid request".to_string(),
        message: "The submitted form could not be read. Please try again.".to_string(),
        is_error: true,
        retry_href: None,
    };
    Page::render(&page, Status::UnprocessableEntity)
}

pub fn internal_error_handler(request: &Request<'_>) -> Page {
    error!("Internal error while serving {}", request.uri().path());
    let page = MessagePage {
        title: "Something went wrong".to_string(),
        message: "An unexpected error occurred. Please try again in a few moments.".to_string(),
        is_error: true,
        retry_href: None,
    };
    Page::render(&page, Status::InternalServerError)
}
