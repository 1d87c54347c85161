// src/web/mod.rs

pub mod handlers;
pub mod pages;
pub mod types;

pub use types::*;

use anyhow::{anyhow, Result};
use rocket::config::LogLevel;
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::Header;
use rocket::{catchers, get, post, routes, Build, Data, Request, Response, Rocket, State};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::core::{AppConfig, RecruitingApi, ServiceClient};
use crate::routes::Route;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Tags every request with an id and logs one line per response.
pub struct RequestTracer;

struct RequestTrace {
    id: String,
    started: Instant,
}

#[rocket::async_trait]
impl Fairing for RequestTracer {
    fn info(&self) -> Info {
        Info {
            name: "Request id and access log",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        request.local_cache(|| RequestTrace {
            id: Uuid::new_v4().to_string(),
            started: Instant::now(),
        });
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let trace = request.local_cache(|| RequestTrace {
            id: Uuid::new_v4().to_string(),
            started: Instant::now(),
        });
        let path = request.uri().path();
        let view = Route::parse(path.as_str())
            .map(|route| route.view_name())
            .unwrap_or("-");

        info!(
            request_id = %trace.id,
            view,
            "{} {} -> {} ({} ms)",
            request.method(),
            path,
            response.status().code,
            trace.started.elapsed().as_millis()
        );

        response.set_header(Header::new(REQUEST_ID_HEADER, trace.id.clone()));
    }
}

#[get("/")]
pub async fn search_page() -> Page {
    handlers::search_page_handler().await
}

#[post("/", data = "<form>")]
pub async fn run_search(form: Form<SearchForm>, state: &State<AppState>) -> Page {
    handlers::run_search_handler(form, state).await
}

#[get("/candidate/<id>")]
pub async fn candidate_page(id: &str, state: &State<AppState>) -> Page {
    handlers::candidate_page_handler(id, state).await
}

#[post("/candidate/<id>/screen")]
pub async fn start_screening(id: &str, state: &State<AppState>) -> ViewResponse {
    handlers::start_screening_handler(id, state).await
}

#[get("/screening/<id>")]
pub async fn screening_page(id: &str, state: &State<AppState>) -> Page {
    handlers::screening_page_handler(id, state).await
}

#[post("/screening/<id>", data = "<form>")]
pub async fn screening_step(
    id: &str,
    form: Form<ScreeningForm>,
    state: &State<AppState>,
) -> ViewResponse {
    handlers::screening_step_handler(id, form, state).await
}

#[get("/health")]
pub async fn health() -> &'static str {
    handlers::health_handler().await
}

// Error catchers
#[rocket::catch(404)]
pub fn not_found(request: &Request<'_>) -> Page {
    handlers::not_found_handler(request)
}

#[rocket::catch(413)]
pub fn payload_too_large(request: &Request<'_>) -> Page {
    handlers::payload_too_large_handler(request)
}

#[rocket::catch(422)]
pub fn unprocessable(request: &Request<'_>) -> Page {
    handlers::unprocessable_handler(request)
}

#[rocket::catch(500)]
pub fn internal_error(request: &Request<'_>) -> Page {
    handlers::internal_error_handler(request)
}

/// Assembles the server around any backend implementation.
pub fn build_rocket(config: &AppConfig, api: Arc<dyn RecruitingApi>) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.address))
        .merge(("port", config.port))
        .merge(("log_level", LogLevel::Off))
        .merge((
            "limits",
            Limits::default().limit("form", config.form_limit_kib.kibibytes()),
        ));

    rocket::custom(figment)
        .attach(RequestTracer)
        .manage(AppState::new(api))
        .register("/", catchers![not_found, payload_too_large, unprocessable, internal_error])
        .mount(
            "/",
            routes![
                search_page,
                run_search,
                candidate_page,
                start_screening,
                screening_page,
                screening_step,
                health,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: AppConfig) -> Result<()> {
    let client = ServiceClient::new(&config.backend_url, config.timeout())?;

    info!("Starting PeopleGPT web server ({})", config.environment);
    info!("Backend: {}", client.base_url());
    info!("Listening on http://{}:{}", config.address, config.port);

    let _rocket = build_rocket(&config, Arc::new(client))
        .launch()
        .await
        .map_err(|e| anyhow!("Web server failed: {}", e))?;

    Ok(())
}
