// src/routes.rs
//! Browser-facing URL patterns, one per view.

use rocket::http::RawStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Search,
    /// `/candidate/:id`
    Candidate(String),
    /// `/screening/:id`
    Screening(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Search => "/".to_string(),
            Route::Candidate(id) => format!("/candidate/{}", encode_segment(id)),
            Route::Screening(id) => format!("/screening/{}", encode_segment(id)),
        }
    }

    /// Matches a request path against the three view patterns.
    /// Action sub-paths (`/candidate/:id/screen`) belong to their view.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let mut segments = path.trim_start_matches('/').split('/');

        match (segments.next(), segments.next()) {
            (Some(""), None) => Some(Route::Search),
            (Some("candidate"), Some(id)) if !id.is_empty() => {
                Some(Route::Candidate(decode_segment(id)))
            }
            (Some("screening"), Some(id)) if !id.is_empty() => {
                Some(Route::Screening(decode_segment(id)))
            }
            _ => None,
        }
    }

    pub fn view_name(&self) -> &'static str {
        match self {
            Route::Search => "search",
            Route::Candidate(_) => "candidate",
            Route::Screening(_) => "screening",
        }
    }
}

fn encode_segment(segment: &str) -> String {
    RawStr::new(segment)
        .percent_encode()
        .as_str()
        .replace('/', "%2F")
}

fn decode_segment(segment: &str) -> String {
    RawStr::new(segment).percent_decode_lossy().into_owned()
}
