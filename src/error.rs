// src/error.rs
//! Error taxonomy shared by the backend client and the views.

use rocket::http::Status;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Every failure a view can end up showing to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend never produced a response (refused, reset, timed out).
    #[error("Backend unreachable: {0}")]
    NetworkFailure(String),

    /// The requested entity does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// A client-side rule rejected the action before any request was made.
    #[error("{0}")]
    ValidationFailure(String),

    /// The backend answered with a non-2xx status or an unreadable body.
    #[error("Backend returned {status}: {message}")]
    ServerFailure { status: u16, message: String },
}

impl ApiError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailure(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Text rendered in the page's alert box.
    pub fn user_message(&self) -> String {
        match self {
            Self::NetworkFailure(_) => {
                "The recruiting service could not be reached. Please try again.".to_string()
            }
            Self::NotFound(what) => format!("{} not found", what),
            Self::ValidationFailure(message) => message.clone(),
            Self::ServerFailure { status, .. } => format!(
                "The recruiting service failed to handle the request (HTTP {}). Please try again.",
                status
            ),
        }
    }

    /// Status of the page rendered for this error.
    pub fn page_status(&self) -> Status {
        match self {
            Self::NotFound(_) => Status::NotFound,
            Self::ValidationFailure(_) => Status::UnprocessableEntity,
            Self::NetworkFailure(_) | Self::ServerFailure { .. } => Status::BadGateway,
        }
    }
}
