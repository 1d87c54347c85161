// src/lib.rs
//! PeopleGPT recruiting web front end: candidate search, candidate profiles
//! and a step-by-step screening questionnaire backed by the recruiting API.

pub mod core;
pub mod error;
pub mod routes;
pub mod types;
pub mod views;
pub mod web;

pub use crate::core::{AppConfig, ConfigManager, ConfigOverrides, RecruitingApi, ServiceClient};
pub use error::{ApiError, ApiResult};
pub use routes::Route;
pub use web::{build_rocket, start_web_server};
