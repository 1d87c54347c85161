// src/core/mod.rs
//! Backend access and configuration shared by every view

pub mod api;
pub mod config_manager;
pub mod service_client;

pub use api::RecruitingApi;
pub use config_manager::{AppConfig, ConfigManager, ConfigOverrides};
pub use service_client::ServiceClient;
