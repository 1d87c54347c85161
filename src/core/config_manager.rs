// src/core/config_manager.rs
//! Configuration loading: defaults, then config.yaml, then environment, then CLI flags

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "config.yaml";
const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_FORM_LIMIT_KIB: u64 = 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: String,
    pub backend_url: String,
    pub address: IpAddr,
    pub port: u16,
    pub timeout_seconds: u64,
    /// Largest accepted form body. Screening forms carry every answer.
    pub form_limit_kib: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            form_limit_kib: DEFAULT_FORM_LIMIT_KIB,
        }
    }
}

impl AppConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Values given on the command line; they win over everything else.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub backend_url: Option<String>,
    pub address: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
struct FileSection {
    backend_url: Option<String>,
    address: Option<String>,
    port: Option<u16>,
    timeout_seconds: Option<u64>,
    form_limit_kib: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: FileSection,
    #[serde(default)]
    production: FileSection,
}

pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from the process environment
    pub fn load(overrides: ConfigOverrides) -> Result<AppConfig> {
        Self::load_with(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration with an explicit environment lookup
    pub fn load_with<F>(overrides: ConfigOverrides, env: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig {
            environment: env("PEOPLEGPT_ENV")
                .or_else(|| env("ENVIRONMENT"))
                .unwrap_or_else(|| "local".to_string()),
            ..AppConfig::default()
        };
        info!("Loading configuration for environment: {}", config.environment);

        let (path, required) = match &overrides.config_path {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if let Some(file) = Self::read_file(&path, required)? {
            let section = match config.environment.as_str() {
                "production" => file.production,
                _ => file.local,
            };
            Self::apply_section(&mut config, section)?;
        }

        Self::apply_env(&mut config, &env)?;
        Self::apply_overrides(&mut config, &overrides)?;
        Self::validate(&mut config)?;

        Ok(config)
    }

    fn read_file(path: &Path, required: bool) -> Result<Option<ConfigFile>> {
        if !path.exists() {
            if required {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        info!("Loaded configuration file {}", path.display());
        Ok(Some(file))
    }

    fn apply_section(config: &mut AppConfig, section: FileSection) -> Result<()> {
        if let Some(url) = section.backend_url {
            config.backend_url = url;
        }
        if let Some(address) = section.address {
            config.address = parse_address(&address)?;
        }
        if let Some(port) = section.port {
            config.port = port;
        }
        if let Some(timeout) = section.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(limit) = section.form_limit_kib {
            config.form_limit_kib = limit;
        }
        Ok(())
    }

    fn apply_env<F>(config: &mut AppConfig, env: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env("BACKEND_URL") {
            config.backend_url = url;
        }
        if let Some(address) = env("PEOPLEGPT_ADDRESS") {
            config.address = parse_address(&address)?;
        }
        if let Some(port) = env("PEOPLEGPT_PORT") {
            config.port = port
                .parse()
                .map_err(|_| anyhow::anyhow!("PEOPLEGPT_PORT must be a valid port number"))?;
        }
        if let Some(timeout) = env("BACKEND_TIMEOUT_SECS") {
            config.timeout_seconds = timeout
                .parse()
                .map_err(|_| anyhow::anyhow!("BACKEND_TIMEOUT_SECS must be a whole number"))?;
        }
        if let Some(limit) = env("PEOPLEGPT_FORM_LIMIT_KIB") {
            config.form_limit_kib = limit
                .parse()
                .map_err(|_| anyhow::anyhow!("PEOPLEGPT_FORM_LIMIT_KIB must be a whole number"))?;
        }
        Ok(())
    }

    fn apply_overrides(config: &mut AppConfig, overrides: &ConfigOverrides) -> Result<()> {
        if let Some(url) = &overrides.backend_url {
            config.backend_url = url.clone();
        }
        if let Some(address) = &overrides.address {
            config.address = parse_address(address)?;
        }
        if let Some(port) = overrides.port {
            config.port = port;
        }
        Ok(())
    }

    fn validate(config: &mut AppConfig) -> Result<()> {
        let url = reqwest::Url::parse(&config.backend_url)
            .with_context(|| format!("Invalid backend URL: {}", config.backend_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("Backend URL must use http or https: {}", config.backend_url);
        }

        config.backend_url = config.backend_url.trim_end_matches('/').to_string();

        if config.timeout_seconds == 0 {
            anyhow::bail!("Backend timeout must be greater than zero");
        }
        if config.form_limit_kib == 0 {
            anyhow::bail!("Form size limit must be greater than zero");
        }
        Ok(())
    }
}

fn parse_address(raw: &str) -> Result<IpAddr> {
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid listen address: {}", raw))
}
