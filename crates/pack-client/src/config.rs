//! Endpoint, download directory and link lifetime

use crate::error::GenerateError;
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

/// Generation endpoint used when nothing overrides it
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate";

/// Lifetime of a downloadable archive reference (60s)
pub const DEFAULT_REVOKE_AFTER: Duration = Duration::from_secs(60);

pub const ENDPOINT_ENV: &str = "CREATIVEFORGE_ENDPOINT";
pub const DOWNLOAD_DIR_ENV: &str = "CREATIVEFORGE_DOWNLOAD_DIR";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub download_dir: PathBuf,
    pub revoke_after: Duration,
}

impl ClientConfig {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            download_dir: download_dir.into(),
            revoke_after: DEFAULT_REVOKE_AFTER,
        }
    }

    /// Apply `CREATIVEFORGE_ENDPOINT` / `CREATIVEFORGE_DOWNLOAD_DIR` on top of `self`
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(ENDPOINT_ENV).ok(),
            std::env::var(DOWNLOAD_DIR_ENV).ok(),
        )
    }

    fn with_overrides(mut self, endpoint: Option<String>, download_dir: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|v| !v.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
        if let Some(dir) = download_dir.filter(|v| !v.trim().is_empty()) {
            self.download_dir = PathBuf::from(dir.trim());
        }
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_revoke_after(mut self, revoke_after: Duration) -> Self {
        self.revoke_after = revoke_after;
        self
    }

    /// Origin of the endpoint, e.g. `http://localhost:8000/` for the health check
    pub fn service_root(&self) -> Result<String, GenerateError> {
        Url::parse(&self.endpoint)
            .and_then(|url| url.join("/"))
            .map(String::from)
            .map_err(|e| GenerateError::Transport(format!("Invalid endpoint {}: {}", self.endpoint, e)))
    }
}
