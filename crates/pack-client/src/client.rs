//! HTTP side of a submission: one multipart POST, plus a health check

use crate::config::ClientConfig;
use crate::error::GenerateError;
use crate::request::UploadRequest;
use futures_util::StreamExt;
use reqwest::Client;
use serde::Deserialize;

/// Upper bound on buffer space reserved up front from `Content-Length`
const MAX_PREALLOC: u64 = 64 << 20;

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: Client,
    endpoint: String,
    service_root: String,
}

impl GenerationClient {
    pub fn new(config: &ClientConfig) -> Result<Self, GenerateError> {
        // No timeout on generation requests
        let http = Client::builder()
            .build()
            .map_err(|e| GenerateError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            service_root: config.service_root()?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the request and return the archive bytes on success
    pub async fn generate(&self, request: UploadRequest) -> Result<Vec<u8>, GenerateError> {
        let form = request.into_form()?;

        log::info!("generate: POST {}", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| GenerateError::Transport(format!("Failed to read error body: {}", e)))?;
            log::warn!("generate: server responded {} - {}", status.as_u16(), body);
            return Err(GenerateError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let expected = response.content_length().unwrap_or(0).min(MAX_PREALLOC) as usize;
        let mut archive = Vec::with_capacity(expected);
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk =
                chunk.map_err(|e| GenerateError::Transport(format!("Failed to read archive: {}", e)))?;
            archive.extend_from_slice(&chunk);
        }

        log::info!("generate: received archive of {} bytes", archive.len());
        Ok(archive)
    }

    /// `GET /` on the service origin, returning its message
    pub async fn health(&self) -> Result<String, GenerateError> {
        let response = self
            .http
            .get(&self.service_root)
            .send()
            .await
            .map_err(|e| GenerateError::Transport(format!("Health check failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GenerateError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(GenerateError::Server {
                status: status.as_u16(),
                body: text,
            });
        }

        let health: HealthResponse = serde_json::from_str(&text)
            .map_err(|e| GenerateError::Transport(format!("Unexpected health response: {}", e)))?;

        if health.status != "ok" {
            return Err(GenerateError::Transport(format!(
                "Backend reported status {}",
                health.status
            )));
        }

        Ok(health.message)
    }
}
