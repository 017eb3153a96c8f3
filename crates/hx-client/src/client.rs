//! Extraction client trait and its HTTP implementation.

use std::future::Future;

use hx_model::{DocumentFile, ExtractionResult, PDF_MEDIA_TYPE};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::{ExtractionError, Result};
use crate::response::interpret_response;

/// User agent string for service requests.
const USER_AGENT_VALUE: &str = concat!("hx-client/", env!("CARGO_PKG_VERSION"));

/// Name of the multipart field the service reads the upload from.
const FILE_FIELD: &str = "file";

/// Something that can turn a document into an outline.
///
/// Implementations must not retry on their own; one call is one attempt.
pub trait ExtractionClient {
    /// Submit `file` and wait for the extracted outline.
    fn extract(
        &self,
        file: &DocumentFile,
    ) -> impl Future<Output = Result<ExtractionResult>> + Send;
}

/// [`ExtractionClient`] backed by the service's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpExtractionClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpExtractionClient {
    /// Create a client for the service described by `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ExtractionError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Ask the service whether it is up.
    ///
    /// Returns `Ok(true)` only when the service reports `"healthy"`.
    pub async fn health(&self) -> Result<bool> {
        #[derive(Deserialize)]
        struct Health {
            status: String,
        }

        let url = self.config.health_url();
        tracing::debug!("Checking service health at {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "health check failed");
            return Ok(false);
        }

        let health: Health = response.json().await?;
        Ok(health.status == "healthy")
    }

    async fn post_document(&self, file: &DocumentFile) -> Result<ExtractionResult> {
        let url = self.config.extract_url();
        tracing::info!(
            file = file.name(),
            bytes = file.len(),
            "Submitting document to {}",
            url
        );

        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(PDF_MEDIA_TYPE)?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        let result = interpret_response(status, &body);
        match &result {
            Ok(result) => tracing::info!(
                headings = result.total_headings,
                processing_time = result.processing_time,
                "Extraction finished"
            ),
            Err(err) => tracing::warn!("Extraction failed: {}", err),
        }
        result
    }
}

impl ExtractionClient for HttpExtractionClient {
    fn extract(
        &self,
        file: &DocumentFile,
    ) -> impl Future<Output = Result<ExtractionResult>> + Send {
        self.post_document(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpExtractionClient::new(ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_keeps_config() {
        let config = ClientConfig::new("http://10.0.0.5:9000");
        let client = HttpExtractionClient::new(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
    }
}
