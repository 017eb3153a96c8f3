//! Client configuration.

use serde::{Deserialize, Serialize};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the extraction endpoint, relative to the base URL.
pub const EXTRACT_PATH: &str = "/api/extract-headings";

/// Path of the health endpoint, relative to the base URL.
pub const HEALTH_PATH: &str = "/api/health";

/// Connection settings for the extraction service.
///
/// Passed to [`HttpExtractionClient::new`](crate::HttpExtractionClient::new);
/// the client never reads process-wide state on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service root, e.g. `http://localhost:8000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL of the extraction endpoint.
    #[must_use]
    pub fn extract_url(&self) -> String {
        self.endpoint(EXTRACT_PATH)
    }

    /// Full URL of the health endpoint.
    #[must_use]
    pub fn health_url(&self) -> String {
        self.endpoint(HEALTH_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(
            config.extract_url(),
            "http://localhost:8000/api/extract-headings"
        );
        assert_eq!(config.health_url(), "http://localhost:8000/api/health");
    }

    #[test]
    fn test_trailing_slash_ignored() {
        let config = ClientConfig::new("https://extract.example.com/");
        assert_eq!(
            config.extract_url(),
            "https://extract.example.com/api/extract-headings"
        );
    }

    #[test]
    fn test_missing_base_url_uses_default() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
