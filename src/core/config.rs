//! Configuration management

use crate::core::errors::{Result, TranslationError};

/// Public gtx endpoint
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Client identifier the endpoint expects
pub const DEFAULT_CLIENT_ID: &str = "gtx";

/// Configuration for translator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Endpoint the GET request is sent to
    pub api_endpoint: String,
    /// Value of the `client` query parameter
    pub client_id: String,
    /// Whole-request timeout; `None` keeps the transport default
    pub timeout_ms: Option<u64>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            timeout_ms: None,
        }
    }
}

impl TranslatorConfig {
    /// Default configuration pointed at another endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            api_endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_endpoint.trim().is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API endpoint is required".to_string(),
            });
        }

        if self.client_id.trim().is_empty() {
            return Err(TranslationError::ConfigError {
                message: "client id is required".to_string(),
            });
        }

        if self.timeout_ms == Some(0) {
            return Err(TranslationError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
