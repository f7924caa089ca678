//! HTTP client for the gtx translation endpoint

use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{TranslationRequest, TranslationResult};

/// Single-shot translation client: one request, one response, no retries
#[derive(Debug, Clone)]
pub struct Translator {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
}

impl Translator {
    /// Create a new translator
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| TranslationError::RequestConstructionError {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate a single request
    pub async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let http_request = self.build_request(request)?;

        let response = self.execute(http_request).await.map_err(|e| {
            debug!("Translation request failed: {}", e);
            e
        })?;

        let body = response
            .text()
            .await
            .map_err(TranslationError::RequestFailed)?;

        parse_response(&body).map_err(|e| {
            debug!("Unexpected response body ({} bytes): {}", body.len(), e);
            e
        })
    }

    /// Build the GET request with `client`, `sl`, `tl`, `dt` and `q` query parameters
    pub fn build_request(&self, request: &TranslationRequest) -> Result<reqwest::Request> {
        let params = [
            ("client", self.config.client_id.as_str()),
            ("sl", request.source_lang.as_str()),
            ("tl", request.target_lang.as_str()),
            ("dt", "t"),
            ("q", request.text.as_str()),
        ];

        let url = Url::parse_with_params(&self.config.api_endpoint, &params).map_err(|e| {
            TranslationError::RequestConstructionError {
                message: format!("invalid endpoint {:?}: {}", self.config.api_endpoint, e),
            }
        })?;

        debug!(
            "Built request {} -> {} ({} chars)",
            request.source_lang,
            request.target_lang,
            request.text.chars().count()
        );

        self.client
            .get(url)
            .build()
            .map_err(|e| TranslationError::RequestConstructionError {
                message: e.to_string(),
            })
    }

    /// Send the request and reject anything but 200
    pub async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        let response = self
            .client
            .execute(request)
            .await
            .map_err(TranslationError::RequestFailed)?;

        debug!("Response status: {}", response.status());
        classify_status(response.status())?;

        Ok(response)
    }
}

/// Map a response status onto the error taxonomy
pub fn classify_status(status: StatusCode) -> Result<()> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(TranslationError::RateLimited);
    }

    if status != StatusCode::OK {
        return Err(TranslationError::UnexpectedStatus {
            status: status.as_u16(),
        });
    }

    Ok(())
}

/// Extract the translation at `[0][0][0]` and the detected language at `[2]`
pub fn parse_response(body: &str) -> Result<TranslationResult> {
    let json: Value = serde_json::from_str(body).map_err(|e| TranslationError::ParseError {
        message: e.to_string(),
    })?;

    let sentences = array_element(&json, "[0]")?;
    let segment = array_element(sentences, "[0][0]")?;
    let leaf = array_element(segment, "[0][0][0]")?;

    let translation = leaf
        .as_str()
        .ok_or(TranslationError::TypeError {
            found: json_type(leaf),
        })?
        .to_string();

    let detected_source_lang = json.get(2).and_then(Value::as_str).map(str::to_string);

    Ok(TranslationResult {
        translation,
        detected_source_lang,
    })
}

/// First element of `value`, which must be a non-empty array
fn array_element<'a>(value: &'a Value, path: &str) -> Result<&'a Value> {
    let array = value.as_array().ok_or_else(|| TranslationError::ParseError {
        message: format!("expected array holding {}, found {}", path, json_type(value)),
    })?;

    array.first().ok_or_else(|| TranslationError::ParseError {
        message: format!("missing element {}", path),
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
