//! Core data models for translation

use serde::{Deserialize, Serialize};

/// Translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Source language code, e.g. `en` or `auto`
    pub source_lang: String,
    /// Target language code, e.g. `fr`
    pub target_lang: String,
    /// Text to translate
    pub text: String,
}

impl TranslationRequest {
    /// Create a new request
    pub fn new(
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            text: text.into(),
        }
    }

    /// Whether there is anything worth sending
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Translation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Primary translated segment, exactly as the provider returned it
    pub translation: String,
    /// Language the provider detected for the source text
    pub detected_source_lang: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_text() {
        assert!(TranslationRequest::new("en", "fr", "hello").has_text());
        assert!(!TranslationRequest::new("en", "fr", "").has_text());
        assert!(!TranslationRequest::new("en", "fr", " \t\n").has_text());
    }

    #[test]
    fn test_result_serializes_for_json_output() {
        let result = TranslationResult {
            translation: "bonjour".to_string(),
            detected_source_lang: Some("en".to_string()),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"translation": "bonjour", "detected_source_lang": "en"})
        );
    }
}
