//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The GET request could not be assembled
    #[error("Error creating request: {message}")]
    RequestConstructionError {
        /// What went wrong while building the URL or request
        message: String,
    },

    /// Transport failure: DNS, connect, timeout or body read
    #[error("Error making request: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// Provider answered 429
    #[error("Rate limit exceeded. Try again later.")]
    RateLimited,

    /// Provider answered something other than 200 or 429
    #[error("Received non-OK status code: {status}")]
    UnexpectedStatus {
        /// Numeric HTTP status
        status: u16,
    },

    /// Body is not JSON or lacks the expected array shape
    #[error("Error parsing response: {message}")]
    ParseError {
        /// Which step of the traversal failed
        message: String,
    },

    /// The translation leaf exists but is not a string
    #[error("Unexpected data type for translation: expected string, found {found}")]
    TypeError {
        /// JSON type name of the value found
        found: &'static str,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Which setting is invalid
        message: String,
    },
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_cli_output() {
        assert_eq!(
            TranslationError::RateLimited.to_string(),
            "Rate limit exceeded. Try again later."
        );
        assert_eq!(
            TranslationError::UnexpectedStatus { status: 503 }.to_string(),
            "Received non-OK status code: 503"
        );
        assert_eq!(
            TranslationError::TypeError { found: "number" }.to_string(),
            "Unexpected data type for translation: expected string, found number"
        );
    }
}
