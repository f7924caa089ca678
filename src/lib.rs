//! gtx-translate - single-shot client for the public gtx translation endpoint
//!
//! The library builds the GET request, classifies the response status and
//! extracts the translated text from the provider's nested JSON arrays.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::{classify_status, parse_response, Translator},
    config::TranslatorConfig,
    errors::{Result, TranslationError},
    models::{TranslationRequest, TranslationResult},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
