//! CLI argument definitions and the translate handler

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use tracing::debug;

use crate::core::client::Translator;
use crate::core::config::TranslatorConfig;
use crate::core::models::{TranslationRequest, TranslationResult};

/// Character standing in for a space in text passed on the command line
pub const SPACE_PLACEHOLDER: char = '+';

/// Translate a piece of text through the public gtx endpoint
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gtx-translate", version, about, long_about = None)]
pub struct Args {
    /// Source language
    #[arg(short = 's', value_name = "CODE", default_value = "en")]
    pub source_lang: String,

    /// Target language
    #[arg(short = 't', value_name = "CODE", default_value = "fr")]
    pub target_lang: String,

    /// Text to translate (also accepted as -st)
    #[arg(long = "st", value_name = "TEXT", allow_hyphen_values = true)]
    pub source_text: Option<String>,

    /// Keep '+' in the text instead of reading it as a space
    #[arg(long)]
    pub literal: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse the process arguments, accepting the single-dash `-st` spelling
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Turn the parsed flags into a request, rejecting blank text
    pub fn to_request(&self) -> Result<TranslationRequest, clap::Error> {
        let text = self.source_text.as_deref().unwrap_or_default();
        let text = if self.literal {
            text.to_string()
        } else {
            expand_placeholders(text)
        };

        let request = TranslationRequest::new(&self.source_lang, &self.target_lang, text);
        if !request.has_text() {
            return Err(Self::command().error(
                ErrorKind::MissingRequiredArgument,
                "text to translate is required (-st <TEXT>)",
            ));
        }

        Ok(request)
    }
}

/// Rewrite `-st` and `-st=...` to their `--st` form so clap does not read them as `-s t`.
///
/// Only tokens in flag position are touched: the value following `-s`, `-t` or
/// `--st` and everything after `--` pass through verbatim.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut expects_value = false;
    let mut after_separator = false;

    for arg in args {
        if expects_value || after_separator {
            expects_value = false;
            normalized.push(arg);
            continue;
        }

        let arg = match arg.to_str() {
            Some("--") => {
                after_separator = true;
                arg
            }
            Some(s) if s == "-st" || s.starts_with("-st=") => OsString::from(format!("-{}", s)),
            _ => arg,
        };

        expects_value = arg.to_str().is_some_and(takes_separate_value);
        normalized.push(arg);
    }

    normalized
}

/// Whether `flag` leaves its value to the next token
fn takes_separate_value(flag: &str) -> bool {
    match flag.strip_prefix("--") {
        Some(long) => long == "st",
        // Boolean shorts may be clustered in front, as in `-vs en`.
        None => flag.strip_prefix('-').is_some_and(|cluster| {
            matches!(cluster.trim_start_matches(['v', 'h', 'V']), "s" | "t")
        }),
    }
}

/// Replace every placeholder in caller-supplied text with a space
pub fn expand_placeholders(text: &str) -> String {
    text.replace(SPACE_PLACEHOLDER, " ")
}

/// Handle the translate command, returning what should go to stdout
pub async fn handle_translate(
    request: &TranslationRequest,
    json: bool,
    config: TranslatorConfig,
) -> anyhow::Result<String> {
    let translator = Translator::new(config)?;

    debug!(
        "Translating from {} to {} via {}",
        request.source_lang,
        request.target_lang,
        translator.config().api_endpoint
    );

    let result = translator
        .translate(request)
        .await
        .context("Error translating text")?;

    render(&result, json)
}

fn render(result: &TranslationResult, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(result)?)
    } else {
        Ok(result.translation.clone())
    }
}
