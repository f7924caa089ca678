//! Main entry point for the gtx-translate CLI

#![forbid(unsafe_code)]

use gtx_translate::cli::commands::{handle_translate, Args};
use gtx_translate::{TranslatorConfig, VERSION};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_normalized();

    // Initialize logging; stdout is reserved for the translation
    let log_level = if args.verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("gtx_translate={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("gtx-translate {}", VERSION);

    let request = args.to_request().unwrap_or_else(|e| e.exit());

    let output = handle_translate(&request, args.json, TranslatorConfig::default()).await?;
    println!("{}", output);

    Ok(())
}
