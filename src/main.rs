use log::{error, info, warn};
use std::fs;
use std::process::ExitCode;
use vote_shade::config::{Config, ConfigError, OutputFormat};
use vote_shade::{IngestError, ShadeOptions, parse_votes, render_with, summarize, to_html, to_json};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn run(config: &Config) -> Result<String, AppError> {
    let text = fs::read_to_string(&config.text_path)?;
    let ingested = parse_votes(&fs::read_to_string(&config.votes_path)?)?;

    if !ingested.rejected.is_empty() {
        warn!("{} vote record(s) rejected", ingested.rejected.len());
    }
    info!(
        "Rendering {} chars with {} vote(s)",
        text.chars().count(),
        ingested.votes.len()
    );

    let options = match config.saturation {
        Some(threshold) => ShadeOptions::with_saturation(threshold),
        None => ShadeOptions::default(),
    };

    let rendered = match config.format {
        OutputFormat::Html => to_html(&render_with(&text, &ingested.votes, &options)),
        OutputFormat::Json => to_json(&render_with(&text, &ingested.votes, &options))?,
        OutputFormat::Summary => summarize(&text, &ingested.votes).to_string(),
    };

    Ok(rendered)
}

fn main() -> ExitCode {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to render {}: {}", config.text_path.display(), e);
            ExitCode::FAILURE
        }
    }
}
