//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phish_detect` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Output formatting (JSON lines or CSV)
//!
//! All feature-extraction logic is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use tokio::io::{AsyncBufReadExt, BufReader};

use phish_detect::config::{
    BRAND_FILE, DEFAULT_USER_AGENT, MAX_URL_LENGTH, PAGE_FETCH_TIMEOUT_SECS, WHOIS_MAX_ATTEMPTS,
};
use phish_detect::initialization::init_logger_with;
use phish_detect::{Config, FeatureExtractor, LogFormat, LogLevel, FEATURE_NAMES};

/// Extract phishing-detection features from URLs.
#[derive(Debug, Parser)]
#[command(name = "phish_detect", version)]
struct Cli {
    /// URL to extract features from
    #[arg(conflicts_with = "file")]
    url: Option<String>,

    /// File with one URL per line (blank lines and '#' comments skipped)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Write records to this path as CSV instead of JSON lines on stdout
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Brand list CSV path
    #[arg(long, default_value = BRAND_FILE)]
    brand_file: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,

    /// Page fetch timeout in seconds
    #[arg(long, default_value_t = PAGE_FETCH_TIMEOUT_SECS)]
    timeout: u64,

    /// Maximum WHOIS lookup attempts
    #[arg(long, default_value_t = WHOIS_MAX_ATTEMPTS)]
    whois_attempts: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

impl Cli {
    fn to_config(&self) -> Config {
        Config {
            brand_file: self.brand_file.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            timeout_seconds: self.timeout,
            whois_max_attempts: self.whois_attempts,
            user_agent: self.user_agent.clone(),
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(cli, config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("phish_detect error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let extractor =
        FeatureExtractor::from_config(&config).context("Failed to initialize feature extractor")?;

    let mut csv_writer = match &cli.csv {
        Some(path) => {
            let mut writer = csv::Writer::from_path(path)
                .with_context(|| format!("Failed to create CSV output at {}", path.display()))?;
            writer
                .write_record(FEATURE_NAMES)
                .context("Failed to write CSV header")?;
            Some(writer)
        }
        None => None,
    };

    match (&cli.url, &cli.file) {
        (Some(url), None) => {
            let record = extractor.extract(url).await?;
            emit(&record, &mut csv_writer, true)?;
        }
        (None, Some(path)) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            let mut lines = BufReader::new(file).lines();

            while let Some(line) = lines.next_line().await? {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                if trimmed.len() > MAX_URL_LENGTH {
                    warn!(
                        "Skipping URL exceeding maximum length ({} > {})",
                        trimmed.len(),
                        MAX_URL_LENGTH
                    );
                    continue;
                }

                match extractor.extract(trimmed).await {
                    Ok(record) => emit(&record, &mut csv_writer, false)?,
                    Err(e) => warn!("Failed to extract features for {}: {}", trimmed, e),
                }
            }
        }
        _ => {
            anyhow::bail!("Provide a URL argument or --file <path>");
        }
    }

    if let Some(writer) = csv_writer.as_mut() {
        writer.flush().context("Failed to flush CSV output")?;
    }

    Ok(())
}

/// Writes one record to the CSV writer, or to stdout as JSON.
fn emit(
    record: &phish_detect::FeatureRecord,
    csv_writer: &mut Option<csv::Writer<std::fs::File>>,
    pretty: bool,
) -> Result<()> {
    match csv_writer {
        Some(writer) => {
            writer
                .write_record(record.csv_row())
                .context("Failed to write CSV record")?;
        }
        None => {
            let json = if pretty {
                serde_json::to_string_pretty(record)
            } else {
                serde_json::to_string(record)
            }
            .context("Failed to serialize record")?;
            println!("{json}");
        }
    }
    Ok(())
}
