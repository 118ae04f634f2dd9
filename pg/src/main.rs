//! pagegen - render a YAML message into an HTML template
//!
//! CLI entry point: `pg <SOURCE> <TEMPLATE> <OUTPUT>`.

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use pagegen::cli::Cli;
use pagegen::config::Config;
use pagegen::{PageError, SourceDescriptor, generate_page};

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Determine log level with priority: CLI --log-level > config file > default (WARN)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                DEFAULT_LOG_LEVEL
            }
        },
        None => DEFAULT_LOG_LEVEL,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("{}", e))?;

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

/// Parse arguments, mapping clap failures to exit code 1 instead of clap's 2
fn parse_cli() -> Result<Option<Cli>> {
    match Cli::try_parse() {
        Ok(cli) => Ok(Some(cli)),
        Err(e) if e.use_stderr() => {
            let message = e.to_string();
            let message = message.trim_start_matches("error: ").trim_end();
            Err(PageError::Usage(message.to_string()).into())
        }
        Err(e) => {
            // --help / --version
            e.print().context("Failed to print help")?;
            Ok(None)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(timeout_ms) = cli.timeout_ms {
        debug!(timeout_ms, "run: timeout overridden from CLI");
        config.fetch.timeout_ms = Some(timeout_ms);
    }

    let source = SourceDescriptor::parse(&cli.source)?.into_source(&config.fetch);

    match generate_page(source.as_ref(), &cli.template, &cli.output) {
        Ok(summary) => {
            debug!(?summary, "run: page generated");
            Ok(())
        }
        Err(e) => {
            debug!(stage = e.stage(), "run: pipeline failed");
            Err(e.into())
        }
    }
}

fn main() -> Result<()> {
    match parse_cli()? {
        Some(cli) => run(cli),
        None => Ok(()),
    }
}
