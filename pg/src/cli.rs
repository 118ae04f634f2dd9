//! CLI argument parsing for pagegen

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pg")]
#[command(author, version, about = "Render a YAML message into an HTML template", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// HTTP timeout in milliseconds for remote sources
    #[arg(short, long = "timeout-ms")]
    pub timeout_ms: Option<u64>,

    /// URL (http:// or https://) or local path of the YAML document
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// HTML template containing {{MESSAGE}}
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Output file to create or overwrite
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}
