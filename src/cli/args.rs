//! Command-line argument parsing

use crate::config::{DEFAULT_ENDPOINT, DEFAULT_LANGUAGE, OutputFormat, StatusPolicy};
use clap::Parser;

/// Traffic Info - driving distance and duration between two coordinates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "traffic-info")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Travel starting coordinate, i.e. latitude,longitude
    #[arg(long, allow_hyphen_values = true)]
    pub origin: String,

    /// Travel ending coordinate, i.e. latitude,longitude
    #[arg(long, allow_hyphen_values = true)]
    pub destination: String,

    /// Distance-matrix API key
    #[arg(long, env = "GOOGLE_MAP_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Give up after this many seconds of retrying
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Language for addresses and labels in the report
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Distance-matrix endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT, hide = true)]
    pub endpoint: String,

    /// What to do when the provider answers with a non-OK status
    #[arg(long, value_enum, default_value_t = StatusPolicy::Ignore)]
    pub on_provider_error: StatusPolicy,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
