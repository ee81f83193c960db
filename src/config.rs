//! Configuration management for traffic-info
//!
//! Everything the pipeline needs is collected here once at startup and then
//! passed explicitly to the components that use it.

use crate::{cli::Args, error::TrafficError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default distance-matrix endpoint
pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// Default language for addresses and labels in the response
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default overall fetch timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest overall fetch timeout accepted
pub const MAX_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

/// Main configuration structure
#[derive(Clone)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Distance-matrix API key
    pub api_key: String,
    /// Raw origin coordinate as given on the command line
    pub origin: String,
    /// Raw destination coordinate as given on the command line
    pub destination: String,
    /// How the report is printed
    pub output: OutputFormat,
    /// Fetcher configuration
    pub fetch: FetchSettings,
}

/// Fetcher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchSettings {
    /// Distance-matrix endpoint, without query string
    pub endpoint: String,
    /// Language requested from the provider
    pub language: String,
    /// Overall deadline for all attempts
    pub timeout: Duration,
    /// What to do when the provider's own status is not OK
    pub status_policy: StatusPolicy,
}

/// Handling of a non-OK provider status on an HTTP 200 response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Only the HTTP status decides; the body is returned as decoded
    #[default]
    Ignore,
    /// Treat it like a non-200 response and try again
    Retry,
    /// Stop immediately with the provider's status and message
    Fail,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-layout human-readable report
    #[default]
    Text,
    /// The decoded response as pretty-printed JSON
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            api_key: String::new(),
            origin: String::new(),
            destination: String::new(),
            output: OutputFormat::default(),
            fetch: FetchSettings::default(),
        }
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            status_policy: StatusPolicy::default(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("debug", &self.debug)
            .field("api_key", &"<redacted>")
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("output", &self.output)
            .field("fetch", &self.fetch)
            .finish()
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, TrafficError> {
        let config = Self {
            debug: args.debug,
            api_key: args.api_key.trim().to_string(),
            origin: args.origin.clone(),
            destination: args.destination.clone(),
            output: args.format,
            fetch: FetchSettings {
                endpoint: args.endpoint.clone(),
                language: args.language.clone(),
                timeout: Duration::from_secs(args.timeout),
                status_policy: args.on_provider_error,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), TrafficError> {
        if self.api_key.trim().is_empty() {
            return Err(TrafficError::config(
                "API key is empty; pass --api-key or set GOOGLE_MAP_API_KEY",
            ));
        }

        if self.origin.trim().is_empty() || self.destination.trim().is_empty() {
            return Err(TrafficError::config(
                "Both --origin and --destination are required",
            ));
        }

        self.fetch.validate()
    }
}

impl FetchSettings {
    /// Validate fetcher configuration
    pub fn validate(&self) -> Result<(), TrafficError> {
        if self.timeout.is_zero() {
            return Err(TrafficError::config("Timeout must be greater than zero"));
        }

        if self.timeout > MAX_TIMEOUT {
            return Err(TrafficError::config(format!(
                "Timeout must be at most {} seconds",
                MAX_TIMEOUT.as_secs()
            )));
        }

        if self.endpoint.trim().is_empty() {
            return Err(TrafficError::config("Endpoint must not be empty"));
        }

        Ok(())
    }
}
