//! Error types for the traffic-info pipeline
//!
//! Every failure the pipeline can report lives here, from coordinate
//! validation through fetching, decoding and rendering.

use std::time::Duration;
use thiserror::Error;

/// Why a single coordinate component was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateIssue {
    /// The token could not be parsed as a floating-point number
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// The token parsed but lies outside the allowed range
    #[error("{value} is outside [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// Main error type for traffic-info
#[derive(Error, Debug)]
pub enum TrafficError {
    /// Input did not split into exactly two comma-separated tokens
    #[error("Malformed coordinate '{input}': expected latitude,longitude")]
    MalformedCoordinate { input: String },

    /// Latitude token was not a number or not within [-90, 90]
    #[error("Invalid latitude: {0}")]
    InvalidLatitude(CoordinateIssue),

    /// Longitude token was not a number or not within [-180, 180]
    #[error("Invalid longitude: {0}")]
    InvalidLongitude(CoordinateIssue),

    /// The retry deadline passed without a successfully decoded response
    #[error("Error getting traffic information after {timeout:?} ({attempts} attempts)")]
    FetchTimeout { timeout: Duration, attempts: u32 },

    /// A successful HTTP response carried a body that is not a valid distance matrix
    #[error("Error decoding response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The provider reported a non-OK status and the policy forbids continuing
    #[error("Provider returned status {status}{}", format_provider_message(.message))]
    ProviderStatus {
        status: String,
        message: Option<String>,
    },

    /// The decoded response has no origin, destination or rows to report on
    #[error("Incomplete response (status {status}): {missing}{}", format_provider_message(.message))]
    IncompleteResponse {
        status: String,
        missing: &'static str,
        message: Option<String>,
    },

    /// The report could not be produced from the response
    #[error("Error formatting traffic information: {message}")]
    Render { message: String },

    /// A single HTTP attempt failed before a response was received
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

fn format_provider_message(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}

impl TrafficError {
    /// Create a new malformed coordinate error
    pub fn malformed(input: impl Into<String>) -> Self {
        Self::MalformedCoordinate {
            input: input.into(),
        }
    }

    /// Create a new render error
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transport {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TrafficError>;
