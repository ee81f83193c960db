//! # Traffic Info
//!
//! Reports driving distance and duration between two coordinates using a
//! distance-matrix API. The library exposes the three pipeline stages so
//! they can be used and tested on their own:
//!
//! - Coordinate validation of `"lat,lon"` strings
//! - Deadline-bounded fetching and decoding of the provider response
//! - Rendering of a fixed-layout text report
//!
//! ## Example
//!
//! ```no_run
//! use traffic_info::{config::FetchSettings, core::{TrafficFetcher, TrafficQuery, render}};
//!
//! let query = TrafficQuery::parse("my-api-key", "6.5244,3.3792", "6.6018,3.3515")?;
//! let fetcher = TrafficFetcher::new(FetchSettings::default())?;
//! let response = fetcher.fetch(&query)?;
//! println!("{}", render(&response)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Logs go to stderr; stdout is reserved for the report.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
