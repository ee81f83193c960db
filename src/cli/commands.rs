//! Command implementation for the CLI

use crate::{
    config::{Config, OutputFormat},
    core::{
        fetcher::{DistanceProvider, TrafficFetcher, TrafficQuery},
        report,
    },
};
use anyhow::Context;
use tracing::{debug, info, instrument};

/// Run the whole pipeline and print the report to stdout
#[instrument(skip(config))]
pub fn execute(config: &Config) -> anyhow::Result<()> {
    debug!("Running with {:?}", config);

    let query = build_query(config)?;
    let fetcher =
        TrafficFetcher::new(config.fetch.clone()).context("Failed to set up HTTP client")?;

    let report = run(config, &query, &fetcher)?;
    println!("{report}");
    Ok(())
}

/// Validate origin and destination before anything touches the network
pub fn build_query(config: &Config) -> anyhow::Result<TrafficQuery> {
    let origin = crate::core::validate(&config.origin).context("origin coordinate")?;
    let destination =
        crate::core::validate(&config.destination).context("destination coordinate")?;

    Ok(TrafficQuery::new(config.api_key.clone(), origin, destination))
}

/// Fetch and render a report for `query` using `provider`
pub fn run<P: DistanceProvider>(
    config: &Config,
    query: &TrafficQuery,
    provider: &P,
) -> anyhow::Result<String> {
    info!(
        "Fetching traffic information from {} to {}",
        query.origin(),
        query.destination()
    );

    let response = provider
        .fetch_distance(query)
        .context("Fetch traffic info")?;

    let report = match config.output {
        OutputFormat::Text => report::render(&response),
        OutputFormat::Json => report::render_json(&response),
    }
    .context("Print traffic info")?;

    Ok(report)
}
