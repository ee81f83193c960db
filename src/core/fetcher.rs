//! Traffic information retrieval
//!
//! Builds the distance-matrix request and runs it in a deadline-bounded
//! retry loop. Transport failures and non-200 responses are retried until
//! the deadline; a 200 response is decoded and either returned or reported
//! as a terminal error.

use crate::{
    config::{FetchSettings, StatusPolicy},
    core::{
        coordinate::{self, Coordinate},
        response::DistanceMatrixResponse,
    },
    error::{Result, TrafficError},
    utils::{
        clock::{Clock, SystemClock},
        http::{ReqwestTransport, Transport},
    },
};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// A validated request for one origin/destination pair
#[derive(Clone)]
pub struct TrafficQuery {
    api_key: String,
    origin: Coordinate,
    destination: Coordinate,
}

impl std::fmt::Debug for TrafficQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrafficQuery")
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}

impl TrafficQuery {
    /// Create a query from already validated coordinates
    pub fn new(api_key: impl Into<String>, origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            api_key: api_key.into(),
            origin,
            destination,
        }
    }

    /// Validate both raw coordinates and build a query
    ///
    /// Fails on the first invalid coordinate; there is no partial query.
    pub fn parse(api_key: impl Into<String>, origin: &str, destination: &str) -> Result<Self> {
        let origin = coordinate::validate(origin)?;
        let destination = coordinate::validate(destination)?;
        Ok(Self::new(api_key, origin, destination))
    }

    pub const fn origin(&self) -> Coordinate {
        self.origin
    }

    pub const fn destination(&self) -> Coordinate {
        self.destination
    }

    /// Full request URL with every dynamic field percent-encoded
    pub fn request_url(&self, settings: &FetchSettings) -> String {
        self.url_with_key(settings, &self.api_key)
    }

    /// Request URL safe to log
    fn redacted_url(&self, settings: &FetchSettings) -> String {
        self.url_with_key(settings, "REDACTED")
    }

    fn url_with_key(&self, settings: &FetchSettings, key: &str) -> String {
        let separator = if settings.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}language={}&key={}&origins={}&destinations={}",
            settings.endpoint,
            separator,
            urlencoding::encode(&settings.language),
            urlencoding::encode(key),
            urlencoding::encode(&self.origin.to_string()),
            urlencoding::encode(&self.destination.to_string()),
        )
    }
}

/// Source of distance-matrix results
pub trait DistanceProvider {
    /// Fetch the distance matrix for a single origin/destination pair
    fn fetch_distance(&self, query: &TrafficQuery) -> Result<DistanceMatrixResponse>;
}

/// Outcome of a single attempt that did not end the loop with an error
enum Attempt {
    Done(DistanceMatrixResponse),
    Retry(String),
}

/// Deadline-bounded fetcher for the distance-matrix API
pub struct TrafficFetcher<T, C = SystemClock> {
    settings: FetchSettings,
    transport: T,
    clock: C,
}

impl TrafficFetcher<ReqwestTransport, SystemClock> {
    /// Create a fetcher that talks to the network using wall-clock time
    pub fn new(settings: FetchSettings) -> Result<Self> {
        Ok(Self::with_clock(settings, ReqwestTransport::new()?, SystemClock))
    }
}

impl<T: Transport, C: Clock> TrafficFetcher<T, C> {
    /// Create a fetcher with an explicit transport and time source
    pub fn with_clock(settings: FetchSettings, transport: T, clock: C) -> Self {
        Self {
            settings,
            transport,
            clock,
        }
    }

    /// Fetch traffic information, retrying until the configured timeout
    ///
    /// Each attempt is given whatever remains of the overall budget as its
    /// own timeout. There is no delay between attempts.
    #[instrument(skip(self))]
    pub fn fetch(&self, query: &TrafficQuery) -> Result<DistanceMatrixResponse> {
        let url = query.request_url(&self.settings);
        debug!("Requesting {}", query.redacted_url(&self.settings));

        let timeout = self.settings.timeout;
        let deadline = self
            .clock
            .now()
            .checked_add(timeout)
            .ok_or_else(|| TrafficError::config(format!("Timeout {timeout:?} is too large")))?;
        let mut attempts: u32 = 0;

        loop {
            let now = self.clock.now();
            if now >= deadline {
                warn!("Giving up after {} attempts in {:?}", attempts, timeout);
                return Err(TrafficError::FetchTimeout { timeout, attempts });
            }

            attempts += 1;
            match self.attempt(&url, deadline - now)? {
                Attempt::Done(response) => {
                    info!("Traffic information received after {} attempt(s)", attempts);
                    return Ok(response);
                }
                Attempt::Retry(reason) => {
                    debug!("Attempt {} failed, retrying: {}", attempts, reason);
                }
            }
        }
    }

    /// Run one GET and classify the result
    fn attempt(&self, url: &str, remaining: Duration) -> Result<Attempt> {
        let response = match self.transport.get(url, remaining) {
            Ok(response) => response,
            Err(e) => return Ok(Attempt::Retry(e.to_string())),
        };

        if !response.is_ok() {
            return Ok(Attempt::Retry(format!("HTTP status {}", response.status)));
        }

        let decoded: DistanceMatrixResponse = serde_json::from_slice(&response.body)?;

        if !decoded.is_status_ok() {
            match self.settings.status_policy {
                StatusPolicy::Ignore => {
                    debug!("Provider status {} ignored", decoded.status);
                }
                StatusPolicy::Retry => {
                    return Ok(Attempt::Retry(format!("provider status {}", decoded.status)));
                }
                StatusPolicy::Fail => {
                    return Err(TrafficError::ProviderStatus {
                        status: decoded.status,
                        message: decoded.error_message,
                    });
                }
            }
        }

        decoded.ensure_complete()?;
        Ok(Attempt::Done(decoded))
    }
}

impl<T: Transport, C: Clock> DistanceProvider for TrafficFetcher<T, C> {
    fn fetch_distance(&self, query: &TrafficQuery) -> Result<DistanceMatrixResponse> {
        self.fetch(query)
    }
}
