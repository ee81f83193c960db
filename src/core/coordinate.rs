//! Coordinate validation
//!
//! Parses `"lat,lon"` strings and range-checks both components. A
//! `Coordinate` can only be obtained through validation.

use crate::error::{CoordinateIssue, Result, TrafficError};
use std::fmt;
use std::str::FromStr;

const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A validated geographic position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Latitude in degrees, within [-90, 90]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, within [-180, 180]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinate {
    type Err = TrafficError;

    fn from_str(s: &str) -> Result<Self> {
        validate(s)
    }
}

/// Validate a `"lat,lon"` string into a `Coordinate`
///
/// Tokens are parsed as-is; `"40.7, -74"` is an invalid longitude.
pub fn validate(raw: &str) -> Result<Coordinate> {
    let tokens: Vec<&str> = raw.split(',').collect();
    let [lat, lon] = tokens.as_slice() else {
        return Err(TrafficError::malformed(raw));
    };

    let latitude = parse_component(lat, LATITUDE_RANGE).map_err(TrafficError::InvalidLatitude)?;
    let longitude =
        parse_component(lon, LONGITUDE_RANGE).map_err(TrafficError::InvalidLongitude)?;

    Ok(Coordinate {
        latitude,
        longitude,
    })
}

fn parse_component(token: &str, (min, max): (f64, f64)) -> std::result::Result<f64, CoordinateIssue> {
    let value: f64 = token
        .parse()
        .map_err(|_| CoordinateIssue::NotANumber(token.to_string()))?;

    // NaN fails the range check as well
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(CoordinateIssue::OutOfRange { value, min, max })
    }
}
