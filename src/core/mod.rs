//! Core traffic-info pipeline
//!
//! Contains coordinate validation, the deadline-bounded fetcher with its
//! response model, and report rendering.

pub mod coordinate;
pub mod fetcher;
pub mod report;
pub mod response;

pub use coordinate::{Coordinate, validate};
pub use fetcher::{DistanceProvider, TrafficFetcher, TrafficQuery};
pub use report::{render, render_json};
pub use response::{DistanceMatrixResponse, Element, Fare, Row, TextValue};
