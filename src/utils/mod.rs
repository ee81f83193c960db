//! Utility modules for the outside world
//!
//! Provides the time source and HTTP transport the fetcher depends on,
//! each behind a trait so tests can substitute deterministic versions.

pub mod clock;
pub mod http;

pub use clock::{Clock, ManualClock, SystemClock};
pub use http::{HttpResponse, ReqwestTransport, Transport};
