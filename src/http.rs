//! Per-request client information.

#[cfg(feature = "agent")]
pub use conneg_http::*;
