//! User-Agent decomposition.
//!
//! # Examples
//!
//! ```rust
//! use conneg::agent::{AgentCatalog, AgentResolver, CatalogPolicy, parse_products};
//! ```

#[cfg(feature = "agent")]
pub use conneg_agent::*;
