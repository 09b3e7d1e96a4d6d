//! Typed pattern templates.
//!
//! # Examples
//!
//! ```rust
//! use conneg::template::{MatchMode, Template, Variable, VariableKind};
//! ```

#[cfg(feature = "template")]
pub use conneg_template::*;
