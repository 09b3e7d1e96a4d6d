//! # conneg-template
//!
//! Typed pattern templates: a pattern string interleaves literal text with
//! `{name}` placeholders, each bound to a [`Variable`] whose
//! [`VariableKind`] restricts what it may capture.
//!
//! Templates are compiled once and matched many times. Matching either
//! fails (`None`, an expected outcome) or yields a [`TemplateMatch`] mapping
//! every referenced variable to the text it captured, together with the
//! extent of the input that was covered.
//!
//! ## Example
//!
//! ```
//! use conneg_template::{Template, Variable, VariableKind};
//!
//! let template = Template::builder("{agentName}/{agentVersion} {agentComment}")
//! 	.variable("agentName", Variable::new(VariableKind::Token))
//! 	.variable("agentVersion", Variable::new(VariableKind::Token))
//! 	.variable("agentComment", Variable::facultative(VariableKind::Comment))
//! 	.build()
//! 	.unwrap();
//!
//! let found = template.matches("Lynx/2.9.0").unwrap();
//! assert_eq!(found.get("agentName"), Some("Lynx"));
//! assert_eq!(found.get("agentComment"), Some(""));
//! ```

pub mod error;
pub mod matcher;
pub mod template;
pub mod variable;

pub use error::{TemplateError, TemplateResult};
pub use matcher::TemplateMatch;
pub use template::{MatchMode, Template, TemplateBuilder};
pub use variable::{Variable, VariableKind};
