//! # conneg
//!
//! HTTP content negotiation, typed pattern templates and User-Agent
//! decomposition.
//!
//! ## Feature Flags
//!
//! - `minimal` - Preference model and negotiation engine only
//! - `template` - Typed template matcher
//! - `agent` - User-Agent resolver and the [`ClientInfo`] aggregate
//! - `full` (default) - Everything above
//!
//! ## Quick Example
//!
//! ```
//! use conneg::prelude::*;
//!
//! let mut client = ClientInfo::new();
//! client.set_accepted_media_types(Some(
//! 	Preference::parse_header("text/html;q=0.9, text/plain;q=0.5").unwrap(),
//! ));
//! client.set_agent(Some("curl/8.4.0".to_string()));
//!
//! let variants = vec![
//! 	Variant::builder().media_type(MediaType::text_plain()).build().unwrap(),
//! 	Variant::builder().media_type(MediaType::text_html()).build().unwrap(),
//! ];
//!
//! let negotiator = ContentNegotiator::default();
//! let best = client.preferred_variant(&negotiator, &variants, None);
//! assert_eq!(best, Some(&variants[1]));
//! assert_eq!(client.agent_name(), Some("curl"));
//! ```

#[cfg(feature = "agent")]
pub mod agent;
#[cfg(feature = "agent")]
pub mod http;
pub mod negotiation;
pub mod settings;
#[cfg(feature = "template")]
pub mod template;

pub use settings::{ConnegSettings, SettingsError};

// Re-export the negotiation engine and preference model
pub use conneg_negotiation::{
	AxisWeights, CharacterSet, ContentNegotiator, Encoding, Language, MediaType, Metadata,
	NegotiationError, NegotiationResult, NegotiationSettings, Preference, Preferences, Quality,
	QualityValue, Specificity, Variant, VariantBuilder,
};

// Re-export the template matcher
#[cfg(feature = "template")]
pub use conneg_template::{
	MatchMode, Template, TemplateBuilder, TemplateError, TemplateMatch, TemplateResult, Variable,
	VariableKind,
};

// Re-export agent resolution
#[cfg(feature = "agent")]
pub use conneg_agent::{
	AgentCatalog, AgentError, AgentResolver, AgentResult, AgentSettings, CatalogPolicy, Product,
	ResolvedAgent, parse_products,
};

#[cfg(feature = "agent")]
pub use conneg_http::ClientInfo;

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::{
		ConnegSettings, ContentNegotiator, Language, MediaType, Preference, Preferences, Variant,
	};

	#[cfg(feature = "template")]
	pub use crate::{Template, Variable, VariableKind};

	#[cfg(feature = "agent")]
	pub use crate::{AgentResolver, ClientInfo, Product};
}
