//! Resolution of User-Agent strings against a catalog.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::catalog::{AGENT_COMMENT, AGENT_NAME, AGENT_VERSION, AgentCatalog};
use crate::error::AgentResult;
use crate::product::Product;
use crate::settings::AgentSettings;

static BUILTIN_RESOLVER: Lazy<Arc<AgentResolver>> =
	Lazy::new(|| Arc::new(AgentResolver::new(AgentCatalog::builtin())));

/// What the first matching catalog template captured from an agent string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAgent {
	product: Product,
	attributes: HashMap<String, String>,
}

impl ResolvedAgent {
	/// The main product, built from `agentName`, `agentVersion` and
	/// `agentComment`.
	pub fn product(&self) -> &Product {
		&self.product
	}

	/// Every variable the template captured, including empty ones.
	pub fn attributes(&self) -> &HashMap<String, String> {
		&self.attributes
	}

	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}

	pub fn into_product(self) -> Product {
		self.product
	}
}

/// Decomposes User-Agent strings using an ordered [`AgentCatalog`].
///
/// Templates are tried in catalog order and the first match wins, even
/// when a later template would capture more.
///
/// # Examples
///
/// ```
/// use conneg_agent::AgentResolver;
///
/// let resolver = AgentResolver::builtin();
/// let agent = resolver
/// 	.resolve("Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0")
/// 	.unwrap();
/// assert_eq!(agent.product().name(), "Firefox");
/// assert_eq!(agent.product().version(), Some("115.0"));
/// assert_eq!(agent.attribute("agentOs"), Some("X11"));
/// ```
#[derive(Debug)]
pub struct AgentResolver {
	catalog: AgentCatalog,
}

impl AgentResolver {
	pub fn new(catalog: AgentCatalog) -> Self {
		Self { catalog }
	}

	/// A shared resolver over the built-in catalog.
	pub fn builtin() -> Arc<Self> {
		Arc::clone(&BUILTIN_RESOLVER)
	}

	pub fn from_settings(settings: &AgentSettings) -> AgentResult<Self> {
		AgentCatalog::from_settings(settings).map(Self::new)
	}

	pub fn catalog(&self) -> &AgentCatalog {
		&self.catalog
	}

	/// Resolves `agent`, or returns `None` when no template matches.
	pub fn resolve(&self, agent: &str) -> Option<ResolvedAgent> {
		for template in self.catalog.templates() {
			let Some(found) = template.matches(agent) else {
				continue;
			};
			let attributes = found.into_bindings();
			let Some(name) = attributes.get(AGENT_NAME) else {
				continue;
			};
			let product = Product::new(
				name.clone(),
				attributes.get(AGENT_VERSION).cloned(),
				attributes.get(AGENT_COMMENT).cloned(),
			);
			tracing::debug!(
				agent,
				template = template.pattern(),
				product = %product,
				"resolved user agent"
			);
			return Some(ResolvedAgent {
				product,
				attributes,
			});
		}

		tracing::debug!(agent, "no catalog template matched user agent");
		None
	}
}

impl Default for AgentResolver {
	fn default() -> Self {
		Self::new(AgentCatalog::builtin())
	}
}
