//! # conneg-agent
//!
//! Decomposes User-Agent strings into a main [`Product`] and a map of
//! attributes, using an ordered catalog of
//! [`conneg_template`] patterns. The first catalog template that matches
//! an agent string decides the result; an agent no template matches has
//! no product, which is not an error.
//!
//! [`parse_products`] separately splits an agent string into all of its
//! product tokens.
//!
//! ## Catalog format
//!
//! ```text
//! # comment
//! Mozilla/{agentVersion} (compatible; {agentName} {agentVersion}; {agentOs})
//! {agentName}/{agentVersion} {facultativeData}
//! ```
//!
//! ## Example
//!
//! ```
//! use conneg_agent::{AgentCatalog, AgentResolver, CatalogPolicy};
//!
//! let catalog = AgentCatalog::parse(
//! 	"{agentName}/{agentVersion} {agentComment}",
//! 	CatalogPolicy::Strict,
//! )
//! .unwrap();
//! let resolver = AgentResolver::new(catalog);
//!
//! let agent = resolver.resolve("Wget/1.21.4").unwrap();
//! assert_eq!(agent.product().name(), "Wget");
//! assert_eq!(agent.product().comment(), None);
//! ```

pub mod catalog;
pub mod error;
pub mod product;
pub mod resolver;
pub mod settings;

pub use catalog::{AgentCatalog, CatalogDiagnostic, standard_variables};
pub use error::{AgentError, AgentResult};
pub use product::{Product, parse_products};
pub use resolver::{AgentResolver, ResolvedAgent};
pub use settings::{AgentSettings, CatalogPolicy};
