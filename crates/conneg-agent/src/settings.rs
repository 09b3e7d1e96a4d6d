//! Agent resolver settings.

use std::path::PathBuf;

use serde::Deserialize;

/// What to do with catalog lines that fail to compile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogPolicy {
	/// Drop the line, record a diagnostic and keep loading.
	#[default]
	Skip,
	/// Fail the whole load on the first bad line.
	Strict,
}

/// Settings for building an [`AgentResolver`](crate::AgentResolver).
///
/// ```toml
/// catalog = "/etc/conneg/agent.catalog"
/// policy = "strict"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
	/// Catalog file to load; the built-in catalog is used when unset.
	pub catalog: Option<PathBuf>,
	pub policy: CatalogPolicy,
}
