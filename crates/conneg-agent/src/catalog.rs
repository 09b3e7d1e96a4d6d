//! Ordered catalogs of User-Agent templates.
//!
//! A catalog is plain text with one template per line. Blank lines and
//! lines starting with `#` are ignored. Every template is compiled against
//! the [standard variables](standard_variables); a name outside that set
//! is a compile error, handled according to the [`CatalogPolicy`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use conneg_template::{Template, Variable, VariableKind};

use crate::error::{AgentError, AgentResult};
use crate::settings::{AgentSettings, CatalogPolicy};

pub const AGENT_NAME: &str = "agentName";
pub const AGENT_VERSION: &str = "agentVersion";
pub const AGENT_COMMENT: &str = "agentComment";
pub const AGENT_OS: &str = "agentOs";
pub const COMMENT_ATTRIBUTE: &str = "commentAttribute";
pub const FACULTATIVE_DATA: &str = "facultativeData";

const BUILTIN_CATALOG: &str = include_str!("../resources/agent.catalog");

/// Returns the variables catalog templates may reference.
pub fn standard_variables() -> HashMap<String, Variable> {
	let attribute = Variable::new(VariableKind::CommentAttribute);
	[
		(AGENT_NAME, Variable::new(VariableKind::Token)),
		(AGENT_VERSION, Variable::new(VariableKind::Token)),
		(AGENT_COMMENT, Variable::facultative(VariableKind::Comment)),
		(AGENT_OS, attribute.clone()),
		(COMMENT_ATTRIBUTE, attribute),
		(FACULTATIVE_DATA, Variable::facultative(VariableKind::All)),
	]
	.into_iter()
	.map(|(name, variable)| (name.to_string(), variable))
	.collect()
}

/// A catalog line dropped under [`CatalogPolicy::Skip`].
#[derive(Debug)]
pub struct CatalogDiagnostic {
	/// One-based line number.
	pub line_number: usize,
	/// The line as written, without surrounding whitespace.
	pub line: String,
	pub error: AgentError,
}

/// Compiled templates in catalog order.
#[derive(Debug, Default)]
pub struct AgentCatalog {
	templates: Vec<Template>,
	diagnostics: Vec<CatalogDiagnostic>,
}

impl AgentCatalog {
	/// Compiles every template line of `text`.
	///
	/// # Errors
	///
	/// Under [`CatalogPolicy::Strict`] the first line that fails to compile,
	/// or that never captures `{agentName}`, aborts the load. Under
	/// [`CatalogPolicy::Skip`] such lines are dropped and reported through
	/// [`diagnostics`](Self::diagnostics); loading then always succeeds.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_agent::{AgentCatalog, CatalogPolicy};
	///
	/// let text = "# tools\n{agentName}/{agentVersion}\n{browser}/{agentVersion}\n";
	/// let catalog = AgentCatalog::parse(text, CatalogPolicy::Skip).unwrap();
	/// assert_eq!(catalog.len(), 1);
	/// assert_eq!(catalog.diagnostics()[0].line_number, 3);
	///
	/// assert!(AgentCatalog::parse(text, CatalogPolicy::Strict).is_err());
	/// ```
	pub fn parse(text: &str, policy: CatalogPolicy) -> AgentResult<Self> {
		let variables = standard_variables();
		let mut catalog = Self::default();

		for (index, raw) in text.lines().enumerate() {
			let line = raw.trim();
			if line.is_empty() || line.starts_with('#') {
				continue;
			}
			let line_number = index + 1;
			match compile_line(line, line_number, &variables) {
				Ok(template) => catalog.templates.push(template),
				Err(error) if policy == CatalogPolicy::Strict => return Err(error),
				Err(error) => {
					tracing::warn!(
						line = line_number,
						pattern = line,
						error = %error,
						"skipping agent catalog line"
					);
					catalog.diagnostics.push(CatalogDiagnostic {
						line_number,
						line: line.to_string(),
						error,
					});
				}
			}
		}

		tracing::debug!(
			templates = catalog.templates.len(),
			skipped = catalog.diagnostics.len(),
			"loaded agent catalog"
		);
		Ok(catalog)
	}

	/// Reads and compiles a catalog file.
	pub fn from_path(path: impl AsRef<Path>, policy: CatalogPolicy) -> AgentResult<Self> {
		let text = fs::read_to_string(path.as_ref())?;
		Self::parse(&text, policy)
	}

	/// The catalog shipped with this crate.
	pub fn builtin() -> Self {
		// Lenient loading cannot fail.
		Self::parse(BUILTIN_CATALOG, CatalogPolicy::Skip).unwrap_or_default()
	}

	/// Loads the configured catalog file, or the built-in catalog.
	pub fn from_settings(settings: &AgentSettings) -> AgentResult<Self> {
		match &settings.catalog {
			Some(path) => Self::from_path(path, settings.policy),
			None => Ok(Self::builtin()),
		}
	}

	pub fn templates(&self) -> &[Template] {
		&self.templates
	}

	pub fn diagnostics(&self) -> &[CatalogDiagnostic] {
		&self.diagnostics
	}

	pub fn len(&self) -> usize {
		self.templates.len()
	}

	pub fn is_empty(&self) -> bool {
		self.templates.is_empty()
	}
}

fn compile_line(
	line: &str,
	line_number: usize,
	variables: &HashMap<String, Variable>,
) -> AgentResult<Template> {
	let template = Template::compile(line, variables).map_err(|source| AgentError::Pattern {
		line: line_number,
		source,
	})?;
	if !template.variable_names().any(|name| name == AGENT_NAME) {
		return Err(AgentError::MissingAgentName { line: line_number });
	}
	Ok(template)
}
