//! Error types for agent catalogs.

use conneg_template::TemplateError;
use thiserror::Error;

/// Errors raised while loading an agent catalog.
///
/// Resolving an agent string never fails; an agent that no template
/// matches simply yields no product.
#[derive(Debug, Error)]
pub enum AgentError {
	/// A catalog line does not compile as a template.
	#[error("Catalog line {line}: {source}")]
	Pattern {
		/// One-based line number in the catalog text.
		line: usize,
		#[source]
		source: TemplateError,
	},

	/// A catalog line compiles but never captures `{agentName}`.
	#[error("Catalog line {line}: template does not capture {{agentName}}")]
	MissingAgentName { line: usize },

	/// The catalog file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type for agent catalog operations.
pub type AgentResult<T> = Result<T, AgentError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_pattern_error_names_line() {
		let error = AgentError::Pattern {
			line: 7,
			source: TemplateError::UnknownVariable("browser".to_string()),
		};
		assert!(error.to_string().starts_with("Catalog line 7: "));
		assert!(std::error::Error::source(&error).is_some());
	}

	#[rstest]
	fn test_missing_agent_name_message() {
		let error = AgentError::MissingAgentName { line: 2 };
		assert_eq!(
			error.to_string(),
			"Catalog line 2: template does not capture {agentName}"
		);
	}
}
