//! Error types for template compilation.
//!
//! A failed match is not an error: [`Template::matches`](crate::Template::matches)
//! returns `None` for inputs the pattern does not describe.

use thiserror::Error;

/// Errors raised while compiling a pattern into a [`Template`](crate::Template).
#[derive(Debug, Error)]
pub enum TemplateError {
	/// A `{` without its closing `}`, a nested `{`, or a stray `}`.
	#[error("Unbalanced variable delimiter at byte {position}")]
	UnbalancedDelimiter {
		/// Byte offset of the offending delimiter in the pattern.
		position: usize,
	},

	/// A placeholder with no name, such as `{}`.
	#[error("Empty variable name at byte {position}")]
	EmptyVariableName {
		/// Byte offset of the opening delimiter.
		position: usize,
	},

	/// The pattern references a variable that is not registered and no
	/// default variable was configured.
	#[error("Unknown variable: {0}")]
	UnknownVariable(String),

	/// A custom variable carries a regular expression that does not compile.
	#[error("Invalid pattern for variable '{name}': {source}")]
	InvalidCustomPattern {
		/// Variable name as referenced in the pattern.
		name: String,
		/// Underlying regex compilation error.
		#[source]
		source: regex::Error,
	},

	/// The pattern exceeds the maximum accepted length.
	#[error("Pattern length {length} exceeds maximum allowed length of {max} bytes")]
	PatternTooLong {
		/// Actual length in bytes.
		length: usize,
		/// Maximum length in bytes.
		max: usize,
	},
}

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_unbalanced_delimiter_display() {
		let error = TemplateError::UnbalancedDelimiter { position: 7 };
		assert_eq!(error.to_string(), "Unbalanced variable delimiter at byte 7");
	}

	#[rstest]
	fn test_unknown_variable_display() {
		let error = TemplateError::UnknownVariable("agentOs".to_string());
		assert_eq!(error.to_string(), "Unknown variable: agentOs");
	}

	#[rstest]
	fn test_invalid_custom_pattern_has_source() {
		let regex_error = regex::Regex::new("(").unwrap_err();
		let error = TemplateError::InvalidCustomPattern {
			name: "id".to_string(),
			source: regex_error,
		};
		assert!(error.to_string().starts_with("Invalid pattern for variable 'id'"));
		assert!(std::error::Error::source(&error).is_some());
	}
}
