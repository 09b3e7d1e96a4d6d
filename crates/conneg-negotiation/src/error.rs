//! Error types for the negotiation crate.
//!
//! Finding no acceptable variant is not an error; the engine reports it as
//! `None`.

use thiserror::Error;

/// Errors raised while building preferences, variants or settings.
#[derive(Debug, Error)]
pub enum NegotiationError {
	/// A quality outside `[0.0, 1.0]`, or not a number.
	#[error("Invalid preference quality: {0} (expected a value between 0.0 and 1.0)")]
	InvalidPreference(f32),

	/// A metadata value that cannot be parsed.
	#[error("Invalid {kind}: '{value}'")]
	InvalidMetadata {
		/// Kind of metadata, such as `media type` or `language`.
		kind: &'static str,
		/// The rejected input.
		value: String,
	},

	/// A variant that cannot take part in negotiation.
	#[error("Invalid variant: {0}")]
	InvalidVariant(String),

	/// Settings that parse but cannot be used.
	#[error("Invalid settings: {0}")]
	InvalidSettings(String),

	/// Settings that do not parse.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}

impl NegotiationError {
	pub(crate) fn invalid_metadata(kind: &'static str, value: impl Into<String>) -> Self {
		Self::InvalidMetadata {
			kind,
			value: value.into(),
		}
	}
}

/// Result type alias for negotiation operations.
pub type NegotiationResult<T> = Result<T, NegotiationError>;
