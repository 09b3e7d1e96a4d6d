//! Layered settings for the whole library.
//!
//! One TOML document configures every part; each table is optional.
//!
//! ```toml
//! [negotiation]
//! default_language = "en"
//!
//! [negotiation.weights]
//! language = 4.0
//! media_type = 3.0
//!
//! [agent]
//! catalog = "/etc/conneg/agent.catalog"
//! policy = "skip"
//! ```

use std::fs;
use std::path::Path;

use conneg_negotiation::{ContentNegotiator, NegotiationError, NegotiationSettings};
use serde::Deserialize;
use thiserror::Error;

#[cfg(feature = "agent")]
use conneg_agent::{AgentResolver, AgentResult, AgentSettings};

/// Errors raised while loading [`ConnegSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// The document is not valid TOML or does not fit the settings shape.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A value parsed but is out of range.
	#[error("Negotiation settings error: {0}")]
	Negotiation(#[from] NegotiationError),
}

/// Settings for every part of the library.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConnegSettings {
	pub negotiation: NegotiationSettings,
	#[cfg(feature = "agent")]
	pub agent: AgentSettings,
}

impl ConnegSettings {
	/// Parses and validates a TOML document.
	///
	/// # Examples
	///
	/// ```
	/// use conneg::ConnegSettings;
	///
	/// let settings = ConnegSettings::from_toml_str("[negotiation.weights]\nencoding = 2.0\n").unwrap();
	/// assert_eq!(settings.negotiation.weights.encoding, 2.0);
	/// assert_eq!(settings.negotiation.weights.media_type, 3.0);
	/// ```
	pub fn from_toml_str(document: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(document)?;
		settings.negotiation.validate()?;
		Ok(settings)
	}

	/// Reads and validates a TOML settings file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let document = fs::read_to_string(path)?;
		let settings = Self::from_toml_str(&document)?;
		tracing::debug!(path = %path.display(), "loaded conneg settings");
		Ok(settings)
	}

	/// Builds a negotiator from the negotiation settings.
	///
	/// Fails when the fields were changed to unusable values after loading.
	pub fn negotiator(&self) -> Result<ContentNegotiator, SettingsError> {
		Ok(ContentNegotiator::new(self.negotiation.clone())?)
	}

	/// Builds an agent resolver from the agent settings.
	#[cfg(feature = "agent")]
	pub fn agent_resolver(&self) -> AgentResult<AgentResolver> {
		AgentResolver::from_settings(&self.agent)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_document() {
		assert_eq!(
			ConnegSettings::from_toml_str("").unwrap(),
			ConnegSettings::default()
		);
	}

	#[rstest]
	fn test_negotiator_revalidates_edited_settings() {
		let mut settings = ConnegSettings::default();
		assert!(settings.negotiator().is_ok());

		settings.negotiation.weights.language = f32::NAN;
		assert!(matches!(
			settings.negotiator(),
			Err(SettingsError::Negotiation(_))
		));
	}

	#[rstest]
	fn test_invalid_weight() {
		let result = ConnegSettings::from_toml_str("[negotiation.weights]\nmedia_type = -2.0\n");
		assert!(matches!(result, Err(SettingsError::Negotiation(_))));
	}

	#[cfg(feature = "agent")]
	#[rstest]
	fn test_unknown_policy() {
		let result = ConnegSettings::from_toml_str("[agent]\npolicy = \"lenient\"\n");
		assert!(matches!(result, Err(SettingsError::Toml(_))));
	}
}
