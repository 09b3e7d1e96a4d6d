//! Negotiation settings.
//!
//! Settings deserialize from TOML; every field has a default, so an empty
//! document yields [`NegotiationSettings::default`].
//!
//! ```toml
//! default_language = "en"
//!
//! [weights]
//! media_type = 3.0
//! language = 4.0
//! character_set = 1.0
//! encoding = 1.0
//! ```

use serde::Deserialize;

use crate::error::{NegotiationError, NegotiationResult};
use crate::metadata::{Language, Metadata};

/// Weights combining the four per-axis scores into one total.
///
/// The default favours language, then media type; character set and
/// encoding only separate variants that tie on the first two axes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AxisWeights {
	pub media_type: f32,
	pub language: f32,
	pub character_set: f32,
	pub encoding: f32,
}

impl Default for AxisWeights {
	fn default() -> Self {
		Self {
			media_type: 3.0,
			language: 4.0,
			character_set: 1.0,
			encoding: 1.0,
		}
	}
}

impl AxisWeights {
	/// Rejects negative and non-finite weights.
	pub fn validate(&self) -> NegotiationResult<()> {
		let weights = [
			("media_type", self.media_type),
			("language", self.language),
			("character_set", self.character_set),
			("encoding", self.encoding),
		];
		for (name, weight) in weights {
			if !weight.is_finite() || weight < 0.0 {
				return Err(NegotiationError::InvalidSettings(format!(
					"weight '{}' must be a finite, non-negative number (got {})",
					name, weight
				)));
			}
		}
		Ok(())
	}

	/// Combines per-axis qualities, given in media type, language,
	/// character set, encoding order.
	pub fn combine(&self, media_type: f32, language: f32, character_set: f32, encoding: f32) -> f32 {
		self.media_type * media_type
			+ self.language * language
			+ self.character_set * character_set
			+ self.encoding * encoding
	}
}

/// Settings for a [`ContentNegotiator`](crate::ContentNegotiator).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NegotiationSettings {
	/// Per-axis weights.
	pub weights: AxisWeights,
	/// Language preferred among tied variants when the caller names none.
	pub default_language: Option<Language>,
}

impl NegotiationSettings {
	/// Parses and validates settings from a TOML document.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_negotiation::{Language, NegotiationSettings};
	///
	/// let settings = NegotiationSettings::from_toml_str(
	/// 	"default_language = \"fr-CA\"\n[weights]\nencoding = 0.5\n",
	/// )
	/// .unwrap();
	/// assert_eq!(settings.default_language, Some(Language::with_region("fr", "CA")));
	/// assert_eq!(settings.weights.encoding, 0.5);
	/// assert_eq!(settings.weights.language, 4.0);
	/// ```
	pub fn from_toml_str(document: &str) -> NegotiationResult<Self> {
		let settings: Self = toml::from_str(document)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Rejects unusable weights and a malformed default language.
	pub fn validate(&self) -> NegotiationResult<()> {
		self.weights.validate()?;
		match &self.default_language {
			Some(language) if !language.is_well_formed() => Err(NegotiationError::InvalidSettings(
				format!("default language '{}' is malformed", language),
			)),
			_ => Ok(()),
		}
	}
}
