//! Resource variants.

use std::fmt;

use crate::error::{NegotiationError, NegotiationResult};
use crate::metadata::{CharacterSet, Encoding, Language, MediaType, Metadata};

/// One concrete representation of a resource.
///
/// An axis left unset is acceptable whatever the client prefers on it.
/// Variants are immutable; build them with [`Variant::builder`], which
/// rejects wildcard values.
///
/// # Examples
///
/// ```
/// use conneg_negotiation::{Language, MediaType, Variant};
///
/// let variant = Variant::builder()
/// 	.media_type(MediaType::text_html())
/// 	.language(Language::with_region("en", "US"))
/// 	.build()
/// 	.unwrap();
/// assert_eq!(variant.media_type(), Some(&MediaType::text_html()));
/// assert_eq!(variant.character_set(), None);
///
/// assert!(Variant::builder().media_type(MediaType::all()).build().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variant {
	media_type: Option<MediaType>,
	language: Option<Language>,
	character_set: Option<CharacterSet>,
	encoding: Option<Encoding>,
}

impl Variant {
	pub fn builder() -> VariantBuilder {
		VariantBuilder::default()
	}

	pub fn media_type(&self) -> Option<&MediaType> {
		self.media_type.as_ref()
	}

	pub fn language(&self) -> Option<&Language> {
		self.language.as_ref()
	}

	pub fn character_set(&self) -> Option<&CharacterSet> {
		self.character_set.as_ref()
	}

	pub fn encoding(&self) -> Option<&Encoding> {
		self.encoding.as_ref()
	}
}

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fn axis<T: fmt::Display>(value: Option<&T>) -> String {
			value.map_or_else(|| "-".to_string(), ToString::to_string)
		}
		write!(
			f,
			"[{} | {} | {} | {}]",
			axis(self.media_type()),
			axis(self.language()),
			axis(self.character_set()),
			axis(self.encoding())
		)
	}
}

/// Builder for [`Variant`].
#[derive(Debug, Clone, Default)]
pub struct VariantBuilder {
	variant: Variant,
}

impl VariantBuilder {
	pub fn media_type(mut self, media_type: MediaType) -> Self {
		self.variant.media_type = Some(media_type);
		self
	}

	pub fn language(mut self, language: Language) -> Self {
		self.variant.language = Some(language);
		self
	}

	pub fn character_set(mut self, character_set: CharacterSet) -> Self {
		self.variant.character_set = Some(character_set);
		self
	}

	pub fn encoding(mut self, encoding: Encoding) -> Self {
		self.variant.encoding = Some(encoding);
		self
	}

	/// Validates and returns the variant.
	///
	/// # Errors
	///
	/// Returns [`NegotiationError::InvalidVariant`] when any axis holds a
	/// wildcard such as `*/*`, `text/*` or `*`, or a malformed value such as
	/// an empty language tag.
	pub fn build(self) -> NegotiationResult<Variant> {
		check_concrete(self.variant.media_type.as_ref())?;
		check_concrete(self.variant.language.as_ref())?;
		check_concrete(self.variant.character_set.as_ref())?;
		check_concrete(self.variant.encoding.as_ref())?;
		Ok(self.variant)
	}
}

fn check_concrete<T: Metadata>(value: Option<&T>) -> NegotiationResult<()> {
	match value {
		Some(value) if !value.is_well_formed() => Err(NegotiationError::InvalidVariant(format!(
			"{} '{}' is malformed",
			T::KIND,
			value
		))),
		Some(value) if !value.is_concrete() => Err(NegotiationError::InvalidVariant(format!(
			"{} '{}' is not a concrete value",
			T::KIND,
			value
		))),
		_ => Ok(()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_variant_is_valid() {
		let variant = Variant::builder().build().unwrap();
		assert_eq!(variant, Variant::default());
		assert_eq!(variant.to_string(), "[- | - | - | -]");
	}

	#[rstest]
	fn test_display_full_variant() {
		let variant = Variant::builder()
			.media_type(MediaType::application_json())
			.language(Language::new("fr"))
			.character_set(CharacterSet::utf_8())
			.encoding(Encoding::gzip())
			.build()
			.unwrap();
		assert_eq!(variant.to_string(), "[application/json | fr | utf-8 | gzip]");
	}

	#[rstest]
	fn test_partial_media_type_rejected() {
		let result = Variant::builder()
			.media_type(MediaType::new("text", "*"))
			.build();
		match result {
			Err(NegotiationError::InvalidVariant(reason)) => {
				assert_eq!(reason, "media type 'text/*' is not a concrete value")
			}
			other => panic!("expected invalid variant, got {:?}", other),
		}
	}

	#[rstest]
	fn test_wildcard_language_rejected() {
		let result = Variant::builder().language(Language::all()).build();
		assert!(matches!(result, Err(NegotiationError::InvalidVariant(_))));
	}

	#[rstest]
	#[case("")]
	#[case("e1")]
	fn test_malformed_language_rejected(#[case] tag: &str) {
		let result = Variant::builder().language(Language::new(tag)).build();
		match result {
			Err(NegotiationError::InvalidVariant(reason)) => {
				assert_eq!(reason, format!("language '{}' is malformed", tag))
			}
			other => panic!("expected invalid variant, got {:?}", other),
		}
	}

	#[rstest]
	fn test_wildcard_encoding_rejected() {
		let result = Variant::builder().encoding(Encoding::all()).build();
		assert!(matches!(result, Err(NegotiationError::InvalidVariant(_))));
	}
}
