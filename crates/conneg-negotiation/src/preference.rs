//! Quality-weighted client preferences.
//!
//! A [`Preference`] is the ordered list of acceptable values a client
//! stated for one axis. It is a plain container: entries keep insertion
//! order, duplicates are kept, and nothing is sorted. Ranking is left to
//! the [`ContentNegotiator`](crate::ContentNegotiator).

use std::fmt;

use crate::error::{NegotiationError, NegotiationResult};
use crate::metadata::{CharacterSet, Encoding, Language, MediaType, Metadata};

/// A quality weight in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Quality(f32);

impl Quality {
	/// The highest quality, used when none is stated.
	pub const MAX: Quality = Quality(1.0);
	/// Quality zero, meaning "not acceptable".
	pub const MIN: Quality = Quality(0.0);

	/// Validates `value`.
	///
	/// Values outside `[0.0, 1.0]` and NaN are rejected, never clamped.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_negotiation::Quality;
	///
	/// assert_eq!(Quality::new(0.5).unwrap().value(), 0.5);
	/// assert!(Quality::new(1.01).is_err());
	/// assert!(Quality::new(f32::NAN).is_err());
	/// ```
	pub fn new(value: f32) -> NegotiationResult<Self> {
		if (0.0..=1.0).contains(&value) {
			Ok(Self(value))
		} else {
			Err(NegotiationError::InvalidPreference(value))
		}
	}

	pub fn value(self) -> f32 {
		self.0
	}
}

impl Default for Quality {
	fn default() -> Self {
		Self::MAX
	}
}

impl TryFrom<f32> for Quality {
	type Error = NegotiationError;

	fn try_from(value: f32) -> NegotiationResult<Self> {
		Self::new(value)
	}
}

impl fmt::Display for Quality {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// One entry of a preference list.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityValue<T> {
	value: T,
	quality: Quality,
}

impl<T> QualityValue<T> {
	pub fn new(value: T, quality: Quality) -> Self {
		Self { value, quality }
	}

	pub fn value(&self) -> &T {
		&self.value
	}

	pub fn quality(&self) -> Quality {
		self.quality
	}
}

impl<T: fmt::Display> fmt::Display for QualityValue<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.quality == Quality::MAX {
			write!(f, "{}", self.value)
		} else {
			write!(f, "{};q={}", self.value, self.quality)
		}
	}
}

/// The ordered preference list for one negotiation axis.
///
/// # Examples
///
/// ```
/// use conneg_negotiation::{MediaType, Preference};
///
/// let mut accept = Preference::new();
/// accept.add(MediaType::text_plain(), 0.5).unwrap();
/// accept.push(MediaType::text_html());
///
/// let values = accept.values();
/// assert_eq!(values[0].value(), &MediaType::text_plain());
/// assert_eq!(values[1].quality().value(), 1.0);
/// assert!(accept.add(MediaType::all(), 2.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Preference<T> {
	entries: Vec<QualityValue<T>>,
}

impl<T> Preference<T> {
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
		}
	}

	/// Appends `value` with the given quality.
	///
	/// # Errors
	///
	/// Returns [`NegotiationError::InvalidPreference`] when `quality` is
	/// outside `[0.0, 1.0]`; the list is left unchanged.
	pub fn add(&mut self, value: T, quality: f32) -> NegotiationResult<&mut Self> {
		let quality = Quality::new(quality)?;
		self.entries.push(QualityValue::new(value, quality));
		Ok(self)
	}

	/// Appends `value` with quality 1.0.
	pub fn push(&mut self, value: T) -> &mut Self {
		self.entries.push(QualityValue::new(value, Quality::MAX));
		self
	}

	/// Returns the entries in insertion order.
	pub fn values(&self) -> &[QualityValue<T>] {
		&self.entries
	}

	pub fn iter(&self) -> std::slice::Iter<'_, QualityValue<T>> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<T: Metadata> Preference<T> {
	/// Returns whether any entry names a value rather than `*`.
	///
	/// Only such lists constrain which variants are acceptable.
	pub fn has_concrete_entry(&self) -> bool {
		self.entries.iter().any(|entry| !entry.value.is_wildcard())
	}
}

impl<T> Default for Preference<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> FromIterator<QualityValue<T>> for Preference<T> {
	fn from_iter<I: IntoIterator<Item = QualityValue<T>>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl<'a, T> IntoIterator for &'a Preference<T> {
	type Item = &'a QualityValue<T>;
	type IntoIter = std::slice::Iter<'a, QualityValue<T>>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl<T: fmt::Display> fmt::Display for Preference<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, entry) in self.entries.iter().enumerate() {
			if index > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}", entry)?;
		}
		Ok(())
	}
}

/// Client preferences on all four axes.
///
/// An axis left unset, or set to an empty list, states no constraint: every
/// variant is acceptable on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preferences {
	media_types: Option<Preference<MediaType>>,
	languages: Option<Preference<Language>>,
	character_sets: Option<Preference<CharacterSet>>,
	encodings: Option<Preference<Encoding>>,
}

impl Preferences {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_media_types(mut self, preference: Preference<MediaType>) -> Self {
		self.media_types = Some(preference);
		self
	}

	pub fn with_languages(mut self, preference: Preference<Language>) -> Self {
		self.languages = Some(preference);
		self
	}

	pub fn with_character_sets(mut self, preference: Preference<CharacterSet>) -> Self {
		self.character_sets = Some(preference);
		self
	}

	pub fn with_encodings(mut self, preference: Preference<Encoding>) -> Self {
		self.encodings = Some(preference);
		self
	}

	pub fn media_types(&self) -> Option<&Preference<MediaType>> {
		self.media_types.as_ref()
	}

	pub fn languages(&self) -> Option<&Preference<Language>> {
		self.languages.as_ref()
	}

	pub fn character_sets(&self) -> Option<&Preference<CharacterSet>> {
		self.character_sets.as_ref()
	}

	pub fn encodings(&self) -> Option<&Preference<Encoding>> {
		self.encodings.as_ref()
	}

	/// Returns the media type list, creating an empty one if unset.
	pub fn media_types_mut(&mut self) -> &mut Preference<MediaType> {
		self.media_types.get_or_insert_with(Preference::new)
	}

	/// Returns the language list, creating an empty one if unset.
	pub fn languages_mut(&mut self) -> &mut Preference<Language> {
		self.languages.get_or_insert_with(Preference::new)
	}

	/// Returns the character set list, creating an empty one if unset.
	pub fn character_sets_mut(&mut self) -> &mut Preference<CharacterSet> {
		self.character_sets.get_or_insert_with(Preference::new)
	}

	/// Returns the encoding list, creating an empty one if unset.
	pub fn encodings_mut(&mut self) -> &mut Preference<Encoding> {
		self.encodings.get_or_insert_with(Preference::new)
	}

	pub fn set_media_types(&mut self, preference: Option<Preference<MediaType>>) {
		self.media_types = preference;
	}

	pub fn set_languages(&mut self, preference: Option<Preference<Language>>) {
		self.languages = preference;
	}

	pub fn set_character_sets(&mut self, preference: Option<Preference<CharacterSet>>) {
		self.character_sets = preference;
	}

	pub fn set_encodings(&mut self, preference: Option<Preference<Encoding>>) {
		self.encodings = preference;
	}
}
