//! Character sets (`utf-8`, `iso-8859-1`).

use std::fmt;
use std::str::FromStr;

use super::{Metadata, Specificity, is_token};
use crate::error::{NegotiationError, NegotiationResult};

/// A character set name, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterSet(String);

impl CharacterSet {
	/// Creates a character set, normalizing the common `utf8` spelling.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_negotiation::CharacterSet;
	///
	/// assert_eq!(CharacterSet::new("UTF8"), CharacterSet::utf_8());
	/// assert_eq!(CharacterSet::new("ISO-8859-1").name(), "iso-8859-1");
	/// ```
	pub fn new(name: impl AsRef<str>) -> Self {
		let name = name.as_ref().trim().to_ascii_lowercase();
		match name.as_str() {
			"utf8" => Self("utf-8".to_string()),
			"latin1" => Self("iso-8859-1".to_string()),
			_ => Self(name),
		}
	}

	pub fn all() -> Self {
		Self::new("*")
	}

	pub fn utf_8() -> Self {
		Self::new("utf-8")
	}

	pub fn iso_8859_1() -> Self {
		Self::new("iso-8859-1")
	}

	pub fn us_ascii() -> Self {
		Self::new("us-ascii")
	}

	pub fn name(&self) -> &str {
		&self.0
	}
}

impl Metadata for CharacterSet {
	const KIND: &'static str = "character set";

	fn is_wildcard(&self) -> bool {
		self.0 == "*"
	}

	fn match_against(&self, candidate: &Self) -> Option<Specificity> {
		if self.is_wildcard() {
			Some(Specificity::Wildcard)
		} else {
			(self == candidate).then_some(Specificity::Exact)
		}
	}
}

impl FromStr for CharacterSet {
	type Err = NegotiationError;

	fn from_str(s: &str) -> NegotiationResult<Self> {
		if is_token(s.trim()) {
			Ok(Self::new(s))
		} else {
			Err(NegotiationError::invalid_metadata(Self::KIND, s))
		}
	}
}

impl fmt::Display for CharacterSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_match() {
		let utf8 = CharacterSet::utf_8();
		assert_eq!(utf8.match_against(&CharacterSet::new("UTF-8")), Some(Specificity::Exact));
		assert_eq!(utf8.match_against(&CharacterSet::iso_8859_1()), None);
		assert_eq!(
			CharacterSet::all().match_against(&utf8),
			Some(Specificity::Wildcard)
		);
	}

	#[rstest]
	fn test_parse_rejects_separators() {
		assert!("utf 8".parse::<CharacterSet>().is_err());
		assert!("".parse::<CharacterSet>().is_err());
	}
}
