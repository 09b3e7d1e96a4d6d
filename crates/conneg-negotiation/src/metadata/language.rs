//! Language tags (`en`, `en-US`, `zh-Hant-TW`).

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::{Metadata, Specificity};
use crate::error::{NegotiationError, NegotiationResult};

/// A language tag made of a primary tag and optional subtags.
///
/// The primary tag is stored in lowercase, two letter subtags (regions) in
/// uppercase and longer subtags in lowercase, so equal tags compare equal
/// whatever case they were written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Language {
	primary: String,
	subtags: Vec<String>,
}

impl Language {
	/// Creates a language from a tag such as `en` or `en-US`.
	///
	/// The tag is split on `-` and normalized but not checked; a malformed
	/// tag is rejected when it is placed on a [`Variant`](crate::Variant).
	/// Use [`str::parse`] to check the tag up front.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_negotiation::Language;
	///
	/// let en = Language::new("EN");
	/// assert_eq!(en.primary(), "en");
	/// assert_eq!(en.to_string(), "en");
	///
	/// let en_us = Language::new("en-us");
	/// assert_eq!(en_us, "en-US".parse::<Language>().unwrap());
	/// assert_eq!(en_us.region(), Some("US"));
	/// ```
	pub fn new(tag: impl AsRef<str>) -> Self {
		let mut parts = tag.as_ref().trim().split('-');
		let primary = parts.next().unwrap_or_default().to_ascii_lowercase();
		Self {
			primary,
			subtags: parts.map(normalize_subtag).collect(),
		}
	}

	/// Creates a language with a region subtag, such as `en-US`.
	pub fn with_region(primary: impl AsRef<str>, region: impl AsRef<str>) -> Self {
		let mut language = Self::new(primary);
		language.subtags.push(normalize_subtag(region.as_ref()));
		language
	}

	/// The `*` wildcard.
	pub fn all() -> Self {
		Self::new("*")
	}

	pub fn primary(&self) -> &str {
		&self.primary
	}

	pub fn subtags(&self) -> &[String] {
		&self.subtags
	}

	/// Returns the first two letter subtag, if any.
	pub fn region(&self) -> Option<&str> {
		self.subtags
			.iter()
			.find(|tag| tag.len() == 2)
			.map(String::as_str)
	}
}

fn normalize_subtag(tag: &str) -> String {
	if tag.len() == 2 {
		tag.to_ascii_uppercase()
	} else {
		tag.to_ascii_lowercase()
	}
}

impl Metadata for Language {
	const KIND: &'static str = "language";

	fn is_wildcard(&self) -> bool {
		self.primary == "*"
	}

	fn is_well_formed(&self) -> bool {
		if self.is_wildcard() {
			return self.subtags.is_empty();
		}
		let primary_ok = (1..=8).contains(&self.primary.len())
			&& self.primary.chars().all(|c| c.is_ascii_alphabetic());
		primary_ok
			&& self.subtags.iter().all(|tag| {
				(1..=8).contains(&tag.len()) && tag.chars().all(|c| c.is_ascii_alphanumeric())
			})
	}

	/// # Examples
	///
	/// ```
	/// use conneg_negotiation::{Language, Metadata, Specificity};
	///
	/// let en = Language::new("en");
	/// let en_us = Language::with_region("en", "US");
	/// let en_gb = Language::with_region("en", "GB");
	///
	/// assert_eq!(en.match_against(&en_us), Some(Specificity::Partial));
	/// assert_eq!(en_us.match_against(&en), Some(Specificity::Partial));
	/// assert_eq!(en_us.match_against(&en_us), Some(Specificity::Exact));
	/// assert_eq!(en_us.match_against(&en_gb), None);
	/// ```
	fn match_against(&self, candidate: &Self) -> Option<Specificity> {
		if self.is_wildcard() {
			return Some(Specificity::Wildcard);
		}
		if self.primary != candidate.primary {
			return None;
		}
		if self.subtags == candidate.subtags {
			return Some(Specificity::Exact);
		}
		let shared = self.subtags.len().min(candidate.subtags.len());
		(self.subtags[..shared] == candidate.subtags[..shared]).then_some(Specificity::Partial)
	}
}

impl FromStr for Language {
	type Err = NegotiationError;

	fn from_str(s: &str) -> NegotiationResult<Self> {
		let language = Self::new(s);
		if language.is_well_formed() {
			Ok(language)
		} else {
			Err(NegotiationError::invalid_metadata(Self::KIND, s))
		}
	}
}

impl TryFrom<String> for Language {
	type Error = NegotiationError;

	fn try_from(value: String) -> NegotiationResult<Self> {
		value.parse()
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.primary)?;
		for tag in &self.subtags {
			write!(f, "-{}", tag)?;
		}
		Ok(())
	}
}
