//! Media types (`type/subtype; param=value`).

use std::fmt;
use std::str::FromStr;

use super::{Metadata, Specificity, is_token};
use crate::error::{NegotiationError, NegotiationResult};

/// A media type with optional parameters.
///
/// Type, subtype and parameter names are compared case-insensitively and
/// stored in lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
	main_type: String,
	sub_type: String,
	parameters: Vec<(String, String)>,
}

impl MediaType {
	/// Creates a media type without parameters.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_negotiation::MediaType;
	///
	/// let html = MediaType::new("text", "HTML");
	/// assert_eq!(html.to_string(), "text/html");
	/// ```
	pub fn new(main_type: impl AsRef<str>, sub_type: impl AsRef<str>) -> Self {
		Self {
			main_type: main_type.as_ref().to_ascii_lowercase(),
			sub_type: sub_type.as_ref().to_ascii_lowercase(),
			parameters: Vec::new(),
		}
	}

	/// The `*/*` wildcard.
	pub fn all() -> Self {
		Self::new("*", "*")
	}

	pub fn text_html() -> Self {
		Self::new("text", "html")
	}

	pub fn text_plain() -> Self {
		Self::new("text", "plain")
	}

	pub fn application_json() -> Self {
		Self::new("application", "json")
	}

	pub fn application_xml() -> Self {
		Self::new("application", "xml")
	}

	/// Adds a parameter, such as `charset=utf-8` or `level=1`.
	pub fn with_parameter(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
		self.parameters
			.push((name.as_ref().to_ascii_lowercase(), value.into()));
		self
	}

	pub fn main_type(&self) -> &str {
		&self.main_type
	}

	pub fn sub_type(&self) -> &str {
		&self.sub_type
	}

	pub fn parameters(&self) -> &[(String, String)] {
		&self.parameters
	}

	/// Returns the value of parameter `name`.
	pub fn parameter(&self, name: &str) -> Option<&str> {
		self.parameters
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

impl Metadata for MediaType {
	const KIND: &'static str = "media type";

	fn is_wildcard(&self) -> bool {
		self.main_type == "*"
	}

	fn is_concrete(&self) -> bool {
		self.main_type != "*" && self.sub_type != "*"
	}

	/// # Examples
	///
	/// ```
	/// use conneg_negotiation::{MediaType, Metadata, Specificity};
	///
	/// let html = MediaType::text_html();
	/// assert_eq!(MediaType::all().match_against(&html), Some(Specificity::Wildcard));
	/// assert_eq!(MediaType::new("text", "*").match_against(&html), Some(Specificity::Partial));
	/// assert_eq!(html.match_against(&html), Some(Specificity::Exact));
	/// assert_eq!(MediaType::application_json().match_against(&html), None);
	/// ```
	fn match_against(&self, candidate: &Self) -> Option<Specificity> {
		if self.is_wildcard() {
			return Some(Specificity::Wildcard);
		}
		if self.main_type != candidate.main_type {
			return None;
		}
		if self.sub_type == "*" {
			return Some(Specificity::Partial);
		}
		if self.sub_type != candidate.sub_type {
			return None;
		}
		let parameters_present = self
			.parameters
			.iter()
			.all(|(name, value)| candidate.parameter(name) == Some(value.as_str()));
		parameters_present.then_some(Specificity::Exact)
	}
}

impl FromStr for MediaType {
	type Err = NegotiationError;

	fn from_str(s: &str) -> NegotiationResult<Self> {
		let invalid = || NegotiationError::invalid_metadata(Self::KIND, s);
		let mut parts = s.split(';');
		let essence = parts.next().unwrap_or_default().trim();
		let (main_type, sub_type) = essence.split_once('/').ok_or_else(invalid)?;
		let (main_type, sub_type) = (main_type.trim(), sub_type.trim());
		if !is_token(main_type) || !is_token(sub_type) || (main_type == "*" && sub_type != "*") {
			return Err(invalid());
		}

		let mut media_type = Self::new(main_type, sub_type);
		for parameter in parts {
			let parameter = parameter.trim();
			if parameter.is_empty() {
				continue;
			}
			let (name, value) = parameter.split_once('=').ok_or_else(invalid)?;
			let name = name.trim();
			if !is_token(name) {
				return Err(invalid());
			}
			media_type = media_type.with_parameter(name, value.trim().trim_matches('"'));
		}
		Ok(media_type)
	}
}

impl fmt::Display for MediaType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.main_type, self.sub_type)?;
		for (name, value) in &self.parameters {
			write!(f, "; {}={}", name, value)?;
		}
		Ok(())
	}
}
