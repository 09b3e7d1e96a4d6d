//! Content codings (`gzip`, `br`, `identity`).

use std::fmt;
use std::str::FromStr;

use super::{Metadata, Specificity, is_token};
use crate::error::{NegotiationError, NegotiationResult};

/// A content coding name, compared case-insensitively.
///
/// The legacy `x-gzip` and `x-compress` aliases are folded into their
/// standard names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Encoding(String);

impl Encoding {
	pub fn new(name: impl AsRef<str>) -> Self {
		let name = name.as_ref().trim().to_ascii_lowercase();
		match name.as_str() {
			"x-gzip" => Self("gzip".to_string()),
			"x-compress" => Self("compress".to_string()),
			_ => Self(name),
		}
	}

	pub fn all() -> Self {
		Self::new("*")
	}

	pub fn identity() -> Self {
		Self::new("identity")
	}

	pub fn gzip() -> Self {
		Self::new("gzip")
	}

	pub fn deflate() -> Self {
		Self::new("deflate")
	}

	pub fn brotli() -> Self {
		Self::new("br")
	}

	pub fn name(&self) -> &str {
		&self.0
	}
}

impl Metadata for Encoding {
	const KIND: &'static str = "encoding";

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

impl FromStr for Encoding {
	type Err = NegotiationError;

	fn from_str(s: &str) -> NegotiationResult<Self> {
		if is_token(s.trim()) {
			Ok(Self::new(s))
		} else {
			Err(NegotiationError::invalid_metadata(Self::KIND, s))
		}
	}
}

impl fmt::Display for Encoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
