//! Metadata values negotiated on each axis.
//!
//! Every axis value type implements [`Metadata`], which is all the
//! preference model and the engine need to know about it: whether a value
//! is a wildcard, and how specifically a preference value matches a
//! concrete candidate.

pub mod charset;
pub mod encoding;
pub mod language;
pub mod media_type;

pub use charset::CharacterSet;
pub use encoding::Encoding;
pub use language::Language;
pub use media_type::MediaType;

use std::fmt;
use std::str::FromStr;

use crate::error::NegotiationError;

/// How closely a preference value matched a candidate value.
///
/// Ordered from least to most specific, so `Exact > Partial > Wildcard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specificity {
	/// The preference value matches anything (`*`, `*/*`).
	Wildcard,
	/// The preference matches a family of values (`text/*`, `en` for `en-US`).
	Partial,
	/// The values are equal.
	Exact,
}

/// A value on one negotiation axis.
pub trait Metadata:
	Clone + fmt::Debug + fmt::Display + FromStr<Err = NegotiationError> + Send + Sync
{
	/// Human readable axis name used in error messages.
	const KIND: &'static str;

	/// Returns whether the value matches every candidate.
	fn is_wildcard(&self) -> bool;

	/// Returns whether the value contains no wildcard part at all.
	///
	/// Variants may only carry concrete values.
	fn is_concrete(&self) -> bool {
		!self.is_wildcard()
	}

	/// Returns whether the value obeys its grammar.
	///
	/// Parsing only ever yields well-formed values; infallible
	/// constructors may not.
	fn is_well_formed(&self) -> bool {
		true
	}

	/// Matches `self`, taken as a preference, against a concrete candidate.
	fn match_against(&self, candidate: &Self) -> Option<Specificity>;
}

/// Returns whether `name` is a non-empty HTTP token.
pub(crate) fn is_token(name: &str) -> bool {
	!name.is_empty()
		&& name
			.chars()
			.all(|c| c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?={}".contains(c))
}
