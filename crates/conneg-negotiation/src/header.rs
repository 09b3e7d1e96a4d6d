//! Parsing of `Accept`-style header values into preference lists.
//!
//! `Accept`, `Accept-Language`, `Accept-Charset` and `Accept-Encoding`
//! share one grammar: comma separated values, each optionally followed by
//! parameters, one of which may be the `q` weight. Parameters before `q`
//! belong to the value; parameters after it are accept extensions and are
//! ignored.

use crate::error::{NegotiationError, NegotiationResult};
use crate::metadata::Metadata;
use crate::preference::{Preference, Quality, QualityValue};

impl<T: Metadata> Preference<T> {
	/// Parses a header value, keeping the order in which values appear.
	///
	/// # Errors
	///
	/// Returns [`NegotiationError::InvalidPreference`] for a `q` outside
	/// `[0.0, 1.0]` and [`NegotiationError::InvalidMetadata`] for values or
	/// weights that do not parse.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_negotiation::{MediaType, Preference};
	///
	/// let accept = Preference::<MediaType>::parse_header(
	/// 	"text/plain;q=0.5, text/html;level=1, */*;q=0.1",
	/// )
	/// .unwrap();
	///
	/// assert_eq!(accept.len(), 3);
	/// assert_eq!(accept.values()[0].quality().value(), 0.5);
	/// assert_eq!(accept.values()[1].value().parameter("level"), Some("1"));
	/// assert!(Preference::<MediaType>::parse_header("text/html;q=2").is_err());
	/// ```
	pub fn parse_header(header: &str) -> NegotiationResult<Self> {
		header
			.split(',')
			.map(str::trim)
			.filter(|element| !element.is_empty())
			.map(parse_element::<T>)
			.collect()
	}
}

fn parse_element<T: Metadata>(element: &str) -> NegotiationResult<QualityValue<T>> {
	let mut value_parts = Vec::new();
	let mut quality = Quality::MAX;

	for part in element.split(';') {
		let part = part.trim();
		if let Some((name, weight)) = part.split_once('=')
			&& name.trim().eq_ignore_ascii_case("q")
			&& !value_parts.is_empty()
		{
			let weight = weight.trim();
			let parsed = weight
				.parse::<f32>()
				.map_err(|_| NegotiationError::invalid_metadata("quality", weight))?;
			quality = Quality::new(parsed)?;
			break;
		}
		value_parts.push(part);
	}

	let value = value_parts.join(";").parse::<T>()?;
	Ok(QualityValue::new(value, quality))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::metadata::{CharacterSet, Encoding, Language, MediaType};
	use rstest::rstest;

	#[rstest]
	fn test_parse_keeps_order() {
		let languages = Preference::<Language>::parse_header("fr;q=0.4, en-US, de;q=0.9").unwrap();
		let tags: Vec<String> = languages.iter().map(|e| e.value().to_string()).collect();
		assert_eq!(tags, vec!["fr", "en-US", "de"]);
	}

	#[rstest]
	fn test_parse_ignores_accept_extensions() {
		let accept = Preference::<MediaType>::parse_header("text/html;q=0.8;ext=1").unwrap();
		assert_eq!(accept.values()[0].value(), &MediaType::text_html());
		assert_eq!(accept.values()[0].quality().value(), 0.8);
	}

	#[rstest]
	fn test_parse_skips_empty_elements() {
		let encodings = Preference::<Encoding>::parse_header("gzip, , br;q=0").unwrap();
		assert_eq!(encodings.len(), 2);
		assert_eq!(encodings.values()[1].quality(), Quality::MIN);
	}

	#[rstest]
	fn test_parse_empty_header() {
		let charsets = Preference::<CharacterSet>::parse_header("").unwrap();
		assert!(charsets.is_empty());
	}

	#[rstest]
	#[case("utf-8;q=1.1")]
	#[case("utf-8;q=-0.5")]
	fn test_parse_rejects_out_of_range_quality(#[case] header: &str) {
		assert!(matches!(
			Preference::<CharacterSet>::parse_header(header),
			Err(NegotiationError::InvalidPreference(_))
		));
	}

	#[rstest]
	fn test_parse_rejects_unreadable_quality() {
		assert!(matches!(
			Preference::<CharacterSet>::parse_header("utf-8;q=high"),
			Err(NegotiationError::InvalidMetadata { kind: "quality", .. })
		));
	}

	#[rstest]
	fn test_parse_rejects_bad_value() {
		assert!(matches!(
			Preference::<MediaType>::parse_header("text/html, nonsense"),
			Err(NegotiationError::InvalidMetadata { kind: "media type", .. })
		));
	}
}
