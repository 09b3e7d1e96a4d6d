//! Product tokens.
//!
//! A User-Agent header is a sequence of products, each a `name/version`
//! token pair optionally followed by a parenthesized comment:
//!
//! ```text
//! Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/115.0
//! ```

use std::fmt;

/// HTTP token separators.
const SEPARATORS: &str = "()<>@,;:\\\"/[]?={}";

/// Client software described by a name, an optional version and an
/// optional comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
	name: String,
	version: Option<String>,
	comment: Option<String>,
}

impl Product {
	/// Creates a product; empty versions and comments are stored as `None`.
	pub fn new(
		name: impl Into<String>,
		version: Option<String>,
		comment: Option<String>,
	) -> Self {
		Self {
			name: name.into(),
			version: version.filter(|v| !v.is_empty()),
			comment: comment.filter(|c| !c.is_empty()),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn version(&self) -> Option<&str> {
		self.version.as_deref()
	}

	pub fn comment(&self) -> Option<&str> {
		self.comment.as_deref()
	}
}

impl fmt::Display for Product {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)?;
		if let Some(version) = &self.version {
			write!(f, "/{}", version)?;
		}
		if let Some(comment) = &self.comment {
			write!(f, " ({})", comment)?;
		}
		Ok(())
	}
}

/// Splits an agent string into its product tokens.
///
/// A comment attaches to the product right before it; comments with no
/// preceding product, and any further comment on a product that already
/// has one, are dropped. Stray separators are skipped.
///
/// # Examples
///
/// ```
/// use conneg_agent::parse_products;
///
/// let products = parse_products("Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/115.0");
/// assert_eq!(products.len(), 3);
/// assert_eq!(products[0].comment(), Some("X11; Linux x86_64"));
/// assert_eq!(products[2].name(), "Firefox");
/// assert_eq!(products[2].version(), Some("115.0"));
/// ```
pub fn parse_products(agent: &str) -> Vec<Product> {
	let mut products: Vec<Product> = Vec::new();
	let mut rest = agent.trim_start();

	while let Some(c) = rest.chars().next() {
		if c == '(' {
			let (comment, remainder) = split_comment(rest);
			if let Some(last) = products.last_mut()
				&& last.comment.is_none()
				&& !comment.is_empty()
			{
				last.comment = Some(comment.to_string());
			}
			rest = remainder;
		} else if is_token_char(c) {
			let (name, remainder) = split_token(rest);
			rest = remainder;
			let mut version = None;
			if let Some(after) = rest.strip_prefix('/') {
				let (token, remainder) = split_token(after);
				version = Some(token.to_string());
				rest = remainder;
			}
			products.push(Product::new(name, version, None));
		} else {
			rest = &rest[c.len_utf8()..];
		}
		rest = rest.trim_start();
	}

	products
}

fn is_token_char(c: char) -> bool {
	c.is_ascii_graphic() && !SEPARATORS.contains(c)
}

fn split_token(text: &str) -> (&str, &str) {
	let end = text.find(|c| !is_token_char(c)).unwrap_or(text.len());
	text.split_at(end)
}

/// Splits a leading `(...)` comment, honouring nested parentheses.
///
/// Returns the trimmed inner text and the remainder after the closing
/// parenthesis. An unterminated comment runs to the end of the input.
fn split_comment(text: &str) -> (&str, &str) {
	let mut depth = 0usize;
	for (index, c) in text.char_indices() {
		match c {
			'(' => depth += 1,
			')' => {
				depth -= 1;
				if depth == 0 {
					return (text[1..index].trim(), &text[index + 1..]);
				}
			}
			_ => {}
		}
	}
	(text[1..].trim(), "")
}
