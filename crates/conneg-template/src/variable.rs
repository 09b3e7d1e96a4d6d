//! Typed template variables.
//!
//! A [`Variable`] describes what a `{name}` placeholder may capture: its
//! [`VariableKind`] selects a character grammar, and the `required` flag
//! decides whether the placeholder may bind to an empty span.

/// HTTP token separators (RFC 7230 `tchar` complement).
const TOKEN_SEPARATORS: &str = "()<>@,;:\\\"/[]?={} \t";

/// Characters allowed in a URI path segment besides ASCII alphanumerics.
const SEGMENT_EXTRA: &str = "-._~%!$&'()*+,;=:@";

/// The grammar a variable's captured text must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableKind {
	/// Any sequence of characters.
	All,
	/// ASCII letters.
	Alpha,
	/// ASCII letters and digits.
	AlphaDigit,
	/// Free comment text; parentheses must be balanced, so both
	/// `Windows NT 10.0; x64` and `(X11; Linux)` are valid comments.
	Comment,
	/// One `;`-delimited attribute of a comment, such as `rv:109.0` or `U`.
	CommentAttribute,
	/// ASCII digits.
	Digit,
	/// An HTTP token: visible ASCII except separators.
	Token,
	/// One URI path segment (no `/`, `?` or `#`).
	UriSegment,
	/// Text matching a caller supplied regular expression. The expression
	/// is anchored at both ends when the template is compiled.
	Custom(String),
}

impl VariableKind {
	/// Returns whether `c` may appear in text of this kind.
	///
	/// `Custom` accepts every character here; its expression is checked on
	/// whole spans by the matcher.
	pub(crate) fn accepts(&self, c: char) -> bool {
		match self {
			Self::All | Self::Custom(_) => true,
			Self::Alpha => c.is_ascii_alphabetic(),
			Self::AlphaDigit => c.is_ascii_alphanumeric(),
			Self::Digit => c.is_ascii_digit(),
			Self::Token => c.is_ascii_graphic() && !TOKEN_SEPARATORS.contains(c),
			Self::Comment => !c.is_control() || c == '\t',
			Self::CommentAttribute => !c.is_control() && !matches!(c, '(' | ')' | ';'),
			Self::UriSegment => c.is_ascii_alphanumeric() || SEGMENT_EXTRA.contains(c),
		}
	}

	/// Returns whether this kind places no restriction on the captured text.
	pub fn is_unconstrained(&self) -> bool {
		matches!(self, Self::All)
	}
}

/// A named placeholder's type and flags.
///
/// # Examples
///
/// ```
/// use conneg_template::{Variable, VariableKind};
///
/// let name = Variable::new(VariableKind::Token);
/// assert!(name.is_required());
///
/// let trailing = Variable::facultative(VariableKind::All);
/// assert!(!trailing.is_required());
/// assert_eq!(trailing.default_value(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
	kind: VariableKind,
	required: bool,
	default_value: Option<String>,
}

impl Variable {
	/// Creates a required variable of the given kind.
	pub fn new(kind: VariableKind) -> Self {
		Self {
			kind,
			required: true,
			default_value: None,
		}
	}

	/// Creates a facultative variable, which may bind to an empty span.
	pub fn facultative(kind: VariableKind) -> Self {
		Self {
			kind,
			required: false,
			default_value: None,
		}
	}

	/// Creates a required variable capturing text matched by `pattern`.
	///
	/// The expression is validated when a template referencing the variable
	/// is compiled.
	pub fn custom(pattern: impl Into<String>) -> Self {
		Self::new(VariableKind::Custom(pattern.into()))
	}

	/// Sets whether the variable must bind to a non-empty span.
	pub fn with_required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	/// Sets the value bound when a facultative variable matches nothing.
	pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
		self.default_value = Some(value.into());
		self
	}

	pub fn kind(&self) -> &VariableKind {
		&self.kind
	}

	pub fn is_required(&self) -> bool {
		self.required
	}

	pub fn default_value(&self) -> Option<&str> {
		self.default_value.as_deref()
	}
}
