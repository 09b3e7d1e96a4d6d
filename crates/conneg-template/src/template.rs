//! Pattern compilation.
//!
//! A pattern such as `{agentName}/{agentVersion} ({agentComment})` is split
//! into literal and variable nodes. Each variable reference is resolved
//! against the registry handed to the builder; the resolved variables are
//! copied into the template, so later changes to the registry never affect
//! an already compiled template.

use std::collections::HashMap;
use std::fmt;

use regex::Regex;

use crate::error::{TemplateError, TemplateResult};
use crate::matcher::{self, TemplateMatch};
use crate::variable::{Variable, VariableKind};

/// Maximum accepted pattern length in bytes.
const MAX_PATTERN_LENGTH: usize = 4096;

/// How much of the input a template must cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
	/// The whole input must be described by the pattern.
	#[default]
	Equals,
	/// A prefix of the input must be described by the pattern.
	StartsWith,
}

/// The order in which a variable's candidate spans are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpanOrder {
	Shortest,
	Longest,
}

/// A variable slot with its grammar resolved.
#[derive(Debug, Clone)]
pub(crate) struct Slot {
	pub(crate) name: String,
	pub(crate) variable: Variable,
	/// Anchored expression for `VariableKind::Custom`.
	pub(crate) regex: Option<Regex>,
	pub(crate) order: SpanOrder,
}

#[derive(Debug, Clone)]
pub(crate) enum Node {
	Literal {
		text: String,
		/// Whitespace-only literal directly before a facultative variable.
		/// It may be skipped when that variable binds empty.
		elidable: bool,
	},
	Variable(Slot),
}

/// A compiled pattern, ready to be matched against many inputs.
///
/// Templates are immutable once built and can be shared between threads.
///
/// # Examples
///
/// ```
/// use conneg_template::{Template, Variable, VariableKind};
///
/// let template = Template::builder("{agentName}/{agentVersion}")
/// 	.variable("agentName", Variable::new(VariableKind::Token))
/// 	.variable("agentVersion", Variable::new(VariableKind::Token))
/// 	.build()
/// 	.unwrap();
///
/// let found = template.matches("curl/8.4.0").unwrap();
/// assert_eq!(found.get("agentName"), Some("curl"));
/// assert_eq!(found.get("agentVersion"), Some("8.4.0"));
/// assert!(template.matches("curl 8.4.0").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Template {
	pattern: String,
	nodes: Vec<Node>,
	mode: MatchMode,
}

impl Template {
	/// Compiles `pattern` against a registry of variables in
	/// [`MatchMode::Equals`] mode.
	///
	/// # Errors
	///
	/// Fails on unbalanced delimiters, unknown variable references and
	/// custom variables whose expression does not compile.
	pub fn compile(pattern: &str, variables: &HashMap<String, Variable>) -> TemplateResult<Self> {
		Self::builder(pattern)
			.variables(variables.iter().map(|(k, v)| (k.clone(), v.clone())))
			.build()
	}

	/// Starts building a template for `pattern`.
	pub fn builder(pattern: impl Into<String>) -> TemplateBuilder {
		TemplateBuilder::new(pattern)
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	pub fn mode(&self) -> MatchMode {
		self.mode
	}

	/// Returns the referenced variable names in pattern order.
	pub fn variable_names(&self) -> impl Iterator<Item = &str> {
		self.nodes.iter().filter_map(|node| match node {
			Node::Variable(slot) => Some(slot.name.as_str()),
			Node::Literal { .. } => None,
		})
	}

	pub(crate) fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Matches `input` against the template.
	///
	/// Returns `None` when the input is not described by the pattern. A
	/// variable referenced more than once keeps its last binding.
	pub fn matches(&self, input: &str) -> Option<TemplateMatch> {
		let found = matcher::evaluate(self, input);
		tracing::trace!(
			pattern = %self.pattern,
			input,
			matched = found.is_some(),
			"template match attempt"
		);
		found
	}

	/// Returns whether `input` is described by the pattern.
	pub fn is_match(&self, input: &str) -> bool {
		matcher::evaluate(self, input).is_some()
	}

	/// Substitutes `values` into the pattern.
	///
	/// Facultative variables without a value take their default value, or
	/// nothing. Returns `None` when a required variable has no value.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_template::{Template, Variable, VariableKind};
	/// use std::collections::HashMap;
	///
	/// let template = Template::builder("/users/{id}/")
	/// 	.variable("id", Variable::new(VariableKind::UriSegment))
	/// 	.build()
	/// 	.unwrap();
	///
	/// let mut values = HashMap::new();
	/// values.insert("id".to_string(), "42".to_string());
	/// assert_eq!(template.format(&values), Some("/users/42/".to_string()));
	/// assert_eq!(template.format(&HashMap::new()), None);
	/// ```
	pub fn format(&self, values: &HashMap<String, String>) -> Option<String> {
		let mut result = String::with_capacity(self.pattern.len());
		for node in &self.nodes {
			match node {
				Node::Literal { text, .. } => result.push_str(text),
				Node::Variable(slot) => match values.get(&slot.name) {
					Some(value) => result.push_str(value),
					None if slot.variable.is_required() => return None,
					None => result.push_str(slot.variable.default_value().unwrap_or_default()),
				},
			}
		}
		Some(result)
	}
}

impl PartialEq for Template {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern && self.mode == other.mode
	}
}

impl fmt::Display for Template {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

/// Builder registering variables before a pattern is compiled.
#[derive(Debug, Clone)]
pub struct TemplateBuilder {
	pattern: String,
	variables: HashMap<String, Variable>,
	default_variable: Option<Variable>,
	mode: MatchMode,
}

impl TemplateBuilder {
	fn new(pattern: impl Into<String>) -> Self {
		Self {
			pattern: pattern.into(),
			variables: HashMap::new(),
			default_variable: None,
			mode: MatchMode::Equals,
		}
	}

	/// Registers a variable under `name`, replacing any previous entry.
	pub fn variable(mut self, name: impl Into<String>, variable: Variable) -> Self {
		self.variables.insert(name.into(), variable);
		self
	}

	/// Registers several variables at once.
	pub fn variables<I, S>(mut self, variables: I) -> Self
	where
		I: IntoIterator<Item = (S, Variable)>,
		S: Into<String>,
	{
		self.variables
			.extend(variables.into_iter().map(|(name, v)| (name.into(), v)));
		self
	}

	/// Uses `variable` for references that are not registered, instead of
	/// failing with [`TemplateError::UnknownVariable`].
	pub fn default_variable(mut self, variable: Variable) -> Self {
		self.default_variable = Some(variable);
		self
	}

	pub fn mode(mut self, mode: MatchMode) -> Self {
		self.mode = mode;
		self
	}

	/// Compiles the pattern.
	pub fn build(self) -> TemplateResult<Template> {
		if self.pattern.len() > MAX_PATTERN_LENGTH {
			return Err(TemplateError::PatternTooLong {
				length: self.pattern.len(),
				max: MAX_PATTERN_LENGTH,
			});
		}

		let mut nodes = Vec::new();
		for part in split_pattern(&self.pattern)? {
			match part {
				Part::Literal(text) => nodes.push(Node::Literal {
					text: text.to_string(),
					elidable: false,
				}),
				Part::Reference(name) => {
					let variable = self
						.variables
						.get(name)
						.or(self.default_variable.as_ref())
						.ok_or_else(|| TemplateError::UnknownVariable(name.to_string()))?
						.clone();
					let regex = compile_custom(name, variable.kind())?;
					nodes.push(Node::Variable(Slot {
						name: name.to_string(),
						variable,
						regex,
						order: SpanOrder::Shortest,
					}));
				}
			}
		}
		resolve_span_orders(&mut nodes);

		Ok(Template {
			pattern: self.pattern,
			nodes,
			mode: self.mode,
		})
	}
}

enum Part<'p> {
	Literal(&'p str),
	Reference(&'p str),
}

fn split_pattern(pattern: &str) -> TemplateResult<Vec<Part<'_>>> {
	let mut parts = Vec::new();
	let mut literal_start = 0;
	let mut open: Option<usize> = None;

	for (index, c) in pattern.char_indices() {
		match (c, open) {
			('{', None) => {
				if literal_start < index {
					parts.push(Part::Literal(&pattern[literal_start..index]));
				}
				open = Some(index);
			}
			('{', Some(_)) | ('}', None) => {
				return Err(TemplateError::UnbalancedDelimiter { position: index });
			}
			('}', Some(start)) => {
				let name = &pattern[start + 1..index];
				if name.trim().is_empty() {
					return Err(TemplateError::EmptyVariableName { position: start });
				}
				parts.push(Part::Reference(name));
				open = None;
				literal_start = index + 1;
			}
			_ => {}
		}
	}

	if let Some(start) = open {
		return Err(TemplateError::UnbalancedDelimiter { position: start });
	}
	if literal_start < pattern.len() {
		parts.push(Part::Literal(&pattern[literal_start..]));
	}
	Ok(parts)
}

fn compile_custom(name: &str, kind: &VariableKind) -> TemplateResult<Option<Regex>> {
	let VariableKind::Custom(expression) = kind else {
		return Ok(None);
	};
	Regex::new(&format!("^(?:{})$", expression))
		.map(Some)
		.map_err(|source| TemplateError::InvalidCustomPattern {
			name: name.to_string(),
			source,
		})
}

/// Decides the span order of every variable and marks elidable literals.
///
/// Bounded grammars bind the shortest span, unconstrained and facultative
/// variables the longest. A variable directly followed by an unconstrained
/// variable binds the shortest span, and the last node always binds the
/// longest.
fn resolve_span_orders(nodes: &mut [Node]) {
	let count = nodes.len();
	for index in 0..count {
		let next_is_unconstrained = matches!(
			nodes.get(index + 1),
			Some(Node::Variable(next)) if next.variable.kind().is_unconstrained()
		);
		let next_is_facultative = matches!(
			nodes.get(index + 1),
			Some(Node::Variable(next)) if !next.variable.is_required()
		);

		match &mut nodes[index] {
			Node::Variable(slot) => {
				let greedy = slot.variable.kind().is_unconstrained() || !slot.variable.is_required();
				slot.order = if index + 1 == count {
					SpanOrder::Longest
				} else if next_is_unconstrained {
					SpanOrder::Shortest
				} else if greedy {
					SpanOrder::Longest
				} else {
					SpanOrder::Shortest
				};
			}
			Node::Literal { text, elidable } => {
				*elidable = next_is_facultative && text.chars().all(char::is_whitespace);
			}
		}
	}
}
