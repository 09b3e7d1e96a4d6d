//! Backtracking evaluation of compiled templates.
//!
//! The evaluator walks the node sequence with a cursor into the input.
//! Literals must appear verbatim at the cursor; variables try each span
//! their grammar allows, in the order chosen at compile time, and keep the
//! first one for which the rest of the pattern still matches. Failed
//! `(node, cursor)` states are remembered, which bounds the work to a
//! polynomial in the pattern and input sizes.

use std::collections::{HashMap, HashSet};

use crate::template::{MatchMode, Node, Slot, SpanOrder, Template};
use crate::variable::VariableKind;

/// The outcome of a successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMatch {
	bindings: HashMap<String, String>,
	matched_len: usize,
	matched_chars: usize,
}

impl TemplateMatch {
	/// Returns the value bound to `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.bindings.get(name).map(String::as_str)
	}

	pub fn bindings(&self) -> &HashMap<String, String> {
		&self.bindings
	}

	pub fn into_bindings(self) -> HashMap<String, String> {
		self.bindings
	}

	/// Number of input bytes covered by the match.
	pub fn matched_len(&self) -> usize {
		self.matched_len
	}

	/// Number of input characters covered by the match.
	pub fn matched_chars(&self) -> usize {
		self.matched_chars
	}
}

pub(crate) fn evaluate(template: &Template, input: &str) -> Option<TemplateMatch> {
	let mut walker = Walker {
		nodes: template.nodes(),
		input,
		mode: template.mode(),
		failed: HashSet::new(),
		spans: Vec::new(),
	};
	let end = walker.walk(0, 0)?;

	let mut bindings = HashMap::with_capacity(walker.spans.len());
	for (node, start, stop) in walker.spans {
		if let Node::Variable(slot) = &walker.nodes[node] {
			let value = if start == stop {
				slot.variable.default_value().unwrap_or_default()
			} else {
				&input[start..stop]
			};
			bindings.insert(slot.name.clone(), value.to_string());
		}
	}

	Some(TemplateMatch {
		bindings,
		matched_len: end,
		matched_chars: input[..end].chars().count(),
	})
}

struct Walker<'t, 'i> {
	nodes: &'t [Node],
	input: &'i str,
	mode: MatchMode,
	failed: HashSet<(usize, usize)>,
	/// Bound spans as `(node index, start, end)`, in pattern order.
	spans: Vec<(usize, usize, usize)>,
}

impl Walker<'_, '_> {
	fn walk(&mut self, node: usize, cursor: usize) -> Option<usize> {
		if self.failed.contains(&(node, cursor)) {
			return None;
		}
		let result = self.step(node, cursor);
		if result.is_none() {
			self.failed.insert((node, cursor));
		}
		result
	}

	fn step(&mut self, node: usize, cursor: usize) -> Option<usize> {
		let nodes = self.nodes;
		let Some(current) = nodes.get(node) else {
			return match self.mode {
				MatchMode::Equals if cursor != self.input.len() => None,
				_ => Some(cursor),
			};
		};

		match current {
			Node::Literal { text, elidable } => {
				if self.input[cursor..].starts_with(text.as_str())
					&& let Some(end) = self.walk(node + 1, cursor + text.len())
				{
					return Some(end);
				}
				if *elidable {
					// Skip the separator and bind the following variable empty.
					self.spans.push((node + 1, cursor, cursor));
					if let Some(end) = self.walk(node + 2, cursor) {
						return Some(end);
					}
					self.spans.pop();
				}
				None
			}
			Node::Variable(slot) => {
				for stop in candidate_ends(slot, self.input, cursor) {
					self.spans.push((node, cursor, stop));
					if let Some(end) = self.walk(node + 1, stop) {
						return Some(end);
					}
					self.spans.pop();
				}
				None
			}
		}
	}
}

/// Lists the span ends a variable may bind to from `start`, in try order.
fn candidate_ends(slot: &Slot, input: &str, start: usize) -> Vec<usize> {
	let kind = slot.variable.kind();
	let rest = &input[start..];
	let mut ends = Vec::new();

	if !slot.variable.is_required() {
		ends.push(start);
	}

	let mut depth: usize = 0;
	for (offset, c) in rest.char_indices() {
		if !kind.accepts(c) {
			break;
		}
		let stop = start + offset + c.len_utf8();
		match kind {
			VariableKind::Comment => {
				match c {
					'(' => depth += 1,
					')' if depth == 0 => break,
					')' => depth -= 1,
					_ => {}
				}
				if depth == 0 {
					ends.push(stop);
				}
			}
			VariableKind::Custom(_) => {
				if slot
					.regex
					.as_ref()
					.is_some_and(|regex| regex.is_match(&input[start..stop]))
				{
					ends.push(stop);
				}
			}
			_ => ends.push(stop),
		}
	}

	if slot.order == SpanOrder::Longest {
		ends.reverse();
	}
	ends
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::variable::Variable;
	use rstest::rstest;

	fn agent_template(pattern: &str) -> Template {
		Template::builder(pattern)
			.variable("agentName", Variable::new(VariableKind::Token))
			.variable("agentVersion", Variable::new(VariableKind::Token))
			.variable("agentComment", Variable::facultative(VariableKind::Comment))
			.variable("facultativeData", Variable::facultative(VariableKind::All))
			.build()
			.unwrap()
	}

	#[rstest]
	fn test_token_and_comment() {
		let template = agent_template("{agentName}/{agentVersion} ({agentComment})");
		let found = template
			.matches("Mozilla/5.0 (X11; Linux x86_64)")
			.unwrap();
		assert_eq!(found.get("agentName"), Some("Mozilla"));
		assert_eq!(found.get("agentVersion"), Some("5.0"));
		assert_eq!(found.get("agentComment"), Some("X11; Linux x86_64"));
		assert_eq!(found.matched_chars(), 31);
	}

	#[rstest]
	fn test_facultative_comment_missing() {
		let template = agent_template("{agentName}/{agentVersion} {agentComment}");
		let found = template.matches("Wget/1.21.4").unwrap();
		assert_eq!(found.get("agentName"), Some("Wget"));
		assert_eq!(found.get("agentVersion"), Some("1.21.4"));
		assert_eq!(found.get("agentComment"), Some(""));
	}

	#[rstest]
	fn test_facultative_comment_present() {
		let template = agent_template("{agentName}/{agentVersion} {agentComment}");
		let found = template.matches("Wget/1.21.4 (linux-gnu)").unwrap();
		assert_eq!(found.get("agentComment"), Some("(linux-gnu)"));
	}

	#[rstest]
	fn test_comment_requires_balanced_parentheses() {
		let template = Template::builder("{c}")
			.variable("c", Variable::new(VariableKind::Comment))
			.build()
			.unwrap();
		assert!(template.is_match("(a (b) c)"));
		assert!(!template.is_match("(a (b c)"));
		assert!(!template.is_match("a) b"));
	}

	#[rstest]
	fn test_required_variable_needs_content() {
		let template = agent_template("{agentName}/{agentVersion}");
		assert!(template.matches("curl/").is_none());
		assert!(template.matches("/8.0").is_none());
	}

	#[rstest]
	fn test_consecutive_unconstrained_leftmost_shortest() {
		let template = Template::builder("{a}{b}")
			.variable("a", Variable::new(VariableKind::All))
			.variable("b", Variable::new(VariableKind::All))
			.build()
			.unwrap();
		let found = template.matches("xyz").unwrap();
		assert_eq!(found.get("a"), Some("x"));
		assert_eq!(found.get("b"), Some("yz"));
	}

	#[rstest]
	fn test_unconstrained_backtracks_to_last_separator() {
		let template = Template::builder("{head}-{tail}")
			.variable("head", Variable::new(VariableKind::All))
			.variable("tail", Variable::new(VariableKind::Token))
			.build()
			.unwrap();
		let found = template.matches("a-b-c").unwrap();
		assert_eq!(found.get("head"), Some("a-b"));
		assert_eq!(found.get("tail"), Some("c"));
	}

	#[rstest]
	fn test_custom_variable() {
		let template = Template::builder("/archive/{year}/{slug}")
			.variable("year", Variable::custom("[0-9]{4}"))
			.variable("slug", Variable::new(VariableKind::UriSegment))
			.build()
			.unwrap();
		let found = template.matches("/archive/2008/restlet-1.1").unwrap();
		assert_eq!(found.get("year"), Some("2008"));
		assert!(template.matches("/archive/08/restlet").is_none());
	}

	#[rstest]
	fn test_starts_with_reports_extent() {
		let template = Template::builder("/users/{id}")
			.variable("id", Variable::new(VariableKind::UriSegment))
			.mode(MatchMode::StartsWith)
			.build()
			.unwrap();
		let found = template.matches("/users/123/posts").unwrap();
		assert_eq!(found.get("id"), Some("123"));
		assert_eq!(found.matched_len(), 10);
	}

	#[rstest]
	fn test_default_value_for_empty_binding() {
		let template = Template::builder("{name}{rest}")
			.variable("name", Variable::new(VariableKind::Alpha))
			.variable(
				"rest",
				Variable::facultative(VariableKind::Digit).with_default_value("0"),
			)
			.build()
			.unwrap();
		assert_eq!(template.matches("abc").unwrap().get("rest"), Some("0"));
		assert_eq!(template.matches("abc12").unwrap().get("rest"), Some("12"));
	}

	#[rstest]
	fn test_multibyte_input() {
		let template = Template::builder("{word}!")
			.variable("word", Variable::new(VariableKind::All))
			.build()
			.unwrap();
		let found = template.matches("héllo!").unwrap();
		assert_eq!(found.get("word"), Some("héllo"));
		assert_eq!(found.matched_chars(), 6);
		assert_eq!(found.matched_len(), 7);
	}

	#[rstest]
	fn test_pathological_input_terminates() {
		let template = Template::builder("{a}{b}{c}{d}x")
			.default_variable(Variable::new(VariableKind::All))
			.build()
			.unwrap();
		let input = "y".repeat(200);
		assert!(template.matches(&input).is_none());
	}
}
