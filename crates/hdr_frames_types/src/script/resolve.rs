//! Expression resolution against a function's local variables.

use regex::Regex;

use super::arith::{NUMBER, evaluate_flat, format_number, try_evaluate_flat};
use crate::error::ScriptError;

/// Upper bound on variable-table resolution passes
pub const MAX_RESOLUTION_PASSES: usize = 100;

static_regex!(LINE_COMMENT, r"//.*$");
static_regex!(INNERMOST_GROUP, r"\(([^()]+)\)");
static_regex!(FIRST_NUMBER, &format!("({NUMBER})"));

/// Raw `let NAME = VALUE;` definitions of one function body, in source order.
///
/// Redefining a name keeps its original position and replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
	entries: Vec<(String, String)>,
}

impl VariableTable {
	/// Creates an empty table
	pub fn new() -> Self {
		Self::default()
	}

	/// Collects every `let` line of a function body.
	///
	/// `mut` and type annotations are dropped from the name; the value is the
	/// text between the first `=` and the next `;`.
	pub fn from_body(body: &str) -> Self {
		let mut table = Self::new();
		for line in body.lines() {
			let line = line.trim();
			if !line.starts_with("let ") || !line.contains(';') {
				continue;
			}
			let Some((lhs, rhs)) = line.split_once('=') else {
				continue;
			};
			let mut name = lhs.trim_start_matches("let ").trim();
			name = name.strip_prefix("mut ").map_or(name, str::trim);
			if let Some((bare, _ty)) = name.split_once(':') {
				name = bare.trim();
			}
			let value = rhs.split(';').next().unwrap_or_default().trim();
			if !name.is_empty() {
				table.insert(name, value);
			}
		}
		table
	}

	/// Adds or replaces a definition
	pub fn insert(&mut self, name: impl Into<String>, raw: impl Into<String>) {
		let name = name.into();
		let raw = raw.into();
		match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
			Some(entry) => entry.1 = raw,
			None => self.entries.push((name, raw)),
		}
	}

	/// Raw text bound to `name`
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries.iter().find(|(n, _)| n == name).map(|(_, raw)| raw.as_str())
	}

	/// Iterates definitions in source order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
	}

	/// Number of definitions
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no variable is defined
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for VariableTable {
	fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
		let mut table = Self::new();
		for (name, raw) in iter {
			table.insert(name, raw);
		}
		table
	}
}

/// Per-variant damage multiplier and angle modifier.
///
/// Substituted for the `p.dmg` and `p.angle` placeholders of ammo-type scripts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantModifier {
	/// Replaces `p.dmg`
	pub damage_multiplier: f64,
	/// Replaces `p.angle`
	pub angle_modifier: f64,
}

impl Default for VariantModifier {
	fn default() -> Self {
		Self {
			damage_multiplier: 1.05,
			angle_modifier: 0.0,
		}
	}
}

#[derive(Debug, Clone)]
struct WordPattern {
	name: String,
	pattern: Regex,
}

impl WordPattern {
	fn new(name: &str) -> Option<Self> {
		let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(name))).ok()?;
		Some(Self {
			name: name.to_owned(),
			pattern,
		})
	}

	fn substitute(&self, text: &str, value: f64) -> String {
		self.pattern.replace_all(text, format_number(value).as_str()).into_owned()
	}
}

/// Resolves parameter expressions against a [`VariableTable`].
///
/// The variable cache is computed once on construction. Variables are settled
/// in passes, each one evaluating every definition whose references are all
/// known, until a pass makes no progress or [`MAX_RESOLUTION_PASSES`] is hit.
/// Cyclic or unparseable definitions stay unresolved.
///
/// # Examples
///
/// ```
/// use hdr_frames_types::script::{Resolver, VariableTable};
///
/// let vars: VariableTable = [("X", "Y*2"), ("Y", "3")].into_iter().collect();
/// let resolver = Resolver::new(&vars);
/// assert_eq!(resolver.resolve("X"), Some(6.0));
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
	resolved: Vec<(WordPattern, f64)>,
}

impl Resolver {
	/// Settles every resolvable variable of `variables`
	pub fn new(variables: &VariableTable) -> Self {
		let patterns: Vec<(WordPattern, String)> = variables
			.iter()
			.filter_map(|(name, raw)| {
				WordPattern::new(name).map(|p| (p, strip_comment(raw).to_owned()))
			})
			.collect();
		let mut settled = vec![false; patterns.len()];
		let mut resolver = Self {
			resolved: Vec::new(),
		};

		for _ in 0..MAX_RESOLUTION_PASSES {
			let mut progressed = false;
			for (index, (word, raw)) in patterns.iter().enumerate() {
				if settled[index] {
					continue;
				}
				let text = resolver.substitute(raw);
				let blocked = patterns.iter().enumerate().any(|(other, (other_word, _))| {
					other != index && !settled[other] && other_word.pattern.is_match(&text)
				});
				if blocked {
					continue;
				}
				if let Ok(value) = peel_and_evaluate(&text) {
					resolver.resolved.push((word.clone(), value));
					settled[index] = true;
					progressed = true;
				}
			}
			if !progressed {
				break;
			}
		}
		resolver
	}

	/// A resolver with no variables
	pub fn empty() -> Self {
		Self {
			resolved: Vec::new(),
		}
	}

	/// Settled value of a variable
	pub fn value_of(&self, name: &str) -> Option<f64> {
		self.resolved.iter().find(|(w, _)| w.name == name).map(|(_, v)| *v)
	}

	/// Number of settled variables
	pub fn settled_count(&self) -> usize {
		self.resolved.len()
	}

	/// Resolves `expr` to a number.
	///
	/// Comments are stripped, known variables substituted, parenthesised groups
	/// reduced innermost first and the remainder evaluated. When any of that
	/// fails the first numeric literal of the untouched input is returned.
	pub fn resolve(&self, expr: &str) -> Option<f64> {
		self.try_resolve(expr).ok().or_else(|| first_number(expr))
	}

	/// Resolves `expr` without the first-literal fallback
	pub fn try_resolve(&self, expr: &str) -> Result<f64, ScriptError> {
		let text = self.substitute(strip_comment(expr.trim()));
		peel_and_evaluate(&text)
	}

	/// Resolves `expr` after substituting the variant placeholders
	pub fn resolve_enhanced(&self, expr: &str, modifier: &VariantModifier) -> Option<f64> {
		let text = strip_comment(expr.trim());
		if !text.contains("p.") {
			return self.resolve(text);
		}
		let text = text
			.replace("p.dmg", &format_number(modifier.damage_multiplier))
			.replace("p.angle", &format_number(modifier.angle_modifier));
		self.resolve(&text)
	}

	/// Resolves with the variant placeholders when a modifier is present
	pub fn resolve_with(&self, expr: &str, modifier: Option<&VariantModifier>) -> Option<f64> {
		match modifier {
			Some(modifier) => self.resolve_enhanced(expr, modifier),
			None => self.resolve(expr),
		}
	}

	fn substitute(&self, text: &str) -> String {
		self.resolved.iter().fold(text.to_owned(), |acc, (word, value)| word.substitute(&acc, *value))
	}
}

/// Resolves `expr` against a freshly settled `variables` table
pub fn resolve(expr: &str, variables: &VariableTable) -> Option<f64> {
	Resolver::new(variables).resolve(expr)
}

/// Resolves with ammo-variant placeholders substituted
pub fn resolve_enhanced(expr: &str, variables: &VariableTable, modifier: &VariantModifier) -> Option<f64> {
	Resolver::new(variables).resolve_enhanced(expr, modifier)
}

/// Drops a trailing `//` comment
pub fn strip_comment(text: &str) -> &str {
	match LINE_COMMENT.find(text) {
		Some(m) => text[..m.start()].trim(),
		None => text.trim(),
	}
}

fn peel_and_evaluate(text: &str) -> Result<f64, ScriptError> {
	let mut text = text.to_owned();
	while text.contains('(') {
		let Some(caps) = INNERMOST_GROUP.captures(&text) else {
			break;
		};
		let Some(whole) = caps.get(0) else {
			break;
		};
		let inner = &caps[1];
		let value = evaluate_flat(inner).ok_or_else(|| ScriptError::UnresolvedGroup(inner.to_owned()))?;
		let range = whole.range();
		text.replace_range(range, &format_number(value));
	}
	try_evaluate_flat(&text)
}

fn first_number(text: &str) -> Option<f64> {
	FIRST_NUMBER.captures(text).and_then(|caps| caps[1].parse().ok())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn table(pairs: &[(&str, &str)]) -> VariableTable {
		pairs.iter().copied().collect()
	}

	#[test]
	fn test_grouped_variables() {
		let vars = table(&[("A", "1"), ("B", "2")]);
		assert_eq!(resolve("(A + B) * 2", &vars), Some(6.0));
	}

	#[test]
	fn test_chained_variables() {
		let vars = table(&[("X", "Y*2"), ("Y", "3")]);
		assert_eq!(resolve("X", &vars), Some(6.0));
		assert_eq!(Resolver::new(&vars).value_of("X"), Some(6.0));
	}

	#[test]
	fn test_fallback_first_literal() {
		assert_eq!(resolve("weird[garbage]12.5", &VariableTable::new()), Some(12.5));
		assert_eq!(resolve("no digits here", &VariableTable::new()), None);
	}

	#[test]
	fn test_whole_word_substitution() {
		let vars = table(&[("dmg", "4.0"), ("dmg_mul", "2.0")]);
		assert_eq!(resolve("dmg * dmg_mul", &vars), Some(8.0));
	}

	#[test]
	fn test_comments_are_ignored() {
		let vars = table(&[("size", "3.0 // tuned")]);
		assert_eq!(resolve("size + 1 // was 5", &vars), Some(4.0));
	}

	#[test]
	fn test_nested_groups() {
		assert_eq!(resolve("((1 + 2) * (3 + 1)) / 2", &VariableTable::new()), Some(6.0));
	}

	#[test]
	fn test_parenthesised_variable_definition() {
		let vars = table(&[("base", "(2 + 3) * 2"), ("total", "base - 1")]);
		assert_eq!(resolve("total", &vars), Some(9.0));
	}

	#[test]
	fn test_cycle_terminates() {
		let vars = table(&[("a", "b + 1"), ("b", "a + 1")]);
		let resolver = Resolver::new(&vars);
		assert_eq!(resolver.settled_count(), 0);
		// falls back to the first literal of the raw parameter
		assert_eq!(resolver.resolve("a + 7"), Some(7.0));
	}

	#[test]
	fn test_division_by_zero_falls_back() {
		assert_eq!(resolve("4 / 0", &VariableTable::new()), Some(4.0));
	}

	#[test]
	fn test_enhanced_placeholders() {
		let vars = table(&[("base", "10.0")]);
		let modifier = VariantModifier {
			damage_multiplier: 1.2,
			angle_modifier: 8.0,
		};
		assert_eq!(resolve_enhanced("base * p.dmg", &vars, &modifier), Some(12.0));
		assert_eq!(resolve_enhanced("45 + p.angle", &vars, &modifier), Some(53.0));
		assert_eq!(resolve_enhanced("base", &vars, &modifier), Some(10.0));
	}

	#[test]
	fn test_variable_table_from_body() {
		let body = "\n    let dmg = 12.0; // sweet\n    let mut angle: f32 = 45.0;\n    frame(lua_state, 5.0);\n";
		let vars = VariableTable::from_body(body);
		assert_eq!(vars.len(), 2);
		assert_eq!(vars.get("dmg"), Some("12.0"));
		assert_eq!(vars.get("angle"), Some("45.0"));
	}
}
