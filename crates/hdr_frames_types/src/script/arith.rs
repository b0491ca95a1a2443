//! Flat arithmetic over numeric literals and `+ - * /`.
//!
//! Input text must already be free of identifiers and parentheses. Reduction
//! rewrites the leftmost `a op b` pair in place until no operator pairs remain:
//! first for `*` and `/`, then for `+` and `-`. What is left must parse as a
//! single number.

use crate::error::ScriptError;

/// Numeric literal accepted inside script expressions.
pub(crate) const NUMBER: &str = r"-?\d+\.?\d*(?:e[+-]?\d+)?";

static_regex!(PRODUCT, &format!(r"({NUMBER})\s*([*/])\s*({NUMBER})"));
static_regex!(SUM, &format!(r"({NUMBER})\s*([+-])\s*({NUMBER})"));

/// Evaluates a flat expression, reporting why it failed.
///
/// # Examples
///
/// ```
/// use hdr_frames_types::script::try_evaluate_flat;
///
/// assert_eq!(try_evaluate_flat("2 + 3 * 4"), Ok(14.0));
/// assert!(try_evaluate_flat("5 / 0").is_err());
/// ```
pub fn try_evaluate_flat(expr: &str) -> Result<f64, ScriptError> {
	let reduced = reduce(expr, &PRODUCT)?;
	let reduced = reduce(&reduced, &SUM)?;
	let trimmed = reduced.trim();
	trimmed.parse::<f64>().map_err(|_| ScriptError::NotANumber(trimmed.to_owned()))
}

/// Evaluates a flat expression, returning `None` on any failure.
pub fn evaluate_flat(expr: &str) -> Option<f64> {
	try_evaluate_flat(expr).ok()
}

/// Renders an intermediate value so that [`NUMBER`] matches it again.
pub(crate) fn format_number(value: f64) -> String {
	format!("{value}")
}

fn reduce(text: &str, pattern: &regex::Regex) -> Result<String, ScriptError> {
	let mut text = text.to_owned();
	while let Some(caps) = pattern.captures(&text) {
		let Some(whole) = caps.get(0) else {
			break;
		};
		let lhs = parse_literal(&caps[1])?;
		let rhs = parse_literal(&caps[3])?;
		let value = match &caps[2] {
			"*" => lhs * rhs,
			"/" => {
				if rhs == 0.0 {
					return Err(ScriptError::DivisionByZero {
						numerator: lhs,
					});
				}
				lhs / rhs
			}
			"+" => lhs + rhs,
			_ => lhs - rhs,
		};
		let range = whole.range();
		text.replace_range(range, &format_number(value));
	}
	Ok(text)
}

fn parse_literal(literal: &str) -> Result<f64, ScriptError> {
	literal.parse::<f64>().map_err(|_| ScriptError::NotANumber(literal.to_owned()))
}
