//! Function location and line-level helpers for script bodies.

use std::ops::Range;

use regex::Regex;

/// Text of the body of `name`, between its outer braces.
///
/// Functions are matched by their `unsafe extern "C" fn NAME(agent: &mut L2CAgentBase) {`
/// signature. Throw and pummel functions are also looked up under their
/// undecorated names (`game_throwf` as `Throwf`, then `throwf`). Bodies that
/// are empty or never close yield `None`.
pub fn locate_function<'a>(source: &'a str, name: &str) -> Option<&'a str> {
	let start = find_signature(source, name).or_else(|| {
		let lowered = name.to_lowercase();
		if !lowered.contains("throw") && !lowered.contains("catchattack") {
			return None;
		}
		let bare = name.replace("game_", "");
		[capitalize(&bare), bare].iter().find_map(|alt| find_signature(source, alt))
	})?;

	braced_body(source, start)
}

/// Text of the first braced body following `name(`.
///
/// Looser than [`locate_function`]: any call or definition of `name` matches,
/// which suits dumped scripts whose signatures differ.
pub fn locate_loose<'a>(source: &'a str, name: &str) -> Option<&'a str> {
	let pattern = format!(r"{}\s*\(", regex::escape(name));
	let start = Regex::new(&pattern).ok()?.find(source)?.start();
	braced_body(source, start)
}

/// Body of the first brace pair opening at or after `start`
fn braced_body(source: &str, start: usize) -> Option<&str> {
	let open = start + source[start..].find('{')? + 1;
	let mut depth = 1usize;
	for (offset, ch) in source[open..].char_indices() {
		match ch {
			'{' => depth += 1,
			'}' => {
				depth -= 1;
				if depth == 0 {
					return (offset > 0).then(|| &source[open..open + offset]);
				}
			}
			_ => {}
		}
	}
	None
}

fn find_signature(source: &str, name: &str) -> Option<usize> {
	let pattern = format!(
		r#"unsafe extern "C" fn {}\s*\(\s*agent\s*:\s*&mut\s+L2CAgentBase\s*\)\s*\{{"#,
		regex::escape(name)
	);
	Regex::new(&pattern).ok()?.find(source).map(|m| m.start())
}

/// Uppercases the first character and lowercases the rest
fn capitalize(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
		None => String::new(),
	}
}

/// Splits call arguments on commas outside parentheses.
///
/// # Examples
///
/// ```
/// use hdr_frames_types::script::split_params;
///
/// let params = split_params(r#"0, 0, Hash40::new("top"), (dmg * 2.0), 45"#);
/// assert_eq!(params, vec!["0", "0", r#"Hash40::new("top")"#, "(dmg * 2.0)", "45"]);
/// ```
pub fn split_params(raw: &str) -> Vec<String> {
	let mut params = Vec::new();
	let mut depth = 0i32;
	let mut current = String::new();
	for ch in raw.chars() {
		match ch {
			'(' => depth += 1,
			')' => depth -= 1,
			_ => {}
		}
		if ch == ',' && depth == 0 {
			params.push(current.trim().to_owned());
			current.clear();
		} else {
			current.push(ch);
		}
	}
	if !current.is_empty() {
		params.push(current.trim().to_owned());
	}
	params
}

/// Net brace balance of a line
pub fn brace_delta(line: &str) -> i32 {
	line.chars().fold(0, |acc, ch| match ch {
		'{' => acc + 1,
		'}' => acc - 1,
		_ => acc,
	})
}

/// Line indices belonging to the block opened on line `opener`.
///
/// Lines are taken while the running balance, starting at one open brace,
/// stays positive; the line that closes the block is included.
pub fn block_extent(lines: &[&str], opener: usize) -> Range<usize> {
	let start = opener + 1;
	let mut depth = 1;
	let mut end = start;
	while end < lines.len() && depth > 0 {
		depth += brace_delta(lines[end]);
		end += 1;
	}
	start..end.max(start)
}

#[cfg(test)]
mod tests {
	use super::*;

	const SOURCE: &str = r#"
unsafe extern "C" fn game_attack11(agent: &mut L2CAgentBase) {
    let lua_state = agent.lua_state_agent;
    frame(lua_state, 2.0);
    if is_excute(agent) {
        ATTACK(agent, 0, 0, Hash40::new("top"), 3.0, 361, 30, 0, 25, 2.0, 0.0, 6.0, 8.0, None, None, None, 1.0, 1.0);
    }
}

unsafe extern "C" fn Throwf(agent: &mut L2CAgentBase) {
    frame(lua_state, 12.0);
}

unsafe extern "C" fn game_empty(agent: &mut L2CAgentBase) {}
"#;

	#[test]
	fn test_locate_function_body() {
		let body = locate_function(SOURCE, "game_attack11").unwrap();
		assert!(body.contains("frame(lua_state, 2.0);"));
		assert!(body.contains("ATTACK(agent"));
		assert!(!body.contains("Throwf"));
	}

	#[test]
	fn test_locate_throw_alternate() {
		let body = locate_function(SOURCE, "game_throwf").unwrap();
		assert!(body.contains("12.0"));
		assert!(locate_function(SOURCE, "game_attackf").is_none());
	}

	#[test]
	fn test_empty_or_missing_function() {
		assert!(locate_function(SOURCE, "game_empty").is_none());
		assert!(locate_function(SOURCE, "game_attack12").is_none());
		let unterminated = "unsafe extern \"C\" fn game_x(agent: &mut L2CAgentBase) {\n frame(lua_state, 1.0);";
		assert!(locate_function(unterminated, "game_x").is_none());
	}

	#[test]
	fn test_locate_loose() {
		let dump = "Olimar::game_attacks4 ( agent ) {\n frame(lua_state, 9.0);\n if x { y(); }\n}\n";
		let body = locate_loose(dump, "game_attacks4").unwrap();
		assert!(body.contains("frame(lua_state, 9.0);"));
		assert!(body.contains("y();"));
		assert!(locate_loose(dump, "game_attackhi4").is_none());
	}

	#[test]
	fn test_split_params_keeps_nested_commas() {
		let params = split_params("a, f(b, c), d");
		assert_eq!(params, vec!["a", "f(b, c)", "d"]);
		assert!(split_params("").is_empty());
	}

	#[test]
	fn test_block_extent() {
		let lines = ["if x {", "  a();", "  if y {", "  }", "}", "after();"];
		assert_eq!(block_extent(&lines, 0), 1..5);
		assert_eq!(block_extent(&lines, 5), 6..6);
	}

	#[test]
	fn test_capitalize() {
		assert_eq!(capitalize("throwF"), "Throwf");
		assert_eq!(capitalize(""), "");
	}
}
