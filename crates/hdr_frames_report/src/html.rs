//! HTML escaping and the shared page shell.

use std::fmt::{self, Write};

use chrono::NaiveDateTime;
use hdr_frames_types::orchestrator::RowNote;

use crate::assets::{SCRIPT, STYLE};

/// Format of the "Generated on" footer
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Escape text for element content and quoted attributes.
///
/// # Examples
///
/// ```
/// use hdr_frames_report::html::escape;
///
/// assert_eq!(escape("Mr. Game & Watch"), "Mr. Game &amp; Watch");
/// assert_eq!(escape("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
/// ```
pub fn escape(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

/// Head, stylesheet, script and the opening of the page container
pub(crate) fn open(out: &mut String, title: &str, subtitle: Option<&str>) -> fmt::Result {
	let title = escape(title);
	writeln!(out, "<!DOCTYPE html>")?;
	writeln!(out, "<html lang=\"en\">")?;
	writeln!(out, "<head>")?;
	writeln!(out, "    <meta charset=\"UTF-8\">")?;
	writeln!(out, "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">")?;
	writeln!(out, "    <title>{title} - Attack Data</title>")?;
	writeln!(out, "    <style>{STYLE}    </style>")?;
	writeln!(out, "    <script>{SCRIPT}    </script>")?;
	writeln!(out, "</head>")?;
	writeln!(out, "<body>")?;
	writeln!(out, "    <a href=\"index.html\" class=\"return-button\">Return to Index</a>")?;
	writeln!(out, "    <div class=\"container\">")?;
	writeln!(out, "        <h1>{title}</h1>")?;
	if let Some(subtitle) = subtitle {
		writeln!(out, "        <p style=\"text-align: center; color: #666;\">{}</p>", escape(subtitle))?;
	}
	Ok(())
}

/// Timestamp footer and the closing tags
pub(crate) fn close(out: &mut String, generated: NaiveDateTime) -> fmt::Result {
	writeln!(out, "        <div class=\"timestamp\">")?;
	writeln!(out, "            Generated on: {}", generated.format(TIMESTAMP_FORMAT))?;
	writeln!(out, "        </div>")?;
	writeln!(out, "    </div>")?;
	writeln!(out, "</body>")?;
	writeln!(out, "</html>")
}

/// Sortable header cell
pub(crate) fn sortable_header(out: &mut String, label: &str) -> fmt::Result {
	writeln!(
		out,
		"                    <th class=\"sortable\">{} <span class=\"sort-icon\">&#x2195;</span></th>",
		escape(label)
	)
}

/// Tooltip body: bold title, then one `label: value` line each
pub(crate) fn tooltip(note: &RowNote) -> String {
	let mut html = format!("<strong>{}</strong>", escape(&note.title));
	for (label, value) in &note.lines {
		html.push_str(&format!("<br><em>{}:</em> {}", escape(label), escape(value)));
	}
	html
}

/// Header line and name grid of a character list; nothing when empty
pub(crate) fn name_list(out: &mut String, class: &str, heading: &str, names: &[String]) -> fmt::Result {
	if names.is_empty() {
		return Ok(());
	}
	let mut sorted: Vec<&String> = names.iter().collect();
	sorted.sort();

	writeln!(out, "        <div class=\"{class}\">")?;
	writeln!(out, "            <h3>{heading} ({})</h3>", sorted.len())?;
	writeln!(out, "            <div class=\"not-found-list\">")?;
	for name in sorted {
		writeln!(out, "                <div>{}</div>", escape(name))?;
	}
	writeln!(out, "            </div>")?;
	writeln!(out, "        </div>")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tooltip_escapes_lines() {
		let note = RowNote::new("Red Pikmin - Up Smash").line("Base Damage", "14.0").line("Note", "a < b");
		assert_eq!(
			tooltip(&note),
			"<strong>Red Pikmin - Up Smash</strong><br><em>Base Damage:</em> 14.0<br><em>Note:</em> a &lt; b"
		);
	}

	#[test]
	fn test_name_list_sorted() {
		let mut out = String::new();
		name_list(&mut out, "not-found", "Characters Not Found", &["Wario".to_owned(), "Bowser".to_owned()]).unwrap();
		assert!(out.contains("Characters Not Found (2)"));
		assert!(out.find("Bowser").unwrap() < out.find("Wario").unwrap());

		let mut empty = String::new();
		name_list(&mut empty, "not-found", "Characters Not Found", &[]).unwrap();
		assert!(empty.is_empty());
	}

	#[test]
	fn test_shell() {
		let generated = NaiveDateTime::parse_from_str("2024-05-01 13:45:00", TIMESTAMP_FORMAT).unwrap();
		let mut out = String::new();
		open(&mut out, "Grabs & Throws", None).unwrap();
		close(&mut out, generated).unwrap();
		assert!(out.contains("<title>Grabs &amp; Throws - Attack Data</title>"));
		assert!(out.contains("Generated on: 2024-05-01 13:45:00"));
		assert!(out.trim_end().ends_with("</html>"));
	}
}
