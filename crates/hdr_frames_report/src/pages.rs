//! Page bodies: one page per move category, the stats page and the index.

use std::{collections::BTreeMap, fmt::Write};

use chrono::NaiveDateTime;
use hdr_frames_types::{
	data::fighter_param::FighterStats,
	moves::{MoveCategory, MoveKind},
	orchestrator::{MoveResult, RunReport},
};

use crate::{
	error::ReportError,
	format::{self, ShieldBand},
	html::{self, escape},
};

/// File name of the stats page
pub const STATS_PAGE: &str = "fighter_stats.html";

/// File name of the index page
pub const INDEX_PAGE: &str = "index.html";

const SUBTITLE: &str = "Attack damage, knockback, and frame data analysis";

const SHIELD_ADVANTAGE_HELP: &str = "Optimal Shield Advantage is calculated assuming you are landing while \
	using the move, entering landing lag on the first possible frame after the moves hitbox comes out. Using \
	aerials in other contexts, such as rising on shield and letting the full animation complete, is not \
	accounted for here and cannot be calculated algorithmically at this time.";

const GRAB_KINDS: [MoveKind; 3] = [MoveKind::Grab, MoveKind::DashGrab, MoveKind::PivotGrab];

/// Sections reachable from the grab table's quick navigation
const GRAB_NAV: [(&str, &str); 6] = [
	("grabs", "Grabs"),
	("pummel", "Pummel"),
	("fthrow", "Forward Throw"),
	("bthrow", "Back Throw"),
	("uthrow", "Up Throw"),
	("dthrow", "Down Throw"),
];

const STATS_COLUMNS: [&str; 14] = [
	"Character",
	"Walk Speed",
	"Run Speed",
	"Dash Speed",
	"Air Acceleration",
	"Max Horizontal Air Speed",
	"Weight",
	"Ground-to-air Momentum",
	"Fall Speed",
	"Gravity",
	"Full Hop Height",
	"Short Hop Height",
	"Double Jump Height",
	"Jumpsquat",
];

fn by_name<'a, T>(items: impl IntoIterator<Item = (&'a str, T)>) -> Vec<(&'a str, T)> {
	let mut items: Vec<_> = items.into_iter().collect();
	items.sort_by_cached_key(|(name, _)| name.to_lowercase());
	items
}

/// Section link dropdown; `sections` pairs a section key with its label
fn quick_nav(out: &mut String, current: &str, sections: &[(&str, &str)]) -> Result<(), ReportError> {
	let dropdown = format!("dropdown_{current}");
	writeln!(out, "            <div class=\"section-nav-dropdown\">")?;
	writeln!(
		out,
		"                <button onclick=\"toggleDropdown('{dropdown}')\" class=\"dropdown-btn\">Quick Nav</button>"
	)?;
	writeln!(out, "                <div id=\"{dropdown}\" class=\"dropdown-content\">")?;
	for (key, label) in sections {
		let section = format!("section_{key}");
		let current = if *key == current { " class=\"current-section\"" } else { "" };
		writeln!(
			out,
			"                    <a href=\"#{section}\" onclick=\"scrollToSection('{section}'); toggleDropdown('{dropdown}')\"{current}>{}</a>",
			escape(label)
		)?;
	}
	writeln!(out, "                </div>")?;
	writeln!(out, "            </div>")?;
	Ok(())
}

fn section_header(out: &mut String, key: &str, name: &str, nav: Option<&[(&str, &str)]>) -> Result<(), ReportError> {
	match nav {
		Some(sections) => {
			writeln!(out, "        <h2 id=\"section_{key}\" class=\"section-header\">")?;
			writeln!(out, "            <span>{}</span>", escape(name))?;
			quick_nav(out, key, sections)?;
			writeln!(out, "        </h2>")?;
		}
		None => writeln!(out, "        <h2 id=\"section_{key}\">{}</h2>", escape(name))?,
	}
	Ok(())
}

fn move_row(out: &mut String, row: &MoveResult, aerial: bool) -> Result<(), ReportError> {
	let (class, tooltip) = match &row.note {
		Some(note) => (" has-tooltip", format!("<div class=\"tooltip-content\">{}</div>", html::tooltip(note))),
		None => ("", String::new()),
	};
	writeln!(out, "                <tr class=\"tooltip{class}\">")?;
	writeln!(out, "                    <td>{}{tooltip}</td>", escape(&row.character))?;
	writeln!(out, "                    <td class=\"damage\">{}</td>", escape(&format::damage(row.damage)))?;
	for value in [row.angle, row.knockback_growth, row.fixed_knockback, row.base_knockback] {
		writeln!(out, "                    <td class=\"value\">{}</td>", escape(&format::marked(value)))?;
	}
	writeln!(out, "                    <td class=\"frame\">{}</td>", row.active_frame)?;
	writeln!(out, "                    <td class=\"frame\">{}</td>", format::frame(row.first_actionable_frame))?;

	if aerial {
		writeln!(out, "                    <td class=\"frame\">{}</td>", row.landing_lag)?;
		let damage = row.damage.map(|damage| damage.value);
		match format::shield_advantage(damage, row.landing_lag) {
			Some(advantage) => writeln!(
				out,
				"                    <td class=\"{}\">{advantage}</td>",
				ShieldBand::of(advantage).css_class()
			)?,
			None => writeln!(out, "                    <td class=\"value\">{}</td>", format::NOT_AVAILABLE)?,
		}
	}
	writeln!(out, "                </tr>")?;
	Ok(())
}

fn move_table(out: &mut String, kind: MoveKind, rows: &[MoveResult]) -> Result<(), ReportError> {
	if rows.is_empty() {
		writeln!(out, "        <p><em>No data found for this move.</em></p>")?;
		return Ok(());
	}

	let aerial = kind.is_aerial();
	writeln!(out, "        <table id=\"{}_table\">", kind.key())?;
	writeln!(out, "            <thead>")?;
	writeln!(out, "                <tr>")?;
	for label in ["Character", "Damage", "Angle", "KBG", "FKB", "BKB", "Frame", "FAF"] {
		html::sortable_header(out, label)?;
	}
	if aerial {
		html::sortable_header(out, "Landing Lag")?;
		writeln!(
			out,
			"                    <th class=\"sortable tooltip\">Optimal Shield Advantage <span class=\"info-icon\">?</span> <span class=\"sort-icon\">&#x2195;</span>"
		)?;
		writeln!(out, "                        <div class=\"tooltip-content\">{SHIELD_ADVANTAGE_HELP}</div>")?;
		writeln!(out, "                    </th>")?;
	}
	writeln!(out, "                </tr>")?;
	writeln!(out, "            </thead>")?;
	writeln!(out, "            <tbody>")?;
	for (_, row) in by_name(rows.iter().map(|row| (row.character.as_str(), row))) {
		move_row(out, row, aerial)?;
	}
	writeln!(out, "            </tbody>")?;
	writeln!(out, "        </table>")?;
	Ok(())
}

/// Grab, dash grab and pivot grab frames side by side, one row per character
fn grab_table(out: &mut String, report: &RunReport) -> Result<(), ReportError> {
	section_header(out, "grabs", "Grabs", Some(&GRAB_NAV[..]))?;

	let mut frames: BTreeMap<&str, [Option<i64>; 3]> = BTreeMap::new();
	for (column, kind) in GRAB_KINDS.into_iter().enumerate() {
		for row in report.rows(kind) {
			let frame = Some(row.active_frame).filter(|frame| *frame != 0);
			frames.entry(row.character.as_str()).or_default()[column] = frame;
		}
	}
	if frames.is_empty() {
		writeln!(out, "        <p><em>No grab data found.</em></p>")?;
		return Ok(());
	}

	writeln!(out, "        <table id=\"grabs_table\">")?;
	writeln!(out, "            <thead>")?;
	writeln!(out, "                <tr>")?;
	for label in ["Character", "Grab Frame", "Dash Grab Frame", "Pivot Grab Frame"] {
		html::sortable_header(out, label)?;
	}
	writeln!(out, "                </tr>")?;
	writeln!(out, "            </thead>")?;
	writeln!(out, "            <tbody>")?;
	for (character, columns) in by_name(frames) {
		writeln!(out, "                <tr>")?;
		writeln!(out, "                    <td>{}</td>", escape(character))?;
		for frame in columns {
			writeln!(out, "                    <td class=\"frame\">{}</td>", format::frame(frame))?;
		}
		writeln!(out, "                </tr>")?;
	}
	writeln!(out, "            </tbody>")?;
	writeln!(out, "        </table>")?;
	Ok(())
}

/// Page for one move category.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hdr_frames_report::pages;
/// use hdr_frames_types::{moves::MoveCategory, orchestrator::RunReport};
///
/// let generated = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let page = pages::category_page(MoveCategory::Dash, &RunReport::default(), generated).unwrap();
/// assert!(page.contains("<h2 id=\"section_dash_attack\">Dash Attack</h2>"));
/// assert!(page.contains("No data found for this move."));
/// ```
pub fn category_page(category: MoveCategory, report: &RunReport, generated: NaiveDateTime) -> Result<String, ReportError> {
	let mut out = String::new();
	html::open(&mut out, category.title(), Some(SUBTITLE))?;

	let sections: Vec<(&str, &str)> = category.moves().map(|kind| (kind.key(), kind.display_name())).collect();
	let mut grabs_written = false;
	for kind in category.moves() {
		if GRAB_KINDS.contains(&kind) {
			if !grabs_written {
				grab_table(&mut out, report)?;
				grabs_written = true;
			}
			continue;
		}

		let nav = match category {
			MoveCategory::Dash => None,
			MoveCategory::Grabs => Some(&GRAB_NAV[..]),
			_ => Some(sections.as_slice()),
		};
		section_header(&mut out, kind.key(), kind.display_name(), nav)?;
		move_table(&mut out, kind, report.rows(kind))?;
		html::name_list(&mut out, "not-found", "Characters Not Found", report.missing(kind))?;
		html::name_list(&mut out, "fallback-info", "Characters Found in Fallback Location", report.from_fallback(kind))?;
	}

	html::close(&mut out, generated)?;
	Ok(out)
}

/// Movement and physics table, keyed by display name.
pub fn stats_page(stats: &BTreeMap<String, FighterStats>, generated: NaiveDateTime) -> Result<String, ReportError> {
	let mut out = String::new();
	html::open(&mut out, "Fighter Stats", Some(SUBTITLE))?;
	section_header(&mut out, "fighter_stats", "Movement & Physics Stats", None)?;

	if stats.is_empty() {
		writeln!(out, "        <p><em>No fighter stats data found.</em></p>")?;
	} else {
		writeln!(out, "        <table id=\"fighter_stats_table\">")?;
		writeln!(out, "            <thead>")?;
		writeln!(out, "                <tr>")?;
		for label in STATS_COLUMNS {
			html::sortable_header(&mut out, label)?;
		}
		writeln!(out, "                </tr>")?;
		writeln!(out, "            </thead>")?;
		writeln!(out, "            <tbody>")?;
		for (character, stats) in by_name(stats.iter().map(|(name, stats)| (name.as_str(), stats))) {
			let cells = [
				(stats.walk_speed, 3),
				(stats.run_speed, 3),
				(stats.dash_speed, 3),
				(stats.air_acceleration(), 3),
				(stats.max_air_speed, 3),
				(stats.weight, 0),
				(stats.jump_speed_x_max, 3),
				(stats.fall_speed, 3),
				(stats.gravity, 3),
				(stats.full_hop, 3),
				(stats.short_hop, 3),
				(stats.double_jump, 3),
			];
			writeln!(out, "                <tr>")?;
			writeln!(out, "                    <td>{}</td>", escape(character))?;
			for (value, decimals) in cells {
				writeln!(out, "                    <td class=\"value\">{}</td>", format::stat(value, decimals))?;
			}
			writeln!(out, "                    <td class=\"frame\">{}</td>", format::stat(stats.jumpsquat, 0))?;
			writeln!(out, "                </tr>")?;
		}
		writeln!(out, "            </tbody>")?;
		writeln!(out, "        </table>")?;
	}

	html::close(&mut out, generated)?;
	Ok(out)
}

/// Links to the stats page and every category page
pub fn index_page(generated: NaiveDateTime) -> Result<String, ReportError> {
	let mut out = String::new();
	html::open(&mut out, "HDR Frame Data", Some(SUBTITLE))?;
	writeln!(out, "        <ul class=\"category-list\">")?;
	writeln!(out, "            <li><a href=\"{STATS_PAGE}\">Fighter Stats</a></li>")?;
	for category in MoveCategory::ALL {
		writeln!(
			out,
			"            <li><a href=\"{}\">{}</a></li>",
			category.filename(),
			escape(category.title())
		)?;
	}
	writeln!(out, "        </ul>")?;
	html::close(&mut out, generated)?;
	Ok(out)
}
