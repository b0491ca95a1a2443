//! Ammo-kind expansion: one row per kind with scaled damage and angle.

use regex::Regex;

use super::{MarkedValue, MoveResult, Orchestrator, RowNote, RunReport};
use crate::moves::MoveKind;
use crate::registry::{AmmoExpansion, AmmoKind, AmmoMove};
use crate::script::{
	MoveAnalysis, VariantModifier, analyze_function, anchor_frame, locate_function, locate_loose,
};

static_regex!(LET_DAMAGE, r"let\s+dmg\s*=\s*([\d.]+)\s*;");
static_regex!(
	SPLIT_DAMAGE,
	r"let\s+dmg\s*=\s*if\s+variation\s*==\s*2\s*\{\s*([\d.]+)\s*\}\s*else\s*\{\s*([\d.]+)\s*\}"
);

const SCALED: Option<char> = Some('*');

/// One ammo kind with the modifiers in effect
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedKind {
	/// Display name
	pub name: String,
	/// Modifiers read from the info table or the defaults
	pub modifier: VariantModifier,
}

/// Reads per-kind modifiers from the info table.
///
/// Kinds missing from the table are dropped; when none is found the
/// registry defaults are used for all of them.
pub fn parse_ammo_kinds(info: Option<&str>, kinds: &[AmmoKind]) -> Vec<ResolvedKind> {
	let parsed: Vec<ResolvedKind> = info
		.map(|text| kinds.iter().filter_map(|kind| parse_kind(text, kind)).collect())
		.unwrap_or_default();
	if !parsed.is_empty() {
		return parsed;
	}
	kinds
		.iter()
		.map(|kind| ResolvedKind {
			name: kind.name.clone(),
			modifier: kind.modifier,
		})
		.collect()
}

fn parse_kind(text: &str, kind: &AmmoKind) -> Option<ResolvedKind> {
	let key = regex::escape(&kind.key);
	let damage = Regex::new(&format!(r"(?s){key}\s*=>\s*PikminInfo\s*\{{[^}}]*?dmg:\s*([\d.]+)")).ok()?;
	let angle = Regex::new(&format!(r"(?s){key}\s*=>\s*PikminInfo\s*\{{[^}}]*?dmg:\s*[\d.]+[^}}]*?angle:\s*(\d+)")).ok()?;

	let damage_multiplier = damage.captures(text)?.get(1)?.as_str().parse().ok()?;
	let angle_modifier = angle
		.captures(text)
		.and_then(|caps| caps.get(1)?.as_str().parse().ok())
		.unwrap_or(0.0);
	Some(ResolvedKind {
		name: kind.name.clone(),
		modifier: VariantModifier {
			damage_multiplier,
			angle_modifier,
		},
	})
}

/// First `let dmg = N;` of a body
pub fn let_damage(body: &str) -> Option<f64> {
	LET_DAMAGE.captures(body)?.get(1)?.as_str().parse().ok()
}

/// `(first, second)` of `let dmg = if variation == 2 { first } else { second }`
pub fn split_damage(body: &str) -> Option<(f64, f64)> {
	let caps = SPLIT_DAMAGE.captures(body)?;
	Some((caps.get(1)?.as_str().parse().ok()?, caps.get(2)?.as_str().parse().ok()?))
}

/// Multiplier as printed in tooltips: two decimals, trailing zeros dropped
fn format_multiplier(value: f64) -> String {
	let text = format!("{value:.2}");
	text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

struct Scaled {
	base_damage: f64,
	base_angle: Option<f64>,
	damage: f64,
	angle: Option<f64>,
}

impl Scaled {
	fn new(base_damage: f64, base_angle: Option<f64>, modifier: &VariantModifier, keep_angle: bool) -> Self {
		let angle_modifier = if keep_angle { 0.0 } else { modifier.angle_modifier };
		Self {
			base_damage,
			base_angle,
			damage: base_damage * modifier.damage_multiplier,
			angle: base_angle.map(|angle| angle + angle_modifier),
		}
	}
}

impl Orchestrator<'_> {
	/// Expands an ammo move; `false` when nothing could be analysed
	pub(super) fn ammo(&self, character: &str, display: &str, kind: MoveKind, part: AmmoMove, report: &mut RunReport) -> bool {
		let Some(ammo) = self.registry.ammo(character) else {
			return false;
		};
		let info = self.sources.read(character, &ammo.info_file);
		let kinds = parse_ammo_kinds(info.as_deref(), &ammo.kinds);
		match part {
			AmmoMove::Smash {
				keep_angle,
			} => self.ammo_smash(character, display, kind, ammo, &kinds, keep_angle, report),
			AmmoMove::Aerial => self.ammo_aerial(character, display, kind, ammo, &kinds, report),
			AmmoMove::Throw => self.ammo_throw(character, display, kind, ammo, &kinds, report),
		}
	}

	#[allow(clippy::too_many_arguments)]
	fn ammo_smash(
		&self,
		character: &str,
		display: &str,
		kind: MoveKind,
		ammo: &AmmoExpansion,
		kinds: &[ResolvedKind],
		keep_angle: bool,
		report: &mut RunReport,
	) -> bool {
		let function = self.registry.primary_script(character, kind).function;
		let profile = self.profile_for(character, kind);
		let Some(text) = self.sources.read(character, &ammo.smash_file) else {
			return false;
		};
		let Some(base) = analyze_function(&text, &function, &profile) else {
			return false;
		};

		let base_damage = locate_function(&text, &function).and_then(let_damage).unwrap_or(ammo.default_damage);
		let frame = self
			.launch_frame(character, kind, ammo)
			.filter(|frame| *frame != 0.0)
			.map_or_else(|| base.active_frame(), |frame| frame.trunc() as i64);
		let faf = self.first_actionable_frame(character, kind, &base);

		for resolved in kinds {
			let scaled = Scaled::new(base_damage, base.hit.angle, &resolved.modifier, keep_angle);
			let angle_mark = if keep_angle { None } else { SCALED };
			let mut row = self.ammo_row(display, kind, ammo, resolved, &base, &scaled, frame, None);
			row.angle = scaled.angle.map(|angle| MarkedValue::marked(angle, angle_mark));
			row.first_actionable_frame = faf;
			report.push(kind, row);
		}
		true
	}

	/// Launch marker of the default smash function in the fallback dump
	fn launch_frame(&self, character: &str, kind: MoveKind, ammo: &AmmoExpansion) -> Option<f64> {
		let needles: Vec<&str> = ammo.launch_needles.iter().map(String::as_str).collect();
		self.fallback_texts(character, kind.fallback_file())
			.iter()
			.find_map(|(_, text)| anchor_frame(locate_loose(text, kind.function_name())?, &needles))
	}

	fn ammo_aerial(
		&self,
		character: &str,
		display: &str,
		kind: MoveKind,
		ammo: &AmmoExpansion,
		kinds: &[ResolvedKind],
		report: &mut RunReport,
	) -> bool {
		let script = self.registry.primary_script(character, kind);
		let profile = self.profile_for(character, kind);
		let lag = self.data.landing_lag(display, kind);

		let mut found = false;
		let mut faf = None;
		let regular = self
			.sources
			.read(character, &script.path)
			.and_then(|text| analyze_function(&text, &script.function, &profile));
		if let Some(analysis) = regular {
			let row = self.row(character, display, kind, &format!("{display} - {}", ammo.unloaded_label), &analysis);
			faf = row.first_actionable_frame;
			report.push(kind, row);
			found = true;
		}

		let Some(text) = self.sources.read(character, &ammo.aerial_file) else {
			return found;
		};
		let Some(loaded) = analyze_function(&text, &script.function, &profile) else {
			return found;
		};
		let base_damage = locate_function(&text, &script.function).and_then(let_damage).or(loaded.hit.damage);
		let faf = faf.or_else(|| self.first_actionable_frame(character, kind, &loaded));
		for resolved in kinds {
			let scaled = base_damage.map(|damage| Scaled::new(damage, loaded.hit.angle, &resolved.modifier, false));
			let mut row = match &scaled {
				Some(scaled) => self.ammo_row(display, kind, ammo, resolved, &loaded, scaled, loaded.active_frame(), None),
				None => MoveResult::new(format!("{display} - {}*", resolved.name), &loaded.hit, loaded.active_frame()),
			};
			row.first_actionable_frame = faf;
			row.landing_lag = lag;
			report.push(kind, row);
		}
		true
	}

	fn ammo_throw(
		&self,
		character: &str,
		display: &str,
		kind: MoveKind,
		ammo: &AmmoExpansion,
		kinds: &[ResolvedKind],
		report: &mut RunReport,
	) -> bool {
		let function = self.registry.primary_script(character, kind).function;
		let profile = self.profile_for(character, kind);
		let Some(text) = self.sources.read(character, &ammo.throw_file) else {
			return false;
		};
		let Some(base) = analyze_function(&text, &function, &profile) else {
			return false;
		};
		let Some((split, other)) = locate_function(&text, &function).and_then(split_damage) else {
			return false;
		};
		let faf = self
			.data
			.move_final_frame(self.registry.data_name(character), kind)
			.filter(|frame| *frame > 0.0)
			.map(|frame| frame.trunc() as i64);

		for resolved in kinds {
			let is_split = resolved.name == ammo.split_kind;
			let base_damage = if is_split { split } else { other };
			let scaled = Scaled::new(base_damage, base.hit.angle, &resolved.modifier, false);
			let note = if is_split {
				format!("{} {} has higher base damage", ammo.split_kind, ammo.noun)
			} else {
				format!("{} {} gets different base damage", ammo.split_kind, ammo.noun)
			};
			let mut row = self.ammo_row(display, kind, ammo, resolved, &base, &scaled, base.active_frame(), Some(note));
			row.first_actionable_frame = faf;
			report.push(kind, row);
		}
		true
	}

	/// Row with scaled damage and angle, base knockback values and a tooltip
	#[allow(clippy::too_many_arguments)]
	fn ammo_row(
		&self,
		display: &str,
		kind: MoveKind,
		ammo: &AmmoExpansion,
		resolved: &ResolvedKind,
		base: &MoveAnalysis,
		scaled: &Scaled,
		frame: i64,
		note: Option<String>,
	) -> MoveResult {
		let mut row = MoveResult::new(format!("{display} - {}*", resolved.name), &base.hit, frame);
		row.damage = Some(MarkedValue::marked(scaled.damage, SCALED));
		row.angle = scaled.angle.map(|angle| MarkedValue::marked(angle, SCALED));
		row.note = Some(ammo_note(kind, ammo, resolved, scaled, note));
		row
	}
}

fn ammo_note(kind: MoveKind, ammo: &AmmoExpansion, resolved: &ResolvedKind, scaled: &Scaled, note: Option<String>) -> RowNote {
	let whole = |angle: Option<f64>| angle.map_or_else(|| "N/A".to_owned(), |angle| format!("{}", angle.trunc() as i64));
	let mut row_note = RowNote::new(format!("{} {} - {}", resolved.name, ammo.noun, kind.display_name()))
		.line("Base Damage", format!("{:.1}", scaled.base_damage))
		.line("Base Angle", whole(scaled.base_angle))
		.line("Damage Multiplier", format_multiplier(resolved.modifier.damage_multiplier));
	if resolved.modifier.angle_modifier != 0.0 {
		row_note = row_note.line("Angle Modifier", format!("+{}", resolved.modifier.angle_modifier.trunc() as i64));
	}
	row_note = row_note
		.line("Final Damage", format!("{:.1}", scaled.damage))
		.line("Final Angle", whole(scaled.angle));
	match note {
		Some(note) => row_note.line("Note", note),
		None => row_note,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn defaults() -> Vec<AmmoKind> {
		[("0", "Red", 1.05, 0.0), ("1", "Yellow", 0.94, 8.0), ("_", "Purple", 1.2, 0.0)]
			.into_iter()
			.map(|(key, name, damage_multiplier, angle_modifier)| AmmoKind {
				key: key.to_owned(),
				name: name.to_owned(),
				modifier: VariantModifier {
					damage_multiplier,
					angle_modifier,
				},
			})
			.collect()
	}

	#[test]
	fn test_parse_kinds_from_info() {
		let info = "
			0 => PikminInfo { dmg: 1.1, angle: 0, kbg: 1.0 },
			1 => PikminInfo {
				dmg: 0.9,
				angle: 12,
			},
		";
		let kinds = parse_ammo_kinds(Some(info), &defaults());
		assert_eq!(kinds.len(), 2);
		assert_eq!(kinds[0].name, "Red");
		assert_eq!(kinds[0].modifier.damage_multiplier, 1.1);
		assert_eq!(kinds[1].modifier.angle_modifier, 12.0);
	}

	#[test]
	fn test_parse_kinds_defaults() {
		let kinds = parse_ammo_kinds(Some("struct PikminInfo;"), &defaults());
		assert_eq!(kinds.len(), 3);
		assert_eq!(kinds[1].modifier.angle_modifier, 8.0);
		assert_eq!(parse_ammo_kinds(None, &defaults()), kinds);
	}

	#[test]
	fn test_damage_lines() {
		assert_eq!(let_damage("let x = 2;\nlet dmg = 13.5;\nlet dmg = 9.0;"), Some(13.5));
		assert_eq!(let_damage("let dmg = p.dmg;"), None);
		assert_eq!(split_damage("let dmg = if variation == 2 { 7.0 } else { 5.5 };"), Some((7.0, 5.5)));
	}

	#[test]
	fn test_multiplier_format() {
		assert_eq!(format_multiplier(1.05), "1.05");
		assert_eq!(format_multiplier(1.0), "1");
		assert_eq!(format_multiplier(1.2), "1.2");
	}

	#[test]
	fn test_note_lines() {
		let kinds = defaults();
		let resolved = ResolvedKind {
			name: kinds[1].name.clone(),
			modifier: kinds[1].modifier,
		};
		let scaled = Scaled::new(10.0, Some(40.0), &resolved.modifier, false);
		let ammo = AmmoExpansion {
			info_file: String::new(),
			kinds,
			smash_file: String::new(),
			aerial_file: String::new(),
			throw_file: String::new(),
			launch_needles: Vec::new(),
			default_damage: 15.0,
			split_kind: "Blue".to_owned(),
			unloaded_label: "No Pikmin".to_owned(),
			noun: "Pikmin".to_owned(),
		};
		let note = ammo_note(MoveKind::Usmash, &ammo, &resolved, &scaled, None);
		assert_eq!(note.title, "Yellow Pikmin - Up Smash");
		let labels: Vec<&str> = note.lines.iter().map(|(label, _)| label.as_str()).collect();
		assert_eq!(labels, [
			"Base Damage",
			"Base Angle",
			"Damage Multiplier",
			"Angle Modifier",
			"Final Damage",
			"Final Angle"
		]);
		assert_eq!(note.lines[3].1, "+8");
		assert_eq!(note.lines[4].1, "9.4");
		assert_eq!(note.lines[5].1, "48");
	}
}
