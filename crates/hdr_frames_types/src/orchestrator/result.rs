//! Normalized output of a run.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::moves::MoveKind;
use crate::script::{HitValues, MoveAnalysis};

/// A hit value with an optional display mark.
///
/// Marks flag values that are not plain script reads: `*` for ammo-scaled
/// values, `+` for a minimum, `-` for a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkedValue {
	/// Numeric value
	pub value: f64,
	/// Mark printed after the value
	pub mark: Option<char>,
}

impl MarkedValue {
	/// Value without a mark
	pub fn plain(value: f64) -> Self {
		Self {
			value,
			mark: None,
		}
	}

	/// Value with an optional mark
	pub fn marked(value: f64, mark: Option<char>) -> Self {
		Self {
			value,
			mark,
		}
	}
}

/// Tooltip attached to a row: a title and labelled lines.
///
/// # Examples
///
/// ```
/// use hdr_frames_types::orchestrator::RowNote;
///
/// let note = RowNote::new("Red Pikmin - Up Smash").line("Damage Multiplier", "1.05");
/// assert_eq!(note.lines, vec![("Damage Multiplier".to_owned(), "1.05".to_owned())]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowNote {
	/// Bold heading
	pub title: String,
	/// `(label, value)` pairs in display order
	pub lines: Vec<(String, String)>,
}

impl RowNote {
	/// Note with a title and no lines
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			lines: Vec::new(),
		}
	}

	/// Appends a line
	pub fn line(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
		self.lines.push((label.into(), value.into()));
		self
	}
}

/// One row of a move table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveResult {
	/// Display name, with a variant suffix for expanded moves
	pub character: String,
	/// Damage
	pub damage: Option<MarkedValue>,
	/// Launch angle
	pub angle: Option<MarkedValue>,
	/// Knockback growth
	pub knockback_growth: Option<MarkedValue>,
	/// Fixed knockback
	pub fixed_knockback: Option<MarkedValue>,
	/// Base knockback
	pub base_knockback: Option<MarkedValue>,
	/// Displayed active frame
	pub active_frame: i64,
	/// Displayed first actionable frame
	pub first_actionable_frame: Option<i64>,
	/// Landing lag, aerials only
	pub landing_lag: u32,
	/// Tooltip
	pub note: Option<RowNote>,
}

impl MoveResult {
	/// Row with unmarked hit values
	pub fn new(character: impl Into<String>, hit: &HitValues, active_frame: i64) -> Self {
		Self {
			character: character.into(),
			damage: hit.damage.map(MarkedValue::plain),
			angle: hit.angle.map(MarkedValue::plain),
			knockback_growth: hit.knockback_growth.map(MarkedValue::plain),
			fixed_knockback: hit.fixed_knockback.map(MarkedValue::plain),
			base_knockback: hit.base_knockback.map(MarkedValue::plain),
			active_frame,
			first_actionable_frame: None,
			landing_lag: 0,
			note: None,
		}
	}

	/// Row from an analysis, with the first actionable frame already computed
	pub fn from_analysis(character: impl Into<String>, analysis: &MoveAnalysis, faf: Option<i64>) -> Self {
		Self {
			first_actionable_frame: faf,
			..Self::new(character, &analysis.hit, analysis.active_frame())
		}
	}

	/// Sets the landing lag
	pub fn with_landing_lag(mut self, landing_lag: u32) -> Self {
		self.landing_lag = landing_lag;
		self
	}

	/// Sets the tooltip
	pub fn with_note(mut self, note: Option<RowNote>) -> Self {
		self.note = note;
		self
	}
}

/// Everything a run produced, keyed by move
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
	/// Rows per move, in processing order
	pub results: BTreeMap<MoveKind, Vec<MoveResult>>,
	/// Labels with no analysis anywhere
	pub not_found: BTreeMap<MoveKind, Vec<String>>,
	/// Labels analysed from the fallback dump
	pub fallback_found: BTreeMap<MoveKind, Vec<String>>,
}

impl RunReport {
	/// Adds a row
	pub fn push(&mut self, kind: MoveKind, result: MoveResult) {
		self.results.entry(kind).or_default().push(result);
	}

	/// Records a label with no analysis
	pub fn not_found(&mut self, kind: MoveKind, label: impl Into<String>) {
		self.not_found.entry(kind).or_default().push(label.into());
	}

	/// Records a label analysed from the fallback dump
	pub fn fallback_found(&mut self, kind: MoveKind, label: impl Into<String>) {
		self.fallback_found.entry(kind).or_default().push(label.into());
	}

	/// Rows of a move
	pub fn rows(&self, kind: MoveKind) -> &[MoveResult] {
		self.results.get(&kind).map_or(&[], Vec::as_slice)
	}

	/// Labels of a move with no analysis
	pub fn missing(&self, kind: MoveKind) -> &[String] {
		self.not_found.get(&kind).map_or(&[], Vec::as_slice)
	}

	/// Labels of a move analysed from the fallback dump
	pub fn from_fallback(&self, kind: MoveKind) -> &[String] {
		self.fallback_found.get(&kind).map_or(&[], Vec::as_slice)
	}

	/// Finds a row by label
	pub fn find(&self, kind: MoveKind, character: &str) -> Option<&MoveResult> {
		self.rows(kind).iter().find(|row| row.character == character)
	}

	/// Appends another report, keeping order within each move
	pub fn merge(&mut self, other: Self) {
		for (kind, rows) in other.results {
			self.results.entry(kind).or_default().extend(rows);
		}
		for (kind, labels) in other.not_found {
			self.not_found.entry(kind).or_default().extend(labels);
		}
		for (kind, labels) in other.fallback_found {
			self.fallback_found.entry(kind).or_default().extend(labels);
		}
	}

	/// Sorts rows and lists of every move by label
	pub fn sort(&mut self) {
		for rows in self.results.values_mut() {
			rows.sort_by(|a, b| a.character.cmp(&b.character));
		}
		for labels in self.not_found.values_mut().chain(self.fallback_found.values_mut()) {
			labels.sort();
		}
	}
}
