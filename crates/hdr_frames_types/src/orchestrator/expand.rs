//! Composite, fixed-row and variant expansions.

use super::{MarkedValue, MoveResult, Orchestrator, RunReport};
use crate::moves::MoveKind;
use crate::registry::{Composite, FixedRows, SpawnAnchor, Variant, VariantSet};
use crate::script::{MoveAnalysis, actionable_frame_display, analyze_function, anchor_frame, anchor_real_frame, locate_function};

impl Orchestrator<'_> {
	/// Hit from one script, frame from a spawn in another.
	///
	/// Failures are silent: a composite move never lands in "not found".
	pub(super) fn composite(
		&self,
		character: &str,
		display: &str,
		kind: MoveKind,
		composite: &Composite,
		report: &mut RunReport,
	) {
		let profile = self.profile_for(character, kind);
		let analysis = self
			.sources
			.read(character, &composite.damage.path)
			.and_then(|text| analyze_function(&text, &composite.damage.function, &profile));
		let Some(analysis) = analysis else {
			self.diagnostics.debug(format_args!(
				"{display}: no {} damage in {}",
				kind.key(),
				composite.damage.path
			));
			return;
		};

		let mut row = self.row(character, display, kind, display, &analysis);
		if let Some(frame) = self.spawn_anchor(character, &composite.anchor) {
			row.active_frame = frame.round_ties_even() as i64;
		}
		report.push(kind, row);
	}

	fn spawn_anchor(&self, character: &str, anchor: &SpawnAnchor) -> Option<f64> {
		let text = self.sources.read(character, &anchor.script.path)?;
		let body = locate_function(&text, &anchor.script.function)?;
		let needles: Vec<&str> = anchor.needles.iter().map(String::as_str).collect();
		if anchor.rates.is_empty() {
			anchor_frame(body, &needles)
		} else {
			anchor_real_frame(body, &needles, &anchor.rates)
		}
	}

	/// Hard-coded rows sharing a frame read from the fallback dump
	pub(super) fn fixed_rows(
		&self,
		character: &str,
		display: &str,
		kind: MoveKind,
		fixed: &FixedRows,
		report: &mut RunReport,
	) {
		if !self.sources.exists(character, &fixed.requires) {
			self.diagnostics.debug(format_args!("{display}: {} missing, no {} rows", fixed.requires, kind.key()));
			return;
		}
		let frame = self.fallback_anchor(character, &fixed.frame).trunc() as i64;
		let faf = self
			.data
			.move_final_frame(self.registry.data_name(character), kind)
			.filter(|f| *f > 0.0)
			.map(actionable_frame_display);
		let lag = if kind.is_aerial() { self.data.landing_lag(display, kind) } else { 0 };

		for fixed_row in &fixed.rows {
			let mut row = MoveResult::new(format!("{display} - {}", fixed_row.label), &fixed_row.hit, frame)
				.with_landing_lag(lag)
				.with_note(fixed_row.note.clone());
			row.damage = fixed_row.hit.damage.map(|value| MarkedValue::marked(value, fixed_row.damage_mark));
			row.knockback_growth = fixed_row.hit.knockback_growth.map(|value| MarkedValue::marked(value, fixed_row.kbg_mark));
			row.first_actionable_frame = faf;
			report.push(kind, row);
		}
	}

	/// One row per variant function.
	///
	/// The fallback dump is searched only when no variant is found in the mod
	/// tree and the set allows it; each variant is then recorded as found in
	/// the fallback or not found on its own.
	pub(super) fn variants(&self, character: &str, display: &str, kind: MoveKind, set: &VariantSet, report: &mut RunReport) {
		let profile = self.profile_for(character, kind);
		let script = self.registry.primary_script(character, kind);
		let text = self.sources.read(character, &script.path);

		let mut found = false;
		for variant in &set.variants {
			let analysis = text.as_deref().and_then(|text| analyze_function(text, &variant.function, &profile));
			if let Some(analysis) = analysis {
				report.push(kind, self.variant_row(character, display, kind, variant, &analysis));
				found = true;
			}
		}
		if found || !set.use_fallback {
			return;
		}

		for variant in &set.variants {
			let label = format!("{display} - {}", variant.label);
			let file = variant.fallback_file.as_deref().unwrap_or(kind.fallback_file());
			match self.analyze_fallback(character, kind, &variant.function, file, &profile) {
				Some(analysis) => {
					report.push(kind, self.variant_row(character, display, kind, variant, &analysis));
					report.fallback_found(kind, label);
				}
				None => report.not_found(kind, label),
			}
		}
	}

	fn variant_row(
		&self,
		character: &str,
		display: &str,
		kind: MoveKind,
		variant: &Variant,
		analysis: &MoveAnalysis,
	) -> MoveResult {
		let label = format!("{display} - {}", variant.label);
		let cancel = variant
			.motion_key
			.as_deref()
			.and_then(|key| self.data.motion_cancel_frame(self.registry.data_name(character), key))
			.filter(|frame| *frame > 0.0);
		let faf = match cancel {
			Some(frame) => Some(frame.trunc() as i64),
			None => self.first_actionable_frame(character, kind, analysis),
		};
		MoveResult::from_analysis(label, analysis, faf)
	}
}
