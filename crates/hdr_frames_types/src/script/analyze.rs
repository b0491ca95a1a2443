//! One-call analysis of a named function.

use super::body::locate_function;
use super::profile::{FrameOverride, MoveClass, MoveProfile};
use super::rate::{RateEvent, actionable_frame_display, active_frame_display, to_real_frame};
use super::resolve::{Resolver, VariableTable};
use super::scanner::{AttackCall, HitValues, scan};
use super::select::select;
use super::throw_total::throw_total;

/// Result of analysing one function for one move
#[derive(Debug, Clone, PartialEq)]
pub struct MoveAnalysis {
	/// Move class the analysis ran with
	pub class: MoveClass,
	/// Reported hit values, damage overrides applied
	pub hit: HitValues,
	/// Animation frame of the selected hit or release
	pub animation_frame: f64,
	/// Real frame after rate integration and frame overrides
	pub real_frame: f64,
	/// Rate changes seen in the body
	pub rate_events: Vec<RateEvent>,
	/// All recognised calls
	pub calls: Vec<AttackCall>,
	/// Release frame, if one was seen
	pub release_frame: Option<f64>,
	/// Aggregated throw damage, for throws
	pub throw_total: Option<f64>,
}

impl MoveAnalysis {
	/// Displayed active frame
	pub fn active_frame(&self) -> i64 {
		active_frame_display(self.real_frame)
	}

	/// Converts another animation frame of the same move to real time
	pub fn real_frame_of(&self, animation_frame: f64) -> f64 {
		to_real_frame(animation_frame, &self.rate_events)
	}

	/// Displayed first actionable frame for an animation ending at `final_frame`.
	///
	/// Grabs and non-positive final frames have none.
	pub fn first_actionable_frame(&self, final_frame: Option<f64>) -> Option<i64> {
		if self.class.is_grab() {
			return None;
		}
		let final_frame = final_frame.filter(|f| *f > 0.0)?;
		Some(actionable_frame_display(self.real_frame_of(final_frame)))
	}
}

/// Locates `function` in `source` and analyses its body
pub fn analyze_function(source: &str, function: &str, profile: &MoveProfile) -> Option<MoveAnalysis> {
	let body = locate_function(source, function)?;
	analyze_body(body, profile)
}

/// Analyses a function body.
///
/// Returns `None` when nothing in the body can represent the move.
pub fn analyze_body(body: &str, profile: &MoveProfile) -> Option<MoveAnalysis> {
	let variables = VariableTable::from_body(body);
	let resolver = Resolver::new(&variables);
	let scanned = scan(body, profile, &resolver);
	let total = profile.class.is_throw().then(|| throw_total(body, profile, &resolver));

	let release = if profile.class.is_throw() || !profile.release_markers.is_empty() {
		scanned.release_frame
	} else {
		None
	};
	let selection = select(&scanned.calls, profile, release, total)?;

	let mut real_frame = to_real_frame(selection.frame, &scanned.rate_events);
	match profile.frame_override {
		Some(FrameOverride::Fixed(frame)) => real_frame = frame,
		Some(FrameOverride::WhenAnimationZero(frame)) if selection.frame == 0.0 => real_frame = frame,
		_ => {}
	}

	let mut hit = selection.hit;
	if let Some(damage) = profile.damage_override {
		hit.damage = Some(damage);
	}

	Some(MoveAnalysis {
		class: profile.class,
		hit,
		animation_frame: selection.frame,
		real_frame,
		rate_events: scanned.rate_events,
		calls: scanned.calls,
		release_frame: scanned.release_frame,
		throw_total: total,
	})
}
