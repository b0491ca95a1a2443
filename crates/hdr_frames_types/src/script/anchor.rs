//! Frame lookups keyed on a marker line instead of an attack call.

use super::scanner::{frame_marker, is_comment};

/// Speed applied from the frame a matching rate line is seen
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralRate {
	/// Substring identifying the rate line
	pub needle: String,
	/// Playback speed from that frame on
	pub speed: f64,
}

impl LiteralRate {
	/// Creates a rate entry
	pub fn new(needle: impl Into<String>, speed: f64) -> Self {
		Self {
			needle: needle.into(),
			speed,
		}
	}
}

/// Animation frame of the first line containing every needle.
///
/// Only `frame(..)` markers move the cursor; waits are ignored.
pub fn anchor_frame(body: &str, needles: &[&str]) -> Option<f64> {
	let mut cursor = 0.0;
	for line in body.lines().map(str::trim) {
		if is_comment(line) {
			continue;
		}
		if let Some(frame) = frame_marker(line) {
			cursor = frame;
		}
		if needles.iter().all(|needle| line.contains(needle)) {
			return Some(cursor);
		}
	}
	None
}

/// Real frame of the first line containing every needle, integrating `rates`.
///
/// Rate lines must also contain `FT_MOTION_RATE`. One frame is added when
/// any rate was seen before the anchor.
pub fn anchor_real_frame(body: &str, needles: &[&str], rates: &[LiteralRate]) -> Option<f64> {
	let mut cursor = 0.0;
	let mut events: Vec<(f64, f64)> = Vec::new();
	for line in body.lines().map(str::trim) {
		if is_comment(line) {
			continue;
		}
		if let Some(frame) = frame_marker(line) {
			cursor = frame;
		}
		if line.contains("FT_MOTION_RATE")
			&& let Some(rate) = rates.iter().find(|rate| line.contains(rate.needle.as_str()))
		{
			events.push((cursor, rate.speed));
		}
		if needles.iter().all(|needle| line.contains(needle)) {
			return Some(integrate_speeds(cursor, &events));
		}
	}
	None
}

fn integrate_speeds(target: f64, events: &[(f64, f64)]) -> f64 {
	let mut real = 0.0;
	let mut last = 0.0;
	let mut speed = 1.0;
	for &(frame, next_speed) in events.iter().filter(|(frame, _)| *frame <= target) {
		if frame > last {
			real += (frame - last) / speed;
		}
		last = frame;
		speed = next_speed;
	}
	if target > last {
		real += (target - last) / speed;
	}
	if !events.is_empty() {
		real += 1.0;
	}
	real
}
