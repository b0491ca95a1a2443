//! Playback-rate events and animation-to-real frame integration.

use super::body::split_params;
use super::resolve::Resolver;

static_regex!(
	RANGE_CALL,
	r"FT_MOTION_RATE_RANGE\s*\(\s*agent\s*,\s*([^,]+)\s*,\s*([^,]+)\s*,\s*([^)]+)\s*\)"
);
static_regex!(DESIRED_CALL, r"FT_DESIRED_RATE\s*\(\s*agent\s*,\s*([^,]+)\s*,\s*([^)]+)\s*\)");
static_regex!(SET_RATE_CALL, r"MotionModule::set_rate\s*\(\s*boma\s*,\s*(.*)\);?");
static_regex!(MOTION_RATE_CALL, r"FT_MOTION_RATE\s*\(\s*agent\s*,\s*(.*)\);?");

/// Playback-rate change encoded by a script call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateChange {
	/// `MotionModule::set_rate`: speed multiplier from here on
	SetRate {
		/// Playback speed; non-positive values play at normal speed
		value: f64,
	},
	/// `FT_MOTION_RATE`: duration multiplier, speed is its inverse
	DurationMultiplier {
		/// Duration scale; non-positive values play at normal speed
		value: f64,
	},
	/// `FT_MOTION_RATE_RANGE`: `[start, end)` plays over `scale_factor * (end - start)` frames
	RangeRemap {
		/// First remapped animation frame
		start: f64,
		/// Animation frame where the remap ends
		end: f64,
		/// Real duration per animation frame inside the span
		scale_factor: f64,
	},
	/// `FT_DESIRED_RATE`: `original_span` frames from `start` are remapped
	DesiredRate {
		/// Animation frame the span starts at
		start: f64,
		/// Authored length of the span
		original_span: f64,
		/// `desired / original_span`
		scale_factor: f64,
	},
}

impl RateChange {
	/// Returns `true` if the change alters playback speed
	pub fn is_non_unity(&self) -> bool {
		match *self {
			Self::SetRate {
				value,
			}
			| Self::DurationMultiplier {
				value,
			} => value != 1.0,
			Self::RangeRemap {
				scale_factor,
				..
			}
			| Self::DesiredRate {
				scale_factor,
				..
			} => scale_factor != 1.0,
		}
	}
}

/// A rate change and the animation frame it was issued at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateEvent {
	/// Animation frame cursor when the call was seen
	pub frame: f64,
	/// Change payload
	pub change: RateChange,
}

impl RateEvent {
	/// Creates a new event
	pub fn new(frame: f64, change: RateChange) -> Self {
		Self {
			frame,
			change,
		}
	}
}

/// Recognises a rate-changing call on `line`, issued at animation frame `cursor`.
///
/// Shapes are tried in order: range remap, desired rate, `set_rate`, then
/// `FT_MOTION_RATE`. For the last two the final top-level argument is the
/// value. Calls whose arguments do not resolve, empty ranges and non-positive
/// desired spans are ignored.
pub fn parse_rate_change(line: &str, cursor: f64, resolver: &Resolver) -> Option<RateEvent> {
	if let Some(caps) = RANGE_CALL.captures(line) {
		let start = resolver.resolve(caps[1].trim())?;
		let end = resolver.resolve(caps[2].trim())?;
		let duration = resolver.resolve(caps[3].trim())?;
		let span = end - start;
		if span <= 0.0 {
			return None;
		}
		return Some(RateEvent::new(
			cursor,
			RateChange::RangeRemap {
				start,
				end,
				scale_factor: duration / span,
			},
		));
	}

	if let Some(caps) = DESIRED_CALL.captures(line) {
		let original = resolver.resolve(caps[1].trim())?;
		let desired = resolver.resolve(caps[2].trim())?;
		if original <= 0.0 {
			return None;
		}
		return Some(RateEvent::new(
			cursor,
			RateChange::DesiredRate {
				start: cursor,
				original_span: original,
				scale_factor: desired / original,
			},
		));
	}

	let (args, set_rate) = match SET_RATE_CALL.captures(line) {
		Some(caps) => (caps[1].trim().to_owned(), true),
		None => (MOTION_RATE_CALL.captures(line)?[1].trim().to_owned(), false),
	};
	let args = args.strip_suffix(')').map_or(args.as_str(), str::trim);
	let mut expr = split_params(args).pop()?;
	let missing = expr.matches('(').count().saturating_sub(expr.matches(')').count());
	expr.push_str(&")".repeat(missing));
	let value = resolver.resolve(&expr)?;
	let change = if set_rate {
		RateChange::SetRate {
			value,
		}
	} else {
		RateChange::DurationMultiplier {
			value,
		}
	};
	Some(RateEvent::new(cursor, change))
}

/// Converts an animation frame to a real frame under `events`.
///
/// When any [`RateChange::DesiredRate`] is present only those spans are used.
/// Otherwise the events are walked in frame order with the speed in force
/// integrated over each segment; a [`RateChange::RangeRemap`] applies inside
/// its span and the previous speed resumes after it. One frame is added when
/// a non-unity change is issued at or before frame 0.
///
/// # Examples
///
/// ```
/// use hdr_frames_types::script::{RateChange, RateEvent, to_real_frame};
///
/// assert_eq!(to_real_frame(12.0, &[]), 12.0);
///
/// let remap = RateChange::RangeRemap { start: 10.0, end: 20.0, scale_factor: 0.5 };
/// let events = [RateEvent::new(10.0, remap)];
/// assert_eq!(to_real_frame(15.0, &events), 12.5);
/// assert_eq!(to_real_frame(25.0, &events), 20.0);
/// ```
pub fn to_real_frame(target: f64, events: &[RateEvent]) -> f64 {
	if events.is_empty() {
		return target;
	}
	let offset = if events.iter().any(|e| e.frame <= 0.0 && e.change.is_non_unity()) {
		1.0
	} else {
		0.0
	};

	let mut spans: Vec<(f64, f64, f64)> = events
		.iter()
		.filter_map(|e| match e.change {
			RateChange::DesiredRate {
				start,
				original_span,
				scale_factor,
			} => Some((start, start + original_span, scale_factor)),
			_ => None,
		})
		.collect();
	if !spans.is_empty() {
		spans.sort_by(|a, b| a.0.total_cmp(&b.0));
		return integrate_desired(target, &spans) + offset;
	}

	integrate_multipliers(target, events) + offset
}

fn integrate_desired(target: f64, spans: &[(f64, f64, f64)]) -> f64 {
	let mut elapsed = 0.0;
	let mut last_end = 0.0;
	for &(start, end, scale) in spans {
		if start > last_end {
			if target <= start {
				return elapsed + (target - last_end);
			}
			elapsed += start - last_end;
		}
		if target <= end {
			return elapsed + (target - start) * scale;
		}
		elapsed += (end - start) * scale;
		last_end = end;
	}
	if target > last_end {
		elapsed += target - last_end;
	}
	elapsed
}

#[derive(Debug, Clone, Copy)]
enum Transition {
	Base(f64),
	Range {
		end: f64,
		speed: f64,
	},
}

fn speed_of(scale: f64) -> f64 {
	if scale > 0.0 { 1.0 / scale } else { 1.0 }
}

fn integrate_multipliers(target: f64, events: &[RateEvent]) -> f64 {
	let mut transitions: Vec<(f64, Transition)> = events
		.iter()
		.filter_map(|e| match e.change {
			RateChange::SetRate {
				value,
			} => Some((e.frame, Transition::Base(if value > 0.0 { value } else { 1.0 }))),
			RateChange::DurationMultiplier {
				value,
			} => Some((e.frame, Transition::Base(speed_of(value)))),
			RateChange::RangeRemap {
				start,
				end,
				scale_factor,
			} => {
				let begin = e.frame.max(start);
				(end > begin).then_some((
					begin,
					Transition::Range {
						end,
						speed: speed_of(scale_factor),
					},
				))
			}
			RateChange::DesiredRate {
				..
			} => None,
		})
		.collect();
	transitions.sort_by(|a, b| a.0.total_cmp(&b.0));

	let mut real = 0.0;
	let mut cursor = 0.0;
	let mut base = 1.0;
	let mut range: Option<(f64, f64)> = None;

	for (frame, transition) in transitions {
		if let Some((end, speed)) = range
			&& end <= frame
		{
			if target <= end {
				return real + (target - cursor).max(0.0) / speed;
			}
			real += (end - cursor) / speed;
			cursor = end;
			range = None;
		}

		let speed = range.map_or(base, |(_, s)| s);
		if frame >= target {
			return real + (target - cursor) / speed;
		}
		if frame > cursor {
			real += (frame - cursor) / speed;
			cursor = frame;
		}

		match transition {
			Transition::Base(speed) => {
				base = speed;
				range = None;
			}
			Transition::Range {
				end,
				speed,
			} => range = Some((end, speed)),
		}
	}

	if let Some((end, speed)) = range {
		if target <= end {
			return real + (target - cursor).max(0.0) / speed;
		}
		real += (end - cursor) / speed;
		cursor = end;
	}
	if target > cursor {
		real += (target - cursor) / base;
	}
	real
}

/// Active-frame display value: the next whole frame at or after `real`
pub fn active_frame_display(real: f64) -> i64 {
	real.ceil() as i64
}

/// First-actionable-frame display value: `real` rounded half to even
pub fn actionable_frame_display(real: f64) -> i64 {
	real.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::script::VariableTable;

	fn duration(frame: f64, value: f64) -> RateEvent {
		RateEvent::new(
			frame,
			RateChange::DurationMultiplier {
				value,
			},
		)
	}

	#[test]
	fn test_identity_without_events() {
		for target in [0.0, 1.0, 7.5, 42.0] {
			assert_eq!(to_real_frame(target, &[]), target);
		}
	}

	#[test]
	fn test_duration_multiplier_at_start() {
		let events = [duration(0.0, 0.5)];
		assert_eq!(to_real_frame(10.0, &events), 6.0);
		assert_eq!(to_real_frame(4.0, &events), 3.0);
	}

	#[test]
	fn test_unity_at_start_has_no_offset() {
		let events = [duration(0.0, 1.0)];
		assert_eq!(to_real_frame(10.0, &events), 10.0);
	}

	#[test]
	fn test_range_remap_span() {
		let events = [RateEvent::new(
			10.0,
			RateChange::RangeRemap {
				start: 10.0,
				end: 20.0,
				scale_factor: 0.5,
			},
		)];
		assert_eq!(to_real_frame(15.0, &events), 12.5);
		assert_eq!(to_real_frame(25.0, &events), 20.0);
		assert_eq!(to_real_frame(5.0, &events), 5.0);
	}

	#[test]
	fn test_set_rate_midway() {
		let events = [RateEvent::new(
			4.0,
			RateChange::SetRate {
				value: 2.0,
			},
		)];
		assert_eq!(to_real_frame(4.0, &events), 4.0);
		assert_eq!(to_real_frame(10.0, &events), 7.0);
	}

	#[test]
	fn test_later_rate_replaces_range() {
		let events = [
			RateEvent::new(
				0.0,
				RateChange::RangeRemap {
					start: 1.0,
					end: 11.0,
					scale_factor: 2.0,
				},
			),
			duration(5.0, 1.0),
		];
		// frames 1..5 at half speed, then normal speed; offset for the frame-0 change
		assert_eq!(to_real_frame(9.0, &events), 1.0 + 8.0 + 4.0 + 1.0);
	}

	#[test]
	fn test_desired_rate_takes_priority() {
		let events = [
			duration(0.0, 2.0),
			RateEvent::new(
				5.0,
				RateChange::DesiredRate {
					start: 5.0,
					original_span: 10.0,
					scale_factor: 0.5,
				},
			),
		];
		// the frame-0 multiplier only contributes the offset
		assert_eq!(to_real_frame(3.0, &events), 4.0);
		assert_eq!(to_real_frame(9.0, &events), 5.0 + 2.0 + 1.0);
		assert_eq!(to_real_frame(20.0, &events), 5.0 + 5.0 + 5.0 + 1.0);
	}

	#[test]
	fn test_parse_rate_shapes() {
		let vars: VariableTable = [("rate", "0.5")].into_iter().collect();
		let resolver = Resolver::new(&vars);

		let event = parse_rate_change("FT_MOTION_RATE(agent, rate);", 3.0, &resolver).unwrap();
		assert_eq!(event, duration(3.0, 0.5));

		let event = parse_rate_change("MotionModule::set_rate(boma, 1.5);", 0.0, &resolver).unwrap();
		assert_eq!(
			event.change,
			RateChange::SetRate {
				value: 1.5
			}
		);

		let event = parse_rate_change("FT_MOTION_RATE_RANGE(agent, 2.0, 12.0, 5.0);", 2.0, &resolver).unwrap();
		assert_eq!(
			event.change,
			RateChange::RangeRemap {
				start: 2.0,
				end: 12.0,
				scale_factor: 0.5
			}
		);

		let event = parse_rate_change("FT_DESIRED_RATE(agent, 10.0, 15.0);", 4.0, &resolver).unwrap();
		assert_eq!(
			event.change,
			RateChange::DesiredRate {
				start: 4.0,
				original_span: 10.0,
				scale_factor: 1.5
			}
		);
	}

	#[test]
	fn test_parse_rate_nested_value() {
		let resolver = Resolver::empty();
		let event = parse_rate_change("FT_MOTION_RATE(agent, 10.0/(9.0 - 1.0));", 0.0, &resolver).unwrap();
		assert_eq!(event, duration(0.0, 1.25));
	}

	#[test]
	fn test_parse_rate_rejects_bad_spans() {
		let resolver = Resolver::empty();
		assert!(parse_rate_change("FT_MOTION_RATE_RANGE(agent, 12.0, 12.0, 5.0);", 0.0, &resolver).is_none());
		assert!(parse_rate_change("FT_DESIRED_RATE(agent, 0.0, 5.0);", 0.0, &resolver).is_none());
		assert!(parse_rate_change("frame(lua_state, 3.0);", 0.0, &resolver).is_none());
	}

	#[test]
	fn test_display_rounding() {
		assert_eq!(active_frame_display(12.1), 13);
		assert_eq!(active_frame_display(12.0), 12);
		assert_eq!(actionable_frame_display(12.5), 12);
		assert_eq!(actionable_frame_display(13.5), 14);
	}
}
