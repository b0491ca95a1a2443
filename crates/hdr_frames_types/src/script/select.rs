//! Choosing the hit and frame that represent a move.

use super::profile::{MoveClass, MoveProfile};
use super::scanner::{AttackCall, CallKind, HitValues};

/// Representative values of a move, before rate integration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
	/// Reported hit values
	pub hit: HitValues,
	/// Animation frame to display
	pub frame: f64,
}

/// Damage values that never represent a real hit
const PLACEHOLDER_DAMAGE: [f64; 2] = [0.0, 40.0];

fn first_by<'a>(calls: &[&'a AttackCall], better: impl Fn(&AttackCall, &AttackCall) -> bool) -> Option<&'a AttackCall> {
	let mut best: Option<&AttackCall> = None;
	for &call in calls {
		if best.is_none_or(|current| better(call, current)) {
			best = Some(call);
		}
	}
	best
}

fn earliest<'a>(calls: &[&'a AttackCall]) -> Option<&'a AttackCall> {
	first_by(calls, |a, b| a.frame < b.frame)
}

fn latest<'a>(calls: &[&'a AttackCall]) -> Option<&'a AttackCall> {
	first_by(calls, |a, b| a.frame > b.frame)
}

fn strongest<'a>(calls: &[&'a AttackCall]) -> Option<&'a AttackCall> {
	first_by(calls, |a, b| a.hit.damage > b.hit.damage)
}

/// Picks the scoring hit and display frame of a move.
///
/// - Grabs use the earliest `CATCH` frame and carry no hit values.
/// - Other moves consider calls with positive damage, ignoring the placeholder
///   values 0 and 40. The display frame is the earliest such call, and the
///   scoring hit is the strongest one (the first on ties).
/// - Throws display their latest hit and score their earliest hit. A positive
///   `throw_total` replaces its damage.
/// - A known `release_frame` replaces the display frame.
/// - When no call resolved its damage, the earliest unresolved call is used.
///
/// # Examples
///
/// ```
/// use hdr_frames_types::script::{AttackCall, CallKind, HitValues, MoveProfile, select};
///
/// let call = |damage, frame| AttackCall {
/// 	hit: HitValues { damage: Some(damage), ..Default::default() },
/// 	frame,
/// 	kind: CallKind::NormalAttack,
/// 	raw_params: String::new(),
/// };
/// let calls = [call(5.0, 3.0), call(12.0, 9.0), call(8.0, 1.0)];
/// let selection = select(&calls, &MoveProfile::default(), None, None).unwrap();
/// assert_eq!(selection.hit.damage, Some(12.0));
/// assert_eq!(selection.frame, 1.0);
/// ```
pub fn select(
	calls: &[AttackCall],
	profile: &MoveProfile,
	release_frame: Option<f64>,
	throw_total: Option<f64>,
) -> Option<Selection> {
	if profile.class == MoveClass::Grab {
		let catches: Vec<&AttackCall> = calls.iter().filter(|c| c.kind == CallKind::CatchGrab).collect();
		return earliest(&catches).map(|call| Selection {
			hit: HitValues::default(),
			frame: call.frame,
		});
	}

	let candidates: Vec<&AttackCall> = calls
		.iter()
		.filter(|c| c.kind != CallKind::CatchGrab)
		.filter(|c| !(profile.exclude_absolute && c.kind == CallKind::AbsoluteAttack))
		.collect();
	let scoring: Vec<&AttackCall> = candidates
		.iter()
		.copied()
		.filter(|c| c.hit.damage.is_some_and(|d| d > 0.0 && !PLACEHOLDER_DAMAGE.contains(&d)))
		.collect();

	if scoring.is_empty() {
		let unresolved: Vec<&AttackCall> = candidates.into_iter().filter(|c| c.hit.damage.is_none()).collect();
		return earliest(&unresolved).map(|call| Selection {
			hit: call.hit,
			frame: call.frame,
		});
	}

	let is_throw = profile.class.is_throw();
	let frame = match release_frame {
		Some(release) => release,
		None if is_throw => latest(&scoring)?.frame,
		None => earliest(&scoring)?.frame,
	};
	let chosen = if is_throw { earliest(&scoring)? } else { strongest(&scoring)? };

	let mut hit = chosen.hit;
	if is_throw && let Some(total) = throw_total.filter(|t| *t > 0.0) {
		hit.damage = Some(total);
	}
	Some(Selection {
		hit,
		frame,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn call(damage: Option<f64>, frame: f64, kind: CallKind) -> AttackCall {
		AttackCall {
			hit: HitValues {
				damage,
				angle: Some(45.0),
				..HitValues::default()
			},
			frame,
			kind,
			raw_params: String::new(),
		}
	}

	fn normal(damage: f64, frame: f64) -> AttackCall {
		call(Some(damage), frame, CallKind::NormalAttack)
	}

	#[test]
	fn test_strongest_hit_earliest_frame() {
		let calls = [normal(5.0, 3.0), normal(12.0, 9.0), normal(8.0, 1.0)];
		let selection = select(&calls, &MoveProfile::default(), None, None).unwrap();
		assert_eq!(selection.hit.damage, Some(12.0));
		assert_eq!(selection.frame, 1.0);
	}

	#[test]
	fn test_ties_keep_first() {
		let mut first = normal(10.0, 6.0);
		first.hit.angle = Some(361.0);
		let calls = [first, normal(10.0, 4.0)];
		let selection = select(&calls, &MoveProfile::default(), None, None).unwrap();
		assert_eq!(selection.hit.angle, Some(361.0));
		assert_eq!(selection.frame, 4.0);
	}

	#[test]
	fn test_placeholder_damage_ignored() {
		let calls = [normal(40.0, 2.0), normal(0.0, 3.0), normal(6.0, 8.0)];
		let selection = select(&calls, &MoveProfile::default(), None, None).unwrap();
		assert_eq!(selection.hit.damage, Some(6.0));
		assert_eq!(selection.frame, 8.0);
	}

	#[test]
	fn test_throw_release_and_total() {
		let profile = MoveProfile::new(MoveClass::Throw);
		let calls = [normal(3.0, 4.0), normal(6.0, 10.0)];
		let selection = select(&calls, &profile, Some(12.0), Some(9.0)).unwrap();
		assert_eq!(selection.frame, 12.0);
		assert_eq!(selection.hit.damage, Some(9.0));

		let selection = select(&calls, &profile, None, Some(0.0)).unwrap();
		assert_eq!(selection.frame, 10.0);
		assert_eq!(selection.hit.damage, Some(3.0));
	}

	#[test]
	fn test_exclude_absolute() {
		let mut profile = MoveProfile::new(MoveClass::Throw);
		profile.exclude_absolute = true;
		let calls = [call(Some(11.0), 2.0, CallKind::AbsoluteAttack), normal(4.0, 20.0)];
		let selection = select(&calls, &profile, None, None).unwrap();
		assert_eq!(selection.hit.damage, Some(4.0));
		assert_eq!(selection.frame, 20.0);
	}

	#[test]
	fn test_grab_uses_catch_frame() {
		let profile = MoveProfile::new(MoveClass::Grab);
		let calls = [call(None, 9.0, CallKind::CatchGrab), call(None, 7.0, CallKind::CatchGrab)];
		let selection = select(&calls, &profile, None, None).unwrap();
		assert_eq!(selection.frame, 7.0);
		assert_eq!(selection.hit, HitValues::default());
		assert!(select(&[normal(5.0, 1.0)], &profile, None, None).is_none());
	}

	#[test]
	fn test_unresolved_fallback() {
		let calls = [call(None, 6.0, CallKind::NormalAttack), call(None, 2.0, CallKind::NormalAttack)];
		let selection = select(&calls, &MoveProfile::default(), None, None).unwrap();
		assert_eq!(selection.frame, 2.0);
		assert_eq!(selection.hit.damage, None);
		assert!(select(&[normal(0.0, 1.0)], &MoveProfile::default(), None, None).is_none());
		assert!(select(&[], &MoveProfile::default(), None, None).is_none());
	}
}
