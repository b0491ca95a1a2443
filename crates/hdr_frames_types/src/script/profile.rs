//! Per-move behaviour switches consumed by the scanner and selection.

use super::resolve::VariantModifier;
use super::scanner::HitValues;
use super::throw_total::{AbsoluteThrowPolicy, RegularThrowPolicy};

/// Broad move class that changes how calls are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveClass {
	/// Grab: only `CATCH` calls count, reported as a frame
	Grab,
	/// Pummel and throws: totals, release frames and absolute-throw layouts apply
	Throw,
	/// Any other attack
	#[default]
	Other,
}

impl MoveClass {
	/// Returns `true` for grabs
	pub fn is_grab(self) -> bool {
		self == Self::Grab
	}

	/// Returns `true` for pummel and throws
	pub fn is_throw(self) -> bool {
		self == Self::Throw
	}
}

/// Synthetic hit inserted when a projectile is fired.
///
/// Used where the scored hit lives on a projectile whose own script is not
/// scanned. `marker` is matched on top-level lines, `strict_marker` inside
/// conditional blocks. Without any shot the hit lands at `default_frame`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotInjection {
	/// Substring identifying the shot on top-level lines
	pub marker: String,
	/// Substring identifying the shot inside conditional blocks
	pub strict_marker: String,
	/// Hit values recorded for the shot
	pub hit: HitValues,
	/// Animation frame used when no shot call is seen
	pub default_frame: f64,
}

/// Damage attributed to a spawned article during a throw
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDamage {
	/// Article constant, without the leading `*`
	pub article: String,
	/// Damage added per spawn
	pub damage: f64,
}

/// Replacement for the computed active frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOverride {
	/// Always report this real frame
	Fixed(f64),
	/// Report this real frame when the scored animation frame is 0
	WhenAnimationZero(f64),
}

/// Everything the engine needs to know about one (character, move) pair.
///
/// The default profile describes a plain attack with no overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveProfile {
	/// Move class
	pub class: MoveClass,
	/// Substitution for `p.dmg` / `p.angle` placeholders
	pub variant: Option<VariantModifier>,
	/// Conditional guards whose blocks are skipped entirely
	pub suppress_guards: Vec<String>,
	/// Synthetic projectile hit
	pub shot: Option<ShotInjection>,
	/// Article spawn constants that mark the release frame
	pub release_markers: Vec<String>,
	/// Ignore `ATTACK_ABS` calls when choosing the hit
	pub exclude_absolute: bool,
	/// Aggregation of absolute throw hits
	pub absolute_policy: AbsoluteThrowPolicy,
	/// Aggregation of regular hits in a throw
	pub regular_policy: RegularThrowPolicy,
	/// Article damage added to throw totals
	pub articles: Vec<ArticleDamage>,
	/// Active frame replacement
	pub frame_override: Option<FrameOverride>,
	/// Final damage replacement
	pub damage_override: Option<f64>,
}

impl MoveProfile {
	/// A profile with no overrides for the given class
	pub fn new(class: MoveClass) -> Self {
		Self {
			class,
			..Self::default()
		}
	}
}
