//! Per-character exceptions, kept as data.
//!
//! The generic pipeline never compares character names. Everything a fighter
//! does differently is an entry in an [`OverrideRegistry`]:
//!
//! - source substitutions (another file or function for a move)
//! - expansions into several rows (variants, composites, fixed rows, ammo kinds)
//! - engine switches projected into a [`MoveProfile`]
//! - fallback lookup roots and sub-directories
//!
//! [`OverrideRegistry::hdr`] holds the built-in table for the mod.
//!
//! # Examples
//!
//! ```
//! use hdr_frames_types::moves::MoveKind;
//! use hdr_frames_types::registry::OverrideRegistry;
//!
//! let registry = OverrideRegistry::hdr();
//! let profile = registry.profile("plizardon", MoveKind::Dthrow);
//! assert_eq!(profile.damage_override, Some(10.0));
//! assert!(profile.exclude_absolute);
//!
//! let plain = OverrideRegistry::empty().profile("plizardon", MoveKind::Dthrow);
//! assert_eq!(plain.damage_override, None);
//! ```

mod hdr;

use std::collections::{BTreeMap, BTreeSet};

use crate::moves::MoveKind;
use crate::orchestrator::RowNote;
use crate::script::{
	AbsoluteThrowPolicy, ArticleDamage, FrameOverride, HitValues, LiteralRate, MoveProfile, RegularThrowPolicy,
	ShotInjection, VariantModifier,
};

/// Directory of a fighter's attack scripts, relative to its folder
pub const ACMD_DIR: &str = "src/acmd";

/// A function in a file of the mod tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRef {
	/// Path relative to the fighter folder
	pub path: String,
	/// Function name
	pub function: String,
}

impl ScriptRef {
	/// Creates a reference
	pub fn new(path: impl Into<String>, function: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			function: function.into(),
		}
	}
}

/// Replacement file and/or function for a move's primary script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOverride {
	/// Path relative to the fighter folder
	pub path: Option<String>,
	/// Function name
	pub function: Option<String>,
}

/// Frame of a spawn line in another script of the mod tree
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnAnchor {
	/// Script holding the spawn
	pub script: ScriptRef,
	/// Substrings the spawn line must all contain
	pub needles: Vec<String>,
	/// Rate lines integrated up to the anchor; none means the raw frame
	pub rates: Vec<LiteralRate>,
}

/// Damage from one script, frame from a spawn in another
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
	/// Script whose analysis supplies the hit
	pub damage: ScriptRef,
	/// Spawn supplying the frame
	pub anchor: SpawnAnchor,
}

/// Frame of a marker line in a file of the fallback dump
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackAnchor {
	/// Fallback file name
	pub file: String,
	/// Substrings the marker line must all contain
	pub needles: Vec<String>,
	/// Frame used when no marker is found
	pub default: f64,
}

/// One hard-coded result row
#[derive(Debug, Clone, PartialEq)]
pub struct FixedRow {
	/// Row label
	pub label: String,
	/// Hit values
	pub hit: HitValues,
	/// Mark shown after the damage
	pub damage_mark: Option<char>,
	/// Mark shown after the knockback growth
	pub kbg_mark: Option<char>,
	/// Tooltip
	pub note: Option<RowNote>,
}

/// Rows that replace analysis entirely
#[derive(Debug, Clone, PartialEq)]
pub struct FixedRows {
	/// Mod-tree file that must exist for the rows to be emitted
	pub requires: String,
	/// Frame shared by every row
	pub frame: FallbackAnchor,
	/// Rows in output order
	pub rows: Vec<FixedRow>,
}

/// One function of a multi-function move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
	/// Label suffix, as in `Donkey Kong - Forward`
	pub label: String,
	/// Function name
	pub function: String,
	/// Motion key whose cancel frame replaces the FAF
	pub motion_key: Option<String>,
	/// Fallback file name, when not the move's own
	pub fallback_file: Option<String>,
}

impl Variant {
	/// Variant with no FAF or fallback override
	pub fn new(label: impl Into<String>, function: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			function: function.into(),
			motion_key: None,
			fallback_file: None,
		}
	}

	/// Sets the motion key
	pub fn motion_key(mut self, key: impl Into<String>) -> Self {
		self.motion_key = Some(key.into());
		self
	}

	/// Sets the fallback file name
	pub fn fallback_file(mut self, file: impl Into<String>) -> Self {
		self.fallback_file = Some(file.into());
		self
	}
}

/// A move reported as one row per function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSet {
	/// Variants in output order
	pub variants: Vec<Variant>,
	/// Search the fallback dump when no variant is found in the mod tree
	pub use_fallback: bool,
}

/// Which part of an ammo move is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmmoMove {
	/// Smash attack launched with the ammo; `keep_angle` ignores the angle modifier
	Smash {
		/// Report the base angle unmodified
		keep_angle: bool,
	},
	/// Aerial with an unloaded row and one row per ammo kind
	Aerial,
	/// Throw whose base damage depends on the ammo kind
	Throw,
}

/// One ammo kind and its default modifiers
#[derive(Debug, Clone, PartialEq)]
pub struct AmmoKind {
	/// Match arm key in the info table, `0`..`3` or `_`
	pub key: String,
	/// Display name
	pub name: String,
	/// Modifiers used when the info table lacks this kind
	pub modifier: VariantModifier,
}

/// Ammo-type expansion of a fighter
#[derive(Debug, Clone, PartialEq)]
pub struct AmmoExpansion {
	/// File with the per-kind info table
	pub info_file: String,
	/// Kinds in output order
	pub kinds: Vec<AmmoKind>,
	/// Smash scripts of the ammo
	pub smash_file: String,
	/// Aerial scripts of the ammo
	pub aerial_file: String,
	/// Throw scripts of the ammo
	pub throw_file: String,
	/// Marker of the launch in the fallback smash scripts
	pub launch_needles: Vec<String>,
	/// Base smash damage when the script sets none
	pub default_damage: f64,
	/// Kind taking the first branch of the throw damage split
	pub split_kind: String,
	/// Label of the aerial row without ammo
	pub unloaded_label: String,
	/// Noun after a kind name in tooltips, as in `Red Pikmin`
	pub noun: String,
}

/// How a move expands into rows
#[derive(Debug, Clone, PartialEq)]
pub enum Expansion {
	/// Hit from one script, frame from a spawn anchor
	Composite(Composite),
	/// Hard-coded rows
	FixedRows(FixedRows),
	/// One row per function
	Variants(VariantSet),
	/// One row per ammo kind
	Ammo(AmmoMove),
}

/// Active frame replacement, before fallback anchors are read
#[derive(Debug, Clone, PartialEq)]
pub enum FrameRule {
	/// Always this frame
	Fixed(f64),
	/// This frame when the scored animation frame is 0
	WhenAnimationZero(f64),
	/// Frame of a marker in the fallback dump
	FromFallback(FallbackAnchor),
}

/// Article damage added to a throw total, read from the article's own script first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSource {
	/// Article constant, without the leading `*`
	pub article: String,
	/// Function of the article script
	pub function: String,
	/// Article directory in the fallback dump
	pub dir: String,
	/// File in that directory
	pub file: String,
}

/// [`ArticleSource`] with its literal damage
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleEntry {
	/// Where to read the damage
	pub source: ArticleSource,
	/// Damage used when the script cannot be read
	pub damage: f64,
}

/// Overrides of one (character, move) pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveOverrides {
	/// Primary script substitution
	pub source: Option<SourceOverride>,
	/// Row expansion
	pub expansion: Option<Expansion>,
	/// Synthetic projectile hit
	pub shot: Option<ShotInjection>,
	/// Spawns marking the release frame
	pub release_markers: Vec<String>,
	/// Frame replacement
	pub frame: Option<FrameRule>,
	/// Damage replacement
	pub damage: Option<f64>,
	/// Ignore absolute calls when selecting the hit
	pub exclude_absolute: bool,
	/// Articles adding to the throw total
	pub articles: Vec<ArticleEntry>,
	/// Directory appended to fallback candidates
	pub fallback_subdir: Option<String>,
	/// Absolute throw aggregation
	pub absolute_policy: Option<AbsoluteThrowPolicy>,
	/// Regular throw aggregation
	pub regular_policy: Option<RegularThrowPolicy>,
}

/// Overrides of one character
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterOverrides {
	/// Guards whose blocks are skipped in every move
	pub suppress_guards: Vec<String>,
	/// Folder names searched in the fallback dump after the character's own
	pub extra_fallback_roots: Vec<String>,
	/// Folder used for motion and animation data
	pub data_alias: Option<String>,
	/// Absolute throw aggregation for pummel and throws
	pub absolute_policy: Option<AbsoluteThrowPolicy>,
	/// Regular throw aggregation for pummel and throws
	pub regular_policy: Option<RegularThrowPolicy>,
	/// Ammo expansion
	pub ammo: Option<AmmoExpansion>,
	/// Per-move overrides
	pub moves: BTreeMap<MoveKind, MoveOverrides>,
}

/// Keyed table of per-character exceptions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideRegistry {
	skipped: BTreeSet<String>,
	characters: BTreeMap<String, CharacterOverrides>,
}

impl OverrideRegistry {
	/// A registry with no overrides and no skipped folders
	pub fn empty() -> Self {
		Self::default()
	}

	/// Excludes a fighter folder from runs
	pub fn skip(&mut self, character: impl Into<String>) -> &mut Self {
		self.skipped.insert(character.into());
		self
	}

	/// Returns `true` if the folder is excluded from runs
	pub fn is_skipped(&self, character: &str) -> bool {
		self.skipped.contains(character)
	}

	/// Overrides of a character, created empty on first use
	pub fn character_mut(&mut self, character: impl Into<String>) -> &mut CharacterOverrides {
		self.characters.entry(character.into()).or_default()
	}

	/// Overrides of a (character, move) pair, created empty on first use
	pub fn entry_mut(&mut self, character: impl Into<String>, kind: MoveKind) -> &mut MoveOverrides {
		self.character_mut(character).moves.entry(kind).or_default()
	}

	/// Overrides of a character
	pub fn character(&self, character: &str) -> Option<&CharacterOverrides> {
		self.characters.get(character)
	}

	/// Overrides of a (character, move) pair
	pub fn entry(&self, character: &str, kind: MoveKind) -> Option<&MoveOverrides> {
		self.character(character)?.moves.get(&kind)
	}

	/// Primary script of a move: the override when present, else `src/acmd/{file}` and the default function
	pub fn primary_script(&self, character: &str, kind: MoveKind) -> ScriptRef {
		let source = self.entry(character, kind).and_then(|entry| entry.source.as_ref());
		let path = source
			.and_then(|source| source.path.clone())
			.unwrap_or_else(|| format!("{ACMD_DIR}/{}", kind.primary_file()));
		let function = source
			.and_then(|source| source.function.clone())
			.unwrap_or_else(|| kind.function_name().to_owned());
		ScriptRef {
			path,
			function,
		}
	}

	/// Folder names searched in the fallback dump, own folder first
	pub fn fallback_roots(&self, character: &str) -> Vec<String> {
		let mut roots = vec![character.to_owned()];
		if let Some(overrides) = self.character(character) {
			roots.extend(overrides.extra_fallback_roots.iter().cloned());
		}
		roots
	}

	/// Sub-directory of the fallback search for a move
	pub fn fallback_subdir(&self, character: &str, kind: MoveKind) -> Option<&str> {
		self.entry(character, kind)?.fallback_subdir.as_deref()
	}

	/// Folder used for motion and animation data
	pub fn data_name<'a>(&'a self, character: &'a str) -> &'a str {
		self.character(character).and_then(|overrides| overrides.data_alias.as_deref()).unwrap_or(character)
	}

	/// Ammo expansion of a character
	pub fn ammo(&self, character: &str) -> Option<&AmmoExpansion> {
		self.character(character)?.ammo.as_ref()
	}

	/// Engine switches for a (character, move) pair.
	///
	/// Article damage takes the literal values and fallback frame anchors are
	/// left unset; callers with file access fill both in.
	pub fn profile(&self, character: &str, kind: MoveKind) -> MoveProfile {
		let mut profile = MoveProfile::new(kind.class());
		let Some(overrides) = self.character(character) else {
			return profile;
		};

		profile.suppress_guards.clone_from(&overrides.suppress_guards);
		if overrides.ammo.is_some() {
			profile.variant = Some(VariantModifier::default());
		}
		if profile.class.is_throw() {
			if let Some(policy) = overrides.absolute_policy {
				profile.absolute_policy = policy;
			}
			if let Some(policy) = &overrides.regular_policy {
				profile.regular_policy = policy.clone();
			}
		}

		let Some(entry) = overrides.moves.get(&kind) else {
			return profile;
		};
		profile.shot.clone_from(&entry.shot);
		profile.release_markers.clone_from(&entry.release_markers);
		profile.exclude_absolute = entry.exclude_absolute;
		profile.damage_override = entry.damage;
		profile.frame_override = match &entry.frame {
			Some(FrameRule::Fixed(frame)) => Some(FrameOverride::Fixed(*frame)),
			Some(FrameRule::WhenAnimationZero(frame)) => Some(FrameOverride::WhenAnimationZero(*frame)),
			Some(FrameRule::FromFallback(_)) | None => None,
		};
		profile.articles = entry
			.articles
			.iter()
			.map(|article| ArticleDamage {
				article: article.source.article.clone(),
				damage: article.damage,
			})
			.collect();
		if let Some(policy) = entry.absolute_policy {
			profile.absolute_policy = policy;
		}
		if let Some(policy) = &entry.regular_policy {
			profile.regular_policy = policy.clone();
		}
		profile
	}

	/// Characters with overrides, sorted
	pub fn characters(&self) -> impl Iterator<Item = &str> {
		self.characters.keys().map(String::as_str)
	}
}
