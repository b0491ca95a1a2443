//! Motion lists and the first-actionable-frame table.
//!
//! A motion list maps motion keys (`attack_air_n`, `throw_f`, ...) to the
//! script and animation they play and, optionally, a cancel frame:
//!
//! ```yaml
//! list:
//!   attack_air_n:
//!     game_script: game_attackairn
//!     animations:
//!       - name: c00attackairn.nuanmb
//!     extra:
//!       cancel_frame: 38
//! ```
//!
//! The game's list is read first and a mod patch file is layered on top.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use serde_yaml::Value;

use super::animation::AnimationDir;
use crate::diagnostics::Diagnostics;
use crate::error::DataError;
use crate::moves::MoveKind;

/// One motion list entry
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MotionEntry {
	/// Script function played by the motion
	pub game_script: String,
	/// Name of the first animation
	pub animation: String,
	/// Frame the motion becomes cancellable, when given
	pub cancel_frame: Option<f64>,
}

impl MotionEntry {
	fn from_value(value: &Value) -> Option<Self> {
		let map = value.as_mapping()?;
		let game_script = map.get("game_script").and_then(Value::as_str).unwrap_or_default().to_owned();
		let animation = map
			.get("animations")
			.and_then(Value::as_sequence)
			.and_then(|animations| animations.first())
			.and_then(|first| first.get("name"))
			.and_then(Value::as_str)
			.unwrap_or_default()
			.to_owned();
		let cancel_frame = map.get("extra").and_then(|extra| extra.get("cancel_frame")).and_then(Value::as_f64);
		Some(Self {
			game_script,
			animation,
			cancel_frame,
		})
	}
}

/// Motion entries in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionList {
	entries: Vec<(String, MotionEntry)>,
}

impl MotionList {
	/// Reads and parses a motion list
	pub fn load(path: &Path) -> Result<Self, DataError> {
		let text = std::fs::read_to_string(path)?;
		Self::parse(&text, path)
	}

	/// Parses a motion list; `path` is only used in errors.
	///
	/// Entries are read from a top-level `list` mapping when present and
	/// from the root otherwise. Non-mapping values are skipped.
	pub fn parse(text: &str, path: &Path) -> Result<Self, DataError> {
		let document: Value = serde_yaml::from_str(text).map_err(|source| DataError::Yaml {
			path: path.to_path_buf(),
			source,
		})?;
		let root = document.get("list").unwrap_or(&document);
		let Some(mapping) = root.as_mapping() else {
			return Ok(Self::default());
		};

		let entries = mapping
			.iter()
			.filter_map(|(key, value)| Some((key.as_str()?.to_owned(), MotionEntry::from_value(value)?)))
			.collect();
		Ok(Self {
			entries,
		})
	}

	/// Layers a patch on top of this list.
	///
	/// Known keys only take the patch's cancel frame, and only when the
	/// patch gives one. Unknown keys are appended whole.
	pub fn apply_patch(&mut self, patch: Self) {
		for (key, patched) in patch.entries {
			match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
				Some((_, entry)) => {
					if patched.cancel_frame.is_some() {
						entry.cancel_frame = patched.cancel_frame;
					}
				}
				None => self.entries.push((key, patched)),
			}
		}
	}

	/// Entry for a motion key
	pub fn get(&self, key: &str) -> Option<&MotionEntry> {
		self.entries.iter().find(|(existing, _)| existing == key).map(|(_, entry)| entry)
	}

	/// Positive cancel frame of a motion key
	pub fn cancel_frame(&self, key: &str) -> Option<f64> {
		self.get(key)?.cancel_frame.filter(|frame| *frame > 0.0)
	}

	/// Entries in document order, patch additions last
	pub fn iter(&self) -> impl Iterator<Item = (&str, &MotionEntry)> {
		self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
	}

	/// Number of entries
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the list has no entries
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Move a motion key reports its cancel frame for
pub fn move_for_motion_key(key: &str) -> Option<MoveKind> {
	Some(match key {
		"attack_11" | "attack_11_w" | "attack_11_s" | "attack_100_end" => MoveKind::Jab1,
		"attack_12" | "attack_12_s" => MoveKind::Jab2,
		"attack_13" => MoveKind::Jab3,
		"attack_s3_s" => MoveKind::Ftilt,
		"attack_hi3" => MoveKind::Utilt,
		"attack_lw3" => MoveKind::Dtilt,
		"attack_s4_s" => MoveKind::Fsmash,
		"attack_hi4" => MoveKind::Usmash,
		"attack_lw4" => MoveKind::Dsmash,
		"attack_air_n" => MoveKind::Nair,
		"attack_air_f" => MoveKind::Fair,
		"attack_air_b" => MoveKind::Bair,
		"attack_air_hi" => MoveKind::Uair,
		"attack_air_lw" => MoveKind::Dair,
		"attack_dash" => MoveKind::DashAttack,
		"catch" => MoveKind::Grab,
		"catch_dash" => MoveKind::DashGrab,
		"catch_turn" => MoveKind::PivotGrab,
		"catch_attack" | "catch_attack_f" | "catch_attack_s" | "catch_atk" | "catch_attack_w" | "catchattack" => {
			MoveKind::Pummel
		}
		"throw_f" => MoveKind::Fthrow,
		"throw_b" => MoveKind::Bthrow,
		"throw_hi" => MoveKind::Uthrow,
		"throw_lw" => MoveKind::Dthrow,
		"special_n" => MoveKind::NeutralB,
		"special_s" => MoveKind::SideB,
		"special_hi" => MoveKind::UpB,
		"special_lw" => MoveKind::DownB,
		"special_air_n" => MoveKind::NeutralBAir,
		"special_air_s" => MoveKind::SideBAir,
		"special_air_hi" => MoveKind::UpBAir,
		"special_air_lw" => MoveKind::DownBAir,
		_ => return None,
	})
}

/// Animation-time final frame of each move of one fighter
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FafTable {
	frames: BTreeMap<MoveKind, f64>,
}

impl FafTable {
	/// Builds the table from a motion list and the fighter's animation directory.
	///
	/// - A positive cancel frame is used as is; later keys for the same move win.
	/// - A zero cancel frame falls back to the first matching animation with a
	///   positive final frame.
	/// - Moves still missing take the `c00`..`c09` animation of the move.
	pub fn build(motions: &MotionList, animations: &AnimationDir, diagnostics: &dyn Diagnostics) -> Self {
		let mut frames = BTreeMap::new();
		for (key, entry) in motions.iter() {
			let Some(kind) = move_for_motion_key(key) else {
				continue;
			};
			match entry.cancel_frame {
				Some(cancel) if cancel > 0.0 => {
					frames.insert(kind, cancel);
				}
				Some(cancel) if cancel == 0.0 => {
					if let Some(frame) = animations.pattern_final_frame(kind, diagnostics) {
						frames.insert(kind, frame);
					}
				}
				_ => {}
			}
		}

		for kind in MoveKind::ALL {
			if frames.contains_key(&kind) {
				continue;
			}
			if let Some(frame) = animations.costume_final_frame(kind, diagnostics) {
				frames.insert(kind, frame);
			}
		}
		Self {
			frames,
		}
	}

	/// Sets the final frame of a move
	pub fn insert(&mut self, kind: MoveKind, frame: f64) {
		self.frames.insert(kind, frame);
	}

	/// Final frame of a move
	pub fn get(&self, kind: MoveKind) -> Option<f64> {
		self.frames.get(&kind).copied()
	}

	/// Returns `true` if no move has a final frame
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}
}

impl FromIterator<(MoveKind, f64)> for FafTable {
	fn from_iter<I: IntoIterator<Item = (MoveKind, f64)>>(iter: I) -> Self {
		Self {
			frames: iter.into_iter().collect(),
		}
	}
}
