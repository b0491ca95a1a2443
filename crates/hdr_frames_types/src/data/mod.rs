//! Auxiliary game data: fighter names, parameters, motion lists and animations.
//!
//! The script engine only needs a few scalars from these sources. They are
//! loaded once into a [`GameData`] and queried through [`DataSource`].

pub mod animation;
pub mod fighter_param;
pub mod motion;
pub mod roster;

use std::collections::BTreeMap;

use crate::diagnostics::Diagnostics;
use crate::moves::MoveKind;
use crate::settings::Settings;

use animation::AnimationDir;
use fighter_param::{FighterParams, FighterStats};
use motion::{FafTable, MotionList};

/// Scalar lookups the orchestrator needs besides script text
pub trait DataSource {
	/// Landing lag of an aerial, by display name; 0 when unknown
	fn landing_lag(&self, character: &str, kind: MoveKind) -> u32;

	/// Animation-time final frame of a move, by folder name
	fn move_final_frame(&self, character: &str, kind: MoveKind) -> Option<f64>;

	/// Positive cancel frame of a raw motion key, by folder name
	fn motion_cancel_frame(&self, character: &str, motion_key: &str) -> Option<f64>;

	/// Physical stats, by display name
	fn fighter_stats(&self, character: &str) -> Option<&FighterStats>;
}

/// Motion data of one fighter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterMotion {
	/// Merged motion list
	pub motions: MotionList,
	/// Final frame per move
	pub faf: FafTable,
}

/// In-memory [`DataSource`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameData {
	params: FighterParams,
	characters: BTreeMap<String, CharacterMotion>,
}

impl GameData {
	/// Data with parameters and no motion data
	pub fn new(params: FighterParams) -> Self {
		Self {
			params,
			characters: BTreeMap::new(),
		}
	}

	/// Adds or replaces the motion data of a fighter
	pub fn insert_character(&mut self, character: impl Into<String>, motion: CharacterMotion) {
		self.characters.insert(character.into(), motion);
	}

	/// Fighter parameters
	pub fn params(&self) -> &FighterParams {
		&self.params
	}

	/// Physical stats of every fighter, by display name
	pub fn all_stats(&self) -> &BTreeMap<String, FighterStats> {
		&self.params.stats
	}

	/// Loads parameters and the motion data of `characters`.
	///
	/// Unreadable sources are reported and left empty; loading never fails.
	pub fn load<'c>(
		settings: &Settings,
		characters: impl IntoIterator<Item = &'c str>,
		diagnostics: &dyn Diagnostics,
	) -> Self {
		let mut data = Self::new(load_params(settings, diagnostics));
		for character in characters {
			if data.characters.contains_key(character) {
				continue;
			}
			let motion = load_motion(settings, character, diagnostics);
			data.insert_character(character, motion);
		}
		data
	}

	fn motion(&self, character: &str) -> Option<&CharacterMotion> {
		self.characters.get(character)
	}
}

impl DataSource for GameData {
	fn landing_lag(&self, character: &str, kind: MoveKind) -> u32 {
		self.params.landing_lag.get(character).map_or(0, |lag| lag.get(kind))
	}

	fn move_final_frame(&self, character: &str, kind: MoveKind) -> Option<f64> {
		self.motion(character)?.faf.get(kind)
	}

	fn motion_cancel_frame(&self, character: &str, motion_key: &str) -> Option<f64> {
		self.motion(character)?.motions.cancel_frame(motion_key)
	}

	fn fighter_stats(&self, character: &str) -> Option<&FighterStats> {
		self.params.stats.get(character)
	}
}

fn load_params(settings: &Settings, diagnostics: &dyn Diagnostics) -> FighterParams {
	let read = |path: &std::path::Path| match FighterParams::load(path) {
		Ok(params) => {
			diagnostics.info(format_args!(
				"Loaded {} fighters from {}",
				params.stats.len(),
				path.display()
			));
			params
		}
		Err(err) => {
			diagnostics.warn(format_args!("Cannot load fighter parameters from {}: {err}", path.display()));
			FighterParams::default()
		}
	};

	let primary = read(&settings.fighter_param_path());
	match settings.fighter_param_fallback.as_deref().filter(|path| path.is_file()) {
		Some(path) => primary.merge(read(path)),
		None => primary,
	}
}

fn load_motion(settings: &Settings, character: &str, diagnostics: &dyn Diagnostics) -> CharacterMotion {
	let read = |path: std::path::PathBuf| {
		if !path.is_file() {
			return None;
		}
		match MotionList::load(&path) {
			Ok(list) => Some(list),
			Err(err) => {
				diagnostics.warn(format_args!("Cannot load motion list {}: {err}", path.display()));
				None
			}
		}
	};

	let mut motions = read(settings.motion_list_path(character)).unwrap_or_default();
	if let Some(patch) = read(settings.motion_patch_path(character)) {
		motions.apply_patch(patch);
	}
	if motions.is_empty() {
		diagnostics.debug(format_args!("No motion data for {character}"));
		return CharacterMotion::default();
	}

	let animations = AnimationDir::for_character(&settings.animations, character);
	let faf = FafTable::build(&motions, &animations, diagnostics);
	CharacterMotion {
		motions,
		faf,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::diagnostics::CollectingDiagnostics;

	#[test]
	fn test_empty_data_defaults() {
		let data = GameData::default();
		assert_eq!(data.landing_lag("Mario", MoveKind::Nair), 0);
		assert_eq!(data.move_final_frame("mario", MoveKind::Jab1), None);
		assert!(data.fighter_stats("Mario").is_none());
	}

	#[test]
	fn test_load_from_disk() {
		let root = tempfile::tempdir().unwrap();
		let body = root.path().join("Animations/mario/body");
		std::fs::create_dir_all(&body).unwrap();
		std::fs::write(
			body.join("motion_list.yml"),
			"list:\n  attack_air_n:\n    game_script: game_attackairn\n    extra:\n      cancel_frame: 0\n  throw_f:\n    extra:\n      cancel_frame: 28\n",
		)
		.unwrap();
		std::fs::write(body.join("c00attackairn.json"), r#"{"final_frame_index": 39}"#).unwrap();

		let patch_dir = root.path().join("hdr/romfs/source/fighter/mario/motion/body");
		std::fs::create_dir_all(&patch_dir).unwrap();
		std::fs::write(patch_dir.join("motion_patch.yaml"), "throw_f:\n  extra:\n    cancel_frame: 31\n").unwrap();

		let param = root.path().join("param.prcxml");
		std::fs::write(
			&param,
			"<list hash=\"fighter_param_table\">\n<!-- MARIO -->\n<struct index=\"0\">\n<float hash=\"landing_attack_air_frame_n\">7</float>\n</struct>\n</list>\n",
		)
		.unwrap();

		let settings = Settings {
			animations: root.path().join("Animations"),
			hdr_root: root.path().join("hdr"),
			fighter_param: Some(param),
			fighter_param_fallback: None,
			..Settings::default()
		};
		let sink = CollectingDiagnostics::new();
		let data = GameData::load(&settings, ["mario", "luigi"], &sink);

		assert_eq!(data.landing_lag("Mario", MoveKind::Nair), 7);
		assert_eq!(data.move_final_frame("mario", MoveKind::Nair), Some(39.0));
		assert_eq!(data.move_final_frame("mario", MoveKind::Fthrow), Some(31.0));
		assert_eq!(data.motion_cancel_frame("mario", "throw_f"), Some(31.0));
		assert_eq!(data.move_final_frame("luigi", MoveKind::Nair), None);
		assert!(sink.contains("No motion data for luigi"));
	}
}
