//! Input and output locations.
//!
//! Settings are layered with the `config` crate, later sources winning:
//!
//! 1. built-in defaults (paths relative to the working directory)
//! 2. an optional TOML file, `hdr-frames.toml` unless another is given
//! 3. `HDR_FRAMES_*` environment variables, e.g. `HDR_FRAMES_FIGHTERS`
//! 4. explicit overrides, typically from the command line
//!
//! # Examples
//!
//! ```
//! use hdr_frames_types::settings::{Settings, SettingsOverrides};
//!
//! let overrides = SettingsOverrides {
//! 	output: Some("site".into()),
//! 	..Default::default()
//! };
//! let settings = Settings::load(None, &overrides).unwrap();
//! assert_eq!(settings.output, std::path::PathBuf::from("site"));
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Configuration file read when none is given explicitly
pub const DEFAULT_CONFIG_FILE: &str = "hdr-frames.toml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "HDR_FRAMES";

/// Locations of every input and of the report output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Mod fighter tree, one directory per fighter holding `src/`
	pub fighters: PathBuf,
	/// Dumped vanilla scripts searched when the mod tree has no match
	pub fallback: PathBuf,
	/// Exported animations, `{animations}/{fighter}/body/*.json` plus `motion_list.yml`
	pub animations: PathBuf,
	/// Mod repository root holding `romfs/`
	pub hdr_root: PathBuf,
	/// Fighter parameter table; derived from `hdr_root` when unset
	pub fighter_param: Option<PathBuf>,
	/// Vanilla fighter parameter table used to fill gaps
	pub fighter_param_fallback: Option<PathBuf>,
	/// Report output directory
	pub output: PathBuf,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			fighters: PathBuf::from("HewDraw-Remix/fighters"),
			fallback: PathBuf::from("SSBU-Dumped-Scripts/smashline-hdr"),
			animations: PathBuf::from("Animations"),
			hdr_root: PathBuf::from("HewDraw-Remix"),
			fighter_param: None,
			fighter_param_fallback: Some(PathBuf::from("fighter_param.xml")),
			output: PathBuf::from("output_html"),
		}
	}
}

/// Values that take precedence over every other source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
	/// Overrides [`Settings::fighters`]
	pub fighters: Option<PathBuf>,
	/// Overrides [`Settings::fallback`]
	pub fallback: Option<PathBuf>,
	/// Overrides [`Settings::animations`]
	pub animations: Option<PathBuf>,
	/// Overrides [`Settings::hdr_root`]
	pub hdr_root: Option<PathBuf>,
	/// Overrides [`Settings::fighter_param`]
	pub fighter_param: Option<PathBuf>,
	/// Overrides [`Settings::fighter_param_fallback`]
	pub fighter_param_fallback: Option<PathBuf>,
	/// Overrides [`Settings::output`]
	pub output: Option<PathBuf>,
}

impl SettingsOverrides {
	fn pairs(&self) -> [(&'static str, Option<&PathBuf>); 7] {
		[
			("fighters", self.fighters.as_ref()),
			("fallback", self.fallback.as_ref()),
			("animations", self.animations.as_ref()),
			("hdr_root", self.hdr_root.as_ref()),
			("fighter_param", self.fighter_param.as_ref()),
			("fighter_param_fallback", self.fighter_param_fallback.as_ref()),
			("output", self.output.as_ref()),
		]
	}
}

impl Settings {
	/// Loads settings from every source.
	///
	/// An explicitly named `file` must exist; the default file is optional.
	pub fn load(file: Option<&Path>, overrides: &SettingsOverrides) -> Result<Self, SettingsError> {
		let source = match file {
			Some(path) => File::from(path).required(true),
			None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
		};
		let mut builder = Config::builder().add_source(source).add_source(Environment::with_prefix(ENV_PREFIX));
		for (key, value) in overrides.pairs() {
			builder = builder.set_override_option(key, value.map(|path| path.to_string_lossy().into_owned()))?;
		}
		Ok(builder.build()?.try_deserialize()?)
	}

	/// Checks that the fighter tree exists
	pub fn validate(&self) -> Result<(), SettingsError> {
		if !self.fighters.is_dir() {
			return Err(SettingsError::MissingDirectory {
				name: "fighters",
				path: self.fighters.clone(),
			});
		}
		Ok(())
	}

	/// Fighter parameter table path
	pub fn fighter_param_path(&self) -> PathBuf {
		self.fighter_param.clone().unwrap_or_else(|| {
			self.hdr_root.join("romfs/source/fighter/common/param/fighter_param.prcxml")
		})
	}

	/// `motion_list.yml` of a fighter
	pub fn motion_list_path(&self, character: &str) -> PathBuf {
		self.animations.join(character).join("body").join("motion_list.yml")
	}

	/// Mod `motion_patch.yaml` of a fighter
	pub fn motion_patch_path(&self, character: &str) -> PathBuf {
		self.hdr_root
			.join("romfs/source/fighter")
			.join(character)
			.join("motion/body/motion_patch.yaml")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let settings = Settings::default();
		assert_eq!(settings.output, PathBuf::from("output_html"));
		assert_eq!(
			settings.fighter_param_path(),
			PathBuf::from("HewDraw-Remix/romfs/source/fighter/common/param/fighter_param.prcxml")
		);
		assert_eq!(
			settings.motion_patch_path("mario"),
			PathBuf::from("HewDraw-Remix/romfs/source/fighter/mario/motion/body/motion_patch.yaml")
		);
	}

	#[test]
	fn test_file_then_overrides() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("custom.toml");
		std::fs::write(&path, "fighters = \"mod/fighters\"\noutput = \"from-file\"\n").unwrap();

		let overrides = SettingsOverrides {
			output: Some(PathBuf::from("from-cli")),
			..Default::default()
		};
		let settings = Settings::load(Some(&path), &overrides).unwrap();
		assert_eq!(settings.fighters, PathBuf::from("mod/fighters"));
		assert_eq!(settings.output, PathBuf::from("from-cli"));
		assert_eq!(settings.animations, PathBuf::from("Animations"));
	}

	#[test]
	fn test_missing_explicit_file() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("absent.toml");
		assert!(matches!(
			Settings::load(Some(&missing), &SettingsOverrides::default()),
			Err(SettingsError::Config(_))
		));
	}

	#[test]
	fn test_validate() {
		let dir = tempfile::tempdir().unwrap();
		let settings = Settings {
			fighters: dir.path().join("nope"),
			..Settings::default()
		};
		assert!(matches!(settings.validate(), Err(SettingsError::MissingDirectory { name: "fighters", .. })));
	}
}
