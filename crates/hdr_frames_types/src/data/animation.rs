//! Animation metadata exported as JSON.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::diagnostics::Diagnostics;
use crate::error::DataError;
use crate::moves::MoveKind;

/// Reads `final_frame_index` from an animation JSON document.
///
/// The value is looked up at the top level first, then under `animation`,
/// and truncated to a whole frame.
pub fn final_frame_index(path: &Path) -> Result<Option<f64>, DataError> {
	let bytes = std::fs::read(path)?;
	let document: Value = serde_json::from_slice(&bytes).map_err(|source| DataError::Json {
		path: path.to_path_buf(),
		source,
	})?;
	let index = document
		.get("final_frame_index")
		.and_then(Value::as_f64)
		.or_else(|| document.get("animation")?.get("final_frame_index")?.as_f64());
	Ok(index.map(f64::trunc))
}

/// The `body` animation directory of one fighter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationDir {
	root: PathBuf,
}

impl AnimationDir {
	/// Wraps a directory holding animation JSON files
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
		}
	}

	/// `{animations}/{character}/body`
	pub fn for_character(animations: &Path, character: &str) -> Self {
		Self::new(animations.join(character).join("body"))
	}

	/// Directory path
	pub fn path(&self) -> &Path {
		&self.root
	}

	/// Returns `true` if the directory exists
	pub fn exists(&self) -> bool {
		self.root.is_dir()
	}

	/// JSON file names in the directory, sorted
	pub fn json_files(&self) -> std::io::Result<Vec<String>> {
		let mut names: Vec<String> = std::fs::read_dir(&self.root)?
			.filter_map(Result::ok)
			.filter_map(|entry| entry.file_name().into_string().ok())
			.filter(|name| name.ends_with(".json"))
			.collect();
		names.sort();
		Ok(names)
	}

	/// Final frame of the first animation whose name matches the move.
	///
	/// Files are matched case-insensitively against the move's patterns and
	/// tried in name order. Only positive final frames count.
	pub fn pattern_final_frame(&self, kind: MoveKind, diagnostics: &dyn Diagnostics) -> Option<f64> {
		let patterns = kind.animation_patterns();
		if patterns.is_empty() || !self.exists() {
			return None;
		}
		let files = match self.json_files() {
			Ok(files) => files,
			Err(err) => {
				diagnostics.warn(format_args!("Cannot list {}: {err}", self.root.display()));
				return None;
			}
		};

		files
			.iter()
			.filter(|name| {
				let lower = name.to_lowercase();
				patterns.iter().any(|pattern| lower.contains(pattern))
			})
			.find_map(|name| self.read_final_frame(name, diagnostics).filter(|frame| *frame > 0.0))
	}

	/// Final frame from the `c00`..`c09` animation of one of the standard attacks
	pub fn costume_final_frame(&self, kind: MoveKind, diagnostics: &dyn Diagnostics) -> Option<f64> {
		let file = kind.costume_animation_file()?;
		let stem = file.strip_prefix("c00")?;
		(0..10).find_map(|slot| {
			let name = format!("c{slot:02}{stem}");
			if !self.root.join(&name).is_file() {
				return None;
			}
			self.read_final_frame(&name, diagnostics)
		})
	}

	fn read_final_frame(&self, name: &str, diagnostics: &dyn Diagnostics) -> Option<f64> {
		let path = self.root.join(name);
		match final_frame_index(&path) {
			Ok(frame) => frame,
			Err(err) => {
				diagnostics.warn(format_args!("Cannot read animation {}: {err}", path.display()));
				None
			}
		}
	}
}
