//! Script lookup in the mod tree and the dumped fallback tree.
//!
//! The mod tree is laid out per fighter, `{fighters}/{c}/src/acmd/tilts.rs`.
//! The fallback tree comes from a script dump whose folder naming varies,
//! so it is searched through a list of path templates:
//!
//! ```text
//! {fallback}/lua2cpp_{c}/{c}/AttackS3.txt
//! {fallback}/lua2cpp_{c}/AttackS3.txt
//! {fallback}/{c}/AttackS3.txt
//! {fallback}/{c}_lua2cpp/AttackS3.txt
//! ```

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::diagnostics::Diagnostics;

/// Attempts made for reads failing with a transient error
pub const READ_ATTEMPTS: usize = 3;

/// Default fallback directory templates; `{c}` is the fighter folder name
pub const DEFAULT_TEMPLATES: [&str; 4] = ["lua2cpp_{c}/{c}", "lua2cpp_{c}", "{c}", "{c}_lua2cpp"];

/// Supplier of script text
pub trait SourceTree {
	/// Fighter folder names in the mod tree, sorted
	fn characters(&self) -> Vec<String>;

	/// Text of `{c}/{relative}` in the mod tree
	fn read(&self, character: &str, relative: &str) -> Option<String>;

	/// Returns `true` if `{c}/{relative}` exists in the mod tree
	fn exists(&self, character: &str, relative: &str) -> bool;

	/// Text and path of every existing fallback candidate, in search order
	fn fallback(&self, character: &str, query: &FallbackQuery<'_>) -> Vec<(PathBuf, String)>;
}

/// One fallback lookup.
///
/// `roots` replaces the fighter's own folder name when not empty,
/// `templates` replaces the resolver's templates when given, and `subdir`
/// is appended to every candidate directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackQuery<'q> {
	/// Folder names substituted for `{c}`
	pub roots: &'q [String],
	/// Directory templates used instead of the resolver's own
	pub templates: Option<&'q [String]>,
	/// Directory appended below every template
	pub subdir: Option<&'q str>,
	/// File name
	pub file: &'q str,
}

impl<'q> FallbackQuery<'q> {
	/// Looks up `file` under the fighter's own folder name
	pub fn new(file: &'q str) -> Self {
		Self {
			roots: &[],
			templates: None,
			subdir: None,
			file,
		}
	}

	/// Sets the folder names
	pub fn roots(mut self, roots: &'q [String]) -> Self {
		self.roots = roots;
		self
	}

	/// Sets the directory templates
	pub fn templates(mut self, templates: &'q [String]) -> Self {
		self.templates = Some(templates);
		self
	}

	/// Sets the sub-directory
	pub fn subdir(mut self, subdir: Option<&'q str>) -> Self {
		self.subdir = subdir;
		self
	}
}

/// Builds fallback candidate paths from directory templates.
///
/// # Examples
///
/// ```
/// use hdr_frames_types::source::{FallbackQuery, FallbackResolver};
/// use std::path::PathBuf;
///
/// let resolver = FallbackResolver::new("dump");
/// let query = FallbackQuery::new("Regular.txt").subdir(Some("fireball"));
/// let candidates = resolver.candidates("mario", &query);
/// assert_eq!(candidates[0], PathBuf::from("dump/lua2cpp_mario/mario/fireball/Regular.txt"));
/// assert_eq!(candidates.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackResolver {
	base: PathBuf,
	templates: Vec<String>,
}

impl FallbackResolver {
	/// Resolver over `base` with the default templates
	pub fn new(base: impl Into<PathBuf>) -> Self {
		Self::with_templates(base, DEFAULT_TEMPLATES.iter().map(|t| (*t).to_owned()).collect())
	}

	/// Resolver over `base` with custom templates
	pub fn with_templates(base: impl Into<PathBuf>, templates: Vec<String>) -> Self {
		Self {
			base: base.into(),
			templates,
		}
	}

	/// Base directory of the dump
	pub fn base(&self) -> &Path {
		&self.base
	}

	/// Every candidate path, in search order: roots outer, templates inner
	pub fn candidates(&self, character: &str, query: &FallbackQuery<'_>) -> Vec<PathBuf> {
		let own = [character.to_owned()];
		let roots = if query.roots.is_empty() { &own[..] } else { query.roots };
		let templates = query.templates.unwrap_or(&self.templates);

		let mut paths = Vec::with_capacity(roots.len() * templates.len());
		for root in roots {
			for template in templates {
				let mut path = self.base.join(template.replace("{c}", root));
				if let Some(subdir) = query.subdir {
					path.push(subdir);
				}
				path.push(query.file);
				if !paths.contains(&path) {
					paths.push(path);
				}
			}
		}
		paths
	}

	/// Candidates that exist on disk
	pub fn existing(&self, character: &str, query: &FallbackQuery<'_>) -> Vec<PathBuf> {
		self.candidates(character, query).into_iter().filter(|path| path.is_file()).collect()
	}
}

/// Reads a file, retrying transient failures.
///
/// Absent files yield `None` silently; other failures are reported and
/// also yield `None`. Invalid UTF-8 is replaced.
pub fn read_lossy(path: &Path, diagnostics: &dyn Diagnostics) -> Option<String> {
	let mut attempt = 0;
	loop {
		attempt += 1;
		match std::fs::read(path) {
			Ok(bytes) => return Some(String::from_utf8_lossy(&bytes).into_owned()),
			Err(err) if err.kind() == ErrorKind::NotFound => return None,
			Err(err) if is_transient(&err) && attempt < READ_ATTEMPTS => {
				diagnostics.debug(format_args!("Retrying {} after {err}", path.display()));
			}
			Err(err) => {
				diagnostics.warn(format_args!("Cannot read {}: {err}", path.display()));
				return None;
			}
		}
	}
}

fn is_transient(err: &io::Error) -> bool {
	matches!(err.kind(), ErrorKind::Interrupted | ErrorKind::WouldBlock | ErrorKind::TimedOut)
}

/// [`SourceTree`] over two directories on disk
pub struct FsSourceTree<'a> {
	fighters: PathBuf,
	fallback: FallbackResolver,
	diagnostics: &'a dyn Diagnostics,
}

impl<'a> FsSourceTree<'a> {
	/// Tree over a mod fighter directory and a fallback dump
	pub fn new(fighters: impl Into<PathBuf>, fallback: FallbackResolver, diagnostics: &'a dyn Diagnostics) -> Self {
		Self {
			fighters: fighters.into(),
			fallback,
			diagnostics,
		}
	}

	/// Path of `{c}/{relative}` in the mod tree
	pub fn primary_path(&self, character: &str, relative: &str) -> PathBuf {
		self.fighters.join(character).join(relative)
	}
}

impl SourceTree for FsSourceTree<'_> {
	fn characters(&self) -> Vec<String> {
		let entries = match std::fs::read_dir(&self.fighters) {
			Ok(entries) => entries,
			Err(err) => {
				self.diagnostics.warn(format_args!("Cannot list {}: {err}", self.fighters.display()));
				return Vec::new();
			}
		};
		let mut names: Vec<String> = entries
			.filter_map(Result::ok)
			.filter(|entry| entry.path().is_dir())
			.filter_map(|entry| entry.file_name().into_string().ok())
			.collect();
		names.sort();
		names
	}

	fn read(&self, character: &str, relative: &str) -> Option<String> {
		read_lossy(&self.primary_path(character, relative), self.diagnostics)
	}

	fn exists(&self, character: &str, relative: &str) -> bool {
		self.primary_path(character, relative).is_file()
	}

	fn fallback(&self, character: &str, query: &FallbackQuery<'_>) -> Vec<(PathBuf, String)> {
		self.fallback
			.existing(character, query)
			.into_iter()
			.filter_map(|path| {
				let text = read_lossy(&path, self.diagnostics)?;
				Some((path, text))
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::diagnostics::CollectingDiagnostics;

	#[test]
	fn test_candidates_deduplicate() {
		let resolver = FallbackResolver::with_templates("dump", vec!["{c}".to_owned(), "{c}".to_owned()]);
		let roots = ["popo".to_owned(), "nana".to_owned()];
		let candidates = resolver.candidates("iceclimber", &FallbackQuery::new("Catch.txt").roots(&roots));
		assert_eq!(candidates, vec![PathBuf::from("dump/popo/Catch.txt"), PathBuf::from("dump/nana/Catch.txt")]);
	}

	#[test]
	fn test_query_templates_override() {
		let resolver = FallbackResolver::new("dump");
		let templates = ["lua2cpp_{c}".to_owned(), ".".to_owned()];
		let query = FallbackQuery::new("acmd.rs").templates(&templates).subdir(Some("water"));
		assert_eq!(
			resolver.candidates("pzenigame", &query),
			vec![PathBuf::from("dump/lua2cpp_pzenigame/water/acmd.rs"), PathBuf::from("dump/./water/acmd.rs")]
		);
	}

	#[test]
	fn test_fs_tree_primary_and_fallback() {
		let fighters = tempfile::tempdir().unwrap();
		let dump = tempfile::tempdir().unwrap();
		std::fs::create_dir_all(fighters.path().join("mario/src/acmd")).unwrap();
		std::fs::create_dir_all(fighters.path().join("luigi")).unwrap();
		std::fs::write(fighters.path().join("mario/src/acmd/tilts.rs"), b"fn a() {}\xff").unwrap();
		std::fs::write(fighters.path().join("notes.txt"), "not a fighter").unwrap();
		std::fs::create_dir_all(dump.path().join("luigi_lua2cpp")).unwrap();
		std::fs::write(dump.path().join("luigi_lua2cpp/AttackS3.txt"), "fallback").unwrap();

		let sink = CollectingDiagnostics::new();
		let tree = FsSourceTree::new(fighters.path(), FallbackResolver::new(dump.path()), &sink);

		assert_eq!(tree.characters(), vec!["luigi".to_owned(), "mario".to_owned()]);
		assert!(tree.exists("mario", "src/acmd/tilts.rs"));
		assert_eq!(tree.read("mario", "src/acmd/tilts.rs").as_deref(), Some("fn a() {}\u{fffd}"));
		assert_eq!(tree.read("mario", "src/acmd/smashes.rs"), None);

		let found = tree.fallback("luigi", &FallbackQuery::new("AttackS3.txt"));
		assert_eq!(found.len(), 1);
		assert!(found[0].0.ends_with("luigi_lua2cpp/AttackS3.txt"));
		assert_eq!(found[0].1, "fallback");
		assert!(tree.fallback("luigi", &FallbackQuery::new("AttackS3.txt").subdir(Some("fireball"))).is_empty());
		assert!(sink.entries().is_empty());
	}
}
