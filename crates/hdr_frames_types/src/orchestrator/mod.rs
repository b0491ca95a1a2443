//! Runs every (character, move) pair through the script engine.
//!
//! For each fighter folder and each [`MoveKind`] the orchestrator picks the
//! script named by the [`OverrideRegistry`], analyses it with the projected
//! [`MoveProfile`], falls back to the dump when the mod tree has no match, and
//! records [`MoveResult`] rows plus "not found" and "found in fallback" labels.
//!
//! Moves with an [`Expansion`] produce several rows, or rows whose frame comes
//! from somewhere other than the scored hit.
//!
//! # Examples
//!
//! ```no_run
//! use hdr_frames_types::data::GameData;
//! use hdr_frames_types::diagnostics::LogDiagnostics;
//! use hdr_frames_types::orchestrator::Orchestrator;
//! use hdr_frames_types::registry::OverrideRegistry;
//! use hdr_frames_types::source::{FallbackResolver, FsSourceTree};
//!
//! let diagnostics = LogDiagnostics;
//! let tree = FsSourceTree::new("fighters", FallbackResolver::new("dump"), &diagnostics);
//! let data = GameData::default();
//! let registry = OverrideRegistry::hdr();
//! let report = Orchestrator::new(&tree, &data, &registry, &diagnostics).run();
//! println!("{} moves", report.results.len());
//! ```

mod ammo;
mod expand;
mod result;


use std::path::PathBuf;

use crate::data::DataSource;
use crate::data::roster::display_name_or_internal;
use crate::diagnostics::Diagnostics;
use crate::moves::MoveKind;
use crate::registry::{ArticleSource, Expansion, FallbackAnchor, FrameRule, OverrideRegistry};
use crate::script::{FrameOverride, MoveAnalysis, MoveProfile, analyze_function, anchor_frame};
use crate::source::{FallbackQuery, SourceTree};

pub use result::{MarkedValue, MoveResult, RowNote, RunReport};

/// Directory templates searched for article scripts in the fallback dump
pub const ARTICLE_TEMPLATES: [&str; 3] = ["lua2cpp_{c}", "lua2cpp_{c}/{c}", "."];

/// Drives the analysis of a whole fighter tree
pub struct Orchestrator<'a> {
	sources: &'a dyn SourceTree,
	data: &'a dyn DataSource,
	registry: &'a OverrideRegistry,
	diagnostics: &'a dyn Diagnostics,
}

impl<'a> Orchestrator<'a> {
	/// Creates an orchestrator over its collaborators
	pub fn new(
		sources: &'a dyn SourceTree,
		data: &'a dyn DataSource,
		registry: &'a OverrideRegistry,
		diagnostics: &'a dyn Diagnostics,
	) -> Self {
		Self {
			sources,
			data,
			registry,
			diagnostics,
		}
	}

	/// Analyses every fighter folder that is not skipped, in sorted order
	pub fn run(&self) -> RunReport {
		let characters = self.sources.characters();
		self.run_characters(characters.iter().map(String::as_str))
	}

	/// Analyses the given fighter folders, skipping excluded ones
	pub fn run_characters<'c>(&self, characters: impl IntoIterator<Item = &'c str>) -> RunReport {
		let mut report = RunReport::default();
		for character in characters {
			if self.registry.is_skipped(character) {
				self.diagnostics.debug(format_args!("Skipping {character}"));
				continue;
			}
			self.run_character(character, &mut report);
		}
		report
	}

	/// Analyses every move of one fighter
	pub fn run_character(&self, character: &str, report: &mut RunReport) {
		self.diagnostics.info(format_args!("Processing {character}"));
		for kind in MoveKind::ALL {
			self.run_move(character, kind, report);
		}
	}

	/// Analyses one move of one fighter
	pub fn run_move(&self, character: &str, kind: MoveKind, report: &mut RunReport) {
		let display = display_name_or_internal(character);
		let expansion = self.registry.entry(character, kind).and_then(|entry| entry.expansion.as_ref());
		match expansion {
			Some(Expansion::Composite(composite)) => self.composite(character, &display, kind, composite, report),
			Some(Expansion::FixedRows(rows)) => self.fixed_rows(character, &display, kind, rows, report),
			Some(Expansion::Variants(set)) => self.variants(character, &display, kind, set, report),
			Some(Expansion::Ammo(part)) => {
				if !self.ammo(character, &display, kind, *part, report) {
					self.standard(character, &display, kind, report);
				}
			}
			None => self.standard(character, &display, kind, report),
		}
	}

	/// Engine switches with article damage and fallback frames read from disk
	pub fn profile_for(&self, character: &str, kind: MoveKind) -> MoveProfile {
		let mut profile = self.registry.profile(character, kind);
		let Some(entry) = self.registry.entry(character, kind) else {
			return profile;
		};
		for (slot, article) in profile.articles.iter_mut().zip(&entry.articles) {
			if let Some(damage) = self.article_damage(character, &article.source) {
				slot.damage = damage;
			}
		}
		if let Some(FrameRule::FromFallback(anchor)) = &entry.frame {
			profile.frame_override = Some(FrameOverride::Fixed(self.fallback_anchor(character, anchor)));
		}
		profile
	}

	fn standard(&self, character: &str, display: &str, kind: MoveKind, report: &mut RunReport) {
		let profile = self.profile_for(character, kind);
		let script = self.registry.primary_script(character, kind);
		let primary = self
			.sources
			.read(character, &script.path)
			.and_then(|text| analyze_function(&text, &script.function, &profile));
		if let Some(analysis) = primary {
			report.push(kind, self.row(character, display, kind, display, &analysis));
			return;
		}

		match self.analyze_fallback(character, kind, kind.function_name(), kind.fallback_file(), &profile) {
			Some(analysis) => {
				report.push(kind, self.row(character, display, kind, display, &analysis));
				report.fallback_found(kind, display);
			}
			None => {
				self.diagnostics.debug(format_args!("{display}: no {} found", kind.key()));
				report.not_found(kind, display);
			}
		}
	}

	/// Row for an analysis with the FAF from the motion data and, for aerials, landing lag
	fn row(&self, character: &str, display: &str, kind: MoveKind, label: &str, analysis: &MoveAnalysis) -> MoveResult {
		let faf = self.first_actionable_frame(character, kind, analysis);
		let lag = if kind.is_aerial() { self.data.landing_lag(display, kind) } else { 0 };
		MoveResult::from_analysis(label, analysis, faf).with_landing_lag(lag)
	}

	fn first_actionable_frame(&self, character: &str, kind: MoveKind, analysis: &MoveAnalysis) -> Option<i64> {
		let data_name = self.registry.data_name(character);
		analysis.first_actionable_frame(self.data.move_final_frame(data_name, kind))
	}

	/// Analyses `function` in the fallback dump: plain candidates first, then the move's sub-directory
	fn analyze_fallback(
		&self,
		character: &str,
		kind: MoveKind,
		function: &str,
		file: &str,
		profile: &MoveProfile,
	) -> Option<MoveAnalysis> {
		let roots = self.registry.fallback_roots(character);
		let plain = FallbackQuery::new(file).roots(&roots);
		let mut candidates = self.sources.fallback(character, &plain);
		if let Some(subdir) = self.registry.fallback_subdir(character, kind) {
			candidates.extend(self.sources.fallback(character, &plain.subdir(Some(subdir))));
		}

		candidates.into_iter().find_map(|(path, text)| {
			let analysis = analyze_function(&text, function, profile)?;
			self.diagnostics.info(format_args!("Found {character} {} in fallback {}", kind.key(), path.display()));
			Some(analysis)
		})
	}

	/// Candidates of a fallback file under the fighter's own folder
	fn fallback_texts(&self, character: &str, file: &str) -> Vec<(PathBuf, String)> {
		self.sources.fallback(character, &FallbackQuery::new(file))
	}

	/// Frame of a fallback marker, or the anchor's default
	fn fallback_anchor(&self, character: &str, anchor: &FallbackAnchor) -> f64 {
		let needles: Vec<&str> = anchor.needles.iter().map(String::as_str).collect();
		self.fallback_texts(character, &anchor.file)
			.iter()
			.find_map(|(_, text)| anchor_frame(text, &needles))
			.unwrap_or(anchor.default)
	}

	/// Damage of an article's own script in the fallback dump
	fn article_damage(&self, character: &str, source: &ArticleSource) -> Option<f64> {
		let templates: Vec<String> = ARTICLE_TEMPLATES.iter().map(|t| (*t).to_owned()).collect();
		let query = FallbackQuery::new(&source.file).templates(&templates).subdir(Some(source.dir.as_str()));
		let damage = self.sources.fallback(character, &query).into_iter().find_map(|(_, text)| {
			analyze_function(&text, &source.function, &MoveProfile::default())?.hit.damage
		});
		if let Some(damage) = damage {
			self.diagnostics.debug(format_args!("{} damage {damage} from its script", source.article));
		}
		damage
	}
}
