//! Fighter parameter table reader.
//!
//! The table is a `prcxml` document. Only a handful of scalar fields are
//! needed, so the document is scanned with regexes rather than parsed:
//!
//! ```xml
//! <list hash="fighter_param_table">
//!   <!-- MARIO -->
//!   <struct index="0">
//!     <float hash="walk_speed_max">1.155</float>
//!     <float hash="landing_attack_air_frame_n">6</float>
//!     ...
//!   </struct>
//! </list>
//! ```
//!
//! Each struct is named by the nearest `<!-- NAME -->` comment before it.

use std::collections::{BTreeMap, HashMap};
use std::ops::Range;
use std::path::Path;

use serde::Serialize;

use super::roster;
use crate::error::DataError;
use crate::moves::MoveKind;

/// Maximum distance in bytes between a name comment and its struct
pub const MAX_LABEL_DISTANCE: usize = 2000;

const TABLE_OPENER: &str = r#"<list hash="fighter_param_table""#;

static_regex!(COMMENT, r"<!--\s*(.+?)\s*-->");
static_regex!(STRUCT_TAG, r#"<struct\b[^>]*>|</struct>"#);
static_regex!(LIST_TAG, r#"<list\b[^>]*>|</list>"#);
static_regex!(INDEX_ATTR, r#"index="(\d+)""#);
static_regex!(FIELD, r#"<(\w+)\s+hash="([^"]+)"\s*>([^<]*)</"#);

/// Landing lag of the five aerials, in frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LandingLag {
	frames: [u32; 5],
}

impl LandingLag {
	/// Landing lag for `kind`; 0 for non-aerials
	pub fn get(&self, kind: MoveKind) -> u32 {
		Self::slot(kind).map_or(0, |slot| self.frames[slot])
	}

	/// Sets the landing lag for an aerial; other moves are ignored
	pub fn set(&mut self, kind: MoveKind, frames: u32) {
		if let Some(slot) = Self::slot(kind) {
			self.frames[slot] = frames;
		}
	}

	fn slot(kind: MoveKind) -> Option<usize> {
		MoveKind::AERIALS.iter().position(|aerial| *aerial == kind)
	}

	fn fill_from(&mut self, other: &Self) {
		for (mine, theirs) in self.frames.iter_mut().zip(other.frames) {
			if *mine == 0 && theirs > 0 {
				*mine = theirs;
			}
		}
	}
}

/// Physical stats of one fighter; every field is independently optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FighterStats {
	/// `walk_speed_max`
	pub walk_speed: Option<f64>,
	/// `run_speed_max`
	pub run_speed: Option<f64>,
	/// `dash_speed`
	pub dash_speed: Option<f64>,
	/// `weight`
	pub weight: Option<f64>,
	/// `jump_squat_frame`
	pub jumpsquat: Option<f64>,
	/// `jump_speed_x_max`, the ground-to-air momentum
	pub jump_speed_x_max: Option<f64>,
	/// `jump_y`
	pub full_hop: Option<f64>,
	/// `mini_jump_y`
	pub short_hop: Option<f64>,
	/// `jump_aerial_y`
	pub double_jump: Option<f64>,
	/// `air_speed_y_stable`
	pub fall_speed: Option<f64>,
	/// `air_accel_y`
	pub gravity: Option<f64>,
	/// `air_speed_x_stable`
	pub max_air_speed: Option<f64>,
	/// `air_accel_x_mul`
	pub air_accel_x_mul: Option<f64>,
	/// `air_accel_x_add`
	pub air_accel_x_add: Option<f64>,
}

impl FighterStats {
	/// Base air acceleration, `air_accel_x_mul + air_accel_x_add`
	pub fn air_acceleration(&self) -> Option<f64> {
		Some(self.air_accel_x_mul? + self.air_accel_x_add?)
	}

	fn from_fields(fields: &HashMap<&str, f64>) -> Self {
		let get = |key: &str| fields.get(key).copied();
		Self {
			walk_speed: get("walk_speed_max"),
			run_speed: get("run_speed_max"),
			dash_speed: get("dash_speed"),
			weight: get("weight"),
			jumpsquat: get("jump_squat_frame"),
			jump_speed_x_max: get("jump_speed_x_max"),
			full_hop: get("jump_y"),
			short_hop: get("mini_jump_y"),
			double_jump: get("jump_aerial_y"),
			fall_speed: get("air_speed_y_stable"),
			gravity: get("air_accel_y"),
			max_air_speed: get("air_speed_x_stable"),
			air_accel_x_mul: get("air_accel_x_mul"),
			air_accel_x_add: get("air_accel_x_add"),
		}
	}

	fn fill_from(&mut self, other: &Self) {
		let pairs = [
			(&mut self.walk_speed, other.walk_speed),
			(&mut self.run_speed, other.run_speed),
			(&mut self.dash_speed, other.dash_speed),
			(&mut self.weight, other.weight),
			(&mut self.jumpsquat, other.jumpsquat),
			(&mut self.jump_speed_x_max, other.jump_speed_x_max),
			(&mut self.full_hop, other.full_hop),
			(&mut self.short_hop, other.short_hop),
			(&mut self.double_jump, other.double_jump),
			(&mut self.fall_speed, other.fall_speed),
			(&mut self.gravity, other.gravity),
			(&mut self.max_air_speed, other.max_air_speed),
			(&mut self.air_accel_x_mul, other.air_accel_x_mul),
			(&mut self.air_accel_x_add, other.air_accel_x_add),
		];
		for (mine, theirs) in pairs {
			if mine.is_none() {
				*mine = theirs;
			}
		}
	}
}

/// Landing lag and physical stats keyed by fighter display name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FighterParams {
	/// Aerial landing lag
	pub landing_lag: BTreeMap<String, LandingLag>,
	/// Physical stats
	pub stats: BTreeMap<String, FighterStats>,
}

impl FighterParams {
	/// Reads and parses a parameter document
	pub fn load(path: &Path) -> Result<Self, DataError> {
		let bytes = std::fs::read(path)?;
		Self::parse(&String::from_utf8_lossy(&bytes), path)
	}

	/// Parses a parameter document; `path` is only used in errors
	pub fn parse(text: &str, path: &Path) -> Result<Self, DataError> {
		let table = table_span(text).ok_or_else(|| DataError::MissingFighterTable {
			path: path.to_path_buf(),
		})?;
		let table_text = &text[table.clone()];
		let structs = top_level_structs(table_text);

		let mut params = Self::default();
		for (label, index) in label_structs(table_text, &structs) {
			let Some(display) = roster::display_from_param_label(label) else {
				log::trace!("Skipping fighter parameter entry {label}");
				continue;
			};
			let Some((_, span)) = structs.iter().find(|(i, _)| *i == index) else {
				continue;
			};
			let fields = struct_fields(&table_text[span.clone()]);

			let mut lag = LandingLag::default();
			for (suffix, kind) in ["n", "f", "b", "hi", "lw"].into_iter().zip(MoveKind::AERIALS) {
				let key = format!("landing_attack_air_frame_{suffix}");
				let frames = fields.get(key.as_str()).map_or(0, |value| value.trunc().max(0.0) as u32);
				lag.set(kind, frames);
			}
			params.landing_lag.insert(display.to_owned(), lag);
			params.stats.insert(display.to_owned(), FighterStats::from_fields(&fields));
		}
		Ok(params)
	}

	/// Fills gaps from `fallback`.
	///
	/// Zero landing lag and absent stats are taken from the fallback;
	/// fighters only present in the fallback are added.
	pub fn merge(mut self, fallback: Self) -> Self {
		for (name, lag) in fallback.landing_lag {
			self.landing_lag
				.entry(name)
				.and_modify(|mine| mine.fill_from(&lag))
				.or_insert(lag);
		}
		for (name, stats) in fallback.stats {
			self.stats
				.entry(name)
				.and_modify(|mine| mine.fill_from(&stats))
				.or_insert(stats);
		}
		self
	}
}

/// Byte range of the fighter table element, tags included
fn table_span(text: &str) -> Option<Range<usize>> {
	let start = text.find(TABLE_OPENER)?;
	let mut depth = 0usize;
	for tag in LIST_TAG.find_iter(&text[start..]) {
		if tag.as_str().starts_with("</") {
			depth = depth.saturating_sub(1);
			if depth == 0 {
				return Some(start..start + tag.end());
			}
		} else if !tag.as_str().ends_with("/>") {
			depth += 1;
		}
	}
	Some(start..text.len())
}

/// `(index, byte range)` of each top-level struct
fn top_level_structs(table: &str) -> Vec<(usize, Range<usize>)> {
	let mut structs = Vec::new();
	let mut depth = 0usize;
	let mut open: Option<(usize, usize)> = None;
	for tag in STRUCT_TAG.find_iter(table) {
		if tag.as_str().starts_with("</") {
			depth = depth.saturating_sub(1);
			if depth == 0
				&& let Some((index, start)) = open.take()
			{
				structs.push((index, start..tag.end()));
			}
		} else {
			if depth == 0 {
				open = INDEX_ATTR
					.captures(tag.as_str())
					.and_then(|caps| caps[1].parse().ok())
					.map(|index| (index, tag.start()));
			}
			depth += 1;
		}
	}
	structs
}

/// Pairs each comment label with the first struct that follows it closely
fn label_structs<'a>(table: &'a str, structs: &[(usize, Range<usize>)]) -> Vec<(&'a str, usize)> {
	COMMENT
		.captures_iter(table)
		.filter_map(|caps| {
			let comment = caps.get(0)?;
			let label = caps.get(1)?.as_str();
			let (index, span) = structs.iter().find(|(_, span)| span.start >= comment.end())?;
			(span.start - comment.start() < MAX_LABEL_DISTANCE).then_some((label, *index))
		})
		.collect()
}

/// First numeric value of every `hash`ed field in a struct
fn struct_fields(text: &str) -> HashMap<&str, f64> {
	let mut fields = HashMap::new();
	for caps in FIELD.captures_iter(text) {
		let (Some(key), Some(value)) = (caps.get(2), caps.get(3)) else {
			continue;
		};
		if let Ok(number) = value.as_str().trim().parse::<f64>() {
			fields.entry(key.as_str()).or_insert(number);
		}
	}
	fields
}

#[cfg(test)]
mod tests {
	use super::*;

	const PRIMARY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<struct>
  <list hash="fighter_param_table">
    <!-- MARIO -->
    <struct index="0">
      <float hash="walk_speed_max">1.155</float>
      <float hash="air_accel_x_mul">0.04</float>
      <float hash="air_accel_x_add">0.01</float>
      <int hash="jump_squat_frame">3</int>
      <float hash="landing_attack_air_frame_n">6</float>
      <float hash="landing_attack_air_frame_f">0</float>
      <float hash="landing_attack_air_frame_lw">16.9</float>
    </struct>
    <!-- GIGA BOWSER -->
    <struct index="1">
      <float hash="weight">200</float>
    </struct>
    <!-- PAC-MAN -->
    <struct index="2">
      <list hash="nested">
        <struct index="0">
          <float hash="weight">1</float>
        </struct>
      </list>
      <float hash="weight">95</float>
    </struct>
  </list>
</struct>
"#;

	const FALLBACK: &str = r#"<list hash="fighter_param_table">
    <!-- MARIO -->
    <struct index="0">
      <float hash="walk_speed_max">9.9</float>
      <float hash="dash_speed">2.2</float>
      <float hash="landing_attack_air_frame_f">11</float>
      <float hash="landing_attack_air_frame_n">3</float>
    </struct>
    <!-- LUIGI -->
    <struct index="1">
      <float hash="weight">97</float>
    </struct>
</list>"#;

	#[test]
	fn test_parse_landing_lag_and_stats() {
		let params = FighterParams::parse(PRIMARY, Path::new("primary.prcxml")).unwrap();
		let mario = params.landing_lag["Mario"];
		assert_eq!(mario.get(MoveKind::Nair), 6);
		assert_eq!(mario.get(MoveKind::Fair), 0);
		assert_eq!(mario.get(MoveKind::Dair), 16);
		assert_eq!(mario.get(MoveKind::Uair), 0);
		assert_eq!(mario.get(MoveKind::Jab1), 0);

		let stats = params.stats["Mario"];
		assert_eq!(stats.walk_speed, Some(1.155));
		assert_eq!(stats.jumpsquat, Some(3.0));
		assert!((stats.air_acceleration().unwrap() - 0.05).abs() < 1e-12);
		assert_eq!(stats.weight, None);
	}

	#[test]
	fn test_skips_and_nested_structs() {
		let params = FighterParams::parse(PRIMARY, Path::new("primary.prcxml")).unwrap();
		assert!(!params.stats.contains_key("Giga Bowser"));
		assert_eq!(params.stats.len(), 2);
		assert_eq!(params.stats["Pac-Man"].weight, Some(1.0));
	}

	#[test]
	fn test_missing_table() {
		let err = FighterParams::parse("<struct></struct>", Path::new("empty.xml")).unwrap_err();
		assert!(matches!(err, DataError::MissingFighterTable { .. }));
	}

	#[test]
	fn test_merge_prefers_primary() {
		let primary = FighterParams::parse(PRIMARY, Path::new("a")).unwrap();
		let fallback = FighterParams::parse(FALLBACK, Path::new("b")).unwrap();
		let merged = primary.merge(fallback);

		let mario = merged.landing_lag["Mario"];
		assert_eq!(mario.get(MoveKind::Nair), 6);
		assert_eq!(mario.get(MoveKind::Fair), 11);

		let stats = merged.stats["Mario"];
		assert_eq!(stats.walk_speed, Some(1.155));
		assert_eq!(stats.dash_speed, Some(2.2));
		assert_eq!(merged.stats["Luigi"].weight, Some(97.0));
	}
}
