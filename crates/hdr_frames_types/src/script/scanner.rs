//! Line-by-line call-site scanner.

use serde::Serialize;

use super::body::{block_extent, brace_delta, split_params};
use super::profile::{MoveClass, MoveProfile};
use super::rate::{RateEvent, parse_rate_change};
use super::resolve::Resolver;

static_regex!(FRAME_CALL, r"frame\s*\(\s*(?:lua_state|agent\.lua_state_agent)\s*,\s*([0-9.]+)\s*\)");
static_regex!(WAIT_CALL, r"wait\s*\(\s*lua_state\s*,\s*([0-9.]+)\s*\)");
static_regex!(LOOP_HEADER, r"for\s+\w+\s+in\s+0\.\.(\d+)");
static_regex!(ATTACK_CALL, r"(ATTACK(?:_ABS)?)\s*\(\s*agent\s*,\s*(.*)\);?");

const ABSOLUTE_THROW: &str = "*FIGHTER_ATTACK_ABSOLUTE_KIND_THROW";
const ABSOLUTE_CATCH: &str = "FIGHTER_ATTACK_ABSOLUTE_KIND_CATCH";
const PIKMIN_ABSOLUTE_THROW: &str = "WEAPON_PIKMIN_PIKMIN_ATTACK_ABSOLUTE_KIND_THROW";
const GENERATE_ARTICLE: &str = "ArticleModule::generate_article";
const SHOOT_ARTICLE: &str = "ArticleModule::shoot";
const BLOCK_OPENERS: [&str; 2] = ["if is_excute(agent) {", "if AttackModule::is_attack(boma) {"];

/// Damage and knockback carried by one hit
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HitValues {
	/// Damage in percent
	pub damage: Option<f64>,
	/// Launch angle in degrees
	pub angle: Option<f64>,
	/// Knockback growth
	pub knockback_growth: Option<f64>,
	/// Fixed knockback
	pub fixed_knockback: Option<f64>,
	/// Base knockback
	pub base_knockback: Option<f64>,
}

impl HitValues {
	/// Hit with every value present
	pub fn new(damage: f64, angle: f64, kbg: f64, fkb: f64, bkb: f64) -> Self {
		Self {
			damage: Some(damage),
			angle: Some(angle),
			knockback_growth: Some(kbg),
			fixed_knockback: Some(fkb),
			base_knockback: Some(bkb),
		}
	}
}

/// Shape of a recognised call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CallKind {
	/// `ATTACK(agent, ..)`
	NormalAttack,
	/// `ATTACK_ABS(agent, ..)`
	AbsoluteAttack,
	/// `CATCH(agent, ..)` seen while scanning a grab
	CatchGrab,
}

/// A recognised attack or catch call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttackCall {
	/// Resolved values, absent where resolution failed
	pub hit: HitValues,
	/// Animation frame the call was seen at
	pub frame: f64,
	/// Call shape
	pub kind: CallKind,
	/// Argument text after `agent,`
	pub raw_params: String,
}

/// Everything recognised in one function body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOutput {
	/// Attack and catch calls in scan order
	pub calls: Vec<AttackCall>,
	/// Rate changes in scan order
	pub rate_events: Vec<RateEvent>,
	/// Frame the throw victim or spawned article is released
	pub release_frame: Option<f64>,
}

/// Argument positions of damage and knockback inside a call
#[derive(Debug, Clone, Copy)]
struct Layout {
	damage: usize,
	with_base: bool,
}

impl Layout {
	fn at(damage: usize) -> Option<Self> {
		Some(Self {
			damage,
			with_base: true,
		})
	}

	fn for_call(kind: CallKind, params: &[String], line: &str, class: MoveClass) -> Option<Self> {
		let count = params.len();
		match kind {
			CallKind::NormalAttack => (count >= 8).then_some(3).and_then(Self::at),
			CallKind::AbsoluteAttack => {
				let first = params.first()?;
				if line.contains(PIKMIN_ABSOLUTE_THROW) {
					(count >= 7).then_some(2).and_then(Self::at)
				} else if class.is_throw() && first.contains(ABSOLUTE_THROW) {
					(count >= 7).then_some(2).and_then(Self::at)
				} else if first.contains(ABSOLUTE_CATCH) {
					if count >= 10 {
						Self::at(6)
					} else {
						(count >= 7).then_some(Self {
							damage: 3,
							with_base: false,
						})
					}
				} else if count >= 8 {
					Self::at(3)
				} else {
					(count >= 7).then_some(2).and_then(Self::at)
				}
			}
			CallKind::CatchGrab => None,
		}
	}
}

/// Frame set by a `frame(..)` marker on `line`
pub(crate) fn frame_marker(line: &str) -> Option<f64> {
	if !line.contains("frame(") || !(line.contains("lua_state") || line.contains("agent.lua_state_agent")) {
		return None;
	}
	FRAME_CALL.captures(line)?[1].parse().ok()
}

/// Frames added by a `wait(..)` call on `line`
pub(crate) fn wait_duration(line: &str) -> Option<f64> {
	if !line.contains("wait(") || !line.contains("lua_state") {
		return None;
	}
	WAIT_CALL.captures(line)?[1].parse().ok()
}

/// Iteration count of a `for _ in 0..N` header on `line`
pub(crate) fn loop_count(line: &str) -> Option<u32> {
	if !line.contains("for ") || !line.contains(" in 0..") {
		return None;
	}
	LOOP_HEADER.captures(line)?[1].parse().ok()
}

pub(crate) fn is_comment(line: &str) -> bool {
	line.trim_start().starts_with("//")
}

/// Walks a function body and records its calls and rate changes.
///
/// Blocks opened by `if is_excute(agent) {` or `if AttackModule::is_attack(boma) {`
/// share the frame cursor with the enclosing body. Loop bodies attribute their
/// calls to the frame before the loop and advance the cursor by the summed
/// waits times the iteration count.
pub fn scan(body: &str, profile: &MoveProfile, resolver: &Resolver) -> ScanOutput {
	let lines: Vec<&str> = body.lines().collect();
	let mut scanner = Scanner {
		profile,
		resolver,
		cursor: 0.0,
		out: ScanOutput::default(),
		shot_seen: false,
	};
	scanner.run(&lines);
	scanner.out
}

#[derive(Debug, Default)]
struct Guard {
	active: bool,
	depth: i32,
}

impl Guard {
	/// Returns `true` if the line belongs to a suppressed block
	fn consume(&mut self, line: &str, guards: &[String]) -> bool {
		if guards.is_empty() {
			return false;
		}
		if guards.iter().any(|g| line.contains(g.as_str())) {
			self.active = true;
			self.depth = 1;
			return true;
		}
		if !self.active {
			return false;
		}
		if line.contains("else {") {
			self.active = false;
			self.depth = 0;
			return true;
		}
		self.depth += brace_delta(line);
		if self.depth <= 0 {
			self.active = false;
		}
		true
	}
}

struct Scanner<'a> {
	profile: &'a MoveProfile,
	resolver: &'a Resolver,
	cursor: f64,
	out: ScanOutput,
	shot_seen: bool,
}

impl Scanner<'_> {
	fn run(&mut self, lines: &[&str]) {
		let mut guard = Guard::default();
		let mut index = 0;
		while index < lines.len() {
			let line = lines[index].trim();

			if guard.consume(line, &self.profile.suppress_guards) {
				index += 1;
				continue;
			}

			if let Some(frame) = frame_marker(line) {
				self.cursor = frame;
			}
			if let Some(wait) = wait_duration(line) {
				self.cursor += wait;
			}

			if let Some(iterations) = loop_count(line) {
				let extent = block_extent(lines, index);
				self.unroll(&lines[extent.clone()], iterations);
				index = extent.end;
				continue;
			}

			if let Some(event) = parse_rate_change(line, self.cursor, self.resolver) {
				self.out.rate_events.push(event);
			}

			if let Some(shot) = &self.profile.shot
				&& line.contains(SHOOT_ARTICLE)
				&& line.contains(shot.marker.as_str())
			{
				self.inject_shot(self.cursor);
			}

			if (line.contains("ATTACK(agent,") || line.contains("ATTACK_ABS(agent,")) && !is_comment(line) {
				self.record_attack(line, self.cursor);
			}
			if line.contains("CATCH(agent,") && !is_comment(line) {
				self.record_catch(self.cursor);
			}

			self.note_release(line);

			if BLOCK_OPENERS.iter().any(|opener| line.contains(opener)) {
				let extent = block_extent(lines, index);
				self.scan_block(&lines[extent.clone()]);
				index = extent.end;
				continue;
			}

			index += 1;
		}

		if let Some(frame) = self.profile.shot.as_ref().map(|shot| shot.default_frame)
			&& !self.shot_seen
		{
			self.inject_shot(frame);
		}
	}

	fn unroll(&mut self, body: &[&str], iterations: u32) {
		let start = self.cursor;
		let mut per_iteration = 0.0;
		for line in body.iter().map(|l| l.trim()) {
			if let Some(wait) = wait_duration(line) {
				per_iteration += wait;
			}
			if line.contains("ATTACK(agent,") && !is_comment(line) {
				self.record_attack(line, start);
			}
			if line.contains("CATCH(agent,") && !is_comment(line) {
				self.record_catch(start);
			}
		}
		self.cursor += per_iteration * f64::from(iterations);
	}

	fn scan_block(&mut self, body: &[&str]) {
		let mut guard = Guard::default();
		for line in body.iter().map(|l| l.trim()) {
			if guard.consume(line, &self.profile.suppress_guards) {
				continue;
			}
			if let Some(frame) = frame_marker(line) {
				self.cursor = frame;
			}
			if let Some(wait) = wait_duration(line) {
				self.cursor += wait;
			}
			if let Some(event) = parse_rate_change(line, self.cursor, self.resolver) {
				self.out.rate_events.push(event);
			}
			if let Some(shot) = &self.profile.shot
				&& line.contains(SHOOT_ARTICLE)
				&& line.contains(shot.strict_marker.as_str())
			{
				self.inject_shot(self.cursor);
			}
			if ATTACK_CALL.is_match(line) && !is_comment(line) {
				self.record_attack(line, self.cursor);
			}
			if line.contains("CATCH(agent,") && !is_comment(line) {
				self.record_catch(self.cursor);
			}
			if self.is_release_spawn(line)
				|| (self.profile.class.is_throw() && line.contains("ATK_HIT_ABS") && line.contains(ABSOLUTE_THROW))
			{
				self.out.release_frame = Some(self.cursor);
			}
		}
	}

	fn is_release_spawn(&self, line: &str) -> bool {
		line.contains(GENERATE_ARTICLE) && self.profile.release_markers.iter().any(|m| line.contains(m.as_str()))
	}

	fn note_release(&mut self, line: &str) {
		let is_throw = self.profile.class.is_throw();
		if self.is_release_spawn(line) {
			self.out.release_frame = Some(self.cursor);
		} else if is_throw && line.contains("ATK_HIT_ABS") && line.contains(ABSOLUTE_THROW) {
			self.out.release_frame = Some(self.cursor);
		} else if is_throw
			&& line.contains("ATTACK_ABS")
			&& line.contains(ABSOLUTE_THROW)
			&& self.out.release_frame.is_none()
			&& self.cursor > 0.0
		{
			self.out.release_frame = Some(self.cursor);
		}
	}

	fn inject_shot(&mut self, frame: f64) {
		if let Some(shot) = &self.profile.shot {
			self.out.calls.push(AttackCall {
				hit: shot.hit,
				frame,
				kind: CallKind::NormalAttack,
				raw_params: String::from(SHOOT_ARTICLE),
			});
			self.shot_seen = true;
		}
	}

	fn record_catch(&mut self, frame: f64) {
		if self.profile.class.is_grab() {
			self.out.calls.push(AttackCall {
				hit: HitValues::default(),
				frame,
				kind: CallKind::CatchGrab,
				raw_params: String::new(),
			});
		}
	}

	fn record_attack(&mut self, line: &str, frame: f64) {
		let Some(caps) = ATTACK_CALL.captures(line) else {
			return;
		};
		let kind = if &caps[1] == "ATTACK_ABS" {
			CallKind::AbsoluteAttack
		} else {
			CallKind::NormalAttack
		};
		let raw_params = caps[2].to_owned();
		let params = split_params(&raw_params);
		let Some(layout) = Layout::for_call(kind, &params, line, self.profile.class) else {
			log::trace!("dropping short {kind:?} call: {line}");
			return;
		};

		let modifier = self.profile.variant.as_ref();
		let value_at = |offset: usize| {
			params.get(layout.damage + offset).and_then(|p| self.resolver.resolve_with(p, modifier))
		};
		let hit = HitValues {
			damage: value_at(0),
			angle: value_at(1),
			knockback_growth: value_at(2),
			fixed_knockback: value_at(3),
			base_knockback: if layout.with_base { value_at(4) } else { None },
		};
		self.out.calls.push(AttackCall {
			hit,
			frame,
			kind,
			raw_params,
		});
	}
}
