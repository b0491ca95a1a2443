//! Total damage of a pummel or throw.
//!
//! Throws often define several hitboxes that never all connect, and some
//! spawn projectiles that do. A second linear pass over the body collects
//! absolute throw hits, regular hits and article spawns, and per-character
//! policies decide how each group adds up.

use super::body::{block_extent, split_params};
use super::profile::MoveProfile;
use super::resolve::Resolver;
use super::scanner::{frame_marker, is_comment, loop_count, wait_duration};

static_regex!(
	ABSOLUTE_THROW_DAMAGE,
	r"ATTACK_ABS\s*\(\s*agent\s*,\s*\*FIGHTER_ATTACK_ABSOLUTE_KIND_THROW\s*,\s*[^,]+\s*,\s*([^,]+)"
);
static_regex!(REGULAR_ATTACK, r"ATTACK\s*\(\s*agent\s*,\s*(.*)\)");
static_regex!(GENERATED_ARTICLE, r"ArticleModule::generate_article\s*\(\s*boma\s*,\s*\*([^,]+)");

/// How absolute throw hits add up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AbsoluteThrowPolicy {
	/// Only the first hit counts
	#[default]
	First,
	/// The smaller hit when there are exactly two, otherwise the first
	MinimumOfPair,
	/// The smallest hit when there are several
	MinimumOfMany,
}

impl AbsoluteThrowPolicy {
	/// Aggregates absolute throw damage in scan order
	pub fn aggregate(self, damages: &[f64]) -> f64 {
		let Some(&first) = damages.first() else {
			return 0.0;
		};
		let smallest = || damages.iter().copied().fold(f64::INFINITY, f64::min);
		match self {
			Self::MinimumOfPair if damages.len() == 2 => smallest(),
			Self::MinimumOfMany if damages.len() > 1 => smallest(),
			_ => first,
		}
	}
}

/// How regular hits of a throw add up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegularThrowPolicy {
	/// First hit of every distinct frame, summed
	#[default]
	FirstPerFrame,
	/// Only the earliest hit counts
	EarliestOnly,
	/// Regular hits never count
	Ignore,
	/// The smaller hit when there are exactly two, otherwise [`Self::FirstPerFrame`]
	MinimumOfPair,
	/// Smallest hit of every frame when the body contains `marker` and there are several hits
	MinimumPerFrameWhen {
		/// Body substring enabling the policy
		marker: String,
	},
	/// Drop the last frame group when the body contains `marker` and spans `min_frames` frames
	DropLastFrameWhen {
		/// Body substring enabling the policy
		marker: String,
		/// Distinct frames required
		min_frames: usize,
	},
}

impl RegularThrowPolicy {
	/// Aggregates `(damage, frame)` hits in scan order
	pub fn aggregate(&self, hits: &[(f64, f64)], body: &str) -> f64 {
		if hits.is_empty() {
			return 0.0;
		}
		let groups = group_by_frame(hits);
		match self {
			Self::EarliestOnly => hits
				.iter()
				.fold(None::<(f64, f64)>, |best, &(damage, frame)| match best {
					Some((_, best_frame)) if best_frame <= frame => best,
					_ => Some((damage, frame)),
				})
				.map_or(0.0, |(damage, _)| damage),
			Self::Ignore => 0.0,
			Self::MinimumOfPair if hits.len() == 2 => hits[0].0.min(hits[1].0),
			Self::MinimumPerFrameWhen {
				marker,
			} if body.contains(marker.as_str()) && hits.len() > 1 => groups
				.iter()
				.map(|(_, damages)| damages.iter().copied().fold(f64::INFINITY, f64::min))
				.sum(),
			Self::DropLastFrameWhen {
				marker,
				min_frames,
			} if body.contains(marker.as_str()) && groups.len() >= *min_frames => {
				let mut sorted: Vec<&(f64, Vec<f64>)> = groups.iter().collect();
				sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
				sorted.pop();
				sorted.iter().map(|(_, damages)| damages[0]).sum()
			}
			_ => groups.iter().map(|(_, damages)| damages[0]).sum(),
		}
	}
}

/// Groups damages by frame, keeping first-seen frame order
fn group_by_frame(hits: &[(f64, f64)]) -> Vec<(f64, Vec<f64>)> {
	let mut groups: Vec<(f64, Vec<f64>)> = Vec::new();
	for &(damage, frame) in hits {
		match groups.iter_mut().find(|(f, _)| *f == frame) {
			Some((_, damages)) => damages.push(damage),
			None => groups.push((frame, vec![damage])),
		}
	}
	groups
}

/// Total damage dealt by a throw body.
///
/// Zero damages are skipped. Inside a loop only the first regular hit counts,
/// multiplied by the iteration count; article spawns are multiplied as well.
pub fn throw_total(body: &str, profile: &MoveProfile, resolver: &Resolver) -> f64 {
	let lines: Vec<&str> = body.lines().collect();
	let mut cursor = 0.0;
	let mut total = 0.0;
	let mut article_total = 0.0;
	let mut absolute = Vec::new();
	let mut regular = Vec::new();

	let mut index = 0;
	while index < lines.len() {
		let line = lines[index].trim();

		if let Some(frame) = frame_marker(line) {
			cursor = frame;
		}
		if let Some(wait) = wait_duration(line) {
			cursor += wait;
		}
		if let Some(damage) = article_damage(line, profile) {
			article_total += damage;
		}

		if let Some(iterations) = loop_count(line) {
			let extent = block_extent(&lines, index);
			let times = f64::from(iterations);
			let mut counted = false;
			for inner in &lines[extent.clone()] {
				if inner.contains("ATTACK(agent,") && !is_comment(inner) {
					if !counted && let Some(damage) = regular_damage(inner, profile, resolver) {
						total += damage * times;
						counted = true;
					}
				} else if let Some(damage) = article_damage(inner, profile) {
					article_total += damage * times;
				}
			}
			index = extent.end;
			continue;
		}

		if line.contains("ATTACK_ABS") && line.contains("*FIGHTER_ATTACK_ABSOLUTE_KIND_THROW") {
			if let Some(damage) = ABSOLUTE_THROW_DAMAGE
				.captures(line)
				.and_then(|caps| resolver.resolve(caps[1].trim()))
				.filter(|d| *d != 0.0)
			{
				absolute.push(damage);
			}
		} else if line.contains("ATTACK(agent,")
			&& !is_comment(line)
			&& let Some(damage) = regular_damage(line, profile, resolver)
		{
			regular.push((damage, cursor));
		}

		index += 1;
	}

	total += profile.absolute_policy.aggregate(&absolute);
	total += profile.regular_policy.aggregate(&regular, body);
	total + article_total
}

fn regular_damage(line: &str, profile: &MoveProfile, resolver: &Resolver) -> Option<f64> {
	let caps = REGULAR_ATTACK.captures(line)?;
	let params = split_params(&caps[1]);
	let raw = params.get(3)?;
	resolver.resolve_with(raw, profile.variant.as_ref()).filter(|d| *d != 0.0)
}

fn article_damage(line: &str, profile: &MoveProfile) -> Option<f64> {
	if profile.articles.is_empty() || !line.contains("ArticleModule::generate_article") {
		return None;
	}
	let caps = GENERATED_ARTICLE.captures(line)?;
	let article = caps[1].trim();
	profile.articles.iter().find(|a| a.article == article).map(|a| a.damage).filter(|d| *d != 0.0)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_first_per_frame_dedupes_shared_frames() {
		let hits = [(3.0, 4.0), (3.0, 4.0), (6.0, 10.0)];
		assert_eq!(RegularThrowPolicy::FirstPerFrame.aggregate(&hits, ""), 9.0);
	}

	#[test]
	fn test_earliest_only() {
		let hits = [(5.0, 12.0), (2.0, 8.0), (4.0, 8.0)];
		assert_eq!(RegularThrowPolicy::EarliestOnly.aggregate(&hits, ""), 2.0);
	}

	#[test]
	fn test_minimum_of_pair() {
		let policy = RegularThrowPolicy::MinimumOfPair;
		assert_eq!(policy.aggregate(&[(5.0, 1.0), (3.0, 9.0)], ""), 3.0);
		assert_eq!(policy.aggregate(&[(5.0, 1.0), (3.0, 9.0), (1.0, 9.0)], ""), 8.0);
		assert_eq!(AbsoluteThrowPolicy::MinimumOfPair.aggregate(&[7.0, 4.0]), 4.0);
		assert_eq!(AbsoluteThrowPolicy::MinimumOfPair.aggregate(&[7.0, 4.0, 1.0]), 7.0);
	}

	#[test]
	fn test_minimum_per_frame_requires_marker() {
		let policy = RegularThrowPolicy::MinimumPerFrameWhen {
			marker: "IS_HEAVY_ATTACK".into(),
		};
		let hits = [(8.0, 10.0), (5.0, 10.0), (2.0, 14.0)];
		assert_eq!(policy.aggregate(&hits, "if IS_HEAVY_ATTACK {"), 7.0);
		assert_eq!(policy.aggregate(&hits, ""), 10.0);
	}

	#[test]
	fn test_drop_last_frame_group() {
		let policy = RegularThrowPolicy::DropLastFrameWhen {
			marker: "PostureModule::scale".into(),
			min_frames: 3,
		};
		let hits = [(4.0, 20.0), (1.0, 5.0), (2.0, 12.0), (9.0, 5.0)];
		assert_eq!(policy.aggregate(&hits, "PostureModule::scale(boma)"), 3.0);
		assert_eq!(policy.aggregate(&hits[..2], "PostureModule::scale(boma)"), 5.0);
	}

	#[test]
	fn test_absolute_policies() {
		assert_eq!(AbsoluteThrowPolicy::First.aggregate(&[]), 0.0);
		assert_eq!(AbsoluteThrowPolicy::First.aggregate(&[9.0, 3.0]), 9.0);
		assert_eq!(AbsoluteThrowPolicy::MinimumOfMany.aggregate(&[9.0, 3.0, 5.0]), 3.0);
	}

	#[test]
	fn test_ignore() {
		assert_eq!(RegularThrowPolicy::Ignore.aggregate(&[(5.0, 1.0)], ""), 0.0);
	}
}
