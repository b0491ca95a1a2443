//! Cell text for table values.
//!
//! # Examples
//!
//! ```
//! use hdr_frames_report::format;
//! use hdr_frames_types::orchestrator::MarkedValue;
//!
//! assert_eq!(format::number(Some(12.0)), "12");
//! assert_eq!(format::number(Some(12.3)), "12.3");
//! assert_eq!(format::damage(Some(MarkedValue::marked(8.0, Some('+')))), "8.0+");
//! assert_eq!(format::marked(Some(MarkedValue::marked(100.0, Some('-')))), "100-");
//! assert_eq!(format::number(None), "N/A");
//! ```

use hdr_frames_types::orchestrator::MarkedValue;

/// Text of an absent value
pub const NOT_AVAILABLE: &str = "N/A";

fn plain(value: f64) -> String {
	if value.fract() == 0.0 {
		format!("{}", value as i64)
	} else {
		format!("{value:.1}")
	}
}

/// Whole numbers without decimals, anything else with one
pub fn number(value: Option<f64>) -> String {
	value.map_or_else(|| NOT_AVAILABLE.to_owned(), plain)
}

/// Damage cell: marked values keep one decimal before the mark
pub fn damage(value: Option<MarkedValue>) -> String {
	match value {
		Some(MarkedValue {
			value,
			mark: Some(mark),
		}) => format!("{value:.1}{mark}"),
		Some(value) => plain(value.value),
		None => NOT_AVAILABLE.to_owned(),
	}
}

/// Non-damage cell: marked values print as an integer before the mark
pub fn marked(value: Option<MarkedValue>) -> String {
	match value {
		Some(MarkedValue {
			value,
			mark: Some(mark),
		}) => format!("{}{mark}", value.trunc() as i64),
		Some(value) => plain(value.value),
		None => NOT_AVAILABLE.to_owned(),
	}
}

/// Frame cell
pub fn frame(value: Option<i64>) -> String {
	value.map_or_else(|| NOT_AVAILABLE.to_owned(), |frame| frame.to_string())
}

/// Stat cell with `decimals` places and trailing zeros removed; 0 places rounds
pub fn stat(value: Option<f64>, decimals: usize) -> String {
	let Some(value) = value else {
		return NOT_AVAILABLE.to_owned();
	};
	if decimals == 0 {
		return format!("{value:.0}");
	}
	let text = format!("{value:.decimals$}");
	text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Frames the attacker is ahead after landing on shield: `floor(damage * 0.55 + 2 - lag)`
pub fn shield_advantage(damage: Option<f64>, landing_lag: u32) -> Option<i64> {
	let damage = damage.filter(|damage| *damage > 0.0)?;
	Some((damage * 0.55 + 2.0 - f64::from(landing_lag)).floor() as i64)
}

/// Colour band of a shield advantage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShieldBand {
	/// Greater than 0
	Positive,
	/// From -2 to 0
	Neutral,
	/// Less than -2
	Negative,
}

impl ShieldBand {
	/// Band of an advantage value
	pub fn of(advantage: i64) -> Self {
		if advantage > 0 {
			Self::Positive
		} else if advantage < -2 {
			Self::Negative
		} else {
			Self::Neutral
		}
	}

	/// CSS class of the cell
	pub fn css_class(self) -> &'static str {
		match self {
			Self::Positive => "shield-advantage-positive",
			Self::Neutral => "shield-advantage-neutral",
			Self::Negative => "shield-advantage-negative",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_numbers() {
		assert_eq!(number(Some(0.0)), "0");
		assert_eq!(number(Some(361.0)), "361");
		assert_eq!(number(Some(4.5)), "4.5");
		assert_eq!(damage(Some(MarkedValue::plain(14.7))), "14.7");
		assert_eq!(damage(Some(MarkedValue::marked(14.700000000000001, Some('*')))), "14.7*");
		assert_eq!(marked(Some(MarkedValue::marked(88.0, Some('*')))), "88*");
		assert_eq!(marked(None), "N/A");
		assert_eq!(frame(Some(12)), "12");
		assert_eq!(frame(None), "N/A");
	}

	#[test]
	fn test_stats() {
		assert_eq!(stat(Some(1.25), 3), "1.25");
		assert_eq!(stat(Some(2.0), 3), "2");
		assert_eq!(stat(Some(0.1), 3), "0.1");
		assert_eq!(stat(Some(98.0), 0), "98");
		assert_eq!(stat(None, 0), "N/A");
	}

	#[test]
	fn test_shield_advantage() {
		// 12 * 0.55 + 2 - 7 = 1.6
		assert_eq!(shield_advantage(Some(12.0), 7), Some(1));
		assert_eq!(shield_advantage(Some(5.0), 10), Some(-6));
		assert_eq!(shield_advantage(Some(0.0), 5), None);
		assert_eq!(shield_advantage(None, 5), None);

		assert_eq!(ShieldBand::of(1), ShieldBand::Positive);
		assert_eq!(ShieldBand::of(0), ShieldBand::Neutral);
		assert_eq!(ShieldBand::of(-2), ShieldBand::Neutral);
		assert_eq!(ShieldBand::of(-3).css_class(), "shield-advantage-negative");
	}
}
