//! Canonical move identifiers and their script locations.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::script::MoveClass;

/// One of the 31 move slots reported for every fighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
	/// Jab 1
	Jab1,
	/// Jab 2
	Jab2,
	/// Jab 3
	Jab3,
	/// Forward tilt
	Ftilt,
	/// Up tilt
	Utilt,
	/// Down tilt
	Dtilt,
	/// Forward smash
	Fsmash,
	/// Up smash
	Usmash,
	/// Down smash
	Dsmash,
	/// Neutral air
	Nair,
	/// Forward air
	Fair,
	/// Back air
	Bair,
	/// Up air
	Uair,
	/// Down air
	Dair,
	/// Dash attack
	DashAttack,
	/// Standing grab
	Grab,
	/// Dash grab
	DashGrab,
	/// Pivot grab
	PivotGrab,
	/// Pummel
	Pummel,
	/// Forward throw
	Fthrow,
	/// Back throw
	Bthrow,
	/// Up throw
	Uthrow,
	/// Down throw
	Dthrow,
	/// Neutral special
	NeutralB,
	/// Side special
	SideB,
	/// Up special
	UpB,
	/// Down special
	DownB,
	/// Aerial neutral special
	NeutralBAir,
	/// Aerial side special
	SideBAir,
	/// Aerial up special
	UpBAir,
	/// Aerial down special
	DownBAir,
}

impl MoveKind {
	/// Every move in report order
	pub const ALL: [MoveKind; 31] = [
		Self::Jab1,
		Self::Jab2,
		Self::Jab3,
		Self::Ftilt,
		Self::Utilt,
		Self::Dtilt,
		Self::Fsmash,
		Self::Usmash,
		Self::Dsmash,
		Self::Nair,
		Self::Fair,
		Self::Bair,
		Self::Uair,
		Self::Dair,
		Self::DashAttack,
		Self::Grab,
		Self::DashGrab,
		Self::PivotGrab,
		Self::Pummel,
		Self::Fthrow,
		Self::Bthrow,
		Self::Uthrow,
		Self::Dthrow,
		Self::NeutralB,
		Self::SideB,
		Self::UpB,
		Self::DownB,
		Self::NeutralBAir,
		Self::SideBAir,
		Self::UpBAir,
		Self::DownBAir,
	];

	/// The five aerials
	pub const AERIALS: [MoveKind; 5] = [Self::Nair, Self::Fair, Self::Bair, Self::Uair, Self::Dair];

	/// Short identifier, e.g. `ftilt` or `neutral_b_air`
	pub fn key(self) -> &'static str {
		match self {
			Self::Jab1 => "jab1",
			Self::Jab2 => "jab2",
			Self::Jab3 => "jab3",
			Self::Ftilt => "ftilt",
			Self::Utilt => "utilt",
			Self::Dtilt => "dtilt",
			Self::Fsmash => "fsmash",
			Self::Usmash => "usmash",
			Self::Dsmash => "dsmash",
			Self::Nair => "nair",
			Self::Fair => "fair",
			Self::Bair => "bair",
			Self::Uair => "uair",
			Self::Dair => "dair",
			Self::DashAttack => "dash_attack",
			Self::Grab => "grab",
			Self::DashGrab => "dash_grab",
			Self::PivotGrab => "pivot_grab",
			Self::Pummel => "pummel",
			Self::Fthrow => "fthrow",
			Self::Bthrow => "bthrow",
			Self::Uthrow => "uthrow",
			Self::Dthrow => "dthrow",
			Self::NeutralB => "neutral_b",
			Self::SideB => "side_b",
			Self::UpB => "up_b",
			Self::DownB => "down_b",
			Self::NeutralBAir => "neutral_b_air",
			Self::SideBAir => "side_b_air",
			Self::UpBAir => "up_b_air",
			Self::DownBAir => "down_b_air",
		}
	}

	/// Looks a move up by its [`key`](Self::key)
	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.key() == key)
	}

	/// Default script function, e.g. `game_attacks3`
	pub fn function_name(self) -> &'static str {
		match self {
			Self::Jab1 => "game_attack11",
			Self::Jab2 => "game_attack12",
			Self::Jab3 => "game_attack13",
			Self::Ftilt => "game_attacks3",
			Self::Utilt => "game_attackhi3",
			Self::Dtilt => "game_attacklw3",
			Self::Fsmash => "game_attacks4",
			Self::Usmash => "game_attackhi4",
			Self::Dsmash => "game_attacklw4",
			Self::Nair => "game_attackairn",
			Self::Fair => "game_attackairf",
			Self::Bair => "game_attackairb",
			Self::Uair => "game_attackairhi",
			Self::Dair => "game_attackairlw",
			Self::DashAttack => "game_attackdash",
			Self::Grab => "game_catch",
			Self::DashGrab => "game_catchdash",
			Self::PivotGrab => "game_catchturn",
			Self::Pummel => "game_catchattack",
			Self::Fthrow => "game_throwf",
			Self::Bthrow => "game_throwb",
			Self::Uthrow => "game_throwhi",
			Self::Dthrow => "game_throwlw",
			Self::NeutralB => "game_specialn",
			Self::SideB => "game_specials",
			Self::UpB => "game_specialhi",
			Self::DownB => "game_speciallw",
			Self::NeutralBAir => "game_specialairn",
			Self::SideBAir => "game_specialairs",
			Self::UpBAir => "game_specialairhi",
			Self::DownBAir => "game_specialairlw",
		}
	}

	/// File under `src/acmd` holding the move's script
	pub fn primary_file(self) -> &'static str {
		match self.category() {
			MoveCategory::Jabs | MoveCategory::Dash => "ground.rs",
			MoveCategory::Tilts => "tilts.rs",
			MoveCategory::Smashes => "smashes.rs",
			MoveCategory::Aerials => "aerials.rs",
			MoveCategory::Grabs => "throws.rs",
			MoveCategory::Specials => "specials.rs",
		}
	}

	/// File name in the dumped fallback tree, e.g. `AttackS3.txt`
	pub fn fallback_file(self) -> &'static str {
		match self {
			Self::Jab1 => "Attack11.txt",
			Self::Jab2 => "Attack12.txt",
			Self::Jab3 => "Attack13.txt",
			Self::Ftilt => "AttackS3.txt",
			Self::Utilt => "AttackHi3.txt",
			Self::Dtilt => "AttackLw3.txt",
			Self::Fsmash => "AttackS4.txt",
			Self::Usmash => "AttackHi4.txt",
			Self::Dsmash => "AttackLw4.txt",
			Self::Nair => "AttackAirN.txt",
			Self::Fair => "AttackAirF.txt",
			Self::Bair => "AttackAirB.txt",
			Self::Uair => "AttackAirHi.txt",
			Self::Dair => "AttackAirLw.txt",
			Self::DashAttack => "AttackDash.txt",
			Self::Grab => "Catch.txt",
			Self::DashGrab => "CatchDash.txt",
			Self::PivotGrab => "CatchTurn.txt",
			Self::Pummel => "CatchAttack.txt",
			Self::Fthrow => "ThrowF.txt",
			Self::Bthrow => "ThrowB.txt",
			Self::Uthrow => "ThrowHi.txt",
			Self::Dthrow => "ThrowLw.txt",
			Self::NeutralB => "SpecialN.txt",
			Self::SideB => "SpecialS.txt",
			Self::UpB => "SpecialHi.txt",
			Self::DownB => "SpecialLw.txt",
			Self::NeutralBAir => "SpecialAirN.txt",
			Self::SideBAir => "SpecialAirS.txt",
			Self::UpBAir => "SpecialAirHi.txt",
			Self::DownBAir => "SpecialAirLw.txt",
		}
	}

	/// Human readable name, e.g. `Forward Tilt`
	pub fn display_name(self) -> &'static str {
		match self {
			Self::Jab1 => "Jab 1",
			Self::Jab2 => "Jab 2",
			Self::Jab3 => "Jab 3",
			Self::Ftilt => "Forward Tilt",
			Self::Utilt => "Up Tilt",
			Self::Dtilt => "Down Tilt",
			Self::Fsmash => "Forward Smash",
			Self::Usmash => "Up Smash",
			Self::Dsmash => "Down Smash",
			Self::Nair => "Neutral Air",
			Self::Fair => "Forward Air",
			Self::Bair => "Back Air",
			Self::Uair => "Up Air",
			Self::Dair => "Down Air",
			Self::DashAttack => "Dash Attack",
			Self::Grab => "Grab",
			Self::DashGrab => "Dash Grab",
			Self::PivotGrab => "Pivot Grab",
			Self::Pummel => "Pummel",
			Self::Fthrow => "Forward Throw",
			Self::Bthrow => "Back Throw",
			Self::Uthrow => "Up Throw",
			Self::Dthrow => "Down Throw",
			Self::NeutralB => "Neutral Special",
			Self::SideB => "Side Special",
			Self::UpB => "Up Special",
			Self::DownB => "Down Special",
			Self::NeutralBAir => "Neutral Special (Air)",
			Self::SideBAir => "Side Special (Air)",
			Self::UpBAir => "Up Special (Air)",
			Self::DownBAir => "Down Special (Air)",
		}
	}

	/// Report page the move appears on
	pub fn category(self) -> MoveCategory {
		match self {
			Self::Jab1 | Self::Jab2 | Self::Jab3 => MoveCategory::Jabs,
			Self::Ftilt | Self::Utilt | Self::Dtilt => MoveCategory::Tilts,
			Self::Fsmash | Self::Usmash | Self::Dsmash => MoveCategory::Smashes,
			Self::Nair | Self::Fair | Self::Bair | Self::Uair | Self::Dair => MoveCategory::Aerials,
			Self::DashAttack => MoveCategory::Dash,
			Self::Grab
			| Self::DashGrab
			| Self::PivotGrab
			| Self::Pummel
			| Self::Fthrow
			| Self::Bthrow
			| Self::Uthrow
			| Self::Dthrow => MoveCategory::Grabs,
			_ => MoveCategory::Specials,
		}
	}

	/// Class used by the script engine
	pub fn class(self) -> MoveClass {
		match self {
			Self::Grab | Self::DashGrab | Self::PivotGrab => MoveClass::Grab,
			Self::Pummel | Self::Fthrow | Self::Bthrow | Self::Uthrow | Self::Dthrow => MoveClass::Throw,
			_ => MoveClass::Other,
		}
	}

	/// Returns `true` for the five aerials, the only moves with landing lag
	pub fn is_aerial(self) -> bool {
		self.category() == MoveCategory::Aerials
	}

	/// Returns `true` for the four throws, excluding pummel
	pub fn is_directional_throw(self) -> bool {
		matches!(self, Self::Fthrow | Self::Bthrow | Self::Uthrow | Self::Dthrow)
	}

	/// Lowercase animation file fragments used to find a final frame
	pub fn animation_patterns(self) -> &'static [&'static str] {
		match self {
			Self::Jab1 => &["attack11"],
			Self::Jab2 => &["attack12"],
			Self::Jab3 => &["attack13"],
			Self::Ftilt => &["attacks3", "attacks3s", "attacks3w"],
			Self::Utilt => &["attackhi3", "attackhi3s", "attackhi3w"],
			Self::Dtilt => &["attacklw3", "attacklw3s", "attacklw3w"],
			Self::Fsmash => &["attacks4"],
			Self::Usmash => &["attackhi4"],
			Self::Dsmash => &["attacklw4"],
			Self::Nair => &["attackairn"],
			Self::Fair => &["attackairf"],
			Self::Bair => &["attackairb"],
			Self::Uair => &["attackairhi"],
			Self::Dair => &["attackairlw"],
			Self::DashAttack => &["attackdash"],
			Self::Grab => &["catch"],
			Self::DashGrab => &["catchdash"],
			Self::PivotGrab => &["catchturn"],
			Self::Pummel => &["catchattack"],
			Self::Fthrow => &["throwf"],
			Self::Bthrow => &["throwb"],
			Self::Uthrow => &["throwhi"],
			Self::Dthrow => &["throwlw"],
			Self::NeutralB => &["specialn"],
			Self::SideB => &["specials"],
			Self::UpB => &["specialhi"],
			Self::DownB => &["speciallw"],
			Self::NeutralBAir | Self::SideBAir | Self::UpBAir | Self::DownBAir => &[],
		}
	}

	/// `c00` animation file consulted last, for the fifteen standard attacks
	pub fn costume_animation_file(self) -> Option<&'static str> {
		Some(match self {
			Self::Jab1 => "c00attack11.json",
			Self::Jab2 => "c00attack12.json",
			Self::Jab3 => "c00attack13.json",
			Self::Ftilt => "c00attacks3s.json",
			Self::Utilt => "c00attackhi3.json",
			Self::Dtilt => "c00attacklw3.json",
			Self::Fsmash => "c00attacks4s.json",
			Self::Usmash => "c00attackhi4.json",
			Self::Dsmash => "c00attacklw4.json",
			Self::Nair => "c00attackairn.json",
			Self::Fair => "c00attackairf.json",
			Self::Bair => "c00attackairb.json",
			Self::Uair => "c00attackairhi.json",
			Self::Dair => "c00attackairlw.json",
			Self::DashAttack => "c00attackdash.json",
			_ => return None,
		})
	}
}

impl fmt::Display for MoveKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

impl FromStr for MoveKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_key(s).ok_or_else(|| format!("unknown move: {s}"))
	}
}

/// Report page grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoveCategory {
	/// Jabs 1 to 3
	Jabs,
	/// Tilts
	Tilts,
	/// Smash attacks
	Smashes,
	/// Aerials, with landing lag
	Aerials,
	/// Dash attack
	Dash,
	/// Grabs, pummel and throws
	Grabs,
	/// Grounded and aerial specials
	Specials,
}

impl MoveCategory {
	/// Every category in page order
	pub const ALL: [MoveCategory; 7] =
		[Self::Jabs, Self::Tilts, Self::Smashes, Self::Aerials, Self::Dash, Self::Grabs, Self::Specials];

	/// Page heading
	pub fn title(self) -> &'static str {
		match self {
			Self::Jabs => "Jab Attacks",
			Self::Tilts => "Tilt Attacks",
			Self::Smashes => "Smash Attacks",
			Self::Aerials => "Aerial Attacks",
			Self::Dash => "Dash Attack",
			Self::Grabs => "Grabs & Throws",
			Self::Specials => "Special Attacks",
		}
	}

	/// Output file name
	pub fn filename(self) -> &'static str {
		match self {
			Self::Jabs => "jabs_attacks.html",
			Self::Tilts => "tilts_attacks.html",
			Self::Smashes => "smashes_attacks.html",
			Self::Aerials => "aerials_attacks.html",
			Self::Dash => "dash_attacks.html",
			Self::Grabs => "grabs_attacks.html",
			Self::Specials => "specials_attacks.html",
		}
	}

	/// Moves on this page, in report order
	pub fn moves(self) -> impl Iterator<Item = MoveKind> {
		MoveKind::ALL.into_iter().filter(move |kind| kind.category() == self)
	}
}
