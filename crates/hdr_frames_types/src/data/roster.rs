//! Fighter name tables.

/// Internal folder name to report display name
const DISPLAY_NAMES: &[(&str, &str)] = &[
	("mario", "Mario"),
	("donkey", "Donkey Kong"),
	("link", "Link"),
	("samus", "Samus"),
	("samusd", "Dark Samus"),
	("yoshi", "Yoshi"),
	("kirby", "Kirby"),
	("fox", "Fox"),
	("pikachu", "Pikachu"),
	("luigi", "Luigi"),
	("ness", "Ness"),
	("captain", "Captain Falcon"),
	("purin", "Jigglypuff"),
	("peach", "Peach"),
	("daisy", "Daisy"),
	("koopa", "Bowser"),
	("nana", "Ice Climbers"),
	("popo", "Ice Climbers"),
	("iceclimber", "Ice Climbers"),
	("sheik", "Sheik"),
	("zelda", "Zelda"),
	("mariod", "Dr.Mario"),
	("pichu", "Pichu"),
	("falco", "Falco"),
	("marth", "Marth"),
	("lucina", "Lucina"),
	("younglink", "Young Link"),
	("ganon", "Ganondorf"),
	("mewtwo", "Mewtwo"),
	("roy", "Roy"),
	("chrom", "Chrom"),
	("gamewatch", "Mr.Game & Watch"),
	("metaknight", "Meta Knight"),
	("pit", "Pit"),
	("pitb", "Dark Pit"),
	("szerosuit", "Zero Suit Samus"),
	("wario", "Wario"),
	("snake", "Snake"),
	("ike", "Ike"),
	("pzenigame", "Squirtle"),
	("pfushigisou", "Ivysaur"),
	("plizardon", "Charizard"),
	("diddy", "Diddy Kong"),
	("lucas", "Lucas"),
	("sonic", "Sonic"),
	("dedede", "King Dedede"),
	("pikmin", "Olimar"),
	("lucario", "Lucario"),
	("robot", "R.O.B."),
	("toonlink", "Toon Link"),
	("wolf", "Wolf"),
	("murabito", "Villager"),
	("rockman", "Mega Man"),
	("wiifit", "Wii Fit Trainer"),
	("rosetta", "Rosalina & Luma"),
	("littlemac", "Little Mac"),
	("gekkouga", "Greninja"),
	("miifighter", "Mii Brawler"),
	("miiswordsman", "Mii Swordfighter"),
	("miigunner", "Mii Gunner"),
	("palutena", "Palutena"),
	("pacman", "Pac-Man"),
	("reflet", "Robin"),
	("shulk", "Shulk"),
	("koopajr", "Bowser Jr."),
	("duckhunt", "Duck Hunt"),
	("ryu", "Ryu"),
	("ken", "Ken"),
	("cloud", "Cloud"),
	("kamui", "Corrin"),
	("bayonetta", "Bayonetta"),
	("inkling", "Inkling"),
	("ridley", "Ridley"),
	("simon", "Simon"),
	("richter", "Richter"),
	("krool", "King K. Rool"),
	("shizue", "Isabelle"),
	("gaogaen", "Incineroar"),
	("packun", "Piranha Plant"),
	("jack", "Joker"),
	("brave", "Hero"),
	("buddy", "Banjo & Kazooie"),
	("dolly", "Terry"),
	("master", "Byleth"),
	("tantan", "Min Min"),
	("pickel", "Steve"),
	("edge", "Sephiroth"),
	("eflame", "Pyra"),
	("element", "Rex"),
	("elight", "Mythra"),
	("demon", "Kazuya"),
	("trail", "Sora"),
];

/// Fighter parameter comment label to internal folder name
const PARAM_LABELS: &[(&str, &str)] = &[
	("MARIO", "mario"),
	("DONKEY KONG", "donkey"),
	("LINK", "link"),
	("SAMUS", "samus"),
	("YOSHI", "yoshi"),
	("KIRBY", "kirby"),
	("FOX", "fox"),
	("PIKACHU", "pikachu"),
	("LUIGI", "luigi"),
	("NESS", "ness"),
	("CAPTAIN FALCON", "captain"),
	("JIGGLYPUFF", "purin"),
	("PEACH", "peach"),
	("BOWSER", "koopa"),
	("POPO", "popo"),
	("NANA", "nana"),
	("SHEIK", "sheik"),
	("ZELDA", "zelda"),
	("DR. MARIO", "mariod"),
	("PICHU", "pichu"),
	("FALCO", "falco"),
	("MARTH", "marth"),
	("YOUNG LINK", "younglink"),
	("GANONDORF", "ganon"),
	("MEWTWO", "mewtwo"),
	("ROY", "roy"),
	("MR. GAME & WATCH", "gamewatch"),
	("META KNIGHT", "metaknight"),
	("PIT", "pit"),
	("ZERO SUIT SAMUS", "szerosuit"),
	("WARIO", "wario"),
	("SNAKE", "snake"),
	("IKE", "ike"),
	("SQUIRTLE", "pzenigame"),
	("IVYSAUR", "pfushigisou"),
	("CHARIZARD", "plizardon"),
	("DIDDY KONG", "diddy"),
	("LUCAS", "lucas"),
	("SONIC", "sonic"),
	("KING DEDEDE", "dedede"),
	("OLIMAR", "pikmin"),
	("LUCARIO", "lucario"),
	("R.O.B.", "robot"),
	("TOON LINK", "toonlink"),
	("WOLF", "wolf"),
	("VILLAGER", "murabito"),
	("MEGA MAN", "rockman"),
	("WII FIT TRAINER", "wiifit"),
	("ROSALINA & LUMA", "rosetta"),
	("LITTLE MAC", "littlemac"),
	("GRENINJA", "gekkouga"),
	("PALUTENA", "palutena"),
	("PAC-MAN", "pacman"),
	("ROBIN", "reflet"),
	("SHULK", "shulk"),
	("BOWSER JR.", "koopajr"),
	("DUCK HUNT", "duckhunt"),
	("RYU", "ryu"),
	("CLOUD", "cloud"),
	("CORRIN", "kamui"),
	("BAYONETTA", "bayonetta"),
	("INKLING", "inkling"),
	("RIDLEY", "ridley"),
	("SIMON", "simon"),
	("KING K. ROOL", "krool"),
	("ISABELLE", "shizue"),
	("INCINEROAR", "gaogaen"),
	("PIRANHA PLANT", "packun"),
	("JOKER", "jack"),
	("HERO", "brave"),
	("BANJO & KAZOOIE", "buddy"),
	("TERRY", "dolly"),
	("BYLETH", "master"),
	("MIN MIN", "tantan"),
	("STEVE", "pickel"),
	("KAZUYA", "demon"),
	("SORA", "trail"),
	("PYRA", "eflame"),
	("MYTHRA", "elight"),
	("SEPHIROTH", "edge"),
	("MII BRAWLER", "miifighter"),
	("MII SWORDFIGHTER", "miiswordsman"),
	("MII GUNNER", "miigunner"),
	("DARK SAMUS", "samusd"),
	("DAISY", "daisy"),
	("LUCINA", "lucina"),
	("CHROM", "chrom"),
	("DARK PIT", "pitb"),
	("KEN", "ken"),
	("RICHTER", "richter"),
];

/// Parameter table entries that are not playable fighters
pub const SKIPPED_PARAM_LABELS: [&str; 4] = [
	"GIGA BOWSER",
	"MII BRAWLER (FIGHTING TEAM)",
	"MII SWORDFIGHTER (FIGHTING TEAM)",
	"MII GUNNER (FIGHTING TEAM)",
];

/// Display name for an internal folder name
pub fn display_name(internal: &str) -> Option<&'static str> {
	DISPLAY_NAMES.iter().find(|(name, _)| *name == internal).map(|(_, display)| *display)
}

/// Display name, or the internal name itself when it is not in the roster
pub fn display_name_or_internal(internal: &str) -> String {
	display_name(internal).map_or_else(|| internal.to_owned(), str::to_owned)
}

/// Internal folder name for a fighter parameter comment label
pub fn internal_from_param_label(label: &str) -> Option<&'static str> {
	PARAM_LABELS.iter().find(|(name, _)| *name == label).map(|(_, internal)| *internal)
}

/// Display name for a fighter parameter comment label.
///
/// Skipped and unknown labels yield `None`.
pub fn display_from_param_label(label: &str) -> Option<&'static str> {
	if SKIPPED_PARAM_LABELS.contains(&label) {
		return None;
	}
	internal_from_param_label(label).and_then(display_name)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_names() {
		assert_eq!(display_name("murabito"), Some("Villager"));
		assert_eq!(display_name("popo"), Some("Ice Climbers"));
		assert_eq!(display_name("unknown"), None);
		assert_eq!(display_name_or_internal("unknown"), "unknown");
	}

	#[test]
	fn test_param_labels() {
		assert_eq!(internal_from_param_label("OLIMAR"), Some("pikmin"));
		assert_eq!(display_from_param_label("PAC-MAN"), Some("Pac-Man"));
		assert_eq!(display_from_param_label("GIGA BOWSER"), None);
		assert_eq!(display_from_param_label("MII GUNNER (FIGHTING TEAM)"), None);
	}
}
