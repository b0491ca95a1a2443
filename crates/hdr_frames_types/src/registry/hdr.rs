//! Built-in overrides for the HewDraw Remix fighter tree.

use super::{
	AmmoExpansion, AmmoKind, AmmoMove, ArticleEntry, ArticleSource, Composite, Expansion, FallbackAnchor, FixedRow,
	FixedRows, FrameRule, OverrideRegistry, ScriptRef, SourceOverride, SpawnAnchor, Variant, VariantSet,
};
use crate::moves::MoveKind;
use crate::orchestrator::RowNote;
use crate::script::{
	AbsoluteThrowPolicy, HitValues, LiteralRate, RegularThrowPolicy, ShotInjection, VariantModifier,
};

const SKIPPED: [&str; 4] = ["ptrainer", "koopag", "common", "nana"];

const PSYCHE_UP_GUARD: &str = "if VarModule::is_flag(agent.battle_object, vars::brave::instance::PSYCHE_UP_ACTIVE)";

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|item| (*item).to_owned()).collect()
}

fn function(name: &str) -> SourceOverride {
	SourceOverride {
		path: None,
		function: Some(name.to_owned()),
	}
}

fn script(path: &str, name: Option<&str>) -> SourceOverride {
	SourceOverride {
		path: Some(path.to_owned()),
		function: name.map(str::to_owned),
	}
}

fn article(article: &str, damage: f64, function: &str, dir: &str, file: &str) -> ArticleEntry {
	ArticleEntry {
		source: ArticleSource {
			article: article.to_owned(),
			function: function.to_owned(),
			dir: dir.to_owned(),
			file: file.to_owned(),
		},
		damage,
	}
}

fn variants(use_fallback: bool, variants: Vec<Variant>) -> Option<Expansion> {
	Some(Expansion::Variants(VariantSet {
		variants,
		use_fallback,
	}))
}

fn weak_strong(prefix: &str, motion: &str) -> Vec<Variant> {
	vec![
		Variant::new("Weak", format!("{prefix}w")).motion_key(format!("{motion}_w")),
		Variant::new("Strong", format!("{prefix}s")).motion_key(format!("{motion}_s")),
	]
}

fn anvil_note(mode: &str, base: &str) -> RowNote {
	RowNote::new(format!("Steve Dair - {mode} Mode"))
		.line("Damage", format!("{base} + (fall_distance × 5.0)"))
		.line("KBG", "100 - (fall_distance × 1.5)")
		.line("Note", "Fall distance measured from anvil generation")
}

impl OverrideRegistry {
	/// Every override the HewDraw Remix tree needs
	pub fn hdr() -> Self {
		let mut registry = Self::empty();
		for folder in SKIPPED {
			registry.skip(folder);
		}
		sources(&mut registry);
		expansions(&mut registry);
		engine_switches(&mut registry);
		throws(&mut registry);
		ammo(&mut registry);
		registry
	}
}

fn sources(registry: &mut OverrideRegistry) {
	registry.entry_mut("rockman", MoveKind::Nair).source = Some(function("game_attackairnmelee"));
	registry.entry_mut("rockman", MoveKind::Ftilt).source = Some(function("game_attacks3melee"));
	registry.entry_mut("rockman", MoveKind::Jab1).source = Some(function("game_attack11melee"));
	registry.entry_mut("rockman", MoveKind::Dair).source = Some(script("src/hardknuckle/acmd.rs", Some("game_regular")));
	registry.entry_mut("metaknight", MoveKind::Jab1).source = Some(function("game_attack100"));

	registry.entry_mut("pickel", MoveKind::Jab1).source = Some(script("src/acmd/tilts.rs", Some("game_attacks3")));
	registry.entry_mut("pickel", MoveKind::Nair).source = Some(script("src/acmd/tilts.rs", Some("game_attacks3")));
	registry.entry_mut("pickel", MoveKind::DashAttack).source = Some(function("game_specialsfailed"));

	for folder in ["popo", "iceclimber"] {
		registry.entry_mut(folder, MoveKind::Pummel).source = Some(function("game_catchattack_nana"));
		registry.character_mut(folder).extra_fallback_roots = strings(&["popo", "nana"]);
	}
	registry.character_mut("iceclimber").data_alias = Some("popo".to_owned());

	let gunner_files = [
		(MoveKind::Nair, "aerials/attack_air_n.rs"),
		(MoveKind::Fair, "aerials/attack_air_f.rs"),
		(MoveKind::Bair, "aerials/attack_air_b.rs"),
		(MoveKind::Uair, "aerials/attack_air_hi.rs"),
		(MoveKind::Dair, "aerials/attack_air_lw.rs"),
		(MoveKind::NeutralB, "specialn.rs"),
		(MoveKind::SideB, "specials.rs"),
		(MoveKind::UpB, "specialhi.rs"),
		(MoveKind::DownB, "speciallw.rs"),
		(MoveKind::NeutralBAir, "specialairn.rs"),
		(MoveKind::SideBAir, "specialairs.rs"),
		(MoveKind::UpBAir, "specialairhi.rs"),
		(MoveKind::DownBAir, "specialairlw.rs"),
	];
	for (kind, file) in gunner_files {
		registry.entry_mut("miigunner", kind).source = Some(script(&format!("src/acmd/{file}"), None));
	}

	registry.entry_mut("murabito", MoveKind::Fair).source = Some(script("src/bullet/acmd.rs", Some("game_shootf")));
	registry.entry_mut("shizue", MoveKind::Bair).source = Some(script("src/bullet/acmd.rs", Some("game_shootb")));
	let bowling = registry.entry_mut("murabito", MoveKind::Fsmash);
	bowling.source = Some(script("src/bowlingball/acmd.rs", Some("game_fall")));
	bowling.fallback_subdir = Some("bowlingball".to_owned());

	for kind in [MoveKind::Fsmash, MoveKind::Usmash, MoveKind::Dsmash] {
		let entry = registry.entry_mut("bayonetta", kind);
		entry.source = Some(script("src/wickedweavearm/acmd.rs", None));
		entry.fallback_subdir = Some("wickedweavearm".to_owned());
	}
	for kind in [MoveKind::Usmash, MoveKind::Dsmash] {
		registry.entry_mut("ness", kind).source = Some(script("src/yoyohead/acmd.rs", None));
	}
	registry.entry_mut("pikmin", MoveKind::Fsmash).source = Some(function("game_attacks4sjump"));
}

fn expansions(registry: &mut OverrideRegistry) {
	registry.entry_mut("pickel", MoveKind::Dtilt).expansion = Some(Expansion::Composite(Composite {
		damage: ScriptRef::new("src/fire/acmd.rs", "game_attacklw3"),
		anchor: SpawnAnchor {
			script: ScriptRef::new("src/acmd/tilts.rs", "game_attacklw3"),
			needles: strings(&["ArticleModule::generate_article", "*FIGHTER_PICKEL_GENERATE_ARTICLE_FIRE"]),
			rates: Vec::new(),
		},
	}));
	registry.entry_mut("miigunner", MoveKind::Fair).expansion = Some(Expansion::Composite(Composite {
		damage: ScriptRef::new("src/attackairf_bullet/acmd.rs", "game_fly"),
		anchor: SpawnAnchor {
			script: ScriptRef::new("src/acmd/aerials/attack_air_f.rs", "game_attackairf"),
			needles: strings(&["ArticleModule::generate_article", "*FIGHTER_MIIGUNNER_GENERATE_ARTICLE_ATTACKAIRF_BULLET"]),
			rates: Vec::new(),
		},
	}));
	registry.entry_mut("rockman", MoveKind::Uair).expansion = Some(Expansion::Composite(Composite {
		damage: ScriptRef::new("src/airshooter/acmd.rs", "game_regular"),
		anchor: SpawnAnchor {
			script: ScriptRef::new("src/acmd/aerials.rs", "game_attackairhi"),
			needles: strings(&["ArticleModule::generate_article", "*FIGHTER_ROCKMAN_GENERATE_ARTICLE_AIRSHOOTER"]),
			rates: vec![
				LiteralRate::new("10.0/(9.0 - 1.0)", 1.25),
				LiteralRate::new("FT_MOTION_RATE(agent, 1.0)", 1.0),
			],
		},
	}));

	let anvil = |label: &str, damage: f64, mode: &str, base: &str| FixedRow {
		label: label.to_owned(),
		hit: HitValues::new(damage, 70.0, 100.0, 0.0, 62.0),
		damage_mark: Some('+'),
		kbg_mark: Some('-'),
		note: Some(anvil_note(mode, base)),
	};
	registry.entry_mut("pickel", MoveKind::Dair).expansion = Some(Expansion::FixedRows(FixedRows {
		requires: "src/forge/acmd.rs".to_owned(),
		frame: FallbackAnchor {
			file: "AttackAirLw.txt".to_owned(),
			needles: strings(&["*FIGHTER_PICKEL_STATUS_ATTACK_FLAG_FORGE_GENERATE_ENABLE"]),
			default: 12.0,
		},
		rows: vec![anvil("Release*", 8.0, "Release", "8.0"), anvil("Ride*", 12.0, "Ride", "12.0")],
	}));

	registry.entry_mut("donkey", MoveKind::Fthrow).expansion = variants(true, vec![
		Variant::new("Forward", "game_throwff").motion_key("throw_f_f").fallback_file("ThrowFF.txt"),
		Variant::new("Back", "game_throwfb").motion_key("throw_f_b").fallback_file("ThrowFB.txt"),
		Variant::new("High", "game_throwfhi").motion_key("throw_f_hi").fallback_file("ThrowFHi.txt"),
		Variant::new("Low", "game_throwflw").motion_key("throw_f_lw").fallback_file("ThrowFLw.txt"),
	]);
	registry.entry_mut("snake", MoveKind::Fsmash).expansion = variants(false, vec![
		Variant::new("First", "game_attacks4"),
		Variant::new("Second", "game_attacks4s2"),
		Variant::new("Third", "game_attacks4s3"),
	]);
	registry.entry_mut("link", MoveKind::Fsmash).expansion =
		variants(false, vec![Variant::new("First", "game_attacks4"), Variant::new("Second", "game_attacks4s2")]);

	registry.entry_mut("ryu", MoveKind::Jab1).expansion =
		variants(true, vec![Variant::new("Weak", "game_attack11w"), Variant::new("Strong", "game_attack11s")]);
	registry.entry_mut("ryu", MoveKind::Jab2).expansion =
		variants(true, vec![Variant::new("Weak", "game_attack12"), Variant::new("Strong", "game_attack12s")]);
	registry.entry_mut("ryu", MoveKind::Jab3).expansion = variants(true, vec![Variant::new("Weak", "game_attack13")]);
	registry.entry_mut("ken", MoveKind::Jab1).expansion =
		variants(true, vec![Variant::new("Weak", "game_attack11w"), Variant::new("Strong", "game_attack11s")]);
	registry.entry_mut("ken", MoveKind::Jab2).expansion = variants(true, vec![Variant::new("Weak", "game_attack12")]);

	for fighter in ["ryu", "ken"] {
		registry.entry_mut(fighter, MoveKind::Ftilt).expansion = variants(true, weak_strong("game_attacks3", "attack_s3_s"));
		registry.entry_mut(fighter, MoveKind::Utilt).expansion = variants(true, weak_strong("game_attackhi3", "attack_hi3"));
		registry.entry_mut(fighter, MoveKind::Dtilt).expansion = variants(true, weak_strong("game_attacklw3", "attack_lw3"));
	}
}

fn engine_switches(registry: &mut OverrideRegistry) {
	registry.character_mut("brave").suppress_guards = strings(&[PSYCHE_UP_GUARD]);

	registry.entry_mut("murabito", MoveKind::DashAttack).shot = Some(ShotInjection {
		marker: "FLOWERPOT".to_owned(),
		strict_marker: "FIGHTER_MURABITO_GENERATE_ARTICLE_FLOWERPOT".to_owned(),
		hit: HitValues::new(10.0, 59.0, 82.0, 0.0, 45.0),
		default_frame: 14.0,
	});
	registry.entry_mut("shizue", MoveKind::DashAttack).shot = Some(ShotInjection {
		marker: "POT".to_owned(),
		strict_marker: "FIGHTER_SHIZUE_GENERATE_ARTICLE_POT".to_owned(),
		hit: HitValues::new(10.0, 70.0, 85.0, 0.0, 42.0),
		default_frame: 12.0,
	});

	let knuckle = registry.entry_mut("rockman", MoveKind::Dair);
	knuckle.release_markers = strings(&["*FIGHTER_ROCKMAN_GENERATE_ARTICLE_HARDKNUCKLE"]);
	knuckle.frame = Some(FrameRule::Fixed(18.0));

	let melt = registry.entry_mut("pickel", MoveKind::Dsmash);
	melt.release_markers = strings(&["*FIGHTER_PICKEL_GENERATE_ARTICLE_MELT"]);
	melt.fallback_subdir = Some("pickel_melt".to_owned());
	melt.frame = Some(FrameRule::FromFallback(FallbackAnchor {
		file: "AttackLw4.txt".to_owned(),
		needles: strings(&["ArticleModule::generate_article", "*FIGHTER_PICKEL_GENERATE_ARTICLE_MELT"]),
		default: 8.0,
	}));

	registry.entry_mut("murabito", MoveKind::Fair).frame = Some(FrameRule::WhenAnimationZero(9.0));
	registry.entry_mut("shizue", MoveKind::Bair).frame = Some(FrameRule::WhenAnimationZero(12.0));
	registry.entry_mut("murabito", MoveKind::Fsmash).frame = Some(FrameRule::Fixed(20.0));
	for (kind, frame) in [(MoveKind::Fsmash, 17.0), (MoveKind::Usmash, 16.0), (MoveKind::Dsmash, 17.0)] {
		registry.entry_mut("bayonetta", kind).frame = Some(FrameRule::Fixed(frame));
	}
	for (kind, frame) in
		[(MoveKind::Fthrow, 15.0), (MoveKind::Bthrow, 21.0), (MoveKind::Uthrow, 22.0), (MoveKind::Dthrow, 23.0)]
	{
		registry.entry_mut("pikmin", kind).frame = Some(FrameRule::Fixed(frame));
	}

	registry.entry_mut("plizardon", MoveKind::Dthrow).damage = Some(10.0);
	for (fighter, kind) in [("gaogaen", MoveKind::Bthrow), ("tantan", MoveKind::Bthrow), ("plizardon", MoveKind::Dthrow)] {
		registry.entry_mut(fighter, kind).exclude_absolute = true;
	}
}

fn throws(registry: &mut OverrideRegistry) {
	let pichu = registry.character_mut("pichu");
	pichu.absolute_policy = Some(AbsoluteThrowPolicy::MinimumOfPair);
	pichu.regular_policy = Some(RegularThrowPolicy::MinimumOfPair);

	let incineroar = registry.character_mut("gaogaen");
	incineroar.absolute_policy = Some(AbsoluteThrowPolicy::MinimumOfMany);
	incineroar.regular_policy = Some(RegularThrowPolicy::MinimumPerFrameWhen {
		marker: "IS_HEAVY_ATTACK".to_owned(),
	});

	registry.character_mut("demon").regular_policy = Some(RegularThrowPolicy::DropLastFrameWhen {
		marker: "PostureModule::scale".to_owned(),
		min_frames: 3,
	});
	registry.character_mut("ryu").regular_policy = Some(RegularThrowPolicy::Ignore);
	registry.entry_mut("metaknight", MoveKind::Fthrow).regular_policy = Some(RegularThrowPolicy::EarliestOnly);

	const BULLET: &str = "FIGHTER_FOX_GENERATE_ARTICLE_BLASTER_BULLET";
	let table = [
		("mewtwo", MoveKind::Fthrow, "FIGHTER_MEWTWO_GENERATE_ARTICLE_SHADOWBALL", 2.4, "game_shootthrowf", "mewtwo_shadowball", "ShootThrowF.txt"),
		("fox", MoveKind::Bthrow, BULLET, 2.0, "game_flythrowb", "fox_blaster_bullet", "FlyThrowB.txt"),
		("fox", MoveKind::Uthrow, BULLET, 2.0, "game_flythrowhi", "fox_blaster_bullet", "FlyThrowHi.txt"),
		("fox", MoveKind::Dthrow, BULLET, 2.0, "game_flythrowlw", "fox_blaster_bullet", "FlyThrowLw.txt"),
		("falco", MoveKind::Uthrow, BULLET, 4.0, "game_flythrowhi", "falco_blaster_bullet", "FlyThrowHi.txt"),
		("falco", MoveKind::Bthrow, BULLET, 3.0, "game_flythrowb", "falco_blaster_bullet", "FlyThrowB.txt"),
		("falco", MoveKind::Dthrow, BULLET, 2.0, "game_flythrowlw", "falco_blaster_bullet", "FlyThrowLw.txt"),
		("pzenigame", MoveKind::Fthrow, "FIGHTER_PZENIGAME_GENERATE_ARTICLE_WATER", 4.0, "game_clash", "water", "acmd.rs"),
		("demon", MoveKind::Uthrow, "FIGHTER_DEMON_GENERATE_ARTICLE_BLASTER", 12.0, "game_flythrow", "blaster", "acmd.rs"),
		("pfushigisou", MoveKind::Uthrow, "FIGHTER_PFUSHIGISOU_GENERATE_ARTICLE_SEED", 7.0, "game_clash", "seed", "acmd.rs"),
	];
	for (fighter, kind, constant, damage, function, dir, file) in table {
		registry.entry_mut(fighter, kind).articles.push(article(constant, damage, function, dir, file));
	}
}

fn ammo(registry: &mut OverrideRegistry) {
	let kind = |key: &str, name: &str, damage_multiplier: f64, angle_modifier: f64| AmmoKind {
		key: key.to_owned(),
		name: name.to_owned(),
		modifier: VariantModifier {
			damage_multiplier,
			angle_modifier,
		},
	};
	registry.character_mut("pikmin").ammo = Some(AmmoExpansion {
		info_file: "src/pikmin/mod.rs".to_owned(),
		kinds: vec![
			kind("0", "Red", 1.05, 0.0),
			kind("1", "Yellow", 0.94, 8.0),
			kind("2", "Blue", 1.0, 0.0),
			kind("3", "White", 0.75, 0.0),
			kind("_", "Purple", 1.2, 0.0),
		],
		smash_file: "src/pikmin/acmd/smashes.rs".to_owned(),
		aerial_file: "src/pikmin/acmd/aerials.rs".to_owned(),
		throw_file: "src/pikmin/acmd/throws.rs".to_owned(),
		launch_needles: strings(&["WorkModule::on_flag", "*FIGHTER_PIKMIN_STATUS_SMASH_ATTACK_FLAG_SHOOT_PIKMIN"]),
		default_damage: 15.0,
		split_kind: "Blue".to_owned(),
		unloaded_label: "No Pikmin".to_owned(),
		noun: "Pikmin".to_owned(),
	});

	let smashes = [
		(MoveKind::Fsmash, true),
		(MoveKind::Usmash, false),
		(MoveKind::Dsmash, false),
	];
	for (kind, keep_angle) in smashes {
		registry.entry_mut("pikmin", kind).expansion = Some(Expansion::Ammo(AmmoMove::Smash {
			keep_angle,
		}));
	}
	for kind in MoveKind::AERIALS {
		registry.entry_mut("pikmin", kind).expansion = Some(Expansion::Ammo(AmmoMove::Aerial));
	}
	for kind in [MoveKind::Fthrow, MoveKind::Bthrow, MoveKind::Uthrow, MoveKind::Dthrow] {
		registry.entry_mut("pikmin", kind).expansion = Some(Expansion::Ammo(AmmoMove::Throw));
	}
}
