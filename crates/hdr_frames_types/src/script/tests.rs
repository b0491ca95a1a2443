//! Scenario tests over complete function bodies

use super::*;

fn attack(damage: &str, angle: u32, kbg: u32, fkb: u32, bkb: u32) -> String {
	format!(
		"ATTACK(agent, 0, 0, Hash40::new(\"top\"), {damage}, {angle}, {kbg}, {fkb}, {bkb}, 5.0, 0.0, 8.0, 6.0, None, None, None, 1.0, 1.0, *ATTACK_SETOFF_KIND_ON, *ATTACK_LR_CHECK_F, false, 0, 0.0, 0, false, false, false, false, true, *COLLISION_SITUATION_MASK_GA, *COLLISION_CATEGORY_MASK_ALL, *COLLISION_PART_MASK_ALL, false, Hash40::new(\"collision_attr_normal\"), *ATTACK_SOUND_LEVEL_M, *COLLISION_SOUND_ATTR_PUNCH, *ATTACK_REGION_PUNCH);"
	)
}

fn wrap(name: &str, body: &str) -> String {
	format!(
		"unsafe extern \"C\" fn {name}(agent: &mut L2CAgentBase) {{\n    let lua_state = agent.lua_state_agent;\n    let boma = agent.boma();\n{body}\n}}\n"
	)
}

#[test]
fn test_single_hit() {
	let body = format!(
		"    frame(lua_state, 5.0);\n    if is_excute(agent) {{\n        {}\n    }}\n    wait(lua_state, 3.0);\n    if is_excute(agent) {{\n        AttackModule::clear_all(boma);\n    }}",
		attack("12.0", 45, 80, 0, 30)
	);
	let source = wrap("game_attacks3", &body);
	let analysis = analyze_function(&source, "game_attacks3", &MoveProfile::default()).unwrap();

	assert_eq!(analysis.hit, HitValues::new(12.0, 45.0, 80.0, 0.0, 30.0));
	assert_eq!(analysis.active_frame(), 5);
	assert_eq!(analysis.calls.len(), 1);
	assert!(analysis.rate_events.is_empty());
	assert_eq!(analysis.first_actionable_frame(Some(34.0)), Some(34));
	assert_eq!(analysis.first_actionable_frame(None), None);
}

#[test]
fn test_loop_hits_share_pre_loop_frame() {
	let body = format!(
		"    frame(lua_state, 1.0);\n    for _ in 0..3 {{\n        wait(lua_state, 2.0);\n        {}\n    }}\n    wait(lua_state, 1.0);\n    if is_excute(agent) {{\n        {}\n    }}",
		attack("4.0", 45, 50, 0, 60),
		attack("6.0", 361, 120, 0, 50)
	);
	let analysis = analyze_body(&body, &MoveProfile::default()).unwrap();

	let frames: Vec<f64> = analysis.calls.iter().map(|c| c.frame).collect();
	assert_eq!(frames, vec![1.0, 8.0]);
	assert_eq!(analysis.hit.damage, Some(6.0));
	assert_eq!(analysis.active_frame(), 1);
}

#[test]
fn test_loop_multiplies_throw_damage() {
	let body = format!(
		"    frame(lua_state, 1.0);\n    for _ in 0..3 {{\n        wait(lua_state, 2.0);\n        {}\n    }}",
		attack("4.0", 45, 50, 0, 60)
	);
	let analysis = analyze_body(&body, &MoveProfile::new(MoveClass::Throw)).unwrap();

	assert_eq!(analysis.calls[0].frame, 1.0);
	assert_eq!(analysis.throw_total, Some(12.0));
	assert_eq!(analysis.hit.damage, Some(12.0));
	assert_eq!(analysis.active_frame(), 1);
}

#[test]
fn test_throw_release_and_total() {
	let body = "    if is_excute(agent) {
        ATTACK_ABS(agent, *FIGHTER_ATTACK_ABSOLUTE_KIND_THROW, 0, 9.0, 45, 60, 0, 70, 0.0, 1.0, *ATTACK_LR_CHECK_F, 0.0, true, Hash40::new(\"collision_attr_normal\"), *ATTACK_SOUND_LEVEL_S, *COLLISION_SOUND_ATTR_NONE, *ATTACK_REGION_THROW);
    }
    frame(lua_state, 14.0);
    if is_excute(agent) {
        "
	.to_owned() + &attack("4.0", 361, 100, 0, 30)
		+ "
    }
    frame(lua_state, 16.0);
    if is_excute(agent) {
        ATK_HIT_ABS(agent, *FIGHTER_ATTACK_ABSOLUTE_KIND_THROW, Hash40::new(\"throw\"), WorkModule::get_int64(boma, *FIGHTER_STATUS_THROW_WORK_INT_TARGET_OBJECT), WorkModule::get_int64(boma, *FIGHTER_STATUS_THROW_WORK_INT_TARGET_HIT_GROUP), WorkModule::get_int64(boma, *FIGHTER_STATUS_THROW_WORK_INT_TARGET_HIT_NO));
    }";
	let analysis = analyze_body(&body, &MoveProfile::new(MoveClass::Throw)).unwrap();

	assert_eq!(analysis.release_frame, Some(16.0));
	assert_eq!(analysis.active_frame(), 16);
	assert_eq!(analysis.throw_total, Some(13.0));
	assert_eq!(analysis.hit, HitValues::new(13.0, 45.0, 60.0, 0.0, 70.0));
}

#[test]
fn test_rate_change_in_body() {
	let body = format!(
		"    FT_MOTION_RATE(agent, 0.5);\n    frame(lua_state, 10.0);\n    if is_excute(agent) {{\n        {}\n    }}",
		attack("9.0", 70, 90, 0, 40)
	);
	let analysis = analyze_body(&body, &MoveProfile::default()).unwrap();

	assert_eq!(analysis.rate_events.len(), 1);
	assert_eq!(analysis.real_frame, 6.0);
	assert_eq!(analysis.active_frame(), 6);
	assert_eq!(analysis.first_actionable_frame(Some(30.0)), Some(16));
}

#[test]
fn test_desired_rate_span() {
	let body = format!(
		"    frame(lua_state, 4.0);\n    FT_DESIRED_RATE(agent, 6.0, 3.0);\n    frame(lua_state, 10.0);\n    FT_MOTION_RATE(agent, 1.0);\n    if is_excute(agent) {{\n        {}\n    }}",
		attack("7.0", 361, 100, 0, 20)
	);
	let analysis = analyze_body(&body, &MoveProfile::default()).unwrap();
	assert_eq!(analysis.real_frame, 7.0);
}

#[test]
fn test_variables_and_placeholders() {
	let body = format!(
		"    let dmg = 6.0;\n    let mul = 1.5;\n    frame(lua_state, 3.0);\n    if is_excute(agent) {{\n        {}\n    }}",
		attack("dmg * mul", 45, 100, 0, 35)
	);
	let analysis = analyze_body(&body, &MoveProfile::default()).unwrap();
	assert_eq!(analysis.hit.damage, Some(9.0));

	let body = format!(
		"    frame(lua_state, 3.0);\n    if is_excute(agent) {{\n        {}\n    }}",
		attack("8.0 * p.dmg", 40, 100, 0, 35).replace("40,", "40 + p.angle,")
	);
	let mut profile = MoveProfile::default();
	profile.variant = Some(VariantModifier {
		damage_multiplier: 1.5,
		angle_modifier: 8.0,
	});
	let analysis = analyze_body(&body, &profile).unwrap();
	assert_eq!(analysis.hit.damage, Some(12.0));
	assert_eq!(analysis.hit.angle, Some(48.0));
}

#[test]
fn test_suppressed_guard_block() {
	let body = format!(
		"    frame(lua_state, 8.0);\n    if VarModule::is_flag(agent.battle_object, vars::brave::instance::PSYCHE_UP_ACTIVE) {{\n        if is_excute(agent) {{\n            {}\n        }}\n    }} else {{\n        if is_excute(agent) {{\n            {}\n        }}\n    }}",
		attack("20.0", 361, 90, 0, 60),
		attack("14.0", 361, 90, 0, 60)
	);
	let unguarded = analyze_body(&body, &MoveProfile::default()).unwrap();
	assert_eq!(unguarded.hit.damage, Some(20.0));

	let mut profile = MoveProfile::default();
	profile.suppress_guards =
		vec!["if VarModule::is_flag(agent.battle_object, vars::brave::instance::PSYCHE_UP_ACTIVE)".into()];
	let guarded = analyze_body(&body, &profile).unwrap();
	assert_eq!(guarded.hit.damage, Some(14.0));
	assert_eq!(guarded.calls.len(), 1);
}

#[test]
fn test_grab_frame() {
	let body = "    frame(lua_state, 6.0);
    if is_excute(agent) {
        GrabModule::set_rebound(boma, true);
    }
    frame(lua_state, 7.0);
    if is_excute(agent) {
        CATCH(agent, 0, Hash40::new(\"top\"), 3.3, 0.0, 8.0, 4.0, Some(0.0), Some(8.0), Some(10.0), *FIGHTER_STATUS_KIND_CAPTURE_PULLED, *COLLISION_SITUATION_MASK_GA);
    }";
	let analysis = analyze_body(body, &MoveProfile::new(MoveClass::Grab)).unwrap();
	assert_eq!(analysis.active_frame(), 7);
	assert_eq!(analysis.hit, HitValues::default());
	assert_eq!(analysis.first_actionable_frame(Some(30.0)), None);

	assert!(analyze_body(body, &MoveProfile::default()).is_none());
}

#[test]
fn test_shot_injection() {
	let mut profile = MoveProfile::default();
	profile.shot = Some(ShotInjection {
		marker: "FLOWERPOT".into(),
		strict_marker: "FIGHTER_MURABITO_GENERATE_ARTICLE_FLOWERPOT".into(),
		hit: HitValues::new(10.0, 59.0, 82.0, 0.0, 45.0),
		default_frame: 14.0,
	});

	let body = "    frame(lua_state, 11.0);
    ArticleModule::shoot(boma, *FIGHTER_MURABITO_GENERATE_ARTICLE_FLOWERPOT, ArticleOperationTarget(*ARTICLE_OPE_TARGET_ALL), false);";
	let analysis = analyze_body(body, &profile).unwrap();
	assert_eq!(analysis.active_frame(), 11);
	assert_eq!(analysis.hit.base_knockback, Some(45.0));

	let analysis = analyze_body("    frame(lua_state, 3.0);", &profile).unwrap();
	assert_eq!(analysis.active_frame(), 14);
}

#[test]
fn test_release_marker_on_article_spawn() {
	let body = format!(
		"    frame(lua_state, 3.0);\n    if is_excute(agent) {{\n        {}\n    }}\n    frame(lua_state, 16.0);\n    if is_excute(agent) {{\n        ArticleModule::generate_article(boma, *FIGHTER_ROCKMAN_GENERATE_ARTICLE_HARDKNUCKLE, false, -1);\n    }}",
		attack("5.0", 270, 80, 0, 20)
	);
	let plain = analyze_body(&body, &MoveProfile::default()).unwrap();
	assert_eq!(plain.active_frame(), 3);

	let mut profile = MoveProfile::default();
	profile.release_markers = vec!["*FIGHTER_ROCKMAN_GENERATE_ARTICLE_HARDKNUCKLE".into()];
	let marked = analyze_body(&body, &profile).unwrap();
	assert_eq!(marked.active_frame(), 16);
}

#[test]
fn test_overrides() {
	let body = format!("    frame(lua_state, 0.0);\n    if is_excute(agent) {{\n        {}\n    }}", attack("3.0", 90, 100, 0, 40));

	let mut profile = MoveProfile::default();
	profile.frame_override = Some(FrameOverride::WhenAnimationZero(9.0));
	profile.damage_override = Some(10.0);
	let analysis = analyze_body(&body, &profile).unwrap();
	assert_eq!(analysis.active_frame(), 9);
	assert_eq!(analysis.hit.damage, Some(10.0));

	profile.frame_override = Some(FrameOverride::Fixed(17.0));
	let analysis = analyze_body(&body.replace("0.0);\n    if", "4.0);\n    if"), &profile).unwrap();
	assert_eq!(analysis.active_frame(), 17);
}

#[test]
fn test_article_damage_in_throw_total() {
	let mut profile = MoveProfile::new(MoveClass::Throw);
	profile.articles = vec![ArticleDamage {
		article: "FIGHTER_MEWTWO_GENERATE_ARTICLE_SHADOWBALL".into(),
		damage: 2.4,
	}];
	let body = "    frame(lua_state, 10.0);
    if is_excute(agent) {
        ATTACK_ABS(agent, *FIGHTER_ATTACK_ABSOLUTE_KIND_THROW, 0, 9.0, 361, 40, 0, 75, 0.0, 1.0, *ATTACK_LR_CHECK_F, 0.0, true, Hash40::new(\"collision_attr_normal\"), *ATTACK_SOUND_LEVEL_S, *COLLISION_SOUND_ATTR_NONE, *ATTACK_REGION_THROW);
    }
    for _ in 0..3 {
        ArticleModule::generate_article(boma, *FIGHTER_MEWTWO_GENERATE_ARTICLE_SHADOWBALL, false, -1);
        wait(lua_state, 4.0);
    }";
	let analysis = analyze_body(body, &profile).unwrap();
	let total = analysis.throw_total.unwrap();
	assert!((total - 16.2).abs() < 1e-9);
	assert_eq!(analysis.release_frame, None);
	assert_eq!(analysis.active_frame(), 10);
}

#[test]
fn test_short_calls_are_dropped() {
	let body = "    frame(lua_state, 2.0);
    if is_excute(agent) {
        ATTACK(agent, 0, 0, Hash40::new(\"top\"), 5.0);
    }";
	assert!(analyze_body(body, &MoveProfile::default()).is_none());
}

#[test]
fn test_commented_calls_are_ignored() {
	let body = format!(
		"    frame(lua_state, 2.0);\n    // {}\n    frame(lua_state, 6.0);\n    if is_excute(agent) {{\n        {}\n    }}",
		attack("30.0", 45, 100, 0, 50),
		attack("8.0", 45, 100, 0, 50)
	);
	let analysis = analyze_body(&body, &MoveProfile::default()).unwrap();
	assert_eq!(analysis.hit.damage, Some(8.0));
	assert_eq!(analysis.active_frame(), 6);
}
