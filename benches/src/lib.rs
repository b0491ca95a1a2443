//! Benchmark helper utilities for hdr-frames
//!
//! Generates synthetic move scripts shaped like the ones found in fighter
//! `acmd` files: variable definitions, frame markers, rate changes, loops and
//! attack calls inside `is_excute` blocks.

use std::fmt::Write;

/// One `ATTACK` call with the given damage expression
pub fn attack_line(damage: &str, angle: u32) -> String {
	format!(
		"ATTACK(agent, 0, 0, Hash40::new(\"top\"), {damage}, {angle}, 80, 0, 40, 5.0, 0.0, 8.0, 6.0, None, None, None, 1.0, 1.0, *ATTACK_SETOFF_KIND_ON, *ATTACK_LR_CHECK_F, false, 0, 0.0, 0, false, false, false, false, true, *COLLISION_SITUATION_MASK_GA, *COLLISION_CATEGORY_MASK_ALL, *COLLISION_PART_MASK_ALL, false, Hash40::new(\"collision_attr_normal\"), *ATTACK_SOUND_LEVEL_M, *COLLISION_SOUND_ATTR_PUNCH, *ATTACK_REGION_PUNCH);"
	)
}

/// A function body with `hits` attack windows.
///
/// Every window advances the frame cursor, changes the playback rate and
/// wraps a multi-hit section in a `for` loop.
pub fn generate_body(hits: usize) -> String {
	let mut body = String::new();
	let _ = writeln!(body, "    let lua_state = agent.lua_state_agent;");
	let _ = writeln!(body, "    let base_damage = 4.0;");
	let _ = writeln!(body, "    let scale = (base_damage * 1.5) / 2.0;");
	for hit in 0..hits {
		let frame = 3 + hit * 4;
		let _ = writeln!(body, "    frame(lua_state, {frame}.0);");
		let _ = writeln!(body, "    FT_MOTION_RATE(agent, 0.{});", 5 + hit % 4);
		let _ = writeln!(body, "    if is_excute(agent) {{");
		let _ = writeln!(body, "        {}", attack_line("base_damage + scale", 45 + hit as u32));
		let _ = writeln!(body, "    }}");
		let _ = writeln!(body, "    wait(lua_state, 1.0);");
		let _ = writeln!(body, "    for _ in 0..3 {{");
		let _ = writeln!(body, "        wait(lua_state, 2.0);");
		let _ = writeln!(body, "        if is_excute(agent) {{");
		let _ = writeln!(body, "            AttackModule::clear_all(agent.module_accessor);");
		let _ = writeln!(body, "        }}");
		let _ = writeln!(body, "    }}");
	}
	body
}

/// A script file holding `functions` copies of the generated body, the last
/// one named `target`
pub fn generate_source(functions: usize, hits: usize, target: &str) -> String {
	let body = generate_body(hits);
	let mut source = String::new();
	for index in 0..functions {
		let name = if index + 1 == functions { target.to_owned() } else { format!("game_filler{index}") };
		let _ = writeln!(source, "unsafe extern \"C\" fn {name}(agent: &mut L2CAgentBase) {{\n{body}}}\n");
	}
	source
}

/// Nested arithmetic over named constants, `depth` levels deep
pub fn generate_expression(depth: usize) -> String {
	let mut expr = "BASE".to_owned();
	for level in 0..depth {
		expr = format!("({expr} * FACTOR_{} + 1.0)", level % 4);
	}
	expr
}
