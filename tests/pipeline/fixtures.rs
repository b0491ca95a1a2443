use std::{fs, path::Path};

use hdr_frames::prelude::Settings;

pub(super) fn write(root: &Path, relative: &str, text: &str) {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).unwrap();
	}
	fs::write(path, text).unwrap();
}

pub(super) fn attack(damage: &str, angle: u32) -> String {
	format!(
		"ATTACK(agent, 0, 0, Hash40::new(\"top\"), {damage}, {angle}, 80, 0, 40, 5.0, 0.0, 8.0, 6.0, None, None, None, 1.0, 1.0, *ATTACK_SETOFF_KIND_ON, *ATTACK_LR_CHECK_F, false, 0, 0.0, 0, false, false, false, false, true, *COLLISION_SITUATION_MASK_GA, *COLLISION_CATEGORY_MASK_ALL, *COLLISION_PART_MASK_ALL, false, Hash40::new(\"collision_attr_normal\"), *ATTACK_SOUND_LEVEL_M, *COLLISION_SOUND_ATTR_PUNCH, *ATTACK_REGION_PUNCH);"
	)
}

/// A script function hitting once at `frame`
pub(super) fn function(name: &str, frame: u32, damage: &str, angle: u32) -> String {
	format!(
		"unsafe extern \"C\" fn {name}(agent: &mut L2CAgentBase) {{\n    let lua_state = agent.lua_state_agent;\n    frame(lua_state, {frame}.0);\n    if is_excute(agent) {{\n        {}\n    }}\n}}\n",
		attack(damage, angle)
	)
}

const FIGHTER_PARAM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<struct>
  <list hash="fighter_param_table">
    <!-- MARIO -->
    <struct index="0">
      <float hash="walk_speed_max">1.155</float>
      <float hash="weight">98</float>
      <int hash="jump_squat_frame">3</int>
      <float hash="landing_attack_air_frame_n">6</float>
    </struct>
    <!-- LUIGI -->
    <struct index="1">
      <float hash="weight">97</float>
    </struct>
  </list>
</struct>
"#;

const MARIO_MOTIONS: &str = r#"
list:
  attack_11:
    game_script: game_attack11
    animations:
      - name: c00attack11.nuanmb
    extra:
      cancel_frame: 17
  attack_air_n:
    game_script: game_attackairn
    animations:
      - name: c00attackairn.nuanmb
    extra:
      cancel_frame: 0
"#;

/// Mario with a jab and a neutral air in the mod tree, Luigi with a forward
/// tilt only in the dumped scripts, and the data files both need.
pub(super) fn fighter_tree(root: &Path) -> Settings {
	write(root, "fighters/mario/src/acmd/ground.rs", &function("game_attack11", 2, "2.2", 361));
	write(root, "fighters/mario/src/acmd/aerials.rs", &function("game_attackairn", 3, "8.0", 361));
	write(root, "fighters/luigi/src/acmd/ground.rs", "// nothing here yet\n");
	write(root, "dump/lua2cpp_luigi/luigi/AttackS3.txt", &function("game_attacks3", 6, "9.0", 45));

	write(root, "animations/mario/body/motion_list.yml", MARIO_MOTIONS);
	write(root, "animations/mario/body/c00attackairn.json", r#"{"final_frame_index": 39}"#);
	write(root, "fighter_param.prcxml", FIGHTER_PARAM);

	Settings {
		fighters: root.join("fighters"),
		fallback: root.join("dump"),
		animations: root.join("animations"),
		hdr_root: root.join("hdr"),
		fighter_param: Some(root.join("fighter_param.prcxml")),
		fighter_param_fallback: None,
		output: root.join("output_html"),
	}
}
