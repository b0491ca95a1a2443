//! End-to-end runs over a fighter tree on disk

use std::fs;

use hdr_frames::prelude::*;

mod fixtures;

#[test_log::test]
fn test_report_from_disk() {
	let dir = tempfile::tempdir().unwrap();
	let settings = fixtures::fighter_tree(dir.path());
	settings.validate().unwrap();

	let diagnostics = CollectingDiagnostics::new();
	let registry = OverrideRegistry::hdr();
	let sources = FsSourceTree::new(&settings.fighters, FallbackResolver::new(&settings.fallback), &diagnostics);
	let characters = sources.characters();
	assert_eq!(characters, ["luigi", "mario"]);

	let data = GameData::load(&settings, characters.iter().map(|c| registry.data_name(c)), &diagnostics);
	let report = Orchestrator::new(&sources, &data, &registry, &diagnostics).run();

	let nair = report.find(MoveKind::Nair, "Mario").unwrap();
	assert_eq!(nair.active_frame, 3);
	assert_eq!(nair.first_actionable_frame, Some(39));
	assert_eq!(nair.landing_lag, 6);

	let jab = report.find(MoveKind::Jab1, "Mario").unwrap();
	assert_eq!(jab.damage, Some(MarkedValue::plain(2.2)));
	assert_eq!(jab.first_actionable_frame, Some(17));

	let ftilt = report.find(MoveKind::Ftilt, "Luigi").unwrap();
	assert_eq!(ftilt.active_frame, 6);
	assert_eq!(report.from_fallback(MoveKind::Ftilt), ["Luigi".to_owned()]);
	assert!(report.missing(MoveKind::Ftilt).contains(&"Mario".to_owned()));
	assert!(diagnostics.contains("Processing mario"));

	let written = ReportWriter::new(&settings.output).write(&report, data.all_stats()).unwrap();
	assert_eq!(written.len(), 9);

	let aerials = fs::read_to_string(settings.output.join("aerials_attacks.html")).unwrap();
	// 8 * 0.55 + 2 - 6 = 0.4
	assert!(aerials.contains("<td class=\"shield-advantage-neutral\">0</td>"));

	let tilts = fs::read_to_string(settings.output.join("tilts_attacks.html")).unwrap();
	assert!(tilts.contains("Characters Found in Fallback Location (1)"));

	let stats = fs::read_to_string(settings.output.join("fighter_stats.html")).unwrap();
	assert!(stats.contains("<td>Luigi</td>"));
	assert!(stats.contains("<td class=\"value\">1.155</td>"));
}

#[test]
fn test_settings_file_and_overrides() {
	let dir = tempfile::tempdir().unwrap();
	let config = dir.path().join("hdr-frames.toml");
	fs::write(&config, "fighters = \"mods/fighters\"\noutput = \"site\"\n").unwrap();

	let overrides = SettingsOverrides {
		output: Some(dir.path().join("public")),
		..SettingsOverrides::default()
	};
	let settings = Settings::load(Some(config.as_path()), &overrides).unwrap();
	assert_eq!(settings.fighters, std::path::PathBuf::from("mods/fighters"));
	assert_eq!(settings.output, dir.path().join("public"));
	assert_eq!(settings.animations, Settings::default().animations);
	assert!(settings.validate().is_err());
}

#[test]
fn test_skipped_and_missing_folders() {
	let dir = tempfile::tempdir().unwrap();
	let settings = fixtures::fighter_tree(dir.path());
	fixtures::write(dir.path(), "fighters/common/src/acmd/ground.rs", &fixtures::function("game_attack11", 1, "1.0", 0));

	let diagnostics = CollectingDiagnostics::new();
	let registry = OverrideRegistry::hdr();
	let sources = FsSourceTree::new(&settings.fighters, FallbackResolver::new(&settings.fallback), &diagnostics);
	let data = GameData::default();
	let report = Orchestrator::new(&sources, &data, &registry, &diagnostics).run();

	assert!(report.rows(MoveKind::Jab1).iter().all(|row| row.character != "common"));
	assert!(report.missing(MoveKind::Jab1).contains(&"Luigi".to_owned()));
	assert!(diagnostics.contains("Skipping common"));
}
