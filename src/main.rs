//! `hdr-frames` command-line tool
//!
//! # Usage
//!
//! ```bash
//! # Analyse every fighter and write the HTML report
//! hdr-frames report --fighters fighters --output output_html
//!
//! # Dump one function
//! hdr-frames analyze fighters/mario/src/acmd/aerials.rs --move fair
//!
//! # Evaluate an expression
//! hdr-frames eval "BASE * 1.2" --var BASE=10
//! ```

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use hdr_frames::prelude::*;

#[derive(Parser)]
#[command(name = "hdr-frames")]
#[command(version)]
#[command(about = "Frame data extraction and HTML report for fighter scripts", long_about = None)]
struct Cli {
	/// Show debug output
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Commands,
}

/// Paths shared by the data-loading commands
#[derive(Args)]
struct PathArgs {
	/// Configuration file (default: hdr-frames.toml when present)
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Fighter script tree
	#[arg(long, value_name = "DIR")]
	fighters: Option<PathBuf>,

	/// Decompiled fallback dump
	#[arg(long, value_name = "DIR")]
	fallback: Option<PathBuf>,

	/// Animation metadata tree
	#[arg(long, value_name = "DIR")]
	animations: Option<PathBuf>,

	/// Mod root holding motion lists
	#[arg(long, value_name = "DIR")]
	hdr_root: Option<PathBuf>,

	/// Fighter parameter XML
	#[arg(long, value_name = "FILE")]
	fighter_param: Option<PathBuf>,

	/// Fighter parameter XML used when the first is missing
	#[arg(long, value_name = "FILE")]
	fighter_param_fallback: Option<PathBuf>,

	/// Report directory
	#[arg(short, long, value_name = "DIR")]
	output: Option<PathBuf>,
}

impl PathArgs {
	fn settings(&self) -> Result<Settings> {
		let overrides = SettingsOverrides {
			fighters: self.fighters.clone(),
			fallback: self.fallback.clone(),
			animations: self.animations.clone(),
			hdr_root: self.hdr_root.clone(),
			fighter_param: self.fighter_param.clone(),
			fighter_param_fallback: self.fighter_param_fallback.clone(),
			output: self.output.clone(),
		};
		Settings::load(self.config.as_deref(), &overrides).context("Failed to load settings")
	}
}

#[derive(Subcommand)]
enum Commands {
	/// Analyse every fighter and write the HTML report
	Report {
		#[command(flatten)]
		paths: PathArgs,

		/// Only analyse these fighter folders
		#[arg(long = "character", value_name = "NAME")]
		characters: Vec<String>,
	},

	/// Analyse one function of one script file
	Analyze {
		/// Script file
		#[arg(value_name = "FILE")]
		file: PathBuf,

		/// Move to analyse as
		#[arg(short, long = "move", value_name = "MOVE")]
		kind: MoveKind,

		/// Function name (default: the move's `game_*` function)
		#[arg(short, long)]
		function: Option<String>,

		/// Fighter folder whose overrides apply
		#[arg(long, value_name = "NAME", default_value = "")]
		character: String,

		/// Print JSON instead of text
		#[arg(long)]
		json: bool,
	},

	/// Evaluate an expression with the resolver
	Eval {
		/// Expression
		#[arg(value_name = "EXPR")]
		expr: String,

		/// Variable definition, repeatable
		#[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
		vars: Vec<(String, String)>,
	},
}

fn parse_var(arg: &str) -> Result<(String, String), String> {
	let (name, value) = arg.split_once('=').ok_or_else(|| format!("expected NAME=VALUE, got `{arg}`"))?;
	let name = name.trim();
	if name.is_empty() {
		return Err(format!("empty variable name in `{arg}`"));
	}
	Ok((name.to_owned(), value.trim().to_owned()))
}

fn report(paths: &PathArgs, only: &[String]) -> Result<()> {
	let settings = paths.settings()?;
	settings.validate().context("Invalid settings")?;

	let diagnostics = LogDiagnostics;
	let registry = OverrideRegistry::hdr();
	let sources = FsSourceTree::new(&settings.fighters, FallbackResolver::new(&settings.fallback), &diagnostics);

	let characters = if only.is_empty() { sources.characters() } else { only.to_vec() };
	if characters.is_empty() {
		bail!("No fighter folders found in {}", settings.fighters.display());
	}
	let data = GameData::load(
		&settings,
		characters.iter().map(|character| registry.data_name(character)),
		&diagnostics,
	);

	let orchestrator = Orchestrator::new(&sources, &data, &registry, &diagnostics);
	let report = orchestrator.run_characters(characters.iter().map(String::as_str));

	let rows: usize = report.results.values().map(Vec::len).sum();
	let missing: usize = report.not_found.values().map(Vec::len).sum();
	log::info!("Analysed {} fighters: {rows} rows, {missing} not found", characters.len());

	let written = ReportWriter::new(&settings.output)
		.write(&report, data.all_stats())
		.with_context(|| format!("Failed to write report to {}", settings.output.display()))?;
	println!("Wrote {} pages to {}", written.len(), settings.output.display());
	Ok(())
}

fn analyze(file: &Path, kind: MoveKind, function: Option<&str>, character: &str, json: bool) -> Result<()> {
	let source = fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
	let function = function.unwrap_or(kind.function_name());
	let profile = OverrideRegistry::hdr().profile(character, kind);

	let Some(analysis) = analyze_function(&source, function, &profile) else {
		bail!("No usable {kind} data in `{function}` of {}", file.display());
	};

	if json {
		let value = serde_json::json!({
			"function": function,
			"move": kind.key(),
			"hit": analysis.hit,
			"animation_frame": analysis.animation_frame,
			"active_frame": analysis.active_frame(),
			"release_frame": analysis.release_frame,
			"throw_total": analysis.throw_total,
			"calls": analysis.calls,
		});
		println!("{}", serde_json::to_string_pretty(&value)?);
		return Ok(());
	}

	let number = |value: Option<f64>| value.map_or_else(|| "N/A".to_owned(), |value| value.to_string());
	println!("{function} as {}", kind.display_name());
	println!(
		"  selected: damage {} angle {} kbg {} fkb {} bkb {}",
		number(analysis.hit.damage),
		number(analysis.hit.angle),
		number(analysis.hit.knockback_growth),
		number(analysis.hit.fixed_knockback),
		number(analysis.hit.base_knockback)
	);
	println!(
		"  frame: animation {} real {} active {}",
		analysis.animation_frame,
		analysis.real_frame,
		analysis.active_frame()
	);
	if let Some(release) = analysis.release_frame {
		println!("  release: {release}");
	}
	if let Some(total) = analysis.throw_total {
		println!("  throw total: {total}");
	}
	for event in &analysis.rate_events {
		println!("  rate @ {}: {:?}", event.frame, event.change);
	}
	for call in &analysis.calls {
		println!("  {:?} @ {}: damage {} ({})", call.kind, call.frame, number(call.hit.damage), call.raw_params);
	}
	Ok(())
}

fn eval(expr: &str, vars: Vec<(String, String)>) -> Result<()> {
	let mut variables = VariableTable::new();
	for (name, value) in vars {
		variables.insert(name, value);
	}
	let value = Resolver::new(&variables)
		.try_resolve(expr)
		.with_context(|| format!("Cannot evaluate `{expr}`"))?;
	println!("{value}");
	Ok(())
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	let filter = if cli.verbose { "debug" } else { "info" };
	env_logger::Builder::from_env(Env::default().default_filter_or(filter)).init();

	match cli.command {
		Commands::Report {
			paths,
			characters,
		} => report(&paths, &characters),
		Commands::Analyze {
			file,
			kind,
			function,
			character,
			json,
		} => analyze(&file, kind, function.as_deref(), &character, json),
		Commands::Eval {
			expr,
			vars,
		} => eval(&expr, vars),
	}
}
