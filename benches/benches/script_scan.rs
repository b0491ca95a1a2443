//! Benchmark suite for the script engine
//!
//! Measures expression resolution and call-site scanning over synthetic
//! scripts of growing size.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hdr_frames_benches::{generate_body, generate_expression, generate_source};
use hdr_frames_types::script::{
	MoveProfile, Resolver, VariableTable, analyze_function, locate_function, resolve, scan,
};

fn variables() -> VariableTable {
	let mut vars = VariableTable::new();
	vars.insert("BASE", "12.0");
	for level in 0..4 {
		vars.insert(format!("FACTOR_{level}"), format!("BASE / {}.0", level + 8));
	}
	vars
}

/// Resolution of nested expressions
fn bench_resolve(c: &mut Criterion) {
	let mut group = c.benchmark_group("resolve");
	let vars = variables();

	for depth in [1, 4, 16] {
		let expr = generate_expression(depth);
		group.bench_with_input(BenchmarkId::new("nested", depth), &expr, |b, expr| {
			b.iter(|| black_box(resolve(black_box(expr), &vars)));
		});
	}

	let resolver = Resolver::new(&vars);
	group.bench_function("literal", |b| {
		b.iter(|| black_box(resolver.resolve(black_box("14.5"))));
	});
	group.bench_function("unresolvable", |b| {
		b.iter(|| black_box(resolver.resolve(black_box("WorkModule::get_float(agent, 3.0) * 2.0"))));
	});

	group.finish();
}

/// Line scanning of a single body
fn bench_scan(c: &mut Criterion) {
	let mut group = c.benchmark_group("scan");
	let profile = MoveProfile::default();

	for hits in [1, 8, 32] {
		let body = generate_body(hits);
		let resolver = Resolver::new(&VariableTable::from_body(&body));
		group.throughput(Throughput::Elements(body.lines().count() as u64));
		group.bench_with_input(BenchmarkId::new("body", hits), &body, |b, body| {
			b.iter(|| black_box(scan(black_box(body), &profile, &resolver)));
		});
	}

	group.finish();
}

/// Function lookup plus the full analysis pipeline
fn bench_analyze(c: &mut Criterion) {
	let mut group = c.benchmark_group("analyze");
	let profile = MoveProfile::default();

	for functions in [4, 32] {
		let source = generate_source(functions, 4, "game_attackairn");
		group.throughput(Throughput::Bytes(source.len() as u64));
		group.bench_with_input(BenchmarkId::new("locate", functions), &source, |b, source| {
			b.iter(|| black_box(locate_function(black_box(source), "game_attackairn")));
		});
		group.bench_with_input(BenchmarkId::new("function", functions), &source, |b, source| {
			b.iter(|| black_box(analyze_function(black_box(source), "game_attackairn", &profile)));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_resolve, bench_scan, bench_analyze);
criterion_main!(benches);
