//! Injected diagnostic sink.
//!
//! Readers and the orchestrator never print. They report through a
//! [`Diagnostics`] value handed to them by the caller: [`LogDiagnostics`]
//! forwards to the `log` facade, [`CollectingDiagnostics`] keeps everything
//! in memory so tests can assert on it.

use std::fmt;
use std::sync::Mutex;

/// Importance of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
	/// Fine-grained tracing of lookups
	Debug,
	/// Notable but expected events, such as a fallback hit
	Info,
	/// Data that was skipped or could not be read
	Warning,
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Debug => "debug",
			Self::Info => "info",
			Self::Warning => "warning",
		})
	}
}

/// One recorded diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	/// Importance
	pub severity: Severity,
	/// Rendered message
	pub message: String,
}

/// Receiver of diagnostics
pub trait Diagnostics {
	/// Records one message
	fn report(&self, severity: Severity, message: fmt::Arguments<'_>);

	/// Records a [`Severity::Debug`] message
	fn debug(&self, message: fmt::Arguments<'_>) {
		self.report(Severity::Debug, message);
	}

	/// Records a [`Severity::Info`] message
	fn info(&self, message: fmt::Arguments<'_>) {
		self.report(Severity::Info, message);
	}

	/// Records a [`Severity::Warning`] message
	fn warn(&self, message: fmt::Arguments<'_>) {
		self.report(Severity::Warning, message);
	}
}

/// Forwards diagnostics to the `log` macros
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
	fn report(&self, severity: Severity, message: fmt::Arguments<'_>) {
		match severity {
			Severity::Debug => log::debug!("{message}"),
			Severity::Info => log::info!("{message}"),
			Severity::Warning => log::warn!("{message}"),
		}
	}
}

/// Keeps diagnostics in memory
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
	entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingDiagnostics {
	/// Creates an empty collector
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of everything recorded so far
	pub fn entries(&self) -> Vec<Diagnostic> {
		self.entries.lock().map(|entries| entries.clone()).unwrap_or_default()
	}

	/// Messages at or above `severity`
	pub fn messages_at_least(&self, severity: Severity) -> Vec<String> {
		self.entries()
			.into_iter()
			.filter(|entry| entry.severity >= severity)
			.map(|entry| entry.message)
			.collect()
	}

	/// Returns `true` if any recorded message contains `needle`
	pub fn contains(&self, needle: &str) -> bool {
		self.entries().iter().any(|entry| entry.message.contains(needle))
	}
}

impl Diagnostics for CollectingDiagnostics {
	fn report(&self, severity: Severity, message: fmt::Arguments<'_>) {
		if let Ok(mut entries) = self.entries.lock() {
			entries.push(Diagnostic {
				severity,
				message: message.to_string(),
			});
		}
	}
}
