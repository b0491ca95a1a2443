//! Error types for report generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when writing the HTML report
#[derive(Debug, Error)]
pub enum ReportError {
	/// Output directory could not be created
	#[error("Cannot create output directory {path}: {source}")]
	CreateDir {
		/// Directory that was requested
		path: PathBuf,
		/// Underlying IO error
		#[source]
		source: std::io::Error,
	},

	/// A page could not be written
	#[error("Cannot write {path}: {source}")]
	WritePage {
		/// Page that failed
		path: PathBuf,
		/// Underlying IO error
		#[source]
		source: std::io::Error,
	},

	/// Formatting into the page buffer failed
	#[error(transparent)]
	Fmt(#[from] std::fmt::Error),
}
