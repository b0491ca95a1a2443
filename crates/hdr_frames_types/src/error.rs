//! Error types for script evaluation and auxiliary data loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reducing a numeric expression
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScriptError {
	/// Division by a literal zero
	#[error("Division by zero: {numerator} / 0")]
	DivisionByZero {
		/// Left-hand operand of the failing division
		numerator: f64,
	},

	/// Reduced text does not parse as a single number
	#[error("Not a number: {0:?}")]
	NotANumber(String),

	/// Parenthesised group could not be reduced
	#[error("Unresolved group: ({0})")]
	UnresolvedGroup(String),
}

/// Errors that can occur when reading fighter parameters, motion lists or animation metadata
#[derive(Debug, Error)]
pub enum DataError {
	/// The fighter parameter list was not present in the document
	#[error("Fighter table not found in {path}")]
	MissingFighterTable {
		/// Path of the document that was searched
		path: PathBuf,
	},

	/// YAML document could not be decoded
	#[error("Invalid YAML in {path}: {source}")]
	Yaml {
		/// Path of the offending document
		path: PathBuf,
		/// Underlying decoder error
		#[source]
		source: serde_yaml::Error,
	},

	/// JSON document could not be decoded
	#[error("Invalid JSON in {path}: {source}")]
	Json {
		/// Path of the offending document
		path: PathBuf,
		/// Underlying decoder error
		#[source]
		source: serde_json::Error,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Errors that can occur when loading [`Settings`](crate::settings::Settings)
#[derive(Debug, Error)]
pub enum SettingsError {
	/// Configuration sources could not be merged or deserialised
	#[error(transparent)]
	Config(#[from] config::ConfigError),

	/// A required directory is missing
	#[error("{name} directory does not exist: {path}")]
	MissingDirectory {
		/// Setting name
		name: &'static str,
		/// Configured path
		path: PathBuf,
	},
}
