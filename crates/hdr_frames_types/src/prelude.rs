//! Prelude module for `hdr_frames_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and functions.
//!
//! # Examples
//!
//! ```
//! use hdr_frames_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let registry = OverrideRegistry::empty();
//! let profile = registry.profile("mario", MoveKind::Fthrow);
//! assert!(profile.class.is_throw());
//! ```

// Script engine
#[doc(inline)]
pub use crate::script::{
	AbsoluteThrowPolicy,
	HitValues,
	LiteralRate,
	MoveAnalysis,
	MoveClass,
	MoveProfile,
	RegularThrowPolicy,
	Resolver,
	VariableTable,
	VariantModifier,

	analyze_body,
	analyze_function,
	locate_function,
	resolve,
};

// Moves
#[doc(inline)]
pub use crate::moves::{MoveCategory, MoveKind};

// Orchestration
#[doc(inline)]
pub use crate::orchestrator::{MarkedValue, MoveResult, Orchestrator, RowNote, RunReport};

#[doc(inline)]
pub use crate::registry::OverrideRegistry;

#[doc(inline)]
pub use crate::source::{FallbackQuery, FallbackResolver, FsSourceTree, SourceTree};

// Auxiliary data
#[doc(inline)]
pub use crate::data::{DataSource, GameData, fighter_param::FighterStats};

// Diagnostics and settings
#[doc(inline)]
pub use crate::diagnostics::{CollectingDiagnostics, Diagnostics, LogDiagnostics, Severity};

#[doc(inline)]
pub use crate::settings::{Settings, SettingsOverrides};

// Errors
#[doc(inline)]
pub use crate::error::{DataError, ScriptError, SettingsError};
