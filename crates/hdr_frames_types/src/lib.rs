//! Core types and the script analysis engine for `hdr-frames`.
//!
//! The crate turns fighter scripts into per-move frame data:
//!
//! - **Script engine** ([`script`]): locates `game_*` functions, walks their
//!   bodies, resolves numeric expressions and integrates playback-rate changes
//! - **Override registry** ([`registry`]): per-character exceptions as data
//! - **Auxiliary data** ([`data`]): fighter parameters, motion lists and
//!   animation metadata
//! - **Source tree** ([`source`]): primary and fallback script lookup
//! - **Orchestrator** ([`orchestrator`]): runs every (character, move) pair
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use hdr_frames_types::prelude::*;
//!
//! let body = "
//!     frame(lua_state, 5.0);
//!     if is_excute(agent) {
//!         ATTACK(agent, 0, 0, Hash40::new(\"top\"), 12.0, 45, 80, 0, 30, 5.0, 0.0, 8.0, 6.0, None, None, None, 1.0, 1.0);
//!     }
//! ";
//! let analysis = analyze_body(body, &MoveProfile::default()).unwrap();
//! assert_eq!(analysis.hit.damage, Some(12.0));
//! assert_eq!(analysis.active_frame(), 5);
//! ```
//!
//! Or resolve a single expression:
//!
//! ```
//! use hdr_frames_types::script::{VariableTable, resolve};
//!
//! let vars: VariableTable = [("X", "Y * 2"), ("Y", "3")].into_iter().collect();
//! assert_eq!(resolve("X", &vars), Some(6.0));
//! ```

macro_rules! static_regex {
	($name:ident, $pattern:expr) => {
		static $name: std::sync::LazyLock<regex::Regex> =
			std::sync::LazyLock::new(|| regex::Regex::new($pattern).expect("pattern is valid"));
	};
}

pub mod data;
pub mod diagnostics;
pub mod error;
pub mod moves;
pub mod orchestrator;
pub mod registry;
pub mod script;
pub mod settings;
pub mod source;

/// `use hdr_frames_types::prelude::*;` to import commonly used items.
pub mod prelude;
