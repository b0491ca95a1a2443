//! Script analysis: locating a function, walking its body and reducing it to one hit.
//!
//! The engine is a line scanner, not a parser. Function bodies are split into
//! lines, blocks are delimited by counting braces, and a fixed vocabulary of
//! calls is recognised by substring and regex matching:
//!
//! - `frame(lua_state, N)` / `wait(lua_state, N)` move the animation frame cursor
//! - `for _ in 0..N { .. }` loops are unrolled by multiplying their waits
//! - `ATTACK`, `ATTACK_ABS` and `CATCH` calls become [`AttackCall`]s
//! - rate calls become [`RateEvent`]s, converted to real frames by [`to_real_frame`]
//!
//! Anything character specific reaches the engine through a [`MoveProfile`].

mod analyze;
mod anchor;
mod arith;
mod body;
mod profile;
mod rate;
mod resolve;
mod scanner;
mod select;
mod throw_total;

#[cfg(test)]
mod tests;

pub use analyze::{MoveAnalysis, analyze_body, analyze_function};
pub use anchor::{LiteralRate, anchor_frame, anchor_real_frame};
pub use arith::{evaluate_flat, try_evaluate_flat};
pub use body::{block_extent, brace_delta, locate_function, locate_loose, split_params};
pub use profile::{ArticleDamage, FrameOverride, MoveClass, MoveProfile, ShotInjection};
pub use rate::{
	RateChange, RateEvent, actionable_frame_display, active_frame_display, parse_rate_change,
	to_real_frame,
};
pub use resolve::{
	MAX_RESOLUTION_PASSES, Resolver, VariableTable, VariantModifier, resolve, resolve_enhanced,
	strip_comment,
};
pub use scanner::{AttackCall, CallKind, HitValues, ScanOutput, scan};
pub use select::{Selection, select};
pub use throw_total::{AbsoluteThrowPolicy, RegularThrowPolicy, throw_total};
