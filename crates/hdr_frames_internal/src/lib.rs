//! This module is separated into its own crate so the report and the engine can be linked together, and should not be used directly.

/// `use hdr_frames::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use hdr_frames_report;
pub use hdr_frames_types;

// Re-export commonly used types at crate root
pub use hdr_frames_report::{ReportError, ReportWriter};
pub use hdr_frames_types::{moves::MoveKind, orchestrator::Orchestrator, registry::OverrideRegistry};
