//! Prelude module for `hdr_frames_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use hdr_frames_internal::prelude::*;
//!
//! // Engine and report types side by side
//! let report = RunReport::default();
//! let writer = ReportWriter::new("output_html");
//! assert!(report.rows(MoveKind::Fair).is_empty());
//! assert_eq!(writer.output().to_str(), Some("output_html"));
//! ```

// Re-export everything from hdr_frames_types::prelude
#[doc(inline)]
pub use hdr_frames_types::prelude::*;

// Re-export everything from hdr_frames_report::prelude
#[doc(inline)]
pub use hdr_frames_report::prelude::*;

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use hdr_frames_report;
#[doc(inline)]
pub use hdr_frames_types;
