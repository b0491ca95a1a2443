//! Static HTML report for `hdr-frames`.
//!
//! One page per move category, a fighter stats page and an index linking them.
//! Pages are self-contained: the stylesheet and the sorting script are inlined.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use hdr_frames_report::prelude::*;
//! use hdr_frames_types::{moves::MoveCategory, orchestrator::RunReport};
//!
//! let generated = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let page = category_page(MoveCategory::Aerials, &RunReport::default(), generated).unwrap();
//! assert!(page.contains("<title>Aerial Attacks - Attack Data</title>"));
//! ```

pub mod assets;
pub mod error;
pub mod format;
pub mod html;
pub mod pages;
pub mod writer;

/// `use hdr_frames_report::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::ReportError;
pub use writer::ReportWriter;
