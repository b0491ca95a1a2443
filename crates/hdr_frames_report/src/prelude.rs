//! Prelude module for `hdr_frames_report`.

// Writer
#[doc(inline)]
pub use crate::{error::ReportError, writer::ReportWriter};

// Pages
#[doc(inline)]
pub use crate::pages::{INDEX_PAGE, STATS_PAGE, category_page, index_page, stats_page};

// Cell formatting
#[doc(inline)]
pub use crate::format::{ShieldBand, shield_advantage};
