#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `hdr-frames` extracts frame data from fighter scripts and renders it as a static HTML report.
//!
pub use hdr_frames_internal::*;
