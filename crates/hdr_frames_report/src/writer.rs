//! Writes every page of the report into an output directory.

use std::{
	collections::BTreeMap,
	fs,
	path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime};
use hdr_frames_types::{data::fighter_param::FighterStats, moves::MoveCategory, orchestrator::RunReport};

use crate::{
	error::ReportError,
	pages::{self, INDEX_PAGE, STATS_PAGE},
};

/// HTML report writer
///
/// # Examples
///
/// ```no_run
/// use std::collections::BTreeMap;
///
/// use hdr_frames_report::ReportWriter;
/// use hdr_frames_types::orchestrator::RunReport;
///
/// let written = ReportWriter::new("output_html").write(&RunReport::default(), &BTreeMap::new())?;
/// assert_eq!(written.len(), 9);
/// # Ok::<(), hdr_frames_report::ReportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReportWriter {
	output: PathBuf,
	generated: Option<NaiveDateTime>,
}

impl ReportWriter {
	/// Writer into `output`, created when missing
	pub fn new(output: impl Into<PathBuf>) -> Self {
		Self {
			output: output.into(),
			generated: None,
		}
	}

	/// Fixed "Generated on" time instead of the local clock
	#[must_use]
	pub fn generated_at(mut self, generated: NaiveDateTime) -> Self {
		self.generated = Some(generated);
		self
	}

	/// Output directory
	pub fn output(&self) -> &Path {
		&self.output
	}

	/// Write the index, the stats page and one page per category.
	///
	/// Returns the written paths in page order.
	pub fn write(
		&self,
		report: &RunReport,
		stats: &BTreeMap<String, FighterStats>,
	) -> Result<Vec<PathBuf>, ReportError> {
		fs::create_dir_all(&self.output).map_err(|source| ReportError::CreateDir {
			path: self.output.clone(),
			source,
		})?;
		let generated = self.generated.unwrap_or_else(|| Local::now().naive_local());

		let mut written = Vec::with_capacity(MoveCategory::ALL.len() + 2);
		written.push(self.page(INDEX_PAGE, &pages::index_page(generated)?)?);
		written.push(self.page(STATS_PAGE, &pages::stats_page(stats, generated)?)?);
		for category in MoveCategory::ALL {
			let html = pages::category_page(category, report, generated)?;
			written.push(self.page(category.filename(), &html)?);
		}
		Ok(written)
	}

	fn page(&self, name: &str, html: &str) -> Result<PathBuf, ReportError> {
		let path = self.output.join(name);
		fs::write(&path, html).map_err(|source| ReportError::WritePage {
			path: path.clone(),
			source,
		})?;
		log::info!("Generated {}", path.display());
		Ok(path)
	}
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;
	use hdr_frames_types::{moves::MoveKind, orchestrator::MoveResult, script::HitValues};

	use super::*;

	#[test]
	fn test_write_all_pages() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("nested").join("output_html");
		let generated = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap();

		let mut report = RunReport::default();
		report.push(MoveKind::Jab1, MoveResult::new("Mario", &HitValues::new(2.2, 361.0, 25.0, 0.0, 20.0), 2));

		let written = ReportWriter::new(&output).generated_at(generated).write(&report, &BTreeMap::new()).unwrap();
		assert_eq!(written.len(), 9);
		assert_eq!(written[0], output.join("index.html"));
		for path in &written {
			assert!(path.is_file(), "{} missing", path.display());
		}

		let jabs = fs::read_to_string(output.join("jabs_attacks.html")).unwrap();
		assert!(jabs.contains("<td class=\"damage\">2.2</td>"));
		assert!(jabs.contains("Generated on: 2024-01-02 03:04:05"));
	}

	#[test]
	fn test_output_is_a_file() {
		let file = tempfile::NamedTempFile::new().unwrap();
		let err = ReportWriter::new(file.path()).write(&RunReport::default(), &BTreeMap::new()).unwrap_err();
		assert!(matches!(err, ReportError::CreateDir { .. }));
	}
}
