//! Rendering and saving of the daily summary.
//! Every run produces 2 files in the output directory:
//!  - `{hostname}-{date}.md` with the human readable summary ([markdown]).
//!  - `{hostname}-{date}.json.md` with the same data as fenced json ([structured]).

pub mod markdown;
pub mod structured;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};
use tracing::{debug, info};

use crate::{error::SummaryError, summary::aggregation::ProcessUsage, utils::time::date_to_record_name};

use self::{markdown::render_markdown, structured::render_structured};

/// Everything a report shows. `total_seconds` covers every application, not only
/// `top_processes`.
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub hostname: String,
    pub total_seconds: f64,
    pub top_processes: Vec<ProcessUsage>,
    pub generated_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub markdown: PathBuf,
    pub structured: PathBuf,
}

impl ReportPaths {
    pub fn new(dir: &Path, hostname: &str, date: NaiveDate) -> Self {
        let stem = format!("{hostname}-{}", date_to_record_name(date));
        Self {
            markdown: dir.join(format!("{stem}.md")),
            structured: dir.join(format!("{stem}.json.md")),
        }
    }
}

/// Renders both reports and writes them into `dir`, creating it when needed. Existing reports
/// for the same host and day are overwritten.
pub async fn write_reports(dir: &Path, report: &DailyReport) -> Result<ReportPaths, SummaryError> {
    let paths = ReportPaths::new(dir, &report.hostname, report.date);
    let markdown = render_markdown(report);
    let structured = render_structured(report).map_err(SummaryError::Render)?;

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| SummaryError::Write {
            path: dir.to_path_buf(),
            source,
        })?;

    write_file(&paths.markdown, markdown).await?;
    info!("Markdown summary saved to {:?}", paths.markdown);
    write_file(&paths.structured, structured).await?;
    info!("Structured summary saved to {:?}", paths.structured);

    Ok(paths)
}

async fn write_file(path: &Path, content: String) -> Result<(), SummaryError> {
    debug!("Writing {} bytes to {path:?}", content.len());
    tokio::fs::write(path, content)
        .await
        .map_err(|source| SummaryError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::{Local, NaiveDate, TimeZone};
    use tempfile::tempdir;

    use crate::{error::SummaryError, summary::aggregation::ProcessUsage};

    use super::{write_reports, DailyReport, ReportPaths};

    pub fn sample_report() -> DailyReport {
        DailyReport {
            date: NaiveDate::from_ymd_opt(2024, 4, 5).unwrap(),
            hostname: "desk".into(),
            total_seconds: 5400.,
            top_processes: vec![
                ProcessUsage {
                    process_name: "chrome".into(),
                    seconds: 3600.,
                },
                ProcessUsage {
                    process_name: "code".into(),
                    seconds: 1800.,
                },
            ],
            generated_at: Local.with_ymd_and_hms(2024, 4, 5, 18, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_report_paths() {
        let paths = ReportPaths::new(
            "/reports".as_ref(),
            "desk",
            NaiveDate::from_ymd_opt(2024, 4, 5).unwrap(),
        );
        assert_eq!(paths.markdown, std::path::Path::new("/reports/desk-2024-04-05.md"));
        assert_eq!(
            paths.structured,
            std::path::Path::new("/reports/desk-2024-04-05.json.md")
        );
    }

    #[tokio::test]
    async fn test_write_reports_creates_directory() -> Result<()> {
        let dir = tempdir()?;
        let output = dir.path().join("nested").join("reports");

        let paths = write_reports(&output, &sample_report()).await?;

        let markdown = tokio::fs::read_to_string(&paths.markdown).await?;
        let structured = tokio::fs::read_to_string(&paths.structured).await?;
        assert!(markdown.starts_with("# ActivityWatch Summary for 2024-04-05 (desk)"));
        assert!(structured.starts_with("```json\n"));
        assert_eq!(std::fs::read_dir(&output)?.count(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_write_reports_into_file_fails() -> Result<()> {
        let dir = tempdir()?;
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "")?;

        let result = write_reports(&blocker, &sample_report()).await;

        assert!(matches!(result, Err(SummaryError::Write { .. })));
        Ok(())
    }
}
