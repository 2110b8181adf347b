use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::utils::time::date_to_record_name;

use super::DailyReport;

const SECONDS_IN_HOUR: f64 = 3600.;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StructuredReport {
    pub date: String,
    pub hostname: String,
    pub total_time_hours: f64,
    pub top_processes: Vec<StructuredProcess>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StructuredProcess {
    pub process: String,
    pub time_hours: f64,
}

impl From<&DailyReport> for StructuredReport {
    fn from(report: &DailyReport) -> Self {
        Self {
            date: date_to_record_name(report.date),
            hostname: report.hostname.clone(),
            total_time_hours: report.total_seconds / SECONDS_IN_HOUR,
            top_processes: report
                .top_processes
                .iter()
                .map(|usage| StructuredProcess {
                    process: usage.process_name.clone(),
                    time_hours: usage.seconds / SECONDS_IN_HOUR,
                })
                .collect(),
        }
    }
}

/// Machine readable summary, pretty printed json wrapped in a fenced block so it renders next to
/// the markdown report.
pub fn render_structured(report: &DailyReport) -> Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    StructuredReport::from(report).serialize(&mut serializer)?;
    Ok(format!("```json\n{}\n```", String::from_utf8_lossy(&buffer)))
}
