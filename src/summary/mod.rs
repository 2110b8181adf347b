pub mod aggregation;
pub mod ranking;

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::{
    error::SummaryError,
    report::{write_reports, DailyReport, ReportPaths},
    source::EventSource,
    utils::clock::Clock,
};

use self::{
    aggregation::aggregate_day,
    ranking::{rank_processes, TOP_PROCESSES},
};

/// What to summarize and where to put it.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub date: NaiveDate,
    pub hostname: String,
    pub output_dir: PathBuf,
}

/// Fetches the events, summarizes `request.date` and writes both reports.
///
/// Returns [SummaryError::NoData] without writing anything when the source has no events at all,
/// or none on the requested day.
#[instrument(skip(source, clock))]
pub async fn run(
    source: &dyn EventSource,
    clock: &dyn Clock,
    request: &SummaryRequest,
) -> Result<ReportPaths, SummaryError> {
    let events = source.fetch_events().await?;
    if events.is_empty() {
        return Err(SummaryError::NoData);
    }
    info!("Fetched {} events", events.len());

    let state = aggregate_day(&events, request.date);
    if state.events_on_date() == 0 {
        return Err(SummaryError::NoData);
    }
    info!(
        "Counted {:.0}s across {} applications",
        state.total_seconds(),
        state.usages().len()
    );

    let report = DailyReport {
        date: request.date,
        hostname: request.hostname.clone(),
        total_seconds: state.total_seconds(),
        top_processes: rank_processes(&state, TOP_PROCESSES),
        generated_at: clock.time(),
    };

    write_reports(&request.output_dir, &report).await
}
