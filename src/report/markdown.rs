use crate::{
    summary::aggregation::ProcessUsage,
    utils::time::{date_to_record_name, format_duration},
};

use super::DailyReport;

/// Human readable summary. Durations are spelled out in hours and minutes.
pub fn render_markdown(report: &DailyReport) -> String {
    let header = format!(
        "# ActivityWatch Summary for {} ({})\n\n\
         **Total time spent on computer**: {}. File saved at {}.\n\n\
         ## Top 20 processes\n\n",
        date_to_record_name(report.date),
        report.hostname,
        format_duration(report.total_seconds),
        report.generated_at.format("%H:%M:%S")
    );

    report
        .top_processes
        .iter()
        .map(process_line)
        .fold(header, |mut content, line| {
            content.push_str(&line);
            content
        })
}

fn process_line(usage: &ProcessUsage) -> String {
    format!(
        "- **{}**: {}\n",
        usage.process_name,
        format_duration(usage.seconds)
    )
}
