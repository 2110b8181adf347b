use chrono::NaiveDate;

/// This is the standard way of converting a date to a string in awdigest. Event timestamps are
/// matched against it by their date prefix and report files are named with it.
pub fn date_to_record_name(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Renders seconds as whole hours and minutes, e.g. "2 hours, 3 minutes". Hours are omitted when
/// there are none, leftover seconds are dropped.
pub fn format_duration(seconds: f64) -> String {
    let seconds = if seconds > 0. { seconds.floor() as u64 } else { 0 };
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if hours > 0 {
        format!(
            "{hours} {}, {minutes} {}",
            pluralize(hours, "hour"),
            pluralize(minutes, "minute")
        )
    } else {
        format!("{minutes} {}", pluralize(minutes, "minute"))
    }
}

fn pluralize(value: u64, unit: &str) -> String {
    if value == 1 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}
