use super::aggregation::{AggregationState, ProcessUsage};

/// How many applications make it into a report.
pub const TOP_PROCESSES: usize = 20;

/// Returns at most `limit` usages, longest first. Applications with equal time keep the order in
/// which they were first seen.
pub fn rank_processes(state: &AggregationState, limit: usize) -> Vec<ProcessUsage> {
    let mut usages = state.usages().to_vec();
    // sort_by is stable
    usages.sort_by(|a, b| b.seconds.total_cmp(&a.seconds));
    usages.truncate(limit);
    usages
}
