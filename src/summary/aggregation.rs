use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, NaiveDate};
use tracing::{trace, warn};

use crate::{source::Event, utils::time::date_to_record_name};

/// Events starting more than this many seconds after the previous one ended follow a break.
pub const GAP_THRESHOLD_SECONDS: f64 = 300.;
/// A single event longer than this is most likely the user being away.
pub const LONG_DURATION_THRESHOLD_SECONDS: f64 = 900.;

const DEFAULT_APP_NAME: &str = "unknown";
const IDLE_MARKERS: [&str; 2] = ["idle", "afk"];

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessUsage {
    pub process_name: String,
    pub seconds: f64,
}

impl ProcessUsage {
    fn new(process_name: String) -> Self {
        Self {
            process_name,
            seconds: 0.,
        }
    }
}

/// Accumulated time per application for a single day. Applications keep the order in which they
/// were first seen. `total_seconds` is always the sum of every usage.
#[derive(Debug, Clone, Default)]
pub struct AggregationState {
    usages: Vec<ProcessUsage>,
    positions: HashMap<String, usize>,
    total_seconds: f64,
    events_on_date: usize,
}

impl AggregationState {
    fn add(&mut self, process_name: String, seconds: f64) {
        let position = match self.positions.get(&process_name) {
            Some(position) => *position,
            None => {
                self.usages.push(ProcessUsage::new(process_name.clone()));
                self.positions.insert(process_name, self.usages.len() - 1);
                self.usages.len() - 1
            }
        };
        self.usages[position].seconds += seconds;
        self.total_seconds += seconds;
    }

    pub fn usages(&self) -> &[ProcessUsage] {
        &self.usages
    }

    pub fn total_seconds(&self) -> f64 {
        self.total_seconds
    }

    pub fn seconds_for(&self, process_name: &str) -> Option<f64> {
        self.positions
            .get(process_name)
            .map(|position| self.usages[*position].seconds)
    }

    /// Number of events dated on the aggregated day, including the ones that were filtered out.
    pub fn events_on_date(&self) -> usize {
        self.events_on_date
    }

    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }
}

/// Sums up active time per application for `date`.
///
/// Events are expected in chronological order. An event is dropped when it
/// - is dated on another day,
/// - has no positive duration,
/// - starts more than [GAP_THRESHOLD_SECONDS] after the end of the previous event,
/// - lasts longer than [LONG_DURATION_THRESHOLD_SECONDS],
/// - belongs to an idle or afk pseudo application.
///
/// Only events that pass the first two checks move the end of the previous event forward, and
/// they do so even when a later check drops them.
pub fn aggregate_day(events: &[Event], date: NaiveDate) -> AggregationState {
    let target = date_to_record_name(date);
    let mut state = AggregationState::default();
    let mut previous_end: Option<DateTime<FixedOffset>> = None;

    for event in events {
        if event.date_part() != target {
            continue;
        }
        state.events_on_date += 1;

        let Some(duration) = event.duration.filter(|v| *v > 0.) else {
            trace!("Skipping event at {} without duration", event.timestamp);
            continue;
        };

        let (Some(start), Some(end)) = (event.start(), event.end(duration)) else {
            warn!("Skipping event with unreadable timestamp {}", event.timestamp);
            continue;
        };

        let previous = previous_end.replace(end);
        if previous.is_some_and(|previous| seconds_between(previous, start) > GAP_THRESHOLD_SECONDS) {
            trace!("Skipping event at {} after inactivity", event.timestamp);
            continue;
        }

        if duration > LONG_DURATION_THRESHOLD_SECONDS {
            trace!("Skipping {duration}s event at {}", event.timestamp);
            continue;
        }

        let process_name = normalize_app_name(event.app());
        if is_idle(&process_name) {
            continue;
        }

        state.add(process_name, duration);
    }

    state
}

pub fn normalize_app_name(app: Option<&str>) -> String {
    app.map_or_else(|| DEFAULT_APP_NAME.to_string(), str::to_lowercase)
}

fn is_idle(process_name: &str) -> bool {
    IDLE_MARKERS
        .iter()
        .any(|marker| process_name.contains(marker))
}

fn seconds_between(from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> f64 {
    let delta = to - from;
    delta
        .num_microseconds()
        .map_or(delta.num_seconds() as f64, |micros| micros as f64 / 1_000_000.)
}
