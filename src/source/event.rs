use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};

/// A single window event as ActivityWatch serves it. Only the fields the summary needs are
/// kept, the rest of the payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: Option<i64>,
    /// ISO-8601 start of the event, with an offset. For example 2024-04-05T12:00:00.123+00:00
    pub timestamp: String,
    /// Seconds the window stayed focused.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub data: EventData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    /// Name of the focused application. For example 'firefox' or 'Code'
    #[serde(default)]
    pub app: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl Event {
    /// Calendar date as written in the timestamp, without any timezone conversion.
    pub fn date_part(&self) -> &str {
        self.timestamp
            .split_once('T')
            .map_or(self.timestamp.as_str(), |(date, _)| date)
    }

    pub fn start(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp).ok()
    }

    /// End of the event, given the duration it should be measured with.
    pub fn end(&self, duration: f64) -> Option<DateTime<FixedOffset>> {
        let micros = (duration * 1_000_000.).round() as i64;
        self.start()?
            .checked_add_signed(TimeDelta::microseconds(micros))
    }

    pub fn app(&self) -> Option<&str> {
        self.data.app.as_deref()
    }
}

#[cfg(test)]
impl Event {
    pub fn sample(timestamp: &str, duration: Option<f64>, app: Option<&str>) -> Self {
        Self {
            id: None,
            timestamp: timestamp.into(),
            duration,
            data: EventData {
                app: app.map(Into::into),
                title: None,
            },
        }
    }
}
