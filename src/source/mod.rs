//! Contains logic for retrieving window events.
//! [EventSource] is the contract the summary pipeline works against, [ActivityWatchSource]
//! is the implementation talking to a local ActivityWatch server.

pub mod activity_watch;
pub mod event;

use async_trait::async_trait;

use crate::error::SummaryError;

pub use activity_watch::ActivityWatchSource;
pub use event::{Event, EventData};

/// Read-only access to the events of a single bucket.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Returns every event of the bucket, oldest first.
    async fn fetch_events(&self) -> Result<Vec<Event>, SummaryError>;
}
