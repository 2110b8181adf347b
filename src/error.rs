use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a summary run.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// The event source could not be reached or the request timed out.
    #[error("failed to fetch ActivityWatch data: {0}")]
    Unavailable(#[source] reqwest::Error),
    #[error("failed to fetch ActivityWatch data: {url} answered with status {status}")]
    Status { url: String, status: u16 },
    /// The event source answered with something that isn't a list of events.
    #[error("failed to parse ActivityWatch data: {0}")]
    Malformed(#[source] serde_json::Error),
    /// Nothing to summarize. Not a failure, the run just produces no reports.
    #[error("no events found")]
    NoData,
    #[error("failed to render structured report: {0}")]
    Render(#[source] serde_json::Error),
    #[error("failed to write report {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SummaryError {
    /// Process exit code that corresponds to the error.
    pub fn exit_code(&self) -> u8 {
        match self {
            SummaryError::NoData => 0,
            SummaryError::ClientBuild(_)
            | SummaryError::Unavailable(_)
            | SummaryError::Status { .. }
            | SummaryError::Malformed(_)
            | SummaryError::Render(_)
            | SummaryError::Write { .. } => 1,
        }
    }
}
