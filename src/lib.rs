//! Daily digest of ActivityWatch window activity.
//! Fetches the window events of one machine, keeps the active time of a single day and writes a
//! ranked per-application summary as markdown and as a fenced json document.
//!

pub mod cli;
pub mod error;
pub mod report;
pub mod source;
pub mod summary;
pub mod utils;
