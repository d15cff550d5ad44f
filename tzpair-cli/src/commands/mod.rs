pub mod config;
pub mod convert;
pub mod now;
pub mod status;

/// Seconds between refreshes in `status --watch`.
pub const WATCH_INTERVAL_SECS: u64 = 60;
