/// Zone the converter reads from unless configured otherwise.
pub const DEFAULT_SOURCE_ZONE: &str = "Asia/Kolkata";

/// Zone the converter writes to unless configured otherwise.
pub const DEFAULT_TARGET_ZONE: &str = "America/New_York";
