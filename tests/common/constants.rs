//! Shared constants for end-to-end tests

/// Session key used by most tests.
pub const TEST_EMAIL: &str = "listener@example.com";

/// A second session key for cross-session isolation tests.
pub const OTHER_EMAIL: &str = "other@example.com";

/// Timeout for test HTTP requests.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
