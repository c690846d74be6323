//! Shared HTTP utilities for grading requests.

use std::time::Duration;

/// User-Agent string for HTTP requests.
pub const USER_AGENT: &str = concat!("adkb/", env!("CARGO_PKG_VERSION"));

/// Bound on a single grading request. The grading service specifies no
/// timeout of its own, and a hung request must not stall the caller.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Create a configured reqwest client with standard headers and timeout.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default()
}
