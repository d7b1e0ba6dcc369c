//! Configuration and constants for the harness.

use std::time::Duration;

/// Default timeout for WebDriver HTTP requests
pub const DEFAULT_DRIVER_TIMEOUT: Duration = Duration::from_secs(30);

/// Default wait after navigation before the performance log is drained
pub const DEFAULT_SETTLE_MS: u64 = 1000;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default chromedriver endpoint
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Devtools method prefix identifying network instrumentation events.
/// Entries with this prefix carry no rendering information and are dropped
/// before aggregation.
pub const NETWORK_METHOD_PREFIX: &str = "Network.";

/// Trace categories requested from Chrome's performance log.
/// The full list of available categories is visible under chrome://tracing.
pub const TRACE_CATEGORIES: &str = "devtools.timeline, disabled-by-default-devtools.timeline, blink.user_timing, blink_style, devtools.timeline.async";

/// Chrome launch arguments used for every benchmarking session
pub const CHROME_ARGS: &[&str] = &[
    "--enable-gpu-benchmarking",
    "--enable-thread-composting",
    "--headless",
];

/// Log type requested from the WebDriver log endpoint
pub const PERFORMANCE_LOG_TYPE: &str = "performance";
