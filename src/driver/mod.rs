//! WebDriver (chromedriver) client used to run benchmark scenarios.

pub mod client;
pub mod types;

// Re-export main types
pub use client::{DriverClient, DriverSession};
