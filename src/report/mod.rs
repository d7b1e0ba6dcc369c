//! Report output: JSON records and the HTML results page.

pub mod html;
pub mod json;
pub mod schema;

// Re-export main types and functions
pub use html::{render_html, write_html};
pub use json::{read_report, write_report};
pub use schema::{BenchmarkRecord, Report};
