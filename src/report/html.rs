//! HTML report writer.
//!
//! Embeds the serialized report as a JSON payload in a self-contained
//! HTML shell, so results can be opened directly in a browser.

use super::schema::Report;
use crate::utils::error::OutputError;
use log::info;
use std::path::Path;

/// Report shell with a placeholder for the embedded payload
const TEMPLATE: &str = include_str!("template.html");

/// Marker in the template replaced by the JSON payload
const DATA_PLACEHOLDER: &str = "__BENCHMARK_DATA__";

/// Render the report into the HTML shell
pub fn render_html(report: &Report) -> Result<String, OutputError> {
    let payload = serde_json::to_string(report).map_err(OutputError::SerializationFailed)?;
    Ok(TEMPLATE.replacen(DATA_PLACEHOLDER, &payload, 1))
}

/// Render and write the HTML report.
///
/// Parent directories are created as needed.
pub fn write_html(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing HTML report to: {}", output_path.display());

    let rendered = render_html(report)?;

    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    std::fs::write(output_path, rendered).map_err(OutputError::WriteFailed)?;

    Ok(())
}
