//! Run command implementation.
//!
//! The run command:
//! 1. Discovers scenario pages
//! 2. Drives a browser session per (scenario, run)
//! 3. Collects and filters the performance log
//! 4. Aggregates per-phase render timings
//! 5. Writes JSON and HTML reports

use crate::aggregator::aggregate;
use crate::driver::DriverClient;
use crate::parser::collect_trace_events;
use crate::report::{write_html, write_report, BenchmarkRecord, Report};
use crate::scenarios::{discover, file_url, Scenario};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Arguments for the run command
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// WebDriver endpoint URL
    pub webdriver_url: String,

    /// Directory holding scenario pages
    pub scenario_dir: PathBuf,

    /// Directory for report output
    pub out_dir: PathBuf,

    /// Number of runs per scenario; values below 1 are treated as 1
    pub runs: u32,

    /// Report name (without extension)
    pub save: String,

    /// Wait after navigation before the log is drained
    pub settle: Duration,

    /// Skip the HTML shell, write only the JSON report
    pub json_only: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        use crate::utils::config::{DEFAULT_SETTLE_MS, DEFAULT_WEBDRIVER_URL};

        Self {
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            scenario_dir: PathBuf::from("scenarios"),
            out_dir: PathBuf::from("results"),
            runs: 1,
            save: "view-results".to_string(),
            settle: Duration::from_millis(DEFAULT_SETTLE_MS),
            json_only: false,
        }
    }
}

/// Validate run arguments before any browser work starts
pub fn validate_args(args: &RunArgs) -> Result<()> {
    if args.webdriver_url.is_empty() {
        anyhow::bail!("WebDriver URL cannot be empty");
    }

    if !args.webdriver_url.starts_with("http://") && !args.webdriver_url.starts_with("https://") {
        anyhow::bail!("WebDriver URL must start with http:// or https://");
    }

    if args.save.is_empty() {
        anyhow::bail!("Report name cannot be empty");
    }

    if args.save.contains(['/', '\\']) {
        anyhow::bail!("Report name must not contain path separators");
    }

    Ok(())
}

/// Execute the run command
///
/// # Errors
/// * WebDriver connection or session failures
/// * No scenarios found
/// * Aggregation failures on malformed trace entries
/// * Report write errors
pub fn execute_run(args: RunArgs) -> Result<()> {
    let start_time = Instant::now();
    let runs = args.runs.max(1);

    info!("WebDriver endpoint: {}", args.webdriver_url);
    info!("Scenario directory: {}", args.scenario_dir.display());

    let scenarios = discover(&args.scenario_dir).context("Failed to discover scenarios")?;
    if scenarios.is_empty() {
        anyhow::bail!(
            "No scenario pages found under {}",
            args.scenario_dir.display()
        );
    }

    info!(
        "Benchmarking {} scenario pages, {} run(s) each",
        scenarios.len(),
        runs
    );

    let client =
        DriverClient::new(&args.webdriver_url).context("Failed to create WebDriver client")?;

    let mut records = Vec::with_capacity(scenarios.len() * runs as usize);

    for scenario in &scenarios {
        for run in 1..=runs {
            info!(
                "Running {}/{} (run {}/{})",
                scenario.name, scenario.implementation, run, runs
            );

            let summary = benchmark_once(&client, scenario, args.settle).with_context(|| {
                format!(
                    "Benchmark failed for {}/{} run {}",
                    scenario.name, scenario.implementation, run
                )
            })?;

            debug!(
                "{}/{} run {}: total {} us, {} gc pauses",
                scenario.name,
                scenario.implementation,
                run,
                summary.total_time,
                summary.gc.len()
            );

            records.push(BenchmarkRecord {
                implementation: scenario.implementation.clone(),
                scenario: scenario.name.clone(),
                run,
                results: summary,
            });
        }
    }

    let report = Report::new(records);

    let json_path = args.out_dir.join(format!("{}.json", args.save));
    write_report(&report, &json_path).context("Failed to write JSON report")?;
    info!("Report written to: {}", json_path.display());

    if !args.json_only {
        let html_path = args.out_dir.join(format!("{}.html", args.save));
        write_html(&report, &html_path).context("Failed to write HTML report")?;
        info!("Results page written to: {}", html_path.display());
    }

    info!(
        "Completed {} measurements in {:.2}s",
        report.records.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Drive one browser session through one scenario page and aggregate its trace.
///
/// The session is closed before the result is inspected, so a failed
/// navigation still releases the browser.
fn benchmark_once(
    client: &DriverClient,
    scenario: &Scenario,
    settle: Duration,
) -> Result<crate::aggregator::RenderSummary> {
    let url = file_url(&scenario.path).context("Failed to build scenario URL")?;

    let session = client.new_session().context("Failed to create session")?;

    let collected = (|| -> Result<Vec<crate::parser::PerfLogEntry>> {
        session.navigate(&url).context("Navigation failed")?;
        std::thread::sleep(settle);
        let entries = session
            .performance_log()
            .context("Failed to collect performance log")?;
        Ok(entries)
    })();

    // Close the session even when collection failed
    if let Err(e) = session.quit() {
        warn!("Failed to close session cleanly: {}", e);
    }

    let entries = collected?;
    debug!("Collected {} raw log entries", entries.len());

    let events = collect_trace_events(&entries);
    let summary = aggregate(&events).context("Trace aggregation failed")?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&RunArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_url() {
        let args = RunArgs {
            webdriver_url: String::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_invalid_scheme() {
        let args = RunArgs {
            webdriver_url: "ftp://localhost:9515".to_string(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_save_tag() {
        let args = RunArgs {
            save: String::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_save_tag_with_separator() {
        let args = RunArgs {
            save: "../escape".to_string(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }
}
