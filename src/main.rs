//! Renderbench CLI
//!
//! A benchmarking harness for browser rendering performance.
//! Drives scenario pages through headless Chrome and aggregates
//! performance-trace timings into per-phase reports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use renderbench::commands::{
    execute_preflight, execute_run, validate_args, PreflightArgs, RunArgs,
};
use renderbench::utils::config::{DEFAULT_SETTLE_MS, DEFAULT_WEBDRIVER_URL, SCHEMA_VERSION};
use std::path::PathBuf;
use std::time::Duration;

/// Renderbench - browser rendering performance benchmarks
#[derive(Parser, Debug)]
#[command(name = "renderbench")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the benchmark scenarios and write a report
    Run {
        /// WebDriver endpoint URL
        #[arg(short, long, default_value = DEFAULT_WEBDRIVER_URL)]
        webdriver: String,

        /// Directory holding scenario pages
        #[arg(short, long, default_value = "scenarios")]
        scenarios: PathBuf,

        /// Directory for report output
        #[arg(short, long, default_value = "results")]
        out: PathBuf,

        /// Number of runs per scenario (values below 1 are treated as 1)
        #[arg(long, default_value = "1")]
        runs: u32,

        /// Report name, without extension
        #[arg(long, default_value = "view-results")]
        save: String,

        /// Milliseconds to wait after navigation before draining the log
        #[arg(long, default_value_t = DEFAULT_SETTLE_MS)]
        settle_ms: u64,

        /// Write only the JSON report, skip the HTML page
        #[arg(long)]
        json_only: bool,
    },

    /// Check the environment before a benchmarking session
    Preflight {
        /// WebDriver endpoint URL
        #[arg(short, long, default_value = DEFAULT_WEBDRIVER_URL)]
        webdriver: String,

        /// Directory holding scenario pages
        #[arg(short, long, default_value = "scenarios")]
        scenarios: PathBuf,

        /// Directory for report output
        #[arg(short, long, default_value = "results")]
        out: PathBuf,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Run {
            webdriver,
            scenarios,
            out,
            runs,
            save,
            settle_ms,
            json_only,
        } => {
            let args = RunArgs {
                webdriver_url: webdriver,
                scenario_dir: scenarios,
                out_dir: out,
                runs,
                save,
                settle: Duration::from_millis(settle_ms),
                json_only,
            };

            validate_args(&args)?;
            execute_run(args)?;
        }

        Commands::Preflight {
            webdriver,
            scenarios,
            out,
        } => {
            execute_preflight(PreflightArgs {
                webdriver_url: webdriver,
                scenario_dir: scenarios,
                out_dir: out,
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a report JSON file
fn validate_report_file(file_path: PathBuf) -> Result<()> {
    use renderbench::report::read_report;

    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Records: {}", report.records.len());

    for record in &report.records {
        println!(
            "  {}/{} run {}: total {} us, {} gc pauses",
            record.scenario,
            record.implementation,
            record.run,
            record.results.total_time,
            record.results.gc.len()
        );
    }

    Ok(())
}

/// Display version information
fn display_version() {
    println!("Renderbench v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("A benchmarking harness for browser rendering performance.");
}
