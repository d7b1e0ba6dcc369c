//! Preflight command implementation.
//!
//! Checks that should pass before a benchmarking session is started:
//! the WebDriver endpoint answers, scenario pages exist, and the output
//! directory is writable. Each check prints its own line; failure of any
//! check fails the command.

use crate::driver::DriverClient;
use crate::scenarios::discover;
use anyhow::Result;
use std::path::PathBuf;

/// Arguments for the preflight command
#[derive(Debug, Clone)]
pub struct PreflightArgs {
    pub webdriver_url: String,
    pub scenario_dir: PathBuf,
    pub out_dir: PathBuf,
}

/// Execute the preflight checklist
pub fn execute_preflight(args: PreflightArgs) -> Result<()> {
    let mut failures = 0;

    report_check(
        "WebDriver endpoint reachable",
        check_webdriver(&args.webdriver_url),
        &mut failures,
    );
    report_check(
        "Scenario pages present",
        check_scenarios(&args.scenario_dir),
        &mut failures,
    );
    report_check(
        "Output directory writable",
        check_output_dir(&args.out_dir),
        &mut failures,
    );

    if failures > 0 {
        anyhow::bail!("{} preflight check(s) failed", failures);
    }

    println!("All preflight checks passed");
    Ok(())
}

fn report_check(label: &str, result: Result<String>, failures: &mut u32) {
    match result {
        Ok(detail) => println!("✓ {}: {}", label, detail),
        Err(e) => {
            println!("✗ {}: {}", label, e);
            *failures += 1;
        }
    }
}

fn check_webdriver(url: &str) -> Result<String> {
    let client = DriverClient::new(url)?;
    let status = client.status()?;

    let ready = status
        .get("ready")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if !ready {
        anyhow::bail!("endpoint answered but reports not ready");
    }

    Ok(format!("{} is ready", url))
}

fn check_scenarios(dir: &PathBuf) -> Result<String> {
    let scenarios = discover(dir)?;
    if scenarios.is_empty() {
        anyhow::bail!("no scenario pages under {}", dir.display());
    }
    Ok(format!("{} pages found", scenarios.len()))
}

fn check_output_dir(dir: &PathBuf) -> Result<String> {
    std::fs::create_dir_all(dir)?;

    let probe = dir.join(".preflight-probe");
    std::fs::write(&probe, b"probe")?;
    std::fs::remove_file(&probe)?;

    Ok(format!("{} is writable", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_output_dir_creates_and_probes() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("results/deep");

        let detail = check_output_dir(&nested).unwrap();

        assert!(nested.is_dir());
        assert!(detail.contains("writable"));
        assert!(!nested.join(".preflight-probe").exists());
    }

    #[test]
    fn test_check_scenarios_empty_dir_fails() {
        let temp = tempfile::tempdir().unwrap();
        let result = check_scenarios(&temp.path().to_path_buf());
        assert!(result.is_err());
    }
}
