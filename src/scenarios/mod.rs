//! Scenario discovery.
//!
//! Scenarios live under `<dir>/<scenario>/<implementation>.html`: one
//! subdirectory per scenario, one prebuilt page per implementation
//! variant. Source compilation happens outside the harness; only `.html`
//! files are picked up here.

use crate::utils::error::ScenarioError;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// One (scenario, implementation) page to benchmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Scenario name (the subdirectory)
    pub name: String,

    /// Implementation variant (the file stem)
    pub implementation: String,

    /// Path to the prebuilt HTML page
    pub path: PathBuf,
}

/// Scan a scenario directory tree.
///
/// Results are sorted by (scenario, implementation) so repeated runs
/// benchmark in a stable order. Files that are not `.html` and stray
/// top-level files are skipped.
pub fn discover(dir: &Path) -> Result<Vec<Scenario>, ScenarioError> {
    if !dir.is_dir() {
        return Err(ScenarioError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut scenarios = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let scenario_dir = entry?.path();
        if !scenario_dir.is_dir() {
            continue;
        }

        let Some(scenario_name) = scenario_dir.file_name().and_then(|n| n.to_str()) else {
            warn!("Skipping scenario directory with non-UTF-8 name: {}", scenario_dir.display());
            continue;
        };

        for page in std::fs::read_dir(&scenario_dir)? {
            let path = page?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }

            let Some(implementation) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            debug!("Discovered scenario {}/{}", scenario_name, implementation);

            scenarios.push(Scenario {
                name: scenario_name.to_string(),
                implementation: implementation.to_string(),
                path,
            });
        }
    }

    scenarios.sort_by(|a, b| {
        (a.name.as_str(), a.implementation.as_str())
            .cmp(&(b.name.as_str(), b.implementation.as_str()))
    });

    Ok(scenarios)
}

/// Absolute `file://` URL for a scenario page
pub fn file_url(path: &Path) -> Result<String, ScenarioError> {
    let absolute = path
        .canonicalize()
        .map_err(|_| ScenarioError::InvalidPath(path.to_path_buf()))?;

    let Some(path_str) = absolute.to_str() else {
        return Err(ScenarioError::InvalidPath(path.to_path_buf()));
    };

    Ok(format!("file://{}", path_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        fs::create_dir(root.join("table")).unwrap();
        fs::write(root.join("table/native.html"), "<html></html>").unwrap();
        fs::write(root.join("table/virtual-dom.html"), "<html></html>").unwrap();
        fs::write(root.join("table/notes.txt"), "ignored").unwrap();

        fs::create_dir(root.join("animation")).unwrap();
        fs::write(root.join("animation/native.html"), "<html></html>").unwrap();

        fs::write(root.join("stray.html"), "ignored").unwrap();

        dir
    }

    #[test]
    fn test_discover_finds_html_pages_sorted() {
        let dir = fixture_tree();

        let scenarios = discover(dir.path()).unwrap();

        let found: Vec<(&str, &str)> = scenarios
            .iter()
            .map(|s| (s.name.as_str(), s.implementation.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("animation", "native"),
                ("table", "native"),
                ("table", "virtual-dom"),
            ]
        );
    }

    #[test]
    fn test_discover_missing_directory() {
        let result = discover(Path::new("/nonexistent/scenario/dir"));
        assert!(matches!(result, Err(ScenarioError::DirectoryNotFound(_))));
    }

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let scenarios = discover(dir.path()).unwrap();
        assert!(scenarios.is_empty());
    }

    #[test]
    fn test_file_url_is_absolute() {
        let dir = fixture_tree();
        let scenarios = discover(dir.path()).unwrap();

        let url = file_url(&scenarios[0].path).unwrap();

        assert!(url.starts_with("file:///"));
        assert!(url.ends_with("native.html"));
    }
}
