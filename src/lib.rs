//! Renderbench
//!
//! Browser rendering benchmark harness: drives headless Chrome through a
//! set of scenario pages, aggregates performance-trace timings per
//! rendering phase, and emits an HTML report.
//!
//! This crate provides the core implementation for the
//! `renderbench` CLI tool.
//!
//! ## Getting Started
//!
//! Start chromedriver, lay out scenario pages as
//! `scenarios/<scenario>/<implementation>.html`, then:
//!
//! ```bash
//! renderbench preflight
//! renderbench run --runs 3 --save baseline
//! ```

pub mod aggregator;
pub mod commands;
pub mod driver;
pub mod parser;
pub mod report;
pub mod scenarios;
pub mod utils;
