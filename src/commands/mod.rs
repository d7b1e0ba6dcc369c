//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod preflight;
pub mod run;

// Re-export main command functions
pub use preflight::{execute_preflight, PreflightArgs};
pub use run::{execute_run, validate_args, RunArgs};
