//! Command Line Interface (CLI) layer for runpar.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) shared by the stacking `runpar`
//! binary and the one-file-per-job `runpar-simple` binary.
//!
//! If you are embedding runpar into another application, prefer using
//! the high-level `runpar::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::{CliArgs, SimpleArgs};
pub use runner::{print_help_without_args, run, run_simple};
