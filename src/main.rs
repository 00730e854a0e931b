//! runpar CLI entrypoint (stacking variant).
//!
//! Thin wrapper over the `cli` module: print usage when called bare, parse
//! args, then generate and submit the jobs. Exits non-zero on the first
//! failed submission. For programmatic use, prefer `runpar::api`.

use clap::Parser;

use runpar::cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if cli::print_help_without_args::<cli::CliArgs>()? {
        return Ok(());
    }
    let args = cli::CliArgs::parse();
    cli::run(args)
}
