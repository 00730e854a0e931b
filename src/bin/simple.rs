//! runpar-simple CLI entrypoint: one Slurm job per input file.

use clap::Parser;

use runpar::cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if cli::print_help_without_args::<cli::SimpleArgs>()? {
        return Ok(());
    }
    let args = cli::SimpleArgs::parse();
    cli::run_simple(args)
}
