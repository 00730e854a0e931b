use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};

use clap::CommandFactory;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::api::{BatchReport, status_line, submit_all};
use crate::core::params::JobParams;
use crate::core::script::ScriptGenerator;
use crate::io::sbatch::{Sbatch, Submit};

use super::args::{CliArgs, RunArgs, SimpleArgs};
use super::errors::AppError;

/// Print usage and report `true` when the process got no arguments at all.
pub fn print_help_without_args<P: CommandFactory>() -> io::Result<bool> {
    if std::env::args_os().len() > 1 {
        return Ok(false);
    }
    P::command().print_help()?;
    Ok(true)
}

fn init_logging(enabled: bool) {
    if enabled {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    launch(args.job_params(), args.query, &args.run)
}

pub fn run_simple(args: SimpleArgs) -> Result<(), Box<dyn std::error::Error>> {
    launch(args.job_params(), args.query, &args.run)
}

fn launch(
    params: JobParams,
    files: Vec<OsString>,
    run: &RunArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(run.log);
    let mut sbatch = Sbatch::new(&run.sbatch);
    execute(params, files, run, &mut sbatch, &mut io::stdout())?;
    Ok(())
}

/// Generate and submit (or print, with `--dry-run`) every job of a run.
///
/// Status lines go to `out` as each submission is accepted, so earlier
/// confirmations survive a later failure. The manifest, when requested, is
/// written even if the loop stops early.
pub fn execute<W: Write>(
    params: JobParams,
    files: Vec<OsString>,
    run: &RunArgs,
    submitter: &mut dyn Submit,
    out: &mut W,
) -> Result<(), AppError> {
    if let Some(manifest) = &run.manifest {
        if let Some(dir) = manifest.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.is_dir() {
                return Err(AppError::ManifestDir {
                    path: dir.to_path_buf(),
                });
            }
        }
    }

    let scripts = ScriptGenerator::new(params.clone(), files)?;
    if !params.call.is_empty() && !scripts.template().has_placeholder() {
        warn!("--call does not contain {{query}}; every job will run the same command");
    }

    info!(
        "Preparing {} {} job(s) on partition {}",
        scripts.len(),
        params.variant,
        params.partition
    );

    if run.dry_run {
        for (i, script) in scripts.enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            out.write_all(script.text.as_encoded_bytes())?;
            writeln!(out)?;
        }
        return Ok(());
    }

    let mut report = BatchReport::new(&params);
    let mut write_error = None;
    let outcome = submit_all(scripts, submitter, &mut report, |job| {
        if let Err(e) = writeln!(out, "{}", status_line(&job.files)) {
            write_error.get_or_insert(e);
        }
    });

    if let Some(manifest) = &run.manifest {
        fs::write(manifest, report.to_json()?)?;
        info!("Wrote manifest for {} job(s) to {:?}", report.jobs.len(), manifest);
    }

    outcome?;
    if let Some(e) = write_error {
        return Err(e.into());
    }
    info!(
        "Submitted {} job(s) covering {} file(s)",
        report.jobs.len(),
        report.submitted_files()
    );
    Ok(())
}
