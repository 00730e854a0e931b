use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::params::{DEFAULT_ACCOUNT, DEFAULT_JOB_NAME, DEFAULT_PARTITION, DEFAULT_TIME};
use crate::io::sbatch::DEFAULT_PROGRAM;
use crate::{JobParams, MemoryClass, Variant};

/// Slurm directives common to both binaries.
#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "SLURM")]
pub struct SlurmArgs {
    /// Number of nodes. Change if you're running MPI
    #[arg(short = 'N', long = "nodes", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub nodes: u32,

    /// Slurm partition
    #[arg(short = 'p', long, default_value = DEFAULT_PARTITION)]
    pub partition: String,

    /// Slurm account
    #[arg(short = 'A', long, default_value = DEFAULT_ACCOUNT)]
    pub account: String,

    /// Max runtime per job (HH:MM:SS)
    #[arg(short = 't', long, default_value = DEFAULT_TIME)]
    pub time: String,

    /// Node memory size [default: let Slurm decide]
    #[arg(short = 'C', long, value_enum)]
    pub constraint: Option<MemoryClass>,
}

/// Execution options common to both binaries.
#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "EXECUTION")]
pub struct RunArgs {
    /// Submission command; receives each script on stdin
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    pub sbatch: String,

    /// Print the generated scripts instead of submitting them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Write a JSON report of accepted submissions to this path
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Enable logging to stderr (filter with RUST_LOG)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

/// Run a program on many files as Slurm jobs, stacking several files per job
#[derive(Parser, Debug)]
#[command(name = "runpar", version)]
pub struct CliArgs {
    #[command(flatten)]
    pub slurm: SlurmArgs,

    /// Slurm job name
    #[arg(short = 'J', long = "job-name", default_value = DEFAULT_JOB_NAME,
          help_heading = "SLURM")]
    pub job_name: String,

    /// Program and arguments in a single quoted string, e.g.
    /// 'blat dbfile.fasta {query} -t=dnax q=prot {query}.blast8'.
    /// {query} is substituted for each FILE
    #[arg(long, required = true, value_parser = NonEmptyStringValueParser::new(),
          help_heading = "PROGRAM")]
    pub call: String,

    /// Number of files to run sequentially in each Slurm job
    #[arg(long, default_value_t = 1,
          value_parser = clap::value_parser!(u64).range(1..), help_heading = "PROGRAM")]
    pub stack: u64,

    /// Query file(s); passed through verbatim, even if not UTF-8
    #[arg(value_name = "FILE", required = true, num_args = 1..,
          value_parser = clap::value_parser!(OsString))]
    pub query: Vec<OsString>,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Run a program on many files as Slurm jobs, one file per job
#[derive(Parser, Debug)]
#[command(name = "runpar-simple", version)]
pub struct SimpleArgs {
    #[command(flatten)]
    pub slurm: SlurmArgs,

    /// Program and arguments in a single quoted string, e.g.
    /// 'blat dbfile.fasta {query} -t=dnax q=prot {query}.blast8'.
    /// {query} is substituted for each FILE (one file per Slurm job)
    #[arg(long, default_value = "", help_heading = "PROGRAM")]
    pub call: String,

    /// Query file(s); passed through verbatim, even if not UTF-8
    #[arg(value_name = "FILE", required = true, num_args = 1..,
          value_parser = clap::value_parser!(OsString))]
    pub query: Vec<OsString>,

    #[command(flatten)]
    pub run: RunArgs,
}

impl SlurmArgs {
    fn job_params(&self, variant: Variant, call: &str) -> JobParams {
        JobParams {
            variant,
            nodes: self.nodes,
            partition: self.partition.clone(),
            account: self.account.clone(),
            time: self.time.clone(),
            constraint: self.constraint,
            call: call.to_string(),
            ..JobParams::default()
        }
    }
}

impl CliArgs {
    pub fn job_params(&self) -> JobParams {
        JobParams {
            job_name: self.job_name.clone(),
            stack: usize::try_from(self.stack).unwrap_or(usize::MAX),
            ..self.slurm.job_params(Variant::Stacked, &self.call)
        }
    }
}

impl SimpleArgs {
    pub fn job_params(&self) -> JobParams {
        self.slurm.job_params(Variant::Simple, &self.call)
    }
}
