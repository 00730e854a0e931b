#![doc = r#"
runpar — run one command over many input files as Slurm jobs.

Each input file name is substituted into a command template (`{query}`), the
result is wrapped in an `sbatch` script, and the script is piped into the
scheduler's submission command. Several files can be stacked into a single
job, in which case the job script runs one command line per file.

Quick start: submit stacked jobs
--------------------------------
```rust,no_run
use runpar::{BatchReport, JobParams, Sbatch, ScriptGenerator, status_line, submit_all};

fn main() -> runpar::Result<()> {
    let params = JobParams {
        call: "gzip -9 {query}".to_string(),
        stack: 4,
        ..JobParams::default()
    };
    let files = vec!["a.fastq".to_string(), "b.fastq".to_string()];

    let scripts = ScriptGenerator::new(params.clone(), files)?;
    let mut report = BatchReport::new(&params);
    submit_all(scripts, &mut Sbatch::default(), &mut report, |job| {
        println!("{}", status_line(&job.files))
    })
}
```

Render without submitting
-------------------------
```rust
use runpar::{JobParams, ScriptGenerator, Variant};

let params = JobParams {
    variant: Variant::Simple,
    call: "echo {query}".to_string(),
    ..JobParams::default()
};
let scripts: Vec<_> = ScriptGenerator::new(params, vec!["a.txt".to_string()])
    .unwrap()
    .collect();
assert!(scripts[0].text.to_str().unwrap().ends_with("echo a.txt"));
```

Error handling
--------------
All public functions return `runpar::Result<T>`; match on `runpar::Error` to tell
template problems apart from rejected submissions.

Useful modules
--------------
- [`api`] — driver loop, status lines and the JSON batch report.
- [`core`] — job parameters, template parsing and script generation.
- [`io`] — the `Submit` seam and the `sbatch` process adapter.
- [`cli`] — argument parsing and runners shared by both binaries.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use core::params::JobParams;
pub use core::script::{SbatchScript, ScriptGenerator};
pub use core::template::{CommandTemplate, TemplateError};
pub use error::{Error, Result};
pub use types::{MemoryClass, Variant};

// Submission
pub use io::sbatch::{Sbatch, Submit};

// High-level API re-exports
pub use api::{BatchReport, SubmittedJob, status_line, submit_all};
