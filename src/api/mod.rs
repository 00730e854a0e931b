//! High-level library API: submit every script a generator produces, format
//! status lines, and collect a serializable report. Prefer these entrypoints
//! over the low-level `core` and `io` modules when embedding runpar.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::params::JobParams;
use crate::core::script::{SbatchScript, ScriptGenerator};
use crate::error::Result;
use crate::io::sbatch::Submit;

/// One accepted submission.
///
/// Names and script text are stored as display strings: anything that is not
/// valid UTF-8 shows up with replacement characters here, while the scheduler
/// still received the original bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedJob {
    pub files: Vec<String>,
    pub script: String,
    /// Trimmed stdout of the submission command
    pub response: String,
    pub submitted_at: DateTime<Utc>,
}

/// Summary of a run, in submission order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub params: Option<JobParams>,
    pub jobs: Vec<SubmittedJob>,
}

impl BatchReport {
    pub fn new(params: &JobParams) -> Self {
        Self {
            params: Some(params.clone()),
            jobs: Vec::new(),
        }
    }

    pub fn submitted_files(&self) -> usize {
        self.jobs.iter().map(|j| j.files.len()).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Confirmation line printed after a successful submission.
pub fn status_line(files: &[String]) -> String {
    let quoted = files
        .iter()
        .map(|f| format!("'{f}'"))
        .collect::<Vec<_>>()
        .join(", ");
    if files.len() == 1 {
        format!("Submitted Slurm job for: {quoted}")
    } else {
        format!(
            "Submitted stacked Slurm job for {} files: {quoted}",
            files.len()
        )
    }
}

/// Submit every script in generation order.
///
/// `on_submitted` runs after each accepted submission. The first failure is
/// returned immediately: no further scripts are generated, and the jobs
/// already recorded in `report` stay submitted.
pub fn submit_all<S, F>(
    scripts: ScriptGenerator,
    submitter: &mut S,
    report: &mut BatchReport,
    mut on_submitted: F,
) -> Result<()>
where
    S: Submit + ?Sized,
    F: FnMut(&SubmittedJob),
{
    for SbatchScript { text, files } in scripts {
        let response = submitter.submit(&text)?;
        info!("Submitted {} file(s): {}", files.len(), response.trim());

        let job = SubmittedJob {
            files: files
                .iter()
                .map(|f| f.to_string_lossy().into_owned())
                .collect(),
            script: text.to_string_lossy().into_owned(),
            response: response.trim().to_string(),
            submitted_at: Utc::now(),
        };
        on_submitted(&job);
        report.jobs.push(job);
    }
    Ok(())
}
