use serde::{Deserialize, Serialize};

use crate::types::{MemoryClass, Variant};

pub const DEFAULT_PARTITION: &str = "glenn";
pub const DEFAULT_ACCOUNT: &str = "SNIC2014-1-183";
pub const DEFAULT_TIME: &str = "01:00:00";
pub const DEFAULT_JOB_NAME: &str = "sbatch";

/// Slurm and command parameters shared by every job of a run.
/// Read-only once a run starts; recorded verbatim in the JSON manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobParams {
    pub variant: Variant,
    /// Number of nodes (`-N`)
    pub nodes: u32,
    pub partition: String,
    pub account: String,
    /// Wall-clock limit as `HH:MM:SS`; passed through verbatim
    pub time: String,
    pub constraint: Option<MemoryClass>,
    /// Emitted as `-J` for stacked scripts only
    pub job_name: String,
    /// Command line with `{query}` placeholders
    pub call: String,
    /// Files per job; always 1 for the simple variant
    pub stack: usize,
}

impl Default for JobParams {
    fn default() -> Self {
        Self {
            variant: Variant::Stacked,
            nodes: 1,
            partition: DEFAULT_PARTITION.to_string(),
            account: DEFAULT_ACCOUNT.to_string(),
            time: DEFAULT_TIME.to_string(),
            constraint: None,
            job_name: DEFAULT_JOB_NAME.to_string(),
            call: String::new(),
            stack: 1,
        }
    }
}

impl JobParams {
    /// Files taken per generated script.
    pub fn group_size(&self) -> usize {
        match self.variant {
            Variant::Simple => 1,
            Variant::Stacked => self.stack,
        }
    }
}
