//! I/O layer for handing job scripts to the scheduler.
//! Provides the `Submit` seam and the `sbatch` process adapter.
pub mod sbatch;
pub use sbatch::{Sbatch, Submit};
