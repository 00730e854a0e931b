//! Shared types and enums used across runpar.
//! Includes the Slurm node memory class (`MemoryClass`) and the script
//! flavour selector (`Variant`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Node memory size, passed to Slurm as a `-C` constraint.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum MemoryClass {
    #[value(name = "SMALLMEM")]
    #[serde(rename = "SMALLMEM")]
    SmallMem,
    #[value(name = "BIGMEM")]
    #[serde(rename = "BIGMEM")]
    BigMem,
    #[value(name = "HUGEMEM")]
    #[serde(rename = "HUGEMEM")]
    HugeMem,
}

impl MemoryClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryClass::SmallMem => "SMALLMEM",
            MemoryClass::BigMem => "BIGMEM",
            MemoryClass::HugeMem => "HUGEMEM",
        }
    }
}

impl std::fmt::Display for MemoryClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which script layout to generate.
///
/// `Simple` emits one file per job and never writes a `-J` directive.
/// `Stacked` groups up to `stack` files per job and always names the job.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Variant {
    Simple,
    Stacked,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Simple => write!(f, "Simple"),
            Variant::Stacked => write!(f, "Stacked"),
        }
    }
}
