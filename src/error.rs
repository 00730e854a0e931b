//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, template and JSON errors, and provides semantic variants
//! for spawn and submission failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] crate::core::template::TemplateError),

    #[error("Failed to run submission command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("sbatch error: {stderr}")]
    Submission { stderr: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
