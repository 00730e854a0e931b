use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_PROGRAM: &str = "sbatch";

/// Something that can accept a job script.
///
/// Returns the submitter's standard output on success. Scripts are `OsStr`
/// because they embed file names verbatim.
pub trait Submit {
    fn submit(&mut self, script: &OsStr) -> Result<String>;
}

/// Pipes scripts into an `sbatch`-compatible command.
///
/// The command is spawned with no arguments and the script on stdin. Anything
/// written to stderr is treated as a failed submission; stdout is returned
/// as-is. Stdin is fed from a scoped thread while both output pipes are
/// drained, so a child that writes a lot before reading its input cannot
/// wedge either side. There is no timeout: a child that never exits blocks
/// the caller.
#[derive(Debug, Clone)]
pub struct Sbatch {
    program: OsString,
}

impl Default for Sbatch {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Sbatch {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Submit for Sbatch {
    fn submit(&mut self, script: &OsStr) -> Result<String> {
        let spawn_error = |source| Error::Spawn {
            program: self.program.to_string_lossy().into_owned(),
            source,
        };

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        debug!("Submission command running as pid {}", child.id());

        let stdin = child.stdin.take();
        let bytes = script.as_encoded_bytes();
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || feed_stdin(stdin, bytes));
            let output = child.wait_with_output();
            (writer.join(), output)
        });
        match written {
            Ok(result) => result?,
            Err(panic) => std::panic::resume_unwind(panic),
        }
        let output = output?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(status = ?output.status, stdout = %stdout.trim_end(), "Submission command finished");

        if !stderr.is_empty() {
            return Err(Error::Submission { stderr });
        }
        Ok(stdout)
    }
}

// Dropping stdin at the end gives the child a clean end of input. A child that
// exits without reading it still reports through stderr.
fn feed_stdin(stdin: Option<std::process::ChildStdin>, bytes: &[u8]) -> io::Result<()> {
    let Some(mut stdin) = stdin else {
        return Ok(());
    };
    match stdin.write_all(bytes) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Submission command closed stdin early");
            Ok(())
        }
        other => other,
    }
}
