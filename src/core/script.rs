//! sbatch script rendering and the file-grouping generator.
use std::collections::VecDeque;
use std::ffi::OsString;

use tracing::debug;

use crate::core::params::JobParams;
use crate::core::template::CommandTemplate;
use crate::error::Result;
use crate::types::Variant;

pub const SHEBANG: &str = "#!/usr/bin/env bash";

/// A rendered job script together with the input files it covers.
///
/// File names are kept as `OsString` so they reach the script unchanged even
/// when they are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbatchScript {
    pub text: OsString,
    pub files: Vec<OsString>,
}

/// Directive block in the fixed `-N -p -A -t [-C] [-J]` order.
pub fn directive_lines(params: &JobParams) -> Vec<String> {
    let mut lines = vec![
        SHEBANG.to_string(),
        format!("#SBATCH -N {}", params.nodes),
        format!("#SBATCH -p {}", params.partition),
        format!("#SBATCH -A {}", params.account),
        format!("#SBATCH -t {}", params.time),
    ];
    if let Some(constraint) = params.constraint {
        lines.push(format!("#SBATCH -C {}", constraint));
    }
    if params.variant == Variant::Stacked {
        lines.push(format!("#SBATCH -J {}", params.job_name));
    }
    lines
}

/// Lazily turns a queue of input files into scripts.
///
/// Each call to `next` pops up to `group_size` files off the front of the
/// queue, so every file lands in exactly one script and order is preserved.
/// Once drained the generator stays empty.
#[derive(Debug)]
pub struct ScriptGenerator {
    params: JobParams,
    template: CommandTemplate,
    queue: VecDeque<OsString>,
}

impl ScriptGenerator {
    /// Parses the command template eagerly so a malformed one fails before
    /// the first script is produced.
    pub fn new<I>(params: JobParams, files: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let template = CommandTemplate::parse(&params.call)?;
        Ok(Self {
            params,
            template,
            queue: files.into_iter().map(Into::into).collect(),
        })
    }

    pub fn template(&self) -> &CommandTemplate {
        &self.template
    }

    /// Files not yet handed out.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Iterator for ScriptGenerator {
    type Item = SbatchScript;

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            return None;
        }
        let take = self.params.group_size().max(1).min(self.queue.len());
        let files: Vec<OsString> = self.queue.drain(..take).collect();

        let mut text = OsString::from(directive_lines(&self.params).join("\n"));
        for file in &files {
            text.push("\n");
            text.push(self.template.render(file));
        }
        debug!(
            "Generated script for {} file(s):\n{}",
            files.len(),
            text.to_string_lossy()
        );

        Some(SbatchScript { text, files })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.queue.len().div_ceil(self.params.group_size().max(1));
        (n, Some(n))
    }
}

impl ExactSizeIterator for ScriptGenerator {}
