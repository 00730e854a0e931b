//! `{query}` substitution for command templates.
//!
//! Templates follow the usual brace-format rules: `{query}` is replaced by the
//! file name, `{{` and `}}` produce literal braces, and anything else inside
//! braces (other names, positional `{}`, conversions like `{query!s}`, format
//! specs like `{query:>20}`) is rejected up front so that a bad template fails
//! before any job is submitted.
//!
//! File names are substituted as opaque `OsStr` data, so names that are not
//! valid UTF-8 reach the job script byte for byte.
use std::ffi::{OsStr, OsString};

use thiserror::Error;

pub const PLACEHOLDER: &str = "query";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("single '{{' encountered in format string at byte {pos}")]
    UnmatchedOpen { pos: usize },

    #[error("single '}}' encountered in format string at byte {pos}")]
    UnmatchedClose { pos: usize },

    #[error("unknown placeholder '{{{name}}}' at byte {pos}; only '{{query}}' is supported")]
    UnknownPlaceholder { name: String, pos: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Query,
}

/// A parsed command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    segments: Vec<Segment>,
}

impl CommandTemplate {
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' => {
                    if matches!(chars.peek(), Some((_, '{'))) {
                        chars.next();
                        literal.push('{');
                        continue;
                    }
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(TemplateError::UnmatchedOpen { pos });
                    }
                    if name != PLACEHOLDER {
                        return Err(TemplateError::UnknownPlaceholder { name, pos });
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Query);
                }
                '}' => {
                    if matches!(chars.peek(), Some((_, '}'))) {
                        chars.next();
                        literal.push('}');
                    } else {
                        return Err(TemplateError::UnmatchedClose { pos });
                    }
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    pub fn has_placeholder(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Query))
    }

    /// Substitute `query` into every placeholder.
    pub fn render(&self, query: impl AsRef<OsStr>) -> OsString {
        let query = query.as_ref();
        let mut out = OsString::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push(text),
                Segment::Query => out.push(query),
            }
        }
        out
    }
}
