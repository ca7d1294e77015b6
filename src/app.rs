//! Running a `resolver` invocation end to end.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::RESOLVER_USAGE;
use crate::core::{CodeEmitter, Invocation, parse_invocation};
use crate::error::ParseError;
use crate::fs::{OutputPaths, OutputSink};

/// How a `resolver` invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A resolver file was written to this path.
    Generated(PathBuf),
    /// Usage was printed; nothing else happened.
    Help,
    /// The flags were rejected before anything was written.
    Rejected(ParseError),
}

impl Outcome {
    /// Returns `true` unless the flags were rejected.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Parses `tokens`, then either prints usage, reports a parse error, or
/// emits the resolver into `sink`.
///
/// Parse errors go to `err` (with usage when the name is missing) and come
/// back as [`Outcome::Rejected`]; the sink is untouched in that case.
///
/// # Errors
///
/// Returns an error only if `out`, `err`, or the sink cannot be written.
pub fn run_resolver<S: AsRef<str>>(
    tokens: &[S],
    paths: OutputPaths,
    sink: &mut dyn OutputSink,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome> {
    match parse_invocation(tokens) {
        Ok(Invocation::Help) => {
            write!(out, "{RESOLVER_USAGE}").context("Failed to print usage")?;
            Ok(Outcome::Help)
        }
        Ok(Invocation::Generate(definition)) => {
            let path = CodeEmitter::new(paths).emit(&definition, sink, out)?;
            Ok(Outcome::Generated(path))
        }
        Err(parse_error) => {
            debug!(error = %parse_error, "rejected resolver flags");
            writeln!(err, "Error: {parse_error}").context("Failed to print error")?;
            if parse_error.shows_usage() {
                write!(err, "\n{RESOLVER_USAGE}").context("Failed to print usage")?;
            }
            Ok(Outcome::Rejected(parse_error))
        }
    }
}
