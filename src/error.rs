//! Error types for resolver flag parsing.
//!
//! Parse failures are raised before anything is written, so a caller that
//! receives a [`ParseError`] can be sure no output file was touched.

use thiserror::Error;

/// Failures raised while turning flag tokens into a resolver definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Neither `-n` nor `--name` was given, or it had no usable value.
    #[error("a resolver name must be defined with -n or --name")]
    MissingName,
    /// A name that cannot be both a function name and a file name.
    #[error("invalid resolver name: {0:?} (path separators and `..` are not allowed)")]
    InvalidName(String),
    /// A flag spelling that no handler is registered under.
    #[error("unrecognized flag: {}", display_flag(.0))]
    UnknownFlag(String),
}

impl ParseError {
    /// Returns `true` if usage text should accompany this error.
    #[must_use]
    pub const fn shows_usage(&self) -> bool {
        matches!(self, Self::MissingName)
    }
}

/// Renders a spelling with the dashes the user would have typed.
fn display_flag(spelling: &str) -> String {
    if spelling.chars().count() == 1 {
        format!("-{spelling}")
    } else {
        format!("--{spelling}")
    }
}
