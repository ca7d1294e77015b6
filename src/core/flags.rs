//! Flag tokenizing and dispatch.
//!
//! ## Token shapes
//!
//! - `-xyz` (dash then a word character): a cluster of short flags. Every
//!   character after the dash is its own flag, so `-pi` equals `-p -i`.
//! - `--word` (two dashes then a word character): one long flag.
//! - Anything else (the command word, the name value, `--args` entries, a
//!   lone `-`) is not a flag.
//!
//! `-n`/`--name` and `--args` take values and are handled separately, so the
//! exact tokens `-n`, `--name`, and `--args` never reach the [`AliasMap`].
//!
//! ## Evaluation order
//!
//! All short flags are applied first, then all long flags, each batch in
//! input order. Where flags conflict (the kind selectors) the last one applied
//! wins, so `-m --query` selects `Query` while `--query -m` also selects
//! `Query`.

use tracing::debug;

use super::alias::{AliasMap, Handler};
use super::definition::ResolverDefinition;
use crate::error::ParseError;

/// Short spelling of the name flag, as typed.
pub const NAME_SHORT: &str = "-n";
/// Long spelling of the name flag, as typed.
pub const NAME_LONG: &str = "--name";
/// The flag introducing the argument sub-list.
pub const ARGS_FLAG: &str = "--args";

const HELP_SHORT: char = 'h';
const HELP_LONG: &str = "help";

/// Matches the `\w` class: ASCII letters, digits and underscore.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns the characters after the dash if `token` is a short-flag cluster.
fn short_cluster(token: &str) -> Option<&str> {
    let rest = token.strip_prefix('-')?;
    rest.chars().next().filter(|c| is_word_char(*c))?;
    Some(rest)
}

/// Returns the word after the dashes if `token` is a long flag.
fn long_word(token: &str) -> Option<&str> {
    let rest = token.strip_prefix("--")?;
    rest.chars().next().filter(|c| is_word_char(*c))?;
    Some(rest)
}

/// Extracts the resolver name from the token after the first `-n`/`--name`.
///
/// # Errors
///
/// Returns [`ParseError::MissingName`] if no name flag is present, if it is
/// the last token, or if the following token is empty or itself a flag.
/// Returns [`ParseError::InvalidName`] if the value fails [`validate_name`].
pub fn extract_name<S: AsRef<str>>(tokens: &[S]) -> Result<String, ParseError> {
    let position = tokens
        .iter()
        .position(|t| matches!(t.as_ref(), NAME_SHORT | NAME_LONG))
        .ok_or(ParseError::MissingName)?;

    let name = tokens
        .get(position + 1)
        .map(AsRef::as_ref)
        .filter(|value| !value.is_empty() && !value.starts_with('-'))
        .ok_or(ParseError::MissingName)?;
    validate_name(name)?;
    Ok(name.to_string())
}

/// Checks that a name stays a single file inside the resolver directory.
///
/// # Errors
///
/// Returns [`ParseError::MissingName`] for an empty name and
/// [`ParseError::InvalidName`] for a name containing `/` or `\`, or one
/// that is `.` or `..`.
pub fn validate_name(name: &str) -> Result<(), ParseError> {
    if name.is_empty() {
        return Err(ParseError::MissingName);
    }
    if name.contains(['/', '\\']) || matches!(name, "." | "..") {
        return Err(ParseError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Flags found in a token list, split into the short and long batches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    /// Individual short-flag characters, in input order.
    pub short: Vec<char>,
    /// Long-flag words without dashes, in input order.
    pub long: Vec<String>,
}

impl FlagSet {
    /// Collects every flag-shaped token, skipping the value-taking flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphql_alchemist::core::FlagSet;
    ///
    /// let flags = FlagSet::collect(&["resolver", "-n", "greet", "-pi", "--async"]);
    /// assert_eq!(flags.short, vec!['p', 'i']);
    /// assert_eq!(flags.long, vec!["async".to_string()]);
    /// ```
    #[must_use]
    pub fn collect<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut flags = Self::default();
        for token in tokens.iter().map(AsRef::as_ref) {
            if token == NAME_SHORT {
                continue;
            }
            if let Some(cluster) = short_cluster(token) {
                flags.short.extend(cluster.chars());
            } else if token != NAME_LONG
                && token != ARGS_FLAG
                && let Some(word) = long_word(token)
            {
                flags.long.push(word.to_string());
            }
        }
        flags
    }

    /// Returns `true` if `-h` (alone or clustered) or `--help` was given.
    #[must_use]
    pub fn requests_help(&self) -> bool {
        self.short.contains(&HELP_SHORT) || self.long.iter().any(|w| w == HELP_LONG)
    }

    /// Resolves every flag to its handler: short batch first, then long.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownFlag`] for the first spelling that has
    /// no handler.
    pub fn resolve(&self, aliases: &AliasMap) -> Result<Vec<Handler>, ParseError> {
        let shorts = self.short.iter().map(|c| aliases.resolve(&c.to_string()));
        let longs = self.long.iter().map(|w| aliases.resolve(w));
        shorts.chain(longs).collect()
    }
}

/// Applies boolean and kind flags to a [`ResolverDefinition`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagParser {
    aliases: AliasMap,
}

impl FlagParser {
    /// Creates a parser over the given alias table.
    #[must_use]
    pub const fn new(aliases: AliasMap) -> Self {
        Self { aliases }
    }

    /// Resolves every flag in `flags` and applies them to `definition`.
    ///
    /// Nothing is applied if any flag is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownFlag`] naming the offending spelling.
    pub fn apply(
        &self,
        flags: &FlagSet,
        definition: &mut ResolverDefinition,
    ) -> Result<(), ParseError> {
        let handlers = flags.resolve(&self.aliases)?;
        for handler in handlers {
            debug!(?handler, "applying flag");
            definition.apply(handler);
        }
        Ok(())
    }
}
