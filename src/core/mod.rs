//! Resolver definition parsing and code generation.
//!
//! A parse pass runs in a fixed order:
//!
//! 1. collect flags ([`FlagSet::collect`]) and stop early on `-h`/`--help`
//! 2. extract the name ([`extract_name`])
//! 3. apply boolean and kind flags through the [`AliasMap`] ([`FlagParser`])
//! 4. parse the `--args` sub-list ([`parse_arguments`])
//!
//! Every error surfaces before [`CodeEmitter`] is reached.

pub mod alias;
pub mod arguments;
pub mod definition;
pub mod emitter;
pub mod field;
pub mod flags;

pub use alias::{AliasMap, Handler};
pub use arguments::{argument_tokens, parse_arguments};
pub use definition::{ResolverDefinition, ResolverKind};
pub use emitter::{CodeEmitter, render};
pub use field::FieldSpec;
pub use flags::{FlagParser, FlagSet, extract_name, validate_name};

use tracing::debug;

use crate::error::ParseError;

/// What a `resolver` token list asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the resolver usage and do nothing else.
    Help,
    /// Generate the described resolver.
    Generate(ResolverDefinition),
}

/// Parses the tokens of a `resolver` command.
///
/// The leading command word may be included; it is not flag-shaped and is
/// skipped like any other plain token.
///
/// # Errors
///
/// Returns [`ParseError::MissingName`] if no name is given,
/// [`ParseError::InvalidName`] for a name that is not a plain file name, and
/// [`ParseError::UnknownFlag`] for an unregistered flag spelling.
///
/// # Examples
///
/// ```
/// use graphql_alchemist::core::{Invocation, ResolverKind, parse_invocation};
///
/// let Ok(Invocation::Generate(def)) =
///     parse_invocation(&["resolver", "-n", "addUser", "-am", "--args", "name:String!"])
/// else {
///     panic!("expected a definition");
/// };
/// assert_eq!(def.name, "addUser");
/// assert_eq!(def.kind, ResolverKind::Mutation);
/// assert!(def.is_async);
/// assert_eq!(def.arguments[0].field_type(), "String!");
/// ```
pub fn parse_invocation<S: AsRef<str>>(tokens: &[S]) -> Result<Invocation, ParseError> {
    let flags = FlagSet::collect(tokens);
    if flags.requests_help() {
        return Ok(Invocation::Help);
    }

    let mut definition = ResolverDefinition::named(extract_name(tokens)?);
    FlagParser::default().apply(&flags, &mut definition)?;
    definition.arguments = parse_arguments(tokens);

    debug!(
        name = %definition.name,
        kind = %definition.kind,
        arguments = definition.arguments.len(),
        "parsed resolver definition"
    );
    Ok(Invocation::Generate(definition))
}
