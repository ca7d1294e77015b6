//! Flag spellings and the handlers they dispatch to.
//!
//! Every mutation a flag can apply to a [`ResolverDefinition`] is a
//! [`Handler`] variant. The [`AliasMap`] is a static table from spelling to
//! handler, so `-a` and `--async` land on the same variant and dispatch is a
//! plain `match` rather than a lookup by method name.
//!
//! [`ResolverDefinition`]: crate::core::ResolverDefinition

use crate::error::ParseError;

/// A mutation that a boolean or kind-selecting flag applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    /// Enables the `parent` parameter.
    Parent,
    /// Enables the `info` parameter.
    Info,
    /// Declares the resolver as an `async function`.
    Async,
    /// Selects the `Query` kind.
    Query,
    /// Selects the `Mutation` kind.
    Mutation,
    /// Selects the `Subscription` kind.
    Subscription,
}

impl Handler {
    /// Returns the canonical long spelling (without dashes).
    #[must_use]
    pub const fn long(&self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Info => "info",
            Self::Async => "async",
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    /// Returns the single-character short spelling.
    #[must_use]
    pub const fn short(&self) -> char {
        match self {
            Self::Parent => 'p',
            Self::Info => 'i',
            Self::Async => 'a',
            Self::Query => 'q',
            Self::Mutation => 'm',
            Self::Subscription => 's',
        }
    }
}

/// Static spelling table, built once at compile time.
const ALIASES: &[(&str, Handler)] = &[
    ("p", Handler::Parent),
    ("parent", Handler::Parent),
    ("i", Handler::Info),
    ("info", Handler::Info),
    ("a", Handler::Async),
    ("async", Handler::Async),
    ("q", Handler::Query),
    ("query", Handler::Query),
    ("m", Handler::Mutation),
    ("mutation", Handler::Mutation),
    ("s", Handler::Subscription),
    ("subscription", Handler::Subscription),
];

/// Many-to-one mapping from flag spelling to [`Handler`].
///
/// Spellings are stored without leading dashes. Short flags are looked up by
/// their single character, long flags by their word.
#[derive(Debug, Clone, Copy)]
pub struct AliasMap {
    entries: &'static [(&'static str, Handler)],
}

impl AliasMap {
    /// Returns the built-in alias table.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { entries: ALIASES }
    }

    /// Finds the handler for a spelling.
    ///
    /// Returns `None` if the spelling is not registered.
    #[must_use]
    pub fn lookup(&self, spelling: &str) -> Option<Handler> {
        self.entries
            .iter()
            .find(|(alias, _)| *alias == spelling)
            .map(|(_, handler)| *handler)
    }

    /// Resolves a spelling, failing with [`ParseError::UnknownFlag`] when absent.
    ///
    /// # Errors
    ///
    /// Returns `UnknownFlag` carrying the spelling if no handler is registered.
    pub fn resolve(&self, spelling: &str) -> Result<Handler, ParseError> {
        self.lookup(spelling)
            .ok_or_else(|| ParseError::UnknownFlag(spelling.to_string()))
    }
}

impl Default for AliasMap {
    fn default() -> Self {
        Self::builtin()
    }
}
