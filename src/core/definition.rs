//! The in-memory resolver record that flags are applied to.

use std::fmt;

use super::alias::Handler;
use super::field::FieldSpec;

/// GraphQL root operation type a resolver belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverKind {
    /// Read operation.
    #[default]
    Query,
    /// Write operation.
    Mutation,
    /// Streaming operation.
    Subscription,
}

impl ResolverKind {
    /// Returns the GraphQL root type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything needed to render one resolver.
///
/// Built up during a single parse pass: boolean flags only ever switch on,
/// and the kind follows the last kind flag applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolverDefinition {
    /// Function name, also used for the output file name.
    pub name: String,
    /// Root operation type.
    pub kind: ResolverKind,
    /// Whether the function is declared `async`.
    pub is_async: bool,
    /// Whether the `parent` parameter is used.
    pub has_parent: bool,
    /// Whether the `info` parameter is used.
    pub has_info: bool,
    /// Arguments in the order they were given.
    pub arguments: Vec<FieldSpec>,
}

impl ResolverDefinition {
    /// Creates a definition with the given name and default settings.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Applies the mutation a flag handler stands for.
    pub fn apply(&mut self, handler: Handler) {
        match handler {
            Handler::Parent => self.has_parent = true,
            Handler::Info => self.has_info = true,
            Handler::Async => self.is_async = true,
            Handler::Query => self.kind = ResolverKind::Query,
            Handler::Mutation => self.kind = ResolverKind::Mutation,
            Handler::Subscription => self.kind = ResolverKind::Subscription,
        }
    }

    /// Parameter name for the parent slot, `_parent` when unused.
    #[must_use]
    pub const fn parent_param(&self) -> &'static str {
        if self.has_parent { "parent" } else { "_parent" }
    }

    /// Parameter name for the info slot, `_info` when unused.
    #[must_use]
    pub const fn info_param(&self) -> &'static str {
        if self.has_info { "info" } else { "_info" }
    }

    /// One-line summary, e.g. `Mutation createUser`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} {}", self.kind, self.name)
    }
}
