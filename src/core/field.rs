//! Resolver argument descriptors.

/// A single resolver argument parsed from a `name:type` token.
///
/// The type is kept verbatim. No GraphQL type grammar is checked, so
/// `ids:[ID!]!` yields the type `[ID!]!` and a bare `foo` yields an empty type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    field_type: String,
}

impl FieldSpec {
    /// Parses a field token, splitting on the first `:`.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphql_alchemist::core::FieldSpec;
    ///
    /// let field = FieldSpec::parse("id:ID!");
    /// assert_eq!(field.name(), "id");
    /// assert_eq!(field.field_type(), "ID!");
    ///
    /// let bare = FieldSpec::parse("limit");
    /// assert_eq!(bare.name(), "limit");
    /// assert_eq!(bare.field_type(), "");
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let (name, field_type) = token.split_once(':').unwrap_or((token, ""));
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
        }
    }

    /// Returns the argument name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the argument type, empty when the token had no `:`.
    #[must_use]
    pub fn field_type(&self) -> &str {
        &self.field_type
    }
}
