use courier_pg::Schema;

/// Longest identifier PostgreSQL keeps without truncation (NAMEDATALEN - 1).
pub const MAX_IDENTIFIER: usize = 63;

/// One table and the statement that creates it.
///
/// Immutable once built. The creation statement is opaque to the
/// bootstrapper; it is handed to the store verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    name: String,
    creates: String,
}

impl TableSpec {
    pub fn new(name: impl Into<String>, creates: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            creates: creates.into(),
        }
    }
    /// Builds from a [`Schema`], running its indices in the same batch.
    pub fn of<S: Schema>() -> Self {
        let creates = match S::indices() {
            "" => S::creates().to_string(),
            indices => format!("{}\n{}", S::creates(), indices),
        };
        Self::new(S::name(), creates)
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn creates(&self) -> &str {
        &self.creates
    }
    /// Whether `name` can be looked up in the catalog as an unquoted identifier.
    ///
    /// Unquoted identifiers fold to lowercase, so only lowercase ASCII
    /// letters, digits and `_` are accepted, never leading with a digit.
    pub fn is_valid_identifier(name: &str) -> bool {
        !name.is_empty()
            && name.len() <= MAX_IDENTIFIER
            && !name.starts_with(|c: char| c.is_ascii_digit())
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    }
}
