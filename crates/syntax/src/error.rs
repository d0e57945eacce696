use graphql_cost_types::Position;
use thiserror::Error;

/// The input text is not a structurally valid GraphQL document.
///
/// Produced by the parsing layer with the parser's message preserved
/// verbatim; downstream analysis propagates it unchanged so callers can
/// render a user-facing diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (at offset {offset})")]
pub struct SyntaxError {
    message: String,
    offset: usize,
    position: Position,
}

impl SyntaxError {
    pub(crate) fn new(message: impl Into<String>, offset: usize, position: Position) -> Self {
        Self {
            message: message.into(),
            offset,
            position,
        }
    }

    /// Human-readable parser message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset of the error in the source text.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Line/column of the error (0-indexed).
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }
}
