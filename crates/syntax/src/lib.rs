//! # GraphQL Document Parsing
//!
//! Parser integration for the cost estimator: raw query text goes in, a
//! [`ParsedDocument`] wrapping a typed executable AST comes out, or a
//! [`SyntaxError`] carrying the parser's message and position.
//!
//! Parsing runs in two passes: `apollo-parser` first, for structural errors
//! with precise byte offsets, then `apollo-compiler` for the typed AST that
//! semantic analysis walks.
//!
//! ```
//! let document = graphql_cost_syntax::parse("{ user { name } }").unwrap();
//! assert_eq!(document.operation_count(), 1);
//!
//! assert!(graphql_cost_syntax::parse("{ user { name }").is_err());
//! ```

mod error;
mod line_index;

use std::sync::Arc;

pub use error::SyntaxError;
pub use line_index::LineIndex;

// Re-export the position type for convenience
pub use graphql_cost_types::Position;

/// A successfully parsed GraphQL document.
///
/// Immutable once parsed; created fresh per [`parse`] call and discarded
/// after estimation. Cloning is cheap for the source text, which is shared.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    source: Arc<str>,
    ast: apollo_compiler::ast::Document,
}

impl ParsedDocument {
    /// The typed executable AST.
    #[must_use]
    pub const fn ast(&self) -> &apollo_compiler::ast::Document {
        &self.ast
    }

    /// The original query text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of operation definitions in the document.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.ast
            .definitions
            .iter()
            .filter(|definition| {
                matches!(
                    definition,
                    apollo_compiler::ast::Definition::OperationDefinition(_)
                )
            })
            .count()
    }
}

/// Parse a GraphQL query string into a [`ParsedDocument`].
///
/// Fails with the first structural error encountered, carrying the parser's
/// message verbatim plus the byte offset and line/column position.
pub fn parse(source: &str) -> Result<ParsedDocument, SyntaxError> {
    let tree = apollo_parser::Parser::new(source).parse();

    if let Some(error) = tree.errors().next() {
        let line_index = LineIndex::new(source);
        return Err(SyntaxError::new(
            error.message(),
            error.index(),
            line_index.position(error.index()),
        ));
    }

    let ast = match apollo_compiler::ast::Document::parse(source, "query.graphql") {
        Ok(document) => document,
        Err(with_errors) => {
            // apollo-compiler errors don't have precise positions, so we use offset 0
            let message = with_errors.errors.iter().next().map_or_else(
                || "invalid GraphQL document".to_string(),
                |error| error.to_string(),
            );
            return Err(SyntaxError::new(message, 0, Position::new(0, 0)));
        }
    };

    tracing::debug!(
        definitions = ast.definitions.len(),
        "parsed GraphQL document"
    );

    Ok(ParsedDocument {
        source: Arc::from(source),
        ast,
    })
}
