use graphql_cost_types::FieldPath;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EstimateError>;

/// A `limit` argument was present but could not be interpreted as a
/// non-negative integer, or cost arithmetic overflowed.
///
/// Always carries the path of the offending field for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot compute cost for `{path}`: {kind}")]
pub struct CostComputationError {
    path: FieldPath,
    kind: CostErrorKind,
}

impl CostComputationError {
    pub(crate) const fn new(path: FieldPath, kind: CostErrorKind) -> Self {
        Self { path, kind }
    }

    /// Path of the field whose cost could not be computed.
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    /// What exactly went wrong.
    #[must_use]
    pub const fn kind(&self) -> &CostErrorKind {
        &self.kind
    }
}

/// The ways a `limit` argument can defeat cost computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostErrorKind {
    /// The value is not an integer literal (float, string, boolean, ...).
    #[error("`limit` must be an integer literal, found {found}")]
    NonIntegerLimit { found: &'static str },

    /// The integer literal is negative.
    #[error("`limit` must be non-negative, found {value}")]
    NegativeLimit { value: i64 },

    /// The integer literal does not fit in 64 bits.
    #[error("`limit` value `{literal}` is out of range")]
    MalformedLimit { literal: String },

    /// Multiplying the inherited multiplier by this field's limit overflowed.
    #[error("effective limit overflows when multiplied by {limit}")]
    LimitOverflow { limit: u64 },

    /// Summing entry costs into the total overflowed.
    #[error("total cost overflows a 64-bit integer")]
    TotalOverflow,
}

/// Terminal failure of a single estimation call.
///
/// No partial report is ever returned; rendering is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// The input text is not structurally valid GraphQL.
    #[error(transparent)]
    Syntax(#[from] graphql_cost_syntax::SyntaxError),

    /// A `limit` argument could not be interpreted.
    #[error(transparent)]
    Cost(#[from] CostComputationError),

    /// The selection tree is nested deeper than the configured bound.
    #[error("selection set depth {depth} exceeds maximum of {max_depth}")]
    RecursionLimitExceeded { depth: usize, max_depth: usize },

    /// The query selects more fields than the configured bound.
    #[error("query exceeds maximum of {max_fields} fields")]
    FieldLimitExceeded { max_fields: usize },
}
