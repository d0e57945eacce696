//! # GraphQL Query Cost Estimation
//!
//! Estimates the maximum credit cost of a GraphQL query before execution by
//! statically walking its selection tree. One credit is billed per returned
//! data point plus one per queried field. A `limit` argument on a field
//! bounds how many child records come back underneath it, so limits multiply
//! down the tree: each leaf is billed at the product of the `limit`
//! arguments along its path.
//!
//! ```
//! use graphql_cost_estimator::estimate_cost;
//!
//! let report = estimate_cost("{ items(limit: 5) { id name } }").unwrap();
//! assert_eq!(report.total_cost(), 12);
//! assert_eq!(report.field_paths()[0], "items.id");
//! ```
//!
//! Estimation is a pure function of the document: no execution, no schema
//! validation, no state across calls. Queries are billed at their
//! theoretical maximum; servers that bill on rows actually returned will
//! charge at most this much.

mod error;
mod estimator;
mod options;
mod walk;

pub use error::{CostComputationError, CostErrorKind, EstimateError, Result};
pub use estimator::CostEstimator;
pub use options::EstimatorOptions;

// Re-export the parsing entry points and report types for convenience
pub use graphql_cost_syntax::{parse, ParsedDocument, SyntaxError};
pub use graphql_cost_types::{CostReport, FieldCostEntry, FieldPath};

/// Estimate the cost of a query with default options.
///
/// Convenience wrapper over [`CostEstimator::estimate`].
pub fn estimate_cost(source: &str) -> Result<CostReport> {
    CostEstimator::new().estimate(source)
}
