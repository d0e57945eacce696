//! The public estimation facade.

use graphql_cost_syntax::ParsedDocument;
use graphql_cost_types::CostReport;

use crate::error::Result;
use crate::options::EstimatorOptions;
use crate::walk;

/// Computes [`CostReport`]s for GraphQL queries.
///
/// Holds only configuration. Every call is an independent, side-effect-free
/// computation over an immutable document, so a single estimator is safe to
/// share across threads and invoke concurrently.
#[derive(Debug, Clone, Default)]
pub struct CostEstimator {
    options: EstimatorOptions,
}

impl CostEstimator {
    /// Estimator with default hardening bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimator with explicit hardening bounds.
    #[must_use]
    pub const fn with_options(options: EstimatorOptions) -> Self {
        Self { options }
    }

    /// Parse `source` and estimate its cost.
    pub fn estimate(&self, source: &str) -> Result<CostReport> {
        let document = graphql_cost_syntax::parse(source)?;
        self.estimate_document(&document)
    }

    /// Estimate the cost of an already-parsed document.
    ///
    /// Walks every operation definition depth-first in document order,
    /// multiplying `limit` arguments down the tree, and aggregates one entry
    /// per leaf field.
    pub fn estimate_document(&self, document: &ParsedDocument) -> Result<CostReport> {
        let report = walk::walk_document(document.ast(), &self.options)?;

        tracing::debug!(
            total_cost = report.total_cost(),
            fields = report.field_count(),
            "estimated query cost"
        );

        Ok(report)
    }
}
