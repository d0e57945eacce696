//! Cost report types produced by the estimation walk.

use serde::Serialize;

use crate::FieldPath;

/// Cost record for a single leaf field.
///
/// Produced in traversal order, one per leaf, never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCostEntry {
    path: FieldPath,
    effective_limit: u64,
}

impl FieldCostEntry {
    /// Create an entry for a leaf field.
    #[must_use]
    pub const fn new(path: FieldPath, effective_limit: u64) -> Self {
        Self {
            path,
            effective_limit,
        }
    }

    /// Path of ancestor field names down to this leaf.
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Cumulative product of `limit` arguments from the root to this leaf.
    #[must_use]
    pub const fn effective_limit(&self) -> u64 {
        self.effective_limit
    }
}

/// Aggregate output of a cost estimation.
///
/// One credit is billed per returned data point plus one per queried field,
/// so `total_cost == data_points + field_count`. The report is immutable and
/// serializes to camel-cased JSON for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostReport {
    total_cost: u64,
    data_points: u64,
    field_paths: Vec<String>,
    entries: Vec<FieldCostEntry>,
}

impl CostReport {
    /// Aggregate leaf entries into a report.
    ///
    /// Returns `None` if summing the effective limits (or adding the entry
    /// count) overflows `u64`.
    #[must_use]
    pub fn from_entries(entries: Vec<FieldCostEntry>) -> Option<Self> {
        let mut data_points: u64 = 0;
        for entry in &entries {
            data_points = data_points.checked_add(entry.effective_limit())?;
        }
        let field_count = u64::try_from(entries.len()).ok()?;
        let total_cost = data_points.checked_add(field_count)?;
        let field_paths = entries.iter().map(|entry| entry.path().to_string()).collect();
        Some(Self {
            total_cost,
            data_points,
            field_paths,
            entries,
        })
    }

    /// Estimated maximum credits consumed by the query.
    #[must_use]
    pub const fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Sum of effective limits over all leaf fields.
    #[must_use]
    pub const fn data_points(&self) -> u64 {
        self.data_points
    }

    /// Leaf field paths in traversal order, duplicates preserved.
    #[must_use]
    pub fn field_paths(&self) -> &[String] {
        &self.field_paths
    }

    /// Per-leaf cost entries in traversal order.
    #[must_use]
    pub fn entries(&self) -> &[FieldCostEntry] {
        &self.entries
    }

    /// Number of leaf fields in the query.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &[&str], limit: u64) -> FieldCostEntry {
        FieldCostEntry::new(FieldPath::from_segments(path.iter().copied()), limit)
    }

    #[test]
    fn test_from_entries_totals() {
        let report = CostReport::from_entries(vec![
            entry(&["items", "id"], 5),
            entry(&["items", "name"], 5),
        ])
        .unwrap();

        assert_eq!(report.total_cost(), 12);
        assert_eq!(report.data_points(), 10);
        assert_eq!(report.field_count(), 2);
        assert_eq!(
            report.field_paths(),
            &["items.id".to_string(), "items.name".to_string()]
        );
    }

    #[test]
    fn test_empty_report_is_free() {
        let report = CostReport::from_entries(vec![]).unwrap();
        assert_eq!(report.total_cost(), 0);
        assert_eq!(report.data_points(), 0);
        assert_eq!(report.field_count(), 0);
        assert!(report.field_paths().is_empty());
        assert!(report.entries().is_empty());
    }

    #[test]
    fn test_duplicate_paths_are_preserved() {
        let report =
            CostReport::from_entries(vec![entry(&["a"], 1), entry(&["a"], 1)]).unwrap();
        assert_eq!(report.total_cost(), 4);
        assert_eq!(report.field_paths(), &["a".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_sum_overflow_returns_none() {
        let entries = vec![entry(&["a"], u64::MAX), entry(&["b"], 1)];
        assert!(CostReport::from_entries(entries).is_none());
    }

    #[test]
    fn test_count_overflow_returns_none() {
        // The +1 count term tips the checked sum over
        let entries = vec![entry(&["a"], u64::MAX)];
        assert!(CostReport::from_entries(entries).is_none());
    }

    #[test]
    fn test_serializes_to_camel_case_json() {
        let report = CostReport::from_entries(vec![entry(&["items", "id"], 5)]).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["totalCost"], 6);
        assert_eq!(json["dataPoints"], 5);
        assert_eq!(json["fieldPaths"], serde_json::json!(["items.id"]));
        assert_eq!(json["entries"][0]["path"], "items.id");
        assert_eq!(json["entries"][0]["effectiveLimit"], 5);
    }
}
