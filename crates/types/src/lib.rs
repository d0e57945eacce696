//! Foundation types for GraphQL query cost estimation.
//!
//! This crate provides the value types shared across the cost-estimation
//! stack: the paths that identify leaf fields, the per-leaf cost records,
//! and the aggregate report handed to presentation layers.
//!
//! # Type Categories
//!
//! - **Path types**: [`FieldPath`]
//! - **Report types**: [`FieldCostEntry`], [`CostReport`]
//! - **Position types**: [`Position`]
//!
//! Report types serialize to camel-cased JSON (`totalCost`, `fieldPaths`,
//! ...) so downstream consumers can render them without any mapping layer.

mod path;
mod position;
mod report;

pub use path::FieldPath;
pub use position::Position;
pub use report::{CostReport, FieldCostEntry};
