//! Depth-first cost walk over a parsed document.

use apollo_compiler::ast;
use graphql_cost_types::{CostReport, FieldCostEntry, FieldPath};

use crate::error::{CostComputationError, CostErrorKind, EstimateError, Result};
use crate::options::EstimatorOptions;

/// Walk every operation definition in `document` and aggregate leaf costs
/// into a report.
pub(crate) fn walk_document(
    document: &ast::Document,
    options: &EstimatorOptions,
) -> Result<CostReport> {
    let mut walk = Walk {
        options,
        entries: Vec::new(),
        data_points: 0,
        visited_fields: 0,
    };

    for definition in &document.definitions {
        // Each operation starts from multiplier 1. Fragment definitions are
        // only reachable through spreads, which carry no static selections.
        if let ast::Definition::OperationDefinition(operation) = definition {
            walk.selection_set(&operation.selection_set, &FieldPath::root(), 1, 1)?;
        }
    }

    let last_path = walk
        .entries
        .last()
        .map(FieldCostEntry::path)
        .cloned()
        .unwrap_or_default();
    CostReport::from_entries(walk.entries).ok_or_else(|| {
        EstimateError::Cost(CostComputationError::new(
            last_path,
            CostErrorKind::TotalOverflow,
        ))
    })
}

struct Walk<'a> {
    options: &'a EstimatorOptions,
    entries: Vec<FieldCostEntry>,
    data_points: u64,
    visited_fields: usize,
}

impl Walk<'_> {
    /// Visit one selection set at `depth`, with the multiplier inherited
    /// from the nearest ancestor field.
    fn selection_set(
        &mut self,
        selections: &[ast::Selection],
        path: &FieldPath,
        inherited_limit: u64,
        depth: usize,
    ) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(EstimateError::RecursionLimitExceeded {
                depth,
                max_depth: self.options.max_depth,
            });
        }

        for selection in selections {
            match selection {
                ast::Selection::Field(field) => {
                    self.field(field, path, inherited_limit, depth)?;
                }
                // Inline fragments forward to the same level
                ast::Selection::InlineFragment(inline) => {
                    self.selection_set(&inline.selection_set, path, inherited_limit, depth)?;
                }
                // Spread contents are not statically known here
                ast::Selection::FragmentSpread(_) => {}
            }
        }

        Ok(())
    }

    fn field(
        &mut self,
        field: &ast::Field,
        parent: &FieldPath,
        inherited_limit: u64,
        depth: usize,
    ) -> Result<()> {
        self.visited_fields += 1;
        if self.visited_fields > self.options.max_fields {
            return Err(EstimateError::FieldLimitExceeded {
                max_fields: self.options.max_fields,
            });
        }

        let path = parent.child(field.name.as_str());

        // A field's own `limit` bounds how many child records come back
        // under it, so the scaled multiplier applies from this node
        // downward. For a leaf that means its own entry is scaled too.
        let effective_limit = match limit_argument(field, &path)? {
            Some(limit) => inherited_limit.checked_mul(limit).ok_or_else(|| {
                CostComputationError::new(path.clone(), CostErrorKind::LimitOverflow { limit })
            })?,
            None => inherited_limit,
        };

        if field.selection_set.is_empty() {
            self.leaf(path, effective_limit)
        } else {
            self.selection_set(&field.selection_set, &path, effective_limit, depth + 1)
        }
    }

    fn leaf(&mut self, path: FieldPath, effective_limit: u64) -> Result<()> {
        self.data_points = self
            .data_points
            .checked_add(effective_limit)
            .ok_or_else(|| {
                CostComputationError::new(path.clone(), CostErrorKind::TotalOverflow)
            })?;
        self.entries.push(FieldCostEntry::new(path, effective_limit));
        Ok(())
    }
}

/// Extract the value of an integer `limit` argument, if any.
///
/// Absent limits, `null`, and variable references contribute no scaling;
/// any other non-integer value is a typed failure carrying the field path.
fn limit_argument(
    field: &ast::Field,
    path: &FieldPath,
) -> std::result::Result<Option<u64>, CostComputationError> {
    for argument in &field.arguments {
        if argument.name.as_str() == "limit" {
            return limit_value(&argument.value, path);
        }
    }
    Ok(None)
}

fn limit_value(
    value: &ast::Value,
    path: &FieldPath,
) -> std::result::Result<Option<u64>, CostComputationError> {
    let found = match value {
        ast::Value::Int(literal) => {
            let text = literal.as_str();
            return match text.parse::<u64>() {
                Ok(limit) => Ok(Some(limit)),
                // A signed parse distinguishes negative from out-of-range
                Err(_) => Err(match text.parse::<i64>() {
                    Ok(signed) => CostComputationError::new(
                        path.clone(),
                        CostErrorKind::NegativeLimit { value: signed },
                    ),
                    Err(_) => CostComputationError::new(
                        path.clone(),
                        CostErrorKind::MalformedLimit {
                            literal: text.to_string(),
                        },
                    ),
                }),
            };
        }
        // Unbound at estimation time
        ast::Value::Null | ast::Value::Variable(_) => return Ok(None),
        ast::Value::Float(_) => "a float literal",
        ast::Value::String(_) => "a string literal",
        ast::Value::Boolean(_) => "a boolean literal",
        ast::Value::Enum(_) => "an enum value",
        ast::Value::List(_) => "a list literal",
        ast::Value::Object(_) => "an object literal",
    };

    Err(CostComputationError::new(
        path.clone(),
        CostErrorKind::NonIntegerLimit { found },
    ))
}
