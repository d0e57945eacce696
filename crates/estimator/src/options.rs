use serde::Deserialize;

/// Hardening bounds for the estimation walk.
///
/// Adversarial or accidental deeply nested queries are rejected instead of
/// recursing without bound; the same goes for enormous selection counts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EstimatorOptions {
    /// Maximum selection-set nesting depth. Defaults to 64.
    pub max_depth: usize,
    /// Maximum number of visited fields. Defaults to 10_000.
    pub max_fields: usize,
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_fields: 10_000,
        }
    }
}

impl EstimatorOptions {
    /// Deserialize options from a JSON value, falling back to the defaults
    /// for anything missing or malformed.
    #[must_use]
    pub fn from_json(value: Option<&serde_json::Value>) -> Self {
        value
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default()
    }
}
