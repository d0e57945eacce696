//! Field paths identifying selections within a query.

use serde::{Serialize, Serializer};

/// Sequence of field names from the query root down to a selected field.
///
/// Displays and serializes as the dot-joined form used throughout cost
/// reports, e.g. `"assets.metrics.createdAt"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// The empty path at the root of an operation.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build a path from name segments.
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Extend this path with a child field name.
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// The field names making up this path, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of field names in this path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the empty root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty() {
        let path = FieldPath::root();
        assert!(path.is_root());
        assert_eq!(path.depth(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_child_extends_path() {
        let path = FieldPath::root().child("assets").child("metrics");
        assert!(!path.is_root());
        assert_eq!(path.depth(), 2);
        assert_eq!(path.segments(), &["assets".to_string(), "metrics".to_string()]);
        assert_eq!(path.to_string(), "assets.metrics");
    }

    #[test]
    fn test_child_does_not_mutate_parent() {
        let parent = FieldPath::root().child("a");
        let left = parent.child("x");
        let right = parent.child("y");
        assert_eq!(parent.to_string(), "a");
        assert_eq!(left.to_string(), "a.x");
        assert_eq!(right.to_string(), "a.y");
    }

    #[test]
    fn test_from_segments() {
        let path = FieldPath::from_segments(["a", "b", "c"]);
        assert_eq!(path.to_string(), "a.b.c");
        assert_eq!(path, FieldPath::root().child("a").child("b").child("c"));
    }

    #[test]
    fn test_serializes_as_dot_joined_string() {
        let path = FieldPath::from_segments(["items", "id"]);
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json, serde_json::json!("items.id"));
    }
}
