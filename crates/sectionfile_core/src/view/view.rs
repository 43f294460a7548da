//! Dotted-path scalar lookups over a document snapshot.

use serde_json::Value;

use crate::store::Document;

/// Immutable read-only view of one document snapshot.
///
/// Built once from a loaded [`Document`]; it never observes later store
/// writes. Safe to share among readers without synchronization.
pub struct ConfigView {
    root: Document,
}

impl ConfigView {
    /// Build a view from a document snapshot.
    pub fn from_document(root: Document) -> Self {
        Self { root }
    }

    /// Look up a scalar by dotted path, e.g. `"Logging.LogLevel.Default"`.
    ///
    /// Returns `None` if any segment is missing, a non-terminal node is not
    /// an object, or the terminal node is not a scalar. Null reads as
    /// absent. Booleans render as `"True"` / `"False"`, numbers in their
    /// canonical decimal form, strings verbatim.
    pub fn get(&self, path: &str) -> Option<String> {
        scalar_text(self.resolve(path)?)
    }

    /// Whether a dotted path resolves to any node (scalar or not).
    pub fn contains(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }

    /// Walk the document segment by segment to the addressed node.
    pub(crate) fn resolve(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            node = node.as_object()?.get(segment)?;
        }
        Some(node)
    }
}

/// Deterministic textual form of a scalar node.
///
/// Booleans are capitalized to match the persisted-config convention the
/// store's readers expect. Null and non-scalar nodes have no textual form.
pub(crate) fn scalar_text(node: &Value) -> Option<String> {
    match node {
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
