//! Declarative JSON path projection.
//!
//! Entities declare one `&'static [Segment]` per field and read it through
//! [`resolve_path`]. Absent data never errors: any missing key, bad index,
//! wrong container type or `null` along the path resolves to `None`.

use serde_json::Value;

/// One navigation step into a JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Object member lookup
    Key(&'static str),
    /// Array element lookup
    Index(usize),
}

/// Walk `path` into `document`, returning the leaf if every step exists.
///
/// An empty path yields the document itself (unless it is `null`).
pub fn resolve_path<'a>(document: &'a Value, path: &[Segment]) -> Option<&'a Value> {
    let mut current = document;
    for segment in path {
        current = match (segment, current) {
            (Segment::Key(key), Value::Object(map)) => map.get(*key)?,
            (Segment::Index(i), Value::Array(items)) => items.get(*i)?,
            _ => return None,
        };
    }
    (!current.is_null()).then_some(current)
}

/// Apply `transform` to a present raw value, or yield `T::default()` when
/// the path was missing.
pub fn apply_or_default<'a, T: Default>(
    raw: Option<&'a Value>,
    transform: impl FnOnce(&'a Value) -> T,
) -> T {
    raw.map(transform).unwrap_or_default()
}

/// A record whose fields are read-only projections over a backing document.
pub trait Mapped {
    fn document(&self) -> &Value;

    /// Raw leaf at `path`
    fn field(&self, path: &[Segment]) -> Option<&Value> {
        resolve_path(self.document(), path)
    }

    /// String leaf at `path`; `None` when absent or not a string
    fn text(&self, path: &[Segment]) -> Option<&str> {
        self.field(path).and_then(Value::as_str)
    }
}
