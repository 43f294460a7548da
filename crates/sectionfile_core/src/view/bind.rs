//! Declarative binding of a document section into a typed value.
//!
//! A bindable type declares its shape as a list of [`FieldSpec`]s (struct
//! field name, stored key, expected scalar kind) and accepts coerced
//! scalars one field at a time. This replaces reflection-style binding
//! with rules the caller can read off the type, and makes coercion
//! failures deterministic: the first field that does not match its
//! declared kind aborts the whole bind, naming that field.

use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use super::view::{scalar_text, ConfigView};
use crate::store::Document;

/// Scalar kinds a bound field may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Any scalar, via its textual form.
    Text,
    /// A whole number. Fractional values fail, never truncate.
    Integer,
    /// Any numeric scalar.
    Float,
    /// A JSON boolean. String forms like `"true"` do not coerce.
    Bool,
    /// A canonical hyphenated UUID in string form.
    Uuid,
}

impl ScalarKind {
    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Text => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Float => "floating-point",
            ScalarKind::Bool => "boolean",
            ScalarKind::Uuid => "unique identifier",
        }
    }
}

/// One field of a bindable type's declared shape.
///
/// `key` is matched case-insensitively against the stored object's keys.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Struct field name, reported in diagnostics and passed to `set_field`.
    pub field: &'static str,
    /// Stored object key to read the value from.
    pub key: &'static str,
    /// Scalar kind the stored value must coerce to.
    pub kind: ScalarKind,
}

/// A scalar after successful coercion, handed to [`Bindable::set_field`].
#[derive(Debug, Clone, PartialEq)]
pub enum BoundScalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Uuid(Uuid),
}

/// Errors that can occur while binding a section.
#[derive(Debug, Error, PartialEq)]
pub enum BindError {
    /// The path does not resolve to an object node.
    #[error("section '{0}' is missing or not an object")]
    MissingSection(String),

    /// A stored value does not coerce to its declared kind.
    #[error("field '{field}' cannot be read as {}", .kind.name())]
    Coerce { field: String, kind: ScalarKind },
}

/// Result type for bind operations.
pub type BindResult<T> = Result<T, BindError>;

/// Types that can be populated from a document section.
///
/// Fields absent from the stored section (or stored as null) keep their
/// `Default` value; binding only fails when a present value does not match
/// its declared kind.
pub trait Bindable: Default {
    /// The declared shape: one spec per bindable field.
    fn field_specs() -> &'static [FieldSpec];

    /// Accept one successfully coerced field value.
    fn set_field(&mut self, field: &'static str, value: BoundScalar);
}

impl ConfigView {
    /// Bind the object at `path` into `T`, coercing each declared field.
    ///
    /// Binding is all-or-nothing: either every present field coerces to its
    /// declared kind, or the call fails on the first mismatch with a
    /// [`BindError::Coerce`] naming that field.
    pub fn bind<T: Bindable>(&self, path: &str) -> BindResult<T> {
        let object = self
            .resolve(path)
            .and_then(Value::as_object)
            .ok_or_else(|| BindError::MissingSection(path.to_string()))?;

        let mut bound = T::default();
        for spec in T::field_specs() {
            let value = match lookup_key(object, spec.key) {
                Some(value) if !value.is_null() => value,
                _ => continue, // absent field keeps its default
            };
            let scalar = coerce(value, spec.kind).ok_or_else(|| BindError::Coerce {
                field: spec.field.to_string(),
                kind: spec.kind,
            })?;
            bound.set_field(spec.field, scalar);
        }
        Ok(bound)
    }
}

/// Case-insensitive key lookup over an object node.
fn lookup_key<'a>(object: &'a Document, key: &str) -> Option<&'a Value> {
    object
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v)
}

fn coerce(value: &Value, kind: ScalarKind) -> Option<BoundScalar> {
    match kind {
        ScalarKind::Text => scalar_text(value).map(BoundScalar::Text),
        ScalarKind::Integer => integer_value(value).map(BoundScalar::Integer),
        ScalarKind::Float => value.as_f64().map(BoundScalar::Float),
        ScalarKind::Bool => value.as_bool().map(BoundScalar::Bool),
        ScalarKind::Uuid => {
            let text = scalar_text(value)?;
            Uuid::parse_str(&text).ok().map(BoundScalar::Uuid)
        }
    }
}

/// Whole numbers only; a value like `123.45` is rejected, not truncated.
fn integer_value(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(n) => n,
        _ => return None,
    };
    if let Some(i) = number.as_i64() {
        return Some(i);
    }
    // Floats with a zero fractional part still count as whole
    let f = number.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
