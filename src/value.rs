//! The value model handed across the printer boundary.
//!
//! Rust has no ambient reflection, so the values a printer lays out are made
//! explicit: primitives, sequences, ordered field maps, and borrowed
//! references to types with their own [`Inspect`] hook. A `Value` never owns
//! a custom value — the borrow lives only as long as the synchronous render
//! that uses it.

use std::borrow::Cow;
use std::fmt;

use crate::display::Inspect;

/// A value the printer knows how to lay out.
#[derive(Clone)]
pub enum Value<'a> {
    /// An explicit null (JSON interop).
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer outside `i64` range.
    Uint(u64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Str(Cow<'a, str>),
    /// An ordered sequence.
    Seq(Vec<Value<'a>>),
    /// An ordered field mapping.
    Map(Vec<(Cow<'a, str>, Value<'a>)>),
    /// A value that displays through its own [`Inspect`] hook.
    Custom(&'a dyn Inspect),
}

impl<'a> Value<'a> {
    /// Builds a sequence from anything iterable.
    pub fn seq(items: impl IntoIterator<Item = impl Into<Value<'a>>>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Builds a field mapping from key/value pairs.
    ///
    /// The [`fields!`] macro is the usual entry point.
    pub fn map(
        entries: impl IntoIterator<Item = (impl Into<Cow<'a, str>>, impl Into<Value<'a>>)>,
    ) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Uint(v) => f.debug_tuple("Uint").field(v).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Value::Seq(v) => f.debug_tuple("Seq").field(v).finish(),
            Value::Map(v) => f.debug_tuple("Map").field(v).finish(),
            Value::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value<'_> {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<u64> for Value<'_> {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Value::Int(value),
            Err(_) => Value::Uint(value),
        }
    }
}

impl From<usize> for Value<'_> {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::Float(value.into())
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Str(Cow::Borrowed(value))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::Str(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Value::Str(value)
    }
}

impl<'a, T: Into<Value<'a>>> From<Vec<T>> for Value<'a> {
    fn from(items: Vec<T>) -> Self {
        Value::seq(items)
    }
}

impl<'a> From<&'a serde_json::Value> for Value<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(Cow::Borrowed(s)),
            serde_json::Value::Array(items) => Value::Seq(items.iter().map(Value::from).collect()),
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .iter()
                    .map(|(key, value)| (Cow::Borrowed(key.as_str()), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Builds a [`Value::Map`] from `key: value` pairs.
///
/// Keys may be identifiers or string literals; values are anything
/// convertible into a [`Value`].
///
/// # Example
///
/// ```rust
/// use telltale::{fields, Value};
///
/// let fields = fields! { x: 1, y: 2, "kebab-key": "ok" };
/// assert!(matches!(fields, Value::Map(ref entries) if entries.len() == 3));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Value::Map(::std::vec::Vec::new())
    };
    ($($key:tt : $value:expr),+ $(,)?) => {
        $crate::Value::Map(::std::vec![
            $((::std::borrow::Cow::from($crate::field_name!($key)), $crate::Value::from($value))),+
        ])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! field_name {
    ($key:ident) => {
        ::core::stringify!($key)
    };
    ($key:literal) => {
        $key
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_conversions() {
        assert!(matches!(Value::from(1i32), Value::Int(1)));
        assert!(matches!(Value::from(1u64), Value::Int(1)));
        assert!(matches!(Value::from(u64::MAX), Value::Uint(u64::MAX)));
        assert!(matches!(Value::from(1.5f64), Value::Float(_)));
    }

    #[test]
    fn test_string_conversions_borrow_when_possible() {
        match Value::from("hi") {
            Value::Str(Cow::Borrowed(s)) => assert_eq!(s, "hi"),
            other => panic!("unexpected value: {other:?}"),
        }
        assert!(matches!(
            Value::from(String::from("hi")),
            Value::Str(Cow::Owned(_))
        ));
    }

    #[test]
    fn test_vec_conversion_builds_a_seq() {
        match Value::from(vec![1i64, 2, 3]) {
            Value::Seq(items) => assert_eq!(items.len(), 3),
            other => panic!("unexpected value: {other:?}"),
        }
    }

    #[test]
    fn test_fields_macro_preserves_order() {
        match fields! { b: 1, a: 2 } {
            Value::Map(entries) => {
                assert_eq!(entries[0].0, "b");
                assert_eq!(entries[1].0, "a");
            }
            other => panic!("unexpected value: {other:?}"),
        }
    }

    #[test]
    fn test_fields_macro_empty() {
        assert!(matches!(fields! {}, Value::Map(ref entries) if entries.is_empty()));
    }

    #[test]
    fn test_json_conversion() {
        let json: serde_json::Value = serde_json::from_str(
            r#"{ "name": "telltale", "version": 1, "tags": ["a", "b"], "extra": null }"#,
        )
        .unwrap();

        // serde_json's default map keeps keys sorted.
        match Value::from(&json) {
            Value::Map(entries) => {
                assert_eq!(entries.len(), 4);
                assert_eq!(entries[0].0, "extra");
                assert!(matches!(entries[0].1, Value::Null));
                assert!(matches!(entries[1].1, Value::Str(_)));
                assert!(matches!(entries[2].1, Value::Seq(ref items) if items.len() == 2));
                assert!(matches!(entries[3].1, Value::Int(1)));
            }
            other => panic!("unexpected value: {other:?}"),
        }
    }
}
