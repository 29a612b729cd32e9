//! The in-memory tree that querystrings decode into and encode from.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

/// An insertion-ordered, string-keyed map of values.
///
/// Order is significant: [`crate::to_string`] emits pairs in iteration order.
pub type Map = IndexMap<String, Value>;

/// A node of a decoded querystring.
///
/// Decoding only ever produces [`Value::String`] leaves inside
/// [`Value::Map`]s, including for `key[]=...` array syntax, which yields a
/// map keyed `"0"`, `"1"`, and so on. The remaining variants exist so callers
/// can insert typed data before encoding.
///
/// A map whose keys happen to be `"0"`, `"1"`, ... is never treated as a
/// sequence.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Map(Map),
    Sequence(Vec<Value>),
}

impl Value {
    /// Returns `true` for `Map` and `Sequence`.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Sequence(_))
    }

    /// Returns `true` for `Null`, which encodes as an empty value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the text of a `String`. Decoded scalars are always strings.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The text written for this value when it is a querystring leaf.
    ///
    /// `Null` becomes the empty string and booleans become `1`/`0`.
    /// Containers have no scalar form and return `None`.
    pub fn to_scalar_string(&self) -> Option<Cow<'_, str>> {
        let s = match self {
            Value::Null => Cow::Borrowed(""),
            Value::Bool(true) => Cow::Borrowed("1"),
            Value::Bool(false) => Cow::Borrowed("0"),
            Value::Int(i) => Cow::Owned(itoa::Buffer::new().format(*i).to_owned()),
            Value::Float(f) => Cow::Owned(format_float(*f)),
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Map(_) | Value::Sequence(_) => return None,
        };
        Some(s)
    }

    /// Rewrites every `Null` in this tree to an empty string, in place.
    pub fn null_to_empty_string(&mut self) {
        match self {
            Value::Null => *self = Value::String(String::new()),
            Value::Map(map) => map_null_to_empty_string(map),
            Value::Sequence(seq) => seq.iter_mut().for_each(Value::null_to_empty_string),
            _ => {}
        }
    }
}

/// Rewrites every `Null` below `map` to an empty string, in place.
pub fn map_null_to_empty_string(map: &mut Map) {
    map.values_mut().for_each(Value::null_to_empty_string);
}

/// Returns the map stored in `value`, first replacing `value` with an empty
/// map if it holds anything else.
pub(crate) fn ensure_map(value: &mut Value) -> &mut Map {
    if !matches!(value, Value::Map(_)) {
        *value = Value::Map(Map::new());
    }
    match value {
        Value::Map(map) => map,
        _ => unreachable!(),
    }
}

/// Formats a float the way it appears in a querystring.
///
/// Integral values drop the fraction (`2.0` becomes `2`) so they read the same
/// as the equivalent integer.
pub(crate) fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NAN".to_owned()
    } else if f.is_infinite() {
        let s = if f > 0.0 { "INF" } else { "-INF" };
        s.to_owned()
    } else if f.fract() == 0.0 && f.abs() < 1e15 {
        itoa::Buffer::new().format(f as i64).to_owned()
    } else {
        ryu::Buffer::new().format_finite(f).to_owned()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_scalar_string() {
            Some(s) => f.write_str(&s),
            None => match self {
                Value::Map(map) => f.debug_map().entries(map.iter()).finish(),
                Value::Sequence(seq) => f.debug_list().entries(seq.iter()).finish(),
                _ => unreachable!("scalars always have a string form"),
            },
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Map(map) => map.serialize(serializer),
            Value::Sequence(seq) => seq.serialize(serializer),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Int(i64::from(i))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(seq: Vec<T>) -> Self {
        Value::Sequence(seq.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
