//! Decoding support for querystrings.
//!
//! Decoding happens in two steps. Each `key=value` pair has its key split into
//! segments by a small tokenizer (`a[b][]` becomes `a`, `b`, and an
//! auto-index marker), and the segments are then folded into the output
//! [`Map`], creating intermediate maps as needed.
//!
//! Decoding is total: every input produces a map. Malformed bracket syntax is
//! kept as literal key text instead of being rejected.

mod parse;

pub(crate) use parse::decode_to_string;

use crate::value::Map;

/// Decodes a querystring into a [`Map`] using the default [`crate::Config`].
///
/// ```
/// use query_build::Value;
///
/// let map = query_build::from_str("name=Acme&address[city]=Carrot+City&ids[]=1&ids[]=2");
///
/// assert_eq!(map["name"], Value::from("Acme"));
/// assert_eq!(
///     map["address"].as_map().unwrap()["city"],
///     Value::from("Carrot City")
/// );
/// assert_eq!(map["ids"].as_map().unwrap()["1"], Value::from("2"));
/// ```
pub fn from_str(input: &str) -> Map {
    crate::Config::default().decode_str(input)
}

/// Decodes a querystring from raw bytes using the default [`crate::Config`].
pub fn from_bytes(input: &[u8]) -> Map {
    crate::Config::default().decode_bytes(input)
}

pub(crate) fn parse(input: &[u8], config: crate::Config) -> Map {
    parse::parse(input, config)
}
