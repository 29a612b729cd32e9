use crate::value::Map;

/// Configuration for decoding and encoding behavior.
///
/// ## Nesting Depth
///
/// The `max_depth` parameter controls how many bracket groups of a key are
/// split into nested maps. Anything beyond that is kept as one literal key,
/// brackets included. A `max_depth` of 0 means no nesting at all (flat
/// key-value pairs only). When encoding, a leaf nested past `max_depth` is
/// written without brackets so that it decodes back to the same literal key.
///
/// Default value: `max_depth = 64`
///
/// ```
/// use query_build::{Config, Value};
///
/// let map = Config::new().max_depth(0).decode_str("a[b][c]=1");
/// assert_eq!(map["a[b][c]"], Value::from("1"));
///
/// let map = Config::new().max_depth(1).decode_str("a[b][c]=1");
/// let b = map["a"].as_map().unwrap()["b"].as_map().unwrap();
/// assert_eq!(b["[c]"], Value::from("1"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) max_depth: usize,
    pub(crate) use_form_encoding: bool,
    pub(crate) null_as_empty_string: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            max_depth: 64,
            use_form_encoding: false,
            null_as_empty_string: false,
        }
    }

    /// Specifies the maximum number of bracket groups that will be split
    /// into nested maps when decoding. Default is 64.
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// By default, querystrings are encoded with a lax query-string encoding
    /// that keeps structural square brackets readable, e.g. `a[b][c]=1`.
    /// Brackets that are part of a key are still percent-encoded, so
    /// `{ a: { "[x]": 1 } }` is encoded as `a[%5Bx%5D]=1`.
    ///
    /// With form encoding, everything except ASCII alphanumerics and `*-._`
    /// is percent-encoded, structural brackets included: `a%5Bb%5D=1`.
    /// Key segments are percent-encoded _twice_, so `{ a: { "[x]": 1 } }`
    /// becomes `a%5B%255Bx%255D%5D=1`. When decoding in this mode, `%5B` and
    /// `%5D` in keys are treated as brackets and each key segment is decoded
    /// twice.
    pub const fn use_form_encoding(mut self, use_form_encoding: bool) -> Self {
        self.use_form_encoding = use_form_encoding;
        self
    }

    /// Sets the default for [`crate::QueryBuild`]'s null handling: when set,
    /// nulls are read back as empty strings.
    pub const fn null_as_empty_string(mut self, null_as_empty_string: bool) -> Self {
        self.null_as_empty_string = null_as_empty_string;
        self
    }

    /// Decodes a querystring from a `&[u8]` using this `Config`.
    pub fn decode_bytes(self, input: &[u8]) -> Map {
        crate::de::parse(input, self)
    }

    /// Decodes a querystring from a `&str` using this `Config`.
    pub fn decode_str(self, input: &str) -> Map {
        self.decode_bytes(input.as_bytes())
    }

    /// Encodes a map into a querystring using this `Config`.
    pub fn encode_map(self, input: &Map) -> String {
        // initialize the buffer with 128 bytes
        // this is a guess based on what `serde_json` does
        let mut buffer = String::with_capacity(128);
        crate::ser::QsSerializer::new(&mut buffer, self).serialize_map(input);
        buffer
    }
}
