//! Encoding support for querystrings.

mod encode;

use encode::encode_into;

use crate::value::{Map, Value};

/// Encodes a map into a querystring using the default [`crate::Config`].
///
/// Pairs are written depth-first in the map's insertion order. Nested maps
/// use bracket notation and sequences use their positional index. Empty maps
/// and sequences produce no output.
///
/// ```
/// use query_build::{Map, Value};
///
/// let mut address = Map::new();
/// address.insert("city".to_owned(), Value::from("Carrot City"));
///
/// let mut query = Map::new();
/// query.insert("name".to_owned(), Value::from("Acme"));
/// query.insert("address".to_owned(), Value::Map(address));
/// query.insert("ids".to_owned(), Value::from(vec![1, 2]));
/// query.insert("empty".to_owned(), Value::Null);
///
/// assert_eq!(
///     query_build::to_string(&query),
///     "name=Acme&address[city]=Carrot+City&ids[0]=1&ids[1]=2&empty="
/// );
/// ```
pub fn to_string(input: &Map) -> String {
    crate::Config::default().encode_map(input)
}

/// A serializer for the querystring format.
///
/// The serializer maintains a key stack to build nested paths. For example,
/// when serializing `{user: {name: "John"}}`, it pushes "user" onto the stack,
/// then writes "name" as `user[name]=John`.
pub struct QsSerializer<'a> {
    output: &'a mut String,
    first_kv: bool,
    key: Vec<String>,
    config: crate::Config,
}

impl<'a> QsSerializer<'a> {
    /// Creates a new `QsSerializer` appending to `output`.
    pub fn new(output: &'a mut String, config: crate::Config) -> Self {
        Self {
            output,
            first_kv: true,
            key: Vec::with_capacity(4),
            config,
        }
    }

    /// Writes every entry of `map`, nested below the current key stack.
    pub fn serialize_map(&mut self, map: &Map) {
        for (key, value) in map {
            self.serialize_entry(key, value);
        }
    }

    fn serialize_entry(&mut self, key: &str, value: &Value) {
        match value {
            Value::Map(map) => {
                self.push_key(key);
                self.serialize_map(map);
                self.key.pop();
            }
            Value::Sequence(seq) => {
                self.push_key(key);
                let mut buffer = itoa::Buffer::new();
                for (idx, element) in seq.iter().enumerate() {
                    self.serialize_entry(buffer.format(idx), element);
                }
                self.key.pop();
            }
            scalar => {
                self.write_key(key);
                self.output.push('=');
                let text = scalar.to_scalar_string().unwrap_or_default();
                encode_into(self.output, &text, self.config.use_form_encoding);
            }
        }
    }

    /// Pushes a new key segment onto the key stack for nested structures.
    ///
    /// - First key "user" becomes: `user`
    /// - Second key "name" becomes: `user[name]`
    /// - Third key "first" becomes: `user[name][first]`
    fn push_key(&mut self, newkey: &str) {
        let mut segment = String::with_capacity(newkey.len() + 2);
        self.write_segment(&mut segment, newkey, !self.key.is_empty());
        self.key.push(segment);
    }

    /// Renders one key segment.
    ///
    /// In form-encoding mode the segment text is escaped twice, so a bracket
    /// inside a key can't be read back as a structural `%5B` or `%5D`.
    fn write_segment(&self, segment: &mut String, newkey: &str, bracketed: bool) {
        let form = self.config.use_form_encoding;
        if bracketed {
            segment.push_str(if form { "%5B" } else { "[" });
        }

        if newkey
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'.')
        {
            // nothing in here needs percent-encoding in either mode
            segment.push_str(newkey);
        } else if form {
            let mut escaped = String::with_capacity(newkey.len());
            encode_into(&mut escaped, newkey, true);
            encode_into(segment, &escaped, true);
        } else {
            encode_into(segment, newkey, false);
        }

        if bracketed {
            segment.push_str(if form { "%5D" } else { "]" });
        }
    }

    /// Writes the pair separator, the key stack and the leaf key.
    ///
    /// A leaf nested deeper than `max_depth` bracket groups is written without
    /// brackets: the decoder keeps everything past `max_depth` as one literal
    /// key, so the escaped text reads back unchanged.
    fn write_key(&mut self, newkey: &str) {
        if self.first_kv {
            self.first_kv = false;
        } else {
            self.output.push('&');
        }
        for segment in &self.key {
            self.output.push_str(segment);
        }
        let depth = self.key.len();
        let past_max_depth = self.config.max_depth > 0 && depth > self.config.max_depth;
        let mut leaf = String::with_capacity(newkey.len() + 2);
        self.write_segment(&mut leaf, newkey, depth > 0 && !past_max_depth);
        self.output.push_str(&leaf);
    }
}
