use std::collections::HashMap;

use tracing::{debug, trace};

use crate::Config;
use crate::value::{Map, Value, ensure_map};

mod decode;

pub(crate) use decode::decode_to_string;

/// One element of a bracketed key, e.g. `a[b][]` is
/// `[Key("a"), Key("b"), Auto]`.
#[derive(Debug, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    /// Empty brackets: the smallest integer index not yet used in the
    /// container being written to.
    Auto,
}

/// Tracks where the search for the next free `[]` index resumes, for every
/// container built so far.
///
/// Keys are never removed while parsing, so every index below `next` stays
/// taken until the container itself is replaced, at which point its cursor is
/// dropped.
#[derive(Debug, Default)]
struct IndexCursor {
    next: usize,
    children: HashMap<String, IndexCursor>,
}

impl IndexCursor {
    fn next_index(&mut self, map: &Map) -> String {
        let mut buffer = itoa::Buffer::new();
        loop {
            let key = buffer.format(self.next);
            self.next += 1;
            if !map.contains_key(key) {
                return key.to_owned();
            }
        }
    }
}

/// Parses a raw querystring into a map.
///
/// Pairs are applied in order, so a later pair at the same path overwrites an
/// earlier one. Parsing never fails: malformed input degrades into literal
/// keys rather than errors.
pub fn parse(encoded: &[u8], config: Config) -> Map {
    let mut output = Map::new();
    if encoded.is_empty() {
        return output;
    }

    let mut cursor = IndexCursor::default();
    let mut pairs = 0usize;
    for pair in encoded.split(|&b| b == b'&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.iter().position(|&b| b == b'=') {
            Some(eq) => (&pair[..eq], &pair[eq + 1..]),
            None => (pair, &b""[..]),
        };

        let Some(segments) = KeyParser::new(key, config).parse() else {
            trace!(
                key = %String::from_utf8_lossy(key),
                "skipping pair without a leading key"
            );
            continue;
        };
        let value = Value::String(decode_to_string(value));
        insert_path(&mut output, &mut cursor, segments, value);
        pairs += 1;
    }

    debug!(pairs, keys = output.len(), "parsed querystring");
    output
}

/// Writes `value` at `segments`, creating maps along the way.
///
/// Anything other than a map sitting at an intermediate segment is replaced by
/// an empty map.
fn insert_path(
    root: &mut Map,
    mut cursor: &mut IndexCursor,
    segments: Vec<Segment>,
    value: Value,
) {
    let mut current = root;
    let mut segments = segments.into_iter().peekable();
    while let Some(segment) = segments.next() {
        let key = match segment {
            Segment::Key(key) => key,
            Segment::Auto => cursor.next_index(current),
        };
        if segments.peek().is_none() {
            cursor.children.remove(&key);
            current.insert(key, value);
            return;
        }
        let slot = current.entry(key.clone()).or_insert(Value::Null);
        if !matches!(slot, Value::Map(_)) {
            cursor.children.remove(&key);
        }
        current = ensure_map(slot);
        cursor = cursor.children.entry(key).or_default();
    }
}

/// Splits a single raw key into its segments.
///
/// Brackets are recognised on the raw bytes, before any percent-decoding, so
/// `%5B` and `%5D` only act as brackets in form-encoding mode. Each segment is
/// decoded individually afterwards, twice in form-encoding mode.
struct KeyParser<'qs> {
    inner: &'qs [u8],
    config: Config,
}

impl<'qs> KeyParser<'qs> {
    fn new(inner: &'qs [u8], config: Config) -> Self {
        KeyParser { inner, config }
    }

    fn literal(&self, bytes: &[u8]) -> Segment {
        Segment::Key(decode::decode_key(bytes, self.config.use_form_encoding))
    }

    /// Length of the bracket token starting at `idx`, if there is one.
    fn bracket_at(&self, idx: usize, literal: u8, encoded: &[u8; 2]) -> Option<usize> {
        let rest = self.inner.get(idx..)?;
        match *rest.first()? {
            b if b == literal => Some(1),
            b'%' if self.config.use_form_encoding
                && rest.len() >= 3
                && rest[1..3].eq_ignore_ascii_case(encoded) =>
            {
                Some(3)
            }
            _ => None,
        }
    }

    fn open_at(&self, idx: usize) -> Option<usize> {
        self.bracket_at(idx, b'[', b"5B")
    }

    fn close_at(&self, idx: usize) -> Option<usize> {
        self.bracket_at(idx, b']', b"5D")
    }

    /// Finds the first bracket token at or after `from`, returning its
    /// position and length.
    fn find(
        &self,
        from: usize,
        token_at: fn(&Self, usize) -> Option<usize>,
    ) -> Option<(usize, usize)> {
        (from..self.inner.len()).find_map(|idx| token_at(self, idx).map(|len| (idx, len)))
    }

    /// Returns `None` when the key has no leading identifier (e.g. `=1` or
    /// `[a]=1`), in which case the pair is dropped.
    fn parse(&self) -> Option<Vec<Segment>> {
        if self.inner.is_empty() {
            return None;
        }
        let first_open = if self.config.max_depth == 0 {
            None
        } else {
            self.find(0, Self::open_at)
        };
        let Some((open, mut open_len)) = first_open else {
            return Some(vec![self.literal(self.inner)]);
        };

        let mut segments = Vec::new();
        let mut idx = open;
        let mut depth = 0;
        loop {
            let content_start = idx + open_len;
            let Some((close, close_len)) = self.find(content_start, Self::close_at) else {
                if depth == 0 {
                    // the very first bracket is never closed: no nesting at all
                    return Some(vec![self.literal(self.inner)]);
                }
                segments.push(self.literal(&self.inner[idx..]));
                break;
            };

            if depth == 0 {
                if open == 0 {
                    return None;
                }
                segments.push(self.literal(&self.inner[..open]));
            }

            let content = &self.inner[content_start..close];
            segments.push(if content.is_empty() {
                Segment::Auto
            } else {
                self.literal(content)
            });
            depth += 1;

            idx = close + close_len;
            if idx == self.inner.len() {
                break;
            }
            match self.open_at(idx) {
                Some(len) if depth < self.config.max_depth => open_len = len,
                _ => {
                    // trailing text that is not another bracket group, or
                    // nesting beyond `max_depth`: keep the rest verbatim
                    segments.push(self.literal(&self.inner[idx..]));
                    break;
                }
            }
        }
        Some(segments)
    }
}
