//! Dot-path access into nested maps.
//!
//! A path such as `"user.address.city"` names a key at each successive level
//! of nesting. Only maps are traversed: a sequence or scalar in the middle of a
//! path ends a read, is replaced by a map on write, and turns a delete into a
//! no-op.

use tracing::trace;

use crate::error::{Error, Result};
use crate::value::{Map, Value, ensure_map};

const SEPARATOR: char = '.';

/// Returns the value at `path`, or `None` if any segment is missing or a
/// non-map value is reached while segments remain.
///
/// The empty path never matches.
///
/// ```
/// use query_build::{Value, path};
///
/// let map = query_build::from_str("user[address][city]=Paris");
/// assert_eq!(path::get(&map, "user.address.city"), Some(&Value::from("Paris")));
/// assert_eq!(path::get(&map, "user.address.city.zip"), None);
/// assert_eq!(path::get(&map, "nobody"), None);
/// ```
pub fn get<'a>(root: &'a Map, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    let mut segments = path.split(SEPARATOR);
    let mut current = root.get(segments.next()?)?;
    for segment in segments {
        current = current.as_map()?.get(segment)?;
    }
    Some(current)
}

/// Mutable counterpart of [`get`].
pub fn get_mut<'a>(root: &'a mut Map, path: &str) -> Option<&'a mut Value> {
    if path.is_empty() {
        return None;
    }
    let mut segments = path.split(SEPARATOR);
    let mut current = root.get_mut(segments.next()?)?;
    for segment in segments {
        current = current.as_map_mut()?.get_mut(segment)?;
    }
    Some(current)
}

/// Returns `true` if [`get`] would find a value at `path`.
pub fn has(root: &Map, path: &str) -> bool {
    get(root, path).is_some()
}

/// Writes `value` at `path`, overwriting whatever was there.
///
/// Missing intermediate maps are created. An intermediate segment holding a
/// scalar or a sequence is replaced by an empty map first, discarding the old
/// value.
///
/// ```
/// use query_build::{Map, Value, path};
///
/// let mut map = Map::new();
/// path::set(&mut map, "a.b.c", 5).unwrap();
/// assert_eq!(query_build::to_string(&map), "a[b][c]=5");
///
/// path::set(&mut map, "a.b", 9).unwrap();
/// assert_eq!(query_build::to_string(&map), "a[b]=9");
/// ```
pub fn set(root: &mut Map, path: &str, value: impl Into<Value>) -> Result<()> {
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }
    let (parents, last) = split_last(path);
    let mut current = root;
    if let Some(parents) = parents {
        for segment in parents.split(SEPARATOR) {
            let slot = current
                .entry(segment.to_owned())
                .or_insert_with(|| Value::Map(Map::new()));
            current = ensure_map(slot);
        }
    }
    current.insert(last.to_owned(), value.into());
    Ok(())
}

/// Removes the value at `path`.
///
/// Removing a path that does not exist is a no-op. Maps left empty by the
/// removal are kept.
///
/// ```
/// use query_build::{Map, Value, path};
///
/// let mut map = query_build::from_str("a[b][c]=1&a[d]=2");
/// path::forget(&mut map, "a.b.c").unwrap();
/// assert_eq!(path::get(&map, "a.b"), Some(&Value::Map(Map::new())));
/// assert_eq!(query_build::to_string(&map), "a[d]=2");
/// ```
pub fn forget(root: &mut Map, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }
    let (parents, last) = split_last(path);
    let parent = match parents {
        Some(parents) => walk_maps_mut(root, parents),
        None => Some(root),
    };
    match parent {
        Some(parent) => {
            parent.shift_remove(last);
        }
        None => trace!(path, "nothing to forget"),
    }
    Ok(())
}

/// Splits `"a.b.c"` into `(Some("a.b"), "c")` and `"a"` into `(None, "a")`.
fn split_last(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once(SEPARATOR) {
        Some((parents, last)) => (Some(parents), last),
        None => (None, path),
    }
}

/// Follows `path` through maps only, without creating anything.
fn walk_maps_mut<'a>(root: &'a mut Map, path: &str) -> Option<&'a mut Map> {
    let mut current = root;
    for segment in path.split(SEPARATOR) {
        current = current.get_mut(segment)?.as_map_mut()?;
    }
    Some(current)
}
