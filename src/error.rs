use thiserror::Error;

/// Errors raised by the key and path operations.
///
/// Decoding and encoding never fail; only operations addressing a value by an
/// explicit key or dot path can, and only when that key or path is empty.
/// The check always happens before any mutation, so the tree is left
/// untouched when one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A single-level key was empty after coercion to a string.
    #[error("parameter key cannot be empty")]
    EmptyKey,

    /// A dot path was the empty string.
    #[error("dot path cannot be empty")]
    EmptyPath,
}

pub type Result<T> = std::result::Result<T, Error>;
