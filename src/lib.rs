//! Nested querystrings as editable value trees
//!
//! Querystrings are not formally defined and loosely take the form of
//! _nested_ urlencoded queries, where bracket notation expresses nesting:
//! `user[address][city]=Paris&ids[]=1&ids[]=2`.
//!
//! This library decodes such strings into an ordered tree of [`Value`]s,
//! lets that tree be read and edited through dot paths like
//! `"user.address.city"`, and encodes it back into a querystring.
//!
//! ## Decoding
//!
//! Decoding never fails. Every `key=value` pair is applied in order, with
//! later pairs overwriting earlier ones at the same path. Empty brackets
//! (`ids[]`) append at the smallest unused integer key, so the result is a map
//! keyed `"0"`, `"1"`, ... rather than a sequence. A key without a value
//! decodes to the empty string, and malformed brackets are kept as literal
//! key text.
//!
//! ## Encoding
//!
//! Encoding walks the tree depth-first in insertion order. Maps nest with
//! brackets, sequences use positional indices, nulls become empty values and
//! empty containers are left out.
//!
//! ## Usage
//!
//! ```
//! use query_build::{QueryBuild, Value, path};
//!
//! # fn main() -> query_build::Result<()> {
//! let mut map = query_build::from_str("name=Acme&address[city]=Carrot+City&ids[]=1&ids[]=2");
//! assert_eq!(path::get(&map, "address.city"), Some(&Value::from("Carrot City")));
//!
//! path::set(&mut map, "address.postcode", 12345)?;
//! path::forget(&mut map, "ids.0")?;
//! assert_eq!(
//!     query_build::to_string(&map),
//!     "name=Acme&address[city]=Carrot+City&address[postcode]=12345&ids[1]=2"
//! );
//!
//! // or, owning the parameters of a URL
//! let mut query = QueryBuild::parse("https://example.com/?page=1");
//! query.add_param("page", 2)?.add_param_dot("sort.by", "name")?;
//! assert_eq!(query.to_string(), "page=2&sort[by]=name");
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod de;
mod error;
mod extract;
mod key;
pub mod path;
mod ser;
mod value;

#[doc(inline)]
pub use builder::QueryBuild;
pub use config::Config;
#[doc(inline)]
pub use de::{from_bytes, from_str};
pub use error::{Error, Result};
pub use extract::query_from_url;
pub use key::{IntoKey, IntoKeys};
#[doc(inline)]
pub use ser::{QsSerializer, to_string};
pub use value::{Map, Value, map_null_to_empty_string};
