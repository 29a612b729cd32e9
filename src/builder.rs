use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::key::{IntoKey, IntoKeys};
use crate::value::{Map, Value, map_null_to_empty_string};
use crate::{Config, path};

/// An editable set of query parameters.
///
/// `QueryBuild` owns the decoded parameters of a URL or querystring and lets
/// them be changed, either one level deep by key or anywhere in the tree by
/// dot path, before turning them back into a querystring.
///
/// ```
/// use query_build::{QueryBuild, Value};
///
/// # fn main() -> query_build::Result<()> {
/// let mut query = QueryBuild::parse("https://example.com/list?page=2&filter[tag][]=rust");
/// query
///     .add_param("page", 3)?
///     .add_param_dot("filter.tag.1", "serde")?
///     .remove_params("missing")?;
///
/// assert_eq!(query.get_param("page")?, Some(&Value::Int(3)));
/// assert_eq!(query.get_query(None), "page=3&filter[tag][0]=rust&filter[tag][1]=serde");
/// # Ok(())
/// # }
/// ```
///
/// ## Null handling
///
/// `Value::Null` always encodes as an empty value (`key=`). When null
/// handling is enabled, nulls also read back as empty strings from
/// [`QueryBuild::get_query_as_map`]. The stored parameters are never
/// rewritten; each read works on a copy. The setting can be changed with
/// [`QueryBuild::null_as_empty_string`] or overridden per call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryBuild {
    params: Map,
    null_as_empty_string: bool,
    config: Config,
}

impl QueryBuild {
    /// Creates an empty set of parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the parameters of a URL or bare querystring.
    ///
    /// See [`crate::query_from_url`] for how the querystring is located.
    pub fn parse(url_or_query: &str) -> Self {
        Self::with_config(Config::default(), url_or_query)
    }

    /// Decodes the parameters of a URL or bare querystring using `config`,
    /// which is also used when encoding.
    pub fn with_config(config: Config, url_or_query: &str) -> Self {
        let query = crate::query_from_url(url_or_query);
        let params = config.decode_str(&query);
        debug!(params = params.len(), "decoded query parameters");
        Self {
            params,
            null_as_empty_string: config.null_as_empty_string,
            config,
        }
    }

    /// The parameters as currently stored.
    pub fn params(&self) -> &Map {
        &self.params
    }

    /// Direct mutable access to the stored parameters.
    pub fn params_mut(&mut self) -> &mut Map {
        &mut self.params
    }

    /// Sets the top-level parameter `key`, replacing any previous value.
    ///
    /// Fails with [`Error::EmptyKey`] if `key` is empty once converted to a
    /// string.
    pub fn add_param<K: IntoKey, V: Into<Value>>(
        &mut self,
        key: K,
        value: V,
    ) -> Result<&mut Self> {
        let key = non_empty_key(key.into_key())?;
        self.params.insert(key, value.into());
        Ok(self)
    }

    /// Sets the value at the dot path `path`, creating intermediate maps.
    ///
    /// Fails with [`Error::EmptyPath`] if `path` is empty.
    pub fn add_param_dot<V: Into<Value>>(&mut self, path: &str, value: V) -> Result<&mut Self> {
        path::set(&mut self.params, path, value)?;
        Ok(self)
    }

    /// Sets several top-level parameters. Nothing is changed if any key is
    /// empty.
    pub fn add_params<I, K, V>(&mut self, params: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: IntoKey,
        V: Into<Value>,
    {
        let params = params
            .into_iter()
            .map(|(key, value)| -> Result<(String, Value)> {
                Ok((non_empty_key(key.into_key())?, value.into()))
            })
            .collect::<Result<Vec<_>>>()?;
        self.params.extend(params);
        Ok(self)
    }

    /// Sets several dot paths, in order. Nothing is changed if any path is
    /// empty.
    pub fn add_params_dot<I, P, V>(&mut self, params: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<str>,
        V: Into<Value>,
    {
        let params = params.into_iter().collect::<Vec<_>>();
        if params.iter().any(|(path, _)| path.as_ref().is_empty()) {
            return Err(Error::EmptyPath);
        }
        for (path, value) in params {
            path::set(&mut self.params, path.as_ref(), value)?;
        }
        Ok(self)
    }

    /// Removes one or more top-level parameters. Missing keys are ignored;
    /// nothing is removed if any key is empty.
    pub fn remove_params<K: IntoKeys>(&mut self, keys: K) -> Result<&mut Self> {
        let keys = keys.into_keys();
        if keys.iter().any(String::is_empty) {
            return Err(Error::EmptyKey);
        }
        for key in &keys {
            self.params.shift_remove(key);
        }
        Ok(self)
    }

    /// Removes one or more dot paths. Missing paths are ignored; nothing is
    /// removed if any path is empty. Maps emptied by a removal are kept.
    pub fn remove_params_dot<K: IntoKeys>(&mut self, paths: K) -> Result<&mut Self> {
        let paths = paths.into_keys();
        if paths.iter().any(String::is_empty) {
            return Err(Error::EmptyPath);
        }
        for path in &paths {
            path::forget(&mut self.params, path)?;
        }
        Ok(self)
    }

    /// Removes every parameter.
    pub fn remove_all(&mut self) -> &mut Self {
        self.params.clear();
        self
    }

    /// Returns `true` if the top-level parameter `key` is present, even if
    /// its value is null.
    pub fn has_param<K: IntoKey>(&self, key: K) -> Result<bool> {
        let key = non_empty_key(key.into_key())?;
        Ok(self.params.contains_key(&key))
    }

    /// Returns the top-level parameter `key`, if present.
    pub fn get_param<K: IntoKey>(&self, key: K) -> Result<Option<&Value>> {
        let key = non_empty_key(key.into_key())?;
        Ok(self.params.get(&key))
    }

    /// Returns the value at the dot path `path`, if present.
    pub fn get_param_dot(&self, path: &str) -> Option<&Value> {
        path::get(&self.params, path)
    }

    /// Sets whether nulls read back as empty strings by default.
    pub fn null_as_empty_string(&mut self, null_as_empty_string: bool) -> &mut Self {
        self.null_as_empty_string = null_as_empty_string;
        self
    }

    /// Returns the parameters, with nulls replaced by empty strings if null
    /// handling is enabled (or `null_as_empty_string` is `Some(true)`).
    pub fn get_query_as_map(&self, null_as_empty_string: Option<bool>) -> Cow<'_, Map> {
        if null_as_empty_string.unwrap_or(self.null_as_empty_string) {
            let mut params = self.params.clone();
            map_null_to_empty_string(&mut params);
            Cow::Owned(params)
        } else {
            Cow::Borrowed(&self.params)
        }
    }

    /// Encodes the parameters as a querystring, without a leading `?`.
    pub fn get_query(&self, null_as_empty_string: Option<bool>) -> String {
        self.config.encode_map(&self.get_query_as_map(null_as_empty_string))
    }

    /// Like [`QueryBuild::get_query`], with the result percent-decoded once
    /// more for display.
    ///
    /// The result is not guaranteed to decode back to the same parameters.
    pub fn get_query_url_decode(&self, null_as_empty_string: Option<bool>) -> String {
        crate::de::decode_to_string(self.get_query(null_as_empty_string).as_bytes())
    }
}

fn non_empty_key(key: String) -> Result<String> {
    if key.is_empty() {
        Err(Error::EmptyKey)
    } else {
        Ok(key)
    }
}

impl From<Map> for QueryBuild {
    fn from(params: Map) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }
}

impl FromStr for QueryBuild {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for QueryBuild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_query(None))
    }
}
