//! Coercion of caller-supplied keys into the string keys of a [`crate::Map`].

/// A type that can name a single map key.
///
/// Strings are used as-is; numbers are formatted the same way they are when
/// encoded as querystring values, so `1`, `1.0` and `"1"` all name the key
/// `"1"`.
pub trait IntoKey {
    fn into_key(self) -> String;
}

impl IntoKey for &str {
    fn into_key(self) -> String {
        self.to_owned()
    }
}

impl IntoKey for String {
    fn into_key(self) -> String {
        self
    }
}

impl IntoKey for &String {
    fn into_key(self) -> String {
        self.clone()
    }
}

impl IntoKey for char {
    fn into_key(self) -> String {
        self.to_string()
    }
}

impl IntoKey for bool {
    fn into_key(self) -> String {
        let key = if self { "1" } else { "0" };
        key.to_owned()
    }
}

impl IntoKey for f32 {
    fn into_key(self) -> String {
        crate::value::format_float(f64::from(self))
    }
}

impl IntoKey for f64 {
    fn into_key(self) -> String {
        crate::value::format_float(self)
    }
}

macro_rules! into_key_itoa {
    ($($ty:ty),*) => {
        $(
            impl IntoKey for $ty {
                fn into_key(self) -> String {
                    itoa::Buffer::new().format(self).to_owned()
                }
            }
        )*
    };
}

into_key_itoa!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// One key, or a collection of keys.
///
/// Lets the removal operations accept either `"a"` or `["a", "b"]`.
pub trait IntoKeys {
    fn into_keys(self) -> Vec<String>;
}

macro_rules! into_keys_single {
    ($($ty:ty),*) => {
        $(
            impl IntoKeys for $ty {
                fn into_keys(self) -> Vec<String> {
                    vec![self.into_key()]
                }
            }
        )*
    };
}

into_keys_single!(
    &str, String, &String, char, bool, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64,
    usize
);

impl<K: IntoKey> IntoKeys for Vec<K> {
    fn into_keys(self) -> Vec<String> {
        self.into_iter().map(IntoKey::into_key).collect()
    }
}

impl<K: IntoKey + Clone> IntoKeys for &[K] {
    fn into_keys(self) -> Vec<String> {
        self.iter().cloned().map(IntoKey::into_key).collect()
    }
}

impl<K: IntoKey, const N: usize> IntoKeys for [K; N] {
    fn into_keys(self) -> Vec<String> {
        self.into_iter().map(IntoKey::into_key).collect()
    }
}
