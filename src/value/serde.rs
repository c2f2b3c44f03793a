use std::fmt::{Formatter, Result as FmtResult};

use serde::{
    de::{Deserializer, Error as DeError, Visitor},
    ser::Serializer,
    Deserialize, Serialize,
};

use super::Base64Value;
use crate::error::{self, Error};

impl Base64Value {
    /// Renders the value as a quoted JSON string token.
    ///
    /// ```
    /// use base64_value::Base64Value;
    ///
    /// assert_eq!(Base64Value::new(*b"foo").to_json(), r#""Zm9v""#);
    /// assert_eq!(Base64Value::default().to_json(), r#""""#);
    /// ```
    pub fn to_json(&self) -> String {
        format!("\"{}\"", self.encode())
    }

    /// Parses a quoted JSON string token into a new value.
    ///
    /// See [`Base64Value::set_from_json`] for the accepted input.
    pub fn from_json<T: AsRef<[u8]>>(token: T) -> Result<Self, Error> {
        let mut value = Base64Value::default();
        value.set_from_json(token)?;
        Ok(value)
    }

    /// Replaces the content with the bytes encoded in a quoted JSON string token.
    ///
    /// The token must be a JSON string literal, anything else is a format
    /// error. Its unescaped text is decoded with
    /// [`Base64Value::decode_lenient`]. On error the value is left untouched.
    ///
    /// ```
    /// use base64_value::Base64Value;
    ///
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let mut value = Base64Value::default();
    /// value.set_from_json(r#""SGVsbG8rL2Zvbw==""#)?;
    /// assert_eq!(value.as_bytes(), b"Hello+/foo");
    ///
    /// assert!(value.set_from_json("123").unwrap_err().is_format());
    /// assert_eq!(value.as_bytes(), b"Hello+/foo");
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_from_json<T: AsRef<[u8]>>(&mut self, token: T) -> Result<(), Error> {
        let token = token.as_ref();
        if token.len() < 2 || !token.starts_with(b"\"") || !token.ends_with(b"\"") {
            return Err(error::format("value is not a string"));
        }

        let text: String = serde_json::from_slice(token).map_err(error::format)?;
        let decoded = Base64Value::decode_lenient(&text)?;
        self.set_bytes(decoded.into_inner());
        Ok(())
    }
}

impl Serialize for Base64Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Base64Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Base64Visitor;

        impl<'de> Visitor<'de> for Base64Visitor {
            type Value = Base64Value;

            fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
                formatter.write_str("a base64 string")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: DeError,
            {
                Base64Value::decode_lenient(s).map_err(DeError::custom)
            }
        }

        deserializer.deserialize_str(Base64Visitor)
    }
}

/// Serde helpers for plain byte fields.
///
/// Use with `#[serde(with = "base64_value::as_base64")]` on a `Vec<u8>`
/// field to get the same encoding as [`Base64Value`] without the wrapper.
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Token {
///     #[serde(with = "base64_value::as_base64")]
///     secret: Vec<u8>,
/// }
///
/// # fn main() -> Result<(), serde_json::Error> {
/// let token: Token = serde_json::from_str(r#"{ "secret": "Zm9vvw" }"#)?;
/// assert_eq!(token.secret, [0x66, 0x6f, 0x6f, 0xbf]);
/// assert_eq!(serde_json::to_string(&token)?, r#"{"secret":"Zm9vvw"}"#);
/// # Ok(())
/// # }
/// ```
pub mod as_base64 {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::{base64, Base64Value};

    /// Serializes `data` as unpadded base64url
    pub fn serialize<T, S>(data: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: ?Sized + AsRef<[u8]>,
        S: Serializer,
    {
        serializer.serialize_str(&base64::encode(data.as_ref()))
    }

    /// Deserializes base64 in either alphabet
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: From<Vec<u8>>,
        D: Deserializer<'de>,
    {
        Base64Value::deserialize(deserializer).map(|value| T::from(value.into_inner()))
    }
}
