//! Representation of a base64 encoded byte sequence

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Deref,
    str::FromStr,
};

use crate::{
    base64::{self, Alphabet},
    error::{self, Error},
};

/// An owned byte sequence rendered as unpadded base64url text.
///
/// The value is written as URL-safe base64 without `=` padding. When read
/// back from JSON it also accepts standard padded base64, see
/// [`Base64Value::decode_lenient`].
///
/// **NOTE**: Enable feature "serde" (on by default) to be able to serialize/deserialize it using [serde](https://serde.rs/).
///
/// # Examples
///
/// ```
/// use base64_value::Base64Value;
///
/// let value = Base64Value::new(vec![0x66, 0x6f, 0x6f, 0xbf]);
/// assert_eq!(value.to_string(), "Zm9vvw");
/// ```
///
/// You can also create a `Base64Value` by parsing base64url text:
///
/// ```
/// use base64_value::Base64Value;
///
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let value = "Zm9vvw".parse::<Base64Value>()?;
/// assert_eq!(value.as_bytes(), &[0x66, 0x6f, 0x6f, 0xbf]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base64Value(Vec<u8>);

impl Base64Value {
    /// Creates a value owning `data`. Never fails, empty input included.
    pub fn new<T: Into<Vec<u8>>>(data: T) -> Self {
        Base64Value(data.into())
    }

    /// Decodes unpadded base64url text.
    ///
    /// Padding and the standard `+`/`/` symbols are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use base64_value::Base64Value;
    ///
    /// assert!(Base64Value::from_encoded("Zm9vvw").is_ok());
    /// assert!(Base64Value::from_encoded("Zm9vvw==").is_err());
    /// ```
    pub fn from_encoded(encoded: &str) -> Result<Self, Error> {
        let data = base64::decode_url_safe(encoded).map_err(error::decode)?;
        Ok(Base64Value(data))
    }

    /// Decodes text in either alphabet.
    ///
    /// Text containing `-` or `_` is decoded as unpadded base64url, anything
    /// else as standard base64, either fully padded or not padded at all.
    /// Line breaks are skipped. This is the rule applied to JSON input.
    ///
    /// # Examples
    ///
    /// ```
    /// use base64_value::Base64Value;
    ///
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let standard = Base64Value::decode_lenient("SGVsbG8rL2Zvbw==")?;
    /// assert_eq!(standard.as_bytes(), b"Hello+/foo");
    ///
    /// let url_safe = Base64Value::decode_lenient("SGVsbG8t_w")?;
    /// assert_eq!(url_safe.as_bytes(), b"Hello-\xff");
    /// # Ok(())
    /// # }
    /// ```
    pub fn decode_lenient(text: &str) -> Result<Self, Error> {
        let alphabet = Alphabet::detect(text);
        #[cfg(feature = "tracing")]
        tracing::debug!("decoding {} base64 chars as {:?}", text.len(), alphabet);

        match alphabet.decode(text) {
            Ok(data) => Ok(Base64Value(data)),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("invalid {:?} base64: {}", alphabet, err);
                Err(error::decode(err))
            }
        }
    }

    /// Renders the bytes as unpadded base64url text, same as `to_string()`.
    pub fn encode(&self) -> String {
        base64::encode(&self.0)
    }

    /// Replaces the whole content with `data`
    pub fn set_bytes<T: Into<Vec<u8>>>(&mut self, data: T) {
        self.0 = data.into();
    }

    /// Gets the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the value, returning the raw bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    /// Number of raw bytes, not encoded characters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Base64Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.encode())
    }
}

impl FromStr for Base64Value {
    type Err = Error;

    fn from_str(val: &str) -> Result<Self, Error> {
        Base64Value::from_encoded(val)
    }
}

impl From<Vec<u8>> for Base64Value {
    fn from(data: Vec<u8>) -> Self {
        Base64Value(data)
    }
}

impl From<&[u8]> for Base64Value {
    fn from(data: &[u8]) -> Self {
        Base64Value(data.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Base64Value {
    fn from(data: [u8; N]) -> Self {
        Base64Value(data.to_vec())
    }
}

impl From<Base64Value> for Vec<u8> {
    fn from(value: Base64Value) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for Base64Value {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Base64Value {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn render_non_ascii_bytes() {
        let value = Base64Value::new(vec![0x66, 0x6f, 0x6f, 0xbf]);
        assert_eq!(value.to_string(), "Zm9vvw");
        assert_eq!(value.encode(), "Zm9vvw");
    }

    #[test]
    fn render_empty() {
        assert_eq!(Base64Value::default().to_string(), "");
        assert_eq!(Base64Value::new(Vec::new()).to_string(), "");
    }

    #[test]
    fn render_never_pads() {
        for len in 0..16 {
            let value = Base64Value::new(vec![0xfb; len]);
            let text = value.to_string();
            assert!(!text.contains(['=', '+', '/']), "{text}");
        }
    }

    #[test]
    fn parse_url_safe() {
        let value = Base64Value::from_str("Zm9vvw").unwrap();
        assert_eq!(value.as_bytes(), &[0x66, 0x6f, 0x6f, 0xbf]);
    }

    #[test]
    fn parse_rejects_padding() {
        let err = Base64Value::from_str("Zm9vvw==").unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn parse_rejects_standard_alphabet() {
        assert!(Base64Value::from_str("ab+/").is_err());
    }

    #[test]
    fn lenient_standard() {
        let value = Base64Value::decode_lenient("SGVsbG8rL2Zvbw==").unwrap();
        assert_eq!(value.as_bytes(), b"Hello+/foo");
    }

    #[test]
    fn lenient_url_safe() {
        let value = Base64Value::decode_lenient("SGVsbG8t_w").unwrap();
        assert_eq!(value.as_bytes(), b"Hello-\xff");
    }

    #[test]
    fn lenient_mixed_alphabets_fail() {
        // '-' selects the URL-safe path, where '+' is illegal
        assert!(Base64Value::decode_lenient("ab-+").unwrap_err().is_decode());
    }

    #[test]
    fn lenient_unpadded_standard() {
        // no '-' or '_', so the standard path is taken
        let value = Base64Value::decode_lenient("Zm9vvw").unwrap();
        assert_eq!(value.as_bytes(), &[0x66, 0x6f, 0x6f, 0xbf]);
    }

    #[test]
    fn lenient_rejects_garbage() {
        assert!(Base64Value::decode_lenient("!!notbase64!!").unwrap_err().is_decode());
    }

    #[test]
    fn lenient_empty() {
        assert!(Base64Value::decode_lenient("").unwrap().is_empty());
    }

    #[test]
    fn set_bytes_replaces() {
        let mut value = Base64Value::from(*b"abc");
        value.set_bytes(b"z".to_vec());
        assert_eq!(value.as_bytes(), b"z");
        assert_eq!(value.len(), 1);
    }

    #[test]
    fn conversions() {
        let value = Base64Value::from(&b"raw"[..]);
        assert_eq!(&*value, b"raw");
        assert_eq!(AsRef::<[u8]>::as_ref(&value), b"raw");
        assert_eq!(Vec::from(value.clone()), b"raw".to_vec());
        assert_eq!(value.into_inner(), b"raw".to_vec());
    }
}
