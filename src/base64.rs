//! Base64 engines and alphabet detection

use std::borrow::Cow;

use ::base64::{
    alphabet,
    engine::{DecodePaddingMode, Engine, GeneralPurpose, GeneralPurposeConfig},
    DecodeError,
};

/// URL-safe alphabet, never padded on output, padding rejected on input.
const URL_SAFE_NO_PAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Standard alphabet, for input carrying `=` padding. The padding must be complete.
const STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

/// Standard alphabet, for input without any `=`, such as the output of
/// [`encode`] when it holds no `-` or `_`.
const STANDARD_NO_PAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// The base64 alphabet a piece of encoded text is decoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `-` and `_` in place of `+` and `/`, without `=` padding
    UrlSafe,
    /// `+` and `/`, either fully padded or not padded at all
    Standard,
}

impl Alphabet {
    /// Picks the alphabet used to decode `text`.
    ///
    /// Text containing a `-` or `_` can only be URL-safe, anything else is
    /// treated as standard base64.
    ///
    /// ```
    /// use base64_value::Alphabet;
    ///
    /// assert_eq!(Alphabet::detect("SGVsbG8t_w"), Alphabet::UrlSafe);
    /// assert_eq!(Alphabet::detect("SGVsbG8rL2Zvbw=="), Alphabet::Standard);
    /// ```
    pub fn detect(text: &str) -> Self {
        if text.contains(['-', '_']) {
            Alphabet::UrlSafe
        } else {
            Alphabet::Standard
        }
    }

    pub(crate) fn decode<T: AsRef<[u8]>>(self, input: T) -> Result<Vec<u8>, DecodeError> {
        match self {
            Alphabet::UrlSafe => decode_url_safe(input),
            Alphabet::Standard => decode_standard(input),
        }
    }
}

pub(crate) fn encode<T: AsRef<[u8]>>(input: T) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

pub(crate) fn decode_url_safe<T: AsRef<[u8]>>(input: T) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD.decode(strip_line_breaks(input.as_ref()))
}

pub(crate) fn decode_standard<T: AsRef<[u8]>>(input: T) -> Result<Vec<u8>, DecodeError> {
    let input = strip_line_breaks(input.as_ref());
    if input.contains(&b'=') {
        STANDARD.decode(input)
    } else {
        STANDARD_NO_PAD.decode(input)
    }
}

/// Drops `\r` and `\n`, which wrapped encoder output may contain anywhere.
fn strip_line_breaks(input: &[u8]) -> Cow<'_, [u8]> {
    if input.iter().any(|&b| matches!(b, b'\r' | b'\n')) {
        Cow::Owned(
            input
                .iter()
                .copied()
                .filter(|&b| !matches!(b, b'\r' | b'\n'))
                .collect(),
        )
    } else {
        Cow::Borrowed(input)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn encode_has_no_padding() {
        assert_eq!(encode(b"f"), "Zg");
        assert_eq!(encode(b"fo"), "Zm8");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn encode_uses_url_safe_alphabet() {
        assert_eq!(encode([0xfb, 0xff, 0xbf]), "-_-_");
    }

    #[test]
    fn url_safe_rejects_padding() {
        assert!(decode_url_safe("Zg==").is_err());
        assert_eq!(decode_url_safe("Zg").unwrap(), b"f");
    }

    #[test]
    fn url_safe_rejects_standard_symbols() {
        assert!(decode_url_safe("+/+/").is_err());
    }

    #[test]
    fn standard_padding_optional() {
        assert_eq!(decode_standard("Zg==").unwrap(), b"f");
        assert_eq!(decode_standard("Zg").unwrap(), b"f");
        assert!(decode_standard("Z").is_err());
    }

    #[test]
    fn standard_rejects_partial_padding() {
        assert!(decode_standard("Zg=").is_err());
        assert!(decode_standard("Zm9vYg=").is_err());
        assert!(decode_standard("Zm9vYg==").is_ok());
    }

    #[test]
    fn line_breaks_are_skipped() {
        assert_eq!(decode_standard("Zm9v\nYmFy").unwrap(), b"foobar");
        assert_eq!(decode_standard("Zm9v\r\nYg==\r\n").unwrap(), b"foob");
        assert_eq!(decode_url_safe("-_\n-_").unwrap(), [0xfb, 0xff, 0xbf]);
        assert!(decode_standard("Zm9v YmFy").is_err());
    }

    #[test]
    fn standard_rejects_url_safe_symbols() {
        assert!(decode_standard("-_-_").is_err());
    }

    #[test]
    fn standard_accepts_nonzero_trailing_bits() {
        assert_eq!(decode_standard("Zh==").unwrap(), b"f");
    }

    #[test]
    fn detect_alphabet() {
        assert_eq!(Alphabet::detect(""), Alphabet::Standard);
        assert_eq!(Alphabet::detect("abc-"), Alphabet::UrlSafe);
        assert_eq!(Alphabet::detect("abc_"), Alphabet::UrlSafe);
        assert_eq!(Alphabet::detect("ab+/"), Alphabet::Standard);
    }
}
