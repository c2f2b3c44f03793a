//! Error type for base64 values

use std::{error::Error as StdError, fmt};

use crate::BoxError;

/// The errors that may occur when reading a [`Base64Value`](crate::Base64Value)
pub struct Error {
    inner: Box<Inner>,
}

struct Inner {
    kind: Kind,
    source: Option<BoxError>,
}

impl Error {
    pub(crate) fn new<E>(kind: Kind, source: Option<E>) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            inner: Box::new(Inner {
                kind,
                source: source.map(Into::into),
            }),
        }
    }

    /// Returns true if the input was not a well formed JSON string
    pub fn is_format(&self) -> bool {
        matches!(self.inner.kind, Kind::Format)
    }

    /// Returns true if the text was not valid base64
    pub fn is_decode(&self) -> bool {
        matches!(self.inner.kind, Kind::Decode)
    }
}

#[derive(Debug)]
pub(crate) enum Kind {
    /// Input is not a quoted JSON string
    Format,
    /// Text is not valid under the selected base64 alphabet
    Decode,
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("base64_value::Error");

        builder.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            builder.field("source", source);
        }

        builder.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.kind {
            Kind::Format => f.write_str("format error")?,
            Kind::Decode => f.write_str("decode error")?,
        };

        if let Some(ref e) = self.inner.source {
            write!(f, ": {e}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| {
            let r: &(dyn StdError + 'static) = &**e;
            r
        })
    }
}

impl From<::base64::DecodeError> for Error {
    fn from(err: ::base64::DecodeError) -> Error {
        decode(err)
    }
}

#[cfg(feature = "serde")]
pub(crate) fn format<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Format, Some(e))
}

pub(crate) fn decode<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Decode, Some(e))
}
