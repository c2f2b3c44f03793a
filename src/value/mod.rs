//! Binary payloads carried as base64 text

#[cfg(feature = "serde")]
mod serde;

mod types;

#[cfg(feature = "serde")]
pub use self::serde::as_base64;
pub use self::types::Base64Value;
