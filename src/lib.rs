//! A byte sequence that travels through JSON as base64 text.
//!
//! [`Base64Value`] owns arbitrary binary data (tokens, identifiers, blobs)
//! and renders it as URL-safe base64 without `=` padding. When reading JSON
//! it also accepts payloads written by standard padded base64 encoders:
//! text containing `-` or `_` is decoded as base64url, anything else as
//! standard base64.
//!
//! ```
//! use base64_value::Base64Value;
//!
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let value = Base64Value::new(vec![0x66, 0x6f, 0x6f, 0xbf]);
//! assert_eq!(value.to_string(), "Zm9vvw");
//!
//! let decoded = "Zm9vvw".parse::<Base64Value>()?;
//! assert_eq!(decoded, value);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! * **serde** (default): `Serialize`/`Deserialize` implementations, the
//!   JSON token helpers and the [`as_base64`] field adapter
//! * **tracing**: logs the alphabet chosen when decoding
//!   ([`tracing`](https://docs.rs/tracing) crate)

#![doc(html_root_url = "https://docs.rs/crate/base64-value/0.1.0")]
#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod base64;
pub mod error;
mod value;

use std::error::Error as StdError;

pub use crate::{base64::Alphabet, error::Error, value::Base64Value};
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub use crate::value::as_base64;

pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;
