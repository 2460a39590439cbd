//! Nested query string serializer, used by the `urlcat` crate
//!
//! Flattens maps, sequences and scalars into percent-encoded
//! `key=value&key2=value2` pairs, with selectable array formats
//! (`indices`, `brackets`, `repeat`, `comma`) and a choice between
//! RFC1738 (`+`) and RFC3986 (`%20`) space encoding.

#[cfg(feature = "serde")]
pub mod ser;
pub mod stringify;
pub mod value;

#[cfg(feature = "serde")]
pub use ser::to_value;
pub use stringify::{stringify, ArrayFormat, Format, Options};
pub use value::{Params, Value};
