//! JSON message codec for a tagged value model.
//!
//! This crate converts between [`Value`] trees and JSON text, the format
//! used to exchange messages between a host process and an embedded
//! runtime over a binary message channel.
//!
//! # Quick Start
//!
//! ```rust
//! use json_message_codec::{decode_value, encode_value, Value, ValueMap};
//!
//! let mut args = ValueMap::new();
//! args.set_string("text", "hello");
//! args.set_string("selection", vec![0i64, 5]);
//!
//! let bytes = encode_value(Some(&Value::Map(args))).unwrap();
//! assert_eq!(bytes, br#"{"text":"hello","selection":[0,5]}"#);
//!
//! let decoded = decode_value(&bytes).unwrap();
//! let map = decoded.as_map().unwrap();
//! assert_eq!(map.lookup_string("text").and_then(Value::as_str), Some("hello"));
//! ```
//!
//! # Modules
//!
//! - [`model`]: The value model (Value, ValueType, ValueMap)
//! - [`codec`]: JSON encoding/decoding and the message codec interface
//! - [`validate`]: Checks on value trees before encoding
//! - [`error`]: Error types and codes
//! - [`limits`]: Resource limits for decoding
//!
//! # Wire Format
//!
//! Standard JSON, with these properties:
//! - Typed lists (bytes, 32/64-bit ints, floats) are written as arrays and
//!   read back as generic lists of ints or floats
//! - Floats always contain a `.` so they are never read back as ints;
//!   NaN and infinities can't be encoded
//! - Map keys may be any value; non-string keys are written unquoted, which
//!   strict JSON parsers reject
//! - Decoding is strict: control characters in strings, missing commas and
//!   trailing bytes are all errors
//!
//! # Security
//!
//! The decoder handles untrusted input without panicking. Nesting depth is
//! bounded (see [`DecodeOptions`]) so deeply nested input can't overflow
//! the stack.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{
    decode_str, decode_value, decode_with_options, encode_into, encode_to_string, encode_value,
    JsonMessageCodec, MessageCodec,
};
pub use error::{
    DecodeError, EncodeError, ErrorCode, ErrorDomain, PathSegment, ValidationError, ValuePath,
};
pub use limits::DecodeOptions;
pub use model::{Value, ValueMap, ValueType};
pub use validate::{has_only_string_keys, validate_value};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
