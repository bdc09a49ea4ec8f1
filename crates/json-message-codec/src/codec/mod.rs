//! JSON encoding/decoding for messages.
//!
//! The wire format is JSON text with two extensions on the encode side:
//! typed numeric lists are written as plain arrays, and map keys may be any
//! value rather than only strings.

pub mod decode;
pub mod encode;
pub mod message;
pub mod primitives;

pub use decode::{decode_str, decode_value, decode_with_options};
pub use encode::{encode_into, encode_to_string, encode_value};
pub use message::{JsonMessageCodec, MessageCodec};
pub use primitives::{Reader, Writer, format_float};
