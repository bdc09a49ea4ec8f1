//! Message codec interface used by transports.
//!
//! Transports and method channels hold a [`MessageCodec`] and use it to turn
//! outgoing values into byte buffers and incoming buffers back into values.

use log::{debug, trace};

use crate::codec::decode::decode_with_options;
use crate::codec::encode::{encode_to_string, encode_value};
use crate::error::{DecodeError, EncodeError};
use crate::limits::DecodeOptions;
use crate::model::Value;

/// Converts values to and from binary messages.
pub trait MessageCodec {
    /// Encodes a message; `None` is the empty message.
    fn encode_message(&self, message: Option<&Value>) -> Result<Vec<u8>, EncodeError>;

    /// Decodes a complete message.
    fn decode_message(&self, message: &[u8]) -> Result<Value, DecodeError>;
}

/// Message codec using the JSON wire format.
///
/// The codec holds no per-message state and can be shared between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMessageCodec {
    options: DecodeOptions,
}

impl JsonMessageCodec {
    /// Creates a codec with default decode options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec with the given decode options.
    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Returns the decode options.
    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Encodes a value to JSON text.
    pub fn encode(&self, value: Option<&Value>) -> Result<String, EncodeError> {
        encode_to_string(value).inspect_err(log_encode_error)
    }

    /// Decodes a value from JSON text.
    pub fn decode(&self, text: &str) -> Result<Value, DecodeError> {
        self.decode_message(text.as_bytes())
    }
}

impl MessageCodec for JsonMessageCodec {
    fn encode_message(&self, message: Option<&Value>) -> Result<Vec<u8>, EncodeError> {
        let bytes = encode_value(message).inspect_err(log_encode_error)?;
        trace!("encoded JSON message of {} bytes", bytes.len());
        Ok(bytes)
    }

    fn decode_message(&self, message: &[u8]) -> Result<Value, DecodeError> {
        trace!("decoding JSON message of {} bytes", message.len());
        decode_with_options(message, self.options).inspect_err(|e| {
            debug!(
                "failed to decode JSON message ({} {}, offset {}): {}",
                e.domain().name(),
                e.code().name(),
                e.offset(),
                e
            );
        })
    }
}

fn log_encode_error(e: &EncodeError) {
    debug!(
        "failed to encode JSON message ({} {}): {}",
        e.domain().name(),
        e.code().name(),
        e
    );
}
