//! Error types for JSON message encoding and decoding.

use std::fmt;

use thiserror::Error;

/// The family an [`ErrorCode`] belongs to.
///
/// Generic message codec failures (running out of data, leftover data, an
/// unspecific parse failure) are shared with every codec a transport may
/// use. The remaining codes only make sense for the JSON wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorDomain {
    /// Failures common to all message codecs.
    Codec,
    /// Failures specific to the JSON wire format.
    Json,
}

impl ErrorDomain {
    /// Returns the domain name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorDomain::Codec => "message-codec",
            ErrorDomain::Json => "json-message-codec",
        }
    }
}

/// Closed set of error kinds reported by the codec.
///
/// Callers and tests match on these rather than on the detailed error
/// variants, which may grow more context over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Input ended inside a string, array, object or number.
    OutOfData,
    /// A complete value was read but bytes remain.
    AdditionalData,
    /// Unexpected input where no more specific kind applies.
    ParseFailure,
    /// An array or object continuation lacked a comma.
    MissingComma,
    /// Malformed numeric literal, or a non-finite float on encode.
    InvalidNumber,
    /// An object key did not start with `"`.
    InvalidObjectKeyType,
    /// A raw control byte inside a string literal.
    InvalidStringCharacter,
    /// Unknown character after `\` in a string literal.
    InvalidStringEscapeSequence,
    /// `\u` not followed by four hex digits.
    InvalidStringUnicodeEscape,
}

impl ErrorCode {
    /// Returns the domain this code is reported under.
    pub fn domain(&self) -> ErrorDomain {
        match self {
            ErrorCode::OutOfData | ErrorCode::AdditionalData | ErrorCode::ParseFailure => {
                ErrorDomain::Codec
            }
            _ => ErrorDomain::Json,
        }
    }

    /// Returns a stable identifier for this code (e.g., "missing-comma").
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::OutOfData => "out-of-data",
            ErrorCode::AdditionalData => "additional-data",
            ErrorCode::ParseFailure => "failed",
            ErrorCode::MissingComma => "missing-comma",
            ErrorCode::InvalidNumber => "invalid-number",
            ErrorCode::InvalidObjectKeyType => "invalid-object-key-type",
            ErrorCode::InvalidStringCharacter => "invalid-string-character",
            ErrorCode::InvalidStringEscapeSequence => "invalid-string-escape-sequence",
            ErrorCode::InvalidStringUnicodeEscape => "invalid-string-unicode-escape",
        }
    }
}

/// Error during JSON decoding.
///
/// Every variant that refers to a position in the input carries the byte
/// `offset` at which the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    // === Codec domain ===
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEnd { context: &'static str, offset: usize },

    #[error("unused {unused} bytes after JSON message")]
    AdditionalData { unused: usize, offset: usize },

    #[error("unexpected byte 0x{byte:02x} at offset {offset} when decoding {context}")]
    UnexpectedByte {
        byte: u8,
        context: &'static str,
        offset: usize,
    },

    #[error("expected word {word} not present at offset {offset}")]
    ExpectedWord { word: &'static str, offset: usize },

    #[error("missing colon after JSON object key at offset {offset}")]
    MissingColon { offset: usize },

    #[error("nesting depth {depth} exceeds maximum {max}")]
    NestingTooDeep { depth: usize, max: usize, offset: usize },

    // === JSON domain ===
    #[error("expected comma, got 0x{found:02x} at offset {offset}")]
    MissingComma { found: u8, offset: usize },

    #[error("invalid number at offset {offset}: {reason}")]
    InvalidNumber { reason: &'static str, offset: usize },

    #[error("missing string key in JSON object, got 0x{found:02x} at offset {offset}")]
    InvalidObjectKey { found: u8, offset: usize },

    #[error("invalid character 0x{byte:02x} in string at offset {offset}")]
    InvalidStringCharacter { byte: u8, offset: usize },

    #[error("invalid UTF-8 in string at offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("unknown string escape character 0x{byte:02x} at offset {offset}")]
    InvalidEscape { byte: u8, offset: usize },

    #[error("invalid unicode escape at offset {offset}: {reason}")]
    InvalidUnicodeEscape { reason: &'static str, offset: usize },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::UnexpectedEnd { .. } => ErrorCode::OutOfData,
            DecodeError::AdditionalData { .. } => ErrorCode::AdditionalData,
            DecodeError::UnexpectedByte { .. }
            | DecodeError::ExpectedWord { .. }
            | DecodeError::MissingColon { .. }
            | DecodeError::NestingTooDeep { .. } => ErrorCode::ParseFailure,
            DecodeError::MissingComma { .. } => ErrorCode::MissingComma,
            DecodeError::InvalidNumber { .. } => ErrorCode::InvalidNumber,
            DecodeError::InvalidObjectKey { .. } => ErrorCode::InvalidObjectKeyType,
            DecodeError::InvalidStringCharacter { .. } | DecodeError::InvalidUtf8 { .. } => {
                ErrorCode::InvalidStringCharacter
            }
            DecodeError::InvalidEscape { .. } => ErrorCode::InvalidStringEscapeSequence,
            DecodeError::InvalidUnicodeEscape { .. } => ErrorCode::InvalidStringUnicodeEscape,
        }
    }

    /// Returns the domain of this error's code.
    pub fn domain(&self) -> ErrorDomain {
        self.code().domain()
    }

    /// Returns the byte offset at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::UnexpectedEnd { offset, .. }
            | DecodeError::AdditionalData { offset, .. }
            | DecodeError::UnexpectedByte { offset, .. }
            | DecodeError::ExpectedWord { offset, .. }
            | DecodeError::MissingColon { offset }
            | DecodeError::NestingTooDeep { offset, .. }
            | DecodeError::MissingComma { offset, .. }
            | DecodeError::InvalidNumber { offset, .. }
            | DecodeError::InvalidObjectKey { offset, .. }
            | DecodeError::InvalidStringCharacter { offset, .. }
            | DecodeError::InvalidUtf8 { offset }
            | DecodeError::InvalidEscape { offset, .. }
            | DecodeError::InvalidUnicodeEscape { offset, .. } => *offset,
        }
    }
}

/// Error during JSON encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("can't encode NaN or Inf in JSON (got {value})")]
    NonFiniteFloat { value: f64 },
}

impl EncodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EncodeError::NonFiniteFloat { .. } => ErrorCode::InvalidNumber,
        }
    }

    /// Returns the domain of this error's code.
    pub fn domain(&self) -> ErrorDomain {
        self.code().domain()
    }
}

/// One step from a value to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Element of a list or typed list.
    Index(usize),
    /// Key of the map entry at this position.
    MapKey(usize),
    /// Value of the map entry at this position.
    MapValue(usize),
}

/// Location of a value inside a tree, from the root.
///
/// Displays as `$` followed by one step per segment, e.g.
/// `$[2].values[0][1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ValuePath(Vec<PathSegment>);

impl ValuePath {
    /// Returns the segments from the root down.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Returns true for the root itself.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PathSegment>> for ValuePath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Index(i) => write!(f, "[{}]", i)?,
                PathSegment::MapKey(i) => write!(f, ".keys[{}]", i)?,
                PathSegment::MapValue(i) => write!(f, ".values[{}]", i)?,
            }
        }
        Ok(())
    }
}

/// Error found while validating a value tree before encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("can't encode NaN or Inf in JSON (got {value} at {path})")]
    NonFiniteFloat { value: f64, path: ValuePath },
}

impl ValidationError {
    /// Returns the error code encoding would report.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::NonFiniteFloat { .. } => ErrorCode::InvalidNumber,
        }
    }

    /// Returns the domain of this error's code.
    pub fn domain(&self) -> ErrorDomain {
        self.code().domain()
    }

    /// Returns where in the tree the problem is.
    pub fn path(&self) -> &ValuePath {
        match self {
            ValidationError::NonFiniteFloat { path, .. } => path,
        }
    }
}

impl From<ValidationError> for EncodeError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::NonFiniteFloat { value, .. } => EncodeError::NonFiniteFloat { value },
        }
    }
}
