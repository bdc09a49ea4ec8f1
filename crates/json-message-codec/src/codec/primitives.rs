//! Primitive reading and writing for the JSON wire format.
//!
//! Implements character classification, the decode cursor and the scalar
//! writers (integers, floats, escaped strings).

use crate::error::EncodeError;

/// Byte returned by [`Reader::current`] once the input is exhausted.
pub const END_OF_INPUT: u8 = b'\0';

/// Text of `i64::MIN`, whose magnitude does not fit in an `i64`.
pub const MIN_INT64_TEXT: &str = "-9223372036854775808";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

// =============================================================================
// CHARACTER CLASSIFICATION
// =============================================================================

/// Returns true if `c` is JSON whitespace.
#[inline]
pub fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\n' | b'\r' | b'\t')
}

/// Converts an ASCII decimal digit to its value.
#[inline]
pub fn digit_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        _ => None,
    }
}

/// Converts an ASCII hex digit (either case) to its value.
#[inline]
pub fn hex_digit_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Cursor over an input buffer.
///
/// The position only moves forward. Reading at or past the end yields
/// [`END_OF_INPUT`] instead of failing, which lets every grammar rule treat
/// exhaustion as just another unexpected byte.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Returns the byte at the read position, or [`END_OF_INPUT`].
    #[inline]
    pub fn current(&self) -> u8 {
        self.data.get(self.pos).copied().unwrap_or(END_OF_INPUT)
    }

    /// Moves past the current byte.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.data.len() {
            self.pos += 1;
        }
    }

    /// Moves to the next non-whitespace byte.
    #[inline]
    pub fn skip_whitespace(&mut self) {
        while is_whitespace(self.current()) {
            self.pos += 1;
        }
    }

    /// Returns the bytes from `start` up to the read position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.data[start..self.pos]
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Output buffer for encoded JSON.
///
/// Everything written is UTF-8 text, so the buffer is a `String`.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: String,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.into_bytes()
    }

    /// Returns the written text.
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single structural character.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// Writes raw text.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Writes a decimal integer.
    pub fn write_int(&mut self, value: i64) {
        if value == i64::MIN {
            self.write_str(MIN_INT64_TEXT);
            return;
        }
        if value < 0 {
            self.buf.push('-');
        }

        // Digits are produced least significant first
        let mut digits = [b'0'; 20];
        let mut start = digits.len();
        let mut n = value.abs();
        loop {
            start -= 1;
            digits[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        self.buf.extend(digits[start..].iter().map(|&d| char::from(d)));
    }

    /// Writes a float, failing for NaN and infinities.
    pub fn write_float(&mut self, value: f64) -> Result<(), EncodeError> {
        if !value.is_finite() {
            return Err(EncodeError::NonFiniteFloat { value });
        }
        self.write_str(&format_float(value));
        Ok(())
    }

    /// Writes a quoted, escaped string.
    pub fn write_string(&mut self, s: &str) {
        self.buf.push('"');
        let mut run_start = 0;
        // Escaped bytes are all ASCII, so every split is on a char boundary
        for (i, b) in s.bytes().enumerate() {
            let escape = match b {
                b'"' => "\\\"",
                b'\\' => "\\\\",
                0x08 => "\\b",
                0x0c => "\\f",
                b'\n' => "\\n",
                b'\r' => "\\r",
                b'\t' => "\\t",
                0x00..=0x1f => "",
                _ => continue,
            };
            self.buf.push_str(&s[run_start..i]);
            if escape.is_empty() {
                self.write_unicode_escape(b);
            } else {
                self.buf.push_str(escape);
            }
            run_start = i + 1;
        }
        self.buf.push_str(&s[run_start..]);
        self.buf.push('"');
    }

    /// Writes a `\u00xx` escape for a control byte.
    fn write_unicode_escape(&mut self, c: u8) {
        self.buf.push_str("\\u00");
        self.buf.push(char::from(HEX_DIGITS[(c >> 4) as usize]));
        self.buf.push(char::from(HEX_DIGITS[(c & 0xF) as usize]));
    }
}

// =============================================================================
// FLOAT FORMATTING
// =============================================================================

/// Decimal exponents in `[FIXED_MIN_EXP, FIXED_MAX_EXP)` are written in
/// fixed notation, the rest in scientific notation.
const FIXED_MIN_EXP: i32 = -4;
const FIXED_MAX_EXP: i32 = 17;

/// Formats a finite float with the shortest digits that parse back to the
/// same value.
///
/// The output always contains a `.` so it can't be read back as an
/// integer: `1.0`, `0.0001`, `1.5e-7`, `1.0e+300`.
pub fn format_float(value: f64) -> String {
    // `{:e}` yields the shortest round-trip digits, e.g. "-1.2345e-7"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(m) => (true, m),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }

    if (FIXED_MIN_EXP..FIXED_MAX_EXP).contains(&exponent) {
        if exponent >= 0 {
            let int_len = exponent as usize + 1;
            if digits.len() <= int_len {
                out.push_str(&digits);
                out.extend(std::iter::repeat_n('0', int_len - digits.len()));
                out.push_str(".0");
            } else {
                out.push_str(&digits[..int_len]);
                out.push('.');
                out.push_str(&digits[int_len..]);
            }
        } else {
            out.push_str("0.");
            out.extend(std::iter::repeat_n('0', (-exponent - 1) as usize));
            out.push_str(&digits);
        }
    } else {
        out.push_str(&digits[..1]);
        out.push('.');
        if digits.len() > 1 {
            out.push_str(&digits[1..]);
        } else {
            out.push('0');
        }
        out.push('e');
        if exponent >= 0 {
            out.push('+');
        }
        out.push_str(&exponent.to_string());
    }
    out
}
