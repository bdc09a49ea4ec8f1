//! Value decoding from JSON text.
//!
//! A single-pass recursive descent reader with one byte of lookahead. The
//! first violation aborts the whole decode; no partial value is returned.
//!
//! Two behaviours differ from a textbook JSON parser:
//! - A leading zero ends the integer part, so `01` reads as `0` and the `1`
//!   is reported as additional data by the top-level check.
//! - Duplicate object keys are allowed; the last value wins and keeps the
//!   position of the first occurrence.

use rustc_hash::FxHashMap;

use crate::codec::primitives::{END_OF_INPUT, Reader, digit_value, hex_digit_value};
use crate::error::DecodeError;
use crate::limits::{DecodeOptions, UNICODE_ESCAPE_DIGITS};
use crate::model::{Value, ValueMap};

/// Decodes a complete message.
///
/// The whole input must be consumed; trailing bytes after the value (other
/// than whitespace) are an error.
pub fn decode_value(data: &[u8]) -> Result<Value, DecodeError> {
    decode_with_options(data, DecodeOptions::default())
}

/// Decodes a complete message from text.
pub fn decode_str(text: &str) -> Result<Value, DecodeError> {
    decode_value(text.as_bytes())
}

/// Decodes a complete message with the given options.
pub fn decode_with_options(data: &[u8], options: DecodeOptions) -> Result<Value, DecodeError> {
    let mut decoder = Decoder::new(data, options);
    let value = decoder.read_value()?;

    let reader = &decoder.reader;
    if !reader.is_empty() {
        return Err(DecodeError::AdditionalData {
            unused: reader.remaining_len(),
            offset: reader.position(),
        });
    }
    Ok(value)
}

struct Decoder<'a> {
    reader: Reader<'a>,
    max_depth: usize,
    depth: usize,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            reader: Reader::new(data),
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// Reads one value with its surrounding whitespace.
    fn read_value(&mut self) -> Result<Value, DecodeError> {
        self.reader.skip_whitespace();

        let value = match self.reader.current() {
            b'{' => self.read_object()?,
            b'[' => self.read_array()?,
            b'"' => Value::String(self.read_string()?),
            b'-' | b'0'..=b'9' => self.read_number()?,
            b't' => {
                self.read_word("true")?;
                Value::Bool(true)
            }
            b'f' => {
                self.read_word("false")?;
                Value::Bool(false)
            }
            b'n' => {
                self.read_word("null")?;
                Value::Null
            }
            END_OF_INPUT => return Err(self.unexpected_end("value")),
            byte => {
                return Err(DecodeError::UnexpectedByte {
                    byte,
                    context: "value",
                    offset: self.reader.position(),
                });
            }
        };

        self.reader.skip_whitespace();
        Ok(value)
    }

    fn read_word(&mut self, word: &'static str) -> Result<(), DecodeError> {
        let offset = self.reader.position();
        for &expected in word.as_bytes() {
            if self.reader.current() != expected {
                return Err(DecodeError::ExpectedWord { word, offset });
            }
            self.reader.advance();
        }
        Ok(())
    }

    fn read_comma(&mut self) -> Result<(), DecodeError> {
        let found = self.reader.current();
        if found != b',' {
            return Err(DecodeError::MissingComma {
                found,
                offset: self.reader.position(),
            });
        }
        self.reader.advance();
        Ok(())
    }

    // =========================================================================
    // NUMBERS
    // =========================================================================

    fn read_number(&mut self) -> Result<Value, DecodeError> {
        let start = self.reader.position();

        let negative = self.reader.current() == b'-';
        if negative {
            self.reader.advance();
            if digit_value(self.reader.current()).is_none() {
                return Err(self.invalid_number("missing digits after negative sign"));
            }
        }

        // Integer part: a lone zero, or a run of digits
        let mut magnitude: Option<u64> = Some(0);
        if self.reader.current() == b'0' {
            self.reader.advance();
        } else {
            while let Some(d) = digit_value(self.reader.current()) {
                magnitude = magnitude
                    .and_then(|m| m.checked_mul(10))
                    .and_then(|m| m.checked_add(u64::from(d)));
                self.reader.advance();
            }
        }

        let mut is_float = false;

        if self.reader.current() == b'.' {
            is_float = true;
            self.reader.advance();
            if !self.skip_digits() {
                return Err(self.invalid_number("missing digits after decimal point"));
            }
        }

        if matches!(self.reader.current(), b'e' | b'E') {
            is_float = true;
            self.reader.advance();
            if matches!(self.reader.current(), b'+' | b'-') {
                self.reader.advance();
            }
            if !self.skip_digits() {
                return Err(self.invalid_number("missing digits in exponent"));
            }
        }

        if is_float {
            return self.convert_float(start).map(Value::Float);
        }

        let int = match (negative, magnitude) {
            (false, Some(m)) => i64::try_from(m).ok(),
            // -(2^63) is i64::MIN, which wraps back to itself
            (true, Some(m)) if m <= 1 << 63 => Some((m as i64).wrapping_neg()),
            _ => None,
        };
        int.map(Value::Int).ok_or(DecodeError::InvalidNumber {
            reason: "integer out of 64-bit range",
            offset: start,
        })
    }

    /// Skips a run of digits, returning false if there were none.
    fn skip_digits(&mut self) -> bool {
        let start = self.reader.position();
        while digit_value(self.reader.current()).is_some() {
            self.reader.advance();
        }
        self.reader.position() > start
    }

    /// Converts the scanned literal to the nearest float.
    fn convert_float(&self, start: usize) -> Result<f64, DecodeError> {
        let literal = self.reader.slice_from(start);
        let value = std::str::from_utf8(literal)
            .ok()
            .and_then(|text| text.parse::<f64>().ok())
            .ok_or(DecodeError::InvalidNumber {
                reason: "malformed float literal",
                offset: start,
            })?;
        if !value.is_finite() {
            return Err(DecodeError::InvalidNumber {
                reason: "float out of range",
                offset: start,
            });
        }
        Ok(value)
    }

    // =========================================================================
    // STRINGS
    // =========================================================================

    fn read_string(&mut self) -> Result<String, DecodeError> {
        let start = self.reader.position();
        debug_assert_eq!(self.reader.current(), b'"');
        self.reader.advance();

        let mut text = Vec::new();
        loop {
            let run_start = self.reader.position();
            while !matches!(self.reader.current(), b'"' | b'\\' | 0x00..=0x1f) {
                self.reader.advance();
            }
            text.extend_from_slice(self.reader.slice_from(run_start));

            match self.reader.current() {
                b'"' => {
                    self.reader.advance();
                    break;
                }
                b'\\' => {
                    self.reader.advance();
                    self.read_escape(&mut text)?;
                }
                END_OF_INPUT => return Err(self.unexpected_end("string")),
                byte => {
                    return Err(DecodeError::InvalidStringCharacter {
                        byte,
                        offset: self.reader.position(),
                    });
                }
            }
        }

        String::from_utf8(text).map_err(|_| DecodeError::InvalidUtf8 { offset: start })
    }

    /// Reads the escape following a `\` and appends the decoded character.
    fn read_escape(&mut self, text: &mut Vec<u8>) -> Result<(), DecodeError> {
        let decoded = match self.reader.current() {
            b'u' => {
                self.reader.advance();
                let c = self.read_unicode_escape()?;
                let mut buf = [0u8; 4];
                text.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                return Ok(());
            }
            b'"' => b'"',
            b'\\' => b'\\',
            b'/' => b'/',
            b'b' => 0x08,
            b'f' => 0x0c,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            END_OF_INPUT => return Err(self.unexpected_end("string escape")),
            byte => {
                return Err(DecodeError::InvalidEscape {
                    byte,
                    offset: self.reader.position(),
                });
            }
        };
        self.reader.advance();
        text.push(decoded);
        Ok(())
    }

    /// Reads the digits of a `\u` escape, pairing surrogates.
    fn read_unicode_escape(&mut self) -> Result<char, DecodeError> {
        let offset = self.reader.position();
        let unit = self.read_code_unit()?;

        let scalar = match unit {
            0xD800..=0xDBFF => {
                if self.reader.current() != b'\\' {
                    return Err(invalid_unicode("unpaired high surrogate", offset));
                }
                self.reader.advance();
                if self.reader.current() != b'u' {
                    return Err(invalid_unicode("unpaired high surrogate", offset));
                }
                self.reader.advance();
                let low = self.read_code_unit()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(invalid_unicode("unpaired high surrogate", offset));
                }
                0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(invalid_unicode("unpaired low surrogate", offset)),
            _ => unit,
        };

        char::from_u32(scalar).ok_or(invalid_unicode("not a unicode scalar", offset))
    }

    /// Reads exactly four hex digits.
    fn read_code_unit(&mut self) -> Result<u32, DecodeError> {
        let mut unit = 0u32;
        for _ in 0..UNICODE_ESCAPE_DIGITS {
            let Some(digit) = hex_digit_value(self.reader.current()) else {
                return Err(invalid_unicode(
                    "missing hex digit in unicode escape",
                    self.reader.position(),
                ));
            };
            unit = (unit << 4) | u32::from(digit);
            self.reader.advance();
        }
        Ok(unit)
    }

    // =========================================================================
    // CONTAINERS
    // =========================================================================

    fn read_array(&mut self) -> Result<Value, DecodeError> {
        self.enter()?;
        self.reader.advance();

        let mut items = Vec::new();
        loop {
            self.reader.skip_whitespace();
            match self.reader.current() {
                END_OF_INPUT => return Err(self.unexpected_end("array")),
                b']' => {
                    self.reader.advance();
                    break;
                }
                _ => {}
            }

            if !items.is_empty() {
                self.read_comma()?;
                self.reader.skip_whitespace();
            }
            items.push(self.read_value()?);
        }

        self.depth -= 1;
        Ok(Value::List(items))
    }

    fn read_object(&mut self) -> Result<Value, DecodeError> {
        self.enter()?;
        self.reader.advance();

        let mut map = ValueMap::new();
        // Position of each key in `map`, for last-write-wins on duplicates
        let mut positions: FxHashMap<String, usize> = FxHashMap::default();
        loop {
            self.reader.skip_whitespace();
            match self.reader.current() {
                END_OF_INPUT => return Err(self.unexpected_end("object")),
                b'}' => {
                    self.reader.advance();
                    break;
                }
                _ => {}
            }

            if !map.is_empty() {
                self.read_comma()?;
                self.reader.skip_whitespace();
            }

            let found = self.reader.current();
            if found != b'"' {
                return Err(DecodeError::InvalidObjectKey {
                    found,
                    offset: self.reader.position(),
                });
            }
            let key = self.read_string()?;

            self.reader.skip_whitespace();
            if self.reader.current() != b':' {
                return Err(DecodeError::MissingColon {
                    offset: self.reader.position(),
                });
            }
            self.reader.advance();

            let value = self.read_value()?;
            match positions.get(&key) {
                Some(&index) => map.replace_value_at(index, value),
                None => {
                    positions.insert(key.clone(), map.len());
                    map.push_unique(Value::String(key), value);
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Map(map))
    }

    /// Enters one array/object level.
    fn enter(&mut self) -> Result<(), DecodeError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(DecodeError::NestingTooDeep {
                depth: self.depth,
                max: self.max_depth,
                offset: self.reader.position(),
            });
        }
        Ok(())
    }

    fn unexpected_end(&self, context: &'static str) -> DecodeError {
        DecodeError::UnexpectedEnd {
            context,
            offset: self.reader.position(),
        }
    }

    fn invalid_number(&self, reason: &'static str) -> DecodeError {
        DecodeError::InvalidNumber {
            reason,
            offset: self.reader.position(),
        }
    }
}

fn invalid_unicode(reason: &'static str, offset: usize) -> DecodeError {
    DecodeError::InvalidUnicodeEscape { reason, offset }
}
