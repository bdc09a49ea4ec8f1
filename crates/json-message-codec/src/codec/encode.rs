//! Value encoding to JSON text.
//!
//! Output is compact (no whitespace). Map keys are encoded as values
//! whatever their type, so maps with non-string keys produce text that only
//! this codec reads back.

use crate::codec::primitives::Writer;
use crate::error::EncodeError;
use crate::model::{Value, ValueMap};

/// Encodes a value, or `null` when `value` is `None`.
pub fn encode_value(value: Option<&Value>) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::new();
    encode_into(&mut writer, value)?;
    Ok(writer.into_bytes())
}

/// Encodes a value as a `String`.
pub fn encode_to_string(value: Option<&Value>) -> Result<String, EncodeError> {
    let mut writer = Writer::new();
    encode_into(&mut writer, value)?;
    Ok(writer.into_string())
}

/// Appends the encoding of `value` to `writer`.
///
/// On error the writer may hold a partial encoding.
pub fn encode_into(writer: &mut Writer, value: Option<&Value>) -> Result<(), EncodeError> {
    match value {
        None => {
            writer.write_str("null");
            Ok(())
        }
        Some(value) => write_value(writer, value),
    }
}

fn write_value(writer: &mut Writer, value: &Value) -> Result<(), EncodeError> {
    match value {
        Value::Null => writer.write_str("null"),
        Value::Bool(true) => writer.write_str("true"),
        Value::Bool(false) => writer.write_str("false"),
        Value::Int(v) => writer.write_int(*v),
        Value::Float(v) => writer.write_float(*v)?,
        Value::String(s) => writer.write_string(s),
        Value::Uint8List(values) => write_int_list(writer, values.iter().map(|&v| i64::from(v))),
        Value::Int32List(values) => write_int_list(writer, values.iter().map(|&v| i64::from(v))),
        Value::Int64List(values) => write_int_list(writer, values.iter().copied()),
        Value::FloatList(values) => write_float_list(writer, values)?,
        Value::List(values) => write_list(writer, values)?,
        Value::Map(map) => write_map(writer, map)?,
    }
    Ok(())
}

fn write_int_list(writer: &mut Writer, values: impl Iterator<Item = i64>) {
    writer.write_char('[');
    for (i, v) in values.enumerate() {
        if i != 0 {
            writer.write_char(',');
        }
        writer.write_int(v);
    }
    writer.write_char(']');
}

fn write_float_list(writer: &mut Writer, values: &[f64]) -> Result<(), EncodeError> {
    writer.write_char('[');
    for (i, &v) in values.iter().enumerate() {
        if i != 0 {
            writer.write_char(',');
        }
        writer.write_float(v)?;
    }
    writer.write_char(']');
    Ok(())
}

fn write_list(writer: &mut Writer, values: &[Value]) -> Result<(), EncodeError> {
    writer.write_char('[');
    for (i, v) in values.iter().enumerate() {
        if i != 0 {
            writer.write_char(',');
        }
        write_value(writer, v)?;
    }
    writer.write_char(']');
    Ok(())
}

fn write_map(writer: &mut Writer, map: &ValueMap) -> Result<(), EncodeError> {
    writer.write_char('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i != 0 {
            writer.write_char(',');
        }
        write_value(writer, key)?;
        writer.write_char(':');
        write_value(writer, value)?;
    }
    writer.write_char('}');
    Ok(())
}
