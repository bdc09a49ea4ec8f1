//! Checks on value trees before encoding.
//!
//! Encoding already fails on the first non-finite float. These checks let a
//! caller find out up front, without building the output, where in the tree
//! the problem is, and tell whether the encoded text will be standard JSON.

use crate::error::{PathSegment, ValidationError, ValuePath};
use crate::model::Value;

/// Validates that `value` can be encoded.
///
/// Reports the first offending float in encoding order, with its path.
pub fn validate_value(value: &Value) -> Result<(), ValidationError> {
    let mut path = Vec::new();
    check_value(value, &mut path)
}

fn check_value(value: &Value, path: &mut Vec<PathSegment>) -> Result<(), ValidationError> {
    match value {
        Value::Float(v) => check_float(*v, path),
        Value::FloatList(values) => {
            for (i, v) in values.iter().enumerate() {
                path.push(PathSegment::Index(i));
                check_float(*v, path)?;
                path.pop();
            }
            Ok(())
        }
        Value::List(values) => {
            for (i, v) in values.iter().enumerate() {
                path.push(PathSegment::Index(i));
                check_value(v, path)?;
                path.pop();
            }
            Ok(())
        }
        Value::Map(map) => {
            for (i, (k, v)) in map.iter().enumerate() {
                path.push(PathSegment::MapKey(i));
                check_value(k, path)?;
                path.pop();

                path.push(PathSegment::MapValue(i));
                check_value(v, path)?;
                path.pop();
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn check_float(value: f64, path: &[PathSegment]) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteFloat {
            value,
            path: ValuePath::from(path.to_vec()),
        })
    }
}

/// Returns true if every map in the tree has only string keys.
///
/// Maps with other keys still encode, but the text is only readable by this
/// codec, not by strict JSON parsers.
pub fn has_only_string_keys(value: &Value) -> bool {
    match value {
        Value::List(values) => values.iter().all(has_only_string_keys),
        Value::Map(map) => map
            .iter()
            .all(|(k, v)| matches!(k, Value::String(_)) && has_only_string_keys(v)),
        _ => true,
    }
}
