//! The tagged value model exchanged over message channels.
//!
//! Values form an owned tree: lists and maps own their children
//! exclusively, so a tree can never alias or contain cycles.

use crate::model::ValueMap;

/// Type tags for [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueType {
    Null = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    String = 4,
    Uint8List = 5,
    Int32List = 6,
    Int64List = 7,
    FloatList = 8,
    List = 9,
    Map = 10,
}

impl ValueType {
    /// Returns a short lowercase name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Uint8List => "uint8-list",
            ValueType::Int32List => "int32-list",
            ValueType::Int64List => "int64-list",
            ValueType::FloatList => "float-list",
            ValueType::List => "list",
            ValueType::Map => "map",
        }
    }
}

/// A dynamically-typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,

    Bool(bool),

    /// 64-bit signed integer.
    Int(i64),

    /// 64-bit IEEE 754 float. Only finite values can be encoded.
    Float(f64),

    /// UTF-8 text.
    String(String),

    /// Ordered list of bytes.
    Uint8List(Vec<u8>),

    /// Ordered list of 32-bit signed integers.
    Int32List(Vec<i32>),

    /// Ordered list of 64-bit signed integers.
    Int64List(Vec<i64>),

    /// Ordered list of 64-bit floats.
    FloatList(Vec<f64>),

    /// Ordered list of heterogeneous values.
    List(Vec<Value>),

    /// Ordered key/value pairs. Keys may be any value.
    Map(ValueMap),
}

impl Value {
    /// Returns the type tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::String(_) => ValueType::String,
            Value::Uint8List(_) => ValueType::Uint8List,
            Value::Int32List(_) => ValueType::Int32List,
            Value::Int64List(_) => ValueType::Int64List,
            Value::FloatList(_) => ValueType::FloatList,
            Value::List(_) => ValueType::List,
            Value::Map(_) => ValueType::Map,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the number of elements for lists, typed lists and maps,
    /// the byte length for strings, and 0 for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) => 0,
            Value::String(s) => s.len(),
            Value::Uint8List(v) => v.len(),
            Value::Int32List(v) => v.len(),
            Value::Int64List(v) => v.len(),
            Value::FloatList(v) => v.len(),
            Value::List(v) => v.len(),
            Value::Map(m) => m.len(),
        }
    }

    /// Returns true if [`Value::len`] is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Uint8List(v)
    }
}

impl From<Vec<i32>> for Value {
    fn from(v: Vec<i32>) -> Self {
        Value::Int32List(v)
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Value::Int64List(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::FloatList(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<ValueMap> for Value {
    fn from(v: ValueMap) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
