//! Data model types for messages.
//!
//! - Values (the tagged, dynamically-typed unit of a message)
//! - Maps (ordered key/value pairs with any value as key)

pub mod map;
pub mod value;

pub use map::ValueMap;
pub use value::{Value, ValueType};
