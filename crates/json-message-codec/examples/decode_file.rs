//! Simple decoder to inspect JSON message files.

use std::fs;

use json_message_codec::{
    has_only_string_keys, DecodeOptions, JsonMessageCodec, MessageCodec, Value, ValueType,
};

fn format_value(v: &Value) -> String {
    match v {
        Value::String(s) => {
            let preview: String = s.chars().take(80).collect();
            if s.chars().count() > 80 {
                format!("{:?}...", preview)
            } else {
                format!("{:?}", preview)
            }
        }
        Value::List(items) => format!("LIST[{}]", items.len()),
        Value::Map(map) => format!("MAP{{{}}}", map.len()),
        other => JsonMessageCodec::new()
            .encode(Some(other))
            .unwrap_or_else(|e| format!("<{}>", e)),
    }
}

fn count_types(v: &Value, counts: &mut [usize; 11], depth: usize, max_depth: &mut usize) {
    counts[v.value_type() as usize] += 1;
    *max_depth = (*max_depth).max(depth);
    match v {
        Value::List(items) => {
            for item in items {
                count_types(item, counts, depth + 1, max_depth);
            }
        }
        Value::Map(map) => {
            for (k, item) in map.iter() {
                count_types(k, counts, depth + 1, max_depth);
                count_types(item, counts, depth + 1, max_depth);
            }
        }
        _ => {}
    }
}

const TYPES: [ValueType; 11] = [
    ValueType::Null,
    ValueType::Bool,
    ValueType::Int,
    ValueType::Float,
    ValueType::String,
    ValueType::Uint8List,
    ValueType::Int32List,
    ValueType::Int64List,
    ValueType::FloatList,
    ValueType::List,
    ValueType::Map,
];

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "message.json".to_string());

    println!("Reading: {}", path);

    let data = fs::read(&path).expect("Failed to read file");
    println!("File size: {} bytes", data.len());

    let codec = JsonMessageCodec::with_options(DecodeOptions::default());
    let value = match codec.decode_message(&data) {
        Ok(value) => value,
        Err(e) => {
            println!(
                "\nDecode failed: {} ({} / {} at offset {})",
                e,
                e.domain().name(),
                e.code().name(),
                e.offset()
            );
            std::process::exit(1);
        }
    };

    let mut counts = [0usize; 11];
    let mut max_depth = 0;
    count_types(&value, &mut counts, 0, &mut max_depth);

    println!("\n=== Message Info ===");
    println!("Root: {}", value.value_type().name());
    println!("Max depth: {}", max_depth);
    println!("Strict JSON keys: {}", has_only_string_keys(&value));

    println!("\n=== Values by type ===");
    for ty in TYPES {
        let count = counts[ty as usize];
        if count > 0 {
            println!("  {}: {}", ty.name(), count);
        }
    }

    // Show top-level entries in detail
    match &value {
        Value::Map(map) => {
            println!("\n=== First 20 Entries (detail) ===");
            for (i, (k, v)) in map.iter().take(20).enumerate() {
                println!("[{}] {} = {}", i, format_value(k), format_value(v));
            }
            if map.len() > 20 {
                println!("... and {} more entries", map.len() - 20);
            }
        }
        Value::List(items) => {
            println!("\n=== First 20 Items (detail) ===");
            for (i, item) in items.iter().take(20).enumerate() {
                println!("[{}] {}", i, format_value(item));
            }
            if items.len() > 20 {
                println!("... and {} more items", items.len() - 20);
            }
        }
        scalar => println!("\nValue: {}", format_value(scalar)),
    }
}
