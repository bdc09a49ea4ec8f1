//! Benchmark for JSON message encoding and decoding.
//!
//! Builds a corpus of platform-channel style messages and measures
//! throughput against serde_json on the same bytes. The first argument, if
//! given, is the number of messages (default 20,000).

use std::time::Instant;

use json_message_codec::{
    encode_value, has_only_string_keys, JsonMessageCodec, MessageCodec, Value, ValueMap,
};

const MESSAGE_COUNT: usize = 20_000;
const ITERS: u32 = 10;

// =============================================================================
// SYNTHETIC CORPUS
// =============================================================================

/// Small deterministic generator so runs are comparable.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> i64 {
        (self.next() % n) as i64
    }
}

const WORDS: &[&str] = &[
    "hello", "world", "naïve", "café", "line\nbreak", "tab\there", "quote\"d", "日本語",
    "emoji 😀", "", "path/to/file", "back\\slash",
];

fn method_call(method: &str, args: Value) -> Value {
    let mut map = ValueMap::with_capacity(2);
    map.set_string("method", method);
    map.set_string("args", args);
    Value::Map(map)
}

fn editing_state(rng: &mut Lcg) -> Value {
    let text: String = (0..1 + rng.below(6))
        .map(|_| WORDS[rng.below(WORDS.len() as u64) as usize])
        .collect::<Vec<_>>()
        .join(" ");
    let len = text.chars().count() as i64;
    let base = rng.below(len as u64 + 1);

    let mut args = ValueMap::new();
    args.set_string("text", text);
    args.set_string("selectionBase", base);
    args.set_string("selectionExtent", base + rng.below((len - base) as u64 + 1));
    args.set_string("selectionAffinity", "TextAffinity.downstream");
    args.set_string("selectionIsDirectional", rng.below(2) == 0);
    args.set_string("composingBase", -1i64);
    args.set_string("composingExtent", -1i64);
    method_call(
        "TextInputClient.updateEditingState",
        Value::List(vec![Value::Int(1), Value::Map(args)]),
    )
}

fn pointer_event(rng: &mut Lcg) -> Value {
    let mut args = ValueMap::new();
    args.set_string("device", rng.below(4));
    args.set_string("x", rng.below(100_000) as f64 / 64.0);
    args.set_string("y", rng.below(100_000) as f64 / 64.0);
    args.set_string("pressure", rng.below(1000) as f64 / 1000.0);
    args.set_string("buttons", rng.below(8));
    args.set_string(
        "transform",
        (0..16).map(|i| if i % 5 == 0 { 1.0 } else { 0.0 }).collect::<Vec<f64>>(),
    );
    method_call("Pointer.event", Value::Map(args))
}

fn platform_config(rng: &mut Lcg) -> Value {
    let mut args = ValueMap::new();
    args.set_string("textScaleFactor", 1.0 + rng.below(4) as f64 * 0.25);
    args.set_string("alwaysUse24HourFormat", rng.below(2) == 0);
    args.set_string("platformBrightness", if rng.below(2) == 0 { "light" } else { "dark" });
    args.set_string(
        "locales",
        Value::List(
            ["en", "US", "fr", "FR", "ja", "JP"]
                .iter()
                .map(|s| Value::from(*s))
                .collect(),
        ),
    );
    args.set_string("accessibilityFeatures", Value::Null);
    args.set_string("pixels", (0..32).map(|_| rng.below(256) as u8).collect::<Vec<u8>>());
    method_call("Settings.update", Value::Map(args))
}

/// Reads the optional message count argument.
fn message_count(arg: Option<String>) -> Result<usize, std::num::ParseIntError> {
    match arg {
        Some(arg) => arg.trim().parse(),
        None => Ok(MESSAGE_COUNT),
    }
}

fn build_corpus(count: usize) -> Vec<Value> {
    let mut rng = Lcg(0x5eed);
    (0..count)
        .map(|i| match i % 3 {
            0 => editing_state(&mut rng),
            1 => pointer_event(&mut rng),
            _ => platform_config(&mut rng),
        })
        .collect()
}

// =============================================================================
// REPORTING
// =============================================================================

fn report(label: &str, bytes: usize, time: std::time::Duration) {
    println!("{}: {:?} (avg of {} iterations)", label, time, ITERS);
    println!(
        "  Throughput: {:.2} MB/s",
        (bytes as f64 / 1_000_000.0) / time.as_secs_f64()
    );
}

fn to_serde(value: &Value) -> serde_json::Value {
    use serde_json::Value as J;
    match value {
        Value::Null => J::Null,
        Value::Bool(b) => J::Bool(*b),
        Value::Int(i) => J::from(*i),
        Value::Float(f) => J::from(*f),
        Value::String(s) => J::String(s.clone()),
        Value::Uint8List(xs) => J::Array(xs.iter().map(|&x| J::from(x)).collect()),
        Value::Int32List(xs) => J::Array(xs.iter().map(|&x| J::from(x)).collect()),
        Value::Int64List(xs) => J::Array(xs.iter().map(|&x| J::from(x)).collect()),
        Value::FloatList(xs) => J::Array(xs.iter().map(|&x| J::from(x)).collect()),
        Value::List(items) => J::Array(items.iter().map(to_serde).collect()),
        Value::Map(map) => J::Object(
            map.iter()
                .filter_map(|(k, v)| k.as_str().map(|k| (k.to_string(), to_serde(v))))
                .collect(),
        ),
    }
}

fn main() {
    let count = message_count(std::env::args().nth(1)).expect("Message count must be a number");

    println!("Building {} synthetic messages", count);
    let corpus = build_corpus(count);

    let codec = JsonMessageCodec::new();

    // Encode
    for _ in 0..3 {
        for message in &corpus {
            let _ = codec.encode_message(Some(message)).expect("Failed to encode");
        }
    }

    let encode_start = Instant::now();
    let mut encoded = Vec::new();
    for _ in 0..ITERS {
        encoded = corpus
            .iter()
            .map(|m| codec.encode_message(Some(m)).expect("Failed to encode"))
            .collect::<Vec<_>>();
    }
    let encode_time = encode_start.elapsed() / ITERS;
    let total_bytes: usize = encoded.iter().map(Vec::len).sum();

    println!(
        "\nEncoded {} messages, {} bytes ({:.1} bytes/message)",
        corpus.len(),
        total_bytes,
        total_bytes as f64 / corpus.len() as f64
    );
    report("\nEncode", total_bytes, encode_time);

    // Decode
    let decode_start = Instant::now();
    let mut decoded = Vec::new();
    for _ in 0..ITERS {
        decoded = encoded
            .iter()
            .map(|bytes| codec.decode_message(bytes).expect("Failed to decode"))
            .collect::<Vec<_>>();
    }
    let decode_time = decode_start.elapsed() / ITERS;
    report("\nDecode", total_bytes, decode_time);
    assert_eq!(decoded.len(), corpus.len());

    // serde_json on the same bytes
    let serde_start = Instant::now();
    let mut parsed = Vec::new();
    for _ in 0..ITERS {
        parsed = encoded
            .iter()
            .map(|bytes| serde_json::from_slice::<serde_json::Value>(bytes))
            .collect::<Result<Vec<_>, _>>()
            .unwrap_or_default();
    }
    let serde_time = serde_start.elapsed() / ITERS;

    if parsed.is_empty() {
        println!("\nserde_json rejected the corpus (non-string map keys?)");
    } else {
        report("\nserde_json decode", total_bytes, serde_time);
        println!(
            "  Relative: {:.2}x",
            serde_time.as_secs_f64() / decode_time.as_secs_f64()
        );

        let agree = decoded
            .iter()
            .zip(&parsed)
            .filter(|(ours, theirs)| to_serde(ours) == **theirs)
            .count();
        println!("  Agreement: {}/{} messages", agree, parsed.len());
    }

    // Summary
    let strict = corpus.iter().filter(|m| has_only_string_keys(m)).count();
    println!("\n=== Summary ===");
    println!("Messages: {}", corpus.len());
    println!("Strict JSON (string keys only): {}", strict);
    println!(
        "Total size: {} bytes ({:.1} MB)",
        total_bytes,
        total_bytes as f64 / 1_000_000.0
    );
    println!(
        "Encode/decode ratio: {:.2}",
        encode_time.as_secs_f64() / decode_time.as_secs_f64()
    );

    let roundtrip_ok = corpus.iter().zip(&encoded).all(|(message, bytes)| {
        encode_value(Some(message)).map(|b| b == *bytes).unwrap_or(false)
    });
    println!("Deterministic encoding: {}", roundtrip_ok);
}
