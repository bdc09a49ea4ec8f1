//! Exact encodings and decode error kinds for the JSON message codec.

use json_message_codec::{
    decode_str, encode_to_string, DecodeError, ErrorCode, ErrorDomain, JsonMessageCodec,
    MessageCodec, Value, ValueMap, ValueType,
};

fn encode(value: &Value) -> String {
    encode_to_string(Some(value)).expect("encode must succeed")
}

fn decode(text: &str) -> Value {
    decode_str(text).expect("decode must succeed")
}

fn assert_decode_error(text: &str, code: ErrorCode) {
    match decode_str(text) {
        Ok(value) => panic!("decode of {text:?} should fail with {code:?}, got {value:?}"),
        Err(e) => assert_eq!(e.code(), code, "decode of {text:?}: {e}"),
    }
}

// =============================================================================
// NULL AND BOOL
// =============================================================================

#[test]
fn null_roundtrips() {
    assert_eq!(encode_to_string(None).unwrap(), "null");
    assert_eq!(encode(&Value::Null), "null");
    assert_eq!(decode("null").value_type(), ValueType::Null);
}

#[test]
fn bools_roundtrip() {
    assert_eq!(encode(&Value::Bool(false)), "false");
    assert_eq!(encode(&Value::Bool(true)), "true");
    assert_eq!(decode("false"), Value::Bool(false));
    assert_eq!(decode("true"), Value::Bool(true));
}

// =============================================================================
// INTEGERS
// =============================================================================

#[test]
fn ints_encode() {
    assert_eq!(encode(&Value::Int(0)), "0");
    assert_eq!(encode(&Value::Int(1)), "1");
    assert_eq!(encode(&Value::Int(12345)), "12345");
    assert_eq!(encode(&Value::Int(i64::MIN)), "-9223372036854775808");
    assert_eq!(encode(&Value::Int(i64::MAX)), "9223372036854775807");
}

#[test]
fn ints_decode() {
    assert_eq!(decode("0"), Value::Int(0));
    assert_eq!(decode("1"), Value::Int(1));
    assert_eq!(decode("12345"), Value::Int(12345));
    assert_eq!(decode("-9223372036854775808"), Value::Int(i64::MIN));
    assert_eq!(decode("9223372036854775807"), Value::Int(i64::MAX));
}

#[test]
fn int_leading_zero_is_additional_data() {
    assert_decode_error("00", ErrorCode::AdditionalData);
    assert_decode_error("01", ErrorCode::AdditionalData);
}

#[test]
fn int_malformed() {
    assert_decode_error("--1", ErrorCode::InvalidNumber);
    assert_decode_error("+1", ErrorCode::ParseFailure);
    assert_decode_error("0a", ErrorCode::AdditionalData);
}

// =============================================================================
// FLOATS
// =============================================================================

#[test]
fn floats_encode() {
    assert_eq!(encode(&Value::Float(0.0)), "0.0");
    assert_eq!(encode(&Value::Float(1.0)), "1.0");
    assert_eq!(encode(&Value::Float(-1.0)), "-1.0");
    assert_eq!(encode(&Value::Float(0.5)), "0.5");
    assert_eq!(encode(&Value::Float(std::f64::consts::PI)), "3.141592653589793");
    assert_eq!(encode(&Value::Float(-0.0)), "-0.0");
}

#[test]
fn non_finite_floats_fail_to_encode() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = encode_to_string(Some(&Value::Float(value))).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidNumber);
        assert_eq!(err.domain(), ErrorDomain::Json);
    }
}

#[test]
fn floats_decode() {
    assert_eq!(decode("0.0"), Value::Float(0.0));
    assert_eq!(decode("1.0"), Value::Float(1.0));
    assert_eq!(decode("-1.0"), Value::Float(-1.0));
    assert_eq!(decode("0.5"), Value::Float(0.5));
    assert_eq!(decode("3.1415926535897931"), Value::Float(std::f64::consts::PI));
    assert_eq!(decode("-0.0"), Value::Float(-0.0));
}

#[test]
fn float_missing_fraction() {
    assert_decode_error("0.", ErrorCode::InvalidNumber);
    assert_decode_error("0.a", ErrorCode::InvalidNumber);
}

#[test]
fn large_and_small_floats_roundtrip() {
    for value in [1e300, -2.5e-300, 1e17, 1e-5, 123456789.125] {
        let text = encode(&Value::Float(value));
        assert_eq!(decode(&text), Value::Float(value), "via {text}");
    }
}

// =============================================================================
// STRINGS
// =============================================================================

#[test]
fn strings_encode() {
    assert_eq!(encode(&Value::from("")), r#""""#);
    assert_eq!(encode(&Value::from("hello")), r#""hello""#);
    assert_eq!(encode(&Value::from("\"")), r#""\"""#);
    assert_eq!(encode(&Value::from("\\")), r#""\\""#);
    assert_eq!(encode(&Value::from("\u{8}")), r#""\b""#);
    assert_eq!(encode(&Value::from("\u{c}")), r#""\f""#);
    assert_eq!(encode(&Value::from("\n")), r#""\n""#);
    assert_eq!(encode(&Value::from("\r")), r#""\r""#);
    assert_eq!(encode(&Value::from("\t")), r#""\t""#);
    assert_eq!(encode(&Value::from("\u{1}")), r#""\u0001""#);
}

#[test]
fn strings_decode() {
    assert_eq!(decode(r#""""#), Value::from(""));
    assert_eq!(decode(r#""hello""#), Value::from("hello"));
    assert_eq!(decode(r#""\"""#), Value::from("\""));
    assert_eq!(decode(r#""\\""#), Value::from("\\"));
    assert_eq!(decode(r#""\/""#), Value::from("/"));
    assert_eq!(decode(r#""\b""#), Value::from("\u{8}"));
    assert_eq!(decode(r#""\f""#), Value::from("\u{c}"));
    assert_eq!(decode(r#""\n""#), Value::from("\n"));
    assert_eq!(decode(r#""\r""#), Value::from("\r"));
    assert_eq!(decode(r#""\t""#), Value::from("\t"));
    assert_eq!(decode(r#""\u0001""#), Value::from("\u{1}"));
}

#[test]
fn strings_reject_raw_control_characters() {
    assert_decode_error("\"Hello\u{1}World\"", ErrorCode::InvalidStringCharacter);
    assert_decode_error("\"Hello\nWorld\"", ErrorCode::InvalidStringCharacter);
    assert_decode_error("\"Hello\rWorld\"", ErrorCode::InvalidStringCharacter);
    assert_decode_error("\"Hello\tWorld\"", ErrorCode::InvalidStringCharacter);
}

#[test]
fn strings_malformed() {
    assert_decode_error(r#"""#, ErrorCode::OutOfData);
    assert_decode_error(r#"""""#, ErrorCode::AdditionalData);
    assert_decode_error(r#""\""#, ErrorCode::OutOfData);
    assert_decode_error(r#""\z""#, ErrorCode::InvalidStringEscapeSequence);
    assert_decode_error(r#""\uxxxx""#, ErrorCode::InvalidStringUnicodeEscape);
    assert_decode_error(r#""\u""#, ErrorCode::InvalidStringUnicodeEscape);
    assert_decode_error(r#""\uxx""#, ErrorCode::InvalidStringUnicodeEscape);
}

// =============================================================================
// TYPED LISTS
// =============================================================================

#[test]
fn typed_lists_encode() {
    assert_eq!(encode(&Value::Uint8List(vec![])), "[]");
    assert_eq!(encode(&Value::Uint8List(vec![0, 1, 2, 3, 4])), "[0,1,2,3,4]");
    assert_eq!(encode(&Value::Int32List(vec![])), "[]");
    assert_eq!(encode(&Value::Int32List(vec![0, -1, 2, -3, 4])), "[0,-1,2,-3,4]");
    assert_eq!(encode(&Value::Int64List(vec![])), "[]");
    assert_eq!(encode(&Value::Int64List(vec![0, -1, 2, -3, 4])), "[0,-1,2,-3,4]");
    assert_eq!(encode(&Value::FloatList(vec![])), "[]");
    assert_eq!(
        encode(&Value::FloatList(vec![0.0, -0.5, 0.25, -0.125, 0.0625])),
        "[0.0,-0.5,0.25,-0.125,0.0625]"
    );
}

#[test]
fn typed_lists_decode_as_generic_lists() {
    assert_eq!(
        decode("[0,-1,2,-3,4]"),
        Value::List([0, -1, 2, -3, 4].into_iter().map(Value::Int).collect())
    );
    assert_eq!(
        decode("[0.0,-0.5]"),
        Value::List(vec![Value::Float(0.0), Value::Float(-0.5)])
    );
}

// =============================================================================
// LISTS
// =============================================================================

#[test]
fn lists_encode() {
    assert_eq!(encode(&Value::List(vec![])), "[]");

    let value = Value::List(vec![
        Value::Null,
        Value::Bool(true),
        Value::Int(42),
        Value::Float(-1.5),
        Value::from("hello"),
        Value::List(vec![]),
        Value::Map(ValueMap::new()),
    ]);
    assert_eq!(encode(&value), r#"[null,true,42,-1.5,"hello",[],{}]"#);
}

#[test]
fn nested_lists_encode() {
    let even: Vec<Value> = (0..10).filter(|i| i % 2 == 0).map(Value::Int).collect();
    let odd: Vec<Value> = (0..10).filter(|i| i % 2 == 1).map(Value::Int).collect();
    let value = Value::List(vec![Value::List(even), Value::List(odd)]);
    assert_eq!(encode(&value), "[[0,2,4,6,8],[1,3,5,7,9]]");
}

#[test]
fn lists_decode() {
    assert_eq!(decode("[]").len(), 0);

    let value = decode(r#"[null,true,42,-1.5,"hello",[],{}]"#);
    let items = value.as_list().unwrap();
    let types: Vec<ValueType> = items.iter().map(Value::value_type).collect();
    assert_eq!(
        types,
        [
            ValueType::Null,
            ValueType::Bool,
            ValueType::Int,
            ValueType::Float,
            ValueType::String,
            ValueType::List,
            ValueType::Map,
        ]
    );
}

#[test]
fn lists_malformed() {
    assert_decode_error("[0,1,2,3 4]", ErrorCode::MissingComma);
    assert_decode_error("[", ErrorCode::OutOfData);
    assert_decode_error("]", ErrorCode::ParseFailure);
    assert_decode_error("[0,1,2,3,4", ErrorCode::OutOfData);
    assert_decode_error("[0,1,2,3,4]]", ErrorCode::AdditionalData);
}

// =============================================================================
// MAPS
// =============================================================================

#[test]
fn map_key_types_encode() {
    let mut map = ValueMap::new();
    map.set(Value::Null, Value::from("null"));
    map.set(Value::Bool(true), Value::from("bool"));
    map.set(Value::Int(42), Value::from("int"));
    map.set(Value::Float(-1.5), Value::from("float"));
    map.set(Value::from("hello"), Value::from("string"));
    map.set(Value::List(vec![]), Value::from("list"));
    map.set(Value::Map(ValueMap::new()), Value::from("map"));
    assert_eq!(
        encode(&Value::Map(map)),
        r#"{null:"null",true:"bool",42:"int",-1.5:"float","hello":"string",[]:"list",{}:"map"}"#
    );
}

#[test]
fn map_value_types_encode() {
    let mut map = ValueMap::new();
    map.set_string("null", Value::Null);
    map.set_string("bool", true);
    map.set_string("int", 42i64);
    map.set_string("float", -1.5);
    map.set_string("string", "hello");
    map.set_string("list", Value::List(vec![]));
    map.set_string("map", ValueMap::new());
    assert_eq!(
        encode(&Value::Map(map)),
        r#"{"null":null,"bool":true,"int":42,"float":-1.5,"string":"hello","list":[],"map":{}}"#
    );
}

#[test]
fn nested_maps_encode() {
    let mut str_to_int = ValueMap::new();
    let mut int_to_str = ValueMap::new();
    for (i, name) in ["zero", "one", "two", "three"].into_iter().enumerate() {
        str_to_int.set_string(name, i as i64);
        int_to_str.set(Value::Int(i as i64), Value::from(name));
    }
    let mut value = ValueMap::new();
    value.set_string("str-to-int", str_to_int);
    value.set_string("int-to-str", int_to_str);
    assert_eq!(
        encode(&Value::Map(value)),
        r#"{"str-to-int":{"zero":0,"one":1,"two":2,"three":3},"int-to-str":{0:"zero",1:"one",2:"two",3:"three"}}"#
    );
}

#[test]
fn maps_decode() {
    assert_eq!(decode("{}").value_type(), ValueType::Map);
    assert_eq!(decode("{}").len(), 0);

    let value = decode(r#"{"null":null,"bool":true,"int":42,"float":-1.5,"string":"hello","list":[],"map":{}}"#);
    let map = value.as_map().unwrap();
    assert_eq!(map.len(), 7);
    assert_eq!(map.lookup_string("null"), Some(&Value::Null));
    assert_eq!(map.lookup_string("bool"), Some(&Value::Bool(true)));
    assert_eq!(map.lookup_string("int"), Some(&Value::Int(42)));
    assert_eq!(map.lookup_string("float"), Some(&Value::Float(-1.5)));
    assert_eq!(map.lookup_string("string"), Some(&Value::from("hello")));
    assert_eq!(map.lookup_string("list"), Some(&Value::List(vec![])));
    assert_eq!(map.lookup_string("map"), Some(&Value::Map(ValueMap::new())));
}

#[test]
fn maps_malformed() {
    assert_decode_error("{", ErrorCode::OutOfData);
    assert_decode_error("}", ErrorCode::ParseFailure);
    assert_decode_error(r#"{"zero":0 "one":1}"#, ErrorCode::MissingComma);
    assert_decode_error(r#"{"zero" 0,"one":1}"#, ErrorCode::ParseFailure);
    assert_decode_error(r#"{"zero":0,"one":1"#, ErrorCode::OutOfData);
    assert_decode_error(r#"{"zero":0,"one":1}}"#, ErrorCode::AdditionalData);
    assert_decode_error(r#"{zero:0}"#, ErrorCode::InvalidObjectKeyType);
}

#[test]
fn map_duplicate_keys_keep_last() {
    let value = decode(r#"{"a":1,"b":2,"a":{"c":3}}"#);
    let map = value.as_map().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.lookup_string("b"), Some(&Value::Int(2)));
    let mut expected = ValueMap::new();
    expected.set_string("c", 3i64);
    assert_eq!(map.lookup_string("a"), Some(&Value::Map(expected)));
}

// =============================================================================
// WHOLE MESSAGES
// =============================================================================

#[test]
fn unknown_word() {
    assert_decode_error("foo", ErrorCode::ParseFailure);
}

#[test]
fn additional_data_reports_unused_bytes() {
    let err = decode_str("[0,1,2,3,4]] \n").unwrap_err();
    assert!(matches!(err, DecodeError::AdditionalData { unused: 3, .. }));
    assert_eq!(err.domain(), ErrorDomain::Codec);
}

#[test]
fn surrounding_whitespace_is_consumed() {
    assert_eq!(decode(" \t\r\n[ 1 , 2 ]\n"), decode("[1,2]"));
    assert_eq!(decode(" {\n \"a\" :\t1 } "), decode(r#"{"a":1}"#));
}

#[test]
fn method_call_message_roundtrips() {
    let codec = JsonMessageCodec::new();
    let text = r#"{"method":"TextInput.setEditingState","args":{"text":"héllo\n","selectionBase":1,"selectionExtent":-1,"selectionAffinity":"TextAffinity.downstream","selectionIsDirectional":false,"composingBase":-1,"composingExtent":-1}}"#;

    let value = codec.decode(text).unwrap();
    let map = value.as_map().unwrap();
    assert_eq!(
        map.lookup_string("method").and_then(Value::as_str),
        Some("TextInput.setEditingState")
    );
    let args = map.lookup_string("args").and_then(Value::as_map).unwrap();
    assert_eq!(args.lookup_string("text").and_then(Value::as_str), Some("héllo\n"));
    assert_eq!(args.lookup_string("selectionExtent").and_then(Value::as_int), Some(-1));

    let bytes = codec.encode_message(Some(&value)).unwrap();
    assert_eq!(bytes, text.as_bytes());
}
