use json_dom::{decode, encode, JsonObjectRef, JsonType, JsonValueRef};

fn sample_object() -> JsonObjectRef {
    let obj = JsonObjectRef::new();
    obj.set_number_field("a", 1.0);
    obj.set_string_field("b", "x");
    obj
}

#[test]
fn compact_encoding_preserves_insertion_order() {
    let obj = sample_object();
    assert_eq!(obj.encode_json_compact(), r#"{"a":1,"b":"x"}"#);
}

#[test]
fn pretty_encoding_indents_per_depth() {
    let obj = JsonObjectRef::new();
    obj.set_number_field("a", 1.0);
    obj.set_array_field(
        "b",
        vec![JsonValueRef::boolean(true), JsonValueRef::null()],
    );
    let expected = "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    null\n  ]\n}";
    assert_eq!(obj.encode_json(), expected);
}

#[test]
fn empty_containers_stay_on_one_line() {
    let obj = JsonObjectRef::new();
    obj.set_array_field("arr", Vec::new());
    obj.set_object_field("obj", JsonObjectRef::new());
    assert_eq!(obj.encode_json(), "{\n  \"arr\": [],\n  \"obj\": {}\n}");
    assert_eq!(obj.encode_json_compact(), r#"{"arr":[],"obj":{}}"#);
}

#[test]
fn roundtrip_law_for_standard_variants() {
    let nested = JsonObjectRef::new();
    nested.set_bool_field("flag", false);
    let obj = JsonObjectRef::new();
    obj.set_field("null", JsonValueRef::null());
    obj.set_bool_field("bool", true);
    obj.set_number_field("int", 42.0);
    obj.set_number_field("frac", 0.1);
    obj.set_string_field("str", "line\nbreak \"quoted\" \\slash");
    obj.set_array_field(
        "arr",
        vec![
            JsonValueRef::number(-1.5),
            JsonValueRef::string("s"),
            JsonValueRef::null(),
        ],
    );
    obj.set_object_field("obj", nested);
    let root = JsonValueRef::object(obj);

    for pretty in [false, true] {
        let text = encode(&root, pretty);
        let back = decode(&text).expect("well-formed output must decode");
        assert_eq!(back, root, "pretty={pretty}");
        // Field set and order survive.
        assert_eq!(
            back.as_object().field_names(),
            root.as_object().field_names()
        );
    }
}

#[test]
fn binary_leaf_encodes_as_plain_base64_string() {
    let value = JsonValueRef::binary(vec![0x00, 0xff, 0x10]);
    assert_eq!(value.as_binary(), vec![0x00, 0xff, 0x10]);
    assert_eq!(encode(&value, false), "\"AP8Q\"");

    // Padded output for non-multiple-of-three lengths.
    assert_eq!(
        encode(&JsonValueRef::binary(b"hi".to_vec()), false),
        "\"aGk=\""
    );
}

#[test]
fn decoding_never_reconstructs_binary() {
    // The asymmetry contract: encode(binary) decodes as a String.
    let text = encode(&JsonValueRef::binary(vec![0x00, 0xff, 0x10]), false);
    let back = decode(&text).expect("base64 string is valid json");
    assert_eq!(back.value_type(), JsonType::String);
    assert_eq!(back.as_string(), "AP8Q");
    assert!(back.as_binary().is_empty());
}

#[test]
fn scalar_roots_encode_and_decode() {
    for (value, text) in [
        (JsonValueRef::null(), "null"),
        (JsonValueRef::boolean(false), "false"),
        (JsonValueRef::number(2.5), "2.5"),
        (JsonValueRef::string("s"), "\"s\""),
    ] {
        assert_eq!(encode(&value, false), text);
        assert_eq!(decode(text).unwrap(), value);
    }
}

#[test]
fn number_literals_collapse_to_binary64() {
    assert_eq!(decode("3").unwrap().as_number(), 3.0);
    assert_eq!(decode("3.0").unwrap().as_number(), 3.0);
    assert_eq!(decode("3e2").unwrap().as_number(), 300.0);
    assert_eq!(decode("-0.25").unwrap().as_number(), -0.25);
    // Integral doubles print without a fraction.
    assert_eq!(encode(&JsonValueRef::number(300.0), false), "300");
}

#[test]
fn decode_json_replaces_root_only_on_success() {
    let mut obj = sample_object();
    assert!(obj.decode_json(r#"{"fresh":true}"#));
    assert_eq!(obj.field_names(), vec!["fresh"]);
    assert!(obj.get_bool_field("fresh"));

    // Parse failure leaves the contents untouched.
    assert!(!obj.decode_json("{broken"));
    assert_eq!(obj.field_names(), vec!["fresh"]);

    // A well-formed non-object root is also a failure.
    assert!(!obj.decode_json("[1,2,3]"));
    assert!(!obj.decode_json("42"));
    assert_eq!(obj.field_names(), vec!["fresh"]);
}

#[test]
fn decode_json_root_swap_detaches_sibling_clones() {
    let mut a = sample_object();
    let b = a.clone();
    assert!(a.decode_json(r#"{"new":1}"#));
    assert_eq!(a.field_names(), vec!["new"]);
    assert_eq!(b.field_names(), vec!["a", "b"]);
}

#[test]
fn unicode_strings_roundtrip() {
    let value = JsonValueRef::string("päivää 👋 \u{7}tab\there");
    let text = encode(&value, false);
    assert_eq!(decode(&text).unwrap().as_string(), value.as_string());
}
