use json_dom::{decode, JsonError};

#[test]
fn malformed_documents_yield_no_tree() {
    let cases: &[&str] = &[
        "",
        "   ",
        "{unterminated",
        "{\"a\":}",
        "{\"a\" 1}",
        "{\"a\":1,}",
        "{,}",
        "{\"a\":1 \"b\":2}",
        "[1,]",
        "[,1]",
        "[1 2]",
        "[",
        "\"no closing quote",
        "tru",
        "nul",
        "falsy",
        "-",
        "+1",
        ".5",
        "1.2.3",
        "{\"a\":1}garbage",
        "[1,2] [3]",
        "nullnull",
    ];
    for text in cases {
        assert!(
            decode(text).is_err(),
            "expected decode failure for {text:?}"
        );
    }
}

#[test]
fn error_positions_point_at_the_offending_byte() {
    assert_eq!(decode(""), Err(JsonError::UnexpectedEnd(0)));
    assert_eq!(decode("{"), Err(JsonError::UnexpectedEnd(1)));
    assert_eq!(decode("{unterminated"), Err(JsonError::InvalidSyntax(1)));
    assert_eq!(decode("[1;2]"), Err(JsonError::InvalidSyntax(2)));
    assert_eq!(decode("\"abc"), Err(JsonError::UnexpectedEnd(4)));
    assert_eq!(decode("-"), Err(JsonError::InvalidNumber(0)));
    assert_eq!(decode("null null"), Err(JsonError::TrailingData(5)));
}

#[test]
fn whitespace_around_the_root_is_insignificant() {
    assert!(decode(" \t\r\n null \t\r\n ").unwrap().is_null());
    assert_eq!(
        decode(" { \"a\" : [ 1 , 2 ] } ")
            .unwrap()
            .as_object()
            .get_number_array_field("a"),
        vec![1.0, 2.0]
    );
}
