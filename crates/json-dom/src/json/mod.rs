//! Text codec: [`JsonValue`](crate::JsonValue) trees to and from RFC 8259
//! JSON text.
//!
//! The binary leaf has no JSON literal. [`encode`] writes it as an ordinary
//! JSON string holding standard padded Base64 of the bytes, with no marker
//! on the wire; [`decode`] consequently never produces a binary node — a
//! binary value round-trips through text as a string unless the caller
//! reinterprets it out of band. This asymmetry is a contract, not a bug.

mod decoder;
mod encoder;
mod error;

pub use decoder::JsonDecoder;
pub use encoder::JsonEncoder;
pub use error::JsonError;

use crate::value::JsonValueRef;

/// Encodes a value tree to text. Pretty mode inserts a line break and
/// two-space indentation per nesting level; compact mode emits no
/// insignificant whitespace. Object fields keep insertion order.
pub fn encode(value: &JsonValueRef, pretty: bool) -> String {
    JsonEncoder::new(pretty).encode(value)
}

/// Decodes text into exactly one root value — object, array, or bare
/// scalar. All-or-nothing: malformed input (including trailing non-
/// whitespace) yields an error and no tree.
pub fn decode(text: &str) -> Result<JsonValueRef, JsonError> {
    JsonDecoder::new(text.as_bytes()).decode()
}
