//! Shared JSON document trees with a binary leaf extension.
//!
//! The model is a reference-counted tree of [`JsonValue`] nodes. Callers
//! hold [`JsonValueRef`] / [`JsonObjectRef`] handles, read through typed
//! accessors that degrade to documented zero values instead of failing,
//! and move trees through text with the codec in [`json`].
//!
//! Beyond standard JSON the model carries a [`JsonValue::Binary`] leaf.
//! On the wire it is an ordinary Base64 string; decoding text therefore
//! never reconstructs a binary node. See the `json` module docs.

pub mod json;
pub mod object;
pub mod value;

pub use json::{decode, encode, JsonError};
pub use object::{JsonObject, JsonObjectRef};
pub use value::{JsonType, JsonValue, JsonValueRef};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
