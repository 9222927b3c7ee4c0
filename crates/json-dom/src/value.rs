//! [`JsonValue`] — the tagged value node — and [`JsonValueRef`], the
//! reference-counted handle callers hold.
//!
//! A node's variant is fixed for its lifetime: "changing" a value means
//! building a fresh node and storing it wherever the old one lived.
//! Handles are cheap to clone and alias the same node.

use std::sync::Arc;

use tracing::warn;

use crate::json;
use crate::object::JsonObjectRef;

/// Discriminant of a [`JsonValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Bool,
    Number,
    String,
    Binary,
    Array,
    Object,
}

/// One JSON-compatible datum.
///
/// All JSON numeric literals collapse to a single `f64`. `Binary` is the
/// extension variant: raw bytes that serialize as a Base64 string and are
/// never reconstructed by the decoder (see [`crate::json`]).
#[derive(Debug)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Binary(Vec<u8>),
    Array(Vec<JsonValueRef>),
    Object(JsonObjectRef),
}

impl JsonValue {
    pub fn value_type(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::Bool(_) => JsonType::Bool,
            JsonValue::Number(_) => JsonType::Number,
            JsonValue::String(_) => JsonType::String,
            JsonValue::Binary(_) => JsonType::Binary,
            JsonValue::Array(_) => JsonType::Array,
            JsonValue::Object(_) => JsonType::Object,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self.value_type() {
            JsonType::Null => "Null",
            JsonType::Bool => "Bool",
            JsonType::Number => "Number",
            JsonType::String => "String",
            JsonType::Binary => "Binary",
            JsonType::Array => "Array",
            JsonType::Object => "Object",
        }
    }
}

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsonValue::Null, JsonValue::Null) => true,
            (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
            (JsonValue::Number(a), JsonValue::Number(b)) => a == b,
            (JsonValue::String(a), JsonValue::String(b)) => a == b,
            (JsonValue::Binary(a), JsonValue::Binary(b)) => a == b,
            (JsonValue::Array(a), JsonValue::Array(b)) => a == b,
            (JsonValue::Object(a), JsonValue::Object(b)) => a == b,
            _ => false,
        }
    }
}

/// Shared handle to a [`JsonValue`] node.
///
/// Cloning aliases the node; the node is freed when the last handle (or
/// owning parent) drops. The refcount is thread-safe, logical mutation of
/// object nodes is single-writer by contract.
#[derive(Debug, Clone)]
pub struct JsonValueRef {
    node: Arc<JsonValue>,
}

impl Default for JsonValueRef {
    fn default() -> Self {
        Self::null()
    }
}

impl PartialEq for JsonValueRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node) || *self.node == *other.node
    }
}

impl From<JsonValue> for JsonValueRef {
    fn from(node: JsonValue) -> Self {
        Self {
            node: Arc::new(node),
        }
    }
}

impl JsonValueRef {
    // ---- Constructors (total, no failure cases) ----

    pub fn null() -> Self {
        JsonValue::Null.into()
    }

    pub fn boolean(value: bool) -> Self {
        JsonValue::Bool(value).into()
    }

    pub fn number(value: f64) -> Self {
        JsonValue::Number(value).into()
    }

    pub fn string(value: impl Into<String>) -> Self {
        JsonValue::String(value.into()).into()
    }

    pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
        JsonValue::Binary(bytes.into()).into()
    }

    pub fn array(items: Vec<JsonValueRef>) -> Self {
        JsonValue::Array(items).into()
    }

    pub fn object(object: JsonObjectRef) -> Self {
        JsonValue::Object(object).into()
    }

    /// Decodes `text` into a value handle. A parse failure is logged and
    /// yields a `Null` handle; callers that need the success flag go
    /// through [`JsonObjectRef::decode_json`] or [`crate::json::decode`].
    pub fn from_json_string(text: &str) -> Self {
        match json::decode(text) {
            Ok(value) => value,
            Err(err) => {
                warn!(%err, "failed to decode json value from string");
                Self::null()
            }
        }
    }

    // ---- Inspection ----

    /// The underlying node.
    pub fn node(&self) -> &JsonValue {
        &self.node
    }

    pub fn value_type(&self) -> JsonType {
        self.node.value_type()
    }

    pub fn type_name(&self) -> &'static str {
        self.node.type_name()
    }

    pub fn is_null(&self) -> bool {
        matches!(*self.node, JsonValue::Null)
    }

    // ---- Non-degrading accessors ----

    pub fn try_as_bool(&self) -> Option<bool> {
        match *self.node {
            JsonValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn try_as_number(&self) -> Option<f64> {
        match *self.node {
            JsonValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn try_as_string(&self) -> Option<&str> {
        match &*self.node {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn try_as_binary(&self) -> Option<&[u8]> {
        match &*self.node {
            JsonValue::Binary(b) => Some(b),
            _ => None,
        }
    }

    pub fn try_as_array(&self) -> Option<&[JsonValueRef]> {
        match &*self.node {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn try_as_object(&self) -> Option<JsonObjectRef> {
        match &*self.node {
            JsonValue::Object(obj) => Some(obj.clone()),
            _ => None,
        }
    }

    // ---- Degrading accessors ----
    //
    // The host binding these handles were built for cannot catch errors,
    // so a variant mismatch logs a warning and returns the documented
    // zero value for the requested type.

    pub fn as_bool(&self) -> bool {
        self.try_as_bool().unwrap_or_else(|| {
            self.mismatch("Bool");
            false
        })
    }

    pub fn as_number(&self) -> f64 {
        self.try_as_number().unwrap_or_else(|| {
            self.mismatch("Number");
            0.0
        })
    }

    pub fn as_string(&self) -> String {
        self.try_as_string().map(str::to_owned).unwrap_or_else(|| {
            self.mismatch("String");
            String::new()
        })
    }

    pub fn as_binary(&self) -> Vec<u8> {
        self.try_as_binary()
            .map(<[u8]>::to_vec)
            .unwrap_or_else(|| {
                self.mismatch("Binary");
                Vec::new()
            })
    }

    /// Element handles alias the array's children.
    pub fn as_array(&self) -> Vec<JsonValueRef> {
        self.try_as_array().map(<[_]>::to_vec).unwrap_or_else(|| {
            self.mismatch("Array");
            Vec::new()
        })
    }

    /// On mismatch the returned object is a fresh, detached empty map.
    pub fn as_object(&self) -> JsonObjectRef {
        self.try_as_object().unwrap_or_else(|| {
            self.mismatch("Object");
            JsonObjectRef::new()
        })
    }

    /// Compact single-line encoding of this value (any variant, scalar
    /// roots included).
    pub fn to_json_string(&self) -> String {
        json::encode(self, false)
    }

    fn mismatch(&self, expected: &'static str) {
        warn!(
            expected,
            actual = self.type_name(),
            "json value type mismatch"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_discriminants() {
        assert_eq!(JsonValueRef::null().value_type(), JsonType::Null);
        assert_eq!(JsonValueRef::boolean(true).value_type(), JsonType::Bool);
        assert_eq!(JsonValueRef::number(1.5).value_type(), JsonType::Number);
        assert_eq!(JsonValueRef::string("x").value_type(), JsonType::String);
        assert_eq!(
            JsonValueRef::binary(vec![1u8]).value_type(),
            JsonType::Binary
        );
        assert_eq!(JsonValueRef::array(vec![]).value_type(), JsonType::Array);
        assert_eq!(
            JsonValueRef::object(JsonObjectRef::new()).value_type(),
            JsonType::Object
        );
    }

    #[test]
    fn aliased_handles_compare_equal_by_identity() {
        let a = JsonValueRef::number(f64::NAN);
        let b = a.clone();
        // NaN != NaN structurally, but the handles alias one node.
        assert_eq!(a, b);
    }

    #[test]
    fn structural_equality_crosses_handles() {
        let a = JsonValueRef::array(vec![JsonValueRef::number(1.0), JsonValueRef::string("x")]);
        let b = JsonValueRef::array(vec![JsonValueRef::number(1.0), JsonValueRef::string("x")]);
        assert_eq!(a, b);
        let c = JsonValueRef::array(vec![JsonValueRef::number(2.0), JsonValueRef::string("x")]);
        assert_ne!(a, c);
    }
}
