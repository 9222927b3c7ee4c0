//! [`JsonObject`] — the ordered field map — and [`JsonObjectRef`], the
//! shared handle the field-accessor API lives on.
//!
//! Field names are unique, case-sensitive UTF-8; first-insertion order is
//! preserved for iteration and serialization, and replacing a field keeps
//! its original position.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use tracing::warn;

use crate::json;
use crate::value::JsonValueRef;

/// Ordered field-name → value map backing one object node.
#[derive(Debug, Default)]
pub struct JsonObject {
    fields: IndexMap<String, JsonValueRef>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Shared handle to an object node.
///
/// Clones alias the same map: a `set_field` through one clone is visible
/// through all of them. [`reset`](Self::reset) is the exception — it swaps
/// this handle's referent for a fresh empty map and leaves sibling clones
/// observing the old one.
///
/// The lock inside exists for interior mutability only; concurrent writers
/// must be serialized by the caller.
#[derive(Debug, Clone, Default)]
pub struct JsonObjectRef {
    map: Arc<RwLock<JsonObject>>,
}

impl PartialEq for JsonObjectRef {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.map, &other.map) {
            return true;
        }
        let a = self.read();
        let b = other.read();
        a.fields.len() == b.fields.len()
            && a.fields
                .iter()
                .zip(b.fields.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl JsonObjectRef {
    /// New handle over an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_fields(fields: IndexMap<String, JsonValueRef>) -> Self {
        Self {
            map: Arc::new(RwLock::new(JsonObject { fields })),
        }
    }

    /// Discards this handle's map and starts over empty. Sibling clones
    /// keep the old map.
    pub fn reset(&mut self) {
        self.map = Arc::new(RwLock::new(JsonObject::new()));
    }

    fn read(&self) -> RwLockReadGuard<'_, JsonObject> {
        self.map.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, JsonObject> {
        self.map.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ---- Field map ----

    /// Field names in first-insertion order.
    pub fn field_names(&self) -> Vec<String> {
        self.read().fields.keys().cloned().collect()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.read().fields.contains_key(name)
    }

    /// Removes `name`, preserving the order of the remaining fields.
    /// No-op when absent.
    pub fn remove_field(&self, name: &str) {
        self.write().fields.shift_remove(name);
    }

    /// Returns the field's value handle, or a `Null` handle (with a
    /// warning) when the field is absent.
    pub fn get_field(&self, name: &str) -> JsonValueRef {
        match self.read().fields.get(name) {
            Some(value) => value.clone(),
            None => {
                warn!(field = name, "json object field not found");
                JsonValueRef::null()
            }
        }
    }

    /// Inserts or replaces; replacement keeps the field's original
    /// position, insertion appends.
    pub fn set_field(&self, name: &str, value: JsonValueRef) {
        self.write().fields.insert(name.to_owned(), value);
    }

    /// Snapshot of all entries; value handles alias the stored children.
    pub fn entries(&self) -> Vec<(String, JsonValueRef)> {
        self.read()
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Copies every field of `other` into `self` when `overwrite` is set
    /// or the field is absent here. Values are aliased, not deep-cloned.
    pub fn merge(&self, other: &JsonObjectRef, overwrite: bool) {
        if Arc::ptr_eq(&self.map, &other.map) {
            return;
        }
        let src = other.read();
        let mut dst = self.write();
        for (name, value) in src.fields.iter() {
            if overwrite || !dst.fields.contains_key(name) {
                dst.fields.insert(name.clone(), value.clone());
            }
        }
    }

    // ---- Typed field helpers ----
    //
    // Each getter composes `get_field` with the matching accessor, so an
    // absent field and a wrong-typed field both degrade to the zero value
    // of the requested type.

    pub fn get_number_field(&self, name: &str) -> f64 {
        self.get_field(name).as_number()
    }

    pub fn set_number_field(&self, name: &str, value: f64) {
        self.set_field(name, JsonValueRef::number(value));
    }

    pub fn get_string_field(&self, name: &str) -> String {
        self.get_field(name).as_string()
    }

    pub fn set_string_field(&self, name: &str, value: impl Into<String>) {
        self.set_field(name, JsonValueRef::string(value));
    }

    pub fn get_bool_field(&self, name: &str) -> bool {
        self.get_field(name).as_bool()
    }

    pub fn set_bool_field(&self, name: &str, value: bool) {
        self.set_field(name, JsonValueRef::boolean(value));
    }

    pub fn get_object_field(&self, name: &str) -> JsonObjectRef {
        self.get_field(name).as_object()
    }

    pub fn set_object_field(&self, name: &str, value: JsonObjectRef) {
        self.set_field(name, JsonValueRef::object(value));
    }

    pub fn get_binary_field(&self, name: &str) -> Vec<u8> {
        self.get_field(name).as_binary()
    }

    pub fn set_binary_field(&self, name: &str, bytes: impl Into<Vec<u8>>) {
        self.set_field(name, JsonValueRef::binary(bytes));
    }

    // ---- Array field helpers ----

    pub fn get_array_field(&self, name: &str) -> Vec<JsonValueRef> {
        self.get_field(name).as_array()
    }

    pub fn set_array_field(&self, name: &str, items: Vec<JsonValueRef>) {
        self.set_field(name, JsonValueRef::array(items));
    }

    // Uniform-array getters assume a homogeneous array. A wrong-typed
    // element degrades to that element's zero value in place; the result
    // always has the source array's length.

    pub fn get_number_array_field(&self, name: &str) -> Vec<f64> {
        self.get_array_field(name)
            .iter()
            .map(JsonValueRef::as_number)
            .collect()
    }

    pub fn set_number_array_field(&self, name: &str, values: &[f64]) {
        let items = values.iter().map(|&n| JsonValueRef::number(n)).collect();
        self.set_array_field(name, items);
    }

    pub fn get_string_array_field(&self, name: &str) -> Vec<String> {
        self.get_array_field(name)
            .iter()
            .map(JsonValueRef::as_string)
            .collect()
    }

    pub fn set_string_array_field(&self, name: &str, values: &[String]) {
        let items = values
            .iter()
            .map(|s| JsonValueRef::string(s.clone()))
            .collect();
        self.set_array_field(name, items);
    }

    pub fn get_bool_array_field(&self, name: &str) -> Vec<bool> {
        self.get_array_field(name)
            .iter()
            .map(JsonValueRef::as_bool)
            .collect()
    }

    pub fn set_bool_array_field(&self, name: &str, values: &[bool]) {
        let items = values.iter().map(|&b| JsonValueRef::boolean(b)).collect();
        self.set_array_field(name, items);
    }

    pub fn get_object_array_field(&self, name: &str) -> Vec<JsonObjectRef> {
        self.get_array_field(name)
            .iter()
            .map(JsonValueRef::as_object)
            .collect()
    }

    pub fn set_object_array_field(&self, name: &str, values: &[JsonObjectRef]) {
        let items = values
            .iter()
            .map(|o| JsonValueRef::object(o.clone()))
            .collect();
        self.set_array_field(name, items);
    }

    // ---- Serialization ----

    /// Encodes with line breaks and indentation.
    pub fn encode_json(&self) -> String {
        json::encode(&JsonValueRef::object(self.clone()), true)
    }

    /// Encodes as a single line without insignificant whitespace.
    pub fn encode_json_compact(&self) -> String {
        json::encode(&JsonValueRef::object(self.clone()), false)
    }

    /// Decodes `text` and, when it holds an object root, replaces this
    /// handle's map with it (sibling clones keep the old map, as with
    /// [`reset`](Self::reset)). On a parse failure or a non-object root
    /// the current contents are untouched and `false` is returned.
    pub fn decode_json(&mut self, text: &str) -> bool {
        match json::decode(text) {
            Ok(root) => match root.try_as_object() {
                Some(decoded) => {
                    self.map = decoded.map;
                    true
                }
                None => {
                    warn!(root = root.type_name(), "decoded root is not an object");
                    false
                }
            },
            Err(err) => {
                warn!(%err, "failed to decode json object");
                false
            }
        }
    }
}
