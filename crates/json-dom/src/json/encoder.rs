//! [`JsonEncoder`] — writes a value tree as UTF-8 JSON text.
//!
//! Numbers use the shortest decimal representation that round-trips the
//! binary64 value (integral values within i64 range print without a
//! fraction). Binary leaves become quoted standard-Base64 strings.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::value::{JsonValue, JsonValueRef};

pub struct JsonEncoder {
    out: String,
    pretty: bool,
    depth: usize,
}

impl JsonEncoder {
    pub fn new(pretty: bool) -> Self {
        Self {
            out: String::new(),
            pretty,
            depth: 0,
        }
    }

    pub fn encode(mut self, value: &JsonValueRef) -> String {
        self.write_any(value.node());
        self.out
    }

    fn write_any(&mut self, value: &JsonValue) {
        match value {
            JsonValue::Null => self.out.push_str("null"),
            JsonValue::Bool(true) => self.out.push_str("true"),
            JsonValue::Bool(false) => self.out.push_str("false"),
            JsonValue::Number(n) => self.write_number(*n),
            JsonValue::String(s) => self.write_str(s),
            JsonValue::Binary(b) => self.write_bin(b),
            JsonValue::Array(items) => self.write_arr(items),
            JsonValue::Object(obj) => self.write_obj(&obj.entries()),
        }
    }

    fn write_number(&mut self, num: f64) {
        self.out.push_str(&format_float(num));
    }

    /// Binary leaf: a plain quoted Base64 string, indistinguishable on the
    /// wire from any other string.
    fn write_bin(&mut self, bytes: &[u8]) {
        self.out.push('"');
        self.out.push_str(&BASE64.encode(bytes));
        self.out.push('"');
    }

    /// JSON string with escaping. ASCII without quotes, backslashes, or
    /// control characters is copied straight through; everything else
    /// goes through serde_json's escaper.
    fn write_str(&mut self, s: &str) {
        let plain = s
            .bytes()
            .all(|b| (0x20..0x7f).contains(&b) && b != b'"' && b != b'\\');
        if plain {
            self.out.push('"');
            self.out.push_str(s);
            self.out.push('"');
            return;
        }
        let escaped = serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
        self.out.push_str(&escaped);
    }

    fn write_arr(&mut self, items: &[JsonValueRef]) {
        if items.is_empty() {
            self.out.push_str("[]");
            return;
        }
        self.out.push('[');
        self.depth += 1;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.break_line();
            self.write_any(item.node());
        }
        self.depth -= 1;
        self.break_line();
        self.out.push(']');
    }

    fn write_obj(&mut self, entries: &[(String, JsonValueRef)]) {
        if entries.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push('{');
        self.depth += 1;
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.break_line();
            self.write_str(key);
            self.out.push(':');
            if self.pretty {
                self.out.push(' ');
            }
            self.write_any(value.node());
        }
        self.depth -= 1;
        self.break_line();
        self.out.push('}');
    }

    fn break_line(&mut self) {
        if self.pretty {
            self.out.push('\n');
            for _ in 0..self.depth {
                self.out.push_str("  ");
            }
        }
    }
}

/// JSON has no literal for non-finite doubles: NaN prints as `null` and
/// infinities clamp to the largest representable exponent.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "null".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "1e308".to_string()
        } else {
            "-1e308".to_string()
        }
    } else if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        // Rust's Display for f64 is the shortest round-trip representation.
        format!("{f}")
    }
}
