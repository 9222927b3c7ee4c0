//! [`JsonDecoder`] — byte-cursor recursive-descent decoder that builds a
//! handle tree from JSON text.
//!
//! Every numeric literal, integer or real, collapses to one `f64`. The
//! decoder knows nothing about the binary leaf: Base64-looking strings
//! decode as strings.

use indexmap::IndexMap;

use super::error::JsonError;
use crate::object::JsonObjectRef;
use crate::value::{JsonValue, JsonValueRef};

pub struct JsonDecoder<'a> {
    data: &'a [u8],
    x: usize,
}

impl<'a> JsonDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0 }
    }

    /// Decodes exactly one root value and rejects trailing non-whitespace.
    pub fn decode(mut self) -> Result<JsonValueRef, JsonError> {
        let root = self.read_any()?;
        self.skip_whitespace();
        if self.x < self.data.len() {
            return Err(JsonError::TrailingData(self.x));
        }
        Ok(root)
    }

    fn read_any(&mut self) -> Result<JsonValueRef, JsonError> {
        self.skip_whitespace();
        if self.x >= self.data.len() {
            return Err(JsonError::UnexpectedEnd(self.x));
        }
        match self.data[self.x] {
            b'"' => Ok(JsonValueRef::string(self.read_str()?)),
            b'[' => self.read_arr(),
            b'{' => self.read_obj(),
            b'n' => self.read_literal(b"null", JsonValue::Null),
            b't' => self.read_literal(b"true", JsonValue::Bool(true)),
            b'f' => self.read_literal(b"false", JsonValue::Bool(false)),
            c if c.is_ascii_digit() || c == b'-' => self.read_num(),
            _ => Err(JsonError::InvalidSyntax(self.x)),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.x < self.data.len() {
            match self.data[self.x] {
                b' ' | b'\t' | b'\n' | b'\r' => self.x += 1,
                _ => break,
            }
        }
    }

    fn read_literal(&mut self, word: &[u8], value: JsonValue) -> Result<JsonValueRef, JsonError> {
        let end = self.x + word.len();
        if end > self.data.len() {
            return Err(JsonError::UnexpectedEnd(self.data.len()));
        }
        if &self.data[self.x..end] != word {
            return Err(JsonError::InvalidSyntax(self.x));
        }
        self.x = end;
        Ok(value.into())
    }

    fn read_num(&mut self) -> Result<JsonValueRef, JsonError> {
        let start = self.x;
        let data = self.data;
        let len = data.len();
        let mut x = self.x;

        if x < len && data[x] == b'-' {
            x += 1;
        }
        while x < len && data[x].is_ascii_digit() {
            x += 1;
        }
        if x < len && data[x] == b'.' {
            x += 1;
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        if x < len && (data[x] == b'e' || data[x] == b'E') {
            x += 1;
            if x < len && (data[x] == b'+' || data[x] == b'-') {
                x += 1;
            }
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        self.x = x;

        let text = std::str::from_utf8(&data[start..x])
            .map_err(|_| JsonError::InvalidNumber(start))?;
        let num: f64 = text.parse().map_err(|_| JsonError::InvalidNumber(start))?;
        Ok(JsonValueRef::number(num))
    }

    fn read_str(&mut self) -> Result<String, JsonError> {
        if self.x >= self.data.len() || self.data[self.x] != b'"' {
            return Err(JsonError::InvalidSyntax(self.x));
        }
        let body_start = self.x + 1;
        let body_end = self.find_ending_quote(body_start)?;
        let body = &self.data[body_start..body_end];
        let text = decode_string_body(body).ok_or(JsonError::InvalidString(body_start))?;
        self.x = body_end + 1; // past the closing quote
        Ok(text)
    }

    /// Scans for the closing quote, skipping escape pairs and rejecting
    /// raw control characters.
    fn find_ending_quote(&self, mut x: usize) -> Result<usize, JsonError> {
        let data = self.data;
        while x < data.len() {
            match data[x] {
                b'"' => return Ok(x),
                b'\\' => {
                    if x + 1 >= data.len() {
                        return Err(JsonError::UnexpectedEnd(data.len()));
                    }
                    x += 2;
                }
                c if c < 0x20 => return Err(JsonError::InvalidString(x)),
                _ => x += 1,
            }
        }
        Err(JsonError::UnexpectedEnd(data.len()))
    }

    fn read_arr(&mut self) -> Result<JsonValueRef, JsonError> {
        self.x += 1; // past '['
        let mut items: Vec<JsonValueRef> = Vec::new();
        loop {
            self.skip_whitespace();
            if self.x >= self.data.len() {
                return Err(JsonError::UnexpectedEnd(self.x));
            }
            match self.data[self.x] {
                b']' => {
                    self.x += 1;
                    return Ok(JsonValueRef::array(items));
                }
                b',' if !items.is_empty() => self.x += 1,
                _ if items.is_empty() => {}
                _ => return Err(JsonError::InvalidSyntax(self.x)),
            }
            items.push(self.read_any()?);
        }
    }

    fn read_obj(&mut self) -> Result<JsonValueRef, JsonError> {
        self.x += 1; // past '{'
        let mut fields: IndexMap<String, JsonValueRef> = IndexMap::new();
        let mut first = true;
        loop {
            self.skip_whitespace();
            if self.x >= self.data.len() {
                return Err(JsonError::UnexpectedEnd(self.x));
            }
            match self.data[self.x] {
                b'}' => {
                    self.x += 1;
                    return Ok(JsonValueRef::object(JsonObjectRef::from_fields(fields)));
                }
                b',' if !first => self.x += 1,
                _ if first => {}
                _ => return Err(JsonError::InvalidSyntax(self.x)),
            }
            self.skip_whitespace();
            let key = self.read_str()?;
            self.skip_whitespace();
            if self.x >= self.data.len() {
                return Err(JsonError::UnexpectedEnd(self.x));
            }
            if self.data[self.x] != b':' {
                return Err(JsonError::InvalidSyntax(self.x));
            }
            self.x += 1;
            let value = self.read_any()?;
            // Duplicate keys: last value wins, first position kept.
            fields.insert(key, value);
            first = false;
        }
    }
}

/// Decodes a string body (between the quotes). The no-escape fast path is
/// a plain UTF-8 check; escaped bodies go through serde_json's unescaper.
fn decode_string_body(body: &[u8]) -> Option<String> {
    if !body.contains(&b'\\') {
        return std::str::from_utf8(body).ok().map(str::to_owned);
    }
    let mut quoted = Vec::with_capacity(body.len() + 2);
    quoted.push(b'"');
    quoted.extend_from_slice(body);
    quoted.push(b'"');
    serde_json::from_slice(&quoted).ok()
}
