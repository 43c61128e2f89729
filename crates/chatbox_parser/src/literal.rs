//! Reader for permissive object literals.
//!
//! Config blocks are written the way one writes an object literal by hand,
//! not as strict JSON. The reader accepts:
//! - bare keys (`people`), quoted keys (`'alice'`, `"bob"`) and numeric keys
//! - single, double and backtick quoted strings with the usual escapes
//! - numbers, `true`, `false`, `null` and `undefined` (read as null)
//! - nested objects and arrays, with trailing commas
//! - `//` line comments and `/* */` block comments
//!
//! The result is a [`serde_json::Value`], so callers deserialize it with serde.
//! Nothing in the literal is ever executed.

use serde_json::{Map, Number, Value};

/// A syntax error in an object literal.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{} at offset {}", message, offset)]
pub struct LiteralError {
    /// What went wrong
    pub message: String,
    /// Byte offset into the literal
    pub offset: usize,
}

impl LiteralError {
    fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

type LiteralResult<T> = Result<T, LiteralError>;

/// Reads a complete literal; anything but whitespace or comments after the
/// value is an error.
///
/// # Examples
///
/// ```
/// use chatbox_parser::read_literal;
///
/// let value = read_literal("{ people: { alice: { name: 'Alice', }, }, }").unwrap();
/// assert_eq!(value["people"]["alice"]["name"], "Alice");
/// ```
pub fn read_literal(src: &str) -> LiteralResult<Value> {
    LiteralReader::new(src).read_document()
}

/// Recursive-descent reader over a borrowed literal.
struct LiteralReader<'a> {
    src: &'a str,
    pos: usize,
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_rest(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

impl<'a> LiteralReader<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn read_document(mut self) -> LiteralResult<Value> {
        self.skip_trivia()?;
        let value = self.value()?;
        self.skip_trivia()?;
        if let Some(c) = self.peek() {
            return Err(self.error(format!("Unexpected '{}' after literal", c)));
        }
        Ok(value)
    }

    fn error(&self, message: impl Into<String>) -> LiteralError {
        LiteralError::new(message, self.pos)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> LiteralResult<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("Expected '{}', found '{}'", expected, c))),
            None => Err(self.error(format!("Expected '{}', found end of input", expected))),
        }
    }

    fn skip_trivia(&mut self) -> LiteralResult<()> {
        loop {
            match (self.peek(), self.peek_second()) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                (Some('/'), Some('*')) => {
                    let start = self.pos;
                    self.pos += 2;
                    match self.src[self.pos..].find("*/") {
                        Some(end) => self.pos += end + 2,
                        None => return Err(LiteralError::new("Unterminated block comment", start)),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn value(&mut self) -> LiteralResult<Value> {
        match self.peek() {
            Some('{') => self.object(),
            Some('[') => self.array(),
            Some(quote @ ('"' | '\'' | '`')) => self.string(quote).map(Value::String),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.number(),
            Some(c) if is_identifier_start(c) => self.keyword(),
            Some(c) => Err(self.error(format!("Unexpected '{}'", c))),
            None => Err(self.error("Unexpected end of input")),
        }
    }

    fn object(&mut self) -> LiteralResult<Value> {
        self.expect('{')?;
        let mut map = Map::new();
        loop {
            self.skip_trivia()?;
            if self.eat('}') {
                break;
            }
            let key = self.key()?;
            self.skip_trivia()?;
            self.expect(':')?;
            self.skip_trivia()?;
            let value = self.value()?;
            // Later duplicates replace earlier ones.
            map.insert(key, value);
            self.skip_trivia()?;
            if self.eat(',') {
                continue;
            }
            self.expect('}')?;
            break;
        }
        Ok(Value::Object(map))
    }

    fn array(&mut self) -> LiteralResult<Value> {
        self.expect('[')?;
        let mut items = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.eat(']') {
                break;
            }
            items.push(self.value()?);
            self.skip_trivia()?;
            if self.eat(',') {
                continue;
            }
            self.expect(']')?;
            break;
        }
        Ok(Value::Array(items))
    }

    fn key(&mut self) -> LiteralResult<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => self.string(quote),
            Some(c) if is_identifier_start(c) => Ok(self.identifier().to_string()),
            Some(c) if c.is_ascii_digit() => {
                let start = self.pos;
                while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '.') {
                    self.bump();
                }
                Ok(self.src[start..self.pos].to_string())
            }
            Some(c) => Err(self.error(format!("Expected property name, found '{}'", c))),
            None => Err(self.error("Expected property name, found end of input")),
        }
    }

    fn identifier(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(is_identifier_rest) {
            self.bump();
        }
        &self.src[start..self.pos]
    }

    fn keyword(&mut self) -> LiteralResult<Value> {
        let start = self.pos;
        match self.identifier() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" | "undefined" => Ok(Value::Null),
            other => Err(LiteralError::new(
                format!("Unexpected identifier '{}'", other),
                start,
            )),
        }
    }

    fn number(&mut self) -> LiteralResult<Value> {
        let start = self.pos;
        let negative = match self.peek() {
            Some('-') => {
                self.bump();
                true
            }
            Some('+') => {
                self.bump();
                false
            }
            _ => false,
        };

        if self.peek() == Some('0') && matches!(self.peek_second(), Some('x' | 'X')) {
            self.pos += 2;
            let digits_start = self.pos;
            while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.bump();
            }
            let magnitude = i64::from_str_radix(&self.src[digits_start..self.pos], 16)
                .map_err(|_| LiteralError::new("Invalid hexadecimal number", start))?;
            let value = if negative { -magnitude } else { magnitude };
            return Ok(Value::Number(value.into()));
        }

        let mut is_integer = true;
        let mut digits = 0;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            digits += 1;
        }
        if self.eat('.') {
            is_integer = false;
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
                digits += 1;
            }
        }
        if digits == 0 {
            return Err(LiteralError::new("Invalid number", start));
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            is_integer = false;
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(self.error("Invalid number exponent"));
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
        }

        let text = &self.src[start..self.pos];
        if is_integer {
            if let Ok(value) = text.parse::<i64>() {
                return Ok(Value::Number(value.into()));
            }
        }
        text.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| LiteralError::new(format!("Invalid number '{}'", text), start))
    }

    fn string(&mut self, quote: char) -> LiteralResult<String> {
        let start = self.pos;
        self.expect(quote)?;
        let mut out = String::new();
        loop {
            let Some(c) = self.bump() else {
                return Err(LiteralError::new("Unterminated string", start));
            };
            match c {
                c if c == quote => return Ok(out),
                '\\' => self.escape(&mut out)?,
                '\n' if quote != '`' => {
                    return Err(LiteralError::new("Unterminated string", start));
                }
                '$' if quote == '`' && self.peek() == Some('{') => {
                    return Err(self.error("Template substitutions are not supported"));
                }
                c => out.push(c),
            }
        }
    }

    fn escape(&mut self, out: &mut String) -> LiteralResult<()> {
        let start = self.pos - 1;
        let Some(c) = self.bump() else {
            return Err(LiteralError::new("Unterminated escape sequence", start));
        };
        match c {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            'x' => {
                let code = self.hex_digits(2, start)?;
                let decoded =
                    char::from_u32(code).ok_or_else(|| LiteralError::new("Invalid escape", start))?;
                out.push(decoded);
            }
            'u' => out.push(self.unicode_escape(start)?),
            // Line continuation.
            '\n' => {}
            '\r' => {
                self.eat('\n');
            }
            other => out.push(other),
        }
        Ok(())
    }

    fn unicode_escape(&mut self, start: usize) -> LiteralResult<char> {
        let invalid = || LiteralError::new("Invalid unicode escape", start);
        let code = if self.eat('{') {
            let digits_start = self.pos;
            while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.bump();
            }
            let code = u32::from_str_radix(&self.src[digits_start..self.pos], 16)
                .map_err(|_| invalid())?;
            self.expect('}').map_err(|_| invalid())?;
            code
        } else {
            let high = self.hex_digits(4, start)?;
            if (0xD800..=0xDBFF).contains(&high) && self.src[self.pos..].starts_with("\\u") {
                self.pos += 2;
                let low = self.hex_digits(4, start)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(invalid());
                }
                0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
            } else {
                high
            }
        };
        char::from_u32(code).ok_or_else(invalid)
    }

    fn hex_digits(&mut self, count: usize, start: usize) -> LiteralResult<u32> {
        let end = self.pos + count;
        let digits = self
            .src
            .get(self.pos..end)
            .filter(|digits| digits.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| LiteralError::new("Invalid escape", start))?;
        let code = u32::from_str_radix(digits, 16)
            .map_err(|_| LiteralError::new("Invalid escape", start))?;
        self.pos = end;
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_keys_and_trailing_commas() {
        let value =
            read_literal("{ people: { alice: { name: 'A', avatar: \"a.png\", }, }, }").unwrap();
        assert_eq!(
            value,
            json!({ "people": { "alice": { "name": "A", "avatar": "a.png" } } })
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let src = r#"{
            // roster for this post
            people: { /* nobody yet */ },
        }"#;
        assert_eq!(read_literal(src).unwrap(), json!({ "people": {} }));
    }

    #[test]
    fn test_scalars() {
        let value =
            read_literal("{ a: 1, b: -2.5, c: 0x1F, d: true, e: null, f: undefined, g: 1e3 }")
                .unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(value["b"], -2.5);
        assert_eq!(value["c"], 31);
        assert_eq!(value["d"], true);
        assert!(value["e"].is_null());
        assert!(value["f"].is_null());
        assert_eq!(value["g"], 1000.0);
    }

    #[test]
    fn test_arrays() {
        let value = read_literal("{ tags: ['a', `b`, [1, 2,],], }").unwrap();
        assert_eq!(value["tags"], json!(["a", "b", [1, 2]]));
    }

    #[test]
    fn test_string_escapes() {
        let value = read_literal(r#"{ s: 'it\'s\n小\u{660E}\x41' }"#).unwrap();
        assert_eq!(value["s"], "it's\n小明A");
    }

    #[test]
    fn test_surrogate_pair_escape() {
        let value = read_literal(r#"{ s: "\uD83D\uDE00" }"#).unwrap();
        assert_eq!(value["s"], "\u{1F600}");
    }

    #[test]
    fn test_quoted_and_unicode_keys() {
        let value = read_literal("{ 'with space': 1, \"q\": 2, 小明: 3, 7: 4 }").unwrap();
        assert_eq!(value["with space"], 1);
        assert_eq!(value["q"], 2);
        assert_eq!(value["小明"], 3);
        assert_eq!(value["7"], 4);
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let value = read_literal("{ a: 1, a: 2 }").unwrap();
        assert_eq!(value, json!({ "a": 2 }));
    }

    #[test]
    fn test_unterminated_string() {
        let err = read_literal("{ a: 'oops }").unwrap_err();
        assert_eq!(err.message, "Unterminated string");
        assert_eq!(err.offset, 5);
    }

    #[test]
    fn test_newline_inside_quoted_string_rejected() {
        assert!(read_literal("{ a: 'line\nbreak' }").is_err());
        assert_eq!(read_literal("{ a: `line\nbreak` }").unwrap()["a"], "line\nbreak");
    }

    #[test]
    fn test_template_substitution_rejected() {
        let err = read_literal("{ a: `${process.exit()}` }").unwrap_err();
        assert!(err.message.contains("Template"));
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        let err = read_literal("{ a: alert }").unwrap_err();
        assert_eq!(err.message, "Unexpected identifier 'alert'");
        assert_eq!(err.offset, 5);
    }

    #[test]
    fn test_missing_colon() {
        let err = read_literal("{ a 1 }").unwrap_err();
        assert!(err.message.starts_with("Expected ':'"));
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(read_literal("{} extra").is_err());
        assert!(read_literal("{} // fine").is_ok());
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = read_literal("{ /* never closed }").unwrap_err();
        assert_eq!(err.message, "Unterminated block comment");
    }
}
