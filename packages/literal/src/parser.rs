use crate::error::{LiteralError, LiteralResult};
use crate::record::AppRecord;
use crate::tokenizer::{tokenize, Token};

/// Decode the interior of an `APPS` literal into records.
///
/// The input is the bracketed array text (`[ {...}, {...} ]`), without the
/// `const APPS =` wrapper. Missing record fields take their defaults; keys
/// the page does not use are ignored.
pub fn parse_records(source: &str) -> LiteralResult<Vec<AppRecord>> {
    let mut parser = Parser::new(source);
    let value = parser.parse_value()?;
    parser.expect_end()?;
    records_from_value(value)
}

/// Parsed literal data. Strictly literal syntax: strings, numbers,
/// booleans, null, arrays, objects. Nothing here can name or invoke
/// anything in the host page.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

/// Recursive-descent parser for the permissive literal syntax
pub struct Parser<'src> {
    tokens: Vec<(Token<'src>, std::ops::Range<usize>)>,
    pos: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            tokens: tokenize(source),
            pos: 0,
        }
    }

    pub fn parse_value(&mut self) -> LiteralResult<Value> {
        match self.peek() {
            Some((Token::LBracket, _)) => self.parse_array(),
            Some((Token::LBrace, _)) => self.parse_object(),
            Some((Token::String(raw), _)) => {
                let text = unescape(raw);
                self.advance();
                Ok(Value::String(text))
            }
            Some((Token::Number(raw), span)) => {
                let (raw, pos) = (*raw, span.start);
                let number = raw.parse::<f64>().map_err(|_| LiteralError::InvalidNumber {
                    pos,
                    text: raw.to_string(),
                })?;
                self.advance();
                Ok(Value::Number(number))
            }
            Some((Token::Ident("true"), _)) => {
                self.advance();
                Ok(Value::Bool(true))
            }
            Some((Token::Ident("false"), _)) => {
                self.advance();
                Ok(Value::Bool(false))
            }
            Some((Token::Ident("null"), _)) => {
                self.advance();
                Ok(Value::Null)
            }
            // A stray double quote can only come from a string the
            // tokenizer failed to close
            Some((Token::Unknown("\""), span)) => {
                Err(LiteralError::UnterminatedString { pos: span.start })
            }
            None => Err(LiteralError::unexpected_eof(self.peek_span().start)),
            _ => Err(LiteralError::unexpected_token(
                self.peek_span().start,
                "value",
                Self::format_token(self.peek()),
            )),
        }
    }

    fn parse_array(&mut self) -> LiteralResult<Value> {
        self.expect(Token::LBracket)?;

        let mut elements = Vec::new();
        while !self.check(Token::RBracket) && !self.is_at_end() {
            elements.push(self.parse_value()?);

            // Comma-separated, trailing comma allowed
            if !self.match_token(Token::Comma) {
                break;
            }
        }

        self.expect(Token::RBracket)?;
        Ok(Value::Array(elements))
    }

    fn parse_object(&mut self) -> LiteralResult<Value> {
        self.expect(Token::LBrace)?;

        let mut entries = Vec::new();
        while !self.check(Token::RBrace) && !self.is_at_end() {
            let key = self.expect_key()?;
            self.expect(Token::Colon)?;
            let value = self.parse_value()?;
            entries.push((key, value));

            if !self.match_token(Token::Comma) {
                break;
            }
        }

        self.expect(Token::RBrace)?;
        Ok(Value::Object(entries))
    }

    /// Object keys may be bare identifiers or quoted strings
    fn expect_key(&mut self) -> LiteralResult<String> {
        match self.peek() {
            Some((Token::Ident(name), _)) => {
                let key = name.to_string();
                self.advance();
                Ok(key)
            }
            Some((Token::String(raw), _)) => {
                let key = unescape(raw);
                self.advance();
                Ok(key)
            }
            Some((Token::Unknown("\""), span)) => {
                Err(LiteralError::UnterminatedString { pos: span.start })
            }
            _ => Err(LiteralError::unexpected_token(
                self.peek_span().start,
                "object key",
                Self::format_token(self.peek()),
            )),
        }
    }

    fn expect_end(&mut self) -> LiteralResult<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(LiteralError::unexpected_token(
                self.peek_span().start,
                "end of literal",
                Self::format_token(self.peek()),
            ))
        }
    }

    fn peek(&self) -> Option<&(Token<'src>, std::ops::Range<usize>)> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&(Token<'src>, std::ops::Range<usize>)> {
        let token = self.tokens.get(self.pos);
        self.pos += 1;
        token
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn check(&self, token: Token) -> bool {
        if let Some((t, _)) = self.peek() {
            std::mem::discriminant(t) == std::mem::discriminant(&token)
        } else {
            false
        }
    }

    fn match_token(&mut self, token: Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token) -> LiteralResult<()> {
        if self.check(token.clone()) {
            self.advance();
            Ok(())
        } else {
            Err(LiteralError::unexpected_token(
                self.peek_span().start,
                format!("{:?}", token),
                Self::format_token(self.peek()),
            ))
        }
    }

    fn peek_span(&self) -> std::ops::Range<usize> {
        self.tokens
            .get(self.pos)
            .map(|(_, span)| span.clone())
            .unwrap_or_else(|| {
                let end = self.tokens.last().map(|(_, span)| span.end).unwrap_or(0);
                end..end
            })
    }

    fn format_token(token: Option<&(Token, std::ops::Range<usize>)>) -> String {
        match token {
            None => "end of literal".to_string(),
            Some((Token::Ident(name), _)) => format!("identifier `{}`", name),
            Some((Token::String(_), _)) => "string".to_string(),
            Some((Token::Number(n), _)) => format!("number `{}`", n),
            Some((Token::Unknown(c), _)) => format!("`{}`", c),
            Some((t, _)) => format!("{:?}", t),
        }
    }
}

/// Strip quotes and resolve backslash escapes in a raw string token
fn unescape(raw: &str) -> String {
    let inner = &raw[1..raw.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }

    out
}

fn records_from_value(value: Value) -> LiteralResult<Vec<AppRecord>> {
    let elements = match value {
        Value::Array(elements) => elements,
        _ => return Err(LiteralError::NotAnArray),
    };

    let mut records = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        let entries = match element {
            Value::Object(entries) => entries,
            _ => return Err(LiteralError::NotAnObject { index }),
        };

        let mut record = AppRecord::default();
        for (key, value) in entries {
            match key.as_str() {
                "name" => record.name = coerce_string(&value),
                "icon" => record.icon = coerce_string(&value),
                "locker_id" => record.locker_id = coerce_string(&value),
                "platforms" => {
                    if let Value::Array(items) = value {
                        record.platforms = items
                            .iter()
                            .map(|item| coerce_string(item).to_lowercase())
                            .collect();
                    }
                }
                "trending" => record.trending = matches!(value, Value::Bool(true)),
                "featured" => record.featured = matches!(value, Value::Bool(true)),
                _ => {}
            }
        }
        records.push(record);
    }

    Ok(records)
}

/// String-typed record fields accept any scalar; null becomes empty
fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(n) => {
            if n.fract() == 0.0 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissive_decode() {
        let source = r#"[{name:"Foo",icon:"i.png",locker_id:"L1",platforms:["android","ios"],trending:true,featured:false}]"#;
        let records = parse_records(source).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Foo");
        assert_eq!(records[0].icon, "i.png");
        assert_eq!(records[0].locker_id, "L1");
        assert_eq!(records[0].platforms, vec!["android", "ios"]);
        assert!(records[0].trending);
        assert!(!records[0].featured);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let records = parse_records(r#"[{name:"Bar"}]"#).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Bar");
        assert_eq!(records[0].icon, "");
        assert_eq!(records[0].locker_id, "");
        assert!(records[0].platforms.is_empty());
        assert!(!records[0].trending);
        assert!(!records[0].featured);
    }

    #[test]
    fn test_quoted_keys_and_trailing_commas() {
        let source = r#"[
            {
                "name": "Baz",
                "platforms": ["Android",],
                "featured": true,
            },
        ]"#;
        let records = parse_records(source).unwrap();

        assert_eq!(records[0].name, "Baz");
        assert_eq!(records[0].platforms, vec!["android"]);
        assert!(records[0].featured);
    }

    #[test]
    fn test_null_string_field_becomes_empty() {
        let records = parse_records(r#"[{name:"X",icon:null}]"#).unwrap();
        assert_eq!(records[0].icon, "");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let records = parse_records(r#"[{name:"X",rating:4.5,tags:["a"]}]"#).unwrap();
        assert_eq!(records[0].name, "X");
    }

    #[test]
    fn test_top_level_object_rejected() {
        let err = parse_records(r#"{name:"X"}"#).unwrap_err();
        assert_eq!(err, LiteralError::NotAnArray);
    }

    #[test]
    fn test_non_object_element_rejected() {
        let err = parse_records(r#"[{name:"X"}, "stray"]"#).unwrap_err();
        assert_eq!(err, LiteralError::NotAnObject { index: 1 });
    }

    #[test]
    fn test_unclosed_array_reports_eof() {
        let err = parse_records(r#"[{name:"X"}"#).unwrap_err();
        assert!(matches!(err, LiteralError::UnexpectedToken { .. }));
    }

    #[test]
    fn test_unterminated_string_is_named() {
        let err = parse_records(r#"[{name:"Foo]"#).unwrap_err();
        assert!(matches!(err, LiteralError::UnterminatedString { .. }));

        // Unclosed string in key position
        let err = parse_records(r#"[{"name]"#).unwrap_err();
        assert!(matches!(err, LiteralError::UnterminatedString { .. }));
    }

    #[test]
    fn test_stray_character_is_named_in_error() {
        let err = parse_records("[@]").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("@"), "cause missing from: {}", message);
    }

    #[test]
    fn test_escaped_quote_in_string() {
        let records = parse_records(r#"[{name:"Say \"hi\""}]"#).unwrap();
        assert_eq!(records[0].name, "Say \"hi\"");
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_records("[]").unwrap().is_empty());
        assert!(parse_records("[ ]").unwrap().is_empty());
    }
}
