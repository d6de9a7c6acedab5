use logos::Logos;

/// Token types for the permissive object-literal syntax
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*[^/])*\*/")]
pub enum Token<'src> {
    // Bare identifiers: unquoted object keys plus the literal words
    // true/false/null, which the parser tells apart by spelling
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice())]
    Ident(&'src str),

    // String literals, escapes included in the raw slice
    #[regex(r#""([^"\\]|\\.)*""#, |lex| lex.slice())]
    String(&'src str),

    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice())]
    Number(&'src str),

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    // Anything else is carried through so the parser can name it in the
    // error instead of misparsing around it
    #[regex(r".", |lex| lex.slice(), priority = 0)]
    Unknown(&'src str),
}

pub fn tokenize(source: &str) -> Vec<(Token, std::ops::Range<usize>)> {
    let lexer = Token::lexer(source);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, span)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquoted_keys_and_bare_literals() {
        let source = r#"{ name: "Foo", trending: true }"#;
        let tokens = tokenize(source);

        assert_eq!(tokens[0].0, Token::LBrace);
        assert_eq!(tokens[1].0, Token::Ident("name"));
        assert_eq!(tokens[2].0, Token::Colon);
        assert_eq!(tokens[3].0, Token::String("\"Foo\""));
        assert_eq!(tokens[4].0, Token::Comma);
        assert_eq!(tokens[5].0, Token::Ident("trending"));
        assert_eq!(tokens[7].0, Token::Ident("true"));
    }

    #[test]
    fn test_string_with_escape() {
        let tokens = tokenize(r#""a\"b""#);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, Token::String(r#""a\"b""#));
    }

    #[test]
    fn test_unknown_character_is_kept() {
        let tokens = tokenize("[@]");
        assert_eq!(tokens[1].0, Token::Unknown("@"));
    }

    #[test]
    fn test_comments_are_skipped() {
        let tokens = tokenize("[ // trailing note\n ]");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].0, Token::LBracket);
        assert_eq!(tokens[1].0, Token::RBracket);
    }
}
