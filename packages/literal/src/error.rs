use thiserror::Error;

pub type LiteralResult<T> = Result<T, LiteralError>;

/// Why an embedded array literal could not be decoded.
///
/// Positions are byte offsets into the literal text handed to the parser,
/// not into the surrounding document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LiteralError {
    #[error("unexpected token at byte {pos}: expected {expected}, found {found}")]
    UnexpectedToken {
        pos: usize,
        expected: String,
        found: String,
    },

    #[error("unexpected end of literal at byte {pos}")]
    UnexpectedEof { pos: usize },

    #[error("unterminated string starting at byte {pos}")]
    UnterminatedString { pos: usize },

    #[error("invalid number at byte {pos}: {text}")]
    InvalidNumber { pos: usize, text: String },

    #[error("top-level value is not an array")]
    NotAnArray,

    #[error("array element {index} is not an object")]
    NotAnObject { index: usize },
}

impl LiteralError {
    pub fn unexpected_token(
        pos: usize,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::UnexpectedToken {
            pos,
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn unexpected_eof(pos: usize) -> Self {
        Self::UnexpectedEof { pos }
    }
}
