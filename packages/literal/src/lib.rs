//! # lpedit Literal Codec
//!
//! Converts between the `const APPS = [...]` array literal embedded in a
//! landing page and a structured list of [`AppRecord`]s.
//!
//! The literal is not strict JSON: pages in the wild use unquoted object
//! keys, bare `true`/`false`/`null` tokens, and trailing commas. Decoding
//! accepts all of that. It is a pure literal parser — bare identifiers are
//! only legal as object keys or as the three literal words, and nothing is
//! ever evaluated.
//!
//! Encoding always re-emits the canonical layout (fixed key order, two-space
//! indent), so a round-trip normalizes whitespace but preserves every value
//! and the record order exactly.

pub mod error;
pub mod parser;
pub mod record;
pub mod serializer;
pub mod tokenizer;

pub use error::{LiteralError, LiteralResult};
pub use parser::{parse_records, Parser};
pub use record::AppRecord;
pub use serializer::serialize_records;
pub use tokenizer::{tokenize, Token};
