//! # lpedit Page
//!
//! Field extraction and rewriting for a landing page document.
//!
//! The page is never parsed into a tree. Each catalog field is an
//! independent (marker, substitution) pair: extraction captures the value
//! span of the first marker occurrence, rewriting splices a new value into
//! that same span. Everything the markers do not cover is left untouched,
//! which is the whole point — a structural parser would reformat markup
//! this tool must preserve.
//!
//! The one array-valued field (`const APPS = [...]`) is delegated to
//! `lpedit-literal` for decoding and encoding.

pub mod extract;
pub mod fields;
mod markers;
pub mod rewrite;

pub use extract::{extract, Extraction};
pub use fields::{Field, FieldSet};
pub use rewrite::rewrite;

// Record types travel with the page API
pub use lpedit_literal::{AppRecord, LiteralError};
