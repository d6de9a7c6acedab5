//! # lpedit Editor
//!
//! Core document editing engine for landing pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ page: document text → fields + records      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Load/save documents (atomic writes)      │
//! │  - Apply mutations with validation          │
//! │  - Render previews to a separate file       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Document text is source of truth**: fields are views decoded at
//!    load and substituted back only at save
//! 2. **Validate before mutating**: a rejected record never enters the list
//! 3. **All-or-nothing writes**: a failed save leaves the file untouched
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lpedit_editor::{Document, Mutation};
//! use lpedit_page::Field;
//!
//! let mut doc = Document::load("index.html".into())?;
//!
//! doc.apply(Mutation::SetField {
//!     field: Field::Tagline,
//!     value: "Play anywhere".to_string(),
//! })?;
//!
//! doc.save()?;
//! ```

mod document;
mod errors;
mod mutations;

pub use document::{Document, DocumentStorage};
pub use errors::EditorError;
pub use mutations::{Direction, Mutation, MutationError};

// Re-export common types for convenience
pub use lpedit_literal::AppRecord;
pub use lpedit_page::{Field, FieldSet};
