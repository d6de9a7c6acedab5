//! # Document Handle
//!
//! One landing page and its editing state.
//!
//! The document text loaded from disk stays the source of truth for the
//! whole session; fields and records are decoded from it once at load and
//! substituted back only when rendering for a save or preview. Nothing is
//! ever edited in place inside the text.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Extract → Mutate → Render → Save
//!   ↓       ↓         ↓        ↓       ↓
//! File  Fields+   Mutations  Text   File
//!       Records
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use lpedit_literal::AppRecord;
use lpedit_page::{extract, rewrite, FieldSet, LiteralError};
use tempfile::NamedTempFile;

use crate::{EditorError, Mutation};

/// Editable landing-page document
#[derive(Debug)]
pub struct Document {
    /// Path to the page file (nominal for memory-backed documents)
    pub path: PathBuf,

    /// Increments on each applied mutation
    pub version: u64,

    /// Set when the APPS literal could not be decoded at load time; the
    /// session continues with an empty record list, but the cause is kept
    /// for the shell to surface
    load_warning: Option<LiteralError>,

    storage: DocumentStorage,
}

/// Backing storage strategy
#[derive(Debug)]
pub enum DocumentStorage {
    /// In-memory only (for testing, temp docs)
    Memory {
        html: String,
        fields: FieldSet,
        records: Vec<AppRecord>,
    },

    /// File-backed (persists on save)
    File {
        html: String,
        fields: FieldSet,
        records: Vec<AppRecord>,
        dirty: bool,
    },
}

impl Document {
    /// Create a document from source text (memory-backed)
    pub fn from_source(path: PathBuf, html: String) -> Self {
        let extraction = extract(&html);
        Self {
            path,
            version: 0,
            load_warning: extraction.literal_error,
            storage: DocumentStorage::Memory {
                html,
                fields: extraction.fields,
                records: extraction.records,
            },
        }
    }

    /// Load a document from disk (file-backed)
    pub fn load(path: PathBuf) -> Result<Self, EditorError> {
        if !path.exists() {
            return Err(EditorError::DocumentNotFound(path));
        }

        let html = std::fs::read_to_string(&path)?;
        let extraction = extract(&html);

        Ok(Self {
            path,
            version: 0,
            load_warning: extraction.literal_error,
            storage: DocumentStorage::File {
                html,
                fields: extraction.fields,
                records: extraction.records,
                dirty: false,
            },
        })
    }

    pub fn fields(&self) -> &FieldSet {
        match &self.storage {
            DocumentStorage::Memory { fields, .. } => fields,
            DocumentStorage::File { fields, .. } => fields,
        }
    }

    pub fn records(&self) -> &[AppRecord] {
        match &self.storage {
            DocumentStorage::Memory { records, .. } => records,
            DocumentStorage::File { records, .. } => records,
        }
    }

    pub fn load_warning(&self) -> Option<&LiteralError> {
        self.load_warning.as_ref()
    }

    /// Apply a mutation; validation failures leave the state untouched
    pub fn apply(&mut self, mutation: Mutation) -> Result<u64, EditorError> {
        match &mut self.storage {
            DocumentStorage::Memory {
                fields, records, ..
            } => {
                mutation.apply(fields, records)?;
            }
            DocumentStorage::File {
                fields,
                records,
                dirty,
                ..
            } => {
                mutation.apply(fields, records)?;
                *dirty = true;
            }
        }

        self.version += 1;
        Ok(self.version)
    }

    /// Render the page with the current fields and records substituted in
    pub fn render(&self) -> String {
        match &self.storage {
            DocumentStorage::Memory {
                html,
                fields,
                records,
            } => rewrite(html, fields, records),
            DocumentStorage::File {
                html,
                fields,
                records,
                ..
            } => rewrite(html, fields, records),
        }
    }

    pub fn is_dirty(&self) -> bool {
        match &self.storage {
            DocumentStorage::File { dirty, .. } => *dirty,
            _ => false,
        }
    }

    /// Persist the rendered page over the document file.
    ///
    /// The write goes through a temp file in the destination directory and
    /// is renamed into place, so a failure leaves the original untouched.
    pub fn save(&mut self) -> Result<(), EditorError> {
        let rendered = self.render();
        match &mut self.storage {
            DocumentStorage::File {
                html, dirty, ..
            } => {
                write_atomic(&self.path, &rendered)?;
                *html = rendered;
                *dirty = false;
                Ok(())
            }
            _ => Err(EditorError::NotFileBacked),
        }
    }

    /// Render to a separate destination, leaving the document file and the
    /// dirty flag alone. Used for previews.
    pub fn save_as(&self, path: &Path) -> Result<(), EditorError> {
        write_atomic(path, &self.render())
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), EditorError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| EditorError::Io(e.error))?;
    Ok(())
}
