//! # Document Mutations
//!
//! High-level semantic operations on a landing-page document.
//!
//! Every mutation validates before it touches any state: a record that
//! fails validation never enters the list, and an out-of-range index
//! changes nothing. Record order is meaningful (it is the page's display
//! priority), so reordering is a first-class operation rather than a
//! remove-and-reinsert.

use lpedit_literal::AppRecord;
use lpedit_page::{Field, FieldSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic mutations the editing shell can apply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Set one catalog field to a new value
    SetField { field: Field, value: String },

    /// Add a record at the end of the list
    AppendRecord { record: AppRecord },

    /// Replace the record at an index
    ReplaceRecord { index: usize, record: AppRecord },

    /// Remove the record at an index
    RemoveRecord { index: usize },

    /// Swap a record with its neighbor
    MoveRecord { index: usize, direction: Direction },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("record name is required")]
    EmptyName,

    #[error("record {field} contains an unsupported character (double quote, backslash, or newline)")]
    UnsupportedCharacters { field: &'static str },

    #[error("record index {index} out of bounds (list has {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("record {index} is already at the edge of the list")]
    AlreadyAtEdge { index: usize },
}

impl Mutation {
    /// Apply to the document state, validating first
    pub fn apply(
        &self,
        fields: &mut FieldSet,
        records: &mut Vec<AppRecord>,
    ) -> Result<(), MutationError> {
        self.validate(records)?;

        match self {
            Mutation::SetField { field, value } => {
                fields.set(*field, value.clone());
            }

            Mutation::AppendRecord { record } => {
                records.push(normalize_record(record));
            }

            Mutation::ReplaceRecord { index, record } => {
                records[*index] = normalize_record(record);
            }

            Mutation::RemoveRecord { index } => {
                records.remove(*index);
            }

            Mutation::MoveRecord { index, direction } => {
                let other = match direction {
                    Direction::Up => index - 1,
                    Direction::Down => index + 1,
                };
                records.swap(*index, other);
            }
        }

        Ok(())
    }

    /// Validate without applying
    pub fn validate(&self, records: &[AppRecord]) -> Result<(), MutationError> {
        match self {
            Mutation::SetField { .. } => Ok(()),

            Mutation::AppendRecord { record } => validate_record(record),

            Mutation::ReplaceRecord { index, record } => {
                check_index(*index, records.len())?;
                validate_record(record)
            }

            Mutation::RemoveRecord { index } => check_index(*index, records.len()),

            Mutation::MoveRecord { index, direction } => {
                check_index(*index, records.len())?;
                let at_edge = match direction {
                    Direction::Up => *index == 0,
                    Direction::Down => *index + 1 == records.len(),
                };
                if at_edge {
                    Err(MutationError::AlreadyAtEdge { index: *index })
                } else {
                    Ok(())
                }
            }
        }
    }
}

fn check_index(index: usize, len: usize) -> Result<(), MutationError> {
    if index < len {
        Ok(())
    } else {
        Err(MutationError::IndexOutOfBounds { index, len })
    }
}

/// Required-field and unsupported-character checks.
///
/// Double quotes, backslashes, and newlines would corrupt the regenerated
/// literal (the encoder performs no escaping), so they are rejected here
/// instead of silently breaking the page.
fn validate_record(record: &AppRecord) -> Result<(), MutationError> {
    if record.name.trim().is_empty() {
        return Err(MutationError::EmptyName);
    }

    let string_fields: [(&'static str, &str); 3] = [
        ("name", &record.name),
        ("icon", &record.icon),
        ("locker_id", &record.locker_id),
    ];
    for (field, value) in string_fields {
        if has_unsupported_characters(value) {
            return Err(MutationError::UnsupportedCharacters { field });
        }
    }
    for platform in &record.platforms {
        if has_unsupported_characters(platform) {
            return Err(MutationError::UnsupportedCharacters { field: "platforms" });
        }
    }

    Ok(())
}

fn has_unsupported_characters(value: &str) -> bool {
    value.contains('"') || value.contains('\\') || value.contains('\n')
}

/// Platform identifiers are stored lower-cased
fn normalize_record(record: &AppRecord) -> AppRecord {
    let mut record = record.clone();
    record.platforms = record
        .platforms
        .iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect();
    record
}
