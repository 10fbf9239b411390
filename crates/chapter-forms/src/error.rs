// File: src/error.rs
// Purpose: Errors raised by the input layer of the form controller

use thiserror::Error;

use crate::path::{FieldPath, InputKind, PathError};

/// Rejected edits to the draft
///
/// Validation failures are never reported here; they are collected as
/// [`crate::FieldErrors`] on submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("field `{path}` takes {expected} input")]
    WrongInput { path: FieldPath, expected: InputKind },

    #[error("no founding member at index {index} (roster has {len})")]
    NoSuchMember { index: usize, len: usize },

    #[error("`{value}` is not an option for `{path}`")]
    NotAnOption { path: FieldPath, value: String },

    #[error("founding members are added and removed, not set")]
    RosterNotSettable,
}
