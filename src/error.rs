//! Error types for Recipebook
//!
//! Layer-specific errors (`RepositoryError`, `FormError`) live next to the
//! code that raises them; `RecipeBookError` gathers them for callers that
//! need one type.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RepositoryError;
use crate::presentation::form::FormError;

/// Result type alias for Recipebook operations
pub type RecipeBookResult<T> = Result<T, RecipeBookError>;

/// Main error type for Recipebook operations
#[derive(Error, Debug)]
pub enum RecipeBookError {
    /// Storage-level failure (not found, duplicate id, bad snapshot)
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// User input rejected by form validation
    #[error(transparent)]
    Form(#[from] FormError),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The interactive shell needs a terminal on stdin
    #[error("interactive mode requires a terminal - run `recipebook demo` for a non-interactive walkthrough")]
    NotInteractive,
}

impl RecipeBookError {
    /// Errors the interactive UI reports and recovers from
    pub fn is_user_facing(&self) -> bool {
        match self {
            RecipeBookError::Repository(err) => {
                err.is_not_found() || matches!(err, RepositoryError::AlreadyExists { .. })
            }
            RecipeBookError::Form(_) => true,
            _ => false,
        }
    }
}
