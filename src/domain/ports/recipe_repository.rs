//! RecipeRepository port - abstraction for recipe storage
//!
//! The repository exclusively owns the stored representation of each recipe.
//! Callers always receive independent copies: mutating a returned `Recipe`
//! never changes what a later read observes.

use std::fmt;

use crate::domain::entities::Recipe;
use crate::domain::value_objects::RecipeId;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository operation that can fail on a missing id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryOperation {
    Update,
    Delete,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryOperation::Update => write!(f, "update"),
            RepositoryOperation::Delete => write!(f, "delete"),
        }
    }
}

/// Repository operation errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// No recipe with this id is stored
    #[error("cannot {operation} recipe '{id}': recipe not found")]
    NotFound {
        id: RecipeId,
        operation: RepositoryOperation,
    },

    /// `add_recipe` was given an id that is already stored
    #[error("recipe '{id}' already exists")]
    AlreadyExists { id: RecipeId },

    /// `add_recipe` was given a blank id
    #[error("recipe '{title}' has no id")]
    MissingId { title: String },

    /// A stored snapshot could not be written or read back
    #[error("recipe '{id}' snapshot is unreadable: {message}")]
    Snapshot { id: RecipeId, message: String },
}

impl RepositoryError {
    pub fn not_found(id: &RecipeId, operation: RepositoryOperation) -> Self {
        RepositoryError::NotFound {
            id: id.clone(),
            operation,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

/// Abstract recipe storage
///
/// Every method either fully applies its effect or fails without changing
/// storage.
pub trait RecipeRepository: Send + Sync {
    /// Store a new recipe and return the stored copy.
    ///
    /// Fails with `MissingId` for a blank id and `AlreadyExists` if the id
    /// is already stored.
    fn add_recipe(&self, recipe: Recipe) -> RepositoryResult<Recipe>;

    /// Look up a recipe. A missing id is `Ok(None)`, not an error.
    fn get_recipe(&self, id: &RecipeId) -> RepositoryResult<Option<Recipe>>;

    /// All stored recipes, in no particular order
    fn list_recipes(&self) -> RepositoryResult<Vec<Recipe>>;

    /// Replace the content of the stored recipe with `recipe.id()`.
    ///
    /// The stored id and `created_at` are kept; `updated_at` is set by the
    /// repository regardless of the value the caller supplied.
    fn update_recipe(&self, recipe: Recipe) -> RepositoryResult<Recipe>;

    /// Remove a recipe permanently
    fn delete_recipe(&self, id: &RecipeId) -> RepositoryResult<()>;
}
