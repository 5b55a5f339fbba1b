//! Delete Recipe Use Case

use std::sync::Arc;

use crate::domain::ports::{RecipeRepository, RepositoryResult};
use crate::domain::value_objects::RecipeId;

pub struct DeleteRecipe {
    repository: Arc<dyn RecipeRepository>,
}

impl DeleteRecipe {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    /// Remove a recipe permanently.
    ///
    /// Fails with `RepositoryError::NotFound` if no such recipe exists.
    pub fn execute(&self, id: &RecipeId) -> RepositoryResult<()> {
        self.repository.delete_recipe(id)
    }
}
