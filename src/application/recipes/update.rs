//! Update Recipe Use Case

use std::sync::Arc;

use crate::domain::entities::Recipe;
use crate::domain::ports::{RecipeRepository, RepositoryResult};

pub struct UpdateRecipe {
    repository: Arc<dyn RecipeRepository>,
}

impl UpdateRecipe {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    /// Replace the stored recipe with the same id.
    ///
    /// Fails with `RepositoryError::NotFound` if no such recipe exists.
    pub fn execute(&self, recipe: Recipe) -> RepositoryResult<Recipe> {
        self.repository.update_recipe(recipe)
    }
}
