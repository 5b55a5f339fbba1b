//! Create Recipe Use Case

use std::sync::Arc;

use crate::domain::entities::Recipe;
use crate::domain::ports::{RecipeRepository, RepositoryResult};

pub struct CreateRecipe {
    repository: Arc<dyn RecipeRepository>,
}

impl CreateRecipe {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    /// Store a new recipe and return the stored copy
    pub fn execute(&self, recipe: Recipe) -> RepositoryResult<Recipe> {
        self.repository.add_recipe(recipe)
    }
}
