//! Get Recipe Use Case

use std::sync::Arc;

use crate::domain::entities::Recipe;
use crate::domain::ports::{RecipeRepository, RepositoryResult};
use crate::domain::value_objects::RecipeId;

pub struct GetRecipe {
    repository: Arc<dyn RecipeRepository>,
}

impl GetRecipe {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    /// Look up a recipe; `Ok(None)` when the id is unknown
    pub fn execute(&self, id: &RecipeId) -> RepositoryResult<Option<Recipe>> {
        self.repository.get_recipe(id)
    }
}
