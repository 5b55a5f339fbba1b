//! List Recipes Use Case

use std::sync::Arc;

use crate::domain::entities::Recipe;
use crate::domain::ports::{RecipeRepository, RepositoryResult};

pub struct ListRecipes {
    repository: Arc<dyn RecipeRepository>,
}

impl ListRecipes {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> RepositoryResult<Vec<Recipe>> {
        self.repository.list_recipes()
    }
}
