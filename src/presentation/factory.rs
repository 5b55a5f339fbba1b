//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.
//!
//! A `RecipeSession` owns one repository and the five use cases built over
//! it. UI code receives the session explicitly; there is no process-wide
//! repository. Dropping (or `close`-ing) the session discards its recipes.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::{CreateRecipe, DeleteRecipe, GetRecipe, ListRecipes, UpdateRecipe};
use crate::domain::ports::{RecipeRepository, RepositoryResult};
use crate::infrastructure::InMemoryRecipeRepository;

/// One logical user session over a single repository
pub struct RecipeSession {
    create: CreateRecipe,
    get: GetRecipe,
    list: ListRecipes,
    update: UpdateRecipe,
    delete: DeleteRecipe,
}

impl RecipeSession {
    /// Wire all use cases over `repository`
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self {
            create: CreateRecipe::new(repository.clone()),
            get: GetRecipe::new(repository.clone()),
            list: ListRecipes::new(repository.clone()),
            update: UpdateRecipe::new(repository.clone()),
            delete: DeleteRecipe::new(repository),
        }
    }

    /// Session backed by a fresh in-memory repository
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRecipeRepository::new()))
    }

    pub fn create(&self) -> &CreateRecipe {
        &self.create
    }

    pub fn get(&self) -> &GetRecipe {
        &self.get
    }

    pub fn list(&self) -> &ListRecipes {
        &self.list
    }

    pub fn update(&self) -> &UpdateRecipe {
        &self.update
    }

    pub fn delete(&self) -> &DeleteRecipe {
        &self.delete
    }

    /// Number of recipes currently stored
    pub fn recipe_count(&self) -> RepositoryResult<usize> {
        self.list.execute().map(|recipes| recipes.len())
    }

    /// End the session, returning how many recipes were discarded
    ///
    /// A storage error while counting is logged and reported as zero.
    pub fn close(self) -> usize {
        let discarded = match self.recipe_count() {
            Ok(count) => count,
            Err(err) => {
                warn!(error = %err, "could not count recipes while closing session");
                0
            }
        };
        info!(discarded, "recipe session closed");
        discarded
    }
}

/// Create a session with the default (in-memory) storage adapter
pub fn create_session() -> RecipeSession {
    info!("recipe session opened");
    RecipeSession::in_memory()
}
