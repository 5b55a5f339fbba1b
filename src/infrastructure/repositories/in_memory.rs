//! In-Memory Recipe Repository
//!
//! Reference adapter for `RecipeRepository`. Recipes are kept as JSON
//! snapshots keyed by id, so every read and write crosses a
//! serialize/deserialize boundary and no caller ever holds a reference into
//! the stored state.
//!
//! State lives only as long as the repository value.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::domain::entities::Recipe;
use crate::domain::ports::{
    Clock, RecipeRepository, RepositoryError, RepositoryOperation, RepositoryResult,
};
use crate::domain::value_objects::RecipeId;
use crate::infrastructure::clock::SystemClock;

pub struct InMemoryRecipeRepository {
    table: Mutex<HashMap<String, String>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::new()))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Number of stored recipes
    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    // Each mutation is a single map operation, so a panic elsewhere cannot
    // leave a half-written entry behind; recovering the guard is safe.
    fn table(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryRecipeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryRecipeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRecipeRepository")
            .field("recipes", &self.len())
            .finish()
    }
}

fn to_snapshot(recipe: &Recipe) -> RepositoryResult<String> {
    serde_json::to_string(recipe).map_err(|e| RepositoryError::Snapshot {
        id: recipe.id().clone(),
        message: e.to_string(),
    })
}

fn from_snapshot(id: &str, snapshot: &str) -> RepositoryResult<Recipe> {
    serde_json::from_str(snapshot).map_err(|e| RepositoryError::Snapshot {
        id: RecipeId::new(id),
        message: e.to_string(),
    })
}

impl RecipeRepository for InMemoryRecipeRepository {
    fn add_recipe(&self, recipe: Recipe) -> RepositoryResult<Recipe> {
        if recipe.id().as_str().trim().is_empty() {
            warn!(title = recipe.title(), "rejected recipe without an id");
            return Err(RepositoryError::MissingId {
                title: recipe.title().to_string(),
            });
        }

        let mut table = self.table();
        if table.contains_key(recipe.id().as_str()) {
            warn!(id = %recipe.id(), "rejected recipe with duplicate id");
            return Err(RepositoryError::AlreadyExists {
                id: recipe.id().clone(),
            });
        }

        let snapshot = to_snapshot(&recipe)?;
        let stored = from_snapshot(recipe.id().as_str(), &snapshot)?;
        table.insert(recipe.id().as_str().to_string(), snapshot);

        debug!(id = %stored.id(), title = stored.title(), "added recipe");
        Ok(stored)
    }

    fn get_recipe(&self, id: &RecipeId) -> RepositoryResult<Option<Recipe>> {
        let table = self.table();
        table
            .get(id.as_str())
            .map(|snapshot| from_snapshot(id.as_str(), snapshot))
            .transpose()
    }

    fn list_recipes(&self) -> RepositoryResult<Vec<Recipe>> {
        let table = self.table();
        table
            .iter()
            .map(|(id, snapshot)| from_snapshot(id, snapshot))
            .collect()
    }

    fn update_recipe(&self, recipe: Recipe) -> RepositoryResult<Recipe> {
        let mut table = self.table();
        let Some(current) = table.get(recipe.id().as_str()) else {
            warn!(id = %recipe.id(), "update of unknown recipe");
            return Err(RepositoryError::not_found(
                recipe.id(),
                RepositoryOperation::Update,
            ));
        };

        let current = from_snapshot(recipe.id().as_str(), current)?;
        let revised = current.revised(recipe, self.clock.now());

        let snapshot = to_snapshot(&revised)?;
        let stored = from_snapshot(revised.id().as_str(), &snapshot)?;
        table.insert(revised.id().as_str().to_string(), snapshot);

        debug!(id = %stored.id(), updated_at = %stored.updated_at(), "updated recipe");
        Ok(stored)
    }

    fn delete_recipe(&self, id: &RecipeId) -> RepositoryResult<()> {
        let mut table = self.table();
        if table.remove(id.as_str()).is_none() {
            warn!(id = %id, "delete of unknown recipe");
            return Err(RepositoryError::not_found(id, RepositoryOperation::Delete));
        }

        debug!(id = %id, "deleted recipe");
        Ok(())
    }
}
