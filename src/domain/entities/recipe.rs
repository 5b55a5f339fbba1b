//! Recipe entity - the single domain entity of the recipe book
//!
//! A recipe has an identity (`id`) and a lifecycle tracked by two timestamps.
//! Identity and creation time are fixed at construction; only the editable
//! content (title, description, ingredients) can change afterwards.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{RecipeId, Timestamp};

/// A recipe as stored and returned by a `RecipeRepository`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    id: RecipeId,
    title: String,
    description: String,
    /// Display order is significant
    ingredients: Vec<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Recipe {
    /// Create a new recipe with a generated id, stamped with the current time
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        ingredients: Vec<String>,
    ) -> Self {
        Self::with_id(RecipeId::generate(), title, description, ingredients)
    }

    /// Create a new recipe with a caller-supplied id
    pub fn with_id(
        id: RecipeId,
        title: impl Into<String>,
        description: impl Into<String>,
        ingredients: Vec<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            title: title.into(),
            description: description.into(),
            ingredients,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder: override both timestamps (used by adapters and fixtures)
    pub fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }

    /// Builder: set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set the ingredients
    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn id(&self) -> &RecipeId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// RFC 3339 form of `created_at`
    pub fn created_at_string(&self) -> String {
        self.created_at.to_rfc3339()
    }

    /// RFC 3339 form of `updated_at`
    pub fn updated_at_string(&self) -> String {
        self.updated_at.to_rfc3339()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_ingredients(&mut self, ingredients: Vec<String>) {
        self.ingredients = ingredients;
    }

    /// Take the editable content of `edited`, keeping this recipe's identity
    /// and creation time, and stamp the result with `at`.
    ///
    /// `updated_at` never moves backwards: if `at` is earlier than the
    /// current `updated_at`, the current value is kept.
    pub fn revised(&self, edited: Recipe, at: Timestamp) -> Recipe {
        Recipe {
            id: self.id.clone(),
            title: edited.title,
            description: edited.description,
            ingredients: edited.ingredients,
            created_at: self.created_at,
            updated_at: at.not_before(self.updated_at),
        }
    }
}
