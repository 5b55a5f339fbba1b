//! Recipebook - recipe manager built as ports and adapters
//!
//! A `Recipe` entity, a `RecipeRepository` port with an in-memory adapter,
//! and five single-operation use cases (create, get, list, update, delete).
//! The presentation layer wires them into a `RecipeSession` for the CLI.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{CreateRecipe, DeleteRecipe, GetRecipe, ListRecipes, UpdateRecipe};
pub use config::{Config, Verbosity};
pub use domain::entities::Recipe;
pub use domain::ports::{RecipeRepository, RepositoryError, RepositoryOperation};
pub use domain::value_objects::{RecipeId, Timestamp};
pub use error::{RecipeBookError, RecipeBookResult};
pub use infrastructure::InMemoryRecipeRepository;
pub use presentation::{FormError, RecipeForm, RecipeSession};
