//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Does NOT contain business rules
//! - Lets callers depend on one named operation instead of the whole repository
//!
//! ## Use Cases
//!
//! - `CreateRecipe` - Store a new recipe
//! - `GetRecipe` - Look up one recipe by id
//! - `ListRecipes` - All stored recipes
//! - `UpdateRecipe` - Replace a recipe's content
//! - `DeleteRecipe` - Remove a recipe

pub mod recipes;

pub use recipes::{CreateRecipe, DeleteRecipe, GetRecipe, ListRecipes, UpdateRecipe};
