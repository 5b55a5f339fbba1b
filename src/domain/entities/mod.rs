//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Recipe` - A recipe with title, description and ordered ingredients

mod recipe;

pub use recipe::Recipe;
