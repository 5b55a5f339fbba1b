//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod recipe_id;
mod timestamp;

pub use recipe_id::RecipeId;
pub use timestamp::Timestamp;
