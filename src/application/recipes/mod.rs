//! Recipe Use Cases
//!
//! One use case per repository capability. Each forwards to the repository
//! and returns its result unchanged: no validation, no error translation.
//! Input validation belongs to the presentation layer (`RecipeForm`).

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::CreateRecipe;
pub use delete::DeleteRecipe;
pub use get::GetRecipe;
pub use list::ListRecipes;
pub use update::UpdateRecipe;
