//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod recipe_repository;

pub use clock::Clock;
pub use recipe_repository::{
    RecipeRepository, RepositoryError, RepositoryOperation, RepositoryResult,
};
