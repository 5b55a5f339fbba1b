//! Domain Layer
//!
//! Pure business types without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Recipe)
//! - `value_objects/` - Immutable value types (RecipeId, Timestamp)
//! - `ports/` - Interface definitions for infrastructure (RecipeRepository, Clock)

pub mod entities;
pub mod ports;
pub mod value_objects;
