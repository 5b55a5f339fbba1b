//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod in_memory;

pub use in_memory::InMemoryRecipeRepository;
