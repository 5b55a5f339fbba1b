//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `repositories/` - Repository implementations (InMemory)
//! - `clock` - System clock used to stamp updates

pub mod clock;
pub mod repositories;

pub use clock::SystemClock;
pub use repositories::InMemoryRecipeRepository;
