//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Validating user input before it reaches a use case
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - `RecipeSession`: one repository plus its use cases
//! - `form` - Required-field checks and ingredient parsing
//! - `view` - Recipe cards, lists and JSON events

pub mod cli;
pub mod factory;
pub mod form;
pub mod view;

pub use cli::{Cli, Commands};
pub use factory::{create_session, RecipeSession};
pub use form::{parse_ingredients, FormError, FormField, RecipeForm};
