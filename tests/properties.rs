//! Property tests for Recipebook.
//!
//! Properties use randomized input generation to explore edge cases of the
//! repository contract: copy isolation, identity preservation and
//! all-or-nothing mutations.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/repository.rs"]
mod repository;
