//! Command handlers for the `recipebook` binary

pub mod demo;
pub mod shell;
