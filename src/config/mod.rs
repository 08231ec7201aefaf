//! Configuration for the pattern book
//!
//! Provides types, discovery and loading for `pbook.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
