//! Core utilities and types for dtogen.
//!
//! This crate provides fundamental helpers used across the dtogen
//! ecosystem: identifier case conversion and artifact writing.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult};
// String utilities
pub use utils::{pluralize, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case, words};
