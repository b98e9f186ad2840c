//! Core types and utilities for the gobridge generator.
//!
//! This crate provides the declaration model passed from the source
//! extractor to the bridge builders, plus the small helpers both sides share.

mod file;
mod model;
mod type_mapper;
mod utils;

// File operations
pub use file::{append_synced, create_file};
// Declaration model
pub use model::{Callable, Declaration, Parameter};
// Type mapping
pub use type_mapper::{JavaTypeMapper, TypeMapper};
// String utilities
pub use utils::{to_lower_title_case, to_title_case};
