//! Core naming utilities for the typeshape compiler.
//!
//! Declarations for anonymous nested schemas get their names from context:
//! a property key is capitalized, and the element of an array is named after
//! the array with its plural singularized.

mod inflect;
mod utils;

// Pluralization
pub use inflect::{derive_plural_singular, is_plural, singularize};
// String utilities
pub use utils::{capitalize_first, to_pascal_case};
