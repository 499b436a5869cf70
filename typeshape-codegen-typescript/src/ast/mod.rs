//! TypeScript AST builders for declarations.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod interface;
mod types;

pub use interface::Interface;
pub use types::{Field, ObjectType, TypeAlias};
