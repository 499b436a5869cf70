//! Intermediate representation types for the typeshape compiler.
//!
//! This crate holds the two data models every other crate agrees on: the
//! input [`Schema`] tree and the [`Declaration`] descriptors the compiler
//! emits for it.
//!
//! # Architecture
//!
//! ```text
//! Schema (input) → typeshape-codegen (compile + dedup) → Declaration[] → renderer
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no TypeScript-specific concerns)
//! - Read-only once built (the compiler never mutates a schema tree)
//! - Plain data (serde derives, no behavior beyond small accessors)

mod decl;
mod schema;

pub use decl::{Alias, Declaration, DeclarationRef, Field, Keyword, Structure, TypeExpr};
pub use schema::{Literal, Schema, SchemaKind};
