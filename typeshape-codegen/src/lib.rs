//! Schema-to-declaration compiler for typeshape.
//!
//! This crate turns a [`Schema`](typeshape_ir::Schema) tree into an ordered
//! collection of named [`Declaration`](typeshape_ir::Declaration)s and
//! provides the language-agnostic pieces renderers are built from.
//!
//! # Module Organization
//!
//! - [`compile`] - Recursive compiler, compile context and deduplication
//! - [`builder`] - Text building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`renderer`] - The [`Renderer`] trait implemented per target language
//!
//! # Example
//!
//! ```
//! use typeshape_codegen::compile;
//! use typeshape_ir::Schema;
//!
//! let schema = Schema::array(Schema::object([
//!     Schema::string().key("id"),
//!     Schema::string().key("name"),
//! ]))
//! .named("UserList");
//!
//! let compilation = compile(&schema).unwrap();
//! assert_eq!(compilation.names(), vec!["UserList", "UserItem"]);
//! ```

pub mod builder;
pub mod compile;
pub mod renderer;

mod error;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use compile::{Compilation, CompileContext, compile, dedup};
pub use error::{Error, Result};
pub use renderer::Renderer;
