//! TypeScript declaration renderer for typeshape.
//!
//! Turns the declarations produced by [`typeshape_codegen::compile`] into a
//! `.ts` document: one `interface` (or object `type`) per structure and one
//! `type` alias per array root.
//!
//! # Usage
//!
//! ```
//! use typeshape_codegen_typescript::{GenerateOptions, generate_types};
//! use typeshape_ir::Schema;
//!
//! let schema = Schema::object([
//!     Schema::string().key("email"),
//!     Schema::number().key("age").optional(),
//! ])
//! .named("Account");
//!
//! let result = generate_types(&schema, GenerateOptions::default()).unwrap();
//! assert_eq!(
//!     result.full_text,
//!     "export interface Account {\n    email: string;\n    age?: number;\n}"
//! );
//! ```

mod generator;
mod naming;
mod options;
mod renderer;
mod type_expr;

pub mod ast;

pub use generator::{GenerateResult, Generator, IndividualType, generate_types};
pub use naming::{is_identifier, property_name};
pub use options::{DeclarationStyle, GenerateOptions};
pub use renderer::TypeScriptRenderer;
pub use type_expr::render_type;
