//! Accumulator threaded through a single compilation.

use tracing::debug;
use typeshape_ir::{Declaration, DeclarationRef};

const ITEMS_SEGMENT: &str = "[]";

/// Context passed by `&mut` into every recursive compile call.
///
/// Carries the growing, emission-ordered declaration collection and the
/// schema path of the node being compiled (used in error messages).
/// Independent compilations must use independent contexts.
#[derive(Debug, Default)]
pub struct CompileContext {
    declarations: Vec<Declaration>,
    path: Vec<String>,
}

impl CompileContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration and return a reference to it.
    pub fn emit(&mut self, declaration: impl Into<Declaration>) -> DeclarationRef {
        let declaration = declaration.into();
        debug!(
            kind = declaration.kind(),
            name = declaration.name(),
            path = %self.path(),
            "emit declaration"
        );
        let reference = declaration.to_ref();
        self.declarations.push(declaration);
        reference
    }

    /// Declarations in emission order (dependents before dependees).
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn into_declarations(self) -> Vec<Declaration> {
        self.declarations
    }

    /// Descend into a named property (or the root).
    pub fn enter(&mut self, segment: impl Into<String>) {
        self.path.push(segment.into());
    }

    /// Descend into the items of an array.
    pub fn enter_items(&mut self) {
        self.path.push(ITEMS_SEGMENT.to_string());
    }

    pub fn leave(&mut self) {
        self.path.pop();
    }

    /// Render the current schema path, e.g. `UserList[].address.tags[]`.
    pub fn path(&self) -> String {
        let mut out = String::new();
        for segment in self.path.iter().filter(|s| !s.is_empty()) {
            if segment != ITEMS_SEGMENT && !out.is_empty() {
                out.push('.');
            }
            out.push_str(segment);
        }
        if out.is_empty() {
            out.push_str("<root>");
        }
        out
    }
}
