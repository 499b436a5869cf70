//! Rendering options for TypeScript output.

use serde::Deserialize;
use typeshape_codegen::Indent;

/// How object declarations are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationStyle {
    /// `export interface Name { ... }`
    #[default]
    Interface,
    /// `export type Name = { ... };`
    Type,
}

/// Options controlling the rendered TypeScript document.
///
/// Deserialized from the `[typescript]` table of `typeshape.toml`; every key
/// is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateOptions {
    /// Spaces per indent level.
    pub indent: u8,
    /// Indent with tabs; `indent` is ignored when set.
    pub use_tabs: bool,
    /// Prefix every declaration with `export`.
    pub export: bool,
    pub declaration_style: DeclarationStyle,
    /// Comment line placed at the top of the document, e.g. `// @generated`.
    pub header: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            use_tabs: false,
            export: true,
            declaration_style: DeclarationStyle::Interface,
            header: None,
        }
    }
}

impl GenerateOptions {
    pub fn indent_style(&self) -> Indent {
        if self.use_tabs {
            Indent::Tab
        } else {
            Indent::Spaces(self.indent)
        }
    }
}
