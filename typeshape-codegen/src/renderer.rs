//! Language-agnostic rendering trait.

use typeshape_ir::Declaration;

/// Turns declaration descriptors into source text for one target language.
///
/// Implement this trait to add support for a new output language.
pub trait Renderer {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for rendered documents (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Render a single declaration, without a trailing newline.
    fn render_declaration(&self, declaration: &Declaration) -> String;

    /// Render declarations in the given order, separated by a blank line.
    fn render_document(&self, declarations: &[Declaration]) -> String {
        declarations
            .iter()
            .map(|d| self.render_declaration(d))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
