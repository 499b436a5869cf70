//! Schema to TypeScript document pipeline.

use tracing::debug;
use typeshape_codegen::{Renderer, Result, compile};
use typeshape_ir::{Declaration, Schema};

use crate::{options::GenerateOptions, renderer::TypeScriptRenderer};

/// One rendered declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct IndividualType {
    pub name: String,
    pub declaration: Declaration,
    pub text: String,
}

/// Output of [`generate_types`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateResult {
    /// All declarations, root first, separated by a blank line.
    pub full_text: String,
    pub individual_types: Vec<IndividualType>,
    /// Declarations removed as duplicates.
    pub dropped: usize,
}

impl GenerateResult {
    pub fn names(&self) -> Vec<&str> {
        self.individual_types
            .iter()
            .map(|t| t.name.as_str())
            .collect()
    }
}

/// TypeScript generator bound to a single schema document.
pub struct Generator<'a> {
    schema: &'a Schema,
    renderer: TypeScriptRenderer,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema, options: GenerateOptions) -> Self {
        Self {
            schema,
            renderer: TypeScriptRenderer::new(options),
        }
    }

    /// Compile the schema and render every declaration.
    pub fn generate(&self) -> Result<GenerateResult> {
        let compilation = compile(self.schema)?;

        let body = self.renderer.render_document(&compilation.declarations);
        let full_text = match &self.renderer.options().header {
            Some(header) if body.is_empty() => header.clone(),
            Some(header) => format!("{header}\n\n{body}"),
            None => body,
        };

        let individual_types: Vec<IndividualType> = compilation
            .declarations
            .into_iter()
            .map(|declaration| IndividualType {
                name: declaration.name().to_string(),
                text: self.renderer.render_declaration(&declaration),
                declaration,
            })
            .collect();

        debug!(
            declarations = individual_types.len(),
            dropped = compilation.dropped,
            "rendered typescript document"
        );

        Ok(GenerateResult {
            full_text,
            individual_types,
            dropped: compilation.dropped,
        })
    }
}

/// Compile `schema` and render it as a TypeScript document.
pub fn generate_types(schema: &Schema, options: GenerateOptions) -> Result<GenerateResult> {
    Generator::new(schema, options).generate()
}

#[cfg(test)]
mod tests {
    use typeshape_codegen::Error;

    use super::*;

    fn user_list() -> Schema {
        Schema::array(Schema::object([
            Schema::string().key("id"),
            Schema::string().key("name"),
        ]))
        .named("UserList")
    }

    #[test]
    fn test_generate_user_list() {
        let result = generate_types(&user_list(), GenerateOptions::default()).unwrap();
        assert_eq!(result.names(), vec!["UserList", "UserItem"]);
        assert_eq!(
            result.full_text,
            "export type UserList = UserItem[];\n\nexport interface UserItem {\n    id: string;\n    name: string;\n}"
        );
        assert_eq!(result.individual_types[0].text, "export type UserList = UserItem[];");
    }

    #[test]
    fn test_header_precedes_declarations() {
        let options = GenerateOptions {
            header: Some("// @generated by typeshape".to_string()),
            ..Default::default()
        };
        let result = generate_types(&user_list(), options).unwrap();
        assert!(
            result
                .full_text
                .starts_with("// @generated by typeshape\n\nexport type UserList")
        );
    }

    #[test]
    fn test_full_text_joins_individual_texts() {
        let result = generate_types(&user_list(), GenerateOptions::default()).unwrap();
        let joined: Vec<&str> = result
            .individual_types
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(result.full_text, joined.join("\n\n"));
    }

    #[test]
    fn test_compile_errors_propagate() {
        let err = generate_types(&Schema::boolean().named("Flag"), GenerateOptions::default())
            .unwrap_err();
        assert_eq!(err, Error::invalid_root("boolean"));
    }
}
