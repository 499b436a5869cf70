//! [`Renderer`] implementation for TypeScript declaration files.

use typeshape_codegen::{CodeBuilder, Renderable, Renderer};
use typeshape_ir::{Alias, Declaration, Structure};

use crate::{
    ast::{Field, Interface, ObjectType, TypeAlias},
    naming::with_type_params,
    options::{DeclarationStyle, GenerateOptions},
    type_expr::render_type,
};

/// Renders declarations as TypeScript source text.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptRenderer {
    options: GenerateOptions,
}

impl TypeScriptRenderer {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    fn fields(structure: &Structure) -> Vec<Field> {
        structure
            .fields
            .iter()
            .map(|field| {
                let mut ts = Field::new(&field.name, render_type(&field.ty));
                if field.optional {
                    ts = ts.optional();
                }
                if let Some(doc) = &field.doc {
                    ts = ts.doc(doc);
                }
                ts
            })
            .collect()
    }

    fn render_structure(&self, structure: &Structure) -> String {
        let name = with_type_params(&structure.name, &structure.type_params);
        match self.options.declaration_style {
            DeclarationStyle::Interface => {
                let mut node = Self::fields(structure)
                    .into_iter()
                    .fold(Interface::new(name), Interface::field);
                if let Some(doc) = &structure.doc {
                    node = node.doc(doc);
                }
                if !self.options.export {
                    node = node.private();
                }
                self.build(&node)
            }
            DeclarationStyle::Type => {
                let mut node = Self::fields(structure)
                    .into_iter()
                    .fold(ObjectType::new(name), ObjectType::field);
                if let Some(doc) = &structure.doc {
                    node = node.doc(doc);
                }
                if !self.options.export {
                    node = node.private();
                }
                self.build(&node)
            }
        }
    }

    fn render_alias(&self, alias: &Alias) -> String {
        let name = with_type_params(&alias.name, &alias.type_params);
        let mut node = TypeAlias::new(name, render_type(&alias.target));
        if let Some(doc) = &alias.doc {
            node = node.doc(doc);
        }
        if !self.options.export {
            node = node.private();
        }
        self.build(&node)
    }

    fn build(&self, node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::new(self.options.indent_style());
        builder.emit(node);
        let mut text = builder.build();
        text.truncate(text.trim_end_matches('\n').len());
        text
    }
}

impl Renderer for TypeScriptRenderer {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn render_declaration(&self, declaration: &Declaration) -> String {
        match declaration {
            Declaration::Structure(structure) => self.render_structure(structure),
            Declaration::Alias(alias) => self.render_alias(alias),
        }
    }
}
