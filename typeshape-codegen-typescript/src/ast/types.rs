//! TypeScript type alias and object type builders.

use typeshape_codegen::{CodeFragment, Renderable};

use crate::naming::property_name;

/// A field in a TypeScript interface or object type.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub optional: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            optional: false,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The member line, e.g. `bio?: string | null;`.
    pub(crate) fn signature(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}: {};", property_name(&self.name), optional, self.ty)
    }
}

/// Convert fields to code fragments, each preceded by its doc comment.
pub(crate) fn fields_to_fragments(fields: &[Field]) -> Vec<CodeFragment> {
    fields
        .iter()
        .flat_map(|field| {
            let mut fragments = Vec::new();
            if let Some(doc) = &field.doc {
                fragments.push(CodeFragment::jsdoc(doc.clone()));
            }
            fragments.push(CodeFragment::line(field.signature()));
            fragments
        })
        .collect()
}

/// Builder for TypeScript object types (`type Foo = { ... }`).
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    doc: Option<String>,
    fields: Vec<Field>,
    exported: bool,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            fields: Vec::new(),
            exported: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }

        fragments.push(CodeFragment::block(
            format!("{}type {} = {{", export, self.name),
            fields_to_fragments(&self.fields),
            Some("};".to_string()),
        ));

        fragments
    }
}

/// Builder for TypeScript type aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    ty: String,
    exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            ty: ty.into(),
            exported: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }

        fragments.push(CodeFragment::line(format!(
            "{}type {} = {};",
            export, self.name, self.ty
        )));

        fragments
    }
}
