//! Declaration descriptors emitted by the compiler.

use serde::Serialize;

use crate::Literal;

/// Primitive type keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    String,
    Number,
    Boolean,
}

impl Keyword {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::String => "string",
            Keyword::Number => "number",
            Keyword::Boolean => "boolean",
        }
    }
}

/// Shape assigned to a field or an alias target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TypeExpr {
    Keyword(Keyword),
    /// Reference to another declaration by name.
    Reference(String),
    Literal(Literal),
    Null,
    Array(Box<TypeExpr>),
    Union(Vec<TypeExpr>),
}

impl TypeExpr {
    pub fn reference(name: impl Into<String>) -> Self {
        TypeExpr::Reference(name.into())
    }

    pub fn array(element: TypeExpr) -> Self {
        TypeExpr::Array(Box::new(element))
    }

    /// Build a union, collapsing a single member to itself.
    pub fn union(mut members: Vec<TypeExpr>) -> Self {
        if members.len() == 1 {
            members.remove(0)
        } else {
            TypeExpr::Union(members)
        }
    }

    /// Extend this expression with a trailing `null` member.
    pub fn or_null(self) -> Self {
        match self {
            TypeExpr::Union(mut members) => {
                members.push(TypeExpr::Null);
                TypeExpr::Union(members)
            }
            other => TypeExpr::Union(vec![other, TypeExpr::Null]),
        }
    }

    pub fn is_union(&self) -> bool {
        matches!(self, TypeExpr::Union(_))
    }

    /// Returns true if `null` is one of the members.
    pub fn is_nullable(&self) -> bool {
        match self {
            TypeExpr::Null => true,
            TypeExpr::Union(members) => members.iter().any(|m| matches!(m, TypeExpr::Null)),
            _ => false,
        }
    }
}

/// A named, typed member of a [`Structure`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: TypeExpr,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            doc: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Named record type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Structure {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<String>,
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl Structure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            fields: Vec::new(),
            doc: None,
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Named synonym for another type expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alias {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<String>,
    pub target: TypeExpr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl Alias {
    pub fn new(name: impl Into<String>, target: TypeExpr) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            target,
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A single emitted output artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Declaration {
    Structure(Structure),
    Alias(Alias),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Structure(s) => &s.name,
            Declaration::Alias(a) => &a.name,
        }
    }

    pub fn type_params(&self) -> &[String] {
        match self {
            Declaration::Structure(s) => &s.type_params,
            Declaration::Alias(a) => &a.type_params,
        }
    }

    pub fn doc(&self) -> Option<&str> {
        match self {
            Declaration::Structure(s) => s.doc.as_deref(),
            Declaration::Alias(a) => a.doc.as_deref(),
        }
    }

    /// Key identifying declarations that collapse into one.
    ///
    /// The name, followed by the ordered type parameter names, joined by `|`.
    pub fn identity_key(&self) -> String {
        std::iter::once(self.name())
            .chain(self.type_params().iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Get the lowercase kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            Declaration::Structure(_) => "structure",
            Declaration::Alias(_) => "alias",
        }
    }

    /// Reference to this declaration, usable as a type expression.
    pub fn to_ref(&self) -> DeclarationRef {
        DeclarationRef::new(self.name())
    }
}

impl From<Structure> for Declaration {
    fn from(value: Structure) -> Self {
        Declaration::Structure(value)
    }
}

impl From<Alias> for Declaration {
    fn from(value: Alias) -> Self {
        Declaration::Alias(value)
    }
}

/// Handle to an emitted declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeclarationRef {
    pub name: String,
}

impl DeclarationRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn to_type_expr(&self) -> TypeExpr {
        TypeExpr::Reference(self.name.clone())
    }
}
