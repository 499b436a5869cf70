//! Input schema model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A literal value allowed by an `enum` constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Number(serde_json::Number),
    String(String),
}

impl Literal {
    /// Get the lowercase kind name, matching the schema variant it belongs to.
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Number(_) => "number",
            Literal::String(_) => "string",
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Number(value.into())
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Number(value.into())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => {
                let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
                f.write_str(&quoted)
            }
        }
    }
}

/// Variant-specific part of a [`Schema`], tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaKind {
    Object {
        #[serde(default)]
        properties: Vec<Schema>,
    },
    Array {
        items: Box<Schema>,
    },
    Boolean,
    Number {
        #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
        values: Option<Vec<Literal>>,
    },
    String {
        #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
        values: Option<Vec<Literal>>,
    },
}

impl SchemaKind {
    /// Get the lowercase variant name as it appears in the `type` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Object { .. } => "object",
            SchemaKind::Array { .. } => "array",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Number { .. } => "number",
            SchemaKind::String { .. } => "string",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Description of a JSON-shaped value.
///
/// Root schemas carry an explicit `name`; nested schemas carry the `key`
/// of the property they occupy in their parent object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(flatten)]
    pub kind: SchemaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
    /// Carried through untouched; the compiler never reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl Schema {
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            key: None,
            name: None,
            description: None,
            nullable: false,
            optional: false,
            default: None,
        }
    }

    pub fn object(properties: impl IntoIterator<Item = Schema>) -> Self {
        Self::new(SchemaKind::Object {
            properties: properties.into_iter().collect(),
        })
    }

    pub fn array(items: Schema) -> Self {
        Self::new(SchemaKind::Array {
            items: Box::new(items),
        })
    }

    pub fn boolean() -> Self {
        Self::new(SchemaKind::Boolean)
    }

    pub fn number() -> Self {
        Self::new(SchemaKind::Number { values: None })
    }

    pub fn string() -> Self {
        Self::new(SchemaKind::String { values: None })
    }

    /// Set the property key this schema occupies in its parent.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the explicit declaration name (root schemas).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Restrict a `number` or `string` schema to a closed set of literals.
    ///
    /// Has no effect on other variants.
    pub fn with_enum<L: Into<Literal>>(mut self, values: impl IntoIterator<Item = L>) -> Self {
        let literals: Vec<Literal> = values.into_iter().map(Into::into).collect();
        match &mut self.kind {
            SchemaKind::Number { values } | SchemaKind::String { values } => {
                *values = Some(literals);
            }
            _ => {}
        }
        self
    }

    /// The `enum` literals, if this is a constrained `number` or `string`.
    pub fn enum_values(&self) -> Option<&[Literal]> {
        match &self.kind {
            SchemaKind::Number { values } | SchemaKind::String { values } => values.as_deref(),
            _ => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, SchemaKind::Object { .. })
    }
}
