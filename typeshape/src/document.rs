//! Schema documents read from disk.

use std::path::{Path, PathBuf};

use tracing::debug;
use typeshape_core::to_pascal_case;
use typeshape_ir::Schema;

use crate::error::{Error, Result};

/// A parsed schema document and where it came from.
#[derive(Debug)]
pub struct SchemaDocument {
    path: PathBuf,
    schema: Schema,
}

impl SchemaDocument {
    /// Read and parse a JSON schema document.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let schema = Self::parse(&content, &filename)?;
        debug!(path = %filename, variant = schema.kind.as_str(), "loaded schema document");
        Ok(Self { path, schema })
    }

    /// Parse a schema document with a filename for error reporting.
    pub fn parse(content: &str, filename: &str) -> Result<Schema> {
        serde_json::from_str(content).map_err(|e| Error::schema(e, content, filename))
    }

    /// The root schema, named by `name` when given, else by the file stem
    /// when the document leaves the root unnamed.
    pub fn into_root(self, name: Option<&str>) -> Schema {
        let mut schema = self.schema;
        match name {
            Some(name) => schema.name = Some(name.to_string()),
            None if schema.name.is_none() => schema.name = stem_name(&self.path),
            None => {}
        }
        schema
    }
}

/// `user_list.schema.json` → `UserList`
fn stem_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.split('.').next().unwrap_or_default();
    let name = to_pascal_case(stem);
    if name.is_empty() { None } else { Some(name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_name() {
        assert_eq!(
            stem_name(Path::new("schemas/user_list.schema.json")),
            Some("UserList".to_string())
        );
        assert_eq!(
            stem_name(Path::new("order-payload.json")),
            Some("OrderPayload".to_string())
        );
        assert_eq!(stem_name(Path::new(".json")), None);
    }

    #[test]
    fn test_parse_unknown_variant() {
        let err = SchemaDocument::parse(r#"{ "type": "tuple" }"#, "tuple.json").unwrap_err();
        assert!(matches!(*err, Error::Schema { .. }));
    }

    #[test]
    fn test_explicit_name_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, r#"{ "type": "object", "name": "Account" }"#).unwrap();

        let document = SchemaDocument::open(&path).unwrap();
        assert_eq!(document.into_root(None).name.as_deref(), Some("Account"));

        let document = SchemaDocument::open(&path).unwrap();
        assert_eq!(
            document.into_root(Some("Member")).name.as_deref(),
            Some("Member")
        );
    }

    #[test]
    fn test_missing_file() {
        let err = SchemaDocument::open("does/not/exist.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
