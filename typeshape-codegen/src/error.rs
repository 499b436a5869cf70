use miette::Diagnostic;
use thiserror::Error;

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors raised while compiling a schema tree.
///
/// Every variant carries the schema path where the problem was detected,
/// e.g. `UserList[].address.tags[]`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("unsupported schema variant '{variant}' at '{path}'")]
    #[diagnostic(
        code(typeshape::unsupported_variant),
        help("supported variants are: object, array, boolean, number, string")
    )]
    UnsupportedSchemaVariant { variant: String, path: String },

    #[error("root schema must be an object or an array, found '{variant}'")]
    #[diagnostic(
        code(typeshape::invalid_root),
        help("wrap the {variant} in an object schema with a named property")
    )]
    InvalidRoot { variant: String },

    #[error("cannot derive a declaration name at '{path}'")]
    #[diagnostic(
        code(typeshape::missing_name),
        help("give the root schema a 'name' and every nested property a 'key'")
    )]
    MissingName { path: String },
}

impl Error {
    pub fn unsupported(variant: impl Into<String>, path: impl Into<String>) -> Self {
        Error::UnsupportedSchemaVariant {
            variant: variant.into(),
            path: path.into(),
        }
    }

    pub fn invalid_root(variant: impl Into<String>) -> Self {
        Error::InvalidRoot {
            variant: variant.into(),
        }
    }

    pub fn missing_name(path: impl Into<String>) -> Self {
        Error::MissingName { path: path.into() }
    }
}
