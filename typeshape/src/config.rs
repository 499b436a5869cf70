//! `typeshape.toml` project configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use typeshape_codegen_typescript::GenerateOptions;

use crate::error::{Error, Result};

pub const CONFIG_FILE: &str = "typeshape.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub typescript: GenerateOptions,
}

impl Config {
    /// Parse a config file with a filename for error reporting.
    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e, content, filename))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Load `explicit` if given, else `./typeshape.toml` if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.is_file() {
                    debug!("no {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                default
            }
        };
        debug!(path = %path.display(), "loading config");
        Self::open(path)
    }
}
