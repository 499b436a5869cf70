use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use tracing::info;
use typeshape_codegen_typescript::{
    DeclarationStyle, GenerateOptions, GenerateResult, generate_types,
};

use super::{UnwrapOrExit, report};
use crate::{config::Config, document::SchemaDocument};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Style {
    /// `export interface Name { ... }`
    Interface,
    /// `export type Name = { ... };`
    Type,
}

impl From<Style> for DeclarationStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Interface => DeclarationStyle::Interface,
            Style::Type => DeclarationStyle::Type,
        }
    }
}

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the JSON schema document
    pub schema: PathBuf,

    /// Path to typeshape.toml (defaults to ./typeshape.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Root declaration name (defaults to the schema's name, then the file name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Spaces per indent level
    #[arg(long)]
    pub indent: Option<u8>,

    /// Indent with tabs instead of spaces
    #[arg(long, conflicts_with = "indent")]
    pub tabs: bool,

    /// Declaration style for object types
    #[arg(long, value_enum)]
    pub style: Option<Style>,

    /// Omit the `export` keyword
    #[arg(long)]
    pub no_export: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let result = self.generate().unwrap_or_exit();

        match &self.output {
            Some(path) => {
                std::fs::write(path, format!("{}\n", result.full_text))
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), "wrote typescript document");
                println!(
                    "✓ {} declaration{} written to {}",
                    result.individual_types.len(),
                    if result.individual_types.len() == 1 { "" } else { "s" },
                    path.display()
                );
            }
            None => println!("{}", result.full_text),
        }

        Ok(())
    }

    /// Config file options with command-line overrides applied.
    pub fn options(&self) -> miette::Result<GenerateOptions> {
        let mut options = Config::load(self.config.as_deref())
            .map_err(report)?
            .typescript;

        if let Some(indent) = self.indent {
            options.indent = indent;
            options.use_tabs = false;
        }
        if self.tabs {
            options.use_tabs = true;
        }
        if let Some(style) = self.style {
            options.declaration_style = style.into();
        }
        if self.no_export {
            options.export = false;
        }

        Ok(options)
    }

    /// Load, compile and render the schema document.
    pub fn generate(&self) -> miette::Result<GenerateResult> {
        let options = self.options()?;
        let schema = SchemaDocument::open(&self.schema)
            .map_err(report)?
            .into_root(self.name.as_deref());
        generate_types(&schema, options).map_err(miette::Report::new)
    }
}
