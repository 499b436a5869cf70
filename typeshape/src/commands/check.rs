use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typeshape_codegen::{Compilation, compile};

use super::{UnwrapOrExit, report};
use crate::document::SchemaDocument;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the JSON schema document
    pub schema: PathBuf,

    /// Root declaration name (defaults to the schema's name, then the file name)
    #[arg(short, long)]
    pub name: Option<String>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let compilation = self.compile().unwrap_or_exit();

        println!("✓ {} is valid\n", self.schema.display());

        let count = compilation.declarations.len();
        println!(
            "  {} declaration{}:",
            count,
            if count == 1 { "" } else { "s" }
        );
        for declaration in &compilation.declarations {
            println!("    {} ({})", declaration.name(), declaration.kind());
        }

        if compilation.dropped > 0 {
            println!(
                "\n  {} duplicate{} dropped",
                compilation.dropped,
                if compilation.dropped == 1 { "" } else { "s" }
            );
        }

        Ok(())
    }

    /// Load and compile the schema document.
    pub fn compile(&self) -> miette::Result<Compilation> {
        let schema = SchemaDocument::open(&self.schema)
            .map_err(report)?
            .into_root(self.name.as_deref());
        compile(&schema).map_err(miette::Report::new)
    }
}
