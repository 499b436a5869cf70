mod check;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on diagnostics with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for miette::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(report) => {
                eprintln!("{:?}", report);
                std::process::exit(1);
            }
        }
    }
}

/// Convert a document or config error into a report.
pub(crate) fn report(error: Box<crate::error::Error>) -> miette::Report {
    miette::Report::new(*error)
}

#[derive(Parser)]
#[command(name = "typeshape")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from JSON schema documents")]
pub(crate) struct Cli {
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a schema document as TypeScript declarations
    Generate(GenerateCommand),

    /// Compile a schema document without rendering it
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
