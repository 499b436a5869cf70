mod commands;
mod config;
mod document;
mod error;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

/// Crates whose events follow the `-v` flags; everything else stays at `warn`.
const CRATES: &[&str] = &[
    "typeshape",
    "typeshape_codegen",
    "typeshape_codegen_typescript",
];

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // stderr only: stdout carries the generated document.
    let level = cli.verbose.tracing_level_filter();
    let allowlist = CRATES
        .iter()
        .map(|c| format!("{c}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{allowlist}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
