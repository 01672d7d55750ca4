use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lectern-tools", about = "Tooling for lectern catalog files")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Write the JSON schema of the catalog files
    Schema(Schema),
    /// Load every catalog file of a directory and check ids and references
    Validate(Validate),
}

#[derive(Debug, Parser)]
pub(crate) struct Schema {
    #[arg(required = true)]
    pub(crate) output_folder: PathBuf,
}

#[derive(Debug, Parser)]
pub(crate) struct Validate {
    #[arg(required = true)]
    pub(crate) catalog_folder: PathBuf,
}
