//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "sqlstruct")]
#[command(
    author,
    version,
    about = "Generate ORM-tagged Go structs from a CREATE TABLE statement"
)]
pub struct Args {
    /// SQL file containing a single CREATE TABLE statement
    pub files: Vec<PathBuf>,

    /// Tag dialect (gorm or xorm)
    #[arg(short, long, value_name = "DIALECT")]
    pub tags: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file (defaults to sqlstruct.toml in the current or a parent directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the parsed SQL AST to stderr (for debugging)
    #[arg(long)]
    pub dump_ast: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Generated Go struct
    #[default]
    Go,
    /// Extracted table model as JSON
    Json,
}
