//! sqlstruct CLI - generate ORM-tagged structs from CREATE TABLE statements

mod args;
mod config;
mod output;

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use sqlstruct_core::{parse_statement, SchemaExtractor, TagDialect};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::config::Config;
use crate::output::OutputFormatter;

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    let level = if args.quiet {
        tracing::Level::ERROR
    } else {
        match args.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    match run(args) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let [file] = args.files.as_slice() else {
        println!("{} <sql file>", env!("CARGO_BIN_NAME"));
        return Ok(false);
    };

    // Load configuration
    let config = if let Some(path) = &args.config {
        Config::from_file(path)?
    } else {
        Config::find_and_load()?.unwrap_or_default()
    };

    // Merge CLI args with config (CLI takes precedence)
    let config = config.merge_with_args(&args.tags, &args.format);

    let dialect: TagDialect = match &config.tags {
        Some(tags) => tags.parse().map_err(|e: String| miette::miette!(e))?,
        None => TagDialect::default(),
    };
    debug!(%dialect, format = ?config.output_format(), "resolved options");

    let content = fs::read_to_string(file)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot read {}", file.display()))?;

    if args.dump_ast {
        dump_ast(&content);
    }

    let statement = parse_statement(&content)?;

    let extraction = match SchemaExtractor::new().extract(&statement) {
        Ok(extraction) => extraction,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            return Ok(true);
        }
    };
    info!(
        table = %extraction.table.name,
        columns = extraction.table.columns.len(),
        "extracted table"
    );

    let formatter = OutputFormatter::new(config.output_format(), file.display().to_string());
    if !args.quiet {
        formatter.print_diagnostics(&extraction.diagnostics);
    }
    formatter.print_table(&extraction.table, dialect)?;

    Ok(false)
}

/// Parse and display the raw AST (for debugging)
fn dump_ast(content: &str) {
    use sqlparser::dialect::MySqlDialect;
    use sqlparser::parser::Parser;

    match Parser::parse_sql(&MySqlDialect {}, content) {
        Ok(statements) => {
            for (i, stmt) in statements.iter().enumerate() {
                eprintln!("Statement {}:", i + 1);
                eprintln!("{:#?}", stmt);
                eprintln!();
            }
        }
        Err(e) => eprintln!("Parse error: {}", e),
    }
}
