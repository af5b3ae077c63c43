//! Output formatting

use miette::{IntoDiagnostic, Result};
use sqlstruct_core::{Diagnostic, Severity, StructRenderer, Table, TagDialect};

use crate::args::OutputFormat;

/// Output formatter for generated code and diagnostics
pub struct OutputFormatter {
    format: OutputFormat,
    file_name: String,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, file_name: String) -> Self {
        Self { format, file_name }
    }

    /// Print the extracted table in the configured format
    pub fn print_table(&self, table: &Table, dialect: TagDialect) -> Result<()> {
        print!("{}", self.format_table(table, dialect)?);
        Ok(())
    }

    fn format_table(&self, table: &Table, dialect: TagDialect) -> Result<String> {
        match self.format {
            OutputFormat::Go => Ok(StructRenderer::new(dialect).render(table)),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(table).into_diagnostic()?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    /// Print diagnostics to stderr
    pub fn print_diagnostics(&self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            eprintln!("{}", self.format_diagnostic(diag));
        }
    }

    fn format_diagnostic(&self, diag: &Diagnostic) -> String {
        let severity_str = match diag.severity {
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        let mut text = format!(
            "{}[{}]: {}\n  --> {}",
            severity_str,
            diag.code(),
            diag.message,
            self.file_name
        );
        if let Some(help) = &diag.help {
            text.push_str(&format!("\n   = help: {}", help));
        }
        text
    }
}
