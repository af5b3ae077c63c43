//! Error and diagnostic types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal errors raised while turning SQL text into a table model
#[derive(Debug, Clone, PartialEq, Eq, Error, miette::Diagnostic)]
pub enum Error {
    /// The input is not valid SQL, or is not exactly one statement
    #[error("failed to parse SQL: {message}")]
    #[diagnostic(
        code(sqlstruct::parse_error),
        help("the input must contain a single MySQL CREATE TABLE statement")
    )]
    Parse { message: String },

    /// The statement parsed, but it does not create a table
    #[error("unsupported statement: {kind}")]
    #[diagnostic(
        code(sqlstruct::unsupported_statement),
        help("only CREATE TABLE statements can be turned into structs")
    )]
    UnsupportedStatement { kind: String },

    /// A CREATE TABLE without a column list (e.g. `CREATE TABLE t AS SELECT ...`)
    #[error("cannot get table specification for `{table}`")]
    #[diagnostic(
        code(sqlstruct::missing_table_spec),
        help("declare the columns explicitly inside CREATE TABLE (...)")
    )]
    MissingTableSpec { table: String },
}

impl Error {
    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

/// Non-fatal finding reported alongside a successful extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            message: message.into(),
            help: None,
        }
    }

    pub fn info(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Info,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Get the diagnostic code string (e.g., "W0001")
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

/// Types of diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// W0001: Index kind other than primary key / unique key
    UnrecognizedIndexKind,
    /// I0001: Column type with no target type mapping
    UnknownColumnType,
}

impl DiagnosticKind {
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::UnrecognizedIndexKind => "W0001",
            DiagnosticKind::UnknownColumnType => "I0001",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticKind::UnrecognizedIndexKind => "unrecognized-index-kind",
            DiagnosticKind::UnknownColumnType => "unknown-column-type",
        }
    }
}
