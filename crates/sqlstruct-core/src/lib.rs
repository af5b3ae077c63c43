//! sqlstruct-core: CREATE TABLE to ORM-tagged struct generation
//!
//! This library parses a single MySQL `CREATE TABLE` statement, extracts a
//! normalized table model from it and renders that model as a Go struct
//! carrying `gorm` or `xorm` field tags.

pub mod dialect;
pub mod error;
pub mod parser;
pub mod render;
pub mod schema;
pub mod types;

pub use dialect::TagDialect;
pub use error::{Diagnostic, DiagnosticKind, Error, Severity};
pub use parser::{parse_statement, ParsedStatement};
pub use render::{render, render_bare, render_type_prefixed, StructRenderer};
pub use schema::{Column, Extraction, SchemaExtractor, Table};
pub use types::{ColumnType, GoType};
