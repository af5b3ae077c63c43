//! Schema extractor - converts a parsed CREATE TABLE into a `Table`

use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::error::{Diagnostic, DiagnosticKind, Error};
use crate::parser::{parse_statement, CreateTableDef, IndexKind, ParsedStatement, TableSpec};
use crate::schema::{Column, Table};
use crate::types::GoType;

/// Result of a successful extraction
#[derive(Debug, Clone)]
pub struct Extraction {
    pub table: Table,
    /// Non-fatal findings (ignored indexes, unmapped column types)
    pub diagnostics: Vec<Diagnostic>,
}

/// Extractor for building a `Table` from one parsed statement
#[derive(Debug, Default)]
pub struct SchemaExtractor {
    diagnostics: Vec<Diagnostic>,
}

impl SchemaExtractor {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Parse SQL text and extract its table
    pub fn extract_sql(self, sql: &str) -> Result<Extraction, Error> {
        let statement = parse_statement(sql)?;
        self.extract(&statement)
    }

    /// Extract the table model from a parsed statement
    pub fn extract(mut self, statement: &ParsedStatement) -> Result<Extraction, Error> {
        let create = match statement {
            ParsedStatement::CreateTable(create) => create,
            ParsedStatement::Other { kind } => {
                return Err(Error::UnsupportedStatement { kind: kind.clone() });
            }
        };

        let table = self.process_create_table(create)?;

        Ok(Extraction {
            table,
            diagnostics: self.diagnostics,
        })
    }

    /// Process CREATE TABLE statement
    fn process_create_table(&mut self, create: &CreateTableDef) -> Result<Table, Error> {
        let Some(spec) = &create.spec else {
            return Err(Error::MissingTableSpec {
                table: create.name.clone(),
            });
        };

        let (primary_key, unique_keys) = self.collect_keys(&create.name, spec);
        let mut table = Table::new(&create.name);

        for col_spec in &spec.columns {
            let column_type = &col_spec.column_type;
            let column = Column {
                name: col_spec.name.clone(),
                sql_type: column_type.keyword.clone(),
                length: column_type.length.clone(),
                enum_values: column_type.enum_values.clone(),
                is_primary_key: primary_key == Some(col_spec.name.as_str()),
                is_unique: unique_keys.contains(col_spec.name.as_str()),
                auto_increment: col_spec.auto_increment,
                not_null: col_spec.not_null,
                default: col_spec.default.clone(),
            };

            if !GoType::from_sql_type(&column.sql_type).is_known() {
                self.diagnostics.push(
                    Diagnostic::info(
                        DiagnosticKind::UnknownColumnType,
                        format!(
                            "column '{}' has type '{}' with no Go mapping",
                            column.name, column.sql_type
                        ),
                    )
                    .with_help("the field is generated with type UNKNOWN_TYPE"),
                );
            }

            debug!(table = %table.name, column = %column.name, sql_type = %column.sql_type, "extracted column");
            table.columns.push(column);
        }

        Ok(table)
    }

    /// Scan the index list for the primary key column and unique key columns.
    ///
    /// Only the first key column of each index counts. With several primary
    /// key indexes the last one scanned wins.
    fn collect_keys<'s>(
        &mut self,
        table: &str,
        spec: &'s TableSpec,
    ) -> (Option<&'s str>, IndexSet<&'s str>) {
        let mut primary_key = None;
        let mut unique_keys = IndexSet::new();

        for index in &spec.indexes {
            match &index.kind {
                IndexKind::PrimaryKey | IndexKind::UniqueKey => {
                    let Some(first) = index.columns.first() else {
                        debug!(table, kind = %index.kind, "skipping index without key columns");
                        continue;
                    };
                    if index.kind == IndexKind::PrimaryKey {
                        primary_key = Some(first.as_str());
                    } else {
                        unique_keys.insert(first.as_str());
                    }
                }
                other => {
                    warn!(table, kind = %other, "unrecognized index kind");
                    self.diagnostics.push(
                        Diagnostic::warning(
                            DiagnosticKind::UnrecognizedIndexKind,
                            format!("unrecognized index kind '{}' on table '{}'", other, table),
                        )
                        .with_help("only PRIMARY KEY and UNIQUE KEY indexes mark columns"),
                    );
                }
            }
        }

        (primary_key, unique_keys)
    }
}
