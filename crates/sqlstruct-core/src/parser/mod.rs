//! Statement parsing - turns raw SQL into a `ParsedStatement`
//!
//! The grammar itself comes from `sqlparser` with the MySQL dialect; this
//! module only narrows its AST down to what table extraction consumes.

use sqlparser::ast::{ColumnOption, Expr, Statement, TableConstraint, Value};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;

use crate::error::Error;
use crate::types::ColumnType;

/// A parsed statement, reduced to the cases table extraction distinguishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedStatement {
    CreateTable(CreateTableDef),
    /// Any statement that does not create a table
    Other { kind: String },
}

/// CREATE TABLE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableDef {
    pub name: String,
    /// `None` when the statement has no column list
    pub spec: Option<TableSpec>,
}

/// Column and index clauses of a CREATE TABLE, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSpec {
    pub columns: Vec<ColumnSpec>,
    pub indexes: Vec<IndexSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub column_type: ColumnType,
    pub default: Option<String>,
    pub auto_increment: bool,
    pub not_null: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub kind: IndexKind,
    /// Key column names, in key order
    pub columns: Vec<String>,
}

/// Index clause kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexKind {
    PrimaryKey,
    UniqueKey,
    Key,
    Fulltext,
    Spatial,
    ForeignKey,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexKind::PrimaryKey => write!(f, "primary key"),
            IndexKind::UniqueKey => write!(f, "unique key"),
            IndexKind::Key => write!(f, "key"),
            IndexKind::Fulltext => write!(f, "fulltext key"),
            IndexKind::Spatial => write!(f, "spatial key"),
            IndexKind::ForeignKey => write!(f, "foreign key"),
        }
    }
}

/// Parse a single SQL statement
pub fn parse_statement(sql: &str) -> Result<ParsedStatement, Error> {
    let dialect = MySqlDialect {};
    let mut statements =
        Parser::parse_sql(&dialect, sql).map_err(|e| Error::parse(e.to_string()))?;

    match statements.len() {
        0 => Err(Error::parse("no statement found")),
        1 => Ok(convert_statement(&statements.remove(0))),
        n => Err(Error::parse(format!(
            "expected a single statement, found {}",
            n
        ))),
    }
}

fn convert_statement(stmt: &Statement) -> ParsedStatement {
    match stmt {
        Statement::CreateTable(create) => {
            ParsedStatement::CreateTable(convert_create_table(create))
        }
        other => ParsedStatement::Other {
            kind: statement_kind(other),
        },
    }
}

/// Convert sqlparser's CREATE TABLE into a `CreateTableDef`
fn convert_create_table(create: &sqlparser::ast::CreateTable) -> CreateTableDef {
    let name = create
        .name
        .0
        .last()
        .map(|ident| ident.value.clone())
        .unwrap_or_else(|| create.name.to_string());

    // `CREATE TABLE t AS SELECT ...`, `CREATE TABLE t LIKE s` and friends
    if create.columns.is_empty() {
        return CreateTableDef { name, spec: None };
    }

    let mut spec = TableSpec::default();

    for column in &create.columns {
        let mut col = ColumnSpec {
            name: column.name.value.clone(),
            column_type: ColumnType::from_ast(&column.data_type),
            default: None,
            auto_increment: false,
            not_null: false,
        };

        for option in &column.options {
            match &option.option {
                ColumnOption::Null => col.not_null = false,
                ColumnOption::NotNull => col.not_null = true,
                ColumnOption::Default(expr) => col.default = default_literal(expr),
                ColumnOption::Unique { is_primary, .. } => {
                    let kind = if *is_primary {
                        IndexKind::PrimaryKey
                    } else {
                        IndexKind::UniqueKey
                    };
                    spec.indexes.push(IndexSpec {
                        kind,
                        columns: vec![col.name.clone()],
                    });
                }
                ColumnOption::DialectSpecific(tokens) => {
                    if tokens
                        .iter()
                        .any(|t| t.to_string().eq_ignore_ascii_case("AUTO_INCREMENT"))
                    {
                        col.auto_increment = true;
                    }
                }
                _ => {}
            }
        }

        spec.columns.push(col);
    }

    spec.indexes.extend(create.constraints.iter().filter_map(convert_constraint));

    CreateTableDef {
        name,
        spec: Some(spec),
    }
}

/// Convert a table constraint (PRIMARY KEY, UNIQUE, KEY, ...) into an index clause.
/// Constraints that are not index clauses (CHECK) yield `None`.
fn convert_constraint(constraint: &TableConstraint) -> Option<IndexSpec> {
    let (kind, columns) = match constraint {
        TableConstraint::PrimaryKey { columns, .. } => (IndexKind::PrimaryKey, columns),
        TableConstraint::Unique { columns, .. } => (IndexKind::UniqueKey, columns),
        TableConstraint::Index { columns, .. } => (IndexKind::Key, columns),
        TableConstraint::FulltextOrSpatial {
            fulltext, columns, ..
        } => {
            let kind = if *fulltext {
                IndexKind::Fulltext
            } else {
                IndexKind::Spatial
            };
            (kind, columns)
        }
        TableConstraint::ForeignKey { columns, .. } => (IndexKind::ForeignKey, columns),
        _ => return None,
    };

    Some(IndexSpec {
        kind,
        columns: columns.iter().map(|c| c.value.clone()).collect(),
    })
}

/// Raw text of a DEFAULT expression; string literals lose their quotes and
/// `DEFAULT NULL` means no default
fn default_literal(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Value(Value::Null) => None,
        Expr::Value(Value::SingleQuotedString(s)) | Expr::Value(Value::DoubleQuotedString(s)) => {
            Some(s.clone())
        }
        Expr::Value(Value::Number(n, _)) => Some(n.clone()),
        _ => Some(expr.to_string()),
    }
}

/// Short label for a statement that is not a CREATE TABLE
fn statement_kind(stmt: &Statement) -> String {
    match stmt {
        Statement::Query(_) => "SELECT".to_string(),
        Statement::AlterTable { .. } => "ALTER TABLE".to_string(),
        Statement::CreateView { .. } => "CREATE VIEW".to_string(),
        other => {
            let text = other.to_string();
            let mut words = text.split_whitespace();
            match words.next() {
                Some(first @ ("CREATE" | "DROP" | "ALTER")) => match words.next() {
                    Some(second) => format!("{} {}", first, second),
                    None => first.to_string(),
                },
                Some(first) => first.to_ascii_uppercase(),
                None => "UNKNOWN".to_string(),
            }
        }
    }
}
