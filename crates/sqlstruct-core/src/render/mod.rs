//! Struct rendering - turns a `Table` into a Go struct with ORM field tags

mod tags;

use tracing::debug;

use crate::dialect::TagDialect;
use crate::schema::{Column, Table};
use crate::types::GoType;

pub use tags::{bare_tag, type_prefixed_tag};

/// Renderer for one tag dialect
#[derive(Debug, Clone, Copy, Default)]
pub struct StructRenderer {
    dialect: TagDialect,
}

impl StructRenderer {
    pub fn new(dialect: TagDialect) -> Self {
        Self { dialect }
    }

    /// Render the struct declaration; field order follows column order
    pub fn render(&self, table: &Table) -> String {
        let mut out = format!("type {} struct {{\n", title_case(&table.name));
        for column in &table.columns {
            self.render_field(&mut out, column);
        }
        out.push_str("}\n");
        out
    }

    fn render_field(&self, out: &mut String, column: &Column) {
        let go_type = GoType::from_sql_type(&column.sql_type);
        if !go_type.is_known() {
            debug!(column = %column.name, sql_type = %column.sql_type, "no Go type for SQL type");
        }

        let tag = match self.dialect {
            TagDialect::Bare => bare_tag(column),
            TagDialect::TypePrefixed => type_prefixed_tag(column),
        };

        out.push_str(&format!(
            "\t{} {} `{}:\"{}\"`\n",
            title_case(&column.name),
            go_type,
            self.dialect.tag_key(),
            tag
        ));
    }
}

/// Render a table with the given tag dialect
pub fn render(table: &Table, dialect: TagDialect) -> String {
    StructRenderer::new(dialect).render(table)
}

/// Render a table with bare (`xorm`) tags
pub fn render_bare(table: &Table) -> String {
    render(table, TagDialect::Bare)
}

/// Render a table with type-prefixed (`gorm`) tags
pub fn render_type_prefixed(table: &Table) -> String {
    render(table, TagDialect::TypePrefixed)
}

/// Upper-case the first character (ASCII only)
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
