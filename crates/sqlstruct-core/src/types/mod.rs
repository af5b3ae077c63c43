//! Column type handling: the SQL side (keyword, length, enum members) and the
//! Go type each SQL keyword maps to

use serde::{Deserialize, Serialize};
use sqlparser::ast::DataType;

/// Sentinel rendered when a SQL type has no Go mapping
pub const UNKNOWN_TYPE: &str = "UNKNOWN_TYPE";

/// A column's declared SQL type, reduced to what the tag renderer needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnType {
    /// Lowercase type keyword (`varchar`, `int`, `enum`, ...)
    pub keyword: String,
    /// Raw size literal, e.g. `255` or `10,2`
    pub length: Option<String>,
    /// Enum members in declaration order (only for `enum`)
    pub enum_values: Vec<String>,
}

impl ColumnType {
    /// Convert from sqlparser's DataType
    ///
    /// Works on the type's SQL rendering so that every dialect-specific
    /// variant (`INT(11) UNSIGNED`, `DOUBLE PRECISION`, `ENUM(...)`) reduces
    /// the same way.
    pub fn from_ast(data_type: &DataType) -> Self {
        Self::from_sql(&data_type.to_string())
    }

    /// Describe a type from its SQL text
    pub fn from_sql(text: &str) -> Self {
        let text = text.trim();
        let keyword_end = text
            .find(|c: char| c == '(' || c.is_whitespace())
            .unwrap_or(text.len());
        let keyword = text[..keyword_end].to_ascii_lowercase();
        let args = parenthesized(&text[keyword_end..]);

        if keyword == "enum" || keyword == "set" {
            let enum_values = args.map(quoted_members).unwrap_or_default();
            return Self {
                keyword,
                length: None,
                enum_values,
            };
        }

        Self {
            keyword,
            length: args
                .map(|a| a.split_whitespace().collect::<String>())
                .filter(|a| !a.is_empty()),
            enum_values: Vec::new(),
        }
    }
}

/// Return the contents of the first parenthesized group, if the text (after
/// optional whitespace) starts with one
fn parenthesized(rest: &str) -> Option<&str> {
    let rest = rest.trim_start();
    let inner = rest.strip_prefix('(')?;

    // Skip over quoted strings so `ENUM('a)')` stays intact
    let mut in_quote = false;
    let mut chars = inner.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '\'' if in_quote => {
                if matches!(chars.peek(), Some((_, '\''))) {
                    chars.next();
                } else {
                    in_quote = false;
                }
            }
            '\'' => in_quote = true,
            ')' if !in_quote => return Some(&inner[..i]),
            _ => {}
        }
    }
    None
}

/// Collect single-quoted members from an enum argument list
fn quoted_members(args: &str) -> Vec<String> {
    let mut members = Vec::new();
    let mut chars = args.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\'' {
            continue;
        }
        let mut member = String::new();
        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    member.push('\'');
                } else {
                    break;
                }
            } else {
                member.push(c);
            }
        }
        members.push(member);
    }

    members
}

/// Go type of a generated struct field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoType {
    String,
    Int64,
    Int,
    Float64,
    Time,
    Bytes,
    Unknown,
}

impl GoType {
    /// Map a lowercase SQL type keyword to its Go type
    pub fn from_sql_type(sql_type: &str) -> Self {
        match sql_type {
            "varchar" | "text" | "enum" => GoType::String,
            "int" => GoType::Int64,
            "tinyint" => GoType::Int,
            "double" | "float" => GoType::Float64,
            "date" | "datetime" | "time" | "timestamp" => GoType::Time,
            "blob" => GoType::Bytes,
            _ => GoType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoType::String => "string",
            GoType::Int64 => "int64",
            GoType::Int => "int",
            GoType::Float64 => "float64",
            GoType::Time => "time.Time",
            GoType::Bytes => "[]byte",
            GoType::Unknown => UNKNOWN_TYPE,
        }
    }

    pub fn is_known(&self) -> bool {
        *self != GoType::Unknown
    }
}

impl std::fmt::Display for GoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
